//! User records shown in the contact list

/// A contact entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: String,
    /// Placeholder, avatars are always generated
    pub avatar_url: String,
}

impl User {
    pub fn new(id: u32, name: impl Into<String>, avatar_url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            avatar_url: avatar_url.into(),
        }
    }

    /// Label shown under the name
    pub fn id_label(&self) -> String {
        format!("ID: {}", self.id)
    }
}

const DEMO_NAMES: [&str; 12] = [
    "Alice Johnson",
    "Bob Smith",
    "Charlie Ray",
    "Dana White",
    "Ethan Brown",
    "Nathan Brown Jille",
    "Brown Taylor",
    "Ross",
    "Chapman Blue",
    "Mark Wood",
    "Maddy Green",
    "Louis Phil",
];

/// Static demo roster, ids starting at 1
pub fn demo_users() -> Vec<User> {
    DEMO_NAMES
        .iter()
        .zip(1..)
        .map(|(name, id)| User::new(id, *name, ""))
        .collect()
}
