//! Feature modules - business logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod avatar;
pub mod export;
pub mod settings;
pub mod users;

pub use settings::{AvatarSettings, AvatarShape, Settings};
pub use users::User;
