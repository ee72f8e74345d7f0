//! User list component
//!
//! Binds the roster to rows the way a list adapter does: each row gets the
//! user's name, an `ID: n` label and a freshly built initials avatar.

use iced::widget::{Space, column, container, row, scrollable, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::features::avatar::AvatarDrawable;
use crate::features::{AvatarSettings, User};
use crate::ui::primitives::avatar;
use crate::ui::theme::{self, MEDIUM_WEIGHT};

const ROW_SPACING: f32 = 8.0;

/// Data bound to one row
#[derive(Debug, Clone, PartialEq)]
pub struct UserRow {
    pub name: String,
    pub id_label: String,
    pub avatar: AvatarDrawable,
}

/// Adapter from users to rows
pub struct UserAdapter<'a> {
    users: &'a [User],
    style: &'a AvatarSettings,
}

impl<'a> UserAdapter<'a> {
    pub fn new(users: &'a [User], style: &'a AvatarSettings) -> Self {
        Self { users, style }
    }

    pub fn item_count(&self) -> usize {
        self.users.len()
    }

    /// Bind the user at `position`, building a new avatar each call
    pub fn bind(&self, position: usize) -> Option<UserRow> {
        let user = self.users.get(position)?;
        Some(UserRow {
            name: user.name.clone(),
            id_label: user.id_label(),
            avatar: self.style.drawable(&user.name),
        })
    }
}

/// Build the scrollable user list
pub fn view<'a>(adapter: &UserAdapter<'_>) -> Element<'a, Message> {
    let avatar_size = adapter.style.size as f32;
    let rows: Vec<Element<'a, Message>> = (0..adapter.item_count())
        .filter_map(|position| adapter.bind(position))
        .map(|user_row| view_row(user_row, avatar_size))
        .collect();

    scrollable(
        column(rows)
            .spacing(ROW_SPACING)
            .padding(Padding::new(16.0).right(20.0)),
    )
    .style(theme::list_scrollable)
    .width(Fill)
    .height(Fill)
    .into()
}

fn view_row<'a>(user_row: UserRow, avatar_size: f32) -> Element<'a, Message> {
    let UserRow {
        name,
        id_label,
        avatar: drawable,
    } = user_row;

    let name_text = text(name)
        .size(16)
        .font(iced::Font {
            weight: MEDIUM_WEIGHT,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let id_text = text(id_label).size(12).style(|theme| text::Style {
        color: Some(theme::text_secondary(theme)),
    });

    container(
        row![
            avatar::view(drawable, avatar_size),
            Space::new().width(16),
            column![name_text, id_text].spacing(4),
        ]
        .align_y(Alignment::Center),
    )
    .padding(12)
    .width(Fill)
    .style(theme::user_row)
    .into()
}
