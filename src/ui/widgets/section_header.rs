//! Section header widget
//!
//! Displays a section title with an item count badge.
//! This is a reusable widget that does not depend on application-specific types.

use iced::widget::{Space, container, row, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::ui::theme::{self, BOLD_WEIGHT};

/// Create a section header element
///
/// # Arguments
/// * `title` - The section title text
/// * `count` - Number shown in the badge next to the title
pub fn view<'a, Message: 'a>(title: &'a str, count: usize) -> Element<'a, Message> {
    let title_text = text(title)
        .size(22)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        })
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        });

    let badge = container(text(count.to_string()).size(12).color(iced::Color::WHITE))
        .padding(Padding::new(2.0).left(8.0).right(8.0))
        .style(|_theme| container::Style {
            background: Some(iced::Background::Color(theme::ACCENT)),
            border: iced::Border {
                radius: 10.0.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    row![title_text, Space::new().width(10), badge, Space::new().width(Fill)]
        .align_y(Alignment::Center)
        .into()
}
