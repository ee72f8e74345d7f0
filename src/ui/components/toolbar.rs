//! Toolbar above the user list
//!
//! Title with user count, avatar style controls and the PNG export button.

use iced::widget::{Space, button, checkbox, column, container, pick_list, row, slider, text, toggler};
use iced::{Alignment, Element, Fill, Length, Padding};

use crate::app::Message;
use crate::features::avatar::AvatarFont;
use crate::features::{AvatarShape, Settings};
use crate::ui::theme;
use crate::ui::widgets::section_header;

/// Largest border selectable from the toolbar
const MAX_BORDER: u32 = 8;

/// Build the toolbar
pub fn view<'a>(settings: &Settings, user_count: usize, exporting: bool) -> Element<'a, Message> {
    let avatar = &settings.avatar;

    let shape_picker = pick_list(
        AvatarShape::all().to_vec(),
        Some(avatar.shape),
        Message::ShapeSelected,
    )
    .style(theme::toolbar_pick_list)
    .padding([6, 10]);

    let font_picker = pick_list(
        AvatarFont::all().to_vec(),
        Some(avatar.font),
        Message::FontSelected,
    )
    .style(theme::toolbar_pick_list)
    .padding([6, 10]);

    let bold = checkbox(avatar.bold)
        .label("Bold")
        .on_toggle(Message::BoldToggled)
        .text_size(13)
        .spacing(6);

    let uppercase = checkbox(avatar.uppercase)
        .label("Uppercase")
        .on_toggle(Message::UppercaseToggled)
        .text_size(13)
        .spacing(6);

    let border = row![
        label(format!("Border {}px", avatar.border_thickness)),
        Space::new().width(8),
        slider(0..=MAX_BORDER, avatar.border_thickness, Message::BorderChanged)
            .step(1u32)
            .width(Length::Fixed(100.0)),
    ]
    .align_y(Alignment::Center);

    let dark_mode = row![
        label("Dark".to_string()),
        Space::new().width(6),
        toggler(settings.display.dark_mode)
            .on_toggle(Message::DarkModeToggled)
            .size(20),
    ]
    .align_y(Alignment::Center);

    let export = button(text(if exporting { "Exporting…" } else { "Export PNG" }).size(13))
        .padding([6, 16])
        .style(theme::primary_button)
        .on_press_maybe((!exporting).then_some(Message::ExportAvatars));

    let header = row![
        section_header::view("Contacts", user_count),
        dark_mode,
        Space::new().width(16),
        export,
    ]
    .align_y(Alignment::Center);

    let controls = row![
        shape_picker,
        font_picker,
        bold,
        uppercase,
        border,
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    container(column![header, controls].spacing(12))
        .padding(Padding::new(16.0))
        .width(Fill)
        .style(theme::header_bar)
        .into()
}

fn label<'a>(content: String) -> Element<'a, Message> {
    text(content)
        .size(13)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        })
        .into()
}
