//! Application view rendering

use iced::widget::{column, container, stack};
use iced::{Alignment, Element, Fill, Padding};

use super::App;
use super::message::Message;
use crate::ui::components::{self, UserAdapter};
use crate::ui::{theme, widgets};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let adapter = UserAdapter::new(&self.users, &self.settings.avatar);

        let content = column![
            components::toolbar::view(&self.settings, adapter.item_count(), self.ui.exporting),
            components::user_list::view(&adapter),
        ];

        let base = container(content)
            .width(Fill)
            .height(Fill)
            .style(theme::main_content);

        match &self.ui.toast {
            Some(toast) => stack![
                base,
                container(widgets::view_toast(toast))
                    .width(Fill)
                    .height(Fill)
                    .align_x(Alignment::Center)
                    .align_y(Alignment::End)
                    .padding(Padding::new(24.0)),
            ]
            .into(),
            None => base.into(),
        }
    }
}
