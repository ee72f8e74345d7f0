//! Settings update handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle avatar style and display messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::DarkModeToggled(enabled) => {
                self.settings.display.dark_mode = *enabled;
            }
            Message::ShapeSelected(shape) => {
                self.settings.avatar.shape = *shape;
                tracing::debug!("Avatar shape changed to: {:?}", shape);
            }
            Message::FontSelected(font) => {
                self.settings.avatar.font = *font;
            }
            Message::BoldToggled(bold) => {
                self.settings.avatar.bold = *bold;
            }
            Message::UppercaseToggled(uppercase) => {
                self.settings.avatar.uppercase = *uppercase;
            }
            Message::BorderChanged(thickness) => {
                self.settings.avatar.border_thickness = *thickness;
            }
            Message::SaveSettings => {
                if let Err(e) = self.settings.save() {
                    tracing::error!("Failed to save settings: {}", e);
                } else {
                    tracing::info!("Settings saved successfully");
                }
                return Some(Task::none());
            }
            _ => return None,
        }
        Some(Task::done(Message::SaveSettings))
    }
}
