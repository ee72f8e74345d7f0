//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::features::{Settings, users};
pub use message::Message;
pub use state::{App, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        tracing::info!(
            "Loaded settings (dark mode: {}, avatar shape: {:?})",
            settings.display.dark_mode,
            settings.avatar.shape
        );

        (Self::with_settings(settings), Task::none())
    }

    /// Application state with the demo roster and the given settings
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            users: users::demo_users(),
            ui: UiState::default(),
        }
    }

    pub fn theme(&self) -> Theme {
        if self.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn title(&self) -> String {
        format!("TextDrawable - {} contacts", self.users.len())
    }
}
