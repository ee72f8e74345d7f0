//! Application state definitions

use crate::features::{Settings, User};
use crate::ui::widgets::Toast;

/// Main application state
pub struct App {
    /// Persisted user preferences
    pub settings: Settings,
    /// Roster shown in the list, fixed for the process lifetime
    pub users: Vec<User>,
    /// Transient UI state
    pub ui: UiState,
}

/// UI state
#[derive(Debug, Default)]
pub struct UiState {
    /// An export task is running
    pub exporting: bool,
    /// Status message shown at the bottom
    pub toast: Option<Toast>,
    /// Bumped whenever a toast is shown, so stale dismiss timers are ignored
    pub toast_generation: u64,
}

impl UiState {
    /// Replace the current toast, returning its generation
    pub fn show_toast(&mut self, toast: Toast) -> u64 {
        self.toast_generation = self.toast_generation.wrapping_add(1);
        self.toast = Some(toast);
        self.toast_generation
    }

    /// Hide the toast unless a newer one replaced it
    pub fn dismiss_toast(&mut self, generation: u64) {
        if generation == self.toast_generation {
            self.toast = None;
        }
    }
}
