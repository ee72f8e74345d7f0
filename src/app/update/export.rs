//! PNG export handlers

use std::time::Duration;

use iced::Task;

use crate::app::helpers;
use crate::app::message::Message;
use crate::app::state::App;
use crate::ui::widgets::Toast;

/// How long the export result stays on screen
const TOAST_DURATION: Duration = Duration::from_secs(4);

impl App {
    pub fn handle_export(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ExportAvatars => {
                if self.ui.exporting {
                    return Some(Task::none());
                }
                self.ui.exporting = true;
                self.ui.show_toast(Toast::info("Exporting avatars…"));

                let dir = self.settings.export.resolved_directory();
                tracing::info!("Exporting {} avatars to {:?}", self.users.len(), dir);
                Some(Task::perform(
                    helpers::export_avatars(self.users.clone(), self.settings.avatar.clone(), dir),
                    |result| Message::ExportFinished(result.map_err(|e| format!("{:#}", e))),
                ))
            }
            Message::ExportFinished(result) => {
                self.ui.exporting = false;
                let generation = self.ui.show_toast(match result {
                    Ok((count, dir)) => {
                        Toast::success(format!("Exported {} avatars to {}", count, dir.display()))
                    }
                    Err(e) => {
                        tracing::error!("Avatar export failed: {}", e);
                        Toast::error(format!("Export failed: {}", e))
                    }
                });
                Some(Task::perform(
                    async { tokio::time::sleep(TOAST_DURATION).await },
                    move |_| Message::DismissToast(generation),
                ))
            }
            Message::DismissToast(generation) => {
                self.ui.dismiss_toast(*generation);
                Some(Task::none())
            }
            _ => None,
        }
    }
}
