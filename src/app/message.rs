//! Application messages

use std::path::PathBuf;

use crate::features::AvatarShape;
use crate::features::avatar::AvatarFont;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Settings ============
    /// Switch between dark and light theme
    DarkModeToggled(bool),
    /// Avatar outline changed
    ShapeSelected(AvatarShape),
    /// Avatar font family changed
    FontSelected(AvatarFont),
    BoldToggled(bool),
    UppercaseToggled(bool),
    /// Border thickness in pixels
    BorderChanged(u32),
    /// Save settings
    SaveSettings,

    // ============ Export ============
    /// Write every avatar as PNG
    ExportAvatars,
    /// Export finished with the file count and directory, or an error
    ExportFinished(Result<(usize, PathBuf), String>),
    /// Hide the status toast if it is still the one with this generation
    DismissToast(u64),
}
