//! Application settings persistence
//!
//! Handles saving and loading user preferences.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::avatar::{Argb, AvatarDrawable, AvatarFont};

/// Outline used for list avatars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AvatarShape {
    Rect,
    RoundRect,
    /// Circle
    #[default]
    Round,
}

impl AvatarShape {
    /// Get all shape options
    pub fn all() -> &'static [AvatarShape] {
        &[AvatarShape::Rect, AvatarShape::RoundRect, AvatarShape::Round]
    }
}

impl std::fmt::Display for AvatarShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AvatarShape::Rect => write!(f, "Square"),
            AvatarShape::RoundRect => write!(f, "Rounded"),
            AvatarShape::Round => write!(f, "Circle"),
        }
    }
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Display and interface settings
    pub display: DisplaySettings,
    /// How list avatars are drawn
    pub avatar: AvatarSettings,
    /// PNG export settings
    pub export: ExportSettings,
}

/// Display-related settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub dark_mode: bool,
}

/// Avatar style shared by the list and the PNG export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarSettings {
    /// Avatar edge length in pixels
    pub size: u32,
    pub text_color: Argb,
    /// Background of every avatar
    pub accent_color: Argb,
    /// Border width in pixels, 0 disables the border
    pub border_thickness: u32,
    /// Font size in pixels, `None` for half the avatar size
    pub font_size: Option<u32>,
    pub font: AvatarFont,
    pub bold: bool,
    pub uppercase: bool,
    pub shape: AvatarShape,
    /// Corner radius for [`AvatarShape::RoundRect`]
    pub corner_radius: u32,
    /// Font file per family used when rasterizing text for export
    pub font_files: HashMap<AvatarFont, PathBuf>,
    /// Fallback for families missing from `font_files`
    pub font_file: Option<PathBuf>,
}

/// PNG export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExportSettings {
    /// Target directory, `None` for the data directory
    pub directory: Option<PathBuf>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

impl Default for AvatarSettings {
    fn default() -> Self {
        Self {
            size: 100,
            text_color: Argb::WHITE,
            accent_color: Argb::BLUE,
            border_thickness: 2,
            font_size: Some(30),
            font: AvatarFont::SansSerif,
            bold: true,
            uppercase: true,
            shape: AvatarShape::Round,
            corner_radius: 16,
            font_files: HashMap::new(),
            font_file: None,
        }
    }
}

impl AvatarSettings {
    /// Font file for the selected family, if any is configured
    pub fn font_path(&self) -> Option<&Path> {
        self.font_files
            .get(&self.font)
            .or(self.font_file.as_ref())
            .map(PathBuf::as_path)
    }

    /// Build a fresh drawable for `name` with this style
    pub fn drawable(&self, name: &str) -> AvatarDrawable {
        let mut config = AvatarDrawable::builder()
            .begin_config()
            .width(self.size)
            .height(self.size)
            .text_color(self.text_color)
            .with_border(self.border_thickness)
            .use_font(self.font);
        if let Some(size) = self.font_size {
            config = config.font_size(size);
        }
        if self.bold {
            config = config.bold();
        }
        if self.uppercase {
            config = config.to_upper_case();
        }

        let shapes = config.end_config();
        match self.shape {
            AvatarShape::Rect => shapes.build_rect(name, self.accent_color),
            AvatarShape::RoundRect => {
                shapes.build_round_rect(name, self.accent_color, self.corner_radius)
            }
            AvatarShape::Round => shapes.build_round(name, self.accent_color),
        }
    }
}

impl ExportSettings {
    /// Directory exported avatars are written to
    pub fn resolved_directory(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(|| {
            directories::ProjectDirs::from("com", "textdrawable", "TextDrawable")
                .map(|dirs| dirs.data_dir().join("avatars"))
                .unwrap_or_else(|| PathBuf::from("avatars"))
        })
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "textdrawable", "TextDrawable")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| match Self::load_from_file(&path) {
                Ok(settings) => Some(settings),
                Err(e) => {
                    tracing::debug!("Using default settings ({}): {}", path.display(), e);
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::avatar::Shape;

    fn temp_settings_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("textdrawable-test-{}-{}", name, std::process::id()))
            .join("settings.json")
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = temp_settings_path("round-trip");
        let mut settings = Settings::default();
        settings.display.dark_mode = false;
        settings.avatar.shape = AvatarShape::RoundRect;
        settings.avatar.accent_color = Argb::rgb(0x12, 0x34, 0x56);
        settings.avatar.font_size = None;

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings =
            serde_json::from_str(r##"{ "avatar": { "accent_color": "#FF0000" } }"##).unwrap();
        assert_eq!(settings.avatar.accent_color, Argb::rgb(0xff, 0, 0));
        assert_eq!(settings.avatar.size, 100);
        assert_eq!(settings.display, DisplaySettings::default());
    }

    #[test]
    fn test_invalid_color_is_parse_error() {
        let path = temp_settings_path("invalid-color");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{ "avatar": { "text_color": "white" } }"#).unwrap();

        let result = Settings::load_from_file(&path);
        assert!(matches!(result, Err(SettingsError::Parse(_))));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_font_path_follows_selected_family() {
        let mut avatar = AvatarSettings::default();
        assert_eq!(avatar.font_path(), None);

        avatar.font_file = Some(PathBuf::from("/fonts/sans.ttf"));
        avatar
            .font_files
            .insert(AvatarFont::Monospace, PathBuf::from("/fonts/mono.ttf"));
        assert_eq!(avatar.font_path(), Some(Path::new("/fonts/sans.ttf")));

        avatar.font = AvatarFont::Monospace;
        assert_eq!(avatar.font_path(), Some(Path::new("/fonts/mono.ttf")));
    }

    #[test]
    fn test_font_files_keyed_by_family_name() {
        let settings: Settings = serde_json::from_str(
            r#"{ "avatar": { "font": "serif", "font_files": { "serif": "/fonts/serif.ttf" } } }"#,
        )
        .unwrap();
        assert_eq!(
            settings.avatar.font_path(),
            Some(Path::new("/fonts/serif.ttf"))
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = temp_settings_path("missing");
        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Io(_))
        ));
    }

    #[test]
    fn test_default_avatar_matches_list_style() {
        let drawable = AvatarSettings::default().drawable("Alice Johnson");
        let config = drawable.config();

        assert_eq!(drawable.text(), "AJ");
        assert_eq!(config.width, Some(100));
        assert_eq!(config.height, Some(100));
        assert_eq!(config.text_color, Argb::WHITE);
        assert_eq!(config.border_thickness, 2);
        assert_eq!(config.font_size, Some(30));
        assert!(config.bold);
        assert!(config.uppercase);
        assert_eq!(config.shape, Shape::Oval);
        assert_eq!(config.background_color, Argb::BLUE);
    }

    #[test]
    fn test_avatar_shape_selection() {
        let mut avatar = AvatarSettings {
            shape: AvatarShape::RoundRect,
            corner_radius: 9,
            font_size: None,
            uppercase: false,
            ..Default::default()
        };
        let drawable = avatar.drawable("ross");
        assert_eq!(drawable.config().shape, Shape::RoundRect { radius: 9.0 });
        assert_eq!(drawable.config().font_size, None);
        assert_eq!(drawable.text(), "ro");

        avatar.shape = AvatarShape::Rect;
        assert_eq!(avatar.drawable("ross").config().shape, Shape::Rect);
    }

    #[test]
    fn test_export_directory_override() {
        let export = ExportSettings {
            directory: Some(PathBuf::from("/tmp/avatars")),
        };
        assert_eq!(export.resolved_directory(), PathBuf::from("/tmp/avatars"));
    }
}
