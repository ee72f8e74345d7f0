//! PNG export of list avatars

use std::path::{Path, PathBuf};

use anyhow::Context;

use super::avatar::raster;
use super::settings::AvatarSettings;
use super::users::User;

/// Render one avatar per user into `dir`.
///
/// Returns the number of files written. Text is only rasterized when a font
/// file is configured for the selected family; a font file that cannot be
/// loaded is an error.
pub fn export_avatars(users: &[User], style: &AvatarSettings, dir: &Path) -> anyhow::Result<usize> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {}", dir.display()))?;

    let font = style.font_path().map(raster::load_font).transpose()?;
    if font.is_none() {
        tracing::warn!(
            "No font file configured for {}, exported avatars will have no text",
            style.font
        );
    }

    for user in users {
        let drawable = style.drawable(&user.name);
        let image = raster::render(&drawable, style.size, style.size, font.clone());
        let path = dir.join(file_name(user));
        image
            .save(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!("Exported avatar for {} to {:?}", user.name, path);
    }

    tracing::info!("Exported {} avatars to {}", users.len(), dir.display());
    Ok(users.len())
}

/// `<id>-<slug>.png`, e.g. `6-nathan-brown-jille.png`
pub fn file_name(user: &User) -> PathBuf {
    let mut slug = String::with_capacity(user.name.len());
    for c in user.name.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');

    if slug.is_empty() {
        PathBuf::from(format!("{}.png", user.id))
    } else {
        PathBuf::from(format!("{}-{}.png", user.id, slug))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::avatar::AvatarFont;
    use crate::features::users::demo_users;

    fn fixture_font() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/fonts/DejaVuSansMono.ttf")
    }

    /// Pixels of the first exported avatar bright enough to be white text
    /// on the blue accent
    fn text_pixels(dir: &Path) -> usize {
        let image = image::open(dir.join("1-alice-johnson.png")).unwrap().to_rgba8();
        image.pixels().filter(|p| p.0[0] > 128).count()
    }

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("textdrawable-export-{}-{}", name, std::process::id()))
    }

    #[test]
    fn test_file_name_slug() {
        assert_eq!(
            file_name(&User::new(6, "Nathan Brown Jille", "")),
            PathBuf::from("6-nathan-brown-jille.png")
        );
        assert_eq!(
            file_name(&User::new(2, "  O'Brien,  Pat ", "")),
            PathBuf::from("2-o-brien-pat.png")
        );
        assert_eq!(file_name(&User::new(3, "   ", "")), PathBuf::from("3.png"));
    }

    #[test]
    fn test_export_writes_one_png_per_user() {
        let dir = temp_dir("all");
        let users = demo_users();
        let style = AvatarSettings {
            size: 24,
            ..Default::default()
        };

        let written = export_avatars(&users, &style, &dir).unwrap();
        assert_eq!(written, users.len());

        let image = image::open(dir.join("1-alice-johnson.png")).unwrap().to_rgba8();
        assert_eq!(image.dimensions(), (24, 24));
        // Circle: transparent corner, accent center
        assert_eq!(image.get_pixel(0, 0).0[3], 0);
        assert_eq!(image.get_pixel(12, 12).0, [0, 0, 255, 255]);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_export_draws_text_with_font_file() {
        let dir = temp_dir("with-font");
        let style = AvatarSettings {
            size: 64,
            font_file: Some(fixture_font()),
            ..Default::default()
        };

        export_avatars(&demo_users(), &style, &dir).unwrap();
        assert!(text_pixels(&dir) > 20);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_export_uses_font_of_selected_family() {
        let dir = temp_dir("family-font");
        let mut style = AvatarSettings {
            size: 64,
            font: AvatarFont::Monospace,
            ..Default::default()
        };
        style.font_files.insert(AvatarFont::Monospace, fixture_font());

        export_avatars(&demo_users()[..1], &style, &dir).unwrap();
        assert!(text_pixels(&dir) > 20);

        // No file for sans-serif and no fallback: shapes only
        style.font = AvatarFont::SansSerif;
        export_avatars(&demo_users()[..1], &style, &dir).unwrap();
        assert_eq!(text_pixels(&dir), 0);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_export_fails_on_unreadable_font() {
        let dir = temp_dir("bad-font");
        let style = AvatarSettings {
            font_file: Some(dir.join("missing.ttf")),
            ..Default::default()
        };

        assert!(export_avatars(&demo_users(), &style, &dir).is_err());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
