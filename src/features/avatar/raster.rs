//! Software rasterizer for avatars
//!
//! Implements [`Surface`] on an RGBA image so avatars can be rendered without
//! a window, e.g. for PNG export. Shapes are anti-aliased from their signed
//! distance; text is rasterized with `ab_glyph` from a font file.

use std::path::Path;

use ab_glyph::{Font, FontArc, GlyphId, PxScale, ScaleFont, point};
use anyhow::Context;
use iced::{Point, Rectangle, Vector};
use image::RgbaImage;

use super::surface::{Shape, Surface, TextMetrics, TextStyle};
use super::{Argb, AvatarDrawable};

/// Divisor of the font size for the fake bold offset
const FAKE_BOLD_DIVISOR: f32 = 24.0;

/// Load a TrueType/OpenType font for text rasterization
pub fn load_font(path: &Path) -> anyhow::Result<FontArc> {
    let data =
        std::fs::read(path).with_context(|| format!("Failed to read font {}", path.display()))?;
    FontArc::try_from_vec(data).with_context(|| format!("Invalid font file {}", path.display()))
}

/// Render `drawable` into a new `width` x `height` image
pub fn render(
    drawable: &AvatarDrawable,
    width: u32,
    height: u32,
    font: Option<FontArc>,
) -> RgbaImage {
    let mut surface = RasterSurface::new(width, height);
    if let Some(font) = font {
        surface = surface.with_font(font);
    }
    drawable.draw(
        &mut surface,
        Rectangle::new(Point::ORIGIN, iced::Size::new(width as f32, height as f32)),
    );
    surface.into_image()
}

/// RGBA image surface
pub struct RasterSurface {
    image: RgbaImage,
    font: Option<FontArc>,
}

impl RasterSurface {
    /// Fully transparent surface without a font
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            font: None,
        }
    }

    pub fn with_font(mut self, font: FontArc) -> Self {
        self.font = Some(font);
        self
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Pixel scale whose em size equals `size` pixels
    fn px_scale(font: &FontArc, size: f32) -> PxScale {
        let height = font.height_unscaled();
        let units_per_em = font.units_per_em().unwrap_or(height);
        PxScale::from(size * height / units_per_em)
    }

    /// Blend `color` over every pixel near `bounds`, weighted by the
    /// coverage computed from the pixel's signed distance to `shape`
    fn paint_shape(
        &mut self,
        shape: Shape,
        bounds: Rectangle,
        margin: f32,
        color: Argb,
        coverage: impl Fn(f32) -> f32,
    ) {
        let (img_w, img_h) = self.image.dimensions();
        let x0 = (bounds.x - margin).floor().max(0.0) as u32;
        let y0 = (bounds.y - margin).floor().max(0.0) as u32;
        let x1 = ((bounds.x + bounds.width + margin).ceil().max(0.0) as u32).min(img_w);
        let y1 = ((bounds.y + bounds.height + margin).ceil().max(0.0) as u32).min(img_h);

        let center = bounds.center();
        let half = Vector::new(bounds.width / 2.0, bounds.height / 2.0);

        for y in y0..y1 {
            for x in x0..x1 {
                let p = Vector::new(x as f32 + 0.5 - center.x, y as f32 + 0.5 - center.y);
                let alpha = coverage(signed_distance(shape, p, half));
                if alpha > 0.0 {
                    blend(&mut self.image, x, y, color, alpha);
                }
            }
        }
    }
}

impl Surface for RasterSurface {
    fn fill_shape(&mut self, shape: Shape, bounds: Rectangle, color: Argb) {
        self.paint_shape(shape, bounds, 1.0, color, |d| (0.5 - d).clamp(0.0, 1.0));
    }

    fn stroke_shape(&mut self, shape: Shape, bounds: Rectangle, color: Argb, width: f32) {
        let half_width = width / 2.0;
        self.paint_shape(shape, bounds, half_width + 1.0, color, |d| {
            (0.5 - (d.abs() - half_width)).clamp(0.0, 1.0)
        });
    }

    fn text_metrics(&self, style: &TextStyle) -> TextMetrics {
        match &self.font {
            Some(font) => {
                let scaled = font.as_scaled(Self::px_scale(font, style.size));
                TextMetrics {
                    ascent: -scaled.ascent(),
                    descent: -scaled.descent(),
                }
            }
            None => TextMetrics::approximate(style.size),
        }
    }

    fn fill_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        let Some(font) = self.font.clone() else {
            tracing::warn!("No font loaded, skipping avatar text '{}'", text);
            return;
        };

        let scale = Self::px_scale(&font, style.size);
        let scaled = font.as_scaled(scale);

        // Lay out along the baseline starting at x = 0
        let mut caret = 0.0;
        let mut previous: Option<GlyphId> = None;
        let mut glyphs = Vec::with_capacity(text.len());
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            glyphs.push((id, caret));
            caret += scaled.h_advance(id);
            previous = Some(id);
        }

        let start_x = origin.x - caret / 2.0;
        // One font file per family, so bold faces are emboldened with a
        // second, slightly shifted pass
        let offsets = [0.0, (style.size / FAKE_BOLD_DIVISOR).max(1.0)];
        let passes = if style.is_heavy() { &offsets[..] } else { &offsets[..1] };

        for &offset in passes {
            for &(id, x) in &glyphs {
                let glyph = id.with_scale_and_position(scale, point(start_x + x + offset, origin.y));
                let Some(outlined) = font.outline_glyph(glyph) else {
                    continue;
                };
                let px_bounds = outlined.px_bounds();
                let (img_w, img_h) = self.image.dimensions();
                outlined.draw(|gx, gy, coverage| {
                    let x = px_bounds.min.x as i64 + gx as i64;
                    let y = px_bounds.min.y as i64 + gy as i64;
                    if x >= 0 && y >= 0 && (x as u32) < img_w && (y as u32) < img_h {
                        blend(&mut self.image, x as u32, y as u32, style.color, coverage);
                    }
                });
            }
        }
    }
}

/// Signed distance from `p` (relative to the shape center) to the outline of
/// `shape` with half extents `half`. Negative inside.
fn signed_distance(shape: Shape, p: Vector, half: Vector) -> f32 {
    match shape {
        Shape::Rect => rounded_box_distance(p, half, 0.0),
        Shape::RoundRect { radius } => {
            rounded_box_distance(p, half, radius.min(half.x).min(half.y).max(0.0))
        }
        Shape::Oval => ellipse_distance(p, half),
    }
}

fn rounded_box_distance(p: Vector, half: Vector, radius: f32) -> f32 {
    let qx = p.x.abs() - half.x + radius;
    let qy = p.y.abs() - half.y + radius;
    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    outside + qx.max(qy).min(0.0) - radius
}

/// First-order distance estimate to an axis-aligned ellipse
fn ellipse_distance(p: Vector, radii: Vector) -> f32 {
    if radii.x <= 0.0 || radii.y <= 0.0 {
        return f32::INFINITY;
    }
    let k0 = ((p.x / radii.x).powi(2) + (p.y / radii.y).powi(2)).sqrt();
    let k1 = ((p.x / (radii.x * radii.x)).powi(2) + (p.y / (radii.y * radii.y)).powi(2)).sqrt();
    if k1 == 0.0 {
        return -radii.x.min(radii.y);
    }
    k0 * (k0 - 1.0) / k1
}

/// Source-over blend of `color` at `coverage` onto pixel (x, y)
fn blend(image: &mut RgbaImage, x: u32, y: u32, color: Argb, coverage: f32) {
    let src_a = color.a as f32 / 255.0 * coverage.clamp(0.0, 1.0);
    if src_a <= 0.0 {
        return;
    }

    let pixel = image.get_pixel_mut(x, y);
    let [dr, dg, db, da] = pixel.0;
    let dst_a = da as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a <= 0.0 {
        return;
    }

    let mix = |src: u8, dst: u8| {
        let value = (src as f32 * src_a + dst as f32 * dst_a * (1.0 - src_a)) / out_a;
        value.round().clamp(0.0, 255.0) as u8
    };
    pixel.0 = [
        mix(color.r, dr),
        mix(color.g, dg),
        mix(color.b, db),
        (out_a * 255.0).round() as u8,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::avatar::{AvatarFont, FontWeight};

    const TEST_FONT: &[u8] = include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/fonts/DejaVuSansMono.ttf"
    ));

    fn test_font() -> FontArc {
        FontArc::try_from_slice(TEST_FONT).unwrap()
    }

    /// White text on a black square, `size` 30, regular weight unless `bold`
    fn render_text(text: &str, bold: bool) -> RgbaImage {
        let mut config = AvatarDrawable::builder()
            .begin_config()
            .width(100)
            .height(100)
            .font_size(30)
            .text_color(Argb::WHITE)
            .use_font(AvatarFont::Monospace);
        if bold {
            config = config.bold();
        }
        let drawable = config.end_config().build_rect(text, Argb::BLACK);
        render(&drawable, 100, 100, Some(test_font()))
    }

    /// Ink pixel count and red-weighted centroid
    fn ink(image: &RgbaImage) -> (usize, f32, f32) {
        let (mut count, mut total, mut sx, mut sy) = (0, 0.0, 0.0, 0.0);
        for (x, y, pixel) in image.enumerate_pixels() {
            let weight = pixel.0[0] as f32;
            if weight > 0.0 {
                count += 1;
                total += weight;
                sx += (x as f32 + 0.5) * weight;
                sy += (y as f32 + 0.5) * weight;
            }
        }
        if total == 0.0 {
            return (0, 0.0, 0.0);
        }
        (count, sx / total, sy / total)
    }

    fn rgba(image: &RgbaImage, x: u32, y: u32) -> [u8; 4] {
        image.get_pixel(x, y).0
    }

    #[test]
    fn test_filled_circle_leaves_corners_transparent() {
        let drawable = AvatarDrawable::builder().build_round("", Argb::BLUE);
        let image = render(&drawable, 40, 40, None);

        assert_eq!(rgba(&image, 20, 20), [0, 0, 255, 255]);
        assert_eq!(rgba(&image, 0, 0)[3], 0);
        assert_eq!(rgba(&image, 39, 39)[3], 0);
    }

    #[test]
    fn test_filled_rect_covers_everything() {
        let drawable = AvatarDrawable::builder().build_rect("", Argb::rgb(10, 20, 30));
        let image = render(&drawable, 8, 6, None);

        assert!(image.pixels().all(|p| p.0 == [10, 20, 30, 255]));
    }

    #[test]
    fn test_rect_border_uses_darker_shade() {
        let drawable = AvatarDrawable::builder()
            .begin_config()
            .with_border(4)
            .end_config()
            .build_rect("", Argb::rgb(100, 200, 50));
        let image = render(&drawable, 20, 20, None);

        // Edge pixels lie fully inside the 4px stroke
        assert_eq!(rgba(&image, 1, 10), [90, 180, 45, 255]);
        assert_eq!(rgba(&image, 10, 18), [90, 180, 45, 255]);
        // Center keeps the background
        assert_eq!(rgba(&image, 10, 10), [100, 200, 50, 255]);
    }

    #[test]
    fn test_round_rect_corners_are_cut() {
        let drawable = AvatarDrawable::builder().build_round_rect("", Argb::WHITE, 8);
        let image = render(&drawable, 32, 32, None);

        assert_eq!(rgba(&image, 0, 0)[3], 0);
        assert_eq!(rgba(&image, 16, 0)[3], 255);
        assert_eq!(rgba(&image, 0, 16)[3], 255);
    }

    #[test]
    fn test_text_without_font_is_skipped() {
        let drawable = AvatarDrawable::builder().build_rect("Alice Johnson", Argb::BLACK);
        let image = render(&drawable, 16, 16, None);

        assert!(image.pixels().all(|p| p.0 == [0, 0, 0, 255]));
    }

    #[test]
    fn test_metrics_fallback_without_font() {
        let surface = RasterSurface::new(1, 1);
        let style = TextStyle {
            size: 30.0,
            color: Argb::WHITE,
            bold: false,
            font: Default::default(),
            weight: Default::default(),
        };
        let metrics = surface.text_metrics(&style);
        assert_eq!(metrics, TextMetrics::approximate(30.0));
    }

    #[test]
    fn test_ellipse_distance_sign() {
        let radii = Vector::new(10.0, 5.0);
        assert!(ellipse_distance(Vector::new(0.0, 0.0), radii) < 0.0);
        assert!(ellipse_distance(Vector::new(9.0, 0.0), radii) < 0.0);
        assert!(ellipse_distance(Vector::new(11.0, 0.0), radii) > 0.0);
        assert!(ellipse_distance(Vector::new(0.0, 6.0), radii) > 0.0);
    }

    #[test]
    fn test_blend_over_transparent_keeps_source_color() {
        let mut image = RgbaImage::new(1, 1);
        blend(&mut image, 0, 0, Argb::rgb(200, 100, 0), 0.5);
        assert_eq!(image.get_pixel(0, 0).0, [200, 100, 0, 128]);
    }

    #[test]
    fn test_metrics_from_font() {
        let surface = RasterSurface::new(1, 1).with_font(test_font());
        let style = TextStyle {
            size: 30.0,
            color: Argb::WHITE,
            bold: false,
            font: AvatarFont::Monospace,
            weight: Default::default(),
        };
        let metrics = surface.text_metrics(&style);

        assert!(metrics.ascent < 0.0, "ascent {}", metrics.ascent);
        assert!(metrics.descent > 0.0, "descent {}", metrics.descent);
        assert!(metrics.ascent > -30.0 && metrics.ascent < -15.0);
        assert!(metrics.descent < 15.0);
    }

    #[test]
    fn test_text_is_centered() {
        let image = render_text("HH", false);
        let (count, cx, cy) = ink(&image);

        assert!(count > 100, "only {} ink pixels", count);
        assert!((cx - 50.0).abs() < 2.0, "horizontal centroid {}", cx);
        assert!((cy - 50.0).abs() < 4.0, "vertical centroid {}", cy);
    }

    #[test]
    fn test_fake_bold_adds_ink() {
        let (regular, _, _) = ink(&render_text("HH", false));
        let (bold, cx, _) = ink(&render_text("HH", true));

        assert!(bold > regular, "bold {} vs regular {}", bold, regular);
        // The second pass shifts right by about a pixel
        assert!((cx - 50.0).abs() < 2.0, "horizontal centroid {}", cx);
    }

    #[test]
    fn test_bold_typeface_is_emboldened() {
        let drawable = AvatarDrawable::builder()
            .begin_config()
            .width(100)
            .height(100)
            .font_size(30)
            .end_config()
            .build_rect("HH", Argb::BLACK);
        assert_eq!(drawable.config().font_weight, FontWeight::Bold);

        let (heavy, _, _) = ink(&render(&drawable, 100, 100, Some(test_font())));
        let (regular, _, _) = ink(&render_text("HH", false));
        assert!(heavy > regular, "heavy {} vs regular {}", heavy, regular);
    }

    #[test]
    fn test_wider_text_spans_more_columns() {
        let columns = |image: &RgbaImage| {
            let xs: Vec<u32> = image
                .enumerate_pixels()
                .filter(|(_, _, p)| p.0[0] > 0)
                .map(|(x, _, _)| x)
                .collect();
            xs.iter().max().unwrap() - xs.iter().min().unwrap()
        };

        let one = render_text("H", false);
        let two = render_text("HH", false);
        assert!(columns(&two) > columns(&one) + 10);
    }

    #[test]
    fn test_load_font_missing_file() {
        let path = std::env::temp_dir().join("textdrawable-missing-font.ttf");
        assert!(load_font(&path).is_err());
    }
}
