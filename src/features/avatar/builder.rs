//! Fluent builder for [`AvatarDrawable`]
//!
//! The builder moves through three stages, each its own type:
//!
//! ```text
//! AvatarDrawable::builder()      -> ShapeBuilder
//!     .begin_config()            -> ConfigBuilder
//!         .width(100) ... .bold()
//!     .end_config()              -> ShapeBuilder
//!     .build_round(text, color)  -> AvatarDrawable
//! ```
//!
//! Every stage takes `self` by value, so a configuration is consumed exactly
//! once and the resulting drawable is immutable.

use super::initials::initials;
use super::{Argb, AvatarDrawable, AvatarFont, FontWeight, Shape};

/// Accumulated drawable configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DrawableConfig {
    /// Content width in pixels, `None` to use the draw bounds
    pub width: Option<u32>,
    /// Content height in pixels, `None` to use the draw bounds
    pub height: Option<u32>,
    pub text_color: Argb,
    pub background_color: Argb,
    pub border_thickness: u32,
    pub font: AvatarFont,
    /// Weight of the typeface, bold until a font is chosen
    pub font_weight: FontWeight,
    /// Font size in pixels, `None` for half the smaller dimension
    pub font_size: Option<u32>,
    pub bold: bool,
    pub uppercase: bool,
    pub shape: Shape,
}

impl Default for DrawableConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            text_color: Argb::WHITE,
            background_color: Argb::GRAY,
            border_thickness: 0,
            font: AvatarFont::SansSerif,
            font_weight: FontWeight::Bold,
            font_size: None,
            bold: false,
            uppercase: false,
            shape: Shape::Rect,
        }
    }
}

/// Entry stage: open the configuration or pick a shape
#[derive(Debug, Clone, Default)]
pub struct ShapeBuilder {
    config: DrawableConfig,
}

/// Configuration stage
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: DrawableConfig,
}

/// Terminal stage: shape chosen, waiting for text and color
#[derive(Debug, Clone)]
pub struct Builder {
    config: DrawableConfig,
}

impl ShapeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_config(self) -> ConfigBuilder {
        ConfigBuilder {
            config: self.config,
        }
    }

    pub fn rect(mut self) -> Builder {
        self.config.shape = Shape::Rect;
        Builder {
            config: self.config,
        }
    }

    /// Circle, or ellipse when the bounds are not square
    pub fn round(mut self) -> Builder {
        self.config.shape = Shape::Oval;
        Builder {
            config: self.config,
        }
    }

    pub fn round_rect(mut self, radius: u32) -> Builder {
        self.config.shape = Shape::RoundRect {
            radius: radius as f32,
        };
        Builder {
            config: self.config,
        }
    }

    pub fn build_rect(self, text: &str, color: Argb) -> AvatarDrawable {
        self.rect().build(text, color)
    }

    pub fn build_round_rect(self, text: &str, color: Argb, radius: u32) -> AvatarDrawable {
        self.round_rect(radius).build(text, color)
    }

    pub fn build_round(self, text: &str, color: Argb) -> AvatarDrawable {
        self.round().build(text, color)
    }
}

impl ConfigBuilder {
    pub fn width(mut self, width: u32) -> Self {
        self.config.width = Some(width);
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.config.height = Some(height);
        self
    }

    pub fn text_color(mut self, color: Argb) -> Self {
        self.config.text_color = color;
        self
    }

    pub fn with_border(mut self, thickness: u32) -> Self {
        self.config.border_thickness = thickness;
        self
    }

    /// Use the regular face of `font`
    pub fn use_font(mut self, font: AvatarFont) -> Self {
        self.config.font = font;
        self.config.font_weight = FontWeight::Normal;
        self
    }

    pub fn font_size(mut self, size: u32) -> Self {
        self.config.font_size = Some(size);
        self
    }

    pub fn bold(mut self) -> Self {
        self.config.bold = true;
        self
    }

    pub fn to_upper_case(mut self) -> Self {
        self.config.uppercase = true;
        self
    }

    pub fn end_config(self) -> ShapeBuilder {
        ShapeBuilder {
            config: self.config,
        }
    }
}

impl Builder {
    /// Finish the drawable with the initials of `text` on `color`
    pub fn build(mut self, text: &str, color: Argb) -> AvatarDrawable {
        self.config.background_color = color;
        AvatarDrawable::new(self.config, initials(text))
    }
}
