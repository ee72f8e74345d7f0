//! Initials avatars
//!
//! A fluent [`builder`] produces an immutable [`AvatarDrawable`] which paints
//! a background shape, an optional darker border and centered initials onto
//! any [`Surface`].

pub mod builder;
mod color;
mod drawable;
pub mod initials;
pub mod raster;
pub mod surface;

pub use color::Argb;
pub use drawable::AvatarDrawable;
pub use surface::{AvatarFont, FontWeight, Shape, Surface, TextMetrics, TextStyle};
