//! Initials avatar primitive
//!
//! Draws an [`AvatarDrawable`] with iced's Canvas.
//!
//! # Design
//!
//! This is a primitive component that implements `canvas::Program` trait.
//! It uses generic Message types and does not depend on application-specific types.

use iced::widget::Canvas;
use iced::widget::canvas::path::arc::Elliptical;
use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke, Text};
use iced::{Element, Point, Radians, Rectangle, Renderer, Theme, Vector, mouse};

use crate::features::avatar::{
    Argb, AvatarDrawable, AvatarFont, Shape, Surface, TextMetrics, TextStyle,
};

/// Canvas program painting one avatar
#[derive(Debug, Clone)]
pub struct AvatarCanvas {
    drawable: AvatarDrawable,
}

impl AvatarCanvas {
    pub fn new(drawable: AvatarDrawable) -> Self {
        Self { drawable }
    }
}

impl<Message> Program<Message> for AvatarCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        self.drawable.draw(
            &mut FrameSurface { frame: &mut frame },
            Rectangle::with_size(bounds.size()),
        );
        vec![frame.into_geometry()]
    }
}

/// [`Surface`] backed by a canvas frame
struct FrameSurface<'a> {
    frame: &'a mut Frame,
}

impl Surface for FrameSurface<'_> {
    fn fill_shape(&mut self, shape: Shape, bounds: Rectangle, color: Argb) {
        self.frame.fill(&shape_path(shape, bounds), iced::Color::from(color));
    }

    fn stroke_shape(&mut self, shape: Shape, bounds: Rectangle, color: Argb, width: f32) {
        self.frame.stroke(
            &shape_path(shape, bounds),
            Stroke::default()
                .with_width(width)
                .with_color(iced::Color::from(color)),
        );
    }

    fn text_metrics(&self, style: &TextStyle) -> TextMetrics {
        TextMetrics::approximate(style.size)
    }

    fn fill_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        // iced centers the line box itself, so undo the baseline offset
        let metrics = self.text_metrics(style);
        let center_y = origin.y + (metrics.ascent + metrics.descent) / 2.0;

        self.frame.fill_text(Text {
            content: text.to_string(),
            position: Point::new(origin.x, center_y),
            color: style.color.into(),
            size: iced::Pixels(style.size),
            font: iced_font(style),
            align_x: iced::alignment::Horizontal::Center.into(),
            align_y: iced::alignment::Vertical::Center,
            ..Text::default()
        });
    }
}

fn shape_path(shape: Shape, bounds: Rectangle) -> Path {
    match shape {
        Shape::Rect => Path::rectangle(bounds.position(), bounds.size()),
        Shape::RoundRect { radius } => {
            Path::rounded_rectangle(bounds.position(), bounds.size(), radius.into())
        }
        Shape::Oval => Path::new(|builder| {
            builder.ellipse(Elliptical {
                center: bounds.center(),
                radii: Vector::new(bounds.width / 2.0, bounds.height / 2.0),
                rotation: Radians(0.0),
                start_angle: Radians(0.0),
                end_angle: Radians(std::f32::consts::TAU),
            });
        }),
    }
}

fn iced_font(style: &TextStyle) -> iced::Font {
    let family = match style.font {
        AvatarFont::SansSerif => iced::font::Family::SansSerif,
        AvatarFont::Serif => iced::font::Family::Serif,
        AvatarFont::Monospace => iced::font::Family::Monospace,
    };
    let weight = if style.is_heavy() {
        iced::font::Weight::Bold
    } else {
        iced::font::Weight::Normal
    };
    iced::Font {
        family,
        weight,
        ..iced::Font::DEFAULT
    }
}

/// Create an avatar element.
///
/// The canvas uses the drawable's intrinsic size, falling back to `size`.
pub fn view<'a, Message: 'a>(drawable: AvatarDrawable, size: f32) -> Element<'a, Message> {
    let width = drawable.intrinsic_width().map_or(size, |w| w as f32);
    let height = drawable.intrinsic_height().map_or(size, |h| h as f32);
    Canvas::new(AvatarCanvas::new(drawable))
        .width(width)
        .height(height)
        .into()
}
