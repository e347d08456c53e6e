//! Drawing surface abstraction.

use kurbo::Line;
use linepad_core::Segment;
use peniko::Color;
use thiserror::Error;

/// Surface errors.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Invalid surface size: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("PNG encoding failed: {0}")]
    PngEncode(String),
}

/// Result type for surface operations.
pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Default style shared by all surface backends.
///
/// Segments have no per-segment styling; every backend strokes with one
/// style and clears to one background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceStyle {
    /// Background color used for clearing.
    pub background: Color,
    /// Stroke color for segments.
    pub stroke_color: Color,
    /// Stroke width for segments.
    pub stroke_width: f64,
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self {
            background: Color::from_rgba8(250, 250, 250, 255),
            stroke_color: Color::from_rgba8(30, 30, 30, 255),
            stroke_width: 2.0,
        }
    }
}

/// Trait for drawing backends.
///
/// The editor needs exactly two primitives: wipe the whole surface and
/// stroke a straight line with the backend's current style.
pub trait Surface {
    /// Clear the entire surface to the background color.
    fn clear(&mut self);

    /// Stroke a straight line from `line.p0` to `line.p1`.
    fn stroke_line(&mut self, line: Line);
}

/// Stroke a single segment onto a surface.
pub fn draw_segment<S: Surface + ?Sized>(segment: &Segment, surface: &mut S) {
    surface.stroke_line(segment.as_line());
}

/// Redraw everything: clear the surface, then stroke every segment in
/// collection order.
pub fn draw_segments<S: Surface + ?Sized>(segments: &[Segment], surface: &mut S) {
    surface.clear();
    for segment in segments {
        draw_segment(segment, surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = SurfaceStyle::default();
        assert!((style.stroke_width - 2.0).abs() < f64::EPSILON);
        assert_eq!(style.background, Color::from_rgba8(250, 250, 250, 255));
    }

    #[test]
    fn test_error_display() {
        let err = SurfaceError::InvalidSize {
            width: 0,
            height: 10,
        };
        assert_eq!(err.to_string(), "Invalid surface size: 0x10");
    }
}
