//! CPU raster backend built on tiny-skia.

use crate::surface::{Surface, SurfaceError, SurfaceResult, SurfaceStyle};
use kurbo::Line;
use tiny_skia::{Paint, PathBuilder, Pixmap, PremultipliedColorU8, Stroke, Transform};

/// Raster surface backed by a tiny-skia pixmap.
#[derive(Debug)]
pub struct PixmapSurface {
    pixmap: Pixmap,
    style: SurfaceStyle,
}

impl PixmapSurface {
    /// Create a surface of the given pixel size, cleared to the background.
    pub fn new(width: u32, height: u32) -> SurfaceResult<Self> {
        let pixmap =
            Pixmap::new(width, height).ok_or(SurfaceError::InvalidSize { width, height })?;
        let mut surface = Self {
            pixmap,
            style: SurfaceStyle::default(),
        };
        surface.clear();
        Ok(surface)
    }

    /// Replace the default style.
    pub fn with_style(mut self, style: SurfaceStyle) -> Self {
        self.style = style;
        self.clear();
        self
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Premultiplied color of the pixel at (x, y), None when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<PremultipliedColorU8> {
        self.pixmap.pixel(x, y)
    }

    /// Encode the current contents as a PNG.
    pub fn encode_png(&self) -> SurfaceResult<Vec<u8>> {
        self.pixmap
            .encode_png()
            .map_err(|err| SurfaceError::PngEncode(err.to_string()))
    }
}

impl Surface for PixmapSurface {
    fn clear(&mut self) {
        let c = self.style.background.to_rgba8();
        self.pixmap
            .fill(tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a));
    }

    fn stroke_line(&mut self, line: Line) {
        let mut pb = PathBuilder::new();
        pb.move_to(line.p0.x as f32, line.p0.y as f32);
        pb.line_to(line.p1.x as f32, line.p1.y as f32);
        let Some(path) = pb.finish() else {
            return;
        };

        let c = self.style.stroke_color.to_rgba8();
        let mut paint = Paint::default();
        paint.set_color_rgba8(c.r, c.g, c.b, c.a);
        paint.anti_alias = true;

        let stroke = Stroke {
            width: self.style.stroke_width as f32,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
}
