//! Application shell: one editor bound to one egui canvas.

use eframe::egui;
use kurbo::{Line, Point};
use linepad_core::{Editor, PointerEvent};
use linepad_render::{draw_segments, PixmapSurface, Surface, SurfaceResult, SurfaceStyle};

const EXPORT_PATH: &str = "linepad-export.png";

/// Main application state.
pub struct LinepadApp {
    editor: Editor,
    style: SurfaceStyle,
    /// Canvas size from the last frame, used for PNG export.
    canvas_size: egui::Vec2,
}

impl Default for LinepadApp {
    fn default() -> Self {
        Self {
            editor: Editor::new(),
            style: SurfaceStyle::default(),
            canvas_size: egui::Vec2::new(800.0, 600.0),
        }
    }
}

impl LinepadApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Rasterize the current segments at the canvas size.
    fn render_png(&self) -> SurfaceResult<Vec<u8>> {
        let width = (self.canvas_size.x.round() as u32).max(1);
        let height = (self.canvas_size.y.round() as u32).max(1);

        let mut surface = PixmapSurface::new(width, height)?.with_style(self.style);
        draw_segments(self.editor.segments(), &mut surface);
        surface.encode_png()
    }

    /// Write a PNG snapshot of the canvas to the working directory.
    fn export_png(&self) {
        let bytes = match self.render_png() {
            Ok(bytes) => bytes,
            Err(err) => {
                log::error!("PNG export failed: {}", err);
                return;
            }
        };
        match std::fs::write(EXPORT_PATH, &bytes) {
            Ok(()) => log::info!(
                "Exported {} segments to {} ({} bytes)",
                self.editor.segments().len(),
                EXPORT_PATH,
                bytes.len()
            ),
            Err(err) => log::error!("Failed to write {}: {}", EXPORT_PATH, err),
        }
    }
}

impl eframe::App for LinepadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{} segments", self.editor.segments().len()));
                ui.separator();
                if ui.button("Export PNG").clicked() {
                    self.export_png();
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
            self.canvas_size = response.rect.size();

            let mut repaint = false;
            if response.drag_started() {
                if let Some(pos) = response.interact_pointer_pos() {
                    repaint |= self.editor.handle_event(PointerEvent::Down {
                        position: to_canvas(response.rect, pos),
                    });
                }
            }
            if response.dragged() {
                if let Some(pos) = response.interact_pointer_pos() {
                    repaint |= self.editor.handle_event(PointerEvent::Move {
                        position: to_canvas(response.rect, pos),
                    });
                }
            }
            if response.drag_stopped() {
                repaint |= self.editor.handle_event(PointerEvent::Up);
            }
            if repaint {
                ctx.request_repaint();
            }

            let mut surface = PainterSurface {
                painter: &painter,
                rect: response.rect,
                style: self.style,
            };
            draw_segments(self.editor.segments(), &mut surface);
        });
    }
}

/// Surface adapter that strokes onto an egui painter.
struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
    style: SurfaceStyle,
}

impl PainterSurface<'_> {
    fn to_screen(&self, point: Point) -> egui::Pos2 {
        egui::pos2(
            self.rect.min.x + point.x as f32,
            self.rect.min.y + point.y as f32,
        )
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self) {
        self.painter
            .rect_filled(self.rect, 0.0, color32(self.style.background));
    }

    fn stroke_line(&mut self, line: Line) {
        self.painter.line_segment(
            [self.to_screen(line.p0), self.to_screen(line.p1)],
            egui::Stroke::new(
                self.style.stroke_width as f32,
                color32(self.style.stroke_color),
            ),
        );
    }
}

/// Convert a screen position to surface-local coordinates.
fn to_canvas(rect: egui::Rect, pos: egui::Pos2) -> Point {
    Point::new((pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64)
}

fn color32(color: peniko::Color) -> egui::Color32 {
    let c = color.to_rgba8();
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}
