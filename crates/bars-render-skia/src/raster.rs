// File: crates/bars-render-skia/src/raster.rs
// Summary: Composites chart primitives with Skia and reads them back as RGBA or PNG.

use anyhow::{anyhow, bail, Result};
use skia_safe as skia;

use bars_core::{CanvasObject, Color, Pos, Theme, WidgetRenderer};

use crate::frame::Frame;
use crate::text::TextShaper;

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

pub struct SkiaRenderer {
    pub background: Color,
    /// Skip labels; glyph rasterization differs across platforms.
    pub draw_labels: bool,
    text: TextShaper,
}

impl SkiaRenderer {
    pub fn new(theme: &Theme) -> Self {
        Self { background: theme.background, draw_labels: true, text: TextShaper::new() }
    }

    /// Draw `objects` with their local origin at `origin`.
    pub fn paint(&self, canvas: &skia::Canvas, objects: &[CanvasObject], origin: Pos) {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);

        for obj in objects {
            match obj {
                CanvasObject::Rectangle { rect, color } => {
                    let r = rect.translate(origin);
                    fill.set_color(to_skia(*color));
                    canvas.draw_rect(skia::Rect::from_xywh(r.x, r.y, r.width, r.height), &fill);
                }
                CanvasObject::Text(label) if self.draw_labels => {
                    self.text.draw_centered(
                        canvas,
                        &label.text,
                        label.center.x + origin.x,
                        label.center.y + origin.y,
                        label.text_size,
                        to_skia(label.color),
                    );
                }
                CanvasObject::Text(_) => {}
            }
        }
    }

    pub fn paint_frame(&self, canvas: &skia::Canvas, frame: &Frame) {
        canvas.clear(to_skia(self.background));
        for (origin, chart) in frame.placements() {
            self.paint(canvas, chart.objects(), origin);
        }
    }

    fn raster(&self, frame: &Frame) -> Result<skia::Surface> {
        let size = frame.size();
        let (w, h) = (size.width.ceil() as i32, size.height.ceil() as i32);
        if w <= 0 || h <= 0 {
            bail!("frame has no area ({}x{}); lay it out before rendering", size.width, size.height);
        }
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow!("failed to create raster surface"))?;
        self.paint_frame(surface.canvas(), frame);
        Ok(surface)
    }

    /// Render into a tightly packed RGBA8 buffer: `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, frame: &Frame) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.raster(frame)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            bail!("failed to read back raster pixels");
        }
        Ok((pixels, w, h, stride))
    }

    pub fn render_to_png_bytes(&self, frame: &Frame) -> Result<Vec<u8>> {
        let mut surface = self.raster(frame)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the frame to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, frame: &Frame, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(frame)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        log::debug!("wrote {}", path.display());
        Ok(())
    }
}
