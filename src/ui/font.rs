//! System-font text rendering on top of `cosmic-text`.
//! - Shapes one line at a time (the layout module does the wrapping)
//! - Glyph bitmaps come from the swash cache and are blended straight into the canvas
//! - Measurement and drawing share the same shaping, so wrapped widths match what is drawn

use cosmic_text::{Attrs, Buffer, Color, Family, FontSystem, Metrics, Shaping, SwashCache};
use log::info;

use crate::core::gfx::Canvas;
use crate::ui::layout::TextMetrics;

/// Baseline-to-baseline distance as a multiple of the pixel size.
const LINE_SPACING: f32 = 1.25;

/// Something that can put a single line of text onto the canvas.
pub trait TextRasterizer: TextMetrics {
    /// Draws `text` with its line box's top-left corner at (`x`, `y`).
    fn draw_line(&mut self, canvas: &mut Canvas, text: &str, x: f32, y: f32, px: f32, rgb: [u8; 3], alpha: u8);
}

pub struct Fonts {
    font_system: FontSystem,
    swash_cache: SwashCache,
}

impl Fonts {
    pub fn new() -> Self {
        let font_system = FontSystem::new();
        info!("Font system ready ({} faces).", font_system.db().len());
        Self {
            font_system,
            swash_cache: SwashCache::new(),
        }
    }

    fn shape(&mut self, text: &str, px: f32) -> Buffer {
        let metrics = Metrics::relative(px, LINE_SPACING);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        let attrs = Attrs::new().family(Family::SansSerif);
        buffer.set_size(&mut self.font_system, None, None);
        buffer.set_text(&mut self.font_system, text, &attrs, Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);
        buffer
    }
}

impl Default for Fonts {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMetrics for Fonts {
    fn text_width(&mut self, text: &str, px: f32) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        let buffer = self.shape(text, px);
        buffer.layout_runs().map(|run| run.line_w).fold(0.0, f32::max)
    }

    fn line_height(&mut self, px: f32) -> f32 {
        (px * LINE_SPACING).ceil()
    }
}

impl TextRasterizer for Fonts {
    fn draw_line(&mut self, canvas: &mut Canvas, text: &str, x: f32, y: f32, px: f32, rgb: [u8; 3], alpha: u8) {
        if alpha == 0 || text.is_empty() {
            return;
        }
        let buffer = self.shape(text, px);
        let (ox, oy) = (x.round() as i32, y.round() as i32);
        let color = Color::rgba(rgb[0], rgb[1], rgb[2], alpha);
        // The callback colour already carries glyph coverage times `alpha`.
        buffer.draw(&mut self.font_system, &mut self.swash_cache, color, |gx, gy, w, h, c| {
            canvas.fill_rect(ox + gx, oy + gy, w, h, [c.r(), c.g(), c.b()], c.a());
        });
    }
}

/// Deterministic metric for tests: every char advances `px / 2`, and drawing
/// paints the line's full advance box.
#[cfg(test)]
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedAdvance;

#[cfg(test)]
impl FixedAdvance {
    pub const LINE_HEIGHT_RATIO: f32 = 1.25;
}

#[cfg(test)]
impl TextMetrics for FixedAdvance {
    fn text_width(&mut self, text: &str, px: f32) -> f32 {
        text.chars().count() as f32 * px * 0.5
    }

    fn line_height(&mut self, px: f32) -> f32 {
        px * Self::LINE_HEIGHT_RATIO
    }
}

#[cfg(test)]
impl TextRasterizer for FixedAdvance {
    fn draw_line(&mut self, canvas: &mut Canvas, text: &str, x: f32, y: f32, px: f32, rgb: [u8; 3], alpha: u8) {
        let w = self.text_width(text, px);
        canvas.fill_rect(x.round() as i32, y.round() as i32, w as u32, px as u32, rgb, alpha);
    }
}
