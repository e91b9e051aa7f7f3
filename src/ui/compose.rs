use crate::core::gfx::Canvas;
use crate::ui::actors::{Actor, TextAlign};
use crate::ui::font::TextRasterizer;

/* ======================= ACTORS -> CANVAS ======================= */

/// Paints `actors` onto `canvas` in list order.
pub fn render<F: TextRasterizer>(actors: &[Actor], canvas: &mut Canvas, fonts: &mut F) {
    for actor in actors {
        match actor {
            Actor::Fill { rgb } => canvas.fill(*rgb),
            Actor::Image { image, x, y, alpha } => canvas.blit_rgba(image, *x, *y, *alpha),
            Actor::Quad { x, y, w, h, rgb, alpha } => {
                if *w <= 0.0 || *h <= 0.0 {
                    continue;
                }
                canvas.fill_rect(x.round() as i32, y.round() as i32, w.round() as u32, h.round() as u32, *rgb, *alpha);
            }
            Actor::Text { content, x, y, px, rgb, alpha, align } => {
                if *alpha == 0 || content.is_empty() {
                    continue;
                }
                let left = match align {
                    TextAlign::Left => *x,
                    TextAlign::Center => *x - 0.5 * fonts.text_width(content, *px),
                };
                fonts.draw_line(canvas, content, left, *y, *px, *rgb, *alpha);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::font::FixedAdvance;
    use image::{Rgba, RgbaImage};

    #[test]
    fn later_actors_paint_over_earlier_ones() {
        let mut canvas = Canvas::new(10, 10);
        let actors = [
            Actor::Fill { rgb: [10, 10, 10] },
            Actor::quad(0.0, 0.0, 5.0, 5.0, [200, 0, 0], 255),
            Actor::quad(2.0, 2.0, 5.0, 5.0, [0, 200, 0], 255),
        ];
        render(&actors, &mut canvas, &mut FixedAdvance);
        assert_eq!(canvas.pixel(0, 0), Some([200, 0, 0]));
        assert_eq!(canvas.pixel(3, 3), Some([0, 200, 0]));
        assert_eq!(canvas.pixel(9, 9), Some([10, 10, 10]));
    }

    #[test]
    fn centered_text_is_placed_around_anchor() {
        let mut canvas = Canvas::new(100, 20);
        // 4 chars at px=10 -> 20px wide, so [40, 60) around x=50.
        let actors = [Actor::text("abcd", 50.0, 0.0, 10.0, [255, 255, 255], 255, TextAlign::Center)];
        render(&actors, &mut canvas, &mut FixedAdvance);
        assert_eq!(canvas.pixel(39, 5), Some([0, 0, 0]));
        assert_eq!(canvas.pixel(40, 5), Some([255, 255, 255]));
        assert_eq!(canvas.pixel(59, 5), Some([255, 255, 255]));
        assert_eq!(canvas.pixel(60, 5), Some([0, 0, 0]));
    }

    #[test]
    fn transparent_actors_leave_canvas_untouched() {
        let mut canvas = Canvas::new(4, 4);
        let img = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255]));
        let actors = [
            Actor::Image { image: &img, x: 0, y: 0, alpha: 0 },
            Actor::quad(0.0, 0.0, 4.0, 4.0, [255, 0, 0], 0),
            Actor::text("x", 0.0, 0.0, 4.0, [0, 255, 0], 0, TextAlign::Left),
        ];
        render(&actors, &mut canvas, &mut FixedAdvance);
        assert!(canvas.pixels().iter().all(|&p| p == 0));
    }
}
