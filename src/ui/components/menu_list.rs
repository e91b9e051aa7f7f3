use crate::ui::actors::{Actor, TextAlign};

/// How the focused row stands out.
#[derive(Clone, Copy, Debug)]
pub enum Highlight {
    /// Filled box of the given width behind the row, centred on `x`.
    Box { rgb: [u8; 3], width: f32 },
    /// A `>` marker left of the row.
    Marker,
}

#[derive(Clone, Copy)]
pub struct MenuParams<'a, S: AsRef<str>> {
    pub options: &'a [S],
    pub selected_index: usize,

    // Pixel space, origin top-left
    pub x: f32,
    pub align: TextAlign,
    pub start_center_y: f32,
    pub row_spacing: f32,

    // Typography + colors
    pub px: f32,
    pub selected_color: [u8; 3],
    pub normal_color: [u8; 3],
    pub highlight: Highlight,
    pub alpha: u8,
}

const MARKER_GAP: f32 = 28.0;
const BOX_PAD_Y: f32 = 5.0;

/// Build a vertical menu; row `i` is centred on `start_center_y + i * row_spacing`.
pub fn build_vertical_menu<'a, S: AsRef<str>>(p: MenuParams<'a, S>) -> Vec<Actor<'a>> {
    let mut out = Vec::with_capacity(p.options.len() + 1);

    for (i, label) in p.options.iter().enumerate() {
        let selected = i == p.selected_index;
        let center_y = p.start_center_y + (i as f32) * p.row_spacing;
        let y_top = center_y - 0.5 * p.px;
        let color = if selected { p.selected_color } else { p.normal_color };

        if selected {
            match p.highlight {
                Highlight::Box { rgb, width } => {
                    out.push(Actor::quad(
                        p.x - 0.5 * width,
                        y_top - BOX_PAD_Y,
                        width,
                        p.px + 2.0 * BOX_PAD_Y,
                        rgb,
                        p.alpha,
                    ));
                }
                Highlight::Marker => {
                    out.push(Actor::text(">", p.x - MARKER_GAP, y_top, p.px, color, p.alpha, TextAlign::Left));
                }
            }
        }

        out.push(Actor::text(label.as_ref(), p.x, y_top, p.px, color, p.alpha, p.align));
    }
    out
}
