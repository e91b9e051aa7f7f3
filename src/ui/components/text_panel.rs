use crate::ui::actors::{Actor, TextAlign};
use crate::ui::layout::TextBlock;

#[derive(Clone, Copy, Debug)]
pub struct PanelParams {
    /// Horizontal centre of the block.
    pub center_x: f32,
    /// Vertical centre of the block.
    pub center_y: f32,
    pub padding: f32,
    pub panel_rgb: [u8; 3],
    pub panel_alpha: u8,
    pub text_rgb: [u8; 3],
    pub text_alpha: u8,
}

/// Backing panel sized to the block's bounding box plus padding, with the
/// wrapped lines centred on it.
pub fn build<'a>(block: &'a TextBlock, p: PanelParams) -> Vec<Actor<'a>> {
    let lines = block.lines();
    if lines.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(lines.len() + 1);

    let (w, h) = (block.width(), block.height());
    let top = p.center_y - 0.5 * h;
    out.push(Actor::quad(
        p.center_x - 0.5 * w - p.padding,
        top - p.padding,
        w + 2.0 * p.padding,
        h + 2.0 * p.padding,
        p.panel_rgb,
        p.panel_alpha,
    ));

    for (i, line) in lines.iter().enumerate() {
        let y = top + i as f32 * block.line_height();
        out.push(Actor::text(line.as_str(), p.center_x, y, block.px(), p.text_rgb, p.text_alpha, TextAlign::Center));
    }
    out
}
