use crate::core::space::Viewport;
use crate::ui::actors::{Actor, TextAlign};
use crate::ui::color;

pub const HINT_PX: f32 = 18.0;
const BOTTOM_MARGIN: f32 = 40.0;

/// Static controls line centred near the bottom edge.
pub fn build<'a>(text: &'a str, vp: Viewport, alpha: u8) -> Actor<'a> {
    Actor::text(text, vp.center_x(), vp.from_bottom(BOTTOM_MARGIN), HINT_PX, color::HINT, alpha, TextAlign::Center)
}
