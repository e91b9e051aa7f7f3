use image::RgbaImage;
use std::borrow::Cow;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

/// One draw command. Screens build a list per frame; `compose::render`
/// paints them in order (later actors on top).
#[derive(Clone, Debug)]
pub enum Actor<'a> {
    /// Flat fill of the whole surface.
    Fill { rgb: [u8; 3] },

    /// Image with its top-left corner at (`x`, `y`).
    Image {
        image: &'a RgbaImage,
        x: i32,
        y: i32,
        alpha: u8,
    },

    /// Solid rectangle, alpha-blended.
    Quad {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        rgb: [u8; 3],
        alpha: u8,
    },

    /// Single line of text. `x` is the anchor selected by `align`, `y` the top of the line box.
    Text {
        content: Cow<'a, str>,
        x: f32,
        y: f32,
        px: f32,
        rgb: [u8; 3],
        alpha: u8,
        align: TextAlign,
    },
}

impl<'a> Actor<'a> {
    #[inline(always)]
    pub fn text(content: impl Into<Cow<'a, str>>, x: f32, y: f32, px: f32, rgb: [u8; 3], alpha: u8, align: TextAlign) -> Self {
        Actor::Text {
            content: content.into(),
            x,
            y,
            px,
            rgb,
            alpha,
            align,
        }
    }

    #[inline(always)]
    pub fn quad(x: f32, y: f32, w: f32, h: f32, rgb: [u8; 3], alpha: u8) -> Self {
        Actor::Quad { x, y, w, h, rgb, alpha }
    }
}
