// -----------------------------------------------------------------------------
// Viewport (pixel space, origin at top-left)
// -----------------------------------------------------------------------------
// The live pixel size of the display surface. Screens receive it explicitly
// every frame; nothing here is global.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline(always)]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline(always)]
    pub fn center_x(&self) -> f32 {
        0.5 * self.width as f32
    }

    #[inline(always)]
    pub fn center_y(&self) -> f32 {
        0.5 * self.height as f32
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Fraction of the height, measured from the top edge.
    #[inline(always)]
    pub fn from_top(&self, ratio: f32) -> f32 {
        self.height as f32 * ratio
    }

    #[inline(always)]
    pub fn from_bottom(&self, px: f32) -> f32 {
        self.height as f32 - px
    }
}
