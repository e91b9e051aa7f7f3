mod present;

pub use present::Presenter;

use crate::core::space::Viewport;
use image::RgbaImage;

// --- Pixel helpers ---

/// Packs an RGB triple into the 0x00RRGGBB layout the window surface expects.
#[inline(always)]
pub const fn pack_rgb(rgb: [u8; 3]) -> u32 {
    ((rgb[0] as u32) << 16) | ((rgb[1] as u32) << 8) | rgb[2] as u32
}

#[inline(always)]
pub const fn unpack_rgb(px: u32) -> [u8; 3] {
    [(px >> 16) as u8, (px >> 8) as u8, px as u8]
}

#[inline(always)]
fn blend_channel(dst: u8, src: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((src as u32 * a + dst as u32 * (255 - a) + 127) / 255) as u8
}

#[inline(always)]
fn blend(dst: u32, src: [u8; 3], alpha: u8) -> u32 {
    match alpha {
        0 => dst,
        255 => pack_rgb(src),
        a => {
            let d = unpack_rgb(dst);
            pack_rgb([
                blend_channel(d[0], src[0], a),
                blend_channel(d[1], src[1], a),
                blend_channel(d[2], src[2], a),
            ])
        }
    }
}

/// Multiplies two 0..=255 opacities.
#[inline(always)]
pub fn mul_alpha(a: u8, b: u8) -> u8 {
    ((a as u32 * b as u32 + 127) / 255) as u8
}

// --- Canvas ---

/// Software frame buffer the screens draw into. One `u32` per pixel, row-major.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    #[inline(always)]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline(always)]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    #[inline(always)]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Reallocates for a new size. Contents are cleared to black.
    pub fn resize(&mut self, width: u32, height: u32) {
        if (width, height) == self.size() {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize(width as usize * height as usize, 0);
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(unpack_rgb(self.pixels[(y * self.width + x) as usize]))
    }

    pub fn fill(&mut self, rgb: [u8; 3]) {
        self.pixels.fill(pack_rgb(rgb));
    }

    /// Alpha-blends a solid rectangle; the part outside the canvas is clipped.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, rgb: [u8; 3], alpha: u8) {
        if alpha == 0 {
            return;
        }
        let Some((x0, y0, x1, y1)) = self.clip(x, y, w, h) else { return };
        let stride = self.width as usize;
        for row in y0..y1 {
            let line = &mut self.pixels[row * stride + x0..row * stride + x1];
            for px in line {
                *px = blend(*px, rgb, alpha);
            }
        }
    }

    /// Blits an RGBA image with its top-left corner at (`x`, `y`). Per-pixel
    /// alpha is multiplied by `alpha`.
    pub fn blit_rgba(&mut self, image: &RgbaImage, x: i32, y: i32, alpha: u8) {
        if alpha == 0 {
            return;
        }
        let (iw, ih) = image.dimensions();
        let Some((x0, y0, x1, y1)) = self.clip(x, y, iw, ih) else { return };
        let stride = self.width as usize;
        for row in y0..y1 {
            let sy = (row as i64 - y as i64) as u32;
            for col in x0..x1 {
                let sx = (col as i64 - x as i64) as u32;
                let p = image.get_pixel(sx, sy).0;
                let a = mul_alpha(p[3], alpha);
                let idx = row * stride + col;
                self.pixels[idx] = blend(self.pixels[idx], [p[0], p[1], p[2]], a);
            }
        }
    }

    fn clip(&self, x: i32, y: i32, w: u32, h: u32) -> Option<(usize, usize, usize, usize)> {
        let x0 = (x as i64).max(0);
        let y0 = (y as i64).max(0);
        let x1 = (x as i64 + w as i64).min(self.width as i64);
        let y1 = (y as i64 + h as i64).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as usize, y0 as usize, x1 as usize, y1 as usize))
    }
}
