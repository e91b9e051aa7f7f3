// src/ui/color.rs

// Backdrops
pub const MENU_BG: [u8; 3] = [20, 24, 30];
pub const ABOUT_BG: [u8; 3] = [10, 10, 30];
pub const SETTINGS_BG: [u8; 3] = [30, 10, 30];
/// Flat fill behind the cut-scene when the background image is unavailable.
pub const START_FALLBACK_BG: [u8; 3] = [12, 14, 22];

// Text
pub const WHITE: [u8; 3] = [255, 255, 255];
pub const MENU_NORMAL: [u8; 3] = [200, 200, 200];
pub const MENU_HIGHLIGHT: [u8; 3] = [60, 100, 140];
pub const HINT: [u8; 3] = [140, 140, 140];
pub const ABOUT_TEXT: [u8; 3] = [200, 200, 255];

// Text panels
pub const PANEL: [u8; 3] = [0, 0, 0];

/// Multiplies each channel by `factor` (clamped to 0..=255).
#[inline(always)]
pub fn scale(rgb: [u8; 3], factor: f32) -> [u8; 3] {
    let s = |c: u8| (c as f32 * factor).round().clamp(0.0, 255.0) as u8;
    [s(rgb[0]), s(rgb[1]), s(rgb[2])]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_dims_and_clamps() {
        assert_eq!(scale([200, 100, 0], 0.5), [100, 50, 0]);
        assert_eq!(scale([200, 100, 0], 2.0), [255, 200, 0]);
    }
}
