// src/ui/layout.rs
//! Greedy word wrapping against a pixel budget, and the cached text blocks
//! the screens keep per viewport width.

/// Width measurement for a face at a given pixel size.
pub trait TextMetrics {
    /// Advance width of `text` on a single line, in pixels.
    fn text_width(&mut self, text: &str, px: f32) -> f32;
    /// Distance between consecutive baselines, in pixels.
    fn line_height(&mut self, px: f32) -> f32;
}

/// Greedy word wrap.
///
/// Words are joined with single spaces while the measured line still fits in
/// `max_width`; the next word that does not fit starts a new line. Words are
/// never split, so a word wider than `max_width` ends up alone on its own
/// line. Empty (or all-whitespace) input yields no lines.
pub fn wrap(text: &str, font: &mut impl TextMetrics, px: f32, max_width: f32) -> Vec<String> {
    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    let mut current = first.to_string();
    for word in words {
        let candidate = format!("{current} {word}");
        if font.text_width(&candidate, px) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    lines.push(current);
    lines
}

/// A paragraph plus its wrapped lines and their measured widths. The layout is
/// redone only when the available width changes.
#[derive(Clone, Debug)]
pub struct TextBlock {
    text: String,
    px: f32,
    wrap_width: Option<f32>,
    lines: Vec<String>,
    widths: Vec<f32>,
    line_height: f32,
}

impl TextBlock {
    pub fn new(text: impl Into<String>, px: f32) -> Self {
        Self {
            text: text.into(),
            px,
            wrap_width: None,
            lines: Vec::new(),
            widths: Vec::new(),
            line_height: 0.0,
        }
    }

    /// Re-wraps for `max_width` if it differs from the last layout.
    /// Returns `true` when the lines were recomputed.
    pub fn relayout(&mut self, font: &mut impl TextMetrics, max_width: f32) -> bool {
        if self.wrap_width == Some(max_width) {
            return false;
        }
        self.lines = wrap(&self.text, font, self.px, max_width);
        self.widths = self.lines.iter().map(|l| font.text_width(l, self.px)).collect();
        self.line_height = font.line_height(self.px);
        self.wrap_width = Some(max_width);
        true
    }

    /// Replaces the paragraph; the next `relayout` always re-wraps.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.wrap_width = None;
    }

    #[inline(always)]
    pub fn px(&self) -> f32 {
        self.px
    }

    #[inline(always)]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[inline(always)]
    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Widest line.
    pub fn width(&self) -> f32 {
        self.widths.iter().copied().fold(0.0, f32::max)
    }

    pub fn height(&self) -> f32 {
        self.line_height * self.lines.len() as f32
    }
}
