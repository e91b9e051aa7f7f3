/// One selectable entry of the color catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorOption {
    pub label: &'static str,
    pub rgb: [u8; 3],
}

pub const CATALOG: [ColorOption; 3] = [
    ColorOption { label: "Red", rgb: [220, 60, 60] },
    ColorOption { label: "Green", rgb: [70, 190, 90] },
    ColorOption { label: "Blue", rgb: [70, 110, 230] },
];

/// Cursor over a catalog plus the one-shot confirmed pick.
#[derive(Clone, Debug)]
pub struct ChoiceState {
    options: &'static [ColorOption],
    selected_index: usize,
    confirmed: Option<&'static str>,
}

impl ChoiceState {
    /// `options` must not be empty.
    pub fn new(options: &'static [ColorOption]) -> Self {
        debug_assert!(!options.is_empty());
        Self { options, selected_index: 0, confirmed: None }
    }

    pub fn options(&self) -> &'static [ColorOption] {
        self.options
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn confirmed(&self) -> Option<&'static str> {
        self.confirmed
    }

    /// Moves the cursor by `delta`, wrapping at both ends.
    pub fn step(&mut self, delta: isize) {
        let n = self.options.len() as isize;
        let cur = self.selected_index as isize;
        self.selected_index = (cur + delta).rem_euclid(n) as usize;
    }

    /// Points the cursor at `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.options.len() {
            self.selected_index = index;
            true
        } else {
            false
        }
    }

    /// Locks in the current selection. Later calls keep the first pick.
    pub fn confirm(&mut self) -> &'static str {
        *self.confirmed.get_or_insert(self.options[self.selected_index].label)
    }
}
