pub mod about;
pub mod menu;
pub mod settings;
pub mod start;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAction {
    None,
    Navigate(Screen),
    Exit,
    /// Ask the window for a new inner size; the canvas follows on the resize event.
    SetResolution(u32, u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Start,
    Settings,
    About,
}
