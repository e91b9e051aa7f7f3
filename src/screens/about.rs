use crate::core::input::InputEvent;
use crate::core::space::Viewport;
use crate::screens::{Screen, ScreenAction};
use crate::ui::actors::{Actor, TextAlign};
use crate::ui::color;

const LINES: [&str; 3] = [
    "Turn-based RPG - alpha version",
    "Developer: you",
    "Press Esc to return to the menu",
];
const LINE_PX: f32 = 26.0;
const LINE_SPACING: f32 = 44.0;

pub fn handle_input(event: InputEvent) -> ScreenAction {
    match event {
        InputEvent::Escape => ScreenAction::Navigate(Screen::Menu),
        _ => ScreenAction::None,
    }
}

pub fn get_actors(vp: Viewport) -> Vec<Actor<'static>> {
    let mut actors = Vec::with_capacity(LINES.len() + 1);
    actors.push(Actor::Fill { rgb: color::ABOUT_BG });

    let block_h = LINE_SPACING * (LINES.len() - 1) as f32 + LINE_PX;
    let top = vp.center_y() - 0.5 * block_h;
    for (i, line) in LINES.iter().enumerate() {
        actors.push(Actor::text(
            *line,
            vp.center_x(),
            top + i as f32 * LINE_SPACING,
            LINE_PX,
            color::ABOUT_TEXT,
            255,
            TextAlign::Center,
        ));
    }
    actors
}
