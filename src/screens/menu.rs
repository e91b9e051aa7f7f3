// src/screens/menu.rs
use crate::core::input::InputEvent;
use crate::core::space::Viewport;
use crate::screens::{Screen, ScreenAction};
use crate::ui::actors::{Actor, TextAlign};
use crate::ui::color;
use crate::ui::components::hint;
use crate::ui::components::menu_list::{self, Highlight, MenuParams};

const OPTION_COUNT: usize = 4;
const MENU_OPTIONS: [&str; OPTION_COUNT] = ["Start game", "Settings", "About", "Exit"];

const TITLE_PX: f32 = 40.0;
const TITLE_FROM_TOP: f32 = 0.18;
const MENU_PX: f32 = 28.0;
const MENU_START_FROM_TOP: f32 = 0.42;
const MENU_ROW_SPACING: f32 = 56.0;
const HIGHLIGHT_WIDTH: f32 = 300.0;

const HINT: &str = "Up/Down to move, Enter to select, Esc to quit";

pub struct State {
    pub selected_index: usize,
}

pub fn init() -> State {
    State { selected_index: 0 }
}

pub fn handle_input(state: &mut State, event: InputEvent) -> ScreenAction {
    match event {
        InputEvent::Enter => match state.selected_index {
            0 => ScreenAction::Navigate(Screen::Start),
            1 => ScreenAction::Navigate(Screen::Settings),
            2 => ScreenAction::Navigate(Screen::About),
            _ => ScreenAction::Exit,
        },
        InputEvent::Escape => ScreenAction::Exit,
        InputEvent::Up | InputEvent::Down => {
            let delta: isize = if event == InputEvent::Up { -1 } else { 1 };
            let n = OPTION_COUNT as isize;
            let cur = state.selected_index as isize;
            state.selected_index = ((cur + delta + n) % n) as usize;
            ScreenAction::None
        }
        _ => ScreenAction::None,
    }
}

pub fn get_actors(state: &State, vp: Viewport) -> Vec<Actor<'static>> {
    let mut actors: Vec<Actor> = Vec::with_capacity(12);
    actors.push(Actor::Fill { rgb: color::MENU_BG });
    actors.push(Actor::text(
        crate::config::WINDOW_TITLE,
        vp.center_x(),
        vp.from_top(TITLE_FROM_TOP),
        TITLE_PX,
        color::WHITE,
        255,
        TextAlign::Center,
    ));

    actors.extend(menu_list::build_vertical_menu(MenuParams {
        options: &MENU_OPTIONS,
        selected_index: state.selected_index,
        x: vp.center_x(),
        align: TextAlign::Center,
        start_center_y: vp.from_top(MENU_START_FROM_TOP),
        row_spacing: MENU_ROW_SPACING,
        px: MENU_PX,
        selected_color: color::WHITE,
        normal_color: color::MENU_NORMAL,
        highlight: Highlight::Box { rgb: color::MENU_HIGHLIGHT, width: HIGHLIGHT_WIDTH },
        alpha: 255,
    }));

    actors.push(hint::build(HINT, vp, 255));
    actors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_wraps_both_ways() {
        let mut s = init();
        assert_eq!(handle_input(&mut s, InputEvent::Up), ScreenAction::None);
        assert_eq!(s.selected_index, OPTION_COUNT - 1);
        handle_input(&mut s, InputEvent::Down);
        assert_eq!(s.selected_index, 0);
    }

    #[test]
    fn enter_routes_each_entry() {
        let mut s = init();
        let mut routes = Vec::new();
        for _ in 0..OPTION_COUNT {
            routes.push(handle_input(&mut s, InputEvent::Enter));
            handle_input(&mut s, InputEvent::Down);
        }
        assert_eq!(
            routes,
            vec![
                ScreenAction::Navigate(Screen::Start),
                ScreenAction::Navigate(Screen::Settings),
                ScreenAction::Navigate(Screen::About),
                ScreenAction::Exit,
            ]
        );
    }

    #[test]
    fn escape_quits_and_digits_are_ignored() {
        let mut s = init();
        assert_eq!(handle_input(&mut s, InputEvent::Digit(2)), ScreenAction::None);
        assert_eq!(s.selected_index, 0);
        assert_eq!(handle_input(&mut s, InputEvent::Escape), ScreenAction::Exit);
    }

    #[test]
    fn actors_start_with_background_fill() {
        let actors = get_actors(&init(), Viewport::new(800, 600));
        assert!(matches!(actors[0], Actor::Fill { rgb } if rgb == color::MENU_BG));
        assert!(matches!(actors.last(), Some(Actor::Text { content, .. }) if content == HINT));
    }
}
