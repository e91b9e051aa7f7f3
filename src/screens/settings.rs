use crate::core::input::InputEvent;
use crate::core::space::Viewport;
use crate::screens::{Screen, ScreenAction};
use crate::ui::actors::{Actor, TextAlign};
use crate::ui::color;
use crate::ui::components::hint;
use crate::ui::components::menu_list::{self, Highlight, MenuParams};

pub const RESOLUTIONS: [(u32, u32); 3] = [(800, 600), (1024, 768), (1280, 720)];

const TITLE_PX: f32 = 34.0;
const ROW_PX: f32 = 26.0;
const ROW_SPACING: f32 = 48.0;
const HIGHLIGHT_WIDTH: f32 = 260.0;
const HINT: &str = "Up/Down to move, Enter to apply, Esc to go back";

pub struct State {
    pub selected_index: usize,
    labels: Vec<String>,
}

/// Starts on the preset matching `current`, or the first one.
pub fn init(current: (u32, u32)) -> State {
    State {
        selected_index: RESOLUTIONS.iter().position(|&r| r == current).unwrap_or(0),
        labels: RESOLUTIONS.iter().map(|(w, h)| format!("{w} x {h}")).collect(),
    }
}

pub fn handle_input(state: &mut State, event: InputEvent) -> ScreenAction {
    let n = RESOLUTIONS.len();
    match event {
        InputEvent::Up => {
            state.selected_index = (state.selected_index + n - 1) % n;
            ScreenAction::None
        }
        InputEvent::Down => {
            state.selected_index = (state.selected_index + 1) % n;
            ScreenAction::None
        }
        InputEvent::Enter => {
            let (w, h) = RESOLUTIONS[state.selected_index];
            ScreenAction::SetResolution(w, h)
        }
        InputEvent::Escape => ScreenAction::Navigate(Screen::Menu),
        _ => ScreenAction::None,
    }
}

pub fn get_actors(state: &State, vp: Viewport) -> Vec<Actor<'_>> {
    let mut actors = Vec::with_capacity(RESOLUTIONS.len() + 4);
    actors.push(Actor::Fill { rgb: color::SETTINGS_BG });
    actors.push(Actor::text(
        "Resolution",
        vp.center_x(),
        vp.from_top(0.2),
        TITLE_PX,
        color::WHITE,
        255,
        TextAlign::Center,
    ));
    actors.extend(menu_list::build_vertical_menu(MenuParams {
        options: &state.labels,
        selected_index: state.selected_index,
        x: vp.center_x(),
        align: TextAlign::Center,
        start_center_y: vp.from_top(0.4),
        row_spacing: ROW_SPACING,
        px: ROW_PX,
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
    fn starts_on_current_resolution() {
        assert_eq!(init((1024, 768)).selected_index, 1);
        assert_eq!(init((640, 480)).selected_index, 0);
    }

    #[test]
    fn enter_requests_selected_preset() {
        let mut s = init((800, 600));
        handle_input(&mut s, InputEvent::Up);
        assert_eq!(handle_input(&mut s, InputEvent::Enter), ScreenAction::SetResolution(1280, 720));
        assert_eq!(handle_input(&mut s, InputEvent::Escape), ScreenAction::Navigate(Screen::Menu));
    }

    #[test]
    fn labels_render_in_order() {
        let s = init((800, 600));
        let labels: Vec<String> = get_actors(&s, Viewport::new(800, 600))
            .into_iter()
            .filter_map(|a| match a {
                Actor::Text { content, px, .. } if px == ROW_PX => Some(content.into_owned()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["800 x 600", "1024 x 768", "1280 x 720"]);
    }
}
