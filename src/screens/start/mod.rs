// src/screens/start/mod.rs
//! The opening cut-scene: two timed text panels over the background, a
//! color choice that is saved to disk, and an epilogue that waits for Esc.

pub mod choice;
pub mod stage;

use std::path::PathBuf;
use std::time::Instant;

use log::{debug, info, warn};

use crate::core::assets::Background;
use crate::core::input::InputEvent;
use crate::core::save;
use crate::core::space::Viewport;
use crate::screens::{Screen, ScreenAction};
use crate::ui::actors::{Actor, TextAlign};
use crate::ui::anim::{self, Timeline};
use crate::ui::color;
use crate::ui::components::hint;
use crate::ui::components::menu_list::{self, Highlight, MenuParams};
use crate::ui::components::text_panel::{self, PanelParams};
use crate::ui::layout::{TextBlock, TextMetrics};

use choice::{CATALOG, ChoiceState};
use stage::{Stage, StageClock};

const INTRO_A_TEXT: &str = "Long ago, when the old roads were still safe, a traveller set out \
    from a quiet village with nothing but a map and a borrowed sword.";
const INTRO_B_TEXT: &str = "Every hero of the valley carried a banner of their own color. \
    Before the journey begins, you must choose yours.";
const PROMPT_TEXT: &str = "Choose the color of your banner:";
const SKIPPED_TEXT: &str = "You set off without a banner. Perhaps the road will choose for you.";

const CHOICE_HINT: &str = "Up/Down or 1-3 to pick, Enter to confirm, Esc to skip";
const EPILOGUE_HINT: &str = "Press Esc to return to the menu";

const STORY_PX: f32 = 28.0;
const PROMPT_PX: f32 = 30.0;
const OPTION_PX: f32 = 28.0;

const SIDE_MARGIN: f32 = 60.0;
const MIN_WRAP_WIDTH: f32 = 120.0;
const PANEL_PADDING: f32 = 24.0;
/// Panel opacity when the text is fully opaque.
const PANEL_MAX_ALPHA: u8 = 160;

const PROMPT_FROM_TOP: f32 = 0.25;
const LIST_FROM_TOP: f32 = 0.45;
const LIST_OFFSET_X: f32 = 70.0;
const OPTION_ROW_SPACING: f32 = 46.0;
const SWATCH_OFFSET_X: f32 = 90.0;
const SWATCH_SIZE: f32 = 24.0;

#[derive(Clone, Debug)]
pub struct StartConfig {
    pub timeline: Timeline,
    pub gap_ms: u64,
    pub background: PathBuf,
    pub save_path: PathBuf,
}

pub struct State {
    cfg: StartConfig,
    clock: StageClock,
    background: Background,
    intro_a: TextBlock,
    intro_b: TextBlock,
    prompt: TextBlock,
    epilogue: TextBlock,
    choice: ChoiceState,
    entry_labels: Vec<String>,
    text_alpha: u8,
}

pub fn init(cfg: StartConfig, now: Instant) -> State {
    match save::load(&cfg.save_path) {
        Ok(prev) => info!("Previous choice on record: {}", prev.color),
        Err(e) => debug!("No previous choice: {}", e),
    }
    let choice = ChoiceState::new(&CATALOG);
    let entry_labels = choice
        .options()
        .iter()
        .enumerate()
        .map(|(i, opt)| format!("{}. {}", i + 1, opt.label))
        .collect();

    State {
        background: Background::new(cfg.background.clone()),
        cfg,
        clock: StageClock::new(now),
        intro_a: TextBlock::new(INTRO_A_TEXT, STORY_PX),
        intro_b: TextBlock::new(INTRO_B_TEXT, STORY_PX),
        prompt: TextBlock::new(PROMPT_TEXT, PROMPT_PX),
        epilogue: TextBlock::new(SKIPPED_TEXT, STORY_PX),
        choice,
        entry_labels,
        text_alpha: 0,
    }
}

impl State {
    #[inline(always)]
    pub fn stage(&self) -> Stage {
        self.clock.stage()
    }

    #[cfg(test)]
    pub fn background(&self) -> &Background {
        &self.background
    }

    #[inline(always)]
    pub fn choice(&self) -> &ChoiceState {
        &self.choice
    }

    #[cfg(test)]
    pub fn text_alpha(&self) -> u8 {
        self.text_alpha
    }

    fn active_block_mut(&mut self) -> Option<&mut TextBlock> {
        match self.clock.stage() {
            Stage::IntroA => Some(&mut self.intro_a),
            Stage::IntroB => Some(&mut self.intro_b),
            Stage::Choice => Some(&mut self.prompt),
            Stage::Epilogue => Some(&mut self.epilogue),
            Stage::Gap => None,
        }
    }
}

/// One frame tick: consume `events`, follow the surface size, advance the
/// timeline and re-wrap the visible text.
pub fn update(
    state: &mut State,
    now: Instant,
    events: &[InputEvent],
    vp: Viewport,
    fonts: &mut impl TextMetrics,
) -> ScreenAction {
    for &ev in events {
        match handle_input(state, ev, now) {
            ScreenAction::None => {}
            action => return action,
        }
    }

    if state.background.ensure_size(vp.width, vp.height) {
        debug!("Background cached at {:?}", state.background.size());
    }
    advance(state, now);

    let wrap_width = (vp.width as f32 - 2.0 * SIDE_MARGIN).max(MIN_WRAP_WIDTH);
    if let Some(block) = state.active_block_mut() {
        if block.relayout(fonts, wrap_width) {
            debug!("Re-wrapped {} lines for width {}", block.lines().len(), wrap_width);
        }
    }
    ScreenAction::None
}

fn handle_input(state: &mut State, ev: InputEvent, now: Instant) -> ScreenAction {
    if ev == InputEvent::Quit {
        return ScreenAction::Exit;
    }
    match (state.clock.stage(), ev) {
        (Stage::Choice, InputEvent::Up | InputEvent::Left) => state.choice.step(-1),
        (Stage::Choice, InputEvent::Down | InputEvent::Right) => state.choice.step(1),
        (Stage::Choice, InputEvent::Enter) => confirm(state, now),
        (Stage::Choice, InputEvent::Digit(_)) => {
            if let Some(idx) = ev.digit_index() {
                if state.choice.select(idx) {
                    confirm(state, now);
                }
            }
        }
        (Stage::Choice, InputEvent::Escape) => {
            info!("Choice skipped");
            state.clock.enter(Stage::Epilogue, now);
        }
        (Stage::Epilogue, InputEvent::Escape) => return ScreenAction::Navigate(Screen::Menu),
        _ => {}
    }
    ScreenAction::None
}

fn confirm(state: &mut State, now: Instant) {
    let label = state.choice.confirm();
    if let Err(e) = save::save(&state.cfg.save_path, label) {
        warn!("Could not save choice '{}': {}", label, e);
    }
    state.epilogue.set_text(format!(
        "You raise the {} banner and step onto the road. Your choice has been recorded.",
        label.to_lowercase()
    ));
    state.clock.enter(Stage::Epilogue, now);
}

/// At most one timed transition per tick.
fn advance(state: &mut State, now: Instant) {
    let stage = state.clock.stage();
    let elapsed = state.clock.elapsed_ms(now);
    let appear_ms = state.cfg.timeline.appear_ms;

    state.text_alpha = match stage {
        Stage::IntroA | Stage::IntroB => {
            let fade = state.cfg.timeline.alpha(elapsed);
            if fade.is_done() {
                state.clock.enter(stage.next(), now);
            }
            fade.opacity()
        }
        Stage::Gap => {
            if elapsed >= state.cfg.gap_ms {
                state.clock.enter(stage.next(), now);
            }
            0
        }
        Stage::Choice | Stage::Epilogue => anim::fade_in(elapsed, appear_ms),
    };
}

#[inline(always)]
fn panel_alpha(text_alpha: u8) -> u8 {
    (text_alpha as u16 * PANEL_MAX_ALPHA as u16 / 255) as u8
}

fn panel(block: &TextBlock, center_x: f32, center_y: f32, text_alpha: u8) -> Vec<Actor<'_>> {
    text_panel::build(block, PanelParams {
        center_x,
        center_y,
        padding: PANEL_PADDING,
        panel_rgb: color::PANEL,
        panel_alpha: panel_alpha(text_alpha),
        text_rgb: color::WHITE,
        text_alpha,
    })
}

pub fn get_actors(state: &State, vp: Viewport) -> Vec<Actor<'_>> {
    let mut actors: Vec<Actor> = Vec::with_capacity(16);

    match state.background.image() {
        Some(image) => actors.push(Actor::Image { image, x: 0, y: 0, alpha: 255 }),
        None => actors.push(Actor::Fill { rgb: color::START_FALLBACK_BG }),
    }

    let alpha = state.text_alpha;
    match state.clock.stage() {
        Stage::IntroA => actors.extend(panel(&state.intro_a, vp.center_x(), vp.center_y(), alpha)),
        Stage::IntroB => actors.extend(panel(&state.intro_b, vp.center_x(), vp.center_y(), alpha)),
        Stage::Gap => {}
        Stage::Choice => {
            actors.extend(panel(&state.prompt, vp.center_x(), vp.from_top(PROMPT_FROM_TOP), alpha));

            let list_x = vp.center_x() - LIST_OFFSET_X;
            let list_y = vp.from_top(LIST_FROM_TOP);
            actors.extend(menu_list::build_vertical_menu(MenuParams {
                options: &state.entry_labels,
                selected_index: state.choice.selected_index(),
                x: list_x,
                align: TextAlign::Left,
                start_center_y: list_y,
                row_spacing: OPTION_ROW_SPACING,
                px: OPTION_PX,
                selected_color: color::WHITE,
                normal_color: color::scale(color::WHITE, 0.55),
                highlight: Highlight::Marker,
                alpha,
            }));

            for (i, opt) in state.choice.options().iter().enumerate() {
                let selected = i == state.choice.selected_index();
                let cy = list_y + i as f32 * OPTION_ROW_SPACING;
                actors.push(Actor::quad(
                    vp.center_x() + SWATCH_OFFSET_X,
                    cy - 0.5 * SWATCH_SIZE,
                    SWATCH_SIZE,
                    SWATCH_SIZE,
                    if selected { opt.rgb } else { color::scale(opt.rgb, 0.55) },
                    alpha,
                ));
            }
            // Controls stay readable while the list fades in.
            actors.push(hint::build(CHOICE_HINT, vp, 255));
        }
        Stage::Epilogue => {
            actors.extend(panel(&state.epilogue, vp.center_x(), vp.center_y(), alpha));
            actors.push(hint::build(EPILOGUE_HINT, vp, alpha));
        }
    }
    actors
}
