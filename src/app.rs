use crate::config::{self, Config};
use crate::core::gfx::{Canvas, Presenter};
use crate::core::input::{self, InputEvent};
use crate::core::timing::{FpsCounter, FramePacer};
use crate::screens::{about, menu, settings, start, Screen as CurrentScreen, ScreenAction};
use crate::ui::actors::Actor;
use crate::ui::compose;
use crate::ui::font::Fonts;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::Window,
};

use log::{debug, error, info, warn};
use std::{
    error::Error,
    path::PathBuf,
    sync::Arc,
    time::Instant,
};

pub struct App {
    config: Config,
    config_path: PathBuf,
    window: Option<Arc<Window>>,
    presenter: Option<Presenter>,
    canvas: Canvas,
    fonts: Fonts,
    current_screen: CurrentScreen,
    menu_state: menu::State,
    settings_state: settings::State,
    start_state: Option<start::State>,
    pending: Vec<InputEvent>,
    pacer: FramePacer,
    fps: FpsCounter,
}

impl App {
    fn new(config: Config, config_path: PathBuf) -> Self {
        let now = Instant::now();
        Self {
            canvas: Canvas::new(config.width, config.height),
            settings_state: settings::init((config.width, config.height)),
            pacer: FramePacer::new(config.fps, now),
            config,
            config_path,
            window: None,
            presenter: None,
            fonts: Fonts::new(),
            current_screen: CurrentScreen::Menu,
            menu_state: menu::init(),
            start_state: None,
            pending: Vec::with_capacity(16),
            fps: FpsCounter::new(now),
        }
    }

    /// Hands a batch of input to the active screen.
    fn step_screen(&mut self, events: &[InputEvent], now: Instant) -> ScreenAction {
        let vp = self.canvas.viewport();
        match self.current_screen {
            CurrentScreen::Start => match &mut self.start_state {
                Some(state) => start::update(state, now, events, vp, &mut self.fonts),
                None => ScreenAction::Navigate(CurrentScreen::Menu),
            },
            CurrentScreen::Menu => first_action(events, |ev| menu::handle_input(&mut self.menu_state, ev)),
            CurrentScreen::Settings => first_action(events, |ev| settings::handle_input(&mut self.settings_state, ev)),
            CurrentScreen::About => first_action(events, about::handle_input),
        }
    }

    fn handle_action(&mut self, action: ScreenAction, event_loop: &ActiveEventLoop, now: Instant) {
        match action {
            ScreenAction::None => {}
            ScreenAction::Navigate(screen) => {
                info!("Screen {:?} -> {:?}", self.current_screen, screen);
                if let Some(state) = self.start_state.take() {
                    match state.choice().confirmed() {
                        Some(color) => info!("Left the intro at {:?} with '{}' chosen.", state.stage(), color),
                        None => info!("Left the intro at {:?} without a choice.", state.stage()),
                    }
                }
                match screen {
                    CurrentScreen::Start => {
                        self.start_state = Some(start::init(self.config.start_config(), now));
                    }
                    CurrentScreen::Settings => {
                        self.settings_state = settings::init(self.canvas.size());
                    }
                    CurrentScreen::Menu | CurrentScreen::About => {}
                }
                self.current_screen = screen;
            }
            ScreenAction::Exit => {
                info!("Exit requested.");
                event_loop.exit();
            }
            ScreenAction::SetResolution(width, height) => {
                let Some(window) = self.window.clone() else { return; };
                info!("Requesting window size {}x{}", width, height);
                // Some platforms resize synchronously and report the new size here.
                if let Some(size) = window.request_inner_size(PhysicalSize::new(width, height)) {
                    self.resize(size.width, size.height);
                }
                self.config.width = width;
                self.config.height = height;
                if let Err(e) = config::update_display_resolution(&self.config_path, width, height) {
                    warn!("Failed to save resolution to config: {}", e);
                }
            }
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            debug!("Ignoring zero-sized resize.");
            return;
        }
        if self.canvas.size() == (width, height) {
            return;
        }
        self.canvas.resize(width, height);
        if let Some(presenter) = &mut self.presenter {
            if let Err(e) = presenter.resize(width, height) {
                warn!("Surface resize to {}x{} failed: {}", width, height, e);
            }
        }
    }

    fn draw_frame(&mut self) -> Result<(), Box<dyn Error>> {
        let vp = self.canvas.viewport();
        if vp.is_empty() {
            return Ok(());
        }
        let actors: Vec<Actor> = match self.current_screen {
            CurrentScreen::Menu => menu::get_actors(&self.menu_state, vp),
            CurrentScreen::Settings => settings::get_actors(&self.settings_state, vp),
            CurrentScreen::About => about::get_actors(vp),
            CurrentScreen::Start => match &self.start_state {
                Some(state) => start::get_actors(state, vp),
                None => Vec::new(),
            },
        };
        compose::render(&actors, &mut self.canvas, &mut self.fonts);
        if let Some(presenter) = &mut self.presenter {
            presenter.present(&self.canvas)?;
        }
        Ok(())
    }

    #[inline(always)]
    fn update_fps_title(&mut self, now: Instant) {
        if let (Some(fps), Some(window)) = (self.fps.tick(now), self.window.as_ref()) {
            window.set_title(&format!("{} | {:?} | {:.1} FPS", config::WINDOW_TITLE, self.current_screen, fps));
        }
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Box<dyn Error>> {
        let window_attributes = Window::default_attributes()
            .with_title(config::WINDOW_TITLE)
            .with_resizable(true)
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));

        let window = Arc::new(event_loop.create_window(window_attributes)?);
        let presenter = Presenter::new(window.clone())?;
        let sz = window.inner_size();
        self.presenter = Some(presenter);
        self.window = Some(window);
        self.resize(sz.width, sz.height);
        info!("Starting event loop...");
        Ok(())
    }
}

/// Feeds events to `handle` until one produces an action. Window close maps
/// to `Exit` on every screen.
fn first_action(events: &[InputEvent], mut handle: impl FnMut(InputEvent) -> ScreenAction) -> ScreenAction {
    for &ev in events {
        let action = if ev == InputEvent::Quit { ScreenAction::Exit } else { handle(ev) };
        if action != ScreenAction::None {
            return action;
        }
    }
    ScreenAction::None
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_graphics(event_loop) {
                error!("Failed to initialize graphics: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.as_ref().cloned() else { return; };
        if window_id != window.id() { return; }

        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested. Shutting down.");
                let now = Instant::now();
                let action = self.step_screen(&[InputEvent::Quit], now);
                self.handle_action(action, event_loop, now);
            }
            WindowEvent::Resized(new_size) => {
                self.resize(new_size.width, new_size.height);
            }
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(ev) = input::from_key_event(&key_event) {
                    self.pending.push(ev);
                }
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();

                let events = std::mem::take(&mut self.pending);
                let action = self.step_screen(&events, now);
                self.pending = events;
                self.pending.clear();
                self.handle_action(action, event_loop, now);
                if event_loop.exiting() {
                    return;
                }

                if let Err(e) = self.draw_frame() {
                    error!("Failed to present frame: {}", e);
                    event_loop.exit();
                    return;
                }
                self.update_fps_title(now);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if let Some(window) = &self.window {
            if self.pacer.is_due(now) {
                // Advance on request: a minimised window may never deliver the redraw.
                self.pacer.advance(now);
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.pacer.next_frame()));
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.start_state = None;
        self.presenter = None;
        self.window = None;
        info!("Display resources released.");
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let config_path = PathBuf::from(config::CONFIG_PATH);
    let config = config::load(&config_path);
    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, config_path);
    info!("Frame pacing: {:?} per frame.", app.pacer.period());
    event_loop.run_app(&mut app)?;
    Ok(())
}
