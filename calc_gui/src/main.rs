//! # Tally GUI Application
//!
//! Desktop calculator built with Iced on top of calc_core. Keypad buttons
//! and keyboard shortcuts both become [`Action`]s for the engine; the view
//! re-renders from the engine's display snapshot after every message.
//!
//! Division by zero shows "Error" and schedules an automatic clear. The
//! scheduled task is abortable: pressing clear (or hitting a new error)
//! aborts the previous one, and the engine ignores resets whose token no
//! longer matches.
//!
//! Settings are read from the JSON file named by `TALLY_CONFIG`, if set.

mod ui;

use std::path::Path;

use iced::keyboard::{self, key::Named};
use iced::widget::column;
use iced::{event, task, window, Element, Event, Subscription, Task, Theme};
use tracing_subscriber::EnvFilter;

use calc_core::{action_for_key, load_settings, Action, CalculatorEngine, EngineSettings, ErrorToken, Key};

/// Environment variable naming a settings file.
const CONFIG_ENV: &str = "TALLY_CONFIG";

pub fn main() -> iced::Result {
    init_logging();

    iced::application(App::new, App::update, App::view)
        .title("Tally")
        .theme(App::theme)
        .subscription(App::subscription)
        .window_size((340.0, 640.0))
        .run()
}

#[derive(Debug, Clone)]
pub enum Message {
    /// A keypad button or bound key
    Press(Action),
    /// The error display delay for this token has elapsed
    ErrorExpired(ErrorToken),
    ToggleDarkMode,
}

pub struct App {
    pub engine: CalculatorEngine,
    /// Pending automatic clear of the error display
    error_timer: Option<task::Handle>,
    pub dark_mode: bool,
}

impl App {
    fn new() -> Self {
        App::with_settings(settings_from_env())
    }

    fn with_settings(settings: EngineSettings) -> Self {
        App {
            engine: CalculatorEngine::with_settings(settings),
            error_timer: None,
            dark_mode: false,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Press(action) => self.press(action),
            Message::ErrorExpired(token) => {
                if self.engine.expire_error(token) {
                    self.error_timer = None;
                    tracing::debug!(?token, "error display reset");
                }
                Task::none()
            }
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
                Task::none()
            }
        }
    }

    fn press(&mut self, action: Action) -> Task<Message> {
        if action == Action::Clear {
            self.cancel_error_timer();
        }

        match self.engine.dispatch(action) {
            Ok(()) => Task::none(),
            Err(e) if e.is_recoverable() => self.schedule_error_reset(),
            Err(e) => {
                tracing::warn!(error = %e, %action, "engine rejected action");
                Task::none()
            }
        }
    }

    fn schedule_error_reset(&mut self) -> Task<Message> {
        self.cancel_error_timer();
        let Some(token) = self.engine.error_token() else {
            return Task::none();
        };

        let delay = self.engine.settings().error_reset_delay();
        let (task, handle) = Task::perform(
            async move { tokio::time::sleep(delay).await },
            move |_| Message::ErrorExpired(token),
        )
        .abortable();
        self.error_timer = Some(handle);
        task
    }

    fn cancel_error_timer(&mut self) {
        if let Some(handle) = self.error_timer.take() {
            handle.abort();
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let state = self.engine.display_state();

        column![
            ui::toolbar::view_header(self.dark_mode),
            ui::display::view_display(&state),
            ui::keypad::view_keypad(state.is_error()),
            ui::history_panel::view_history(&state.history),
            ui::status_bar::view_status_bar(&state),
        ]
        .spacing(8)
        .padding(12)
        .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(handle_event)
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

fn handle_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            translate_key(&key).and_then(action_for_key).map(Message::Press)
        }
        _ => None,
    }
}

/// Convert an Iced key into the toolkit-neutral key of the engine keymap.
fn translate_key(key: &keyboard::Key) -> Option<Key> {
    match key.as_ref() {
        keyboard::Key::Named(Named::Enter) => Some(Key::Enter),
        keyboard::Key::Named(Named::Escape) => Some(Key::Escape),
        keyboard::Key::Named(Named::Backspace) => Some(Key::Backspace),
        keyboard::Key::Character(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(symbol), None) => Some(Key::Char(symbol)),
                _ => None,
            }
        }
        _ => None,
    }
}

fn settings_from_env() -> EngineSettings {
    let Some(path) = std::env::var_os(CONFIG_ENV) else {
        return EngineSettings::default();
    };
    match load_settings(Path::new(&path)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(error = %e, "falling back to default settings");
            EngineSettings::default()
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default: warnings only).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
