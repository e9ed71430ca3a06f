//! Interactive terminal calculator
//!
//! A Ratatui front end over [`CalculatorEngine`]: display at the top,
//! history below, key help at the bottom. Division by zero shows "Error"
//! until the reset deadline passes or the user clears.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Paragraph};
use ratatui::{DefaultTerminal, Frame};

use calc_core::operand::format_number;
use calc_core::{Action, CalculatorEngine, ErrorToken};

use crate::keys::{self, Command};

/// How long to wait for input when no reset is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

const HELP: &str = "0-9 . + - * / %   Enter/= equals   Esc/c clear   ⌫ back   r MR  m M+  n M−  x MC   q quit";

/// Set up the terminal, run the event loop, restore the terminal.
pub fn run(engine: CalculatorEngine) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = TuiApp::new(engine).run(&mut terminal);
    ratatui::restore();
    result
}

/// TUI state: the engine plus the pending error reset.
pub struct TuiApp {
    engine: CalculatorEngine,
    /// Error being shown and when to clear it
    error_reset: Option<(ErrorToken, Instant)>,
    status: String,
}

impl TuiApp {
    pub fn new(engine: CalculatorEngine) -> Self {
        TuiApp {
            engine,
            error_reset: None,
            status: String::new(),
        }
    }

    fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(self.poll_timeout(Instant::now()))? {
                if let Event::Key(key) = event::read()? {
                    match keys::command_for_event(&key) {
                        Some(Command::Quit) => return Ok(()),
                        Some(Command::Input(action)) => self.apply(action, Instant::now()),
                        None => {}
                    }
                }
            }

            self.tick(Instant::now());
        }
    }

    /// Forward an action, arming or dropping the error reset as needed.
    pub fn apply(&mut self, action: Action, now: Instant) {
        if action == Action::Clear {
            self.error_reset = None;
            self.status.clear();
        }

        if let Err(e) = self.engine.dispatch(action) {
            if let Some(token) = self.engine.error_token() {
                let delay = self.engine.settings().error_reset_delay();
                self.error_reset = Some((token, now + delay));
                tracing::debug!(?token, ?delay, "error reset scheduled");
            }
            self.status = e.to_string();
        }
    }

    /// Clear the error once its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        let Some((token, deadline)) = self.error_reset else {
            return;
        };
        if now < deadline {
            return;
        }
        self.error_reset = None;
        if self.engine.expire_error(token) {
            self.status.clear();
        }
    }

    fn poll_timeout(&self, now: Instant) -> Duration {
        match self.error_reset {
            Some((_, deadline)) => deadline.saturating_duration_since(now).min(IDLE_POLL),
            None => IDLE_POLL,
        }
    }

    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    fn draw(&self, frame: &mut Frame) {
        let state = self.engine.display_state();
        let [display_area, history_area, help_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .areas(frame.area());

        // ===== Display =====
        let current_style = if state.is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let memory_marker = if state.has_memory {
            format!(" M = {} ", format_number(state.memory))
        } else {
            String::new()
        };
        let display = Paragraph::new(vec![
            Line::from(Span::styled(state.previous.as_str(), Style::default().fg(Color::DarkGray))),
            Line::from(Span::styled(state.current.as_str(), current_style)),
        ])
        .alignment(Alignment::Right)
        .block(
            Block::bordered()
                .title(" Tally ")
                .title_top(Line::from(memory_marker).right_aligned()),
        );
        frame.render_widget(display, display_area);

        // ===== History =====
        let items: Vec<ListItem> = if state.history.is_empty() {
            vec![ListItem::new(Span::styled("(none)", Style::default().fg(Color::DarkGray)))]
        } else {
            state
                .history
                .iter()
                .map(|entry| ListItem::new(entry.as_str()))
                .collect()
        };
        frame.render_widget(List::new(items).block(Block::bordered().title(" History ")), history_area);

        // ===== Help / status =====
        let help = Paragraph::new(vec![
            Line::from(Span::styled(HELP, Style::default().fg(Color::DarkGray))),
            Line::from(Span::styled(self.status.as_str(), Style::default().fg(Color::Red))),
        ]);
        frame.render_widget(help, help_area);
    }
}
