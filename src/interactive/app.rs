//! TUI application state and logic

use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::solver::{Session, autocomplete, suggestions};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub session: Session,
    pub input: String,
    /// Highlighted row of the guess list
    pub selected: Option<usize>,
    pub theme: Theme,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            dictionary,
            session: Session::new(),
            input: String::new(),
            selected: None,
            theme: Theme::default(),
            should_quit: false,
        }
    }

    /// Words still consistent with the recorded guesses
    #[must_use]
    pub fn candidates(&self) -> Vec<&'a Word> {
        self.session.candidates(self.dictionary)
    }

    /// Words matching what is being typed
    #[must_use]
    pub fn suggestions(&self) -> Vec<&'a Word> {
        suggestions(self.dictionary, self.session.guesses(), &self.input)
    }

    /// Record the typed guess; input is cleared only if it was accepted
    ///
    /// Whitespace-only input is discarded without touching the session.
    pub fn submit(&mut self) {
        if self.input.trim().is_empty() {
            self.input.clear();
            return;
        }

        let next = self.session.submit(&self.input);
        let accepted = next.guesses().len() > self.session.guesses().len();
        self.session = next;

        if accepted {
            debug!("accepted {:?}", self.input);
            self.input.clear();
        }
    }

    /// Replace the input with the first suggestion
    pub fn autocomplete(&mut self) {
        if let Some(word) = autocomplete(self.dictionary, self.session.guesses(), &self.input) {
            self.input = word.text().to_string();
        }
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Drop every guess, the input and any error
    pub fn reset_all(&mut self) {
        self.session = Session::reset();
        self.input.clear();
        self.selected = None;
    }

    pub fn select_next(&mut self) {
        let count = self.session.guesses().len();
        if count == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < count => i + 1,
            Some(i) => i,
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        if self.session.is_empty() {
            self.selected = None;
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
    }

    /// Remove the highlighted guess, keeping a valid highlight
    pub fn remove_selected(&mut self) {
        let Some(index) = self.selected else {
            return;
        };

        self.session = self.session.remove(index);

        let count = self.session.guesses().len();
        self.selected = if count == 0 {
            None
        } else {
            Some(index.min(count - 1))
        };
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.clear_input(),
            KeyCode::Char(' ') if ctrl => self.autocomplete(),
            KeyCode::Char('r') if ctrl => self.reset_all(),
            KeyCode::Char('t') if ctrl => self.toggle_theme(),
            KeyCode::Char(_) if ctrl => {}
            KeyCode::Char(c) => self.input.push(c),
            KeyCode::Tab => self.autocomplete(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Up => self.select_previous(),
            KeyCode::Down => self.select_next(),
            KeyCode::Delete => self.remove_selected(),
            KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}
