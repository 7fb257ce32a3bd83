//! Intro screen view — status text, start controls, and menu state.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use tracing::{debug, instrument};

use crate::scene::PlayerCount;

/// Menu entries on the intro screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IntroOption {
    StartOnePlayer,
    StartTwoPlayer,
    Quit,
}

impl IntroOption {
    fn label(self) -> &'static str {
        match self {
            Self::StartOnePlayer => "Practice Bout (1 Player)",
            Self::StartTwoPlayer => "Versus Bout (2 Players)",
            Self::Quit => "Quit",
        }
    }

    fn all() -> &'static [IntroOption] {
        &[Self::StartOnePlayer, Self::StartTwoPlayer, Self::Quit]
    }

    /// Whether this entry is gated by the start-controls interactive flag.
    fn is_start(self) -> bool {
        !matches!(self, Self::Quit)
    }
}

/// Action produced by a key event on the intro screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroAction {
    /// No state change beyond the view itself.
    None,
    /// Start a bout with the given player count.
    StartGame(PlayerCount),
    /// Ask the host to stop.
    Quit,
}

/// View state for the intro screen.
///
/// The about text and the interactive flag are owned here and written only
/// by the controller's render pass, so what the player sees always matches
/// the last known controller state.
#[derive(Debug, Getters)]
pub struct IntroView {
    about_text: String,
    buttons_enabled: bool,
    #[getter(skip)]
    list_state: ListState,
}

impl IntroView {
    /// Creates the view with empty text and disabled start controls.
    pub fn new() -> Self {
        let mut state = ListState::default();
        state.select(Some(0));
        Self {
            about_text: String::new(),
            buttons_enabled: false,
            list_state: state,
        }
    }

    /// Replaces the about text.
    pub fn set_about_text(&mut self, text: String) {
        self.about_text = text;
    }

    /// Enables or disables the start controls.
    pub fn set_buttons_enabled(&mut self, enabled: bool) {
        debug!(enabled, "Start controls interactive flag updated");
        self.buttons_enabled = enabled;
    }

    /// Moves selection up.
    fn select_previous(&mut self) {
        let count = IntroOption::all().len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Moves selection down.
    fn select_next(&mut self) {
        let count = IntroOption::all().len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Returns the currently selected menu entry.
    fn selected_option(&self) -> IntroOption {
        let options = IntroOption::all();
        let idx = self.list_state.selected().unwrap_or(0);
        options[idx.min(options.len() - 1)]
    }

    /// Handles a key event and returns the resulting action.
    ///
    /// Start entries only produce an action while the controls are
    /// interactive; quit is always available.
    #[instrument(skip(self, key))]
    pub fn handle_key(&mut self, key: KeyEvent) -> IntroAction {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                IntroAction::None
            }
            KeyCode::Down => {
                self.select_next();
                IntroAction::None
            }
            KeyCode::Enter => self.activate_selected(),
            KeyCode::Char('q') | KeyCode::Char('Q') => IntroAction::Quit,
            _ => IntroAction::None,
        }
    }

    fn activate_selected(&mut self) -> IntroAction {
        let option = self.selected_option();
        match option {
            IntroOption::Quit => IntroAction::Quit,
            _ if !self.buttons_enabled => {
                debug!(option = ?option, "Start controls disabled, ignoring selection");
                IntroAction::None
            }
            IntroOption::StartOnePlayer => IntroAction::StartGame(PlayerCount::One),
            IntroOption::StartTwoPlayer => IntroAction::StartGame(PlayerCount::Two),
        }
    }

    /// Renders the intro screen.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Ringside")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let about = Paragraph::new(self.about_text.as_str())
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Status"));
        frame.render_widget(about, chunks[1]);

        let items: Vec<ListItem> = IntroOption::all()
            .iter()
            .map(|opt| {
                let style = if opt.is_start() && !self.buttons_enabled {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default()
                };
                ListItem::new(opt.label()).style(style)
            })
            .collect();

        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Menu"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.list_state.clone();
        frame.render_stateful_widget(menu, chunks[2], &mut list_state);

        let help = Paragraph::new("↑↓: Navigate | Enter: Select | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }
}

impl Default for IntroView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_on_disabled_start_is_ignored() {
        let mut view = IntroView::new();
        assert!(!view.buttons_enabled());
        assert_eq!(view.handle_key(key(KeyCode::Enter)), IntroAction::None);
    }

    #[test]
    fn test_enter_on_enabled_start_selects_player_count() {
        let mut view = IntroView::new();
        view.set_buttons_enabled(true);
        assert_eq!(
            view.handle_key(key(KeyCode::Enter)),
            IntroAction::StartGame(PlayerCount::One)
        );

        view.handle_key(key(KeyCode::Down));
        assert_eq!(
            view.handle_key(key(KeyCode::Enter)),
            IntroAction::StartGame(PlayerCount::Two)
        );
    }

    #[test]
    fn test_quit_is_available_while_disabled() {
        let mut view = IntroView::new();
        assert_eq!(view.handle_key(key(KeyCode::Char('q'))), IntroAction::Quit);

        // The quit menu entry works as well.
        view.handle_key(key(KeyCode::Down));
        view.handle_key(key(KeyCode::Down));
        assert_eq!(view.handle_key(key(KeyCode::Enter)), IntroAction::Quit);
    }

    #[test]
    fn test_selection_wraps_around() {
        let mut view = IntroView::new();
        view.handle_key(key(KeyCode::Up));
        assert_eq!(view.selected_option(), IntroOption::Quit);
        view.handle_key(key(KeyCode::Down));
        assert_eq!(view.selected_option(), IntroOption::StartOnePlayer);
    }
}
