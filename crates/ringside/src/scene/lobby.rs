//! Lobby screen — the landing scene after the intro hands off.
//!
//! Deliberately thin: it shows the requested bout while the party forms.
//! Matchmaking itself lives on the backend, not in this client.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tracing::{debug, info, instrument};

use crate::scene::{SceneHandoff, ScreenTransition};

/// State for the lobby screen.
#[derive(Debug)]
pub struct LobbyScreen {
    handoff: SceneHandoff,
}

impl LobbyScreen {
    /// Creates the lobby screen over the handoff written by the intro.
    #[instrument(skip(handoff))]
    pub fn new(handoff: SceneHandoff) -> Self {
        debug!(count = ?handoff.target_player_count(), "Entering lobby");
        Self { handoff }
    }

    /// Renders the lobby.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Ringside — Lobby")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let body_text = match self.handoff.target_player_count() {
            Some(count) => format!(
                "Setting up a {}-player bout. Waiting for the arena to open...",
                count.as_u8()
            ),
            None => "No bout selected. Return to the intro screen.".to_string(),
        };
        let body = Paragraph::new(body_text)
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(body, chunks[1]);

        let help = Paragraph::new("q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    /// Handles a key event and returns the resulting transition.
    #[instrument(skip(self, key))]
    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("Lobby quit requested");
                ScreenTransition::Quit
            }
            _ => ScreenTransition::Stay,
        }
    }
}
