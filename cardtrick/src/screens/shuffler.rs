use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use cardtrick_core::ShufflerSession;
use cardtrick_widgets::deck_grid::DeckGridWidget;
use cardtrick_widgets::theme::Theme;

use crate::app::ScreenAction;

/// The standalone deck shuffler. Not part of the trick flow, so it
/// renders from its own session rather than implementing `Screen`.
pub struct ShufflerScreen;

impl ShufflerScreen {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&mut self, frame: &mut Frame, session: &Option<ShufflerSession>) {
        let area = frame.area();

        let session = match session {
            Some(s) => s,
            None => return,
        };

        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

        let title = Paragraph::new(Span::styled(
            "Shuffled Deck",
            Style::default()
                .fg(Theme::BRIGHT_TEXT)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let grid = DeckGridWidget::new(session.deck().cards());
        frame.render_widget(grid, chunks[1]);

        let footer = Paragraph::new(Line::from(vec![
            Span::styled("[", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("s", Style::default().fg(Theme::GOLD)),
            Span::styled("] Shuffle Cards  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("Esc", Style::default().fg(Theme::GOLD)),
            Span::styled("] Menu", Style::default().fg(Theme::DIM_TEXT)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[2]);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Enter => {
                Some(ScreenAction::Reshuffle)
            }
            KeyCode::Esc => Some(ScreenAction::BackToMenu),
            _ => None,
        }
    }
}
