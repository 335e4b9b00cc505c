use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use cardtrick_core::{Mood, TrickSession};
use cardtrick_widgets::deck_grid::DeckGridWidget;
use cardtrick_widgets::theme::Theme;

use crate::app::ScreenAction;
use crate::screens::Screen;

pub struct ImagineScreen;

impl ImagineScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for ImagineScreen {
    fn render(&mut self, frame: &mut Frame, session: &Option<TrickSession>) {
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
            "Imagine a card from your chosen colour",
            Style::default()
                .fg(Theme::BRIGHT_TEXT)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        // Only the imagined half of the deck is shown, tinted by mood
        let tint = match session.mood() {
            Some(Mood::Green) => Theme::GREEN_TINT,
            _ => Theme::RED_TINT,
        };
        let grid = DeckGridWidget::new(session.imagined_cards()).tint(tint);
        frame.render_widget(grid, chunks[1]);

        let footer = Paragraph::new(Line::from(vec![
            Span::styled("[", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("Enter", Style::default().fg(Theme::GOLD)),
            Span::styled("] Start Trick  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("Esc", Style::default().fg(Theme::GOLD)),
            Span::styled("] Menu", Style::default().fg(Theme::DIM_TEXT)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[2]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Enter => Some(ScreenAction::StartTrick),
            KeyCode::Esc => Some(ScreenAction::BackToMenu),
            _ => None,
        }
    }
}
