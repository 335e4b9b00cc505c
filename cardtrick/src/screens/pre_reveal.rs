use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use cardtrick_core::TrickSession;
use cardtrick_widgets::deck_grid::DeckGridWidget;
use cardtrick_widgets::theme::Theme;

use crate::app::ScreenAction;
use crate::screens::Screen;

pub struct PreRevealScreen;

impl PreRevealScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for PreRevealScreen {
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

        let heading = if session.is_animating_shuffle() {
            Span::styled(
                "Shuffling...",
                Style::default()
                    .fg(Theme::GOLD)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(
                "All Cards",
                Style::default()
                    .fg(Theme::BRIGHT_TEXT)
                    .add_modifier(Modifier::BOLD),
            )
        };
        frame.render_widget(
            Paragraph::new(heading).alignment(Alignment::Center),
            chunks[0],
        );

        let grid = DeckGridWidget::new(session.final_deck());
        frame.render_widget(grid, chunks[1]);

        // No prompt while the cosmetic shuffle runs
        if !session.is_animating_shuffle() {
            let footer = Paragraph::new(Line::from(vec![
                Span::styled("[", Style::default().fg(Theme::DIM_TEXT)),
                Span::styled("Enter", Style::default().fg(Theme::GOLD)),
                Span::styled("] Reveal the Card  [", Style::default().fg(Theme::DIM_TEXT)),
                Span::styled("Esc", Style::default().fg(Theme::GOLD)),
                Span::styled("] Menu", Style::default().fg(Theme::DIM_TEXT)),
            ]))
            .alignment(Alignment::Center);
            frame.render_widget(footer, chunks[2]);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Enter => Some(ScreenAction::TriggerReveal),
            KeyCode::Esc => Some(ScreenAction::BackToMenu),
            _ => None,
        }
    }
}
