use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use cardtrick_core::TrickSession;
use cardtrick_widgets::card::{CardWidget, CARD_HEIGHT, CARD_WIDTH};
use cardtrick_widgets::deck_grid::DeckGridWidget;
use cardtrick_widgets::theme::Theme;

use crate::app::ScreenAction;
use crate::screens::Screen;

pub struct RevealScreen;

impl RevealScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for RevealScreen {
    fn render(&mut self, frame: &mut Frame, session: &Option<TrickSession>) {
        let area = frame.area();

        let session = match session {
            Some(s) => s,
            None => return,
        };

        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(CARD_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

        let heading = Paragraph::new(Span::styled(
            "Focus on the selected card",
            Style::default()
                .fg(Theme::REVEAL_GLOW)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(heading, chunks[0]);

        // The converged card, full size and glowing
        let reveal_index = session.reveal_index();
        if let Some(card) = session.final_deck().get(reveal_index).copied() {
            let card_area = Rect::new(
                chunks[1].x + chunks[1].width.saturating_sub(CARD_WIDTH) / 2,
                chunks[1].y,
                CARD_WIDTH,
                CARD_HEIGHT,
            );
            frame.render_widget(CardWidget::new(card).highlighted(true), card_area);
        }

        // The full spread with the converged position marked
        let grid = DeckGridWidget::new(session.final_deck()).highlight(Some(reveal_index));
        frame.render_widget(grid, chunks[3]);

        let footer = Paragraph::new(Line::from(vec![
            Span::styled("[", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("Enter", Style::default().fg(Theme::GOLD)),
            Span::styled("] New Trick  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("Esc", Style::default().fg(Theme::GOLD)),
            Span::styled("] Menu  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("q", Style::default().fg(Theme::GOLD)),
            Span::styled("] Quit", Style::default().fg(Theme::DIM_TEXT)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[4]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') => Some(ScreenAction::RestartTrick),
            KeyCode::Esc => Some(ScreenAction::BackToMenu),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(ScreenAction::Quit),
            _ => None,
        }
    }
}
