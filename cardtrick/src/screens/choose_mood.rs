use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use cardtrick_core::{Mood, TrickSession};
use cardtrick_widgets::theme::Theme;

use crate::app::ScreenAction;
use crate::screens::Screen;

/// The two mood panels, in cursor order
const MOODS: [Mood; 2] = [Mood::Green, Mood::Red];

pub struct ChooseMoodScreen {
    pub cursor: usize,
}

impl ChooseMoodScreen {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    fn render_mood_panel(&self, frame: &mut Frame, area: Rect, mood: Mood, hovered: bool) {
        let (label, face, color) = match mood {
            Mood::Green => ("Happy", "\u{263a}", Theme::MOOD_GREEN),
            Mood::Red => ("Angry", "\u{2639}", Theme::MOOD_RED),
        };

        let border_type = if hovered {
            BorderType::Double
        } else {
            BorderType::Rounded
        };
        let border_color = if hovered { Theme::GOLD } else { color };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(Theme::PANEL_BG));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut style = Style::default().fg(color);
        if hovered {
            style = style.add_modifier(Modifier::BOLD);
        }
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(face, style)),
            Line::from(""),
            Line::from(Span::styled(label, style)),
            Line::from(Span::styled(
                match mood {
                    Mood::Green => "(Green)",
                    Mood::Red => "(Red)",
                },
                Style::default().fg(Theme::MUTED_TEXT),
            )),
        ];
        let content = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(content, inner);
    }
}

impl Screen for ChooseMoodScreen {
    fn render(&mut self, frame: &mut Frame, _session: &Option<TrickSession>) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Percentage(20),
            Constraint::Length(3),
            Constraint::Length(9),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

        let title = Paragraph::new(Span::styled(
            "Choose Your Mood",
            Style::default()
                .fg(Theme::BRIGHT_TEXT)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[1]);

        // Two mood panels, centered
        let row = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(18),
            Constraint::Length(4),
            Constraint::Length(18),
            Constraint::Min(0),
        ])
        .split(chunks[2]);

        self.render_mood_panel(frame, row[1], MOODS[0], self.cursor == 0);
        self.render_mood_panel(frame, row[3], MOODS[1], self.cursor == 1);

        let footer = Paragraph::new(Line::from(vec![
            Span::styled("[", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("\u{2190}\u{2192}", Style::default().fg(Theme::GOLD)),
            Span::styled("] Choose  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("Enter", Style::default().fg(Theme::GOLD)),
            Span::styled("] Confirm  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("Esc", Style::default().fg(Theme::GOLD)),
            Span::styled("] Menu", Style::default().fg(Theme::DIM_TEXT)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[4]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.cursor = 0;
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.cursor = 1;
            }
            KeyCode::Enter => {
                return Some(ScreenAction::SelectMood(MOODS[self.cursor]));
            }
            KeyCode::Esc => return Some(ScreenAction::BackToMenu),
            _ => {}
        }
        None
    }
}
