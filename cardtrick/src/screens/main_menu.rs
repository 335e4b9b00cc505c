use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use cardtrick_core::TrickSession;
use cardtrick_widgets::theme::Theme;

use crate::app::ScreenAction;
use crate::screens::Screen;

const MENU_ITEMS: [&str; 3] = ["Begin the Trick", "Deck Shuffler", "Quit"];

pub struct MainMenuScreen {
    pub selected: usize,
}

impl MainMenuScreen {
    pub fn new() -> Self {
        Self { selected: 0 }
    }
}

impl Screen for MainMenuScreen {
    fn render(&mut self, frame: &mut Frame, _session: &Option<TrickSession>) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Percentage(28),
            Constraint::Length(9),
            Constraint::Percentage(30),
            Constraint::Min(3),
        ])
        .split(area);

        // Title - ASCII art
        let title_style = Style::default()
            .fg(Theme::GOLD)
            .add_modifier(Modifier::BOLD);
        let title_lines = vec![
            Line::from(Span::styled(
                "  ____              _   _____     _      _    ",
                title_style,
            )),
            Line::from(Span::styled(
                " / ___|__ _ _ __ __| | |_   _| __(_) ___| | __",
                title_style,
            )),
            Line::from(Span::styled(
                "| |   / _` | '__/ _` |   | || '__| |/ __| |/ /",
                title_style,
            )),
            Line::from(Span::styled(
                "| |__| (_| | | | (_| |   | || |  | | (__|   < ",
                title_style,
            )),
            Line::from(Span::styled(
                " \\____\\__,_|_|  \\__,_|   |_||_|  |_|\\___|_|\\_\\",
                title_style,
            )),
            Line::from(""),
            Line::from(Span::styled(
                "A parlor trick for your terminal",
                Style::default().fg(Theme::MUTED_TEXT),
            )),
        ];

        let title = Paragraph::new(title_lines).alignment(Alignment::Center);
        frame.render_widget(title, chunks[1]);

        // Menu options
        let mut menu_lines = Vec::new();
        for (i, item) in MENU_ITEMS.iter().enumerate() {
            let style = if i == self.selected {
                Style::default()
                    .fg(Theme::CARD_SELECTED)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Theme::MUTED_TEXT)
            };
            let prefix = if i == self.selected { "> " } else { "  " };
            menu_lines.push(Line::from(Span::styled(
                format!("{}{}", prefix, item),
                style,
            )));
        }

        let menu = Paragraph::new(menu_lines).alignment(Alignment::Center);
        frame.render_widget(menu, chunks[2]);

        // Footer
        let footer = Paragraph::new(Line::from(vec![
            Span::styled("[", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("\u{2191}\u{2193}", Style::default().fg(Theme::GOLD)),
            Span::styled("] Navigate  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("Enter", Style::default().fg(Theme::GOLD)),
            Span::styled("] Select  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("q", Style::default().fg(Theme::GOLD)),
            Span::styled("] Quit", Style::default().fg(Theme::DIM_TEXT)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[3]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected < MENU_ITEMS.len() - 1 {
                    self.selected += 1;
                }
            }
            KeyCode::Enter => {
                return match self.selected {
                    0 => Some(ScreenAction::OpenTrick),
                    1 => Some(ScreenAction::OpenShuffler),
                    2 => Some(ScreenAction::Quit),
                    _ => None,
                };
            }
            KeyCode::Char('q') => return Some(ScreenAction::Quit),
            _ => {}
        }
        None
    }
}
