use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use cardtrick_core::{TrickSession, SELECTION_ROUNDS, STACK_COUNT};
use cardtrick_widgets::stack_panel::StackWidget;
use cardtrick_widgets::theme::Theme;

use crate::app::ScreenAction;
use crate::screens::Screen;

pub struct StackSelectScreen {
    pub cursor: usize,
    stack_rects: Vec<Rect>,
}

impl StackSelectScreen {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            stack_rects: Vec::new(),
        }
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
        self.stack_rects.clear();
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<ScreenAction> {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            for (i, rect) in self.stack_rects.iter().enumerate() {
                if mouse.column >= rect.x
                    && mouse.column < rect.x + rect.width
                    && mouse.row >= rect.y
                    && mouse.row < rect.y + rect.height
                {
                    self.cursor = i;
                    return Some(ScreenAction::SelectStack(i));
                }
            }
        }
        None
    }
}

impl Screen for StackSelectScreen {
    fn render(&mut self, frame: &mut Frame, session: &Option<TrickSession>) {
        let area = frame.area();

        let session = match session {
            Some(s) => s,
            None => return,
        };

        let chunks = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

        let title = Paragraph::new(Span::styled(
            "Select a Card Stack",
            Style::default()
                .fg(Theme::BRIGHT_TEXT)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let round = Paragraph::new(Span::styled(
            format!("Round {} of {}", session.round(), SELECTION_ROUNDS),
            Style::default().fg(Theme::MUTED_TEXT),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(round, chunks[1]);

        // Three equal panels; remember their rects for mouse hits
        let row = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(chunks[2]);

        self.stack_rects.clear();
        for (i, stack) in session.stacks().iter().enumerate() {
            self.stack_rects.push(row[i]);
            let widget = StackWidget::new(stack, i)
                .selected(session.selected_stack() == Some(i))
                .hovered(self.cursor == i);
            frame.render_widget(widget, row[i]);
        }

        let footer = Paragraph::new(Line::from(vec![
            Span::styled("[", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("\u{2190}\u{2192}", Style::default().fg(Theme::GOLD)),
            Span::styled("] Move  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("Space", Style::default().fg(Theme::GOLD)),
            Span::styled("] Select  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("Enter", Style::default().fg(Theme::GOLD)),
            Span::styled("] Confirm  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("1-3", Style::default().fg(Theme::GOLD)),
            Span::styled("] Pick  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("Esc", Style::default().fg(Theme::GOLD)),
            Span::styled("] Menu", Style::default().fg(Theme::DIM_TEXT)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[3]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.cursor < STACK_COUNT - 1 {
                    self.cursor += 1;
                }
            }
            KeyCode::Char(' ') => {
                return Some(ScreenAction::SelectStack(self.cursor));
            }
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                self.cursor = index;
                return Some(ScreenAction::SelectStack(index));
            }
            KeyCode::Enter => {
                return Some(ScreenAction::ConfirmSelection);
            }
            KeyCode::Esc => return Some(ScreenAction::BackToMenu),
            _ => {}
        }
        None
    }
}
