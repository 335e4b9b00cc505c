use cardtrick_core::Card;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Widget};

use crate::deck_grid::DeckGridWidget;
use crate::theme::Theme;

/// One of the three piles during the selection rounds
pub struct StackWidget<'a> {
    pub cards: &'a [Card],
    /// 0-based stack index; shown 1-based in the title
    pub index: usize,
    pub selected: bool,
    /// Keyboard cursor rests here without the stack being selected
    pub hovered: bool,
}

impl<'a> StackWidget<'a> {
    pub fn new(cards: &'a [Card], index: usize) -> Self {
        Self {
            cards,
            index,
            selected: false,
            hovered: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }
}

impl<'a> Widget for StackWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 8 || area.height < 4 {
            return;
        }

        let (border_type, border_color) = if self.selected {
            (BorderType::Double, Theme::CARD_SELECTED)
        } else if self.hovered {
            (BorderType::Rounded, Theme::GOLD)
        } else {
            (BorderType::Rounded, Theme::CARD_BORDER)
        };

        let title_style = if self.selected {
            Style::default()
                .fg(Theme::CARD_SELECTED)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::MUTED_TEXT)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(border_color))
            .title(format!(" Stack {} ", self.index + 1))
            .title_style(title_style)
            .style(Style::default().bg(Theme::PANEL_BG));

        let inner = block.inner(area);
        block.render(area, buf);

        DeckGridWidget::new(self.cards).render(inner, buf);
    }
}
