use cardtrick_core::Card;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

use crate::card::{card_color, card_label};
use crate::theme::Theme;

/// Width of one compact card cell, e.g. "10♠ "
pub const CELL_WIDTH: u16 = 4;

/// A sequence of cards rendered as compact cells, wrapped to the area
/// width and centered. Used for the imagine half, the shuffler deck and
/// the final deck.
pub struct DeckGridWidget<'a> {
    cards: &'a [Card],
    highlight: Option<usize>,
    tint: Option<Color>,
}

impl<'a> DeckGridWidget<'a> {
    pub fn new(cards: &'a [Card]) -> Self {
        Self {
            cards,
            highlight: None,
            tint: None,
        }
    }

    /// Position to render highlighted (reverse video, bold).
    pub fn highlight(mut self, highlight: Option<usize>) -> Self {
        self.highlight = highlight;
        self
    }

    /// Background tint behind every cell.
    pub fn tint(mut self, tint: Color) -> Self {
        self.tint = Some(tint);
        self
    }

    fn cards_per_row(&self, area: Rect) -> u16 {
        (area.width / CELL_WIDTH).max(1)
    }

    /// Rows needed to show every card at this width.
    pub fn rows_needed(&self, area: Rect) -> u16 {
        let per_row = self.cards_per_row(area);
        (self.cards.len() as u16).div_ceil(per_row)
    }
}

impl<'a> Widget for DeckGridWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < CELL_WIDTH || area.height == 0 || self.cards.is_empty() {
            return;
        }

        let per_row = self.cards_per_row(area);
        let row_count = self.rows_needed(area);
        let block_w = per_row.min(self.cards.len() as u16) * CELL_WIDTH;
        let start_x = area.x + area.width.saturating_sub(block_w) / 2;
        let start_y = area.y + area.height.saturating_sub(row_count) / 2;

        for (i, card) in self.cards.iter().enumerate() {
            let row = i as u16 / per_row;
            let col = i as u16 % per_row;
            let y = start_y + row;
            if y >= area.bottom() {
                break;
            }
            let x = start_x + col * CELL_WIDTH;

            let mut style = Style::default().fg(card_color(*card));
            if let Some(tint) = self.tint {
                style = style.bg(tint);
            }
            if self.highlight == Some(i) {
                style = Style::default()
                    .fg(Theme::BG)
                    .bg(Theme::CARD_SELECTED)
                    .add_modifier(Modifier::BOLD);
            }

            let label = format!("{:<3}", card_label(*card));
            buf.set_string(x, y, &label, style);
        }
    }
}
