use cardtrick_core::{Card, Face};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// Width and height of a full-size card in terminal cells
pub const CARD_WIDTH: u16 = 9;
pub const CARD_HEIGHT: u16 = 7;

/// Compact label for grid cells, e.g. "A♠", "10♥", "Jk"
pub fn card_label(card: Card) -> String {
    match card.face() {
        Face::Pip { rank, suit } => format!("{}{}", rank.short_name(), suit.symbol()),
        Face::Joker { .. } => "Jk".to_string(),
    }
}

pub fn card_color(card: Card) -> Color {
    match card.face() {
        Face::Pip { suit, .. } if suit.is_red() => Theme::RED_SUIT,
        Face::Pip { .. } => Theme::BLACK_SUIT,
        Face::Joker { .. } => Theme::JOKER,
    }
}

/// A full-size card face, used for the final reveal
pub struct CardWidget {
    pub card: Card,
    pub highlighted: bool,
    pub face_down: bool,
}

impl CardWidget {
    pub fn new(card: Card) -> Self {
        Self {
            card,
            highlighted: false,
            face_down: false,
        }
    }

    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    pub fn face_down(mut self, face_down: bool) -> Self {
        self.face_down = face_down;
        self
    }

    fn border_color(&self) -> Color {
        if self.highlighted {
            Theme::REVEAL_GLOW
        } else {
            Theme::CARD_BORDER
        }
    }
}

impl Widget for CardWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < CARD_WIDTH || area.height < CARD_HEIGHT {
            return;
        }

        let border_style = Style::default().fg(self.border_color());

        if self.face_down {
            render_back(area, buf, border_style);
            return;
        }

        // Highlighted cards get double borders, everything else rounded
        if self.highlighted {
            draw_box(
                area,
                buf,
                border_style,
                ["\u{2554}", "\u{2550}", "\u{2557}", "\u{2551}", "\u{255a}", "\u{255d}"],
            );
        } else {
            draw_box(
                area,
                buf,
                border_style,
                ["\u{256d}", "\u{2500}", "\u{256e}", "\u{2502}", "\u{2570}", "\u{256f}"],
            );
        }

        match self.card.face() {
            Face::Pip { rank, suit } => {
                let color = if suit.is_red() {
                    Theme::RED_SUIT
                } else {
                    Theme::BLACK_SUIT
                };
                let rank_style = Style::default().fg(color).add_modifier(Modifier::BOLD);
                let suit_style = Style::default().fg(color);

                let rank_name = rank.short_name();
                let suit_sym = suit.symbol().to_string();

                // Top-left: rank and suit
                let rank_x = area.x + 1;
                buf.set_string(rank_x, area.y + 1, rank_name, rank_style);
                let suit_x = rank_x + rank_name.len() as u16;
                buf.set_string(suit_x, area.y + 1, &suit_sym, suit_style);

                // Center suit (large)
                buf.set_string(
                    area.x + CARD_WIDTH / 2,
                    area.y + CARD_HEIGHT / 2,
                    &suit_sym,
                    suit_style,
                );

                // Bottom-right: suit and rank, mirrored
                let br_y = area.y + CARD_HEIGHT - 2;
                let br_rank_x = area.x + CARD_WIDTH - 1 - rank_name.len() as u16;
                buf.set_string(br_rank_x, br_y, rank_name, rank_style);
                buf.set_string(br_rank_x - 1, br_y, &suit_sym, suit_style);
            }
            Face::Joker { red } => {
                let color = if red { Theme::RED_SUIT } else { Theme::JOKER };
                let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
                buf.set_string(area.x + 1, area.y + 1, "Jk", style);
                buf.set_string(area.x + 2, area.y + CARD_HEIGHT / 2, "JOKER", style);
                buf.set_string(area.x + CARD_WIDTH - 3, area.y + CARD_HEIGHT - 2, "Jk", style);
            }
        }
    }
}

fn draw_box(area: Rect, buf: &mut Buffer, style: Style, glyphs: [&str; 6]) {
    let [tl, horiz, tr, vert, bl, br] = glyphs;

    buf.set_string(area.x, area.y, tl, style);
    for x in 1..CARD_WIDTH - 1 {
        buf.set_string(area.x + x, area.y, horiz, style);
    }
    buf.set_string(area.x + CARD_WIDTH - 1, area.y, tr, style);

    for y in 1..CARD_HEIGHT - 1 {
        buf.set_string(area.x, area.y + y, vert, style);
        for x in 1..CARD_WIDTH - 1 {
            buf.set_string(area.x + x, area.y + y, " ", Style::default());
        }
        buf.set_string(area.x + CARD_WIDTH - 1, area.y + y, vert, style);
    }

    buf.set_string(area.x, area.y + CARD_HEIGHT - 1, bl, style);
    for x in 1..CARD_WIDTH - 1 {
        buf.set_string(area.x + x, area.y + CARD_HEIGHT - 1, horiz, style);
    }
    buf.set_string(area.x + CARD_WIDTH - 1, area.y + CARD_HEIGHT - 1, br, style);
}

fn render_back(area: Rect, buf: &mut Buffer, border_style: Style) {
    let fill_style = Style::default().fg(Theme::CARD_BACK);

    buf.set_string(area.x, area.y, "\u{256d}", border_style);
    for x in 1..CARD_WIDTH - 1 {
        buf.set_string(area.x + x, area.y, "\u{2500}", border_style);
    }
    buf.set_string(area.x + CARD_WIDTH - 1, area.y, "\u{256e}", border_style);

    for y in 1..CARD_HEIGHT - 1 {
        buf.set_string(area.x, area.y + y, "\u{2502}", border_style);
        for x in 1..CARD_WIDTH - 1 {
            let pattern = if (x + y) % 2 == 0 {
                "\u{2593}"
            } else {
                "\u{2591}"
            }; // ▓ ░
            buf.set_string(area.x + x, area.y + y, pattern, fill_style);
        }
        buf.set_string(area.x + CARD_WIDTH - 1, area.y + y, "\u{2502}", border_style);
    }

    buf.set_string(area.x, area.y + CARD_HEIGHT - 1, "\u{2570}", border_style);
    for x in 1..CARD_WIDTH - 1 {
        buf.set_string(area.x + x, area.y + CARD_HEIGHT - 1, "\u{2500}", border_style);
    }
    buf.set_string(
        area.x + CARD_WIDTH - 1,
        area.y + CARD_HEIGHT - 1,
        "\u{256f}",
        border_style,
    );
}
