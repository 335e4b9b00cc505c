use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// Animated velvet-curtain background behind every screen
pub struct BackgroundWidget {
    pub tick: u64,
}

impl BackgroundWidget {
    pub fn new(tick: u64) -> Self {
        Self { tick }
    }
}

impl Widget for BackgroundWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cycle = (self.tick % 360) as f64;

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                // Deep purple base with a slow drifting fold pattern
                let base_r = 30u8;
                let base_g = 16u8;
                let base_b = 46u8;

                let fold = ((x as f64 * 0.25 + y as f64 * 0.6 + cycle * 0.02).sin() * 5.0) as i16;

                let r = (base_r as i16 + fold).clamp(0, 255) as u8;
                let g = (base_g as i16 + fold / 3).clamp(0, 255) as u8;
                let b = (base_b as i16 + fold).clamp(0, 255) as u8;

                // Dim alternate rows for a faint curtain-pleat look
                let (r, g, b) = if y % 2 == 0 {
                    (r, g, b)
                } else {
                    (
                        r.saturating_sub(3),
                        g.saturating_sub(2),
                        b.saturating_sub(3),
                    )
                };

                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(" ");
                    cell.set_bg(Color::Rgb(r, g, b));
                }
            }
        }
    }
}

/// Decorative gold-accented frame around the stage area
pub struct FrameWidget {
    pub tick: u64,
}

impl FrameWidget {
    pub fn new(tick: u64) -> Self {
        Self { tick }
    }
}

impl Widget for FrameWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 4 {
            return;
        }

        let cycle = (self.tick % 600) as f64;

        for x in area.left()..area.right() {
            let t = (x as f64 / area.width as f64 + cycle * 0.005).sin().abs();
            let color = blend(Theme::VELVET, Theme::GOLD, (t * 0.3) as f32);

            if let Some(cell) = buf.cell_mut((x, area.top())) {
                cell.set_symbol("\u{2500}"); // ─
                cell.set_fg(color);
            }
            if let Some(cell) = buf.cell_mut((x, area.bottom().saturating_sub(1))) {
                cell.set_symbol("\u{2500}");
                cell.set_fg(color);
            }
        }

        for y in area.top()..area.bottom() {
            let t = (y as f64 / area.height as f64 + cycle * 0.005).sin().abs();
            let color = blend(Theme::VELVET, Theme::GOLD, (t * 0.3) as f32);

            if let Some(cell) = buf.cell_mut((area.left(), y)) {
                cell.set_symbol("\u{2502}"); // │
                cell.set_fg(color);
            }
            if let Some(cell) = buf.cell_mut((area.right().saturating_sub(1), y)) {
                cell.set_symbol("\u{2502}");
                cell.set_fg(color);
            }
        }

        // Gold corners
        let corner_style = Style::default().fg(Theme::GOLD);
        set_cell(buf, area.left(), area.top(), "\u{256d}", corner_style);
        set_cell(
            buf,
            area.right().saturating_sub(1),
            area.top(),
            "\u{256e}",
            corner_style,
        );
        set_cell(
            buf,
            area.left(),
            area.bottom().saturating_sub(1),
            "\u{2570}",
            corner_style,
        );
        set_cell(
            buf,
            area.right().saturating_sub(1),
            area.bottom().saturating_sub(1),
            "\u{256f}",
            corner_style,
        );
    }
}

fn set_cell(buf: &mut Buffer, x: u16, y: u16, symbol: &str, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol(symbol);
        cell.set_style(style);
    }
}

fn blend(from: Color, to: Color, t: f32) -> Color {
    let (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) = (from, to) else {
        return from;
    };
    let mix = |a: u8, b: u8| -> u8 { (a as f32 + (b as f32 - a as f32) * t) as u8 };
    Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
}
