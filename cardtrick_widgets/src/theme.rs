use ratatui::style::Color;

/// Stage-magic color theme for the TUI
pub struct Theme;

impl Theme {
    // Backgrounds
    pub const BG: Color = Color::Rgb(16, 10, 28);
    pub const VELVET: Color = Color::Rgb(30, 16, 46);
    pub const PANEL_BG: Color = Color::Rgb(42, 26, 62);

    // Card colors
    pub const CARD_FACE: Color = Color::Rgb(240, 240, 240);
    pub const CARD_BORDER: Color = Color::Rgb(110, 100, 130);
    pub const CARD_SELECTED: Color = Color::Rgb(255, 214, 10);
    pub const CARD_BACK: Color = Color::Rgb(70, 50, 120);

    // Suit colors
    pub const RED_SUIT: Color = Color::Rgb(230, 57, 70);
    pub const BLACK_SUIT: Color = Color::Rgb(224, 224, 224);
    pub const JOKER: Color = Color::Rgb(114, 9, 183);

    // Mood choices
    pub const MOOD_GREEN: Color = Color::Rgb(6, 214, 160);
    pub const MOOD_RED: Color = Color::Rgb(230, 57, 70);
    // Dimmed backgrounds behind the imagined half of the deck
    pub const GREEN_TINT: Color = Color::Rgb(14, 58, 42);
    pub const RED_TINT: Color = Color::Rgb(66, 20, 30);

    // UI elements
    pub const GOLD: Color = Color::Rgb(255, 183, 3);
    pub const REVEAL_GLOW: Color = Color::Rgb(255, 214, 10);
    pub const DIM_TEXT: Color = Color::Rgb(104, 96, 124);
    pub const BRIGHT_TEXT: Color = Color::Rgb(255, 255, 255);
    pub const MUTED_TEXT: Color = Color::Rgb(168, 160, 186);
}
