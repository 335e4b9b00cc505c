#![allow(dead_code)]

use ratatui::style::Color;
use tachyonfx::fx;
use tachyonfx::{Effect, EffectManager, Interpolation, Motion};

/// Our keyed effect manager using tachyonfx's built-in EffectManager
pub type FxManager = EffectManager<&'static str>;

// ─── Effect Factories ────────────────────────────────────────────────

const DARK: Color = Color::Rgb(16, 10, 28);
const VELVET: Color = Color::Rgb(30, 16, 46);
const GOLD: Color = Color::Rgb(255, 214, 10);

/// Screen transition: content sweeps in from the left
pub fn screen_transition() -> Effect {
    fx::sweep_in(
        Motion::LeftToRight,
        8,
        2,
        DARK,
        (400, Interpolation::CubicOut),
    )
}

/// Coalesce effect: the imagined half materializes from empty space
pub fn coalesce_in() -> Effect {
    fx::coalesce((450, Interpolation::CubicOut))
}

/// Subtle gold shimmer for the title on main menu
pub fn title_shimmer() -> Effect {
    let shift = fx::hsl_shift_fg([15.0, 0.1, 0.1], (1200, Interpolation::SineInOut));
    fx::repeating(fx::ping_pong(shift))
}

/// Slide in from below for freshly dealt stacks
pub fn card_deal_slide() -> Effect {
    fx::slide_in(
        Motion::DownToUp,
        3,
        1,
        VELVET,
        (350, Interpolation::CubicOut),
    )
}

/// Cosmetic pre-reveal shuffle: the spread dissolves and re-forms.
/// Total duration matches the session's reveal timer.
pub fn shuffle_frenzy() -> Effect {
    fx::sequence(&[
        fx::dissolve((500, Interpolation::QuadIn)),
        fx::coalesce((500, Interpolation::QuadOut)),
    ])
}

/// Gold flash on the revealed card
pub fn reveal_glow() -> Effect {
    let flash = fx::fade_to_fg(GOLD, (250, Interpolation::QuadOut));
    let settle = fx::fade_from_fg(GOLD, (750, Interpolation::QuadIn));
    fx::sequence(&[flash, settle])
}
