pub mod card;
pub mod deck;
pub mod shuffler;
pub mod trick;

pub use card::{Card, Face, Rank, Suit};
pub use deck::{Deck, DECK_SIZE};
pub use shuffler::ShufflerSession;
pub use trick::{Mood, Stage, TrickSession, SELECTION_ROUNDS, SHUFFLE_ANIMATION, STACK_COUNT};
