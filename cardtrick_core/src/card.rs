use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub fn symbol(&self) -> char {
        match self {
            Suit::Spades => '\u{2660}',   // ♠
            Suit::Hearts => '\u{2665}',   // ♥
            Suit::Diamonds => '\u{2666}', // ♦
            Suit::Clubs => '\u{2663}',    // ♣
        }
    }

    pub fn is_red(&self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub fn short_name(&self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// How a card is drawn. Purely presentational; game logic only ever
/// compares card identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Pip { rank: Rank, suit: Suit },
    Joker { red: bool },
}

/// One card of the fixed 54-card art set, identified by its number
/// (1 through 54, the numeric suffix of the bundled card images).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card(u8);

impl Card {
    pub const COUNT: u8 = 54;

    /// Panics if `number` is outside 1..=54.
    pub fn new(number: u8) -> Self {
        assert!(
            (1..=Self::COUNT).contains(&number),
            "card number out of range: {number}"
        );
        Self(number)
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    /// Cards 1..=52 map onto suits in `Suit::ALL` order, thirteen ranks
    /// each; 53 and 54 are the jokers.
    pub fn face(&self) -> Face {
        let idx = (self.0 - 1) as usize;
        if idx < 52 {
            Face::Pip {
                rank: Rank::ALL[idx % 13],
                suit: Suit::ALL[idx / 13],
            }
        } else {
            Face::Joker { red: idx == 53 }
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.face() {
            Face::Pip { rank, suit } => write!(f, "{}{}", rank, suit),
            Face::Joker { .. } => write!(f, "Joker"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faces_cover_the_whole_set() {
        assert_eq!(
            Card::new(1).face(),
            Face::Pip {
                rank: Rank::Two,
                suit: Suit::Spades
            }
        );
        assert_eq!(
            Card::new(13).face(),
            Face::Pip {
                rank: Rank::Ace,
                suit: Suit::Spades
            }
        );
        assert_eq!(
            Card::new(52).face(),
            Face::Pip {
                rank: Rank::Ace,
                suit: Suit::Clubs
            }
        );
        assert_eq!(Card::new(53).face(), Face::Joker { red: false });
        assert_eq!(Card::new(54).face(), Face::Joker { red: true });
    }

    #[test]
    #[should_panic]
    fn test_zero_is_not_a_card() {
        Card::new(0);
    }
}
