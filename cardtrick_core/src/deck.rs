use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::card::Card;

/// Every deck in the game holds exactly this many cards.
pub const DECK_SIZE: usize = 54;

/// An ordered 54-card sequence. Decks are produced by shuffling the
/// source set and are replaced wholesale, never edited card by card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The full art set in numeric order, card 1 through card 54.
    pub fn source_set() -> Vec<Card> {
        (1..=Card::COUNT).map(Card::new).collect()
    }

    /// Shuffle the source set into a fresh deck.
    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        Self::from_source(&Self::source_set(), rng)
    }

    /// Shuffle `source` (uniform Fisher-Yates) and pad to 54 cards by
    /// resampling already-chosen cards when the source runs short.
    /// `source` must be non-empty; an empty art set is a build fault.
    pub fn from_source<R: Rng>(source: &[Card], rng: &mut R) -> Self {
        let mut cards = source.to_vec();
        cards.shuffle(rng);
        while cards.len() < DECK_SIZE {
            let dup = cards[rng.gen_range(0..cards.len())];
            cards.push(dup);
        }
        Self { cards }
    }

    /// Re-permute the current sequence in place.
    pub fn reshuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn sorted_numbers(deck: &Deck) -> Vec<u8> {
        let mut numbers: Vec<u8> = deck.cards().iter().map(|c| c.number()).collect();
        numbers.sort_unstable();
        numbers
    }

    #[test]
    fn test_shuffled_deck_is_a_permutation_of_the_source() {
        let mut rng = StdRng::seed_from_u64(7);
        let deck = Deck::shuffled(&mut rng);
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(sorted_numbers(&deck), (1..=Card::COUNT).collect::<Vec<_>>());
    }

    #[test]
    fn test_reshuffle_preserves_the_multiset() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut deck = Deck::shuffled(&mut rng);
        let before = sorted_numbers(&deck);
        deck.reshuffle(&mut rng);
        assert_eq!(sorted_numbers(&deck), before);
    }

    #[test]
    fn test_short_source_pads_by_resampling() {
        let mut rng = StdRng::seed_from_u64(13);
        let source: Vec<Card> = (1..=10).map(Card::new).collect();
        let deck = Deck::from_source(&source, &mut rng);
        assert_eq!(deck.len(), DECK_SIZE);
        // Padding only ever repeats cards that were already chosen.
        assert!(deck.cards().iter().all(|c| source.contains(c)));
        // Every source card is still present at least once.
        for card in &source {
            assert!(deck.cards().contains(card));
        }
    }

    #[test]
    fn test_full_source_never_pads() {
        let mut rng = StdRng::seed_from_u64(17);
        let deck = Deck::shuffled(&mut rng);
        let mut seen = std::collections::HashSet::new();
        assert!(deck.cards().iter().all(|c| seen.insert(*c)));
    }
}
