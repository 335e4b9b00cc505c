use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::deck::Deck;

fn session_rng() -> StdRng {
    StdRng::from_entropy()
}

/// The standalone deck shuffler: a freshly shuffled deck on entry,
/// re-permuted in place on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShufflerSession {
    deck: Deck,
    #[serde(skip, default = "session_rng")]
    rng: StdRng,
}

impl ShufflerSession {
    pub fn new() -> Self {
        Self::with_seed(rand::thread_rng().gen())
    }

    pub fn with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        Self { deck, rng }
    }

    /// Shuffle the current sequence again, not the source order.
    pub fn reshuffle(&mut self) {
        self.deck.reshuffle(&mut self.rng);
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }
}

impl Default for ShufflerSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reshuffle_keeps_all_54_cards() {
        let mut session = ShufflerSession::with_seed(4);
        let mut before: Vec<u8> = session.deck().cards().iter().map(|c| c.number()).collect();
        before.sort_unstable();

        session.reshuffle();

        let mut after: Vec<u8> = session.deck().cards().iter().map(|c| c.number()).collect();
        after.sort_unstable();
        assert_eq!(before, after);
    }
}
