use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::deck::{Deck, DECK_SIZE};

/// Cards are always dealt into three piles.
pub const STACK_COUNT: usize = 3;

/// The trick runs three pick-and-recombine rounds.
pub const SELECTION_ROUNDS: u8 = 3;

/// Length of the cosmetic shuffle shown before the reveal.
pub const SHUFFLE_ANIMATION: Duration = Duration::from_millis(1000);

/// Phase of the guided trick flow; the sole driver of which screen is
/// shown and which actions are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    ChooseMood,
    ImagineCards,
    StackSelection,
    PreReveal,
    RevealCard,
}

/// The player's opening choice. Decides which half of the deck they are
/// told to imagine a card from, and where the trick converges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    Green,
    Red,
}

impl Mood {
    /// Deck positions shown during the imagine stage.
    pub fn imagined_range(&self) -> std::ops::Range<usize> {
        match self {
            Mood::Green => 0..DECK_SIZE / 2,
            Mood::Red => DECK_SIZE / 2..DECK_SIZE,
        }
    }

    /// Absolute position the imagined card converges to after three
    /// rounds of recombination.
    pub fn reveal_index(&self) -> usize {
        match self {
            Mood::Red => 26,
            Mood::Green => 27,
        }
    }
}

/// Deal a sequence into three piles, round-robin by position, each card
/// going on the bottom of its pile. Within a pile the order is the
/// reverse of deal order; recombination depends on exactly this layout.
pub fn deal_into_stacks(cards: &[Card]) -> [Vec<Card>; STACK_COUNT] {
    let mut stacks: [Vec<Card>; STACK_COUNT] = std::array::from_fn(|_| Vec::new());
    for (position, card) in cards.iter().enumerate() {
        stacks[position % STACK_COUNT].insert(0, *card);
    }
    stacks
}

/// Concatenate the three piles with the selected one sandwiched in the
/// middle: the pile "one before" the selection, then the selection,
/// then the pile "one after". Repeating this for three rounds is what
/// walks the imagined card to its fixed position.
pub fn recombine(stacks: &[Vec<Card>; STACK_COUNT], selected: usize) -> Vec<Card> {
    let before = (selected + 2) % STACK_COUNT;
    let after = (selected + 1) % STACK_COUNT;
    let mut combined = Vec::with_capacity(stacks.iter().map(Vec::len).sum());
    combined.extend_from_slice(&stacks[before]);
    combined.extend_from_slice(&stacks[selected]);
    combined.extend_from_slice(&stacks[after]);
    combined
}

/// Countdown for the pre-reveal shuffle animation. Advances only when
/// ticked, so dropping the session cancels it outright.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RevealTimer {
    remaining: Duration,
}

impl RevealTimer {
    fn new() -> Self {
        Self {
            remaining: SHUFFLE_ANIMATION,
        }
    }

    /// Returns true once the full duration has elapsed.
    fn tick(&mut self, elapsed: Duration) -> bool {
        self.remaining = self.remaining.saturating_sub(elapsed);
        self.remaining.is_zero()
    }
}

fn session_rng() -> StdRng {
    StdRng::from_entropy()
}

/// Complete state of one trick session. Screens read it through the
/// accessors and feed inputs back through the action methods; nothing
/// else mutates it. Actions invoked in a stage where they are not
/// legal are silent no-ops.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrickSession {
    stage: Stage,
    deck: Deck,
    stacks: [Vec<Card>; STACK_COUNT],
    selected_stack: Option<usize>,
    selection_count: u8,
    final_deck: Vec<Card>,
    mood: Option<Mood>,
    card_revealed: bool,
    reveal_timer: Option<RevealTimer>,
    #[serde(skip, default = "session_rng")]
    rng: StdRng,
}

impl TrickSession {
    pub fn new() -> Self {
        Self::with_seed(rand::thread_rng().gen())
    }

    pub fn with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        Self {
            stage: Stage::ChooseMood,
            deck,
            stacks: std::array::from_fn(|_| Vec::new()),
            selected_stack: None,
            selection_count: 0,
            final_deck: Vec::new(),
            mood: None,
            card_revealed: false,
            reveal_timer: None,
            rng,
        }
    }

    /// Begin a fresh trick with a newly shuffled deck.
    pub fn restart(&mut self) {
        self.deck = Deck::shuffled(&mut self.rng);
        self.stage = Stage::ChooseMood;
        self.stacks = std::array::from_fn(|_| Vec::new());
        self.selected_stack = None;
        self.selection_count = 0;
        self.final_deck.clear();
        self.mood = None;
        self.card_revealed = false;
        self.reveal_timer = None;
    }

    // ─── Actions ─────────────────────────────────────────────────────

    pub fn select_mood(&mut self, mood: Mood) {
        if self.stage != Stage::ChooseMood {
            return;
        }
        self.mood = Some(mood);
        self.stage = Stage::ImagineCards;
    }

    /// Deal the deck into three stacks and enter the selection rounds.
    pub fn start_trick(&mut self) {
        if self.stage != Stage::ImagineCards {
            return;
        }
        self.stacks = deal_into_stacks(self.deck.cards());
        self.selected_stack = None;
        self.selection_count = 0;
        self.final_deck.clear();
        self.card_revealed = false;
        self.stage = Stage::StackSelection;
    }

    pub fn select_stack(&mut self, index: usize) {
        if self.stage != Stage::StackSelection || index >= STACK_COUNT {
            return;
        }
        if self.selection_count >= SELECTION_ROUNDS {
            return;
        }
        self.selected_stack = Some(index);
    }

    /// Recombine around the selected stack. The first two confirmations
    /// re-deal the combined sequence; the third freezes it as the final
    /// deck and moves on to the reveal. Ignored while no stack is
    /// selected.
    pub fn confirm_selection(&mut self) {
        if self.stage != Stage::StackSelection || self.selection_count >= SELECTION_ROUNDS {
            return;
        }
        let Some(selected) = self.selected_stack else {
            return;
        };

        let combined = recombine(&self.stacks, selected);
        self.selection_count += 1;
        self.selected_stack = None;

        if self.selection_count == SELECTION_ROUNDS {
            self.final_deck = combined;
            self.stage = Stage::PreReveal;
        } else {
            self.stacks = deal_into_stacks(&combined);
        }
    }

    /// Kick off the cosmetic shuffle; the reveal fires once the timer
    /// has been ticked through its full duration.
    pub fn trigger_reveal(&mut self) {
        if self.stage != Stage::PreReveal || self.reveal_timer.is_some() {
            return;
        }
        self.reveal_timer = Some(RevealTimer::new());
    }

    /// Advance the reveal timer from the app loop.
    pub fn tick(&mut self, elapsed: Duration) {
        if let Some(timer) = &mut self.reveal_timer {
            if timer.tick(elapsed) {
                self.reveal_timer = None;
                self.card_revealed = true;
                self.stage = Stage::RevealCard;
            }
        }
    }

    // ─── Render surface ──────────────────────────────────────────────

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn stacks(&self) -> &[Vec<Card>; STACK_COUNT] {
        &self.stacks
    }

    pub fn selected_stack(&self) -> Option<usize> {
        self.selected_stack
    }

    /// Selection round currently being played, 1-based for display.
    pub fn round(&self) -> u8 {
        self.selection_count + 1
    }

    pub fn final_deck(&self) -> &[Card] {
        &self.final_deck
    }

    pub fn mood(&self) -> Option<Mood> {
        self.mood
    }

    /// The half of the deck the player imagines a card from. Empty
    /// before a mood is chosen.
    pub fn imagined_cards(&self) -> &[Card] {
        match self.mood {
            Some(mood) => &self.deck.cards()[mood.imagined_range()],
            None => &[],
        }
    }

    pub fn card_revealed(&self) -> bool {
        self.card_revealed
    }

    pub fn is_animating_shuffle(&self) -> bool {
        self.reveal_timer.is_some()
    }

    /// Highlight position for the final render: 26 for red, 27 otherwise.
    pub fn reveal_index(&self) -> usize {
        match self.mood {
            Some(Mood::Red) => 26,
            _ => 27,
        }
    }
}

impl Default for TrickSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(cards: &[Card]) -> Vec<u8> {
        cards.iter().map(|c| c.number()).collect()
    }

    /// Session advanced to the selection rounds with a known mood.
    fn session_at_selection(seed: u64, mood: Mood) -> TrickSession {
        let mut session = TrickSession::with_seed(seed);
        session.select_mood(mood);
        session.start_trick();
        session
    }

    #[test]
    fn test_deal_is_round_robin_with_piles_reversed() {
        let cards = Deck::source_set();
        let stacks = deal_into_stacks(&cards);
        for stack in &stacks {
            assert_eq!(stack.len(), DECK_SIZE / STACK_COUNT);
        }
        // Position 0 goes to stack 0 and ends up on the bottom; the
        // last card dealt to a stack sits on top.
        assert_eq!(stacks[0].last().unwrap().number(), 1);
        assert_eq!(stacks[0].first().unwrap().number(), 52);
        assert_eq!(stacks[1].first().unwrap().number(), 53);
        assert_eq!(stacks[2].first().unwrap().number(), 54);
        assert_eq!(stacks[1].last().unwrap().number(), 2);
        assert_eq!(stacks[2].last().unwrap().number(), 3);
    }

    #[test]
    fn test_recombine_sandwiches_the_selection() {
        let stacks: [Vec<Card>; STACK_COUNT] = [
            vec![Card::new(1)],
            vec![Card::new(2)],
            vec![Card::new(3)],
        ];
        assert_eq!(numbers(&recombine(&stacks, 0)), vec![3, 1, 2]);
        assert_eq!(numbers(&recombine(&stacks, 1)), vec![1, 2, 3]);
        assert_eq!(numbers(&recombine(&stacks, 2)), vec![2, 3, 1]);
    }

    #[test]
    fn test_stacks_partition_the_deck_every_round() {
        let mut session = session_at_selection(3, Mood::Green);
        let mut expected: Vec<u8> = numbers(session.deck().cards());
        expected.sort_unstable();

        for round in 0..SELECTION_ROUNDS {
            let mut held: Vec<u8> = session
                .stacks()
                .iter()
                .flat_map(|stack| stack.iter().map(|c| c.number()))
                .collect();
            held.sort_unstable();
            assert_eq!(held, expected, "cards lost or duplicated in round {round}");

            session.select_stack(usize::from(round) % STACK_COUNT);
            session.confirm_selection();
        }

        let mut finals = numbers(session.final_deck());
        finals.sort_unstable();
        assert_eq!(finals, expected);
    }

    #[test]
    fn test_tracked_card_converges_to_the_mood_index() {
        for seed in 0..8 {
            for mood in [Mood::Green, Mood::Red] {
                for start in mood.imagined_range() {
                    let mut session = session_at_selection(seed, mood);
                    let tracked = session.deck().cards()[start];

                    for _ in 0..SELECTION_ROUNDS {
                        let holder = session
                            .stacks()
                            .iter()
                            .position(|stack| stack.contains(&tracked))
                            .expect("tracked card must be in some stack");
                        session.select_stack(holder);
                        session.confirm_selection();
                    }

                    assert_eq!(session.stage(), Stage::PreReveal);
                    assert_eq!(
                        session.final_deck()[mood.reveal_index()],
                        tracked,
                        "seed {seed}, start {start}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_confirm_without_a_selection_changes_nothing() {
        let mut session = session_at_selection(5, Mood::Red);
        let stacks_before = session.stacks().clone();

        session.confirm_selection();

        assert_eq!(session.stage(), Stage::StackSelection);
        assert_eq!(session.round(), 1);
        assert_eq!(session.stacks(), &stacks_before);
        assert!(session.final_deck().is_empty());
    }

    #[test]
    fn test_third_confirmation_skips_the_fourth_deal() {
        let mut session = session_at_selection(9, Mood::Red);
        for _ in 0..SELECTION_ROUNDS {
            session.select_stack(1);
            session.confirm_selection();
        }
        assert_eq!(session.stage(), Stage::PreReveal);
        assert_eq!(session.final_deck().len(), DECK_SIZE);

        // A stray fourth confirmation is ignored outright.
        let finals_before = session.final_deck().to_vec();
        session.select_stack(0);
        session.confirm_selection();
        assert_eq!(session.stage(), Stage::PreReveal);
        assert_eq!(session.final_deck(), finals_before.as_slice());
    }

    #[test]
    fn test_actions_out_of_stage_are_ignored() {
        let mut session = TrickSession::with_seed(21);

        // Nothing but a mood choice moves the opening stage.
        session.start_trick();
        session.select_stack(0);
        session.confirm_selection();
        session.trigger_reveal();
        assert_eq!(session.stage(), Stage::ChooseMood);

        session.select_mood(Mood::Green);
        assert_eq!(session.stage(), Stage::ImagineCards);

        // A second mood pick does not overwrite the first.
        session.select_mood(Mood::Red);
        assert_eq!(session.mood(), Some(Mood::Green));

        session.start_trick();
        session.select_stack(STACK_COUNT);
        assert_eq!(session.selected_stack(), None);
    }

    #[test]
    fn test_reveal_waits_for_the_full_animation() {
        let mut session = session_at_selection(14, Mood::Red);
        for _ in 0..SELECTION_ROUNDS {
            session.select_stack(2);
            session.confirm_selection();
        }

        session.trigger_reveal();
        assert!(session.is_animating_shuffle());
        assert!(!session.card_revealed());

        session.tick(Duration::from_millis(600));
        assert_eq!(session.stage(), Stage::PreReveal);

        // Re-triggering mid-animation must not restart the countdown.
        session.trigger_reveal();
        session.tick(Duration::from_millis(500));

        assert_eq!(session.stage(), Stage::RevealCard);
        assert!(session.card_revealed());
        assert!(!session.is_animating_shuffle());
    }

    #[test]
    fn test_reveal_index_follows_the_mood() {
        let mut red = TrickSession::with_seed(1);
        red.select_mood(Mood::Red);
        assert_eq!(red.reveal_index(), 26);

        let mut green = TrickSession::with_seed(1);
        green.select_mood(Mood::Green);
        assert_eq!(green.reveal_index(), 27);

        assert_eq!(Mood::Red.reveal_index(), 26);
        assert_eq!(Mood::Green.reveal_index(), 27);
    }

    #[test]
    fn test_imagined_halves_split_the_deck() {
        let mut session = TrickSession::with_seed(2);
        assert!(session.imagined_cards().is_empty());

        session.select_mood(Mood::Green);
        assert_eq!(session.imagined_cards(), &session.deck().cards()[..27]);

        let mut red = TrickSession::with_seed(2);
        red.select_mood(Mood::Red);
        assert_eq!(red.imagined_cards(), &red.deck().cards()[27..]);
    }

    #[test]
    fn test_restart_returns_to_a_clean_opening() {
        let mut session = session_at_selection(33, Mood::Green);
        session.select_stack(0);
        session.confirm_selection();

        session.restart();

        assert_eq!(session.stage(), Stage::ChooseMood);
        assert_eq!(session.mood(), None);
        assert_eq!(session.round(), 1);
        assert!(session.final_deck().is_empty());
        assert!(session.stacks().iter().all(Vec::is_empty));
        assert!(!session.is_animating_shuffle());
        assert_eq!(session.deck().len(), DECK_SIZE);
    }
}
