use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, trace, warn};

use crate::cards::{full_deck, Card};
use crate::errors::DeckError;

/// One or more standard decks shuffled together and dealt from the top.
///
/// The deck keeps every card it was built with; a cursor separates the cards
/// already dealt from the ones remaining. Randomness comes from a
/// [`ChaCha20Rng`] so a seed reproduces the exact dealing order.
///
/// # Examples
///
/// ```
/// use casino_engine::deck::Deck;
///
/// let mut deck = Deck::with_seed(2, 7);
/// assert_eq!(deck.len(), 104);
///
/// let hand = deck.deal(5).unwrap();
/// assert_eq!(hand.len(), 5);
/// assert_eq!(deck.cards_remaining(), 99);
/// ```
#[derive(Debug)]
pub struct Deck {
    /// Every card in dealing order
    cards: Vec<Card>,
    /// Number of cards dealt so far
    position: usize,
    num_decks: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Builds `num_decks` shuffled decks seeded from the operating system.
    ///
    /// # Panics
    ///
    /// Panics if `num_decks` is zero.
    pub fn new(num_decks: usize) -> Self {
        Self::with_rng(num_decks, ChaCha20Rng::from_os_rng())
    }

    /// Builds `num_decks` decks shuffled with a deterministic seed.
    pub fn with_seed(num_decks: usize, seed: u64) -> Self {
        Self::with_rng(num_decks, ChaCha20Rng::seed_from_u64(seed))
    }

    pub fn with_rng(num_decks: usize, rng: ChaCha20Rng) -> Self {
        assert!(num_decks > 0, "a deck needs at least one set of cards");
        let mut deck = Self {
            cards: full_deck(num_decks),
            position: 0,
            num_decks,
            rng,
        };
        deck.shuffle();
        debug!(num_decks, total = deck.len(), "deck built");
        deck
    }

    /// Permutes the whole stored sequence, dealt cards included. The cursor
    /// is left untouched.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        trace!(total = self.cards.len(), position = self.position, "deck shuffled");
    }

    /// Deals the next `n` cards.
    ///
    /// The deck always keeps at least one card back: dealing fails unless
    /// strictly more than `n` cards remain.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        let remaining = self.cards_remaining();
        if remaining <= n {
            warn!(requested = n, remaining, "not enough cards to deal");
            return Err(DeckError::InsufficientCards {
                requested: n,
                remaining,
            });
        }
        let dealt = self.cards[self.position..self.position + n].to_vec();
        self.position += n;
        trace!(requested = n, remaining = self.cards_remaining(), "dealt cards");
        Ok(dealt)
    }

    pub fn cards_remaining(&self) -> usize {
        self.cards.len() - self.position
    }

    /// Total number of cards the deck was built with.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True once every card has been dealt. Given the dealing rule this never
    /// happens for a deck built through the public constructors.
    pub fn is_empty(&self) -> bool {
        self.cards_remaining() == 0
    }

    pub fn num_decks(&self) -> usize {
        self.num_decks
    }

    /// The full stored sequence in dealing order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn dealt(&self) -> &[Card] {
        &self.cards[..self.position]
    }
}
