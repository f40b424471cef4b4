use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

const BLACKJACK: u32 = 21;

/// A Blackjack hand. The score is recomputed from the cards on every call.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct BlackjackHand {
    cards: Vec<Card>,
}

impl BlackjackHand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Sums the cards in the order they were received.
    ///
    /// Each ace counts 11 when the total accumulated before it is at most 10,
    /// otherwise 1. An ace already counted as 11 is never revisited, so later
    /// cards can push the hand over 21 even though a hard count would not.
    pub fn score(&self) -> u32 {
        self.cards.iter().fold(0, |total, card| match card.rank {
            Rank::Ace if total <= 10 => total + 11,
            Rank::Ace => total + 1,
            r => total + r.blackjack_value(),
        })
    }

    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK
    }

    /// Two cards totalling 21.
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.score() == BLACKJACK
    }
}

impl From<Vec<Card>> for BlackjackHand {
    fn from(cards: Vec<Card>) -> Self {
        Self::new(cards)
    }
}
