use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::cards::Card;
use crate::combinations::combinations;
use crate::poker::{Category, PokerHand};

/// The strongest five-card hand found among a player's cards.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub struct BestHand {
    pub category: Category,
    pub cards: [Card; 5],
}

/// Two held cards plus up to five shared cards.
///
/// Shared cards accumulate as they are turned; the best hand is derived on
/// demand from whatever is available at the time.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HoldEmHand {
    held: [Card; 2],
    shared: Vec<Card>,
}

impl HoldEmHand {
    pub fn new(held: [Card; 2]) -> Self {
        Self {
            held,
            shared: Vec::with_capacity(5),
        }
    }

    pub fn with_shared(held: [Card; 2], shared: Vec<Card>) -> Self {
        Self { held, shared }
    }

    pub fn add_shared(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.shared.extend(cards);
    }

    pub fn held(&self) -> &[Card; 2] {
        &self.held
    }

    pub fn shared(&self) -> &[Card] {
        &self.shared
    }

    /// Held cards followed by shared cards.
    pub fn cards(&self) -> Vec<Card> {
        self.held.iter().chain(&self.shared).copied().collect()
    }

    /// Classifies every five-card subset and keeps the strongest.
    ///
    /// Returns `None` while fewer than five cards are available. Subsets of
    /// equal category are not ranked against each other, so the first one
    /// found in enumeration order wins.
    pub fn best_hand(&self) -> Option<BestHand> {
        best_of(&self.cards())
    }
}

/// Best five-card hand out of `cards`, or `None` if there are fewer than five.
pub fn best_of(cards: &[Card]) -> Option<BestHand> {
    let mut best: Option<BestHand> = None;
    for subset in combinations(cards.len(), 5) {
        let five = [
            cards[subset[0]],
            cards[subset[1]],
            cards[subset[2]],
            cards[subset[3]],
            cards[subset[4]],
        ];
        let category = PokerHand::new(five).category();
        if best.is_none_or(|b| category > b.category) {
            best = Some(BestHand {
                category,
                cards: five,
            });
        }
    }
    if let Some(b) = &best {
        trace!(available = cards.len(), category = %b.category, "selected best hand");
    }
    best
}
