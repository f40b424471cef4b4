use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// The ten poker hand classes, weakest first.
///
/// The derived ordering is the strength order used to compare hands.
/// [`Category::RoyalFlush`] sits above [`Category::StraightFlush`] even
/// though every royal flush is also a straight flush.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub fn all() -> [Category; 10] {
        [
            Category::HighCard,
            Category::Pair,
            Category::TwoPair,
            Category::ThreeOfAKind,
            Category::Straight,
            Category::Flush,
            Category::FullHouse,
            Category::FourOfAKind,
            Category::StraightFlush,
            Category::RoyalFlush,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        };
        f.write_str(name)
    }
}

const WHEEL: [Rank; 5] = [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five];
const BROADWAY: [Rank; 5] = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];

/// Exactly five cards, classified into a [`Category`].
///
/// Every predicate is a pure function of the cards. Input is trusted:
/// duplicated cards give unspecified results.
///
/// Hands compare by category alone. Two different hands of the same category
/// are equal; kickers are not considered.
///
/// ```
/// use casino_engine::cards::Card;
/// use casino_engine::poker::{Category, PokerHand};
///
/// let cards = ["3S", "3H", "3D", "JC", "JS"].map(|c| c.parse::<Card>().unwrap());
/// let hand = PokerHand::new(cards);
/// assert!(hand.is_pair() && hand.is_three_of_a_kind());
/// assert_eq!(hand.category(), Category::FullHouse);
/// ```
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct PokerHand {
    cards: [Card; 5],
}

impl PokerHand {
    pub fn new(cards: [Card; 5]) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// Number of cards held of each rank, indexed by sequence index.
    pub fn rank_counts(&self) -> [u8; 13] {
        let mut counts = [0u8; 13];
        for c in &self.cards {
            counts[c.rank.sequence_index() as usize] += 1;
        }
        counts
    }

    fn has_rank_count(&self, n: u8) -> bool {
        self.rank_counts().contains(&n)
    }

    fn has_exactly_ranks(&self, ranks: &[Rank; 5]) -> bool {
        let mut mine: Vec<Rank> = self.cards.iter().map(|c| c.rank).collect();
        let mut wanted = ranks.to_vec();
        mine.sort_unstable();
        wanted.sort_unstable();
        mine == wanted
    }

    fn all_ranks_distinct(&self) -> bool {
        self.rank_counts().iter().all(|&n| n <= 1)
    }

    pub fn is_flush(&self) -> bool {
        let suit = self.cards[0].suit;
        self.cards.iter().all(|c| c.suit == suit)
    }

    /// Five consecutive ranks, or the wheel `A-2-3-4-5` with the ace low.
    pub fn is_straight(&self) -> bool {
        if self.has_exactly_ranks(&WHEEL) {
            return true;
        }
        if !self.all_ranks_distinct() {
            return false;
        }
        let idx = self.cards.iter().map(|c| c.rank.sequence_index());
        let (lo, hi) = idx.fold((u8::MAX, u8::MIN), |(lo, hi), i| (lo.min(i), hi.max(i)));
        hi - lo == 4
    }

    pub fn is_pair(&self) -> bool {
        self.has_rank_count(2)
    }

    pub fn is_three_of_a_kind(&self) -> bool {
        self.has_rank_count(3)
    }

    pub fn is_four_of_a_kind(&self) -> bool {
        self.has_rank_count(4)
    }

    /// Two distinct ranks appearing exactly twice each.
    pub fn is_two_pair(&self) -> bool {
        self.rank_counts().iter().filter(|&&n| n == 2).count() == 2
    }

    /// A rank of three and a different rank of two. With five cards the
    /// counts 3 and 2 can only come from different ranks.
    pub fn is_full_house(&self) -> bool {
        self.is_pair() && self.is_three_of_a_kind()
    }

    pub fn is_high_card(&self) -> bool {
        !self.is_straight() && !self.is_flush() && self.all_ranks_distinct()
    }

    pub fn is_straight_flush(&self) -> bool {
        self.is_straight() && self.is_flush()
    }

    pub fn is_royal_flush(&self) -> bool {
        self.has_exactly_ranks(&BROADWAY) && self.is_flush()
    }

    /// The strongest category whose predicate holds.
    pub fn category(&self) -> Category {
        let checks: [(Category, fn(&Self) -> bool); 9] = [
            (Category::RoyalFlush, Self::is_royal_flush),
            (Category::StraightFlush, Self::is_straight_flush),
            (Category::FourOfAKind, Self::is_four_of_a_kind),
            (Category::FullHouse, Self::is_full_house),
            (Category::Flush, Self::is_flush),
            (Category::Straight, Self::is_straight),
            (Category::ThreeOfAKind, Self::is_three_of_a_kind),
            (Category::TwoPair, Self::is_two_pair),
            (Category::Pair, Self::is_pair),
        ];
        checks
            .iter()
            .find(|(_, check)| check(self))
            .map(|&(category, _)| category)
            .unwrap_or(Category::HighCard)
    }
}

impl From<[Card; 5]> for PokerHand {
    fn from(cards: [Card; 5]) -> Self {
        Self::new(cards)
    }
}

impl PartialEq for PokerHand {
    fn eq(&self, other: &Self) -> bool {
        self.category() == other.category()
    }
}

impl Eq for PokerHand {}

impl PartialOrd for PokerHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PokerHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category().cmp(&other.category())
    }
}
