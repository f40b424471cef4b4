use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseCardError;

/// Represents one of the four suits of a standard deck.
/// Suits carry no ranking; they only matter for flush and equality checks.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit (♥)
    Hearts,
    /// Diamonds suit (♦)
    Diamonds,
    /// Clubs suit (♣)
    Clubs,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    pub fn all() -> [Suit; 4] {
        [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades]
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Suit::Hearts => "H",
            Suit::Diamonds => "D",
            Suit::Clubs => "C",
            Suit::Spades => "S",
        };
        f.write_str(s)
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "H" => Ok(Suit::Hearts),
            "D" => Ok(Suit::Diamonds),
            "C" => Ok(Suit::Clubs),
            "S" => Ok(Suit::Spades),
            _ => Err(ParseCardError::InvalidSuit(s.to_string())),
        }
    }
}

/// Represents the rank of a card from Two through Ace.
///
/// The derived ordering is the *sequence order* (Two lowest, Ace highest) used
/// for straights. Blackjack scoring uses [`Rank::blackjack_value`] instead.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    pub fn all() -> [Rank; 13] {
        [
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
        ]
    }

    /// Position in sequence order: Two is 0, Ace is 12.
    pub fn sequence_index(self) -> u8 {
        self as u8
    }

    /// Blackjack value of the rank. Aces report their soft value of 11; the
    /// hand decides when an ace counts as 1.
    pub fn blackjack_value(self) -> u32 {
        match self {
            Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
            r => u32::from(r.sequence_index()) + 2,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Jack => f.write_str("J"),
            Rank::Queen => f.write_str("Q"),
            Rank::King => f.write_str("K"),
            Rank::Ace => f.write_str("A"),
            r => write!(f, "{}", r.sequence_index() + 2),
        }
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(ParseCardError::InvalidRank(s.to_string())),
        };
        Ok(rank)
    }
}

/// Represents a single playing card with a rank and a suit.
/// Cards are small immutable values; any rank and suit combination is valid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
    /// The suit of the card
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses text such as `"AH"`, `"10d"` or `"Ts"`: a rank followed by a
    /// one-letter suit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some((split, _)) = s.char_indices().last() else {
            return Err(ParseCardError::Empty);
        };
        if split == 0 {
            return Err(ParseCardError::InvalidRank(s.to_string()));
        }
        let (rank, suit) = s.split_at(split);
        Ok(Card::new(rank.parse()?, suit.parse()?))
    }
}

/// Parses a list of cards separated by whitespace or commas.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

/// Every rank paired with every suit, repeated `copies` times.
pub fn full_deck(copies: usize) -> Vec<Card> {
    let mut v = Vec::with_capacity(52 * copies);
    for _ in 0..copies {
        for r in Rank::all() {
            for s in Suit::all() {
                v.push(Card::new(r, s));
            }
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blackjack_values_follow_face_value() {
        assert_eq!(Rank::Two.blackjack_value(), 2);
        assert_eq!(Rank::Nine.blackjack_value(), 9);
        assert_eq!(Rank::Ten.blackjack_value(), 10);
        assert_eq!(Rank::Jack.blackjack_value(), 10);
        assert_eq!(Rank::King.blackjack_value(), 10);
        assert_eq!(Rank::Ace.blackjack_value(), 11);
    }

    #[test]
    fn sequence_order_runs_two_to_ace() {
        assert_eq!(Rank::Two.sequence_index(), 0);
        assert_eq!(Rank::Ace.sequence_index(), 12);
        assert!(Rank::Ace > Rank::King);
        assert!(Rank::Two < Rank::Three);
    }

    #[test]
    fn card_display_and_parse() {
        let c = Card::new(Rank::Ten, Suit::Diamonds);
        assert_eq!(c.to_string(), "10D");
        assert_eq!("10d".parse::<Card>().unwrap(), c);
        assert_eq!("TD".parse::<Card>().unwrap(), c);
        assert_eq!(
            "AS".parse::<Card>().unwrap(),
            Card::new(Rank::Ace, Suit::Spades)
        );
    }

    #[test]
    fn card_parse_errors() {
        assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
        assert!(matches!(
            "H".parse::<Card>(),
            Err(ParseCardError::InvalidRank(_))
        ));
        assert!(matches!(
            "1H".parse::<Card>(),
            Err(ParseCardError::InvalidRank(_))
        ));
        assert!(matches!(
            "AX".parse::<Card>(),
            Err(ParseCardError::InvalidSuit(_))
        ));
    }

    #[test]
    fn parse_cards_accepts_commas_and_spaces() {
        let cards = parse_cards("AD, 2d  3H").unwrap();
        assert_eq!(
            cards,
            vec![
                Card::new(Rank::Ace, Suit::Diamonds),
                Card::new(Rank::Two, Suit::Diamonds),
                Card::new(Rank::Three, Suit::Hearts),
            ]
        );
    }

    #[test]
    fn full_deck_replicates_every_card() {
        let one = full_deck(1);
        assert_eq!(one.len(), 52);
        let three = full_deck(3);
        assert_eq!(three.len(), 156);
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(three.iter().filter(|&&c| c == ah).count(), 3);
    }
}
