//! Card formatters for terminal display.
//!
//! Cards print with Unicode suit symbols where the terminal supports them and
//! fall back to the plain `10D` style otherwise.
//!
//! ```rust
//! use casino_engine::cards::{Card, Rank, Suit};
//! use casino_cli::formatters::{format_card, format_cards};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "AS");
//! assert!(format_cards(&[ace_spades]).starts_with("[A"));
//! ```

use casino_engine::cards::{Card, Suit};

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). On Unix-like systems,
/// assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        suit.to_string()
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank, format_suit(&card.suit))
}

/// Formats a list of cards as `[A♠ 10♦ 2♣]`.
pub fn format_cards(cards: &[Card]) -> String {
    let inner: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", inner.join(" "))
}
