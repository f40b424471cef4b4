//! # casino-engine: Playing Card Games Core
//!
//! Card model, a multi-deck shoe for dealing, Blackjack scoring, five-card
//! poker classification and Texas Hold'em best-hand selection.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Rank, Suit, Card) and parsing
//! - [`deck`] - Seeded shuffling and dealing with ChaCha20 RNG
//! - [`blackjack`] - Blackjack hand scoring
//! - [`poker`] - Five-card hand predicates and categories
//! - [`combinations`] - Fixed-size subset enumeration
//! - [`holdem`] - Best five-card hand out of held and shared cards
//! - [`errors`] - Error types for dealing and parsing
//!
//! ## Quick Start
//!
//! ```rust
//! use casino_engine::cards::parse_cards;
//! use casino_engine::holdem::HoldEmHand;
//! use casino_engine::poker::Category;
//!
//! let held = parse_cards("AD 2D").unwrap();
//! let mut hand = HoldEmHand::new([held[0], held[1]]);
//! hand.add_shared(parse_cards("2H 2C 3D 4D 5D").unwrap());
//!
//! let best = hand.best_hand().unwrap();
//! assert_eq!(best.category, Category::StraightFlush);
//! ```
//!
//! ## Deterministic Dealing
//!
//! ```rust
//! use casino_engine::deck::Deck;
//!
//! let mut d1 = Deck::with_seed(1, 42);
//! let mut d2 = Deck::with_seed(1, 42);
//! assert_eq!(d1.deal(5).unwrap(), d2.deal(5).unwrap());
//! ```

pub mod blackjack;
pub mod cards;
pub mod combinations;
pub mod deck;
pub mod errors;
pub mod holdem;
pub mod poker;
