//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "casino", version, about = "Deal cards and evaluate Blackjack and poker hands")]
pub struct CasinoCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Deal cards from a freshly shuffled shoe
    Deal {
        /// Number of decks shuffled together (overrides config)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        decks: Option<u64>,
        /// Number of cards to deal
        #[arg(long, default_value_t = 5)]
        count: usize,
        /// RNG seed for a reproducible shuffle (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Score a Blackjack hand, e.g. `casino blackjack AH AD 7C 2S`
    Blackjack {
        #[arg(required = true)]
        cards: Vec<String>,
        #[arg(long)]
        json: bool,
    },
    /// Classify exactly five cards, e.g. `casino poker 3H 3D 3C JS JH`
    Poker {
        #[arg(required = true, num_args = 5)]
        cards: Vec<String>,
        #[arg(long)]
        json: bool,
    },
    /// Best five-card hand from two held and up to five shared cards
    Holdem {
        /// Two held cards, e.g. "AD 2D"
        #[arg(long)]
        held: String,
        /// Shared cards, e.g. "2H 2C 3D 4D 5D"
        #[arg(long, default_value = "")]
        shared: String,
        #[arg(long)]
        json: bool,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
