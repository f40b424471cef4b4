//! Deal command handler.
//!
//! Builds a shuffled shoe and deals cards off the top. Deck count and seed
//! come from the flags, falling back to the resolved configuration.

use crate::config;
use crate::error::CliError;
use crate::formatters::format_cards;
use casino_engine::deck::Deck;
use std::io::Write;
use tracing::debug;

/// Handle the deal command.
///
/// # Arguments
///
/// * `decks` - Number of decks in the shoe, `None` to use the configuration
/// * `count` - Number of cards to deal
/// * `seed` - RNG seed, `None` to use the configuration or a random seed
/// * `out` - Output stream for command results
pub fn handle_deal_command(
    decks: Option<usize>,
    count: usize,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let num_decks = decks.unwrap_or(cfg.num_decks);
    if num_decks == 0 {
        return Err(CliError::InvalidInput("decks must be >= 1".into()));
    }
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    debug!(num_decks, seed, count, "dealing");

    let mut deck = Deck::with_seed(num_decks, seed);
    let cards = deck.deal(count)?;

    writeln!(out, "Cards: {}", format_cards(&cards))?;
    writeln!(out, "Remaining: {}/{}", deck.cards_remaining(), deck.len())?;
    Ok(())
}
