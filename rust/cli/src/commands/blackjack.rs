//! Blackjack scoring command.

use crate::error::CliError;
use crate::formatters::format_cards;
use casino_engine::blackjack::BlackjackHand;
use casino_engine::cards::parse_cards;
use std::io::Write;

/// Scores the given cards as a Blackjack hand, in the order given.
pub fn handle_blackjack_command(
    cards: &[String],
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hand = BlackjackHand::new(parse_cards(&cards.join(" "))?);

    if json {
        let value = serde_json::json!({
            "cards": hand.cards().iter().map(|c| c.to_string()).collect::<Vec<_>>(),
            "score": hand.score(),
            "bust": hand.is_bust(),
            "blackjack": hand.is_blackjack(),
        });
        writeln!(out, "{}", value)?;
        return Ok(());
    }

    writeln!(out, "Hand: {}", format_cards(hand.cards()))?;
    writeln!(out, "Score: {}", hand.score())?;
    if hand.is_blackjack() {
        writeln!(out, "Blackjack!")?;
    } else if hand.is_bust() {
        writeln!(out, "Bust")?;
    }
    Ok(())
}
