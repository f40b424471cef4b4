//! Texas Hold'em best-hand command.

use crate::error::CliError;
use crate::formatters::format_cards;
use crate::ui;
use casino_engine::cards::{parse_cards, Card};
use casino_engine::holdem::HoldEmHand;
use std::io::Write;

const MAX_SHARED: usize = 5;

/// Finds the best five-card hand from two held cards and the shared cards.
///
/// With fewer than five cards in total there is no hand to report; a warning
/// goes to `err` and the JSON output carries `"best": null`.
pub fn handle_holdem_command(
    held: &str,
    shared: &str,
    json: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let held: [Card; 2] = parse_cards(held)?.try_into().map_err(|v: Vec<Card>| {
        CliError::InvalidInput(format!("expected 2 held cards, got {}", v.len()))
    })?;
    let shared = parse_cards(shared)?;
    if shared.len() > MAX_SHARED {
        return Err(CliError::InvalidInput(format!(
            "at most {} shared cards, got {}",
            MAX_SHARED,
            shared.len()
        )));
    }

    let hand = HoldEmHand::with_shared(held, shared);
    let best = hand.best_hand();
    if best.is_none() {
        ui::display_warning(
            err,
            &format!(
                "only {} cards available, a hand needs 5",
                hand.cards().len()
            ),
        )?;
    }

    if json {
        let value = serde_json::json!({
            "held": hand.held().iter().map(|c| c.to_string()).collect::<Vec<_>>(),
            "shared": hand.shared().iter().map(|c| c.to_string()).collect::<Vec<_>>(),
            "best": best,
        });
        writeln!(out, "{}", value)?;
        return Ok(());
    }

    writeln!(out, "Held: {}", format_cards(hand.held()))?;
    writeln!(out, "Shared: {}", format_cards(hand.shared()))?;
    match best {
        Some(b) => writeln!(out, "Best: {} {}", b.category, format_cards(&b.cards))?,
        None => writeln!(out, "Best: none")?,
    }
    Ok(())
}
