//! Five-card poker classification command.

use crate::error::CliError;
use crate::formatters::format_cards;
use casino_engine::cards::{parse_cards, Card};
use casino_engine::poker::PokerHand;
use std::io::Write;

/// Classifies exactly five cards and prints the category.
pub fn handle_poker_command(
    cards: &[String],
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let parsed = parse_cards(&cards.join(" "))?;
    let five: [Card; 5] = parsed.try_into().map_err(|v: Vec<Card>| {
        CliError::InvalidInput(format!("poker needs exactly 5 cards, got {}", v.len()))
    })?;
    let hand = PokerHand::new(five);
    let category = hand.category();

    if json {
        let value = serde_json::json!({
            "cards": five.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
            "category": category,
        });
        writeln!(out, "{}", value)?;
    } else {
        writeln!(out, "Hand: {}", format_cards(&five))?;
        writeln!(out, "Category: {}", category)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn prints_category_name() {
        let mut out = Vec::new();
        handle_poker_command(&args("3H 3D 3C JS JH"), false, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Category: Full House"));
    }

    #[test]
    fn json_category_uses_variant_name() {
        let mut out = Vec::new();
        handle_poker_command(&args("10S JS QS KS AS"), true, &mut out).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["category"].as_str(), Some("RoyalFlush"));
    }

    #[test]
    fn wrong_card_count_is_invalid_input() {
        let mut out = Vec::new();
        let result = handle_poker_command(&args("3H 3D 3C JS"), false, &mut out);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
