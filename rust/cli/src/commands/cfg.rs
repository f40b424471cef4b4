//! Configuration command handler.
//!
//! Displays the resolved configuration with the source of every value
//! (default, environment, or configuration file).
//!
//! ```json
//! {
//!   "num_decks": {
//!     "value": 1,
//!     "source": "default"
//!   },
//!   "seed": {
//!     "value": null,
//!     "source": "default"
//!   }
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "num_decks": {
            "value": config.num_decks,
            "source": sources.num_decks,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_cfg_displays_json_output() {
        unsafe {
            std::env::remove_var(config::CONFIG_ENV);
            std::env::remove_var(config::DECKS_ENV);
            std::env::remove_var(config::SEED_ENV);
        }
        let mut out = Vec::new();

        let result = handle_cfg_command(&mut out);
        assert!(result.is_ok(), "cfg command should succeed");

        let output = String::from_utf8(out).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&output).expect("cfg output should be valid JSON");
        assert_eq!(json["num_decks"]["value"].as_u64(), Some(1));
        assert_eq!(json["num_decks"]["source"].as_str(), Some("default"));
        assert!(json["seed"]["value"].is_null());
    }

    #[test]
    #[serial]
    fn test_cfg_reports_invalid_env() {
        unsafe {
            std::env::remove_var(config::CONFIG_ENV);
            std::env::set_var(config::DECKS_ENV, "zero");
        }
        let mut out = Vec::new();
        let result = handle_cfg_command(&mut out);
        unsafe {
            std::env::remove_var(config::DECKS_ENV);
        }

        assert!(matches!(result, Err(CliError::Config(_))));
        assert!(out.is_empty());
    }
}
