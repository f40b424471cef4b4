//! # Casino CLI Library
//!
//! Command-line surface over `casino-engine`: deal from a shuffled shoe and
//! evaluate Blackjack, five-card poker and Texas Hold'em hands.
//!
//! The entry point is [`run`], which parses arguments, dispatches to a
//! command handler and returns the process exit code.
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = casino_cli::run(["casino", "poker", "3H", "3D", "3C", "JS", "JH"], &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Full House"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `deal`: Deal cards from a freshly shuffled shoe
//! - `blackjack`: Score a Blackjack hand
//! - `poker`: Classify five cards
//! - `holdem`: Best five-card hand from held and shared cards
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;

use cli::{CasinoCli, Commands};
use commands::{
    handle_blackjack_command, handle_cfg_command, handle_deal_command, handle_holdem_command,
    handle_poker_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match CasinoCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout and succeed
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write!(err, "{}", e);
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Deal { decks, count, seed } => {
            handle_deal_command(decks.map(|d| d as usize), count, seed, out)
        }
        Commands::Blackjack { cards, json } => handle_blackjack_command(&cards, json, out),
        Commands::Poker { cards, json } => handle_poker_command(&cards, json, out),
        Commands::Holdem { held, shared, json } => {
            handle_holdem_command(&held, &shared, json, out, err)
        }
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
