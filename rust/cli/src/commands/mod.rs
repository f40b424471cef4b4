//! Command handler modules for the casino CLI.
//!
//! Each command lives in its own module and follows the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in by the caller
//! - Errors propagated via [`CliError`](crate::error::CliError)

mod blackjack;
mod cfg;
mod deal;
mod holdem;
mod poker;

pub use blackjack::handle_blackjack_command;
pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use holdem::handle_holdem_command;
pub use poker::handle_poker_command;
