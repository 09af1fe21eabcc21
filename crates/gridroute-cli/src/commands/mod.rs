// Module exports for CLI subcommands.
//
// Each module handles one subcommand; main.rs parses arguments, loads the
// terrain, and dispatches here.

pub mod inspect;
pub mod path;
pub mod route;
