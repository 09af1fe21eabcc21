//! gridroute CLI library.
//!
//! Output formatting shared by the `gridroute` subcommands.

pub mod output;
