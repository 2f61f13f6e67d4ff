//! CLI client for roster.
//!
//! - `setup`: clap definitions, version string, logging
//! - `handlers`: one handler per subcommand, wired to the API
//! - `menu`: the interactive menu, used when no subcommand is given
//! - `print`: terminal output for records and messages

mod handlers;
mod menu;
mod print;
mod setup;

pub use handlers::run;
