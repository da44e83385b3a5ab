pub mod args;
pub mod prompt;
pub mod runner;

pub use args::{get_log_level_from_verbose, parse_cli, Cli, Commands, CreateArgs, ListArgs, PreviewArgs};
pub use runner::{run, Runner};
