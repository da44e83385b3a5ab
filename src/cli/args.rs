use crate::constants::verbosity;
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

/// Generate project folder structures for modern JavaScript/TypeScript projects.
#[derive(Parser, Debug)]
#[command(name = "skaflo", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Extra catalog file (JSON or YAML), or a directory holding skaflo.json/skaflo.yaml.
    #[arg(long, value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create a new project folder structure
    Create(CreateArgs),
    /// List available frameworks and structures
    List(ListArgs),
    /// Show the folders a structure would create, without creating them
    Preview(PreviewArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name; `.` scaffolds into the output directory itself.
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Framework to use (react, vue, nextjs, angular, express).
    #[arg(short, long)]
    pub framework: Option<String>,

    /// Structure style for the framework (e.g. feature-based, mvc).
    #[arg(short, long)]
    pub structure: Option<String>,

    /// Directory the project is created in. Defaults to the current directory.
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Skip the final confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,

    /// Fail instead of prompting for missing values.
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Only list structures for this framework.
    #[arg(short, long)]
    pub framework: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct PreviewArgs {
    #[arg(short, long)]
    pub framework: String,

    #[arg(short, long)]
    pub structure: String,
}

/// Parse command line arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
