use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "trainergen")]
#[command(about = "Interactive generator for pokemon trainer records")]
#[command(version)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, env = "TRAINERGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Start from a previously exported trainer instead of a fresh one
    #[arg(short, long)]
    pub load: Option<PathBuf>,

    /// Serve species lookups from a local JSON pokedex file
    #[arg(long)]
    pub pokedex: Option<PathBuf>,

    /// Print the default configuration file and exit
    #[arg(long)]
    pub print_config: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
