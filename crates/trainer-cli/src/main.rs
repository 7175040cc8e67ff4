// crates/trainer-cli/src/main.rs - CLI Application Entry Point
//
// trainergen is an interactive editor for a pokemon trainer record. It starts
// with a fresh trainer (or one loaded from a previous export), then hands
// control to the root menu until the user picks Close.
//
// ARCHITECTURE OVERVIEW:
// ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────────┐
// │   User Input    │───▶│    Menu Loop     │───▶│  Command Handlers   │
// │ (dialoguer)     │    │  (menu.rs)       │    │ (commands/*.rs)     │
// └─────────────────┘    └──────────────────┘    └─────────────────────┘
//                                 │                        │
//                                 ▼                        ▼
//                        ┌──────────────────┐    ┌─────────────────────┐
//                        │     Context      │    │     Services        │
//                        │ (config + rng)   │    │ (prompt, API, files)│
//                        └──────────────────┘    └─────────────────────┘
//
// The trainer itself is owned here and lent to the menu tree as `&mut Trainer`.
//
// EXAMPLE USAGE:
// ```bash
// trainergen                                   # Start with a fresh trainer
// trainergen --load red.json                   # Continue editing an export
// trainergen --pokedex pokedex.json            # Work offline
// trainergen --print-config > trainergen.toml  # Write a starter config
// trainergen -vv --config trainergen.toml      # Debug logging to stderr
// ```

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use trainer_core::{ConfigManager, Trainer};

mod cli; // Command-line argument definitions
mod commands; // Menu levels and their commands
mod context; // Application context and dependency injection
mod menu; // Menu loop and dispatch
mod services; // Infrastructure services (prompts, pokedex API, file storage)

use cli::Cli;
use commands::RootMenu;
use context::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", ConfigManager::generate_default_config());
        return Ok(());
    }

    init_logging(cli.verbose);

    let config = ConfigManager::load_config(cli.config.as_deref())?;
    let mut ctx = Context::new(config, cli.pokedex)?;

    let mut trainer = match cli.load {
        Some(path) => ctx.storage.load_path(&path)?,
        None => Trainer::new(ctx.config().trainer.default_name.clone()),
    };

    tracing::info!(name = %trainer.name, team = trainer.team_len(), "session started");

    menu::run_menu(&RootMenu, &mut ctx, &mut trainer)
}

/// Log to stderr so prompts on the terminal stay readable
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
