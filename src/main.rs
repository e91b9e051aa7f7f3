use clap::{Parser, Subcommand};
use log::{error, info, LevelFilter};
use std::error::Error;

mod app;
mod config;
mod core;
mod game;
mod screens;
mod ui;

#[derive(Debug, Parser)]
#[command(name = "first-rpg")]
#[command(about = "First game RPG: start menu, intro cut-scene and a console mini-game")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
enum Commands {
    /// Play "guess the number" in the terminal instead of opening a window.
    Guess,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // --- Logging Setup ---
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .filter_module("first_rpg::screens", LevelFilter::Debug)
        .parse_default_env()
        .init();

    if let Some(Commands::Guess) = cli.command {
        info!("Starting console game...");
        let outcome = game::run()?;
        info!("Console game finished: {:?}", outcome);
        return Ok(());
    }

    info!("Application starting...");
    if let Err(e) = app::run() {
        error!("Application exited with error: {}", e);
        return Err(e);
    }

    info!("Application exited gracefully.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_opens_the_window() {
        let cli = Cli::try_parse_from(["first-rpg"]).unwrap();
        assert_eq!(cli.command, None);
    }

    #[test]
    fn guess_selects_console_game() {
        let cli = Cli::try_parse_from(["first-rpg", "guess"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Guess));
    }

    #[test]
    fn unknown_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["first-rpg", "gues"]).is_err());
        assert!(Cli::try_parse_from(["first-rpg", "--fullscreen"]).is_err());
    }
}
