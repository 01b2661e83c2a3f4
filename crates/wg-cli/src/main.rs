//! CLI frontend for the Wizard's Gauntlet terminal games.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "wg",
    about = "Wizard's Gauntlet — two small duel games for the terminal",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play rock-paper-scissors-lizard-Spock against the computer
    Rpsls {
        /// RNG seed for reproducible play (default: OS entropy)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Walk the castle and duel the wizards who guard it
    Castle {
        /// RNG seed for reproducible play (default: OS entropy)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Print the rule tables for both games
    Rules {
        /// Emit the tables as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Rpsls { seed } => commands::rpsls::run(seed),
        Commands::Castle { seed } => commands::castle::run(seed),
        Commands::Rules { json } => commands::rules::run(json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
