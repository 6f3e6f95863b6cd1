//! CLI frontend for the Arcana tarot table.

mod commands;
mod logging;
mod tui;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "arcana",
    about = "Arcana: draw a card from the Astros do Rock tarot deck",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON deck file to use instead of the built-in deck
    #[arg(long, global = true)]
    deck: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every card in the deck
    List,

    /// Show one card by id
    Show {
        /// Card id
        id: u32,
    },

    /// Draw one card at random and reveal it
    Draw {
        /// RNG seed for a reproducible draw
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the card as JSON
        #[arg(long)]
        json: bool,
    },

    /// Draw many times and report how evenly cards come up
    Stats {
        /// Number of draws
        #[arg(short, long, default_value = "100000")]
        trials: u64,

        /// RNG seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Launch the interactive card table in the terminal
    Tui {
        /// RNG seed for draws and decor
        #[arg(short, long)]
        seed: Option<u64>,

        /// Allow drawing again while a card is revealed
        #[arg(long)]
        allow_redraw: bool,

        /// Compact layout at or below this many logical pixels
        #[arg(long, default_value = "768")]
        breakpoint: u32,

        /// Logical pixels per terminal column
        #[arg(long, default_value = "8")]
        px_per_column: u32,
    },
}

fn main() {
    let cli = Cli::parse();

    let interactive = matches!(cli.command, Commands::Tui { .. });
    logging::setup_tracing(cli.verbose, interactive);

    let deck = cli.deck.as_deref();
    let result = match cli.command {
        Commands::List => commands::list::run(deck),
        Commands::Show { id } => commands::show::run(deck, id),
        Commands::Draw { seed, json } => commands::draw::run(deck, seed, json),
        Commands::Stats { trials, seed } => commands::stats::run(deck, trials, seed),
        Commands::Tui {
            seed,
            allow_redraw,
            breakpoint,
            px_per_column,
        } => commands::load_catalog(deck).and_then(|catalog| {
            let options = tui::TuiOptions {
                seed,
                allow_redraw,
                breakpoint,
                px_per_column,
            };
            tui::run(catalog, &options)
        }),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "command failed");
        eprintln!("error: {e}");
        process::exit(1);
    }
}
