//! Windowed card table for Arcana: macroquad entry point.
//!
//! Samples input once per frame, feeds it to [`AppState`], then draws the
//! scene. The logical window width drives the layout mode.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use macroquad::prelude::*;
use tracing_subscriber::EnvFilter;

use arcana_core::{ArcanaConfig, Catalog, DEFAULT_BREAKPOINT, DrawPolicy};
use arcana_gui::app::{AppState, FrameInput};
use arcana_gui::art::Art;
use arcana_gui::scene;

#[derive(Parser)]
#[command(name = "arcana-gui", about = "Draw a tarot card in a window")]
struct Args {
    /// JSON deck file to use instead of the built-in deck
    #[arg(long)]
    deck: Option<PathBuf>,

    /// Seed for reproducible draws
    #[arg(long)]
    seed: Option<u64>,

    /// Directory that card image paths are resolved against
    #[arg(long, default_value = "public")]
    assets: PathBuf,

    /// Allow drawing again while a card is shown
    #[arg(long)]
    allow_redraw: bool,

    /// Widths at or below this many pixels use the compact layout
    #[arg(long, default_value_t = DEFAULT_BREAKPOINT)]
    breakpoint: u32,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn window_conf() -> Conf {
    Conf {
        window_title: Catalog::TITLE.to_owned(),
        window_width: 1280,
        window_height: 860,
        window_resizable: true,
        ..Default::default()
    }
}

fn setup_tracing(verbose: bool) {
    let fallback = if verbose {
        "arcana_gui=debug,arcana_core=debug,warn"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn config_from(args: &Args) -> ArcanaConfig {
    let policy = if args.allow_redraw {
        DrawPolicy::AllowRedraw
    } else {
        DrawPolicy::HiddenOnly
    };
    let config = ArcanaConfig::default()
        .with_breakpoint(args.breakpoint)
        .with_policy(policy);
    match args.seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    }
}

fn sample_input() -> FrameInput {
    let draw_key = is_key_pressed(KeyCode::Space)
        || is_key_pressed(KeyCode::Enter)
        || is_key_pressed(KeyCode::D);
    let reset_key = is_key_pressed(KeyCode::Enter)
        || is_key_pressed(KeyCode::Backspace)
        || is_key_pressed(KeyCode::R);
    FrameInput {
        width: screen_width(),
        height: screen_height(),
        mouse: mouse_position(),
        clicked: is_mouse_button_pressed(MouseButton::Left),
        draw_key,
        reset_key,
        quit_key: is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q),
        wheel: mouse_wheel().1,
        time: get_time(),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();
    setup_tracing(args.verbose);

    let catalog = match &args.deck {
        Some(path) => match Catalog::load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::error!(error = %e, "deck not loaded");
                eprintln!("error: {e}");
                process::exit(1);
            }
        },
        None => Catalog::builtin(),
    };

    let art = Art::load(&args.assets, &catalog).await;
    let config = config_from(&args);
    let mut app = AppState::new(catalog, &config, screen_width(), screen_height(), get_time());
    tracing::info!(mode = %app.table.mode(), "table mounted");

    loop {
        let input = sample_input();
        app.update(&input);
        if app.should_quit {
            break;
        }
        scene::draw(&app, &art);
        next_frame().await;
    }
}
