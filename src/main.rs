//! m,n,k game GUI
//!
//! A graphical interface for playing against the computer or another player.

use std::path::PathBuf;

use clap::Parser;
use mnk::ui::MnkApp;
use mnk::{GameConfig, GameMode};
use tracing_subscriber::EnvFilter;

/// Command-line options; values given here override the config file
#[derive(Debug, Parser)]
#[command(name = "mnk", about = "Tic-tac-toe on any board size")]
struct Args {
    /// TOML file with game settings
    #[arg(long, default_value = "mnk.toml")]
    config: PathBuf,
    #[arg(long)]
    width: Option<usize>,
    #[arg(long)]
    height: Option<usize>,
    #[arg(long)]
    win_length: Option<usize>,
    /// Play against a second human instead of the computer
    #[arg(long)]
    hotseat: bool,
    /// Seed for the computer's random moves
    #[arg(long)]
    seed: Option<u64>,
    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = GameConfig::load_or_default(&args.config)?;
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(win_length) = args.win_length {
        config.win_length = win_length;
    }
    if args.hotseat {
        config.mode = GameMode::HumanVsHuman;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate()?;

    let game = config.start()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 600.0])
            .with_resizable(false)
            .with_title("TicTacToe"),
        ..Default::default()
    };

    eframe::run_native(
        "TicTacToe",
        options,
        Box::new(move |cc| Ok(Box::new(MnkApp::new(cc, game, config)))),
    )?;
    Ok(())
}
