mod app;
mod board_ui;
mod config;

use clap::Parser;
use tictactoe_engine::SessionRng;
use tictactoe_engine::logger::init_logger;

#[derive(Parser, Debug)]
#[command(name = "tictactoe_client", about = "Desktop tic-tac-toe")]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<String>,

    /// Fixed RNG seed, for reproducible bot games
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    init_logger();

    let config_path = args
        .config
        .unwrap_or_else(|| config::CONFIG_FILE.to_string());
    let config_manager = config::get_config_manager(&config_path);

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    tictactoe_engine::log!("Starting tic-tac-toe client (rng seed: {})", rng.seed());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 560.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(|_cc| Ok(Box::new(app::TicTacToeApp::new(config_manager, rng)))),
    )?;

    Ok(())
}
