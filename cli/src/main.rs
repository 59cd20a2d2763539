mod command;
mod config;
mod render;
mod runner;

use std::io;

use clap::Parser;
use engine::{log, logger, SessionRng};

use config::AppConfig;

#[derive(Parser)]
#[command(name = "tic_tac_toe_cli")]
struct Args {
    #[arg(long, default_value = "config.yaml")]
    config: String,

    #[arg(long)]
    board_size: Option<usize>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = AppConfig::load(&args.config)?;
    if let Some(board_size) = args.board_size {
        config.board_size = board_size;
    }
    config.validate()?;

    let prefix = if args.use_log_prefix {
        Some(
            config
                .log_prefix
                .clone()
                .unwrap_or_else(|| "TicTacToe".to_string()),
        )
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Board size: {}, session seed: {}", config.board_size, rng.seed());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    runner::run(&mut input, config.board_size, &mut rng)?;

    Ok(())
}
