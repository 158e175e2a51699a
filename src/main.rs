use clap::Parser;
use log::info;

use starfield::cli::{self, Args};
use starfield::io::TerminalIO;
use starfield::GenerationConfig;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GenerationConfig::load(path),
        None => Ok(GenerationConfig::default()),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Using seed {}", seed);

    let mut output = TerminalIO;
    if let Err(e) = cli::run(&config, seed, args.command, &mut output) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
