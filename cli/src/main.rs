mod args;
mod commands;
mod output;

use clap::Parser;
use colored::Colorize;
use log::LevelFilter;

#[tokio::main]
async fn main() {
    let cli = args::Cli::parse();

    setup_logging(cli.debug);

    if let Err(e) = commands::execute(&cli).await {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    // RUST_LOG still wins over the -d flags when set.
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
