use anyhow::Context;
use clap::Parser;
use std::process;
use todo::cli::{Cli, Commands};
use todo::cli_handlers;
use todo::config::Config;
use todo::store::Store;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::resolve(cli.file).context("failed to locate todo file")?;
    tracing::debug!(path = %config.todos_file.display(), "using todo file");
    let store = Store::new(config.todos_file);

    match cli.command {
        Commands::List => cli_handlers::handle_list(&store),
        Commands::Add { task } => cli_handlers::handle_add(&store, &task),
        Commands::Remove { index } => cli_handlers::handle_remove(&store, index),
        Commands::Move { start, target } => cli_handlers::handle_move(&store, start, target),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
