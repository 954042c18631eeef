//! agsend: send editor context to AI agent panes in tmux.
//! One synchronous pass per invocation; no daemon, no background state.

use clap::Parser;

mod cli;
mod clipboard;
mod cmd_panes;
mod cmd_send;
mod config_file;
mod git;
mod locate;
mod transmit;

fn main() -> anyhow::Result<()> {
    let filter = std::env::var("AGSEND_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Cli::parse();
    let config = config_file::load(args.config.as_deref())?;
    let executor = cli::build_executor(&args);

    match args.command {
        cli::Command::Location(opts) => cmd_send::cmd_location(&config, &executor, &opts),
        cli::Command::Selection(opts) => cmd_send::cmd_selection(&config, &executor, &opts),
        cli::Command::Panes(opts) => cmd_panes::cmd_panes(&config, &executor, &opts),
    }
}
