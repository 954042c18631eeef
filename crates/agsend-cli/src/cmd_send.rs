//! `agsend location` / `agsend selection` — format the message and run one
//! dispatch pass.

use std::io::Read;

use agsend_core::{
    AgsendError, Config, Outcome, Selection, SizeCheck, check_size, dispatch, location_message,
    resolve_display_path, selection_message,
};
use agsend_tmux::TmuxExecutor;

use crate::cli::{LocationOpts, SelectionOpts};
use crate::clipboard::SystemClipboard;
use crate::git::GitRepoRoot;
use crate::locate::TmuxLocator;
use crate::transmit::TmuxTransmitter;

pub fn cmd_location(
    config: &Config,
    executor: &TmuxExecutor,
    opts: &LocationOpts,
) -> anyhow::Result<()> {
    if opts.file.is_empty() {
        fail(&AgsendError::InvalidBuffer);
    }
    let path = resolve(config, &opts.file)?;
    let message = location_message(&path, opts.line);
    deliver(config, executor, &message)
}

pub fn cmd_selection(
    config: &Config,
    executor: &TmuxExecutor,
    opts: &SelectionOpts,
) -> anyhow::Result<()> {
    if opts.file.is_empty() {
        fail(&AgsendError::InvalidBuffer);
    }

    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    let selection = Selection::new(opts.start, opts.end, lines);

    // Size guard runs before any path lookup or tmux traffic.
    match check_size(&selection, config) {
        Ok(SizeCheck::Ok) => {}
        Ok(SizeCheck::Warn { lines, warn }) => {
            tracing::warn!(lines, warn, "selection exceeds the warn threshold");
            eprintln!("note: sending {lines} lines (warn threshold is {warn})");
        }
        Err(err) => fail(&err),
    }

    let path = resolve(config, &opts.file)?;
    let message = selection_message(&path, selection.start, selection.end, &selection.lines);
    deliver(config, executor, &message)
}

fn resolve(config: &Config, file: &str) -> anyhow::Result<String> {
    let cwd = std::env::current_dir()?;
    Ok(resolve_display_path(
        file,
        &cwd,
        config.path_style,
        config.path_style_fallback,
        &GitRepoRoot,
    ))
}

fn deliver(config: &Config, executor: &TmuxExecutor, message: &str) -> anyhow::Result<()> {
    let locator = TmuxLocator::new(executor);
    let transmitter = TmuxTransmitter::new(executor);
    let outcome = dispatch(config, message, &locator, &transmitter, &SystemClipboard);
    report(outcome)
}

fn report(outcome: Outcome) -> anyhow::Result<()> {
    match outcome {
        Outcome::SentToPane { pane } => {
            println!("sent to {}", pane.label());
            Ok(())
        }
        Outcome::SentToClipboard {
            after_send_failure: None,
        } => {
            println!("no agent pane reachable; copied to clipboard");
            Ok(())
        }
        Outcome::SentToClipboard {
            after_send_failure: Some(reason),
        } => {
            println!("send failed ({reason}); copied to clipboard");
            Ok(())
        }
        Outcome::Failed(err) => fail(&err),
    }
}

/// Print the failure with its remedial hint and exit non-zero.
fn fail(err: &AgsendError) -> ! {
    eprintln!("error: {err}");
    if let Some(hint) = err.hint() {
        eprintln!("hint: {hint}");
    }
    std::process::exit(1);
}
