//! `agsend panes` — show which panes the configured patterns match.

use agsend_core::{Config, matching_panes};
use agsend_tmux::{TmuxCommandRunner, list_panes};

use crate::cli::PanesOpts;
use crate::locate::expand_patterns;

pub fn cmd_panes(
    config: &Config,
    runner: &impl TmuxCommandRunner,
    opts: &PanesOpts,
) -> anyhow::Result<()> {
    let panes = list_panes(runner)?;
    let patterns = expand_patterns(&config.ai_patterns);
    let matches = matching_panes(&panes, &patterns);

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        eprintln!("no matching panes");
        return Ok(());
    }
    for pane in matches {
        println!(
            "{}\t{}\t{}\t{}",
            pane.session_name, pane.pane_id, pane.current_cmd, pane.pane_title
        );
    }
    Ok(())
}
