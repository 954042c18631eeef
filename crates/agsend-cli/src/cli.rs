//! CLI definition using clap derive.

use agsend_tmux::TmuxExecutor;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "agsend",
    about = "Send editor context to AI agent panes in tmux",
    version
)]
pub struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/agsend/config.toml)
    #[arg(long, global = true, env = "AGSEND_CONFIG")]
    pub config: Option<String>,

    /// tmux server socket path (tmux -S)
    #[arg(long, short = 'S', global = true)]
    pub socket_path: Option<String>,

    /// tmux server socket name (tmux -L)
    #[arg(long, short = 'L', global = true)]
    pub socket_name: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Send the current file and cursor line
    Location(LocationOpts),
    /// Send an inclusive line range plus its text (read from stdin)
    Selection(SelectionOpts),
    /// List panes matching the configured AI patterns
    Panes(PanesOpts),
}

#[derive(Args)]
pub struct LocationOpts {
    /// Absolute path of the current buffer (empty for an unnamed buffer)
    #[arg(long)]
    pub file: String,

    /// 1-indexed cursor line
    #[arg(long)]
    pub line: usize,
}

#[derive(Args)]
pub struct SelectionOpts {
    /// Absolute path of the current buffer (empty for an unnamed buffer)
    #[arg(long)]
    pub file: String,

    /// 1-indexed first selected line
    #[arg(long)]
    pub start: usize,

    /// 1-indexed last selected line (inclusive)
    #[arg(long)]
    pub end: usize,
}

#[derive(Args)]
pub struct PanesOpts {
    /// Emit the matches as JSON
    #[arg(long)]
    pub json: bool,
}

/// Executor honoring the global socket flags; socket path wins over name.
pub fn build_executor(cli: &Cli) -> TmuxExecutor {
    let mut executor = TmuxExecutor::default();
    if let Some(ref path) = cli.socket_path {
        executor = executor.with_socket_path(path.clone());
    }
    if let Some(ref name) = cli.socket_name {
        executor = executor.with_socket_name(name.clone());
    }
    executor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_location() {
        let cli = Cli::parse_from(["agsend", "location", "--file", "/a/b.rs", "--line", "7"]);
        match cli.command {
            Command::Location(opts) => {
                assert_eq!(opts.file, "/a/b.rs");
                assert_eq!(opts.line, 7);
            }
            _ => panic!("expected location subcommand"),
        }
    }

    #[test]
    fn parses_selection_range() {
        let cli = Cli::parse_from([
            "agsend",
            "selection",
            "--file",
            "/a/b.rs",
            "--start",
            "3",
            "--end",
            "9",
        ]);
        match cli.command {
            Command::Selection(opts) => {
                assert_eq!((opts.start, opts.end), (3, 9));
            }
            _ => panic!("expected selection subcommand"),
        }
    }

    #[test]
    fn global_socket_flags_accepted_after_subcommand() {
        let cli = Cli::parse_from(["agsend", "panes", "--json", "-L", "dev"]);
        assert_eq!(cli.socket_name.as_deref(), Some("dev"));
        match cli.command {
            Command::Panes(opts) => assert!(opts.json),
            _ => panic!("expected panes subcommand"),
        }
    }
}
