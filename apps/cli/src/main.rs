mod api;
mod share;
mod view;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use crate::api::ApiClient;
use crate::share::{share_current, TextSnapshotExporter};
use crate::view::{is_submittable, render_state, Session, ViewState};

/// Typed at the interactive prompt to export the current result.
const SHARE_COMMAND: &str = "/share";

#[derive(Debug, Parser)]
#[command(name = "character-cli")]
#[command(about = "Find out which anime character your LeetCode profile is")]
struct Cli {
    /// Base URL of the character API.
    #[arg(long, env = "CHARACTER_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    /// Request timeout in seconds.
    #[arg(long, env = "CHARACTER_API_TIMEOUT_SECS", default_value_t = 60)]
    timeout_secs: u64,

    /// Where shared snapshots are written.
    #[arg(long, default_value = ".")]
    export_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Assign a character to one username and exit.
    Assign {
        username: String,

        /// Save the result card and print a share link.
        #[arg(long)]
        share: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api = ApiClient::new(&cli.api_url, cli.timeout_secs)?;
    let exporter = TextSnapshotExporter::new(&cli.export_dir);
    let mut session = Session::new(&api);

    match cli.command {
        Some(Commands::Assign { username, share }) => {
            let state = session.submit(&username).await;
            print!("{}", render_state(state));
            let failed = matches!(state, ViewState::Failure(_));
            if share && !failed {
                share_and_report(&session, &exporter);
            }
            if failed {
                std::process::exit(1);
            }
        }
        None => run_interactive(&mut session, &exporter).await?,
    }

    Ok(())
}

async fn run_interactive(session: &mut Session<'_>, exporter: &TextSnapshotExporter) -> Result<()> {
    print!("{}", render_state(session.state()));
    println!("(type {SHARE_COMMAND} after a result to share it, Ctrl-D to quit)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim() == SHARE_COMMAND {
            share_and_report(session, exporter);
            continue;
        }

        if is_submittable(&line) {
            println!("Loading...");
        }
        let state = session.submit(&line).await;
        print!("{}", render_state(state));
    }

    Ok(())
}

/// Export is best effort: failures are reported, never retried.
fn share_and_report(session: &Session<'_>, exporter: &TextSnapshotExporter) {
    match share_current(session, exporter) {
        Ok(outcome) => {
            println!("Saved {}", outcome.snapshot.display());
            println!("Share it: {}", outcome.share_url);
        }
        Err(e) => eprintln!("Share failed: {e}"),
    }
}
