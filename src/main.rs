//! Rollcall - Student Record Manager
//!
//! Interactive shell over an in-memory list of student records.

use anyhow::{Context, Result};
use clap::Parser;
use rollcall::config::{config_path, Config};
use rollcall::session::{Session, Step};
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Config file (defaults to the user config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run commands from a file instead of stdin
    #[arg(short, long)]
    script: Option<PathBuf>,
}

/// `RUST_LOG` wins, then `--verbose`, then the configured level
fn log_filter(verbose: bool, level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new(level.to_lowercase())
        }
    })
}

async fn run<R: AsyncBufRead + Unpin>(session: &mut Session, reader: R, interactive: bool) -> Result<()> {
    let mut lines = reader.lines();
    loop {
        if interactive {
            print!("{}", session.prompt());
            std::io::stdout().flush()?;
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match session.handle_line(&line) {
            Step::Quit => break,
            Step::Output(out) if out.is_empty() => {}
            Step::Output(out) => println!("{}", out),
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging (stderr, so tables on stdout stay clean). The filter is
    // reloaded once the config is known, so config warnings are not lost.
    let (filter, filter_handle) = reload::Layer::new(log_filter(args.verbose, "info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    let (config, path) = match args.config.clone() {
        Some(path) => (
            Config::load_from(&path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            path,
        ),
        None => (Config::load().context("loading config")?, config_path()),
    };
    filter_handle.reload(log_filter(args.verbose, &config.log_level))?;

    info!("🎓 Rollcall v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut session = Session::new(config, path);

    match args.script {
        Some(script) => {
            let file = tokio::fs::File::open(&script)
                .await
                .with_context(|| format!("opening script {}", script.display()))?;
            info!("📜 Running {}", script.display());
            run(&mut session, BufReader::new(file), false).await?;
        }
        None => {
            println!("Type 'help' for commands.");
            run(&mut session, BufReader::new(tokio::io::stdin()), true).await?;
        }
    }

    info!("👋 Bye");
    Ok(())
}
