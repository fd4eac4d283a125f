//! CLI that reads HTML from stdin (or a file) and prints JSON to stdout.
//!
//! ```text
//! htmlnav canonical --base-url http://example.com/first/ < page.html
//! htmlnav refresh --input page.html
//! htmlnav strip --include-title < page.html
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rs_htmlnav::{
    canonical_url_from_bytes, meta_refresh_url_from_bytes, strip_html_bytes, StripOptions,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "htmlnav",
    version,
    about = "Canonical URLs, meta refresh targets and plain text from HTML"
)]
struct Cli {
    /// Read HTML from this file instead of stdin
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the `<link rel="canonical">` target
    Canonical {
        /// URL the page was fetched from, for resolving relative hrefs
        #[arg(short, long)]
        base_url: Option<String>,
    },
    /// Print the `<meta http-equiv="refresh">` target
    Refresh {
        /// URL the page was fetched from, for resolving relative targets
        #[arg(short, long)]
        base_url: Option<String>,
    },
    /// Print the page as sentence-delimited plain text
    Strip {
        /// Emit the `<title>` as the first sentence
        #[arg(long)]
        include_title: bool,
    },
}

#[derive(Serialize)]
#[serde(untagged)]
enum Output {
    Url { url: Option<String> },
    Text { text: String },
}

fn read_html(input: Option<&PathBuf>) -> anyhow::Result<Vec<u8>> {
    match input {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut html = Vec::new();
            io::stdin()
                .read_to_end(&mut html)
                .context("failed to read from stdin")?;
            Ok(html)
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let html = read_html(cli.input.as_ref())?;
    tracing::debug!(bytes = html.len(), "read input");

    let output = match cli.command {
        Command::Canonical { base_url } => Output::Url {
            url: canonical_url_from_bytes(&html, base_url.as_deref()),
        },
        Command::Refresh { base_url } => Output::Url {
            url: meta_refresh_url_from_bytes(&html, base_url.as_deref()),
        },
        Command::Strip { include_title } => Output::Text {
            text: strip_html_bytes(&html, &StripOptions { include_title }),
        },
    };

    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}
