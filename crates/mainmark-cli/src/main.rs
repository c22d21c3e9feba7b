//! mainmark: fetch a web page and save its main content as Markdown

mod fetch;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "mainmark")]
#[command(about = "Fetch a web page and save its main content as Markdown")]
#[command(version)]
#[command(after_help = "Examples:
  mainmark https://example.com/notes                 # Save to release_notes.md
  mainmark https://example.com/notes -o notes.md     # Save to a specific file
  RUST_LOG=mainmark=debug mainmark https://example.com/notes")]
struct Cli {
    /// Page URL to fetch (http or https)
    url: String,

    /// Path to save the generated Markdown file
    #[arg(short, long, env = "MAINMARK_OUTPUT", default_value = "release_notes.md")]
    output: PathBuf,

    /// Request timeout in seconds
    #[arg(long, env = "MAINMARK_TIMEOUT", default_value_t = 30)]
    timeout: u64,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let url = fetch::parse_page_url(&cli.url)?;
    let markdown = fetch::scrape(&url, Duration::from_secs(cli.timeout))?;
    write_markdown(&cli.output, &markdown)?;

    println!("Saved Markdown to {}", cli.output.display());
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "info,mainmark=debug,mainmark_cli=debug"
    } else {
        "warn,mainmark=info,mainmark_cli=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn write_markdown(path: &Path, markdown: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, markdown).with_context(|| format!("Failed to write: {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = markdown.len(), "wrote markdown");
    Ok(())
}
