//! Parses saved competition, team and player pages in crawl order and prints
//! one JSON line per document.

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use capstat_config::Config;
use capstat_extract::{Page, Parser, TeamRegistry};
use clap::Parser as _;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file (TOML, YAML or JSON).
    #[arg(short, long, env = "CAPSTAT_CONFIG")]
    config: Option<PathBuf>,
    /// Documents as `URL=FILE`, in the order they were crawled. Team pages
    /// must come before the player pages they list.
    #[arg(required = true)]
    documents: Vec<Document>,
}

#[derive(Debug, Clone)]
struct Document {
    url: String,
    path: PathBuf,
}
impl FromStr for Document {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // URLs may contain `=` in their query string, files rarely do.
        let (url, path) = s.rsplit_once('=').ok_or_else(|| format!("expected URL=FILE, found: {s}"))?;
        Ok(Self {
            url: url.to_string(),
            path: PathBuf::from(path),
        })
    }
}

#[derive(Serialize)]
struct Output<'a> {
    url: &'a str,
    #[serde(flatten)]
    page: &'a Page,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err:?}");
            return ExitCode::FAILURE;
        },
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)))
        .with_writer(std::io::stderr)
        .init();

    let mut registry = TeamRegistry::new();
    let mut failures = 0usize;
    for document in &cli.documents {
        let html = match std::fs::read(&document.path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(err) => {
                tracing::warn!(path = %document.path.display(), %err, "unable to read document");
                failures += 1;
                continue;
            },
        };
        let parser = Parser::from_html(&html).with_vocabulary(config.vocabulary.clone());
        match parser.parse(&document.url, &mut registry) {
            Ok(page) => match serde_json::to_string(&Output { url: &document.url, page: &page }) {
                Ok(line) => println!("{line}"),
                Err(err) => {
                    tracing::warn!(url = %document.url, %err, "unable to serialize page");
                    failures += 1;
                },
            },
            Err(err) => {
                tracing::warn!(url = %document.url, error = ?err, "skipping document");
                failures += 1;
            },
        }
    }
    if !registry.is_empty() {
        tracing::info!(pending = registry.len(), "roster links without a parsed player page");
    }
    match failures {
        0 => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}
