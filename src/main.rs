use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::Context;
use autolinker::{
    HarvestOptions,
    KnownReferences,
    MAX_TOTAL_LENGTH,
    TextRun,
    harvest_references_opts,
    markup_autolinks,
};
use clap::Parser;
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Autolink issue references, users and URLs in text")]
struct Cli {
    /// Project that unqualified issue references belong to
    #[arg(long, default_value = "chromium")]
    project: String,
    /// JSON file listing the issues and users that exist
    #[arg(long)]
    refs: Option<PathBuf>,
    /// Skip autolinking when the input exceeds this many bytes
    #[arg(long = "max-length", default_value_t = MAX_TOTAL_LENGTH)]
    max_length: usize,
    /// Text files to mark up, one block per file
    files: Vec<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_blocks(files: &[PathBuf]) -> anyhow::Result<Vec<String>> {
    if files.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read standard input")?;
        return Ok(vec![input]);
    }
    files
        .iter()
        .map(|path| {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        })
        .collect()
}

fn load_known(path: Option<&Path>) -> anyhow::Result<KnownReferences> {
    let Some(path) = path else {
        return Ok(KnownReferences::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read references file {}", path.display()))?;
    KnownReferences::from_json(&json).with_context(|| format!("in {}", path.display()))
}

/// Entry point for the command-line autolinker.
///
/// Reads one block per file (or a single block from standard input),
/// harvests references across all blocks against the known references in
/// `--refs`, then prints each block's runs as one JSON array per line.
///
/// # Examples
///
/// ```sh
/// # Link references in a comment
/// echo "see bug 123 and go/link" | autolinker --refs known.json
///
/// # Several comments from the monorail project
/// autolinker --project monorail comment1.txt comment2.txt
/// ```
fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let blocks = read_blocks(&cli.files)?;
    let known = load_known(cli.refs.as_deref())?;
    let options = HarvestOptions {
        max_total_length: cli.max_length,
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .context("failed to start async runtime")?;
    let refs = runtime.block_on(harvest_references_opts(
        &blocks,
        &cli.project,
        &known,
        options,
    ))?;

    let marked: Vec<Vec<TextRun>> = blocks
        .par_iter()
        .map(|block| markup_autolinks(block, &refs, &cli.project))
        .collect();
    for runs in &marked {
        println!("{}", serde_json::to_string(runs)?);
    }
    Ok(())
}
