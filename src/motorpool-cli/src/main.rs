//! Command-line converter from vehicle component tables to JSON
//!
//! Usage:
//!   motorpool <pattern> <output.json>        - Convert matching files
//!   motorpool --verbose <pattern> <output>   - Also print parse events
//!
//! The compact document lands at the output path; a pretty-printed copy is
//! written next to it with a `.debug` suffix for manual inspection.

use anyhow::{bail, Context, Result};
use clap::Parser;
use motorpool::{aggregate, find_inputs, parse_document, read_sources, CombinedResult};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "motorpool")]
#[command(about = "Convert vehicle component tables to JSON", long_about = None)]
struct Cli {
    /// Input file or glob pattern (e.g. "data/*.lua")
    pattern: String,

    /// Output JSON path
    output: PathBuf,

    /// Print every parse diagnostic instead of just the totals
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let inputs = find_inputs(&cli.pattern)?;
    let read = read_sources(&inputs);
    for skipped in &read.skipped {
        eprintln!("Skipping {}: {}", skipped.path.display(), skipped.error);
    }
    if read.sources.is_empty() {
        bail!("no readable input files for pattern '{}'", cli.pattern);
    }

    let mut documents = Vec::new();
    let mut sources = Vec::new();
    for source in read.sources {
        let parse = parse_document(&source.text);
        if cli.verbose {
            for diagnostic in &parse.diagnostics {
                println!("{}: {}", source.name, diagnostic);
            }
        }
        documents.push(parse.document);
        sources.push(source.name);
    }

    let result = aggregate(documents, sources);
    write_outputs(&result, &cli.output)?;

    println!(
        "Wrote {} components to {}",
        result.count.total,
        cli.output.display()
    );
    println!("  guns:    {}", result.count.guns);
    println!("  turrets: {}", result.count.turrets);
    println!("  hulls:   {}", result.count.hulls);

    Ok(())
}

/// Writes the compact document plus the pretty-printed debug copy.
fn write_outputs(result: &CombinedResult, output: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let compact = serde_json::to_string(result).context("Failed to encode result")?;
    fs::write(output, compact)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    let debug = debug_path(output);
    let pretty =
        serde_json::to_string_pretty(result).context("Failed to encode debug result")?;
    fs::write(&debug, pretty)
        .with_context(|| format!("Failed to write {}", debug.display()))?;

    Ok(())
}

/// Derives the debug output path: `guns.json` -> `guns.debug.json`.
fn debug_path(output: &Path) -> PathBuf {
    match output.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => output.with_extension(format!("debug.{}", ext)),
        None => output.with_extension("debug"),
    }
}
