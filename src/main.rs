//! trim-quote - CLI tool to price window trim and corner blocks.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use trim_quote::model::{find_preset, QuoteDocument};
use trim_quote::parser::save_document_file;
use trim_quote::{generate_report, parse_document_file, quote_document, Unit};

/// Price window trim, cornices and decorative corners, with cutting plans.
#[derive(Parser, Debug)]
#[command(name = "trim-quote")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input quote document (JSON)
    #[arg(short, long, required_unless_present = "preset")]
    input: Option<PathBuf>,

    /// Quote a single window from a built-in preset (classic, loft, plain)
    #[arg(short, long, conflicts_with = "input")]
    preset: Option<String>,

    /// Unit for kerf and overcut (cm or mm), overriding the document
    #[arg(long, value_parser = parse_unit)]
    units: Option<Unit>,

    /// Write the full quote as JSON to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Save the input document (normalized to the current schema) to this path
    #[arg(long)]
    save: Option<PathBuf>,

    /// Print the quote as JSON instead of a text report
    #[arg(long)]
    json: bool,

    /// Validate only, don't print the quote
    #[arg(long)]
    validate: bool,

    /// Fail when a cut cannot be taken from its stock bar
    #[arg(long)]
    strict: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut doc = load_document(&args)?;
    if let Some(units) = args.units {
        info!("Kerf and overcut read in {}", units);
        doc.units = units;
    }

    if let Some(path) = &args.save {
        save_document_file(&doc, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Saved document: {}", path.display());
    }

    let summary = quote_document(&doc);

    for warning in &summary.validation.warnings {
        warn!("{}", warning);
    }

    for err in &summary.validation.errors {
        error!("{}", err);
    }

    if args.strict && !summary.validation.passed {
        anyhow::bail!("Validation failed");
    }

    // Validate-only mode
    if args.validate {
        info!("Validation finished");
        return Ok(());
    }

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&summary)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Generated: {}", path.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", generate_report(&summary));
    }

    Ok(())
}

/// Read the input document, or build one from a preset.
fn load_document(args: &Args) -> Result<QuoteDocument> {
    if let Some(id) = &args.preset {
        let preset = find_preset(id).with_context(|| format!("Unknown preset '{}'", id))?;
        info!("Using preset: {}", preset.label);
        return Ok(QuoteDocument {
            windows: vec![preset.spec],
            ..Default::default()
        });
    }

    let input = args
        .input
        .as_ref()
        .context("An input document or a preset is required")?;

    info!("Processing: {}", input.display());

    let doc = parse_document_file(input)
        .with_context(|| format!("Failed to parse {}", input.display()))?;

    info!(
        "Parsed {} window(s), {} corner(s)",
        doc.windows.len(),
        doc.corners.len()
    );

    Ok(doc)
}

fn parse_unit(s: &str) -> std::result::Result<Unit, String> {
    Unit::from_short_str(s).ok_or_else(|| format!("unknown unit '{}', expected cm or mm", s))
}
