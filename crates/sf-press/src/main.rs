//! sf-press — Batch ticket artifact writer
//!
//! Runs a campaign through the ticket engine, then writes one JSON artifact
//! per winning ticket plus the registry summary, keyed by ticket id. The
//! record list is complete and immutable before any file is written, so
//! per-ticket work fans out freely.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;

use sf_core::WinningRecord;
use sf_ticket_lab::{CampaignConfig, TicketEngine};

#[derive(Parser)]
#[command(name = "sf-press", about = "ScratchForge ticket press")]
struct Cli {
    /// Campaign config JSON (defaults to the built-in Genesis Series)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output directory for ticket artifacts
    #[arg(short, long, default_value = "tickets")]
    out: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    log::info!("pressing campaign '{}'", config.name);

    let mut engine = TicketEngine::with_config(config);
    if let Some(seed) = cli.seed {
        engine.seed(seed);
    }

    let result = engine.run().context("Campaign run failed")?;

    for tier in &result.allocations.tiers {
        if tier.is_short() {
            log::warn!(
                "tier {}: only {}/{} winners drawn",
                tier.face_value,
                tier.awarded(),
                tier.requested
            );
        }
    }

    fs::create_dir_all(&cli.out)
        .with_context(|| format!("Failed to create {}", cli.out.display()))?;

    result
        .records
        .par_iter()
        .try_for_each(|record| write_ticket(&cli.out, record))?;

    let summary = result.summary();
    let summary_path = cli.out.join("summary.json");
    fs::write(&summary_path, serde_json::to_string_pretty(&summary)?)
        .with_context(|| format!("Failed to write {}", summary_path.display()))?;

    println!(
        "🎟  {} tickets written to {}",
        result.records.len(),
        cli.out.display()
    );
    Ok(())
}

fn load_config(cli: &Cli) -> Result<CampaignConfig> {
    match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Invalid campaign config in {}", path.display()))
        }
        None => Ok(CampaignConfig::default()),
    }
}

fn write_ticket(out: &Path, record: &WinningRecord) -> Result<()> {
    let path = out.join(format!("{}.json", record.ticket_id));
    let json = serde_json::to_string_pretty(record)?;
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))
}
