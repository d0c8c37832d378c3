//! Clinic data seeder
//!
//! Writes a deterministic `{ "clinics": [...] }` document for the Clinic API.

mod generator;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use clinic_api::domain::entities::ClinicDocument;
use tracing_subscriber::EnvFilter;

/// Generate the clinic data document
#[derive(Debug, Parser)]
#[command(name = "clinic-seed", version)]
struct Args {
    /// Number of clinics to generate
    #[arg(short, long, default_value_t = 50)]
    count: usize,

    /// Output file
    #[arg(short, long, default_value = "data/clinics.json")]
    output: PathBuf,

    /// RNG seed; the same seed always yields the same document
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();
    tracing::debug!("Seed args: {:?}", args);

    let document = ClinicDocument {
        clinics: generator::generate_clinics(args.count, args.seed),
    };

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(&document).context("Failed to serialize clinics")?;
    fs::write(&args.output, json)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    tracing::info!(
        count = document.clinics.len(),
        output = %args.output.display(),
        "Generated clinic data"
    );

    Ok(())
}
