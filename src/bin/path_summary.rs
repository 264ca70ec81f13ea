//! Diagnostic binary for the education path pipeline
//!
//! Loads the alumni and schools datasets, runs one extraction with optional
//! filter labels and prints the statistics summary. A missing or malformed
//! dataset file is fatal; nothing is served from partial data.

use anyhow::Context;
use std::path::PathBuf;

use edu_paths::algorithm::SequenceStatistics;
use edu_paths::{PathFilter, TaxonomyConfig, extract_paths, load_dataset};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let alumni_path = PathBuf::from(
        args.next()
            .context("usage: path_summary <alumni.json> <schools.json> [field] [degree] [institution]")?,
    );
    let schools_path = PathBuf::from(args.next().context("missing schools dataset path")?);

    let field = args.next().unwrap_or_else(|| "All".to_string());
    let degree = args.next().unwrap_or_else(|| "All".to_string());
    let institution = args.next().unwrap_or_else(|| "All".to_string());

    let dataset = load_dataset(&alumni_path, &schools_path)
        .with_context(|| format!("failed to load datasets from {}", alumni_path.display()))?;

    let config = TaxonomyConfig::default();
    let filter = PathFilter::from_labels(&field, &degree, &institution);

    let sequences = extract_paths(&dataset, &config, &filter);
    println!(
        "Extracted {} sequences from {} alumni",
        sequences.len(),
        dataset.alumni_count()
    );

    let stats = SequenceStatistics::calculate(&sequences);
    println!("{}", SequenceStatistics::generate_summary(&stats));

    Ok(())
}
