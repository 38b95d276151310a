//! Clean command - remove cached samples of a dataset

use anyhow::Result;
use graph_sampler::cache::{clear_samples, dataset_dir};
use graph_sampler::SamplerConfig;

pub fn run(config: &SamplerConfig, dataset: &str, dry_run: bool) -> Result<()> {
    let dir = dataset_dir(&config.storage_path, dataset);
    let found = clear_samples(&dir, dry_run)?;

    if found.is_empty() {
        println!("No cached samples found in {}.", dir.display());
        return Ok(());
    }

    println!(
        "Found {} cached sample file{}:",
        found.len(),
        if found.len() == 1 { "" } else { "s" }
    );
    for path in &found {
        println!("  {}", path.display());
    }

    if dry_run {
        println!("\nDry run - nothing removed. Run without --dry-run to delete.");
    } else {
        println!(
            "\nRemoved {} file{}.",
            found.len(),
            if found.len() == 1 { "" } else { "s" }
        );
    }

    Ok(())
}
