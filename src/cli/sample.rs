//! Sample command - run the sampling pipeline and print the result

use anyhow::{Context, Result};
use console::style;
use graph_sampler::{SampleData, SampleRequest, SampleSource, SamplerConfig, SamplingRun};
use indexmap::IndexMap;
use std::path::Path;

pub fn run(
    config: &SamplerConfig,
    dataset: &str,
    base: &str,
    n: usize,
    m: usize,
    format: &str,
    output: Option<&Path>,
) -> Result<()> {
    let request = SampleRequest::new(base, n, m, dataset);
    let run = SamplingRun::run(config, request)?;

    let rendered = match format {
        "text" => render_text(&run),
        _ => serde_json::to_string_pretty(&run.data())?,
    };

    match output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", rendered))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote sample to {}", style(path.display()).cyan());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

fn render_text(run: &SamplingRun) -> String {
    let data: SampleData = run.data();
    let request = run.request();
    let mut out = String::new();

    let origin = match run.source() {
        SampleSource::Cache => style("cached").yellow(),
        SampleSource::Computed => style("computed").green(),
    };
    out.push_str(&format!(
        "\n{} Sample {} of dataset '{}' ({})\n\n",
        style("📊").bold(),
        style(request.cache_key()).cyan(),
        request.dataset_id,
        origin
    ));

    if let Some(candidates) = run.candidate_count() {
        out.push_str(&format!(
            "  Seeds:      {} (from {} candidates)\n",
            run.seeds().len(),
            candidates
        ));
    }
    out.push_str(&format!("  Nodes:      {}\n", data.node_count));
    out.push_str(&format!("  Edges:      {}\n", data.edge_count));

    let mut by_type: IndexMap<&str, usize> = IndexMap::new();
    for node in &data.sampled_node_data {
        *by_type.entry(node.node_type.as_str()).or_default() += 1;
    }
    if !by_type.is_empty() {
        out.push_str("\n  Node types:\n");
        for (node_type, count) in &by_type {
            out.push_str(&format!("    {:<20} {}\n", style(node_type).cyan(), count));
        }
    }

    out
}
