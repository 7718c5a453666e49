//! Render command implementation.
//!
//! The render command:
//! 1. Loads the detection report
//! 2. Rebuilds the control-flow graph
//! 3. Builds the three chart documents
//! 4. Writes them under the output directory

use crate::chart::{build_heatmap, cfg_to_chart, confidence_chart};
use crate::chart::schema::{GraphDoc, HeatmapDoc};
use crate::output::write_json;
use crate::report::schema::DetectionReport;
use crate::report::{load_report, to_cfg};
use crate::utils::config::DEFAULT_BIN_COUNT;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Output file names within the chart directory
pub const GRAPH_FILE: &str = "cfg.json";
pub const CONFIDENCE_FILE: &str = "confidence.json";
pub const HEATMAP_FILE: &str = "heatmap.json";

/// Arguments for the render command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct RenderArgs {
    /// Path to the detection report JSON
    pub input: PathBuf,

    /// Directory the chart documents are written to
    pub output_dir: PathBuf,

    /// Number of heatmap bins
    pub bins: usize,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("report.json"),
            output_dir: PathBuf::from("charts"),
            bins: DEFAULT_BIN_COUNT,
            print_summary: false,
        }
    }
}

/// Validate render arguments before doing any work
///
/// **Public** - called by main.rs before execute_render
pub fn validate_args(args: &RenderArgs) -> Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input report does not exist: {}", args.input.display());
    }

    if args.bins == 0 {
        anyhow::bail!("Bin count must be positive");
    }

    Ok(())
}

/// Execute the render command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Report parsing and validation errors
/// * Chart building errors (bad binary size, negative addresses)
/// * File write errors
pub fn execute_render(args: RenderArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Rendering charts from report: {}", args.input.display());

    // Step 1: Load the detection report
    info!("Step 1/4: Loading detection report...");
    let report = load_report(&args.input).context("Failed to load detection report")?;

    debug!(
        "Report for {}: {} blocks, {} frameworks, {} operation types",
        report.binary,
        report.cfg.nodes.len(),
        report.scores.len(),
        report.tensor_ops.len()
    );

    // Step 2: Rebuild the CFG
    info!("Step 2/4: Rebuilding control-flow graph...");
    let cfg = to_cfg(&report.cfg).context("Failed to rebuild control-flow graph")?;

    // Step 3: Build chart documents
    info!("Step 3/4: Building chart documents...");
    let graph_doc = cfg_to_chart(&cfg);
    let confidence_doc = confidence_chart(&report.scores);
    let heatmap_doc = build_heatmap(&report.tensor_ops, report.binary_size, args.bins)
        .context("Failed to build heatmap")?;

    // Step 4: Write output files
    info!("Step 4/4: Writing chart documents...");
    write_json(&graph_doc, args.output_dir.join(GRAPH_FILE))
        .context("Failed to write graph document")?;
    write_json(&confidence_doc, args.output_dir.join(CONFIDENCE_FILE))
        .context("Failed to write confidence document")?;
    write_json(&heatmap_doc, args.output_dir.join(HEATMAP_FILE))
        .context("Failed to write heatmap document")?;

    let elapsed = start_time.elapsed();
    info!("Render complete in {:.2}s", elapsed.as_secs_f64());

    if args.print_summary {
        print_summary(&report, &graph_doc, &heatmap_doc);
    }

    Ok(())
}

/// Print a text summary of the rendered documents
///
/// **Private** - internal helper for --summary
fn print_summary(report: &DetectionReport, graph: &GraphDoc, heatmap: &HeatmapDoc) {
    println!();
    println!("=== Render Summary ===");
    println!("Binary: {} ({} bytes)", report.binary, report.binary_size);
    println!("Blocks: {}", graph.nodes.len());
    println!("Edges: {}", graph.links.len());
    println!("Frameworks scored: {}", report.scores.len());

    if let Some(top) = report
        .scores
        .iter()
        .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
    {
        println!(
            "Top framework: {} ({:.1}%)",
            top.framework,
            top.confidence * 100.0
        );
    }

    println!(
        "Heatmap: {} operation types over {} bins of {:.1} bytes",
        heatmap.data.len(),
        heatmap.config.total_bins,
        heatmap.config.bin_size
    );
}
