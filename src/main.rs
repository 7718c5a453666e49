//! Tensorscope CLI
//!
//! Renders JSON chart documents (CFG graph, confidence bar chart,
//! tensor-operation heatmap) from AI-binary detection reports.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tensorscope::commands::{execute_render, validate_args, RenderArgs};
use tensorscope::utils::config::DEFAULT_BIN_COUNT;
use tensorscope::utils::logging::init_logging;

/// Tensorscope - chart generation for AI-binary detection reports
#[derive(Parser, Debug)]
#[command(name = "tensorscope")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Mirror log output to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Render chart documents from a detection report
    Render {
        /// Path to the detection report JSON
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for chart documents
        #[arg(short, long, default_value = "charts")]
        output: PathBuf,

        /// Number of heatmap bins
        #[arg(long, default_value_t = DEFAULT_BIN_COUNT)]
        bins: usize,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a detection report JSON file
    Validate {
        /// Path to detection report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display document schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    // Execute command
    match cli.command {
        Commands::Render {
            input,
            output,
            bins,
            summary,
        } => {
            let args = RenderArgs {
                input,
                output_dir: output,
                bins,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            // Execute render
            execute_render(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Validate a detection report JSON file
///
/// **Private** - internal command implementation
fn validate_report_file(file_path: PathBuf) -> Result<()> {
    use tensorscope::chart::{build_heatmap, cfg_to_chart, confidence_chart};
    use tensorscope::report::{load_report, to_cfg};

    println!("Validating report: {}", file_path.display());

    let report = load_report(&file_path)?;
    let cfg = to_cfg(&report.cfg)?;

    // Dry-run the chart builders so bad sizes and addresses surface here
    let graph = cfg_to_chart(&cfg);
    let confidence = confidence_chart(&report.scores);
    let heatmap = build_heatmap(&report.tensor_ops, report.binary_size, DEFAULT_BIN_COUNT)?;

    println!("✓ Valid detection report");
    println!("  Binary: {}", report.binary);
    println!("  Size: {} bytes", report.binary_size);
    println!("  Blocks: {}", graph.nodes.len());
    println!("  Edges: {}", graph.links.len());
    println!("  Frameworks: {}", confidence.data.len());
    println!("  Operation types: {}", heatmap.data.len());

    Ok(())
}

/// Display document schema information
///
/// **Private** - internal command implementation
fn display_schema(show_details: bool) {
    println!("Tensorscope Chart Document Schemas");
    println!();

    if show_details {
        println!("Graph document (cfg.json):");
        println!("  nodes: array             - Blocks with dense 0-based ids");
        println!("    id: number             - Index assigned in insertion order");
        println!("    address: string        - Block address (hex) or label");
        println!("    type: string           - Block type (default 'basic_block')");
        println!("    size: number           - Instruction count");
        println!("  links: array             - Control transfers by node index");
        println!("    source: number         - Source node id");
        println!("    target: number         - Target node id");
        println!("    type: string           - Edge type (default 'flow')");
        println!();
        println!("Confidence document (confidence.json):");
        println!("  type: 'bar'");
        println!("  data: array              - framework + confidence percentage");
        println!("  config: object           - xAxis, yAxis, yFormat");
        println!();
        println!("Heatmap document (heatmap.json):");
        println!("  type: 'heatmap'");
        println!("  data: array              - operation + per-bin counts");
        println!("  config: object           - xAxis, yAxis, binSize, totalBins");
    } else {
        println!("Documents: cfg.json, confidence.json, heatmap.json");
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("Tensorscope v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Chart generation for AI-framework detection in native binaries.");
}
