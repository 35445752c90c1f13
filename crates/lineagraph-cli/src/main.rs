use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use lineagraph_core::{
    Direction, Edge, EngineConfig, ExportFormat, LayoutAlgorithm, LineageRequest, Node,
};
use lineagraph_export::{to_dot, to_json_string, to_svg};
use lineagraph_graph::{strip_columns, BuildOptions, GraphBuild, GraphModel, ImpactAnalyzer};
use lineagraph_layout::LayoutResult;

/// Lineagraph - lineage graph layout, impact analysis, and export
#[derive(Parser)]
#[command(name = "lineagraph")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to config file (default: lineagraph.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a positioned graph from a lineage facts file
    Layout {
        /// Path to the facts JSON file ({"nodes": [...], "edges": [...]})
        facts: PathBuf,

        /// Layout algorithm (hierarchical, force, circular, tree)
        #[arg(short, long, default_value = "hierarchical")]
        algorithm: String,

        /// Seed for the force layout's jitter (unseeded runs are not reproducible)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Fail on dangling edge references instead of dropping them
        #[arg(long)]
        strict: bool,

        /// Keep COLUMN nodes in the graph
        #[arg(long)]
        include_columns: bool,

        /// Write the response JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show what is affected if a node changes
    Impact {
        /// Path to the facts JSON file
        facts: PathBuf,

        /// Node id to analyze
        node: String,

        /// Traversal direction (upstream, downstream, both)
        #[arg(short, long, default_value = "downstream")]
        direction: Direction,

        /// Traversal depth bound (1..=10)
        #[arg(long, default_value_t = 3)]
        depth: u32,

        /// Keep COLUMN nodes in the graph
        #[arg(long)]
        include_columns: bool,

        /// Write the result as JSON here instead of printing a table
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the graph as a portable artifact
    Export {
        /// Path to the facts JSON file
        facts: PathBuf,

        /// Export format (json, dot, svg)
        #[arg(short, long)]
        format: String,

        /// Layout algorithm for formats that need positions
        #[arg(short, long, default_value = "hierarchical")]
        algorithm: String,

        /// Seed for the force layout's jitter
        #[arg(short, long)]
        seed: Option<u64>,

        /// Keep COLUMN nodes in the graph
        #[arg(long)]
        include_columns: bool,

        /// Output path (default: lineage.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a lineage facts file
    Validate {
        /// Path to the facts JSON file
        facts: PathBuf,

        /// Fail on dangling edge references instead of dropping them
        #[arg(long)]
        strict: bool,
    },
}

/// Raw lineage facts as supplied by the catalog collaborator
#[derive(Debug, Deserialize)]
struct FactsFile {
    nodes: Vec<Node>,
    #[serde(default)]
    edges: Vec<Edge>,
}

/// UI-facing graph query response
#[derive(Serialize)]
struct GraphResponse<'a> {
    graph: GraphPayload<'a>,
    layout: &'a LayoutResult,
    warnings: &'a [String],
}

#[derive(Serialize)]
struct GraphPayload<'a> {
    nodes: &'a [Node],
    edges: &'a [Edge],
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config if specified
    let config = if let Some(config_path) = &cli.config {
        EngineConfig::from_file(config_path)?
    } else if Path::new("lineagraph.toml").exists() {
        EngineConfig::from_file(Path::new("lineagraph.toml"))?
    } else {
        if cli.verbose {
            eprintln!("{}", "No config file found, using defaults".yellow());
        }
        EngineConfig::default()
    };

    match cli.command {
        Commands::Layout {
            facts,
            algorithm,
            seed,
            strict,
            include_columns,
            output,
        } => layout_command(
            &config,
            &facts,
            &algorithm,
            seed,
            strict,
            include_columns,
            output.as_deref(),
            cli.verbose,
        ),
        Commands::Impact {
            facts,
            node,
            direction,
            depth,
            include_columns,
            output,
        } => impact_command(
            &config,
            &facts,
            &node,
            direction,
            depth,
            include_columns,
            output.as_deref(),
            cli.verbose,
        ),
        Commands::Export {
            facts,
            format,
            algorithm,
            seed,
            include_columns,
            output,
        } => export_command(
            &config,
            &facts,
            &format,
            &algorithm,
            seed,
            include_columns,
            output.as_deref(),
            cli.verbose,
        ),
        Commands::Validate { facts, strict } => validate_command(&facts, strict, cli.verbose),
    }
}

/// Load facts and build the graph
fn load_graph(
    facts_path: &Path,
    strict: bool,
    include_columns: bool,
    verbose: bool,
) -> Result<GraphBuild> {
    if verbose {
        eprintln!("{} {}", "Loading facts from:".cyan(), facts_path.display());
    }

    let content = std::fs::read_to_string(facts_path)
        .map_err(|e| anyhow::anyhow!("Failed to read facts file: {}", e))?;
    let facts: FactsFile = serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse facts file: {}", e))?;

    let (nodes, edges) = if include_columns {
        (facts.nodes, facts.edges)
    } else {
        strip_columns(facts.nodes, facts.edges)
    };

    if verbose {
        eprintln!(
            "{} {} nodes, {} edges",
            "Building graph:".cyan(),
            nodes.len(),
            edges.len()
        );
    }

    let build = GraphModel::build(nodes, edges, BuildOptions { strict })?;

    if verbose && !build.warnings.is_empty() {
        eprintln!(
            "{} dropped {} dangling edge(s): {}",
            "Warning:".yellow(),
            build.warnings.len(),
            build.warnings.join(", ")
        );
    }

    Ok(build)
}

/// Layout command - positioned graph query response
#[allow(clippy::too_many_arguments)]
fn layout_command(
    config: &EngineConfig,
    facts_path: &Path,
    algorithm: &str,
    seed: Option<u64>,
    strict: bool,
    include_columns: bool,
    output: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let algorithm: LayoutAlgorithm = algorithm.parse()?;
    let build = load_graph(facts_path, strict, include_columns, verbose)?;

    if verbose {
        eprintln!("{} {}", "Computing layout:".cyan(), algorithm);
    }

    let layout = lineagraph_layout::layout(&build.graph, algorithm, seed, config);
    let response = GraphResponse {
        graph: GraphPayload {
            nodes: build.graph.nodes(),
            edges: build.graph.edges(),
        },
        layout: &layout,
        warnings: &build.warnings,
    };
    let json = serde_json::to_string_pretty(&response)?;

    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            eprintln!("{} {}", "Wrote".green(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Impact command - bounded reachability from a node
#[allow(clippy::too_many_arguments)]
fn impact_command(
    config: &EngineConfig,
    facts_path: &Path,
    node: &str,
    direction: Direction,
    depth: u32,
    include_columns: bool,
    output: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let request = LineageRequest {
        direction,
        depth,
        layout_algorithm: LayoutAlgorithm::default(),
        include_columns,
    };
    request.validate()?;

    let build = load_graph(facts_path, false, include_columns, verbose)?;
    let result = ImpactAnalyzer::analyze_with_ceiling(
        &build.graph,
        node,
        direction,
        depth,
        config.max_depth_ceiling,
    )?;

    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&result)?)?;
        eprintln!("{} {}", "Wrote".green(), path.display());
        return Ok(());
    }

    println!("\n{}", "=".repeat(60).bright_blue());
    println!("{}", "Impact Analysis".bold().bright_blue());
    println!("{}", "=".repeat(60).bright_blue());
    println!();
    println!("{} {}", "Node:".bold(), node.green());
    println!("{} {} (depth {})", "Direction:".bold(), direction, depth);
    println!("{} {}", "Affected nodes:".bold(), result.len());
    println!();

    if result.is_empty() {
        println!("{}", "✓ Nothing within reach".green());
        println!("This node can be modified without affecting others at this depth.");
    } else {
        for (i, entry) in result.iter().enumerate() {
            let name = build
                .graph
                .node(&entry.node_id)
                .map(|n| format!("{} ({})", entry.node_id, n.node_type))
                .unwrap_or_else(|| entry.node_id.clone());
            println!(
                "  {}. {} [distance {}, {}]",
                i + 1,
                name.yellow(),
                entry.distance,
                entry.direction
            );
        }
    }

    println!();
    println!("{}", "=".repeat(60).bright_blue());

    Ok(())
}

/// Export command - portable artifact (json, dot, svg)
#[allow(clippy::too_many_arguments)]
fn export_command(
    config: &EngineConfig,
    facts_path: &Path,
    format: &str,
    algorithm: &str,
    seed: Option<u64>,
    include_columns: bool,
    output: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let format: ExportFormat = format.parse()?;
    let algorithm: LayoutAlgorithm = algorithm.parse()?;
    let build = load_graph(facts_path, false, include_columns, verbose)?;

    let text = match format {
        ExportFormat::Dot => to_dot(&build.graph),
        ExportFormat::Json => {
            let layout = lineagraph_layout::layout(&build.graph, algorithm, seed, config);
            to_json_string(&build.graph, &layout)
        }
        ExportFormat::Svg => {
            let layout = lineagraph_layout::layout(&build.graph, algorithm, seed, config);
            to_svg(&build.graph, &layout, config)
        }
    };

    let default_path = PathBuf::from(format.file_name());
    let path = output.unwrap_or(&default_path);
    std::fs::write(path, text)?;
    eprintln!("{} {}", "Wrote".green(), path.display());

    Ok(())
}

/// Validate command - build report for a facts file
fn validate_command(facts_path: &Path, strict: bool, verbose: bool) -> Result<()> {
    let build = load_graph(facts_path, strict, true, verbose)?;

    println!(
        "{} {} nodes, {} edges",
        "Valid:".green().bold(),
        build.graph.node_count(),
        build.graph.edge_count()
    );

    if build.warnings.is_empty() {
        println!("{}", "✓ No dangling edges".green());
    } else {
        println!(
            "{} {} dangling edge(s) dropped:",
            "⚠".yellow(),
            build.warnings.len()
        );
        for edge_id in &build.warnings {
            println!("  - {}", edge_id.yellow());
        }
    }

    Ok(())
}
