use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use degtable::filter::FilterKind;
use degtable::geneset::{GeneSetCache, GeneSetConfig, GeneSetSource};
use degtable::report::json::write_json;
use degtable::report::text::render_summary_text;
use degtable::report::RunSummary;
use degtable::session::Session;

#[derive(Debug, Parser)]
#[command(name = "degtable", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load a table, apply filters, and write the requested derived views.
    Run(RunArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Input expression table (CSV/TSV, optionally gzipped).
    #[arg(long)]
    input: PathBuf,

    /// Output directory for reports.
    #[arg(long)]
    out: PathBuf,

    /// Keep only rows with padj < 0.05.
    #[arg(long)]
    filter_significant: bool,

    /// Drop pseudogene-like entries.
    #[arg(long)]
    filter_pseudo: bool,

    /// Keep only selected rows.
    #[arg(long)]
    filter_selected: bool,

    /// Configure a gene set as KEY=PATH (repeatable).
    #[arg(long = "gene-set", value_name = "KEY=PATH", value_parser = parse_gene_set_spec)]
    gene_sets: Vec<(String, String)>,

    /// Enable the membership filter for a configured gene set (repeatable).
    #[arg(long = "filter-gene-set", value_name = "KEY")]
    filter_gene_sets: Vec<String>,

    /// Select a row by key before filtering (repeatable).
    #[arg(long = "select", value_name = "KEY")]
    select: Vec<String>,

    /// Bulk-select every row visible under the enabled filters.
    #[arg(long)]
    select_all_visible: bool,

    /// Write volcano.json from the visible rows.
    #[arg(long)]
    volcano: bool,

    /// Write heatmap.json from the selected rows.
    #[arg(long)]
    heatmap: bool,

    /// Write boxplot.json for one gene symbol.
    #[arg(long, value_name = "GENE")]
    box_plot: Option<String>,
}

fn parse_gene_set_spec(spec: &str) -> Result<(String, String), String> {
    match spec.split_once('=') {
        Some((key, path)) if !key.is_empty() && !path.is_empty() => {
            Ok((key.to_string(), path.to_string()))
        }
        _ => Err(format!("expected KEY=PATH, got {spec:?}")),
    }
}

struct FileSource;

impl GeneSetSource for FileSource {
    fn fetch(&self, locator: &str) -> Result<String, String> {
        degtable::input::read_text(Path::new(locator)).map_err(|e| e.to_string())
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Run(args) => run(&args),
    };
    if let Err(err) = result {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &RunArgs) -> Result<(), String> {
    let configs = args
        .gene_sets
        .iter()
        .map(|(key, path)| GeneSetConfig::new(key.clone(), path.clone()))
        .collect::<Vec<_>>();
    let cache = Arc::new(GeneSetCache::new(configs, Box::new(FileSource)));

    let text = degtable::input::read_text(&args.input).map_err(|e| e.to_string())?;
    let mut session = Session::load(&text, cache).map_err(|e| e.to_string())?;

    for key in &args.select {
        session.toggle_selection(key, true);
    }

    if args.filter_significant {
        session.toggle_filter(FilterKind::Significance);
    }
    if args.filter_pseudo {
        session.toggle_filter(FilterKind::Pseudogene);
    }
    for key in &args.filter_gene_sets {
        session.toggle_gene_set_filter(key).map_err(|e| e.to_string())?;
    }
    if args.select_all_visible {
        session.select_all_visible();
    }
    if args.filter_selected {
        session.toggle_filter(FilterKind::Selection);
    }

    std::fs::create_dir_all(&args.out).map_err(|e| e.to_string())?;

    if args.volcano {
        let series = session.volcano().map_err(|e| e.to_string())?;
        let path = args.out.join("volcano.json");
        write_json(&path, &series).map_err(|e| e.to_string())?;
        info!(
            significant = series.significant.len(),
            background = series.background.len(),
            "wrote {}",
            path.display()
        );
    }

    if args.heatmap {
        let matrix = session.heatmap().map_err(|e| e.to_string())?;
        let path = args.out.join("heatmap.json");
        write_json(&path, &matrix).map_err(|e| e.to_string())?;
        info!(
            rows = matrix.row_labels.len(),
            columns = matrix.column_labels.len(),
            "wrote {}",
            path.display()
        );
    }

    if let Some(gene) = &args.box_plot {
        let values = session.box_plot(gene).map_err(|e| e.to_string())?;
        let path = args.out.join("boxplot.json");
        write_json(&path, &values).map_err(|e| e.to_string())?;
        info!(
            wt = values.wt_values.len(),
            ko = values.ko_values.len(),
            "wrote {}",
            path.display()
        );
    }

    let summary = RunSummary::from_session(&session, &args.input.display().to_string());
    let summary_path = args.out.join("summary.txt");
    std::fs::write(&summary_path, render_summary_text(&summary)).map_err(|e| e.to_string())?;
    info!("wrote {}", summary_path.display());

    Ok(())
}
