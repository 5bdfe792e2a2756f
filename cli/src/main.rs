//! squares CLI
//!
//! Load a point set document, then print the squares it contains, their
//! count, or the de-duplicated points, as JSON on stdout.

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use squares_core::{load_point_set, FinderConfig, PointStore, SquareService};
use std::fs;
use std::path::PathBuf;

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "squares")]
#[command(about = "Find every square formed by a set of integer points")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every square as JSON.
    List(CommonArgs),

    /// Print the number of squares as JSON.
    Count(CommonArgs),

    /// Print the stored points after import, as JSON.
    Points(CommonArgs),
}

#[derive(Debug, Clone, Args)]
struct CommonArgs {
    /// Point set document: {"points": [{"x": 0, "y": 0}, ...]}
    input: PathBuf,

    /// Finder configuration file (JSON). Flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tolerance for equal sides and right angles.
    #[arg(long)]
    tolerance: Option<f64>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Serialize)]
struct CountOutput {
    count: usize,
}

fn build_config(args: &CommonArgs) -> CliResult<FinderConfig> {
    let mut config = match &args.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => FinderConfig::default(),
    };

    if let Some(tolerance) = args.tolerance {
        config.tolerance = tolerance;
    }

    config.validate()?;
    Ok(config)
}

fn load_service(args: &CommonArgs) -> CliResult<SquareService> {
    let config = build_config(args)?;
    let set = load_point_set(&args.input)?;

    let service = SquareService::new(PointStore::new(), config);
    service.import_points(set.coords());

    tracing::info!(
        input = %args.input.display(),
        given = set.len(),
        stored = service.points().len(),
        "points imported"
    );
    Ok(service)
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> CliResult<String> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(out)
}

fn run_list(args: &CommonArgs) -> CliResult<String> {
    let service = load_service(args)?;
    let search = service.search();

    tracing::info!(
        squares = search.squares.len(),
        candidates = search.stats.candidates,
        rejected = search.stats.rejected,
        "search finished"
    );
    to_json(&search.squares, args.pretty)
}

fn run_count(args: &CommonArgs) -> CliResult<String> {
    let service = load_service(args)?;
    to_json(
        &CountOutput {
            count: service.count_squares(),
        },
        args.pretty,
    )
}

fn run_points(args: &CommonArgs) -> CliResult<String> {
    let service = load_service(args)?;
    to_json(&service.points(), args.pretty)
}

fn run(command: &Commands) -> CliResult<String> {
    match command {
        Commands::List(args) => run_list(args),
        Commands::Count(args) => run_count(args),
        Commands::Points(args) => run_points(args),
    }
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    println!("{}", run(&cli.command)?);
    Ok(())
}
