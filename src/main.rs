use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{ArgAction, CommandFactory, Parser, Subcommand, ValueEnum};
use kata_harness::{
    MapOrder, Registry, Report, RunOptions, SweepOutcome, load_fixture, run_suite, sweep,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Exit status for errors that stop a run before any verdict exists.
const EXIT_FATAL: i32 = 2;

/// Fixture root used by `kata sweep` when none is given.
const DEFAULT_SWEEP_ROOT: &str = "tests/golden/fixtures";

#[derive(Debug, Parser)]
#[command(
    name = "kata",
    version,
    about = "Run exercise solutions against JSON fixtures",
    long_about = None,
    override_usage = "kata [OPTIONS] <FIXTURE> <SOLUTION>\n       kata [OPTIONS] <COMMAND>",
    after_help = "Examples:\n  kata tests/golden/fixtures/day-01/cases.json day-01/contains-duplicate\n  kata list\n  kata sweep tests/golden/fixtures"
)]
struct Cli {
    /// Optional explicit subcommand.
    #[command(subcommand)]
    command: Option<Commands>,

    /// Fixture file: a JSON array of {"input": {...}, "expected": ...} cases.
    #[arg(value_name = "FIXTURE", requires = "solution")]
    fixture: Option<PathBuf>,

    /// Registered solution identifier, e.g. day-01/contains-duplicate.
    #[arg(value_name = "SOLUTION")]
    solution: Option<String>,

    /// How object entries are compared.
    #[arg(long, value_enum, default_value_t = MapOrderArg::Sensitive, global = true)]
    map_order: MapOrderArg,

    /// Increase logging verbosity (-v: debug, -vv+: trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List registered solutions.
    List,
    /// Run every registered solution against its fixture directory.
    Sweep(SweepArgs),
}

#[derive(Debug, Parser)]
struct SweepArgs {
    /// Directory searched for <fixture>/cases.json files.
    #[arg(value_name = "ROOT", default_value = DEFAULT_SWEEP_ROOT)]
    root: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MapOrderArg {
    /// Objects match only with the same entries in the same order.
    Sensitive,
    /// Objects match with the same entries in any order.
    Insensitive,
}

impl From<MapOrderArg> for MapOrder {
    fn from(value: MapOrderArg) -> Self {
        match value {
            MapOrderArg::Sensitive => MapOrder::Sensitive,
            MapOrderArg::Insensitive => MapOrder::Insensitive,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(EXIT_FATAL);
        }
    }
}

fn init_tracing(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(verbose))),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn directive_for_verbosity(verbose: u8) -> &'static str {
    // Default stays at warn so the report lines are the only regular output.
    match verbose {
        0 => "warn",
        1 => "kata=debug,kata_harness=debug",
        _ => "kata=trace,kata_harness=trace",
    }
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let registry = kata_solutions::registry();
    let options = RunOptions {
        map_order: cli.map_order.into(),
    };

    match cli.command {
        Some(Commands::List) => {
            list_command(&registry)?;
            Ok(0)
        }
        Some(Commands::Sweep(args)) => sweep_command(&registry, &args.root, options),
        None => {
            let (Some(fixture), Some(solution)) = (cli.fixture, cli.solution) else {
                let mut command = Cli::command();
                command.print_help()?;
                println!();
                return Ok(0);
            };
            run_command(&registry, &fixture, &solution, options)
        }
    }
}

fn run_command(
    registry: &Registry,
    fixture: &Path,
    solution: &str,
    options: RunOptions,
) -> anyhow::Result<i32> {
    let suite = load_fixture(fixture)?;
    let handle = registry.resolve(solution)?;
    debug!(solution = handle.name, arity = handle.arity(), "resolved solution");
    let verdict = run_suite(handle, &suite, options)?;

    let report = Report::new(solution, &verdict);
    report.write_to(&mut std::io::stdout().lock(), &mut std::io::stderr().lock())?;
    debug!(exit_code = report.exit_code(), "run finished");
    Ok(report.exit_code())
}

fn list_command(registry: &Registry) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    for handle in registry.iter() {
        writeln!(
            out,
            "{}  fixture={}  params={}",
            handle.name,
            handle.fixture,
            handle.params.join(", ")
        )?;
    }
    Ok(())
}

fn sweep_command(registry: &Registry, root: &Path, options: RunOptions) -> anyhow::Result<i32> {
    if !root.is_dir() {
        anyhow::bail!("fixture root '{}' is not a directory", root.display());
    }

    let summary = sweep(registry, root, options)?;
    let mut out = std::io::stdout().lock();
    let mut err = std::io::stderr().lock();
    for entry in &summary.entries {
        match &entry.outcome {
            SweepOutcome::Ran(verdict) => {
                Report::new(entry.solution, verdict).write_to(&mut out, &mut err)?;
            }
            SweepOutcome::Skipped => writeln!(
                out,
                "- {} skipped: no fixture '{}'",
                entry.solution, entry.fixture
            )?,
        }
    }
    writeln!(
        out,
        "Processed {} solution(s), {} failed, {} skipped.",
        summary.entries.len(),
        summary.failed(),
        summary.skipped()
    )?;
    debug!(exit_code = summary.exit_code(), "sweep finished");
    Ok(summary.exit_code())
}
