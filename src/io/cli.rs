//! Command-line interface for running the search engines over character maps

use std::path::PathBuf;
use std::rc::Rc;

use clap::{Args, Parser, Subcommand};
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

use crate::grid::char_map::CharMap;
use crate::grid::distance::{farthest, reached};
use crate::grid::reach::{FarthestReach, Reach};
use crate::grid::routes::RouteCount;
use crate::io::configuration::{
    DEFAULT_BATCH_SIZE, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_SEED, DEFAULT_WALL_DENSITY, END_MARKER,
    START_MARKER,
};
use crate::io::error::Result;
use crate::io::input::{FileLines, LineSource};
use crate::io::progress::SearchSpinner;
use crate::memo::callback::CallbackMemoSolver;
use crate::memo::stats::MemoStats;
use crate::memo::task::TaskMemoSolver;
use crate::search::breadth::breadth_first;
use crate::search::driver::PathSearch;
use crate::search::outcome::SearchOutcome;
use crate::search::parallel::ParallelBfs;

#[derive(Parser, Debug)]
#[command(name = "searchkit")]
#[command(
    author,
    version,
    about = "Best-first, breadth-first and memoized search over character maps"
)]
/// Command-line arguments for the search toolkit
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Command,

    /// Suppress the progress spinner and all but error logs
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log search summaries
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Cheapest path from the S marker to the E marker
    Path(PathArgs),
    /// Unit-step distances from the S marker to every reachable cell
    Fill(MapArgs),
    /// Reachable cell farthest from the S marker by breadth-first search
    Explore(ExploreArgs),
    /// Number of down/right routes from the S marker to the E marker
    Routes(RoutesArgs),
    /// Print a reproducible random map
    Generate(GenerateArgs),
}

/// Map file and movement rule
#[derive(Args, Debug)]
pub struct MapArgs {
    /// Text file with one map row per line
    #[arg(value_name = "MAP")]
    pub map: PathBuf,

    /// Allow diagonal moves
    #[arg(short, long)]
    pub diagonal: bool,

    /// Characters that block movement (default "#")
    #[arg(short, long)]
    pub blocking: Option<String>,
}

/// Arguments for `path`
#[derive(Args, Debug)]
pub struct PathArgs {
    #[command(flatten)]
    #[allow(missing_docs)]
    pub map: MapArgs,

    /// Report every goal state at the optimal cost
    #[arg(short, long)]
    pub all: bool,
}

/// Arguments for `explore`
#[derive(Args, Debug)]
pub struct ExploreArgs {
    #[command(flatten)]
    #[allow(missing_docs)]
    pub map: MapArgs,

    /// Worker threads (default: one per hardware thread)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// States a worker takes from the shared queue at once
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Run on the calling thread instead of a worker pool
    #[arg(short, long)]
    pub sequential: bool,
}

/// Arguments for `routes`
#[derive(Args, Debug)]
pub struct RoutesArgs {
    #[command(flatten)]
    #[allow(missing_docs)]
    pub map: MapArgs,

    /// Use the unit-of-work solver instead of the worklist solver
    #[arg(short, long)]
    pub task: bool,
}

/// Arguments for `generate`
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Map height
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Map width
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Fraction of cells that are walls
    #[arg(short, long, default_value_t = DEFAULT_WALL_DENSITY)]
    pub density: f64,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

impl Cli {
    /// Most verbose log level the flags ask for
    pub const fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else if self.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }

    /// Install a stderr log subscriber at [`Cli::log_level`]
    ///
    /// Returns `false` and keeps the existing subscriber if one was installed first.
    pub fn install_logging(&self) -> bool {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(self.log_level())
            .with_writer(std::io::stderr)
            .finish();
        match tracing::subscriber::set_global_default(subscriber) {
            Ok(()) => true,
            Err(error) => {
                warn!(%error, "keeping the previously installed log subscriber");
                false
            }
        }
    }

    /// Check if the progress spinner should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

impl MapArgs {
    /// Read the map file and apply the movement rule
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its rows differ in length
    pub fn load(&self) -> Result<CharMap> {
        let lines = FileLines::new(&self.map).lines()?;
        let blocking = self.blocking.as_deref().unwrap_or_default().as_bytes();
        Ok(CharMap::from_lines(&lines)?
            .with_blocking(blocking)
            .with_diagonals(self.diagonal))
    }
}

/// Runs one parsed command and collects its report
pub struct CommandRunner {
    cli: Cli,
}

impl CommandRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the command and return the lines to print
    ///
    /// # Errors
    ///
    /// Returns an error if the map cannot be loaded, a marker is missing or
    /// an engine rejects its parameters
    pub fn run(&self) -> Result<Vec<String>> {
        let spinner = SearchSpinner::for_command("searching", !self.cli.should_show_progress());
        let report = self.execute();
        let elapsed = spinner.finish();
        info!(?elapsed, "command finished");
        report
    }

    fn execute(&self) -> Result<Vec<String>> {
        match &self.cli.command {
            Command::Path(args) => shortest_path(&args.map.load()?, args.all),
            Command::Fill(args) => distance_report(&args.load()?),
            Command::Explore(args) => explore(&args.map.load()?, args),
            Command::Routes(args) => count_routes(args.map.load()?, args.task),
            Command::Generate(args) => {
                CharMap::random(args.rows, args.cols, args.density, args.seed)
                    .map(|map| map.to_lines())
            }
        }
    }
}

/// Report the cheapest S to E path cost, or every optimal goal state
///
/// # Errors
///
/// Returns an error if the map lacks an S or E marker
pub fn shortest_path(map: &CharMap, all: bool) -> Result<Vec<String>> {
    let start = map.locate(START_MARKER)?;
    let goal = map.locate(END_MARKER)?;
    let search = PathSearch::new(map, goal);

    let mut report = Vec::new();
    let stats = if all {
        let outcome = search.all_shortest(start);
        match outcome.solution.first() {
            Some(best) => {
                report.push(format!("cost: {}", best.cost));
                report.push(format!("optimal goal states: {}", outcome.solution.len()));
            }
            None => report.push("no path".to_string()),
        }
        outcome.stats
    } else {
        let outcome = search.shortest(start);
        match &outcome.solution {
            Some(best) => report.push(format!("cost: {}", best.cost)),
            None => report.push("no path".to_string()),
        }
        outcome.stats
    };
    report.push(format!("search: {stats}"));
    Ok(report)
}

/// Report how many cells are reachable from S and which is farthest
///
/// # Errors
///
/// Returns an error if the map lacks an S marker
pub fn distance_report(map: &CharMap) -> Result<Vec<String>> {
    let start = map.locate(START_MARKER)?;
    let distances = map.distances_from(start);

    let mut report = vec![format!("reachable cells: {}", reached(&distances))];
    if let Some(([row, col], steps)) = farthest(&distances) {
        report.push(format!("farthest: ({row}, {col}) at {steps} steps"));
    }
    if let Some(steps) = map
        .find(END_MARKER)
        .and_then(|end| map.index(end))
        .and_then(|index| distances.get(index).copied().flatten())
    {
        report.push(format!("steps to E: {steps}"));
    }
    Ok(report)
}

/// Find the reachable cell farthest from S by sequential or parallel breadth-first search
///
/// # Errors
///
/// Returns an error if the map lacks an S marker or the worker pool
/// parameters are invalid
pub fn explore(map: &CharMap, args: &ExploreArgs) -> Result<Vec<String>> {
    let start = map.locate(START_MARKER)?;
    let problem = FarthestReach::new(map, start);

    let outcome: SearchOutcome<Reach> = if args.sequential {
        breadth_first(&problem, problem.start())
    } else {
        let mut engine = ParallelBfs::new().batch_size(args.batch_size);
        if let Some(workers) = args.workers {
            engine = engine.workers(workers);
        }
        engine.run(&problem, problem.start())?
    };

    let [row, col] = outcome.solution.cell;
    Ok(vec![
        format!(
            "farthest: ({row}, {col}) at distance {}",
            problem.span(&outcome.solution)
        ),
        format!("search: {}", outcome.stats),
    ])
}

/// Count down/right routes from S to E with one of the memo solvers
///
/// # Errors
///
/// Returns an error if the map lacks an S or E marker
pub fn count_routes(map: CharMap, task: bool) -> Result<Vec<String>> {
    let start = map.locate(START_MARKER)?;
    let goal = map.locate(END_MARKER)?;
    let root = RouteCount::new(Rc::new(map), start, goal);

    let (routes, stats): (u64, MemoStats) = if task {
        let mut solver = TaskMemoSolver::new();
        (solver.solve(&root), solver.stats())
    } else {
        let mut solver = CallbackMemoSolver::new();
        (solver.solve(&root), solver.stats())
    };

    Ok(vec![format!("routes: {routes}"), format!("solver: {stats}")])
}
