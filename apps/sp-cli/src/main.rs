use clap::{Parser, Subcommand};
use sp_app::{run_session, AppError, AppResult, Planner};
use sp_map::{dutch_intercity, RailMap};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sp-cli")]
#[command(about = "Spoorplan CLI - Rail route planning tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate map file syntax and structure
    Validate {
        /// Path to the map file (YAML or JSON)
        map_path: PathBuf,
    },
    /// List stations in a map
    Stations {
        /// Path to a map file; defaults to the built-in Dutch map
        #[arg(long)]
        map: Option<PathBuf>,
    },
    /// Compute the fastest route between two stations
    Route {
        /// Origin station name
        from: String,
        /// Goal station name
        to: String,
        /// Path to a map file; defaults to the built-in Dutch map
        #[arg(long)]
        map: Option<PathBuf>,
        /// Remove a link before routing, written as FROM:TO (repeatable)
        #[arg(long = "disrupt", value_name = "FROM:TO")]
        disrupt: Vec<String>,
        /// Emit the answer as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run a planning session from a file or stdin
    Run {
        /// Path to a session input file; reads stdin when omitted
        input: Option<PathBuf>,
        /// Path to a map file; defaults to the built-in Dutch map
        #[arg(long)]
        map: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { map_path } => cmd_validate(&map_path),
        Commands::Stations { map } => cmd_stations(map.as_deref()),
        Commands::Route {
            from,
            to,
            map,
            disrupt,
            json,
        } => cmd_route(&from, &to, map.as_deref(), &disrupt, json),
        Commands::Run { input, map } => cmd_run(input.as_deref(), map.as_deref()),
    }
}

/// Loads a map file by extension, or the built-in Dutch map when no path is
/// given.
fn load_map(path: Option<&Path>) -> AppResult<RailMap> {
    match path {
        Some(path) => {
            let map = if path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
            {
                sp_map::load_json(path)?
            } else {
                sp_map::load_yaml(path)?
            };
            Ok(map)
        }
        None => Ok(dutch_intercity()),
    }
}

fn cmd_validate(map_path: &Path) -> AppResult<()> {
    println!("Validating map: {}", map_path.display());
    let map = load_map(Some(map_path))?;
    println!(
        "✓ Map is valid: {} stations, {} links",
        map.stations.len(),
        map.links.len()
    );
    Ok(())
}

fn cmd_stations(map_path: Option<&Path>) -> AppResult<()> {
    let map = load_map(map_path)?;
    let planner = Planner::from_map(&map)?;
    let registry = planner.network().registry();

    if registry.is_empty() {
        println!("No stations in map");
    } else {
        println!("Stations in '{}':", map.name);
        for station in registry.stations() {
            let links = planner.network().graph().neighbors(station.id).len();
            println!("  {} ({} links)", station.name, links);
        }
    }
    Ok(())
}

fn cmd_route(
    from: &str,
    to: &str,
    map_path: Option<&Path>,
    disruptions: &[String],
    json: bool,
) -> AppResult<()> {
    let map = load_map(map_path)?;
    let mut planner = Planner::from_map(&map)?;

    for pair in disruptions {
        let (a, b) = pair.split_once(':').ok_or_else(|| {
            AppError::InvalidInput(format!("expected FROM:TO disruption, got '{pair}'"))
        })?;
        planner.apply_disruption(a, b)?;
    }

    let route = planner.route(from, to)?;

    if json {
        let value = match &route {
            Some(route) => serde_json::json!({
                "from": from,
                "to": to,
                "reachable": true,
                "stations": planner.route_names(route),
                "minutes": route.minutes,
            }),
            None => serde_json::json!({
                "from": from,
                "to": to,
                "reachable": false,
                "stations": [],
                "minutes": null,
            }),
        };
        println!("{value:#}");
        return Ok(());
    }

    match route {
        Some(route) => {
            for name in planner.route_names(&route) {
                println!("{}", name);
            }
            println!("{}", route.minutes);
        }
        None => println!("UNREACHABLE"),
    }
    Ok(())
}

fn cmd_run(input: Option<&Path>, map_path: Option<&Path>) -> AppResult<()> {
    let map = load_map(map_path)?;
    let mut planner = Planner::from_map(&map)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = match input {
        Some(path) => {
            let file = std::fs::File::open(path)?;
            run_session(&mut planner, io::BufReader::new(file), &mut out)?
        }
        None => {
            let stdin = io::stdin();
            run_session(&mut planner, stdin.lock(), &mut out)?
        }
    };

    tracing::info!(
        "session complete: {} disruptions applied, {} queries answered",
        summary.disruptions_applied,
        summary.queries_answered
    );
    Ok(())
}
