use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use transit_router::domain::NetworkError;
use transit_router::network::NetworkDescription;
use transit_router::persist::{self, PersistError};
use transit_router::router::{BuildError, Route, RouteError, TransportRouter};

/// Message printed for any route that can't be answered.
const NOT_FOUND: &str = "not found";

#[derive(Debug, Parser)]
#[command(name = "transit-router", about = "Fastest bus routes over a static network")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build a router from a network description and save it
    MakeBase {
        /// Network description (JSON)
        #[arg(long)]
        input: PathBuf,
        /// Where to write the router
        #[arg(long)]
        output: PathBuf,
    },
    /// Answer one route query from a saved router
    Route {
        #[arg(long)]
        base: PathBuf,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// Answer a JSON array of route queries from a saved router
    Routes {
        #[arg(long)]
        base: PathBuf,
        /// JSON array of `{ "id", "from", "to" }` objects
        #[arg(long)]
        requests: PathBuf,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// One query of a `routes` batch.
#[derive(Debug, Deserialize)]
struct RouteRequest {
    id: i64,
    from: String,
    to: String,
}

/// Answer to one query: the route, or the not-found marker.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum RouteResponse {
    Found(Route),
    NotFound { error_message: &'static str },
}

impl From<Result<Route, RouteError>> for RouteResponse {
    fn from(result: Result<Route, RouteError>) -> Self {
        match result {
            Ok(route) => RouteResponse::Found(route),
            Err(e) => {
                debug!(reason = %e, "route not found");
                RouteResponse::NotFound {
                    error_message: NOT_FOUND,
                }
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct BatchResponse {
    request_id: i64,
    #[serde(flatten)]
    response: RouteResponse,
}

fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn make_base(input: &Path, output: &Path) -> Result<(), CliError> {
    let description: NetworkDescription = serde_json::from_str(&read_file(input)?)?;
    let settings = description.routing_settings;
    let catalogue = description.into_catalogue()?;
    info!(
        stops = catalogue.stop_count(),
        buses = catalogue.bus_count(),
        "loaded network"
    );

    let router = TransportRouter::build(&catalogue, settings)?;
    persist::save(&router, output)?;
    Ok(())
}

fn route(base: &Path, from: &str, to: &str) -> Result<(), CliError> {
    let router = persist::load(base)?;
    let response = RouteResponse::from(router.get_route(from, to));
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn routes(base: &Path, requests: &Path) -> Result<(), CliError> {
    let requests: Vec<RouteRequest> = serde_json::from_str(&read_file(requests)?)?;
    let router = persist::load(base)?;

    let responses = answer_all(&router, &requests);
    println!("{}", serde_json::to_string_pretty(&responses)?);
    Ok(())
}

fn answer_all(router: &TransportRouter, requests: &[RouteRequest]) -> Vec<BatchResponse> {
    requests
        .iter()
        .map(|request| BatchResponse {
            request_id: request.id,
            response: router.get_route(&request.from, &request.to).into(),
        })
        .collect()
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let result = match &cli.command {
        Command::MakeBase { input, output } => make_base(input, output),
        Command::Route { base, from, to } => route(base, from, to),
        Command::Routes { base, requests } => routes(base, requests),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
