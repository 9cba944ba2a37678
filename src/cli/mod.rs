use std::{net::SocketAddr, path::Path, sync::Arc};

use anyhow::Context;
use clap::{Arg, ArgMatches, Command};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Settings,
    core::{analytics, assignment, capacity, TourPlanner},
    http::{self, AppState},
    schemas::decode_payload,
    services::OpenAiDelegate,
    store::InMemoryItineraryStore,
    types::{AssignmentRequest, ItineraryRecord},
};

fn command() -> Command {
    Command::new("tour-agent")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tour itinerary planning service backed by an LLM completion endpoint")
        .subcommand_required(true)
        .subcommand(
            Command::new("serve")
                .about("Run the HTTP API")
                .arg(
                    Arg::new("bind")
                        .short('b')
                        .long("bind")
                        .value_name("ADDR")
                        .help("Listen address (or set TOUR_AGENT_BIND)"),
                )
                .arg(
                    Arg::new("model")
                        .short('m')
                        .long("model")
                        .value_name("MODEL")
                        .help("Completion model (or set OPENAI_MODEL)"),
                )
                .arg(
                    Arg::new("api-key")
                        .short('k')
                        .long("api-key")
                        .value_name("KEY")
                        .help("API key (or set OPENAI_API_KEY)"),
                )
                .arg(
                    Arg::new("base-url")
                        .short('u')
                        .long("base-url")
                        .value_name("URL")
                        .help("OpenAI-compatible base URL (or set OPENAI_BASE_URL)"),
                )
                .arg(
                    Arg::new("timeout")
                        .short('t')
                        .long("timeout")
                        .value_name("SECONDS")
                        .help("Completion request timeout (or set TOUR_AGENT_TIMEOUT_SECS)"),
                ),
        )
        .subcommand(
            Command::new("analyze")
                .about("Print the analytics report for an itinerary JSON file")
                .arg(
                    Arg::new("file")
                        .help("Path to an itinerary record")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("assign")
                .about("Print the deterministic seat assignment for a request JSON file")
                .arg(
                    Arg::new("file")
                        .help("Path to an assignment request")
                        .required(true)
                        .index(1),
                ),
        )
}

/// CLI entry point for the tour-agent binary
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let matches = command().get_matches();
    match matches.subcommand() {
        Some(("serve", args)) => serve(args).await,
        Some(("analyze", args)) => analyze(file_arg(args)?),
        Some(("assign", args)) => assign(file_arg(args)?),
        Some((other, _)) => anyhow::bail!("unknown command `{other}`"),
        None => anyhow::bail!("a command is required"),
    }
}

fn file_arg(args: &ArgMatches) -> anyhow::Result<&Path> {
    args.get_one::<String>("file")
        .map(Path::new)
        .context("missing file argument")
}

/// Environment settings with command-line overrides laid over them.
fn settings_with_overrides(args: &ArgMatches) -> anyhow::Result<Settings> {
    let mut settings = Settings::from_env()?;

    if let Some(bind) = args.get_one::<String>("bind") {
        settings.bind = bind
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid --bind address `{bind}`"))?;
    }
    if let Some(model) = args.get_one::<String>("model") {
        settings.model = model.clone();
    }
    if let Some(api_key) = args.get_one::<String>("api-key") {
        settings.api_key = Some(api_key.clone());
    }
    if let Some(base_url) = args.get_one::<String>("base-url") {
        settings.base_url = base_url.clone();
    }
    if let Some(timeout) = args.get_one::<String>("timeout") {
        settings.timeout_secs = timeout
            .parse()
            .with_context(|| format!("invalid --timeout `{timeout}`"))?;
    }
    Ok(settings)
}

async fn serve(args: &ArgMatches) -> anyhow::Result<()> {
    let settings = settings_with_overrides(args)?;
    let delegate = OpenAiDelegate::from_settings(&settings)?;
    info!(
        target: "tour_agent::http",
        model = delegate.model(),
        base_url = %settings.base_url,
        "starting tour agent"
    );

    let planner = TourPlanner::new(Arc::new(delegate), Arc::new(InMemoryItineraryStore::new()));
    http::serve(settings.bind, AppState::new(planner)).await?;
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    Ok(decode_payload(value)?)
}

fn analyze(path: &Path) -> anyhow::Result<()> {
    let record: ItineraryRecord = read_json(path)?;
    let report = analytics::analyze(&record);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn assign(path: &Path) -> anyhow::Result<()> {
    let request: AssignmentRequest = read_json(path)?;
    capacity::validate_assignment_request(&request)?;
    let assignments = assignment::assign(&request)?;
    println!("{}", serde_json::to_string_pretty(&assignments)?);
    Ok(())
}
