use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use subway_explorer::domain::QueryError;
use subway_explorer::mbta::{MbtaClient, MbtaConfig, MockMbtaClient};
use subway_explorer::network::BuildConfig;
use subway_explorer::report;
use subway_explorer::session::Session;

/// Stop pairs asked about when none are given on the command line.
const SAMPLE_JOURNEYS: &[(&str, &str)] = &[
    ("Davis", "Kendall/MIT"),
    ("Ashmont", "Arlington"),
    ("Malden Center", "Wellington"),
    ("Malden Center", "South Station"),
    ("Malden Center", "Symphony"),
];

/// Answer questions about the MBTA subway network.
#[derive(Debug, Parser)]
#[command(name = "subway-explorer", version)]
struct Args {
    /// Base URL of the MBTA v3 API.
    #[arg(long, default_value = "https://api-v3.mbta.com")]
    base_url: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Retries after a throttled or timed-out request.
    #[arg(long, default_value_t = 3)]
    max_retries: u32,

    /// Stop lists fetched concurrently.
    #[arg(long, default_value_t = 1)]
    concurrency: usize,

    /// Serve routes and stops from fixture JSON in DIR instead of the API.
    #[arg(long, value_name = "DIR")]
    mock_data: Option<PathBuf>,

    /// Find a journey between two stop names (repeatable).
    #[arg(long, num_args = 2, value_names = ["ORIGIN", "DESTINATION"])]
    journey: Vec<String>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn journeys(&self) -> Vec<(&str, &str)> {
        if self.journey.is_empty() {
            return SAMPLE_JOURNEYS.to_vec();
        }
        self.journey
            .chunks_exact(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
            .collect()
    }

    fn mbta_config(&self) -> MbtaConfig {
        MbtaConfig::new()
            .with_base_url(&self.base_url)
            .with_timeout(self.timeout_secs)
            .with_max_retries(self.max_retries)
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries the answers; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn load_session(args: &Args) -> Result<Session, QueryError> {
    let config = BuildConfig::new(args.concurrency);

    match &args.mock_data {
        Some(dir) => {
            let client = MockMbtaClient::new(dir)?;
            Session::load(&client, &config).await
        }
        None => {
            let client = MbtaClient::new(args.mbta_config())?;
            Session::load(&client, &config).await
        }
    }
}

fn print_answers(session: &Session, journeys: &[(&str, &str)]) -> io::Result<()> {
    let mut out = io::stdout().lock();

    report::write_routes(&mut out, session.routes())?;
    writeln!(out)?;

    report::write_statistics(
        &mut out,
        &session.statistics(),
        &session.shared_stops(),
        session.skipped_routes(),
    )?;
    writeln!(out)?;

    writeln!(out, "Question Three:")?;
    for (origin, destination) in journeys {
        let result = session.journey(origin, destination);
        report::write_journey(&mut out, origin, destination, &result)?;
    }

    out.flush()
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let session = match load_session(&args).await {
        Ok(session) => session,
        Err(e) => {
            error!(error = %e, "cannot load subway network");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = print_answers(&session, &args.journeys()) {
        error!(error = %e, "failed to write answers");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
