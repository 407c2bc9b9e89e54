use std::process::ExitCode;

use chrono::{Duration, Local};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use caltrain_realtime::realtime::{
    ExtractionStrategy, FetchError, FixtureFetcher, RealtimeClient, RealtimeConfig,
};
use caltrain_realtime::{Direction, Station};

/// Caltrain realtime arrivals, scraped from the mobile station pages.
#[derive(Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the next trains arriving at a station
    Arrivals {
        /// Station identifier, e.g. `paloalto` (see `stations`)
        station: Station,
        /// `southbound` or `northbound`
        direction: Direction,
        /// How arrival cells are matched to a direction
        #[arg(long, value_enum, default_value_t = StrategyArg::TableGroup)]
        strategy: StrategyArg,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List known station identifiers
    Stations,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    TableGroup,
    FlatSlice,
}

impl From<StrategyArg> for ExtractionStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::TableGroup => ExtractionStrategy::TableGroup,
            StrategyArg::FlatSlice => ExtractionStrategy::FlatSlice,
        }
    }
}

#[derive(Serialize)]
struct ArrivalsReport {
    station: &'static str,
    direction: &'static str,
    strategy: &'static str,
    minutes: Vec<i64>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("caltrain_realtime=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Stations => {
            for station in Station::ALL {
                println!("{station}");
            }
            ExitCode::SUCCESS
        }
        Command::Arrivals {
            station,
            direction,
            strategy,
            json,
        } => {
            let config = config_from_env().with_strategy(strategy.into());
            match arrivals(config, station, direction).await {
                Ok(timings) => {
                    let report = ArrivalsReport {
                        station: station.as_str(),
                        direction: direction.as_str(),
                        strategy: ExtractionStrategy::from(strategy).as_str(),
                        minutes: timings.iter().map(|d| d.num_minutes()).collect(),
                    };
                    if json {
                        print_json(&report)
                    } else {
                        print_text(&report, &timings);
                        ExitCode::SUCCESS
                    }
                }
                Err(e) => {
                    eprintln!("Failed to get arrivals for {station} {direction}: {e}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

/// Build the client config, applying environment overrides.
fn config_from_env() -> RealtimeConfig {
    let mut config = RealtimeConfig::default();

    if let Ok(url) = std::env::var("CALTRAIN_BASE_URL") {
        config = config.with_base_url(url);
    }

    if let Ok(secs) = std::env::var("CALTRAIN_TIMEOUT_SECS") {
        match secs.parse() {
            Ok(secs) => config = config.with_timeout(secs),
            Err(_) => eprintln!("Warning: ignoring invalid CALTRAIN_TIMEOUT_SECS={secs:?}"),
        }
    }

    config
}

async fn arrivals(
    config: RealtimeConfig,
    station: Station,
    direction: Direction,
) -> Result<Vec<Duration>, FetchError> {
    // Serve saved pages instead of the live site when a fixture dir is set
    match std::env::var("CALTRAIN_FIXTURE_DIR") {
        Ok(dir) => {
            let fetcher = FixtureFetcher::new(dir)?;
            RealtimeClient::with_fetcher(config, fetcher)
                .get_real_timings(station, direction)
                .await
        }
        Err(_) => {
            RealtimeClient::new(config)?
                .get_real_timings(station, direction)
                .await
        }
    }
}

fn print_text(report: &ArrivalsReport, timings: &[Duration]) {
    if timings.is_empty() {
        println!("No {} trains at {}.", report.direction, report.station);
        return;
    }

    let now = Local::now();
    println!("Next {} trains at {}:", report.direction, report.station);
    for t in timings {
        let eta = now + *t;
        println!("  {:>3} min  (~{})", t.num_minutes(), eta.format("%H:%M"));
    }
}

fn print_json(report: &ArrivalsReport) -> ExitCode {
    match serde_json::to_string_pretty(report) {
        Ok(s) => {
            println!("{s}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to encode JSON: {e}");
            ExitCode::FAILURE
        }
    }
}
