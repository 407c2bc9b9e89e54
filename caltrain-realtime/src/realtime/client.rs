//! Caltrain realtime page client.
//!
//! Builds a station's mobile page URL, fetches it and reads the arrival
//! times for one direction. One request per call; nothing is cached or
//! retried.

use chrono::Duration;
use scraper::Html;
use tracing::{debug, warn};

use crate::domain::{Direction, Station, parse_duration};

use super::error::FetchError;
use super::extract::{ExtractionStrategy, extract_timings};

/// Default host serving the realtime station pages.
pub const DEFAULT_BASE_URL: &str = "http://www.caltrain.com";

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Source of station page bodies.
///
/// [`HttpFetcher`] talks to the live site; [`super::FixtureFetcher`] serves
/// saved pages from disk.
pub trait PageFetcher {
    /// Fetch the page at `url` and return its body.
    fn fetch_page(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Configuration for the realtime client.
#[derive(Debug, Clone)]
pub struct RealtimeConfig {
    /// Scheme and host the station pages live under
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// How arrival cells are attributed to a direction
    pub strategy: ExtractionStrategy,
}

impl RealtimeConfig {
    /// Create a config pointing at the live Caltrain site.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            strategy: ExtractionStrategy::default(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the direction extraction strategy.
    pub fn with_strategy(mut self, strategy: ExtractionStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetches pages over HTTP with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with the given request timeout.
    pub fn new(timeout_secs: u64) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self { http })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

/// Client for Caltrain realtime arrival estimates.
#[derive(Debug, Clone)]
pub struct RealtimeClient<F = HttpFetcher> {
    fetcher: F,
    base_url: String,
    strategy: ExtractionStrategy,
}

impl RealtimeClient<HttpFetcher> {
    /// Create a client that fetches from the live site.
    pub fn new(config: RealtimeConfig) -> Result<Self, FetchError> {
        let fetcher = HttpFetcher::new(config.timeout_secs)?;
        Ok(Self::with_fetcher(config, fetcher))
    }
}

impl<F: PageFetcher> RealtimeClient<F> {
    /// Create a client over any page source.
    pub fn with_fetcher(config: RealtimeConfig, fetcher: F) -> Self {
        Self {
            fetcher,
            base_url: config.base_url,
            strategy: config.strategy,
        }
    }

    /// URL of a station's mobile realtime page.
    pub fn station_url(&self, station: Station) -> String {
        format!(
            "{}/schedules/realtime/stations/{}station-mobile.html",
            self.base_url.trim_end_matches('/'),
            station.as_str()
        )
    }

    /// Get the time until each upcoming train arrives at `station` heading
    /// in `direction`, soonest first.
    ///
    /// The site shows at most three trains per direction. An empty result
    /// means the page listed no trains for that direction, which is also
    /// what a station without service in that direction looks like.
    pub async fn get_real_timings(
        &self,
        station: Station,
        direction: Direction,
    ) -> Result<Vec<Duration>, FetchError> {
        let url = self.station_url(station);
        debug!(%url, %direction, "fetching realtime page");

        let body = self.fetcher.fetch_page(&url).await?;
        let timings = timings_from_page(&body, direction, self.strategy);

        debug!(%station, %direction, count = timings.len(), "extracted timings");
        Ok(timings)
    }
}

/// Parse a station page and return the arrival durations for `direction`.
///
/// Cells that don't read `"<n> min."` are skipped.
pub fn timings_from_page(
    body: &str,
    direction: Direction,
    strategy: ExtractionStrategy,
) -> Vec<Duration> {
    let doc = Html::parse_document(body);

    extract_timings(&doc, direction, strategy)
        .into_iter()
        .filter_map(|cell| match parse_duration(&cell) {
            Ok(d) => Some(d),
            Err(e) => {
                warn!(error = %e, "skipping arrival cell");
                None
            }
        })
        .collect()
}

/// Get arrival estimates from the live site using the default config.
///
/// See [`RealtimeClient::get_real_timings`].
pub async fn get_real_timings(
    station: Station,
    direction: Direction,
) -> Result<Vec<Duration>, FetchError> {
    RealtimeClient::new(RealtimeConfig::default())?
        .get_real_timings(station, direction)
        .await
}
