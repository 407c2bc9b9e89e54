//! Caltrain realtime page client.
//!
//! Scrapes the mobile realtime page for a station, which lists the next
//! few trains in each direction with their minutes until arrival.
//!
//! Key characteristics of the page:
//! - No machine-readable direction marker; southbound trains are in the
//!   first trains table and northbound in the second
//! - At most three trains per direction
//! - Service alerts are not reflected in the arrival times

mod client;
mod error;
mod extract;
mod fixture;

pub use client::{
    DEFAULT_BASE_URL, HttpFetcher, PageFetcher, RealtimeClient, RealtimeConfig, get_real_timings,
    timings_from_page,
};
pub use error::FetchError;
pub use extract::{DIRECTION_SELECTOR, ExtractionStrategy, TIMING_SELECTOR, extract_timings};
pub use fixture::FixtureFetcher;
