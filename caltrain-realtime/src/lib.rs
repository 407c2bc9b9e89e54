//! Caltrain realtime arrivals.
//!
//! Scrapes the Caltrain mobile realtime page to answer: "how many minutes
//! until the next trains reach this station in this direction?"
//!
//! ```no_run
//! use caltrain_realtime::{Direction, Station, get_real_timings};
//!
//! # async fn run() -> Result<(), caltrain_realtime::FetchError> {
//! let timings = get_real_timings(Station::SanFrancisco, Direction::SouthBound).await?;
//! for t in timings {
//!     println!("{} min", t.num_minutes());
//! }
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod realtime;

pub use domain::{Direction, Station};
pub use realtime::{FetchError, RealtimeClient, RealtimeConfig, get_real_timings};
