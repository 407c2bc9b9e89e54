//! Domain types for Caltrain realtime arrivals.
//!
//! Stations and directions are closed enumerations so that callers can't
//! misspell an identifier. Arrival cells are parsed into `chrono::Duration`
//! values counted in whole minutes.

mod direction;
mod duration;
mod station;

pub use direction::{Direction, InvalidDirection};
pub use duration::{CellParseError, TIMING_SUFFIX, parse_duration};
pub use station::{InvalidStation, Station};
