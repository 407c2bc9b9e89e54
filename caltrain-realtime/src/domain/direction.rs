//! Direction of travel.

use std::fmt;

/// Error returned when parsing an unrecognised direction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction: {0:?} (expected southbound or northbound)")]
pub struct InvalidDirection(pub String);

/// Direction of a Caltrain service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    SouthBound,
    NorthBound,
}

impl Direction {
    /// Position of this direction's trains table on a station page.
    ///
    /// The page lists southbound trains first and northbound trains second.
    pub fn group_index(&self) -> usize {
        match self {
            Direction::SouthBound => 0,
            Direction::NorthBound => 1,
        }
    }

    /// Parse a direction, case-insensitively.
    ///
    /// Accepts `southbound`, `south`, `sb`, `northbound`, `north` and `nb`.
    pub fn parse(s: &str) -> Result<Self, InvalidDirection> {
        match s.to_ascii_lowercase().as_str() {
            "southbound" | "south" | "sb" => Ok(Direction::SouthBound),
            "northbound" | "north" | "nb" => Ok(Direction::NorthBound),
            _ => Err(InvalidDirection(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::SouthBound => "southbound",
            Direction::NorthBound => "northbound",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Direction {
    type Err = InvalidDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::parse(s)
    }
}
