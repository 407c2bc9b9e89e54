//! Parsing of arrival-time cells.
//!
//! The realtime page renders each upcoming train's arrival as free text such
//! as `"30 min."`. Only that exact shape is accepted: a run of ASCII digits
//! followed by the literal suffix `" min."`, with no surrounding whitespace.

use chrono::Duration;

/// Literal suffix on every arrival-time cell.
pub const TIMING_SUFFIX: &str = " min.";

/// Error returned when an arrival-time cell does not match `"<n> min."`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CellParseError {
    /// The cell does not end with `" min."`
    #[error("arrival cell {cell:?} does not end with \" min.\"")]
    MissingSuffix { cell: String },

    /// The text before the suffix is not a whole number of minutes
    #[error("arrival cell {cell:?} has no valid minute count")]
    InvalidMinutes { cell: String },
}

/// Parse an arrival-time cell into a duration.
///
/// # Examples
///
/// ```
/// use caltrain_realtime::domain::parse_duration;
///
/// assert_eq!(parse_duration("30 min.").unwrap().num_minutes(), 30);
/// assert!(parse_duration("N/A").is_err());
/// assert!(parse_duration(" 30 min.").is_err());
/// ```
pub fn parse_duration(text: &str) -> Result<Duration, CellParseError> {
    let digits = text
        .strip_suffix(TIMING_SUFFIX)
        .ok_or_else(|| CellParseError::MissingSuffix {
            cell: text.to_string(),
        })?;

    // u32's FromStr also accepts a leading '+'
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CellParseError::InvalidMinutes {
            cell: text.to_string(),
        });
    }

    let mins: u32 = digits.parse().map_err(|_| CellParseError::InvalidMinutes {
        cell: text.to_string(),
    })?;

    Ok(Duration::minutes(i64::from(mins)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_cells() {
        assert_eq!(parse_duration("0 min."), Ok(Duration::zero()));
        assert_eq!(parse_duration("5 min."), Ok(Duration::minutes(5)));
        assert_eq!(parse_duration("30 min."), Ok(Duration::minutes(30)));
        assert_eq!(parse_duration("120 min."), Ok(Duration::minutes(120)));
    }

    #[test]
    fn leading_zeros_accepted() {
        assert_eq!(parse_duration("07 min."), Ok(Duration::minutes(7)));
    }

    #[test]
    fn reject_missing_suffix() {
        assert_eq!(
            parse_duration("30"),
            Err(CellParseError::MissingSuffix { cell: "30".into() })
        );
        assert!(parse_duration("30 min").is_err());
        assert!(parse_duration("30 mins.").is_err());
        assert!(parse_duration("").is_err());
    }

    #[test]
    fn reject_non_numeric() {
        assert_eq!(
            parse_duration("N/A min."),
            Err(CellParseError::InvalidMinutes {
                cell: "N/A min.".into()
            })
        );
        assert!(parse_duration("N/A").is_err());
        assert!(parse_duration(" min.").is_err());
        assert!(parse_duration("-5 min.").is_err());
        assert!(parse_duration("+5 min.").is_err());
        assert!(parse_duration("5.5 min.").is_err());
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        assert!(parse_duration(" 5 min.").is_err());
        assert!(parse_duration("5 min. ").is_err());
        assert!(parse_duration("5  min.").is_err());
        assert!(parse_duration("5 min.\n").is_err());
    }

    #[test]
    fn reject_overflow() {
        assert!(parse_duration("99999999999 min.").is_err());
    }

    #[test]
    fn error_display() {
        let err = parse_duration("N/A").unwrap_err();
        assert_eq!(err.to_string(), "arrival cell \"N/A\" does not end with \" min.\"");

        let err = parse_duration("x min.").unwrap_err();
        assert_eq!(err.to_string(), "arrival cell \"x min.\" has no valid minute count");
    }
}
