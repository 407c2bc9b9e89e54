//! Caltrain station identifiers.

use std::fmt;

/// Error returned when parsing an unknown station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown station: {0:?}")]
pub struct InvalidStation(pub String);

/// A Caltrain station with a realtime mobile page.
///
/// The list reflects the stations served as of June 1, 2016 and is not
/// checked against the live site. Each station maps to the lowercase
/// identifier the site uses in its page URLs.
///
/// # Examples
///
/// ```
/// use caltrain_realtime::domain::Station;
///
/// assert_eq!(Station::TwentySecondStreet.as_str(), "22ndstreet");
/// assert_eq!(Station::parse("paloalto").unwrap(), Station::PaloAlto);
///
/// // Identifiers are matched exactly
/// assert!(Station::parse("Palo Alto").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Station {
    SanFrancisco,
    TwentySecondStreet,
    Bayshore,
    SouthSanFrancisco,
    SanBruno,
    MillbraeTransitCenter,
    Broadway,
    Burlingame,
    SanMateo,
    HaywardPark,
    Hillsdale,
    Belmont,
    SanCarlos,
    RedwoodCity,
    Atherton,
    MenloPark,
    PaloAlto,
    CaliforniaAve,
    SanAntonio,
    MountainView,
    Sunnyvale,
    Lawrence,
    SantaClara,
    CollegePark,
    SanJoseDiridon,
    Tamien,
    Capitol,
    BlossomHill,
    MorganHill,
    SanMartin,
    Gilroy,
}

impl Station {
    /// Every known station, ordered north to south.
    pub const ALL: [Station; 31] = [
        Station::SanFrancisco,
        Station::TwentySecondStreet,
        Station::Bayshore,
        Station::SouthSanFrancisco,
        Station::SanBruno,
        Station::MillbraeTransitCenter,
        Station::Broadway,
        Station::Burlingame,
        Station::SanMateo,
        Station::HaywardPark,
        Station::Hillsdale,
        Station::Belmont,
        Station::SanCarlos,
        Station::RedwoodCity,
        Station::Atherton,
        Station::MenloPark,
        Station::PaloAlto,
        Station::CaliforniaAve,
        Station::SanAntonio,
        Station::MountainView,
        Station::Sunnyvale,
        Station::Lawrence,
        Station::SantaClara,
        Station::CollegePark,
        Station::SanJoseDiridon,
        Station::Tamien,
        Station::Capitol,
        Station::BlossomHill,
        Station::MorganHill,
        Station::SanMartin,
        Station::Gilroy,
    ];

    /// Returns the identifier used in the station's page URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            Station::SanFrancisco => "sanfrancisco",
            Station::TwentySecondStreet => "22ndstreet",
            Station::Bayshore => "bayshore",
            Station::SouthSanFrancisco => "southsanfrancisco",
            Station::SanBruno => "sanbruno",
            Station::MillbraeTransitCenter => "millbraetransitcenter",
            Station::Broadway => "broadway",
            Station::Burlingame => "burlingame",
            Station::SanMateo => "sanmateo",
            Station::HaywardPark => "haywardpark",
            Station::Hillsdale => "hillsdale",
            Station::Belmont => "belmont",
            Station::SanCarlos => "sancarlos",
            Station::RedwoodCity => "redwoodcity",
            Station::Atherton => "atherton",
            Station::MenloPark => "menlopark",
            Station::PaloAlto => "paloalto",
            Station::CaliforniaAve => "californiaave",
            Station::SanAntonio => "sanantonio",
            Station::MountainView => "mountainview",
            Station::Sunnyvale => "sunnyvale",
            Station::Lawrence => "lawrence",
            Station::SantaClara => "santaclara",
            Station::CollegePark => "collegepark",
            Station::SanJoseDiridon => "sanjosediridon",
            Station::Tamien => "tamien",
            Station::Capitol => "capitol",
            Station::BlossomHill => "blossomhill",
            Station::MorganHill => "morganhill",
            Station::SanMartin => "sanmartin",
            Station::Gilroy => "gilroy",
        }
    }

    /// Look up a station by its URL identifier.
    pub fn parse(s: &str) -> Result<Self, InvalidStation> {
        Station::ALL
            .iter()
            .copied()
            .find(|station| station.as_str() == s)
            .ok_or_else(|| InvalidStation(s.to_string()))
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Station {
    type Err = InvalidStation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Station::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn identifiers_are_unique() {
        let ids: HashSet<&str> = Station::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(ids.len(), Station::ALL.len());
    }

    #[test]
    fn identifiers_are_url_safe() {
        for station in Station::ALL {
            assert!(
                station
                    .as_str()
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()),
                "{station:?} has unsafe identifier"
            );
        }
    }

    #[test]
    fn parse_known_identifiers() {
        assert_eq!(Station::parse("sanfrancisco"), Ok(Station::SanFrancisco));
        assert_eq!(Station::parse("22ndstreet"), Ok(Station::TwentySecondStreet));
        assert_eq!(Station::parse("gilroy"), Ok(Station::Gilroy));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!(Station::parse("").is_err());
        assert!(Station::parse("SanFrancisco").is_err());
        assert!(Station::parse("oakland").is_err());
    }

    #[test]
    fn ordered_north_to_south() {
        assert_eq!(Station::ALL.first(), Some(&Station::SanFrancisco));
        assert_eq!(Station::ALL.last(), Some(&Station::Gilroy));
    }

    #[test]
    fn display() {
        assert_eq!(Station::MountainView.to_string(), "mountainview");
    }

    #[test]
    fn error_display() {
        let err = Station::parse("oakland").unwrap_err();
        assert_eq!(err.to_string(), "unknown station: \"oakland\"");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: as_str then parse returns the original
        #[test]
        fn roundtrip(i in 0..Station::ALL.len()) {
            let station = Station::ALL[i];
            prop_assert_eq!(Station::parse(station.as_str()), Ok(station));
        }

        /// Uppercase input never matches
        #[test]
        fn uppercase_rejected(s in "[A-Z]{3,20}") {
            prop_assert!(Station::parse(&s).is_err());
        }
    }
}
