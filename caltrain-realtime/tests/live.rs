//! Checks against the live Caltrain site.
//!
//! These make real HTTP requests and depend on the current timetable, so
//! they are ignored by default. Run with `cargo test -- --ignored`.

use caltrain_realtime::{Direction, Station, get_real_timings};

async fn check(station: Station, direction: Direction) {
    let timings = get_real_timings(station, direction).await.unwrap();

    assert!(timings.len() <= 3, "{station} {direction}: {timings:?}");
    assert!(timings.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
#[ignore]
async fn terminus() {
    check(Station::SanFrancisco, Direction::SouthBound).await;

    let northbound = get_real_timings(Station::SanFrancisco, Direction::NorthBound)
        .await
        .unwrap();
    assert!(northbound.is_empty());
}

#[tokio::test]
#[ignore]
async fn through_stations() {
    for station in [Station::PaloAlto, Station::MountainView, Station::Tamien] {
        check(station, Direction::SouthBound).await;
        check(station, Direction::NorthBound).await;
    }
}
