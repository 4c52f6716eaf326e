//! Shared fixtures for integration tests.

use std::path::PathBuf;

use roadtrip_lib::{
    BorderRecord, DistanceRecord, FeedPaths, Feeds, GraphBuildOptions, LoadOptions, NameRecord,
    RoadTrip,
};

/// Path to fixtures directory holding the miniature feeds.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Routing context built from the checked-in fixture feeds.
#[allow(dead_code)]
pub fn fixture_roadtrip() -> RoadTrip {
    let paths = FeedPaths::in_dir(&fixtures_dir());
    let (roadtrip, _report) =
        RoadTrip::load(&paths, &LoadOptions::default()).expect("fixture feeds load");
    roadtrip
}

/// North American feeds where the border text carries no usable distance and
/// the only border line for the United States comes from its neighbours.
#[allow(dead_code)]
pub fn north_america_feeds() -> Feeds {
    Feeds {
        distances: vec![
            DistanceRecord::new("USA", "CAN", 734),
            DistanceRecord::new("CAN", "MEX", 2500),
            DistanceRecord::new("USA", "MEX", 3200),
        ],
        names: vec![
            NameRecord::new("USA", "United States of America"),
            NameRecord::new("CAN", "Canada"),
            NameRecord::new("MEX", "Mexico"),
        ],
        borders: vec![
            border("Canada=United States of America 734 km;"),
            border("Mexico=United States of America 0 km;"),
        ],
    }
}

#[allow(dead_code)]
pub fn north_america(options: GraphBuildOptions) -> RoadTrip {
    RoadTrip::from_feeds(&north_america_feeds(), options)
}

#[allow(dead_code)]
pub fn border(line: &str) -> BorderRecord {
    BorderRecord::parse(line).expect("valid border line")
}
