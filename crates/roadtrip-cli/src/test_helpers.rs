use roadtrip_lib::{
    BorderRecord, DistanceRecord, Feeds, GraphBuildOptions, NameRecord, RoadTrip,
};

/// Three-country routing context where the United States only appears as a
/// neighbour.
pub fn north_america() -> RoadTrip {
    let feeds = Feeds {
        distances: vec![
            DistanceRecord::new("USA", "CAN", 734),
            DistanceRecord::new("CAN", "MEX", 2500),
            DistanceRecord::new("USA", "MEX", 3200),
        ],
        names: vec![
            NameRecord::new("USA", "United States of America"),
            NameRecord::new("CAN", "Canada"),
            NameRecord::new("MEX", "Mexico"),
            NameRecord::new("JPN", "Japan"),
        ],
        borders: [
            "Canada=United States of America 734 km;",
            "Mexico=United States of America 0 km;",
        ]
        .into_iter()
        .filter_map(BorderRecord::parse)
        .collect(),
    };
    RoadTrip::from_feeds(&feeds, GraphBuildOptions::default())
}
