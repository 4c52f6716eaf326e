// Handlers for the CLI subcommands. main.rs parses arguments, loads the feeds
// once, and dispatches here.

pub mod distance;
pub mod interactive;
pub mod resolve;
pub mod route;

use anyhow::{Context, Result};
use tracing::debug;

use roadtrip_lib::RoadTrip;

use crate::options::DataOptions;

/// Load the three feeds and build the routing context.
pub fn load_roadtrip(options: &DataOptions) -> Result<RoadTrip> {
    let paths = options.feed_paths();
    debug!(
        distances = %paths.distances.display(),
        names = %paths.names.display(),
        borders = %paths.borders.display(),
        "loading feeds"
    );

    let (roadtrip, report) = RoadTrip::load(&paths, &options.load_options())
        .context("failed to load the country feeds (see --data-dir or ROADTRIP_DATA_DIR)")?;

    if !report.diagnostics.is_empty() {
        eprintln!(
            "Warning: skipped {} malformed feed record(s).",
            report.diagnostics.len()
        );
    }
    Ok(roadtrip)
}
