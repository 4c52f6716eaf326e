//! RoadTrip library entry points.
//!
//! This crate reconciles three inconsistently keyed country feeds (capital
//! distances, identifier-to-name rows, and free-text land borders) into a
//! weighted border graph, then answers cheapest-route queries over it.
//! Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod distance;
pub mod error;
pub mod feeds;
pub mod graph;
pub mod names;
pub mod output;
pub mod path;
pub mod routing;

pub use distance::DistanceTable;
pub use error::{Error, Result};
pub use feeds::{
    read_borders, read_distances, read_feeds, read_names, BorderRecord, Diagnostic,
    DistanceRecord, FeedKind, FeedPaths, Feeds, NameRecord, ParsePolicy,
};
pub use graph::{build_border_graph, BorderGraph, Edge, GraphBuildOptions};
pub use names::{NameRegistry, NameRegistryBuilder, Resolution, ShortId, DEFAULT_ALIASES};
pub use output::{RouteRenderMode, RouteStep, RouteSummary};
pub use path::{find_path, Hop, Route};
pub use routing::{LoadOptions, LoadReport, RoadTrip};
