//! High-level entry point tying the registry, distance table, and border
//! graph together.
//!
//! # Example
//!
//! ```ignore
//! use roadtrip_lib::{FeedPaths, LoadOptions, RoadTrip};
//!
//! let (roadtrip, _report) = RoadTrip::load(&FeedPaths::resolve(None), &LoadOptions::default())?;
//! let route = roadtrip.plan_route("Canada", "Mexico")?;
//! println!("{} km over {} borders", route.total_km, route.hop_count());
//! ```

use serde::Serialize;
use strsim::jaro_winkler;
use tracing::info;

use crate::distance::DistanceTable;
use crate::error::{Error, Result};
use crate::feeds::{read_feeds, BorderRecord, Diagnostic, FeedPaths, Feeds, ParsePolicy};
use crate::graph::{build_border_graph, BorderGraph, GraphBuildOptions};
use crate::names::{NameRegistry, NameRegistryBuilder, Resolution};
use crate::path::{find_path, Route};

/// Names scoring below this Jaro-Winkler similarity are never suggested.
const MIN_SUGGESTION_SCORE: f64 = 0.8;

/// Options applied while loading feeds and building the graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub policy: ParsePolicy,
    pub graph: GraphBuildOptions,
}

/// Summary of a load, including records skipped under a lenient policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub countries: usize,
    pub border_edges: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Immutable, fully built routing context.
#[derive(Debug, Clone, Default)]
pub struct RoadTrip {
    registry: NameRegistry,
    distances: DistanceTable,
    graph: BorderGraph,
}

impl RoadTrip {
    /// Read the three feeds from disk and build the routing context.
    pub fn load(paths: &FeedPaths, options: &LoadOptions) -> Result<(Self, LoadReport)> {
        let (feeds, diagnostics) = read_feeds(paths, options.policy)?;
        let roadtrip = Self::from_feeds(&feeds, options.graph);

        let report = LoadReport {
            countries: roadtrip.graph.node_count(),
            border_edges: roadtrip.graph.edge_count(),
            diagnostics,
        };
        info!(
            countries = report.countries,
            border_edges = report.border_edges,
            skipped_records = report.diagnostics.len(),
            "loaded road trip data"
        );
        Ok((roadtrip, report))
    }

    /// Build from already tokenized feeds using the built-in alias table.
    pub fn from_feeds(feeds: &Feeds, options: GraphBuildOptions) -> Self {
        let registry = NameRegistryBuilder::with_default_aliases()
            .records(feeds.names.iter().cloned())
            .build();
        let distances = DistanceTable::from_records(&feeds.distances);
        Self::from_parts(registry, distances, &feeds.borders, options)
    }

    /// Build from a prepared registry and distance table.
    pub fn from_parts(
        registry: NameRegistry,
        distances: DistanceTable,
        borders: &[BorderRecord],
        options: GraphBuildOptions,
    ) -> Self {
        let graph = build_border_graph(borders, &registry, &distances, options);
        Self {
            registry,
            distances,
            graph,
        }
    }

    /// Canonical name for `name`, or `name` unchanged when nothing matches.
    pub fn resolve(&self, name: &str) -> String {
        self.registry.resolve(name)
    }

    /// Tagged form of [`RoadTrip::resolve`].
    pub fn lookup(&self, name: &str) -> Resolution {
        self.registry.lookup(name)
    }

    /// Capital distance between two countries, `None` when unknown.
    pub fn distance(&self, origin: &str, destination: &str) -> Option<u32> {
        self.distances.between(&self.registry, origin, destination)
    }

    /// Whether `name` is a node of the border graph. Callers resolve first.
    pub fn is_known_country(&self, name: &str) -> bool {
        self.graph.contains(name)
    }

    /// Cheapest route between two canonical names, `None` when unreachable.
    pub fn find_path(&self, start: &str, goal: &str) -> Option<Route> {
        find_path(&self.graph, start, goal)
    }

    /// Resolve both names, verify they are countries in the graph, and find
    /// the cheapest route between them.
    pub fn plan_route(&self, start: &str, goal: &str) -> Result<Route> {
        let start = self.resolve_country(start)?;
        let goal = self.resolve_country(goal)?;

        self.find_path(&start, &goal)
            .ok_or(Error::RouteNotFound { start, goal })
    }

    /// Graph countries most similar to `name`, best match first.
    pub fn fuzzy_country_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .graph
            .nodes()
            .map(|country| (jaro_winkler(&needle, &country.to_lowercase()), country))
            .filter(|(score, _)| *score >= MIN_SUGGESTION_SCORE)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, country)| country.to_string())
            .collect()
    }

    pub fn registry(&self) -> &NameRegistry {
        &self.registry
    }

    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    pub fn graph(&self) -> &BorderGraph {
        &self.graph
    }

    fn resolve_country(&self, name: &str) -> Result<String> {
        let resolved = self.resolve(name);
        if self.is_known_country(&resolved) {
            Ok(resolved)
        } else {
            Err(Error::UnknownCountry {
                name: name.to_string(),
                suggestions: self.fuzzy_country_matches(name, 3),
            })
        }
    }
}
