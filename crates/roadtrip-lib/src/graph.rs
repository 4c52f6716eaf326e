use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::distance::DistanceTable;
use crate::feeds::{neighbour_name, BorderRecord};
use crate::names::NameRegistry;

/// Options controlling how border records become edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphBuildOptions {
    /// Insert the reverse edge for every accepted border fragment. When
    /// `false`, edges only point from the subject of a line to its
    /// neighbours.
    pub mirror_edges: bool,
}

impl Default for GraphBuildOptions {
    fn default() -> Self {
        Self { mirror_edges: true }
    }
}

/// Edge within the border graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub target: String,
    /// Capital-to-capital distance in kilometres.
    pub distance: u32,
}

/// Land-border graph keyed by canonical country name.
#[derive(Debug, Clone, Default)]
pub struct BorderGraph {
    adjacency: Arc<HashMap<String, Vec<Edge>>>,
}

impl BorderGraph {
    /// Return the neighbours for a given country, ordered by name.
    pub fn neighbours(&self, country: &str) -> &[Edge] {
        self.adjacency
            .get(country)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `country` is a node of the graph (exact canonical spelling).
    pub fn contains(&self, country: &str) -> bool {
        self.adjacency.contains_key(country)
    }

    /// Weight of the edge from `from` to `to`, if any.
    pub fn edge(&self, from: &str, to: &str) -> Option<u32> {
        self.neighbours(from)
            .iter()
            .find(|edge| edge.target == to)
            .map(|edge| edge.distance)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Directed edges with no edge in the opposite direction, sorted.
    pub fn asymmetric_edges(&self) -> Vec<(String, String)> {
        let mut one_way: Vec<(String, String)> = self
            .adjacency
            .iter()
            .flat_map(|(from, edges)| {
                edges
                    .iter()
                    .filter(move |edge| self.edge(&edge.target, from).is_none())
                    .map(move |edge| (from.clone(), edge.target.clone()))
            })
            .collect();
        one_way.sort();
        one_way
    }
}

/// Build the border graph.
///
/// Every country registered by the name feed becomes a node, even when it has
/// no land borders.
///
/// For each record the subject and every neighbour are resolved to canonical
/// names. Fragments that resolve to nothing or to the subject itself are
/// skipped. Edge weights come from the distance table, looked up with the
/// names exactly as the border feed spells them; a fragment with no recorded
/// distance is pruned rather than failing the build.
pub fn build_border_graph<'a, I>(
    borders: I,
    registry: &NameRegistry,
    distances: &DistanceTable,
    options: GraphBuildOptions,
) -> BorderGraph
where
    I: IntoIterator<Item = &'a BorderRecord>,
{
    let mut adjacency: BTreeMap<String, BTreeMap<String, u32>> = registry
        .countries()
        .map(|name| (name.to_string(), BTreeMap::new()))
        .collect();
    let mut pruned_edges = 0usize;

    for record in borders {
        let subject_raw = record.country.as_str();
        let subject = registry.resolve(subject_raw);
        adjacency.entry(subject.clone()).or_default();

        for fragment in &record.neighbours {
            let neighbour_raw = neighbour_name(fragment);
            let neighbour = registry.resolve(neighbour_raw);
            if neighbour.is_empty() || neighbour == subject {
                continue;
            }

            let Some(distance) = distances.between(registry, subject_raw, neighbour_raw) else {
                debug!(
                    country = %subject,
                    neighbour = %neighbour,
                    "no capital distance; pruning border edge"
                );
                pruned_edges += 1;
                continue;
            };

            adjacency
                .entry(subject.clone())
                .or_default()
                .insert(neighbour.clone(), distance);
            let reverse = adjacency.entry(neighbour.clone()).or_default();
            if options.mirror_edges {
                reverse.insert(subject.clone(), distance);
            }
        }
    }

    if pruned_edges > 0 {
        warn!(
            pruned_edges,
            "ignored border edges without a capital distance"
        );
    }

    let adjacency: HashMap<String, Vec<Edge>> = adjacency
        .into_iter()
        .map(|(country, neighbours)| {
            let edges = neighbours
                .into_iter()
                .map(|(target, distance)| Edge { target, distance })
                .collect();
            (country, edges)
        })
        .collect();

    let graph = BorderGraph {
        adjacency: Arc::new(adjacency),
    };
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        mirrored = options.mirror_edges,
        "built border graph"
    );
    graph
}
