use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::Serialize;

use crate::graph::BorderGraph;

/// One leg of a route between two bordering countries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hop {
    pub from: String,
    pub to: String,
    pub distance_km: u64,
}

/// Cheapest route between two countries.
///
/// A route whose start and goal coincide has no hops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub start: String,
    pub goal: String,
    pub hops: Vec<Hop>,
    pub total_km: u64,
}

impl Route {
    /// Number of border crossings.
    pub fn hop_count(&self) -> usize {
        self.hops.len()
    }

    /// Countries visited in order, including both endpoints.
    pub fn countries(&self) -> Vec<&str> {
        let mut countries = vec![self.start.as_str()];
        countries.extend(self.hops.iter().map(|hop| hop.to.as_str()));
        countries
    }
}

/// Run Dijkstra's algorithm from `start` and return the cheapest route to
/// `goal`.
///
/// Returns `None` when either endpoint is not a node of the graph or no chain
/// of borders connects them. `start == goal` yields a zero-hop route.
pub fn find_path(graph: &BorderGraph, start: &str, goal: &str) -> Option<Route> {
    if !graph.contains(start) || !graph.contains(goal) {
        return None;
    }
    if start == goal {
        return Some(Route {
            start: start.to_string(),
            goal: goal.to_string(),
            hops: Vec::new(),
            total_km: 0,
        });
    }

    let mut distances: HashMap<&str, u64> = HashMap::new();
    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start, 0);
    queue.push(QueueEntry::new(start, 0));

    while let Some(entry) = queue.pop() {
        if !visited.insert(entry.node) {
            continue;
        }
        if entry.node == goal {
            return Some(reconstruct_route(&distances, &parents, start, goal));
        }

        for edge in graph.neighbours(entry.node) {
            let next = edge.target.as_str();
            if visited.contains(next) {
                continue;
            }

            let next_cost = entry.cost + u64::from(edge.distance);
            if next_cost < *distances.get(next).unwrap_or(&u64::MAX) {
                distances.insert(next, next_cost);
                parents.insert(next, entry.node);
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    None
}

/// Walk predecessors back from `goal`. Each hop's weight is the difference of
/// the two tentative distances, so hop weights always sum to the total.
fn reconstruct_route(
    distances: &HashMap<&str, u64>,
    parents: &HashMap<&str, &str>,
    start: &str,
    goal: &str,
) -> Route {
    let mut hops = Vec::new();
    let mut current = goal;
    while current != start {
        let Some(&previous) = parents.get(current) else {
            break;
        };
        let to_current = distances.get(current).copied().unwrap_or_default();
        let to_previous = distances.get(previous).copied().unwrap_or_default();
        hops.push(Hop {
            from: previous.to_string(),
            to: current.to_string(),
            distance_km: to_current - to_previous,
        });
        current = previous;
    }
    hops.reverse();

    Route {
        start: start.to_string(),
        goal: goal.to_string(),
        total_km: distances.get(goal).copied().unwrap_or_default(),
        hops,
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'a> {
    node: &'a str,
    cost: u64,
}

impl<'a> QueueEntry<'a> {
    fn new(node: &'a str, cost: u64) -> Self {
        Self { node, cost }
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_pops_cheapest_first() {
        let mut queue = BinaryHeap::new();
        queue.push(QueueEntry::new("Spain", 30));
        queue.push(QueueEntry::new("Andorra", 10));
        queue.push(QueueEntry::new("France", 20));

        let order: Vec<_> = std::iter::from_fn(|| queue.pop().map(|entry| entry.node)).collect();
        assert_eq!(order, vec!["Andorra", "France", "Spain"]);
    }

    #[test]
    fn queue_breaks_ties_by_name() {
        let mut queue = BinaryHeap::new();
        queue.push(QueueEntry::new("Spain", 10));
        queue.push(QueueEntry::new("Andorra", 10));

        assert_eq!(queue.pop().map(|entry| entry.node), Some("Andorra"));
    }

    #[test]
    fn route_countries_include_endpoints() {
        let route = Route {
            start: "Canada".to_string(),
            goal: "Mexico".to_string(),
            hops: vec![
                Hop {
                    from: "Canada".to_string(),
                    to: "United States of America".to_string(),
                    distance_km: 734,
                },
                Hop {
                    from: "United States of America".to_string(),
                    to: "Mexico".to_string(),
                    distance_km: 3200,
                },
            ],
            total_km: 3934,
        };

        assert_eq!(
            route.countries(),
            vec!["Canada", "United States of America", "Mexico"]
        );
        assert_eq!(route.hop_count(), 2);
    }
}
