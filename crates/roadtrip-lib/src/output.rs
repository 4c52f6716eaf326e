use std::fmt::Write;

use serde::Serialize;

use crate::path::Route;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// Border crossing within a summarised route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStep {
    pub index: usize,
    pub from: String,
    pub to: String,
    pub distance_km: u64,
    pub cumulative_km: u64,
}

/// Structured representation of a route that higher-level consumers can
/// serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub start: String,
    pub goal: String,
    pub hops: usize,
    pub total_km: u64,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    pub fn from_route(route: &Route) -> Self {
        let mut cumulative_km = 0;
        let steps = route
            .hops
            .iter()
            .enumerate()
            .map(|(index, hop)| {
                cumulative_km += hop.distance_km;
                RouteStep {
                    index: index + 1,
                    from: hop.from.clone(),
                    to: hop.to.clone(),
                    distance_km: hop.distance_km,
                    cumulative_km,
                }
            })
            .collect();

        Self {
            start: route.start.clone(),
            goal: route.goal.clone(),
            hops: route.hop_count(),
            total_km: route.total_km,
            steps,
        }
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "Route from {} to {}:", self.start, self.goal);
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "* {} --> {} ({} km.)",
                step.from, step.to, step.distance_km
            );
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** _{} → {}_ ({} borders, {} km)",
            self.start, self.goal, self.hops, self.total_km
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "* {:>2}. **{}** → **{}** ({} km, {} km total)",
                step.index, step.from, step.to, step.distance_km, step.cumulative_km
            );
        }
        buffer
    }
}
