//! Output formats for the non-interactive subcommands.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use roadtrip_lib::{RouteRenderMode, RouteSummary};

use crate::terminal::{format_with_separators, ColorPalette};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one border crossing per line.
    #[default]
    Text,
    /// Markdown-flavoured text with cumulative distances.
    Rich,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Render a route summary in this format.
    pub fn render_route(self, summary: &RouteSummary, palette: &ColorPalette) -> Result<String> {
        match self {
            OutputFormat::Text => {
                let mut rendered = summary.render(RouteRenderMode::PlainText);
                rendered.push_str(&total_line(summary, palette));
                Ok(rendered)
            }
            OutputFormat::Rich => Ok(summary.render(RouteRenderMode::RichText)),
            OutputFormat::Json => to_json(summary),
        }
    }
}

/// Serialize any value as pretty JSON with a trailing newline.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut rendered =
        serde_json::to_string_pretty(value).context("failed to serialize output as JSON")?;
    rendered.push('\n');
    Ok(rendered)
}

fn total_line(summary: &RouteSummary, palette: &ColorPalette) -> String {
    let borders = if summary.hops == 1 { "border" } else { "borders" };
    format!(
        "Total: {}{} km{} over {} {}\n",
        palette.green,
        format_with_separators(summary.total_km),
        palette.reset,
        summary.hops,
        borders
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::north_america;

    fn summary() -> RouteSummary {
        let route = north_america()
            .plan_route("Canada", "Mexico")
            .expect("route exists");
        RouteSummary::from_route(&route)
    }

    #[test]
    fn text_appends_total() {
        let rendered = OutputFormat::Text
            .render_route(&summary(), &ColorPalette::plain())
            .expect("renders");

        assert!(rendered.starts_with("Route from Canada to Mexico:\n"));
        assert!(rendered.ends_with("Total: 3,934 km over 2 borders\n"));
    }

    #[test]
    fn json_is_parseable() {
        let rendered = OutputFormat::Json
            .render_route(&summary(), &ColorPalette::plain())
            .expect("renders");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid JSON");

        assert_eq!(value["goal"], "Mexico");
        assert_eq!(value["steps"].as_array().map(Vec::len), Some(2));
    }
}
