//! Show how a name resolves against the registry.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use roadtrip_lib::RoadTrip;

use crate::output::{to_json, OutputFormat};
use crate::terminal::ColorPalette;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveReport {
    pub input: String,
    pub canonical: String,
    pub resolved: bool,
    pub short_id: Option<String>,
    /// Whether the canonical name is a node of the border graph.
    pub routable: bool,
    /// Other spellings that resolve to the same canonical name.
    pub aliases: Vec<String>,
}

impl ResolveReport {
    pub fn new(roadtrip: &RoadTrip, input: &str) -> Self {
        let resolution = roadtrip.lookup(input);
        let resolved = resolution.is_resolved();
        let canonical = resolution.into_name();
        Self {
            input: input.to_string(),
            short_id: roadtrip.registry().short_id(input).map(str::to_string),
            routable: roadtrip.is_known_country(&canonical),
            aliases: roadtrip
                .registry()
                .aliases_of(&canonical)
                .map(str::to_string)
                .collect(),
            canonical,
            resolved,
        }
    }
}

pub fn handle_resolve_command<W: Write>(
    roadtrip: &RoadTrip,
    name: &str,
    format: OutputFormat,
    palette: &ColorPalette,
    out: &mut W,
) -> Result<()> {
    let report = ResolveReport::new(roadtrip, name);
    let rendered = match format {
        OutputFormat::Json => to_json(&report)?,
        OutputFormat::Text | OutputFormat::Rich => render_text(&report, palette),
    };
    out.write_all(rendered.as_bytes())
        .context("failed to write resolution")?;
    Ok(())
}

fn render_text(report: &ResolveReport, palette: &ColorPalette) -> String {
    if !report.resolved {
        return format!(
            "{red}'{}' does not match any known country name.{reset}\n",
            report.input,
            red = palette.red,
            reset = palette.reset,
        );
    }

    let mut line = format!(
        "{} -> {}{}{}",
        report.input, palette.white_bold, report.canonical, palette.reset
    );
    if let Some(id) = &report.short_id {
        line.push_str(&format!(" {}({}){}", palette.gray, id, palette.reset));
    }
    if !report.routable {
        line.push_str(" [not in the border graph]");
    }
    line.push('\n');
    if !report.aliases.is_empty() {
        line.push_str(&format!("  also known as: {}\n", report.aliases.join(", ")));
    }
    line
}
