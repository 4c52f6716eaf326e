//! Capital distance lookup between two countries.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use roadtrip_lib::RoadTrip;

use crate::output::{to_json, OutputFormat};
use crate::terminal::{format_with_separators, ColorPalette};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceReport {
    pub from: String,
    pub to: String,
    pub km: u32,
}

/// Print the capital-to-capital distance between two countries.
///
/// Names may use any known spelling; the report shows canonical names.
pub fn handle_distance_command<W: Write>(
    roadtrip: &RoadTrip,
    from: &str,
    to: &str,
    format: OutputFormat,
    palette: &ColorPalette,
    out: &mut W,
) -> Result<()> {
    let from_name = roadtrip.resolve(from);
    let to_name = roadtrip.resolve(to);
    let Some(km) = roadtrip.distance(from, to) else {
        anyhow::bail!(
            "No capital distance recorded between {} and {}.",
            from_name,
            to_name
        );
    };
    let report = DistanceReport {
        from: from_name,
        to: to_name,
        km,
    };

    let rendered = match format {
        OutputFormat::Json => to_json(&report)?,
        OutputFormat::Text | OutputFormat::Rich => format!(
            "{bold}{}{reset} -> {bold}{}{reset}: {green}{} km{reset}\n",
            report.from,
            report.to,
            format_with_separators(u64::from(report.km)),
            bold = palette.white_bold,
            green = palette.green,
            reset = palette.reset,
        ),
    };
    out.write_all(rendered.as_bytes())
        .context("failed to write distance")?;
    Ok(())
}
