//! Route command handler.

use std::io::Write;

use anyhow::{Context, Result};

use roadtrip_lib::{Error as RouteError, RoadTrip, RouteSummary};

use crate::output::OutputFormat;
use crate::terminal::ColorPalette;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting country name, in any known spelling.
    pub from: String,
    /// Destination country name.
    pub to: String,
    /// Whether the graph was built without mirrored edges.
    pub directional: bool,
}

/// Plan a route and write it in the requested format.
pub fn handle_route_command<W: Write>(
    roadtrip: &RoadTrip,
    args: &RouteCommandArgs,
    format: OutputFormat,
    palette: &ColorPalette,
    out: &mut W,
) -> Result<()> {
    let route = roadtrip
        .plan_route(&args.from, &args.to)
        .map_err(|err| handle_route_failure(args, err))?;

    let summary = RouteSummary::from_route(&route);
    let rendered = format.render_route(&summary, palette)?;
    out.write_all(rendered.as_bytes())
        .context("failed to write route")?;
    Ok(())
}

fn handle_route_failure(args: &RouteCommandArgs, err: RouteError) -> anyhow::Error {
    match err {
        RouteError::UnknownCountry { name, suggestions } => {
            anyhow::anyhow!(format_unknown_country_message(&name, &suggestions))
        }
        RouteError::RouteNotFound { start, goal } => {
            anyhow::anyhow!(format_route_not_found_message(
                &start,
                &goal,
                args.directional
            ))
        }
        other => anyhow::Error::new(other),
    }
}

pub(crate) fn format_unknown_country_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown country '{}'.", name);
    if let Some((first, rest)) = suggestions.split_first() {
        let formatted = if rest.is_empty() {
            format!("Did you mean '{first}'?")
        } else {
            let joined = suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            format!("Did you mean one of: {}?", joined)
        };
        message.push(' ');
        message.push_str(&formatted);
    }
    message
}

fn format_route_not_found_message(start: &str, goal: &str, directional: bool) -> String {
    let mut message = format!("No route found between {} and {}.", start, goal);
    if directional {
        message.push_str(" Try again without --directional to follow borders both ways.");
    } else {
        message.push_str(" The two countries are not connected by land borders.");
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::north_america;

    fn args(from: &str, to: &str) -> RouteCommandArgs {
        RouteCommandArgs {
            from: from.to_string(),
            to: to.to_string(),
            directional: false,
        }
    }

    #[test]
    fn writes_plain_route() {
        let mut out = Vec::new();
        handle_route_command(
            &north_america(),
            &args("Canada", "Mexico"),
            OutputFormat::Text,
            &ColorPalette::plain(),
            &mut out,
        )
        .expect("route exists");

        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("* United States of America --> Mexico (3200 km.)"));
    }

    #[test]
    fn unknown_country_message_lists_suggestions() {
        assert_eq!(
            format_unknown_country_message("Canda", &["Canada".to_string()]),
            "Unknown country 'Canda'. Did you mean 'Canada'?"
        );
        assert_eq!(
            format_unknown_country_message("Nowhere", &[]),
            "Unknown country 'Nowhere'."
        );
        assert_eq!(
            format_unknown_country_message("Gna", &["Ghana".to_string(), "Guinea".to_string()]),
            "Unknown country 'Gna'. Did you mean one of: 'Ghana', 'Guinea'?"
        );
    }

    #[test]
    fn island_has_no_route() {
        let err = handle_route_command(
            &north_america(),
            &args("Japan", "Canada"),
            OutputFormat::Text,
            &ColorPalette::plain(),
            &mut Vec::new(),
        )
        .expect_err("no land route");

        assert!(err
            .to_string()
            .starts_with("No route found between Japan and Canada."));
    }
}
