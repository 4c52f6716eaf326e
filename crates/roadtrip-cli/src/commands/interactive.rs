//! Prompt-driven route lookup.
//!
//! Each round asks for two countries, resolves both, and prints the cheapest
//! route between them. Typing `EXIT` (any case) at either prompt, or closing
//! the input, ends the session.

use std::io::{self, BufRead, Write};

use tracing::debug;

use roadtrip_lib::{RoadTrip, RouteRenderMode, RouteSummary};

pub const FIRST_PROMPT: &str = "Enter the name of the first country (type EXIT to quit): ";
pub const SECOND_PROMPT: &str = "Enter the name of the second country (type EXIT to quit): ";
pub const INVALID_COUNTRY: &str = "Invalid country name. Please enter a valid country name.";
pub const NO_PATH: &str = "No path found.";

const EXIT_COMMAND: &str = "EXIT";

enum Answer {
    Country(String),
    Invalid,
    Quit,
}

/// Run the interactive loop until the user quits or input ends.
pub fn run_session<R, W>(roadtrip: &RoadTrip, mut input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        let start = match ask(roadtrip, &mut input, &mut output, FIRST_PROMPT)? {
            Answer::Country(name) => name,
            Answer::Invalid => {
                writeln!(output, "{INVALID_COUNTRY}")?;
                continue;
            }
            Answer::Quit => break,
        };
        let goal = match ask(roadtrip, &mut input, &mut output, SECOND_PROMPT)? {
            Answer::Country(name) => name,
            Answer::Invalid => {
                writeln!(output, "{INVALID_COUNTRY}")?;
                continue;
            }
            Answer::Quit => break,
        };

        match roadtrip.find_path(&start, &goal) {
            Some(route) => {
                let summary = RouteSummary::from_route(&route);
                write!(output, "{}", summary.render(RouteRenderMode::PlainText))?;
            }
            None => writeln!(output, "{NO_PATH}")?,
        }
    }
    output.flush()
}

fn ask<R, W>(roadtrip: &RoadTrip, input: &mut R, output: &mut W, prompt: &str) -> io::Result<Answer>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(Answer::Quit);
    }
    let raw = line.trim();
    if raw.eq_ignore_ascii_case(EXIT_COMMAND) {
        return Ok(Answer::Quit);
    }

    let name = roadtrip.resolve(raw);
    if roadtrip.is_known_country(&name) {
        Ok(Answer::Country(name))
    } else {
        debug!(input = raw, resolved = %name, "rejected country name");
        Ok(Answer::Invalid)
    }
}
