//! Ingestion of the three source feeds.
//!
//! The feeds arrive in three fixed shapes:
//!
//! - `capdist.csv`: comma-delimited capital distances keyed by short country
//!   identifiers, with a header row.
//! - `state_name.tsv`: tab-separated rows mapping a short identifier to a long
//!   country name.
//! - `borders.txt`: `Country = Neighbour 1,234 km; Other 56 km` lines.
//!
//! Readers here only tokenize. Name reconciliation happens in
//! [`crate::names`] and edge weights are looked up by [`crate::graph`].

use std::env;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::str::Utf8Error;

use csv::{ByteRecord, ReaderBuilder, Trim};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Default filename of the capital distance feed.
pub const DISTANCES_FILENAME: &str = "capdist.csv";
/// Default filename of the identifier-to-name feed.
pub const NAMES_FILENAME: &str = "state_name.tsv";
/// Default filename of the land border feed.
pub const BORDERS_FILENAME: &str = "borders.txt";
/// Environment variable consulted when no data directory is given explicitly.
pub const DATA_DIR_ENV: &str = "ROADTRIP_DATA_DIR";

/// Runs of text between tabs in the name feed.
static TEXT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\t\r\n]+").expect("text run pattern is valid"));

/// Trailing `<number> km` annotation on a border fragment. Numbers may carry
/// thousands separators (`8,891 km`).
static LENGTH_ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+\d[\d,]*\s+km").expect("length annotation pattern is valid"));

/// Identifies which feed a record or diagnostic came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedKind {
    Distances,
    Names,
    Borders,
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            FeedKind::Distances => "distance",
            FeedKind::Names => "name",
            FeedKind::Borders => "border",
        };
        f.write_str(value)
    }
}

/// How malformed records are handled while reading a feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Abort on the first malformed record.
    #[default]
    Strict,
    /// Skip malformed records and collect a [`Diagnostic`] for each.
    Lenient,
}

/// A malformed record skipped under [`ParsePolicy::Lenient`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub feed: FeedKind,
    pub line: u64,
    pub message: String,
}

/// Capital-to-capital distance between two short identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceRecord {
    pub origin: String,
    pub destination: String,
    pub km: u32,
}

impl DistanceRecord {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, km: u32) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            km,
        }
    }
}

/// Short identifier paired with the long country name used by the other feeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRecord {
    pub id: String,
    pub name: String,
}

impl NameRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// One line of the border feed. Neighbour fragments are kept raw, including
/// their length annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderRecord {
    pub country: String,
    pub neighbours: Vec<String>,
}

impl BorderRecord {
    /// Parse a single `Country = Neighbour 12 km; ...` line.
    ///
    /// A line without `=` names a country with no land borders.
    pub fn parse(line: &str) -> Option<Self> {
        let (subject, rest) = line.split_once('=').unwrap_or((line, ""));
        let country = subject.trim();
        if country.is_empty() {
            return None;
        }

        let neighbours = rest
            .split(';')
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .map(str::to_string)
            .collect();

        Some(Self {
            country: country.to_string(),
            neighbours,
        })
    }
}

/// Strip the trailing `<number> km` annotation from a border fragment,
/// returning the neighbour's raw name.
///
/// ```
/// use roadtrip_lib::feeds::neighbour_name;
///
/// assert_eq!(neighbour_name("United States 8,891 km"), "United States");
/// assert_eq!(neighbour_name(" Belize "), "Belize");
/// ```
pub fn neighbour_name(fragment: &str) -> &str {
    let fragment = fragment.trim();
    match LENGTH_ANNOTATION.find(fragment) {
        Some(annotation) => fragment[..annotation.start()].trim(),
        None => fragment,
    }
}

/// Records produced by one feed reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<T> {
    pub records: Vec<T>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Default for Parsed<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            diagnostics: Vec::new(),
        }
    }
}

/// Read the capital distance feed.
///
/// The header row is discarded. Origin, destination, and kilometre fields sit
/// at positions 1, 3, and 4; other columns are ignored and need not be valid
/// UTF-8.
pub fn read_distances<R: Read>(reader: R, policy: ParsePolicy) -> Result<Parsed<DistanceRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut parsed = Parsed::default();
    for (index, row) in csv_reader.byte_records().enumerate() {
        let record = row?;
        let line = record
            .position()
            .map(|position| position.line())
            .unwrap_or(index as u64 + 2);

        match parse_distance(&record) {
            Ok(distance) => parsed.records.push(distance),
            Err(message) => reject(
                policy,
                FeedKind::Distances,
                line,
                message,
                &mut parsed.diagnostics,
            )?,
        }
    }

    debug!(
        records = parsed.records.len(),
        skipped = parsed.diagnostics.len(),
        "read distance feed"
    );
    Ok(parsed)
}

fn parse_distance(record: &ByteRecord) -> std::result::Result<DistanceRecord, String> {
    if record.len() < 5 {
        return Err(format!("expected at least 5 fields, found {}", record.len()));
    }

    let origin = text_field(record, 1)?;
    let destination = text_field(record, 3)?;
    if origin.is_empty() || destination.is_empty() {
        return Err("missing country identifier".to_string());
    }

    let km_text = text_field(record, 4)?;
    let km = km_text
        .parse::<u32>()
        .map_err(|_| format!("distance '{}' is not a whole number of km", km_text))?;

    Ok(DistanceRecord::new(origin, destination, km))
}

fn text_field(record: &ByteRecord, index: usize) -> std::result::Result<&str, String> {
    std::str::from_utf8(&record[index])
        .map(str::trim)
        .map_err(|err| invalid_utf8_message(&format!("field {}", index + 1), &err))
}

fn invalid_utf8_message(what: &str, err: &Utf8Error) -> String {
    format!("{what} is not valid UTF-8 (invalid byte at offset {})", err.valid_up_to())
}

/// Read one line into `buf` without its `\n` or `\r\n` terminator. Returns
/// `false` at end of input.
fn read_raw_line<B: BufRead>(reader: &mut B, buf: &mut Vec<u8>) -> io::Result<bool> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(false);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(true)
}

/// Column names that mark the first line of the name feed as a header.
const NAME_HEADER_COLUMNS: &[&str] = &["statenumber", "stateabb", "countryname"];

fn is_name_header(runs: &[&str]) -> bool {
    runs.iter().any(|run| {
        NAME_HEADER_COLUMNS
            .iter()
            .any(|column| run.eq_ignore_ascii_case(column))
    })
}

/// Read the identifier-to-name feed.
///
/// Each line is split into tab-delimited runs of text. Rows led by a numeric
/// code carry `(code, id, name, ...)`; two-run rows carry `(id, name)`. The
/// first non-blank line is skipped when it names the feed's columns
/// (`statenumber`, `stateabb`, `countryname`).
pub fn read_names<R: Read>(reader: R, policy: ParsePolicy) -> Result<Parsed<NameRecord>> {
    let mut parsed = Parsed::default();
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    let mut line_number = 0u64;
    let mut first_row = true;

    while read_raw_line(&mut reader, &mut buf)? {
        line_number += 1;
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(err) => {
                first_row = false;
                reject(
                    policy,
                    FeedKind::Names,
                    line_number,
                    invalid_utf8_message("line", &err),
                    &mut parsed.diagnostics,
                )?;
                continue;
            }
        };
        let runs: Vec<&str> = TEXT_RUN
            .find_iter(line)
            .map(|run| run.as_str().trim())
            .filter(|run| !run.is_empty())
            .collect();

        if runs.is_empty() {
            continue;
        }
        if std::mem::take(&mut first_row) && is_name_header(&runs) {
            debug!(header = %line, "skipping name feed header");
            continue;
        }

        let pair = match (is_numeric(runs[0]), runs.len()) {
            (true, len) if len >= 3 => Some((runs[1], runs[2])),
            (false, len) if len >= 2 => Some((runs[0], runs[1])),
            _ => None,
        };

        match pair {
            Some((id, name)) => parsed.records.push(NameRecord::new(id, name)),
            None => reject(
                policy,
                FeedKind::Names,
                line_number,
                format!("expected an identifier and a name, found {} field(s)", runs.len()),
                &mut parsed.diagnostics,
            )?,
        }
    }

    debug!(
        records = parsed.records.len(),
        skipped = parsed.diagnostics.len(),
        "read name feed"
    );
    Ok(parsed)
}

/// Read the land border feed.
pub fn read_borders<R: Read>(reader: R, policy: ParsePolicy) -> Result<Parsed<BorderRecord>> {
    let mut parsed = Parsed::default();
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    let mut line_number = 0u64;

    while read_raw_line(&mut reader, &mut buf)? {
        line_number += 1;
        let parsed_line = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => BorderRecord::parse(line)
                .ok_or_else(|| "missing country name before '='".to_string()),
            Err(err) => Err(invalid_utf8_message("line", &err)),
        };

        match parsed_line {
            Ok(record) => parsed.records.push(record),
            Err(message) => reject(
                policy,
                FeedKind::Borders,
                line_number,
                message,
                &mut parsed.diagnostics,
            )?,
        }
    }

    debug!(
        records = parsed.records.len(),
        skipped = parsed.diagnostics.len(),
        "read border feed"
    );
    Ok(parsed)
}

fn reject(
    policy: ParsePolicy,
    feed: FeedKind,
    line: u64,
    message: String,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<()> {
    match policy {
        ParsePolicy::Strict => Err(Error::MalformedRecord {
            feed,
            line,
            message,
        }),
        ParsePolicy::Lenient => {
            warn!(%feed, line, %message, "skipping malformed record");
            diagnostics.push(Diagnostic {
                feed,
                line,
                message,
            });
            Ok(())
        }
    }
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// Locations of the three feed files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedPaths {
    pub distances: PathBuf,
    pub names: PathBuf,
    pub borders: PathBuf,
}

impl FeedPaths {
    /// Default file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            distances: dir.join(DISTANCES_FILENAME),
            names: dir.join(NAMES_FILENAME),
            borders: dir.join(BORDERS_FILENAME),
        }
    }

    /// Resolve feed locations from an explicit directory, then the
    /// `ROADTRIP_DATA_DIR` environment variable, then the working directory.
    pub fn resolve(data_dir: Option<&Path>) -> Self {
        if let Some(dir) = data_dir {
            return Self::in_dir(dir);
        }
        if let Some(dir) = env::var_os(DATA_DIR_ENV) {
            let dir = PathBuf::from(dir);
            debug!(path = %dir.display(), "using data directory from {}", DATA_DIR_ENV);
            return Self::in_dir(&dir);
        }
        Self::in_dir(Path::new("."))
    }
}

/// Raw records from all three feeds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feeds {
    pub distances: Vec<DistanceRecord>,
    pub names: Vec<NameRecord>,
    pub borders: Vec<BorderRecord>,
}

/// Read all three feeds from disk, returning their records and any
/// diagnostics collected under [`ParsePolicy::Lenient`].
pub fn read_feeds(paths: &FeedPaths, policy: ParsePolicy) -> Result<(Feeds, Vec<Diagnostic>)> {
    let distances = read_distances(open_feed(FeedKind::Distances, &paths.distances)?, policy)?;
    let names = read_names(open_feed(FeedKind::Names, &paths.names)?, policy)?;
    let borders = read_borders(open_feed(FeedKind::Borders, &paths.borders)?, policy)?;

    let mut diagnostics = distances.diagnostics;
    diagnostics.extend(names.diagnostics);
    diagnostics.extend(borders.diagnostics);

    Ok((
        Feeds {
            distances: distances.records,
            names: names.records,
            borders: borders.records,
        },
        diagnostics,
    ))
}

fn open_feed(feed: FeedKind, path: &Path) -> Result<File> {
    match File::open(path) {
        Ok(file) => Ok(file),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(Error::FeedNotFound {
            feed,
            path: path.to_path_buf(),
        }),
        Err(err) => Err(err.into()),
    }
}
