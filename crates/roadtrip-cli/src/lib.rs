//! RoadTrip CLI library.
//!
//! Holds the pieces of the `roadtrip` binary that are worth testing without
//! spawning a process: feed options, subcommand handlers, the interactive
//! session, and terminal styling.

pub mod commands;
pub mod options;
pub mod output;
pub mod terminal;

#[cfg(test)]
pub(crate) mod test_helpers;
