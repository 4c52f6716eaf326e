//! Command-line options that select and load the three feeds.

use std::path::PathBuf;

use clap::Args;

use roadtrip_lib::{FeedPaths, GraphBuildOptions, LoadOptions, ParsePolicy};

/// Feed locations and load behaviour shared by every subcommand.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct DataOptions {
    /// Directory holding capdist.csv, state_name.tsv and borders.txt.
    /// Falls back to ROADTRIP_DATA_DIR, then the working directory.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Override the capital distance feed path.
    #[arg(long, global = true, value_name = "FILE")]
    pub distances: Option<PathBuf>,

    /// Override the identifier-to-name feed path.
    #[arg(long, global = true, value_name = "FILE")]
    pub names: Option<PathBuf>,

    /// Override the land border feed path.
    #[arg(long, global = true, value_name = "FILE")]
    pub borders: Option<PathBuf>,

    /// Skip malformed feed records instead of aborting.
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Only add border edges in the direction each border line lists them.
    #[arg(long, global = true)]
    pub directional: bool,
}

impl DataOptions {
    /// Resolve the three feed paths, applying per-feed overrides last.
    pub fn feed_paths(&self) -> FeedPaths {
        let mut paths = FeedPaths::resolve(self.data_dir.as_deref());
        if let Some(path) = &self.distances {
            paths.distances = path.clone();
        }
        if let Some(path) = &self.names {
            paths.names = path.clone();
        }
        if let Some(path) = &self.borders {
            paths.borders = path.clone();
        }
        paths
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            policy: if self.lenient {
                ParsePolicy::Lenient
            } else {
                ParsePolicy::Strict
            },
            graph: GraphBuildOptions {
                mirror_edges: !self.directional,
            },
        }
    }
}
