use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which catalog pool a failed draw came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pool {
    Subtopics,
    Templates,
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pool::Subtopics => f.write_str("subtopic"),
            Pool::Templates => f.write_str("template"),
        }
    }
}

/// Errors produced by the bank builder pipeline.
///
/// All of these are unrecoverable where they occur and propagate to the
/// caller unchanged; a zero-question build is not an error.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The catalog has no pool for the given key, so nothing can be drawn.
    #[error("empty {pool} pool for key {key:?}")]
    EmptyPool { pool: Pool, key: String },

    /// An MCQ needs at least the correct answer as an option.
    #[error("option count must be at least 1, got {0}")]
    InvalidOptionCount(usize),

    /// The persistence target could not be created, written or read.
    #[error("could not access question bank at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
