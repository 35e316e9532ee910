//! Procedural question bank assembly.
//!
//! The pipeline is catalog -> generator -> assembler -> bank: a static
//! catalog feeds randomized question rendering, each question is wrapped
//! into a multiple-choice item, and a bank is a repeated, independent run
//! of the assembler. Banks are persisted as pretty-printed JSON and parse
//! back losslessly.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::Rng;

mod catalog;
mod error;
mod generator;
mod mcq;

pub use catalog::{Catalog, DIFFICULTIES, TOPICS};
pub use error::{BuildError, Pool};
pub use generator::QuestionGenerator;
pub use mcq::{McqAssembler, McqItem, DEFAULT_OPTION_COUNT};

/// An ordered collection of generated items; order is generation order.
pub type QuestionBank = Vec<McqItem>;

/// Builds whole question banks and moves them to and from disk.
pub struct BankBuilder {
    catalog: Catalog,
}

impl BankBuilder {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(),
        }
    }

    /// Assemble `count` items independently; duplicates across draws are
    /// expected and allowed. Any assembler error aborts the whole build,
    /// no partial bank is returned.
    pub fn build<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        topic: &str,
        difficulty: &str,
        count: usize,
        option_count: usize,
    ) -> Result<QuestionBank, BuildError> {
        let assembler = McqAssembler::new(&self.catalog);
        (0..count)
            .map(|_| assembler.assemble(rng, topic, difficulty, option_count))
            .collect()
    }

    /// Serialize `bank` to pretty-printed JSON at `path`, overwriting any
    /// existing file, and return the path. A missing or unwritable parent
    /// directory fails before anything is created; a write failure after
    /// creation may leave a truncated file behind.
    pub fn persist(&self, bank: &QuestionBank, path: impl AsRef<Path>) -> Result<PathBuf, BuildError> {
        let path = path.as_ref();
        let io_err = |source: std::io::Error| BuildError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, bank).map_err(|e| io_err(e.into()))?;
        writer.flush().map_err(io_err)?;

        tracing::info!("question bank saved to {}", path.display());
        Ok(path.to_path_buf())
    }

    /// Parse a persisted bank back; inverse of [`BankBuilder::persist`].
    pub fn load(&self, path: impl AsRef<Path>) -> Result<QuestionBank, BuildError> {
        let path = path.as_ref();
        let io_err = |source: std::io::Error| BuildError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_err)?;
        let bank = serde_json::from_reader(BufReader::new(file)).map_err(|e| io_err(e.into()))?;
        Ok(bank)
    }
}

impl Default for BankBuilder {
    fn default() -> Self {
        Self::new()
    }
}
