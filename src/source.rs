//! Loading instruction lines from a file or reader.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("instruction source {path} unavailable: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read instruction line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// Reads every line from `reader`. Both `\n` and `\r\n` endings are accepted.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>, SourceError> {
    reader
        .lines()
        .enumerate()
        .map(|(i, line)| line.map_err(|source| SourceError::Read { line: i + 1, source }))
        .collect()
}

/// Reads the instruction list stored at `path`.
pub fn read_instructions(path: impl AsRef<Path>) -> Result<Vec<String>, SourceError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SourceError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;
    read_lines(BufReader::new(file))
}
