//! Parsing of whitespace-delimited interaction records.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::graph::InteractionGraph;

/// An interaction record file that could not be read or parsed.
#[derive(Debug, Error)]
pub enum RecordError {
    /// A line with the wrong number of fields.
    #[error("line {line}: expected `id1 chain1 id2 chain2`, found {found} fields")]
    Malformed {
        /// 1-based line number of the offending record.
        line: usize,
        /// Number of fields the record actually held.
        found: usize,
    },
    /// The underlying reader failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl InteractionGraph {
    /// Parse whitespace-delimited interaction records.
    ///
    /// Each line holds four fields, `id1 chain1 id2 chain2`, naming two
    /// interacting chains. The chain names are underscore-joined as
    /// `id1_chain1` and `id2_chain2`, and each line contributes one
    /// undirected interaction. Repeated chains and interactions collapse
    /// into one; blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Malformed`] for a line with any other field
    /// count, or [`RecordError::Io`] if the reader fails.
    pub fn from_records<R: BufRead>(reader: R) -> Result<Self, RecordError> {
        let mut graph = Self::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let fields = line.split_whitespace().collect::<Vec<_>>();

            if fields.is_empty() {
                continue;
            }
            if fields.len() != 4 {
                return Err(RecordError::Malformed {
                    line: index + 1,
                    found: fields.len(),
                });
            }

            let chain1 = format!("{}_{}", fields[0], fields[1]);
            let chain2 = format!("{}_{}", fields[2], fields[3]);
            graph.add_interaction(&chain1, &chain2);
        }

        Ok(graph)
    }

    /// Read interaction records from a file.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] if the file cannot be opened or parsed.
    pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Self, RecordError> {
        let file = File::open(path)?;
        Self::from_records(BufReader::new(file))
    }
}
