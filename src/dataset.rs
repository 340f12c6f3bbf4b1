// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading weighted-term datasets.
//!
//! Two input formats:
//!
//! ```text
//! 3                      [{"query": "car", "weight": 10},
//!     10  car             {"query": "cat", "weight": 5},
//!      5  cat             {"query": "dog", "weight": 1}]
//!      1  dog
//! ```
//!
//! The text format (left) opens with the record count. Each record is a
//! signed weight, one separating whitespace character, and the query, which is
//! trimmed of surrounding whitespace. Negative weights are rejected here so
//! that the core never sees one. The JSON format (right) is an array of
//! serialized [`Term`]s.

use crate::error::InvalidArgument;
use crate::types::Term;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Why a dataset could not be loaded.
#[derive(Debug)]
pub enum LoadError {
    /// Reading the underlying file or stream failed.
    Io(io::Error),
    /// The input had no record count line.
    MissingHeader,
    /// The record count line is not a non-negative integer.
    InvalidHeader { line: usize, text: String },
    /// A record line could not be split into weight and query.
    MalformedRecord { line: usize, reason: String },
    /// A record parsed but violates a term invariant.
    InvalidTerm { line: usize, source: InvalidArgument },
    /// The header promised a different number of records.
    CountMismatch { expected: usize, actual: usize },
    /// The JSON document is not an array of terms.
    Json(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read dataset: {}", e),
            LoadError::MissingHeader => write!(f, "dataset is empty: missing record count"),
            LoadError::InvalidHeader { line, text } => {
                write!(f, "line {}: invalid record count '{}'", line, text)
            }
            LoadError::MalformedRecord { line, reason } => {
                write!(f, "line {}: {}", line, reason)
            }
            LoadError::InvalidTerm { line, source } => write!(f, "line {}: {}", line, source),
            LoadError::CountMismatch { expected, actual } => {
                write!(f, "expected {} records, found {}", expected, actual)
            }
            LoadError::Json(e) => write!(f, "invalid JSON dataset: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::InvalidTerm { source, .. } => Some(source),
            LoadError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Json(e)
    }
}

/// Parse one record line: `<weight><ws><query>`.
fn parse_record(line_no: usize, line: &str) -> Result<Term, LoadError> {
    let line = line.trim_start();
    let split = line.find(char::is_whitespace).unwrap_or(line.len());
    let (weight_text, rest) = line.split_at(split);

    let weight: i64 = weight_text
        .parse()
        .map_err(|_| LoadError::MalformedRecord {
            line: line_no,
            reason: format!("invalid weight '{}'", weight_text),
        })?;

    Term::try_new(rest.trim(), weight).map_err(|source| LoadError::InvalidTerm {
        line: line_no,
        source,
    })
}

/// Read the text format from any buffered reader.
pub fn read_terms<R: BufRead>(reader: R) -> Result<Vec<Term>, LoadError> {
    let mut lines = reader.lines().enumerate();

    // First non-blank line is the record count
    let expected = loop {
        let Some((idx, line)) = lines.next() else {
            return Err(LoadError::MissingHeader);
        };
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        break text.parse::<usize>().map_err(|_| LoadError::InvalidHeader {
            line: idx + 1,
            text: text.to_string(),
        })?;
    };

    let mut terms = Vec::with_capacity(expected);
    for (idx, line) in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        terms.push(parse_record(idx + 1, &line)?);
    }

    if terms.len() != expected {
        return Err(LoadError::CountMismatch {
            expected,
            actual: terms.len(),
        });
    }

    tracing::debug!(records = terms.len(), "parsed text dataset");
    Ok(terms)
}

/// Parse the text format from a string.
pub fn parse_terms(input: &str) -> Result<Vec<Term>, LoadError> {
    read_terms(input.as_bytes())
}

/// Parse the JSON format from a string.
pub fn parse_json(input: &str) -> Result<Vec<Term>, LoadError> {
    let terms: Vec<Term> = serde_json::from_str(input)?;
    tracing::debug!(records = terms.len(), "parsed JSON dataset");
    Ok(terms)
}

/// Load a dataset file, picking the format from its extension.
///
/// `.json` files use the JSON format; anything else is read as text.
pub fn load_path(path: impl AsRef<Path>) -> Result<Vec<Term>, LoadError> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    tracing::debug!(path = %path.display(), json = is_json, "loading dataset");
    if is_json {
        let text = std::fs::read_to_string(path)?;
        parse_json(&text)
    } else {
        read_terms(BufReader::new(File::open(path)?))
    }
}
