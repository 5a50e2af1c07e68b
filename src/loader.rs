//! Record file loading utilities
//!
//! Loading parses every record in order and rejects the first full name that
//! repeats within the same source. Relationship resolution is a separate step
//! (see [`crate::algorithm::relationships`]).

use std::io::{BufRead, BufReader};
use std::path::Path;

use rustc_hash::FxHashSet;

use crate::algorithm::relationships::resolve_with;
use crate::config::LoaderConfig;
use crate::error::util::safe_open_file;
use crate::error::{FamilyTreeError, Result};
use crate::models::{FamilyGraph, Person};
use crate::reader::parse_record_with;

/// Tracks full-name keys accepted so far in one load
#[derive(Debug, Default)]
pub struct DuplicateGuard {
    seen: FxHashSet<(String, String)>,
}

impl DuplicateGuard {
    /// Create an empty guard
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept a person, or fail if their full name was already accepted
    pub fn admit(&mut self, person: &Person) -> Result<()> {
        let key = (person.first_name.clone(), person.last_name.clone());
        if self.seen.contains(&key) {
            return Err(FamilyTreeError::AmbiguousPerson {
                name: person.full_name(),
            });
        }
        self.seen.insert(key);
        Ok(())
    }

    /// Number of accepted persons
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Whether nobody has been accepted yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Parse a sequence of records, rejecting duplicate full names
///
/// Returns one person per record, in record order. The first failing record
/// aborts the whole load.
pub fn load_records<I, S>(records: I, config: &LoaderConfig) -> Result<Vec<Person>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    load_lines(records.into_iter().map(Ok), config)
}

/// Load persons from in-memory text, one record per line
pub fn load_str(source: &str, config: &LoaderConfig) -> Result<Vec<Person>> {
    load_records(source.lines(), config)
}

/// Load persons from a buffered reader, one record per line
pub fn load_reader<R: BufRead>(reader: R, config: &LoaderConfig) -> Result<Vec<Person>> {
    load_lines(
        reader
            .lines()
            .map(|line| line.map_err(|e| FamilyTreeError::io("<reader>", e))),
        config,
    )
}

fn load_lines<I, S>(lines: I, config: &LoaderConfig) -> Result<Vec<Person>>
where
    I: Iterator<Item = Result<S>>,
    S: AsRef<str>,
{
    let mut guard = DuplicateGuard::new();
    let mut people = Vec::new();

    for (idx, line) in lines.enumerate() {
        let line = line?;
        let record = line.as_ref();
        if config.skip_blank_lines && record.trim().is_empty() {
            log::debug!("Skipping blank line {}", idx + 1);
            continue;
        }

        let person = parse_record_with(record, config).inspect_err(|e| {
            log::debug!("Rejected record on line {}: {e}", idx + 1);
        })?;
        guard.admit(&person)?;
        people.push(person);
    }

    log::debug!("Parsed {} records", people.len());
    Ok(people)
}

/// Load persons from a record file
pub fn load_file(path: &Path, config: &LoaderConfig) -> Result<Vec<Person>> {
    let file = safe_open_file(path, "reading genealogical records")?;

    let people = load_reader(BufReader::new(file), config).map_err(|e| match e {
        FamilyTreeError::Io { source, .. } => FamilyTreeError::io(path, source),
        other => other,
    })?;

    log::info!("Loaded {} persons from {}", people.len(), path.display());
    Ok(people)
}

/// Load a record file and resolve parent relationships in one step
pub fn load_family_graph(path: &Path, config: &LoaderConfig) -> Result<FamilyGraph> {
    let people = load_file(path, config)?;
    resolve_with(people, config)
}
