//! Error handling for the family tree loader.

pub mod util;

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use chrono::NaiveDate;

/// Why a candidate parent was rejected for a child
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentingViolation {
    /// The parent was younger than the parenting-age threshold at the child's birth
    TooYoung {
        /// Threshold in years that was not met
        min_age_years: u32,
    },
    /// The parent had already died when the child was born
    DeceasedBeforeBirth,
}

impl std::fmt::Display for ParentingViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooYoung { min_age_years } => {
                write!(f, "is younger than {min_age_years} years")
            }
            Self::DeceasedBeforeBirth => write!(f, "is dead"),
        }
    }
}

/// Specialized error type for loading, resolving and rendering family trees
#[derive(Debug, thiserror::Error)]
pub enum FamilyTreeError {
    /// A record is missing required fields or carries an unparseable value
    #[error("Malformed record '{record}': {reason}")]
    MalformedRecord {
        /// The offending record text
        record: String,
        /// What was wrong with it
        reason: String,
    },

    /// A death date precedes the birth date
    #[error("Death date {death} is before birth date {birth} for {name}")]
    NegativeLifespan {
        /// Display name of the person
        name: String,
        /// Recorded birth date
        birth: NaiveDate,
        /// Recorded death date
        death: NaiveDate,
    },

    /// The same full name appeared twice within one load
    #[error("Duplicate name found: {name}")]
    AmbiguousPerson {
        /// Display name shared by both records
        name: String,
    },

    /// A matched parent is implausible for the child
    #[error("Parent {parent} {violation} when child {child} is born")]
    ParentingAge {
        /// Display name of the parent
        parent: String,
        /// Display name of the child
        child: String,
        /// The rule that was broken
        violation: ParentingViolation,
    },

    /// Error opening, reading or writing a file
    #[error("IO error at {}: {}", .path.display(), .source)]
    Io {
        /// Path involved in the failed operation
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Snapshot could not be encoded or decoded
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// The external diagram renderer exited unsuccessfully
    #[error("Renderer '{program}' failed with {status}")]
    Renderer {
        /// Program that was invoked
        program: String,
        /// Exit status it reported
        status: ExitStatus,
    },
}

impl FamilyTreeError {
    /// Create a malformed-record error
    pub fn malformed(record: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            record: record.into(),
            reason: reason.into(),
        }
    }

    /// Attach a path to an IO error
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for family tree operations
pub type Result<T> = std::result::Result<T, FamilyTreeError>;
