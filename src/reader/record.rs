//! Single-record parsing
//!
//! Layout: `First,Last,Birth,Death,Parent1,Parent2`. Fields are trimmed, the
//! death date may be empty and the trailing fields may be omitted entirely.
//! Fields after the sixth are ignored. Delimiters cannot be escaped.

use chrono::NaiveDate;

use crate::config::{LoaderConfig, RECORD_DATE_FORMAT};
use crate::error::{FamilyTreeError, Result};
use crate::models::Person;

const FIELD_DELIMITER: char = ',';
const REQUIRED_FIELDS: usize = 3;

/// The trimmed text fields of one record, before type conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordFields<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub birth_date: &'a str,
    pub death_date: &'a str,
    pub parent1_name: &'a str,
    pub parent2_name: &'a str,
}

impl<'a> RecordFields<'a> {
    /// Split a record into its fields, defaulting missing trailing fields to empty.
    /// Anything past the parent names is dropped.
    pub fn split(record: &'a str) -> Result<Self> {
        let fields: Vec<&str> = record.split(FIELD_DELIMITER).map(str::trim).collect();

        if fields.len() < REQUIRED_FIELDS {
            return Err(FamilyTreeError::malformed(
                record,
                format!(
                    "expected at least {REQUIRED_FIELDS} fields, found {}",
                    fields.len()
                ),
            ));
        }

        let field = |idx: usize| fields.get(idx).copied().unwrap_or_default();

        Ok(Self {
            first_name: field(0),
            last_name: field(1),
            birth_date: field(2),
            death_date: field(3),
            parent1_name: field(4),
            parent2_name: field(5),
        })
    }
}

/// Parse one record using the default configuration
pub fn parse_record(record: &str) -> Result<Person> {
    parse_record_with(record, &LoaderConfig::default())
}

/// Parse one record into a [`Person`]
///
/// # Errors
/// * `MalformedRecord` - missing fields, empty names or a bad date
/// * `NegativeLifespan` - the death date precedes the birth date
pub fn parse_record_with(record: &str, config: &LoaderConfig) -> Result<Person> {
    let fields = RecordFields::split(record)?;

    if fields.first_name.is_empty() {
        return Err(FamilyTreeError::malformed(record, "first name is empty"));
    }
    if fields.last_name.is_empty() {
        return Err(FamilyTreeError::malformed(record, "last name is empty"));
    }

    let birth_date = parse_date(record, "birth date", fields.birth_date, config)?;
    let death_date = if fields.death_date.is_empty() {
        None
    } else {
        Some(parse_date(record, "death date", fields.death_date, config)?)
    };

    if let Some(death) = death_date {
        if death < birth_date {
            return Err(FamilyTreeError::NegativeLifespan {
                name: format!("{} {}", fields.first_name, fields.last_name),
                birth: birth_date,
                death,
            });
        }
    }

    Ok(
        Person::new(fields.first_name, fields.last_name, birth_date, death_date)
            .with_parents(fields.parent1_name, fields.parent2_name),
    )
}

fn parse_date(record: &str, what: &str, value: &str, config: &LoaderConfig) -> Result<NaiveDate> {
    if value.is_empty() {
        return Err(FamilyTreeError::malformed(record, format!("{what} is empty")));
    }
    if config.date_format == RECORD_DATE_FORMAT && !is_iso_date_shape(value) {
        return Err(FamilyTreeError::malformed(
            record,
            format!("{what} '{value}' is not a YYYY-MM-DD date"),
        ));
    }

    NaiveDate::parse_from_str(value, &config.date_format).map_err(|e| {
        FamilyTreeError::malformed(
            record,
            format!("{what} '{value}' does not match {}: {e}", config.date_format),
        )
    })
}

/// Exactly `YYYY-MM-DD`, zero-padded and unsigned
fn is_iso_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, b)| match idx {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
