//! Core Person entity definition

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// A person as described by one genealogical record
///
/// Persons are immutable once parsed. Resolved parent links live in
/// [`FamilyGraph`](crate::models::FamilyGraph), not on the person itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Birth date
    pub birth_date: NaiveDate,
    /// Death date, if applicable
    pub death_date: Option<NaiveDate>,
    /// First name of the first referenced parent (empty if none)
    pub parent1_name: String,
    /// First name of the second referenced parent (empty if none)
    pub parent2_name: String,
}

impl Person {
    /// Create a new Person without parent references
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: NaiveDate,
        death_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date,
            death_date,
            parent1_name: String::new(),
            parent2_name: String::new(),
        }
    }

    /// Set the referenced parent first names
    #[must_use]
    pub fn with_parents(mut self, parent1: impl Into<String>, parent2: impl Into<String>) -> Self {
        self.parent1_name = parent1.into();
        self.parent2_name = parent2.into();
        self
    }

    /// `"First Last"`, used for messages, labels and substring search
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// `First_Last`, the diagram node identifier
    #[must_use]
    pub fn node_id(&self) -> String {
        format!("{}_{}", self.first_name, self.last_name)
    }

    /// Whether this person has no recorded death date
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.death_date.is_none()
    }

    /// Whether `candidate` matches one of this person's parent references.
    ///
    /// Only the first name is compared.
    #[must_use]
    pub fn references_as_parent(&self, candidate: &Self) -> bool {
        candidate.first_name == self.parent1_name || candidate.first_name == self.parent2_name
    }

    /// Lifespan in calendar years (`death.year - birth.year`), if deceased
    #[must_use]
    pub fn lifespan_years(&self) -> Option<i32> {
        self.death_date
            .map(|death| death.year() - self.birth_date.year())
    }

    /// Check if the person was alive at a specific date
    ///
    /// A person is alive on their death date.
    #[must_use]
    pub fn was_alive_at(&self, date: &NaiveDate) -> bool {
        self.birth_date <= *date && self.death_date.is_none_or(|death| death >= *date)
    }

    /// The date this person turns `years` old.
    ///
    /// A 29 February birth date maps to 28 February in non-leap years.
    #[must_use]
    pub fn reaches_age_on(&self, years: u32) -> Option<NaiveDate> {
        self.birth_date
            .checked_add_months(Months::new(years.saturating_mul(12)))
    }
}

impl AsRef<Person> for Person {
    fn as_ref(&self) -> &Person {
        self
    }
}
