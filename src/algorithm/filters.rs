//! Person filtering criteria
//!
//! Filters select persons for queries and decide which diagram nodes receive
//! styling.

use chrono::NaiveDate;

use crate::models::Person;

/// Defines a criterion for filtering entities
pub trait FilterCriteria<T> {
    /// Determine if an entity meets the filter criteria
    fn meets_criteria(&self, entity: &T) -> bool;
}

/// A filter that can be applied to a person
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonFilter {
    /// Display name contains the given text
    NameContains(String),
    /// Exact first name
    FirstName(String),
    /// Exact last name
    LastName(String),
    /// No recorded death date
    Living,
    /// Has a recorded death date
    Deceased,
    /// Born within an inclusive date range
    BornBetween {
        /// Earliest birth date, if bounded
        from: Option<NaiveDate>,
        /// Latest birth date, if bounded
        to: Option<NaiveDate>,
    },
    /// Alive on the given date
    AliveAt(NaiveDate),
    /// Negation of the inner filter
    Not(Box<PersonFilter>),
    /// Combined filter that requires all criteria to be met
    All(Vec<PersonFilter>),
    /// Combined filter that requires any criterion to be met
    Any(Vec<PersonFilter>),
}

impl FilterCriteria<Person> for PersonFilter {
    fn meets_criteria(&self, person: &Person) -> bool {
        match self {
            Self::NameContains(text) => person.full_name().contains(text.as_str()),
            Self::FirstName(name) => person.first_name == *name,
            Self::LastName(name) => person.last_name == *name,
            Self::Living => person.is_alive(),
            Self::Deceased => !person.is_alive(),
            Self::BornBetween { from, to } => {
                from.is_none_or(|from| person.birth_date >= from)
                    && to.is_none_or(|to| person.birth_date <= to)
            }
            Self::AliveAt(date) => person.was_alive_at(date),
            Self::Not(inner) => !inner.meets_criteria(person),
            Self::All(filters) => filters.iter().all(|f| f.meets_criteria(person)),
            Self::Any(filters) => filters.iter().any(|f| f.meets_criteria(person)),
        }
    }
}

impl PersonFilter {
    /// Borrow this filter as a plain predicate, e.g. for the diagram renderer
    pub fn as_predicate(&self) -> impl Fn(&Person) -> bool + '_ {
        move |person: &Person| self.meets_criteria(person)
    }

    /// Keep the persons that meet this filter, in input order
    #[must_use]
    pub fn apply<'a, P>(&self, people: &'a [P]) -> Vec<&'a Person>
    where
        P: AsRef<Person>,
    {
        people
            .iter()
            .map(AsRef::as_ref)
            .filter(|person| self.meets_criteria(person))
            .collect()
    }
}
