//! Read-only queries over loaded persons
//!
//! All helpers accept anything that borrows as a [`Person`], so they work on
//! `Vec<Person>`, `Vec<&Person>` and [`FamilyGraph::people`] alike.
//!
//! [`FamilyGraph::people`]: crate::models::FamilyGraph::people

use std::cmp::Reverse;

use itertools::Itertools;

use crate::models::Person;

/// Keep persons whose `"First Last"` name contains `substring`, in input order
#[must_use]
pub fn filter_by_substring<'a, P>(people: &'a [P], substring: &str) -> Vec<&'a Person>
where
    P: AsRef<Person>,
{
    people
        .iter()
        .map(AsRef::as_ref)
        .filter(|person| person.full_name().contains(substring))
        .collect()
}

/// Stable ascending sort by full birth date
#[must_use]
pub fn sort_by_birth_date<P>(mut people: Vec<P>) -> Vec<P>
where
    P: AsRef<Person>,
{
    people.sort_by_key(|person| person.as_ref().birth_date);
    people
}

/// Deceased persons ordered by calendar-year lifespan, longest first
///
/// Lifespan is `death.year - birth.year`, so two persons whose lifespans
/// differ by less than a year can compare equal; ties keep input order.
#[must_use]
pub fn sort_deceased_by_lifespan<P>(people: &[P]) -> Vec<&Person>
where
    P: AsRef<Person>,
{
    people
        .iter()
        .map(AsRef::as_ref)
        .filter_map(|person| person.lifespan_years().map(|years| (years, person)))
        .sorted_by_key(|(years, _)| Reverse(*years))
        .map(|(_, person)| person)
        .collect()
}

/// The living person with the earliest birth date
///
/// Returns the first such person on ties, and `None` if nobody is alive.
#[must_use]
pub fn find_oldest_living_person<P>(people: &[P]) -> Option<&Person>
where
    P: AsRef<Person>,
{
    people
        .iter()
        .map(AsRef::as_ref)
        .filter(|person| person.is_alive())
        .min_by_key(|person| person.birth_date)
}
