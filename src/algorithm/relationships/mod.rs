//! Parent relationship resolution
//!
//! Children reference parents by first name only. Every person in the loaded
//! set whose first name matches either reference becomes a candidate, the
//! child included, and each candidate must pass [`validate_parent`]. The first
//! implausible match aborts resolution.

pub mod validation;

pub use validation::validate_parent;

use crate::config::LoaderConfig;
use crate::error::Result;
use crate::models::{FamilyGraph, ParentIds, Person, PersonId};

/// Resolve parents using the default configuration
pub fn resolve(people: Vec<Person>) -> Result<FamilyGraph> {
    resolve_with(people, &LoaderConfig::default())
}

/// Match every child to its candidate parents and build the family graph
///
/// Parents are recorded in the order they appear in `people`.
///
/// # Errors
/// Returns `ParentingAge` for the first candidate that is too young or
/// already dead at the child's birth.
pub fn resolve_with(people: Vec<Person>, config: &LoaderConfig) -> Result<FamilyGraph> {
    let parents = people
        .iter()
        .map(|child| match_parents(child, &people, config.parenting_age_years))
        .collect::<Result<Vec<_>>>()?;

    let graph = FamilyGraph::with_edges(people, parents);

    log::debug!(
        "Resolved {} parent edges across {} persons",
        graph.edge_count(),
        graph.len()
    );
    Ok(graph)
}

fn match_parents(child: &Person, people: &[Person], min_age_years: u32) -> Result<ParentIds> {
    let mut parents = ParentIds::new();

    for (idx, candidate) in people.iter().enumerate() {
        if !child.references_as_parent(candidate) {
            continue;
        }
        validate_parent(candidate, child, min_age_years)?;
        parents.push(PersonId(idx));
    }

    Ok(parents)
}
