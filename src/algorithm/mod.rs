//! Algorithms over loaded persons
//!
//! Relationship resolution builds the family graph; queries and filters are
//! read-only views over persons.

pub mod filters;
pub mod query;
pub mod relationships;
