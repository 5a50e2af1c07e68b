//! Domain models for genealogical records
//!
//! `Person` is the immutable record entity; `FamilyGraph` holds a loaded set
//! of persons together with their resolved parent edges.

pub mod graph;
pub mod person;

// Re-export commonly used types
pub use graph::{FamilyGraph, ParentIds, PersonId};
pub use person::Person;
