//! A Rust library for loading genealogical records, reconstructing parent
//! relationships and rendering them as PlantUML object diagrams.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod reader;
pub mod render;
pub mod snapshot;

// Re-export the most common types for easier use
// Core types
pub use config::{DiagramConfig, LoaderConfig};
pub use error::{FamilyTreeError, ParentingViolation, Result};
pub use models::{FamilyGraph, Person, PersonId};

// Loading and resolution
pub use algorithm::relationships::{resolve, resolve_with};
pub use loader::{load_family_graph, load_file, load_reader, load_records, load_str};
pub use reader::parse_record;

// Queries and filtering
pub use algorithm::filters::{FilterCriteria, PersonFilter};
pub use algorithm::query::{
    filter_by_substring, find_oldest_living_person, sort_by_birth_date, sort_deceased_by_lifespan,
};

// Rendering
pub use render::{
    DiagramRunner, render_collection, render_graph, render_person, render_person_styled,
    render_person_with,
};
