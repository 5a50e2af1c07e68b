//! Diagram rendering
//!
//! Serializes family graphs to PlantUML text and dispatches that text to the
//! external renderer.

pub mod plantuml;
pub mod runner;
pub mod style;

pub use plantuml::{
    render_collection, render_graph, render_person, render_person_styled, render_person_with,
};
pub use runner::{CommandRunner, DiagramRunner, SystemRunner, write_diagram};
