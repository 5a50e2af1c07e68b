//! PlantUML object-diagram serialization
//!
//! Names are emitted verbatim. A name containing `_`, `"` or other PlantUML
//! syntax produces ambiguous or broken output.

use crate::models::{FamilyGraph, Person, PersonId};

pub const START_MARKER: &str = "@startuml";
pub const END_MARKER: &str = "@enduml";

/// `object "First Last" as First_Last`, newline-terminated
#[must_use]
pub fn node_line(person: &Person) -> String {
    format!(
        "object \"{} {}\" as {}\n",
        person.first_name,
        person.last_name,
        person.node_id()
    )
}

/// `ParentId --> ChildId`, newline-terminated
#[must_use]
pub fn edge_line(parent: &Person, child: &Person) -> String {
    format!("{} --> {}\n", parent.node_id(), child.node_id())
}

/// Render a person and their resolved parents with no styling
#[must_use]
pub fn render_person(graph: &FamilyGraph, id: PersonId) -> String {
    render_person_with(graph, id, str::to_owned, |_| true)
}

/// Render a person and their resolved parents, styling every node line
#[must_use]
pub fn render_person_styled<F>(graph: &FamilyGraph, id: PersonId, post_process: F) -> String
where
    F: Fn(&str) -> String,
{
    render_person_with(graph, id, post_process, |_| true)
}

/// Render a person's immediate parent subgraph
///
/// The person's own node line is written only when `include` accepts them,
/// and is then passed through `post_process`. Each parent's node line is
/// always written, transformed only when `include` accepts the parent, and
/// is followed by the parent-to-child edge.
///
/// An unknown `id` renders an empty diagram.
#[must_use]
pub fn render_person_with<F, P>(
    graph: &FamilyGraph,
    id: PersonId,
    post_process: F,
    include: P,
) -> String
where
    F: Fn(&str) -> String,
    P: Fn(&Person) -> bool,
{
    let mut out = String::new();
    out.push_str(START_MARKER);
    out.push('\n');

    if let Some(person) = graph.person(id) {
        if include(person) {
            out.push_str(&post_process(&node_line(person)));
        }

        for parent in graph.parents_of(id) {
            let line = node_line(parent);
            if include(parent) {
                out.push_str(&post_process(&line));
            } else {
                out.push_str(&line);
            }
            out.push_str(&edge_line(parent, person));
        }
    }

    out.push_str(END_MARKER);
    out.push('\n');
    out
}

/// Render the selected persons and the edges to their resolved parents
///
/// Each selected person contributes a node line followed by one edge line per
/// parent. Parents outside the selection still get their edge.
#[must_use]
pub fn render_collection<I>(graph: &FamilyGraph, ids: I) -> String
where
    I: IntoIterator<Item = PersonId>,
{
    let mut out = format!("{START_MARKER}\n");

    for id in ids {
        let Some(person) = graph.person(id) else {
            log::warn!("Skipping unknown person id {} while rendering", id.0);
            continue;
        };

        out.push_str(&format!(
            "object \"{}\" as {}\n",
            person.full_name(),
            person.node_id()
        ));
        for parent in graph.parents_of(id) {
            out.push_str(&format!("{} --> {}\n", parent.node_id(), person.node_id()));
        }
    }

    out.push_str(END_MARKER);
    out.push('\n');
    out
}

/// Render every person in the graph
#[must_use]
pub fn render_graph(graph: &FamilyGraph) -> String {
    render_collection(graph, graph.ids())
}
