//! Resolved family graph
//!
//! Persons are kept in an arena in record order; parent links are stored as a
//! parallel edge table of arena indices.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::models::Person;

/// Index of a person within a [`FamilyGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PersonId(pub usize);

/// Ordered parent indices for one child
pub type ParentIds = SmallVec<[PersonId; 2]>;

/// A loaded set of persons together with their resolved parent edges
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GraphParts")]
pub struct FamilyGraph {
    people: Vec<Person>,
    parents: Vec<ParentIds>,
}

/// Unchecked serialized form of a [`FamilyGraph`]
#[derive(Deserialize)]
struct GraphParts {
    people: Vec<Person>,
    parents: Vec<ParentIds>,
}

impl TryFrom<GraphParts> for FamilyGraph {
    type Error = String;

    fn try_from(parts: GraphParts) -> Result<Self, Self::Error> {
        let person_count = parts.people.len();
        Self::from_parts(parts.people, parts.parents).ok_or_else(|| {
            format!("parent edge table does not match the {person_count} persons in the graph")
        })
    }
}

impl FamilyGraph {
    /// Create a graph with no edges
    #[must_use]
    pub fn unresolved(people: Vec<Person>) -> Self {
        let parents = vec![ParentIds::new(); people.len()];
        Self { people, parents }
    }

    /// Assemble a graph from an arena and its edge table.
    ///
    /// Returns `None` if the table length differs from the arena or an edge
    /// points outside it.
    #[must_use]
    pub fn from_parts(people: Vec<Person>, parents: Vec<ParentIds>) -> Option<Self> {
        let in_bounds = parents.len() == people.len()
            && parents
                .iter()
                .flatten()
                .all(|parent| parent.0 < people.len());
        in_bounds.then_some(Self { people, parents })
    }

    /// Assemble a graph whose edge table was built against `people`
    pub(crate) fn with_edges(people: Vec<Person>, parents: Vec<ParentIds>) -> Self {
        debug_assert_eq!(people.len(), parents.len());
        Self { people, parents }
    }

    /// All persons in record order
    #[must_use]
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Number of persons
    #[must_use]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Whether the graph holds no persons
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Get a person by id
    #[must_use]
    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.people.get(id.0)
    }

    /// Ids of every person, in record order
    pub fn ids(&self) -> impl Iterator<Item = PersonId> + '_ {
        (0..self.people.len()).map(PersonId)
    }

    /// Iterate over `(id, person)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (PersonId, &Person)> {
        self.people
            .iter()
            .enumerate()
            .map(|(idx, person)| (PersonId(idx), person))
    }

    /// Look up a person by full name
    #[must_use]
    pub fn find(&self, first_name: &str, last_name: &str) -> Option<PersonId> {
        self.people
            .iter()
            .position(|p| p.first_name == first_name && p.last_name == last_name)
            .map(PersonId)
    }

    /// Look up a person by `"First Last"` display name
    #[must_use]
    pub fn find_by_full_name(&self, full_name: &str) -> Option<PersonId> {
        self.people
            .iter()
            .position(|p| p.full_name() == full_name)
            .map(PersonId)
    }

    /// Resolved parent ids of a person, in resolution order
    #[must_use]
    pub fn parent_ids(&self, id: PersonId) -> &[PersonId] {
        self.parents
            .get(id.0)
            .map(SmallVec::as_slice)
            .unwrap_or_default()
    }

    /// Resolved parents of a person, in resolution order
    pub fn parents_of(&self, id: PersonId) -> impl Iterator<Item = &Person> {
        self.parent_ids(id)
            .iter()
            .filter_map(|parent| self.person(*parent))
    }

    /// Children whose resolved parents include `id`
    pub fn children_of(&self, id: PersonId) -> impl Iterator<Item = PersonId> + '_ {
        self.parents
            .iter()
            .enumerate()
            .filter(move |(_, ids)| ids.contains(&id))
            .map(|(idx, _)| PersonId(idx))
    }

    /// Total number of parent edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.parents.iter().map(SmallVec::len).sum()
    }

    /// Consume the graph, returning the persons in record order
    #[must_use]
    pub fn into_people(self) -> Vec<Person> {
        self.people
    }
}
