use std::collections::VecDeque;

use fnv::FnvHashSet;
use indexmap::IndexSet;
use question_ontology::{Class, Ontology, OntologyMappings, Relation};
use tracing::trace;

use crate::error::IndexError;

/// Computes the relations visible on a class: its own, then those of every
/// ancestor, nearest first.
pub struct RelationResolver<'o, M: OntologyMappings> {
    ontology: &'o Ontology<M>,
}

impl<'o, M: OntologyMappings> RelationResolver<'o, M> {
    pub fn new(ontology: &'o Ontology<M>) -> Self {
        Self { ontology }
    }

    /// Relations reachable through any superclass path, each reported once.
    /// Cycles in the superclass graph are tolerated.
    pub fn relations(&self, class: &'o Class<M>) -> Result<IndexSet<Relation>, IndexError> {
        let mut relations = IndexSet::new();
        let mut visited = FnvHashSet::default();
        let mut queue = VecDeque::from([class]);
        visited.insert(class.identifier.clone());

        while let Some(current) = queue.pop_front() {
            relations.extend(current.relations.iter().cloned());

            for identifier in &current.superclasses {
                if !visited.insert(identifier.clone()) {
                    continue;
                }
                let superclass = self
                    .ontology
                    .class(identifier)
                    .ok_or_else(|| IndexError::InvalidClassIdentifier(identifier.clone()))?;
                queue.push_back(superclass);
            }
        }

        trace!(
            class = %class.identifier,
            relations = relations.len(),
            ancestors = visited.len() - 1,
            "resolved relations"
        );

        Ok(relations)
    }
}
