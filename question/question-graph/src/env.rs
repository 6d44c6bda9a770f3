use question_ontology::OntologyMappings;
use tracing::trace;

use crate::node::Node;

/// Allocates fresh variable nodes while compiling one question.
///
/// Variable ids increase strictly and are never reused, so an environment
/// must not be shared between questions compiled at the same time.
#[derive(Default, Debug)]
pub struct Environment {
    next_variable: usize,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(first_variable: usize) -> Self {
        Self {
            next_variable: first_variable,
        }
    }

    pub fn new_node<M: OntologyMappings>(&mut self) -> Node<M> {
        let id = self.next_variable;
        self.next_variable += 1;
        trace!(id, "new variable");
        Node::variable(id)
    }

    /// The id the next allocated variable will get
    pub fn next_variable(&self) -> usize {
        self.next_variable
    }
}
