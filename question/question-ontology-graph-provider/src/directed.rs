use question_graph::{Edge, Node};
use question_ontology::{Direction, OntologyMappings, PropertyRef};

/// A property together with the direction in which it is traversed.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct DirectedProperty<M: OntologyMappings> {
    pub property: PropertyRef<M>,
    pub direction: Direction,
}

impl<M: OntologyMappings> DirectedProperty<M> {
    pub fn new(property: PropertyRef<M>, direction: Direction) -> Self {
        Self {
            property,
            direction,
        }
    }

    pub fn edge(&self, node: Node<M>) -> Edge<M> {
        match self.direction {
            Direction::Outgoing => Edge::outgoing(self.property.clone(), node),
            Direction::Incoming => Edge::incoming(node, self.property.clone()),
        }
    }
}
