use arcstr::ArcStr;
use question_ontology::{ClassRef, OntologyMappings, PropertyRef};
use serde::Serialize;

use crate::node::Node;

#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "camelCase", bound = "")]
pub enum Edge<M: OntologyMappings> {
    /// The owning node has `property` pointing at the node
    Outgoing(PropertyRef<M>, Node<M>),
    /// The node has `property` pointing at the owning node
    Incoming(Node<M>, PropertyRef<M>),
    /// All edges must hold
    Conjunction(Vec<Edge<M>>),
    /// At least one edge holds
    Disjunction(Vec<Edge<M>>),
}

impl<M: OntologyMappings> Edge<M> {
    pub fn outgoing(property: PropertyRef<M>, node: Node<M>) -> Self {
        Self::Outgoing(property, node)
    }

    pub fn incoming(node: Node<M>, property: PropertyRef<M>) -> Self {
        Self::Incoming(node, property)
    }

    pub fn is_a(instance_property: PropertyRef<M>, class: ClassRef<M>) -> Self {
        Self::outgoing(instance_property, Node::class(class))
    }

    pub fn has_label(label_property: PropertyRef<M>, label: impl Into<ArcStr>) -> Self {
        Self::outgoing(label_property, Node::string(label))
    }

    /// Conjunction of all edges. A single edge is returned as is, `None` if empty.
    pub fn all_of(edges: impl IntoIterator<Item = Self>) -> Option<Self> {
        let mut output = vec![];
        for edge in edges {
            match edge {
                Self::Conjunction(mut inner) => output.append(&mut inner),
                edge => output.push(edge),
            }
        }
        Self::collapse(output, Self::Conjunction)
    }

    /// Disjunction of all edges. A single edge is returned as is, `None` if empty.
    pub fn any_of(edges: impl IntoIterator<Item = Self>) -> Option<Self> {
        let mut output = vec![];
        for edge in edges {
            match edge {
                Self::Disjunction(mut inner) => output.append(&mut inner),
                edge => output.push(edge),
            }
        }
        Self::collapse(output, Self::Disjunction)
    }

    pub fn and(self, other: Self) -> Self {
        match Self::all_of([self, other]) {
            Some(edge) => edge,
            None => Self::Conjunction(vec![]),
        }
    }

    pub fn or(self, other: Self) -> Self {
        match Self::any_of([self, other]) {
            Some(edge) => edge,
            None => Self::Disjunction(vec![]),
        }
    }

    fn collapse(mut edges: Vec<Self>, combine: fn(Vec<Self>) -> Self) -> Option<Self> {
        match edges.len() {
            0 => None,
            1 => edges.pop(),
            _ => Some(combine(edges)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use question_ontology::NoMappings;
    use serde_json::json;

    type Edge = super::Edge<NoMappings>;

    fn property(identifier: &str) -> PropertyRef<NoMappings> {
        PropertyRef {
            identifier: identifier.into(),
            mapping: None,
        }
    }

    fn edge(identifier: &str, id: usize) -> Edge {
        Edge::outgoing(property(identifier), Node::variable(id))
    }

    #[test]
    fn single_alternative_is_not_wrapped() {
        assert_eq!(Edge::any_of([edge("died", 0)]), Some(edge("died", 0)));
        assert_eq!(Edge::all_of([]), None);
    }

    #[test]
    fn nested_combinations_are_flattened() {
        let disjunction = edge("a", 0).or(edge("b", 1)).or(edge("c", 2));
        assert_eq!(
            disjunction,
            Edge::Disjunction(vec![edge("a", 0), edge("b", 1), edge("c", 2)])
        );

        let conjunction = edge("a", 0).and(disjunction.clone()).and(edge("d", 3));
        assert_eq!(
            conjunction,
            Edge::Conjunction(vec![edge("a", 0), disjunction, edge("d", 3)])
        );
    }

    #[test]
    fn edge_encoding() {
        assert_eq!(
            serde_json::to_value(Edge::incoming(Node::variable(1), property("hasChild"))).unwrap(),
            json!({
                "incoming": [
                    { "label": { "type": "variable", "id": 1 } },
                    { "type": "property", "name": "hasChild" }
                ]
            })
        );
    }
}
