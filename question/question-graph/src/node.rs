use arcstr::ArcStr;
use ordered_float::OrderedFloat;
use question_ontology::{ClassRef, Comparison, OntologyMappings, Order, PropertyRef};
use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::edge::Edge;

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum NodeLabel<M: OntologyMappings> {
    /// Placeholder allocated by an [crate::Environment]
    Variable(usize),
    /// Class membership target of an "is-a" edge
    Class(ClassRef<M>),
    String(ArcStr),
    Number(OrderedFloat<f64>, Option<ArcStr>),
}

/// Constrains the value of a node by comparing it with another node.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(bound = "")]
pub struct Filter<M: OntologyMappings> {
    pub comparison: Comparison,
    pub value: Node<M>,
}

#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(bound = "")]
pub struct Node<M: OntologyMappings> {
    pub label: NodeLabel<M>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge: Option<Box<Edge<M>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Box<Filter<M>>>,
    /// Sort directive, used for superlatives
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

impl<M: OntologyMappings> Node<M> {
    pub fn new(label: NodeLabel<M>) -> Self {
        Self {
            label,
            edge: None,
            filter: None,
            order: None,
        }
    }

    pub fn variable(id: usize) -> Self {
        Self::new(NodeLabel::Variable(id))
    }

    pub fn class(class: ClassRef<M>) -> Self {
        Self::new(NodeLabel::Class(class))
    }

    pub fn string(value: impl Into<ArcStr>) -> Self {
        Self::new(NodeLabel::String(value.into()))
    }

    pub fn number(value: f64, unit: Option<ArcStr>) -> Self {
        Self::new(NodeLabel::Number(OrderedFloat(value), unit))
    }

    pub fn is_number(&self) -> bool {
        matches!(self.label, NodeLabel::Number(..))
    }

    /// Attach an edge, conjoined with any edge already attached
    pub fn and(mut self, edge: Edge<M>) -> Self {
        let edge = match self.edge.take() {
            Some(existing) => existing.and(edge),
            None => edge,
        };
        self.edge = Some(Box::new(edge));
        self
    }

    pub fn outgoing(self, property: PropertyRef<M>, node: Node<M>) -> Self {
        self.and(Edge::outgoing(property, node))
    }

    pub fn incoming(self, node: Node<M>, property: PropertyRef<M>) -> Self {
        self.and(Edge::incoming(node, property))
    }

    pub fn filtered(mut self, comparison: Comparison, value: Node<M>) -> Self {
        self.filter = Some(Box::new(Filter { comparison, value }));
        self
    }

    pub fn greater_than(self, value: Node<M>) -> Self {
        self.filtered(Comparison::GreaterThan, value)
    }

    pub fn less_than(self, value: Node<M>) -> Self {
        self.filtered(Comparison::LessThan, value)
    }

    pub fn ordered(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }
}

impl<M: OntologyMappings> Serialize for NodeLabel<M> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match self {
            Self::Variable(id) => {
                map.serialize_entry("type", "variable")?;
                map.serialize_entry("id", id)?;
            }
            Self::Class(class) => {
                map.serialize_entry("type", "item")?;
                map.serialize_entry("name", class.identifier.as_str())?;
            }
            Self::String(value) => {
                map.serialize_entry("type", "value")?;
                map.serialize_entry("subtype", "string")?;
                map.serialize_entry("value", value.as_str())?;
            }
            Self::Number(value, unit) => {
                map.serialize_entry("type", "value")?;
                map.serialize_entry("subtype", "number")?;
                map.serialize_entry("value", &value.0)?;
                if let Some(unit) = unit {
                    map.serialize_entry("unit", unit.as_str())?;
                }
            }
        }
        map.end()
    }
}
