use arcstr::ArcStr;
use question_pattern::Pattern;
use serde::{Deserialize, Serialize};

use crate::mappings::OntologyMappings;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Incoming,
    Outgoing,
}

/// A property through which instances of a class relate to something else,
/// recognized in possessive phrasings like "Obama's children".
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Relation {
    pub property: ArcStr,
    pub direction: Direction,
    /// Matched after the class pattern, e.g. "of birth" in "place of birth"
    pub pattern: Option<Pattern>,
}

impl Relation {
    pub fn incoming(property: impl Into<ArcStr>) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Incoming,
            pattern: None,
        }
    }

    pub fn outgoing(property: impl Into<ArcStr>) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Outgoing,
            pattern: None,
        }
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Segment<M: OntologyMappings> {
    Outgoing(ArcStr),
    Incoming(ArcStr),
    Individual(M::Individual),
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Equivalent<M: OntologyMappings> {
    /// Same extension as another class
    Class(ArcStr),
    /// Same extension as a chain of property segments
    Segments(Vec<Segment<M>>),
}

#[derive(Clone, Debug)]
pub struct Class<M: OntologyMappings> {
    pub identifier: ArcStr,
    pub mapping: Option<M::Class>,
    pub named_patterns: Vec<Pattern>,
    pub relations: Vec<Relation>,
    pub superclasses: Vec<ArcStr>,
    pub equivalents: Vec<Equivalent<M>>,
}

impl<M: OntologyMappings> Class<M> {
    pub fn new(identifier: impl Into<ArcStr>) -> Self {
        Self {
            identifier: identifier.into(),
            mapping: None,
            named_patterns: vec![],
            relations: vec![],
            superclasses: vec![],
            equivalents: vec![],
        }
    }

    pub fn mapped_to(mut self, mapping: M::Class) -> Self {
        self.mapping = Some(mapping);
        self
    }

    pub fn named(mut self, pattern: Pattern) -> Self {
        self.named_patterns.push(pattern);
        self
    }

    pub fn relation(mut self, relation: Relation) -> Self {
        self.relations.push(relation);
        self
    }

    pub fn superclass(mut self, identifier: impl Into<ArcStr>) -> Self {
        self.superclasses.push(identifier.into());
        self
    }

    pub fn equivalent(mut self, equivalent: Equivalent<M>) -> Self {
        self.equivalents.push(equivalent);
        self
    }

    pub fn to_ref(&self) -> ClassRef<M> {
        ClassRef {
            identifier: self.identifier.clone(),
            mapping: self.mapping.clone(),
        }
    }
}

/// A class as it appears in an emitted graph fragment.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ClassRef<M: OntologyMappings> {
    pub identifier: ArcStr,
    pub mapping: Option<M::Class>,
}
