use arcstr::ArcStr;
use question_pattern::Pattern;
use serde::{Deserialize, Serialize, Serializer, ser::SerializeMap};

use crate::mappings::OntologyMappings;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Comparison {
    GreaterThan,
    LessThan,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Order {
    Ascending,
    Descending,
}

/// A pattern trailing a property phrase, e.g. "in" or "before".
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum FilterPattern {
    Named(Pattern),
    /// The filter value is compared, "born before 1950"
    Comparative(Pattern, Comparison),
}

impl FilterPattern {
    pub fn pattern(&self) -> &Pattern {
        match self {
            Self::Named(pattern) | Self::Comparative(pattern, _) => pattern,
        }
    }

    pub fn comparison(&self) -> Option<Comparison> {
        match self {
            Self::Named(_) => None,
            Self::Comparative(_, comparison) => Some(*comparison),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum PropertyPattern {
    /// Names the property, "died"
    Named(Pattern),
    /// Names the property used in reverse, "written by"
    Inverse(Pattern, Option<FilterPattern>),
    /// Introduces the property's value, "born in"
    Value(Pattern, Option<FilterPattern>),
    /// Adjective lemma used predicatively, "is tall"
    Adjective(ArcStr, Option<FilterPattern>),
    /// Comparative form of an adjective lemma, "older than"
    Comparative(ArcStr, Comparison),
    /// Superlative form of an adjective lemma, "oldest"
    SuperlativeAdjective(ArcStr, Order),
}

#[derive(Clone, Debug)]
pub struct Property<M: OntologyMappings> {
    pub identifier: ArcStr,
    pub mapping: Option<M::Property>,
    pub patterns: Vec<PropertyPattern>,
}

impl<M: OntologyMappings> Property<M> {
    pub fn new(identifier: impl Into<ArcStr>) -> Self {
        Self {
            identifier: identifier.into(),
            mapping: None,
            patterns: vec![],
        }
    }

    pub fn mapped_to(mut self, mapping: M::Property) -> Self {
        self.mapping = Some(mapping);
        self
    }

    pub fn pattern(mut self, pattern: PropertyPattern) -> Self {
        self.patterns.push(pattern);
        self
    }

    pub fn named(self, pattern: Pattern) -> Self {
        self.pattern(PropertyPattern::Named(pattern))
    }

    pub fn inverse(self, pattern: Pattern) -> Self {
        self.pattern(PropertyPattern::Inverse(pattern, None))
    }

    pub fn inverse_with(self, pattern: Pattern, filter: FilterPattern) -> Self {
        self.pattern(PropertyPattern::Inverse(pattern, Some(filter)))
    }

    pub fn value(self, pattern: Pattern) -> Self {
        self.pattern(PropertyPattern::Value(pattern, None))
    }

    pub fn value_with(self, pattern: Pattern, filter: FilterPattern) -> Self {
        self.pattern(PropertyPattern::Value(pattern, Some(filter)))
    }

    pub fn adjective(self, lemma: impl Into<ArcStr>) -> Self {
        self.pattern(PropertyPattern::Adjective(lemma.into(), None))
    }

    pub fn adjective_with(self, lemma: impl Into<ArcStr>, filter: FilterPattern) -> Self {
        self.pattern(PropertyPattern::Adjective(lemma.into(), Some(filter)))
    }

    pub fn comparative(self, lemma: impl Into<ArcStr>, comparison: Comparison) -> Self {
        self.pattern(PropertyPattern::Comparative(lemma.into(), comparison))
    }

    pub fn superlative(self, lemma: impl Into<ArcStr>, order: Order) -> Self {
        self.pattern(PropertyPattern::SuperlativeAdjective(lemma.into(), order))
    }

    pub fn to_ref(&self) -> PropertyRef<M> {
        PropertyRef {
            identifier: self.identifier.clone(),
            mapping: self.mapping.clone(),
        }
    }
}

/// A property as it appears in an emitted graph fragment.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct PropertyRef<M: OntologyMappings> {
    pub identifier: ArcStr,
    pub mapping: Option<M::Property>,
}

impl<M: OntologyMappings> Serialize for PropertyRef<M> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", "property")?;
        map.serialize_entry("name", self.identifier.as_str())?;
        map.end()
    }
}
