use std::{fmt::Debug, hash::Hash};

/// Associates ontology elements with their representation in a concrete
/// knowledge base, e.g. Wikidata items and properties.
pub trait OntologyMappings: Clone + Debug + PartialEq + Eq + Hash + 'static {
    type Class: Clone + Debug + PartialEq + Eq + Hash;
    type Property: Clone + Debug + PartialEq + Eq + Hash;
    type Individual: Clone + Debug + PartialEq + Eq + Hash;
}

/// For ontologies that are not mapped to any knowledge base.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
pub struct NoMappings;

impl OntologyMappings for NoMappings {
    type Class = ();
    type Property = ();
    type Individual = ();
}
