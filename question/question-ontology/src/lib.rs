#![forbid(unsafe_code)]

//! The question ontology: classes and properties of a domain, annotated with
//! the linguistic patterns that name them in questions.

pub use class::{Class, ClassRef, Direction, Equivalent, Relation, Segment};
pub use mappings::{NoMappings, OntologyMappings};
pub use ontology::{Ontology, OntologyBuilder};
pub use property::{Comparison, FilterPattern, Order, Property, PropertyPattern, PropertyRef};

pub mod class;
pub mod mappings;
pub mod ontology;
pub mod property;
