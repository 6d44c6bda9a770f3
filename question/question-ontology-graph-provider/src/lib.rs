#![forbid(unsafe_code)]

//! Translates tagged phrases into graph query fragments using the linguistic
//! patterns declared in a question ontology.
//!
//! [OntologyPatternIndex] compiles the patterns of every ontology element
//! once. [QuestionOntologyGraphProvider] uses it to answer the question
//! compiler's [question_graph::GraphProvider] requests.

pub use config::ProviderConfig;
pub use directed::DirectedProperty;
pub use error::{ConfigError, IndexError, ProviderError, ProviderResult};
pub use index::{AdjectivePrefix, ComparativeUsage, OntologyPatternIndex, PropertyUsage};
pub use provider::QuestionOntologyGraphProvider;
pub use relations::RelationResolver;

pub mod config;
pub mod directed;
pub mod error;
pub mod index;
pub mod provider;
pub mod relations;
