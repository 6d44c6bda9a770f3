#![forbid(unsafe_code)]

//! Graph query fragments, and the interface through which a question
//! compiler asks for them.

pub use edge::Edge;
pub use env::Environment;
pub use node::{Filter, Node, NodeLabel};
pub use provider::{EdgeContext, GraphProvider, Subject};

pub mod edge;
pub mod env;
pub mod node;
pub mod provider;
