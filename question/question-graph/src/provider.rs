use question_ontology::OntologyMappings;
use question_pattern::Token;

use crate::{edge::Edge, env::Environment, node::Node};

/// What a filter phrase is about, as classified by the question compiler.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Subject {
    /// A named entity, "Obama" in "Obama's children"
    Named(Vec<Token>),
    Person,
    Thing,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct EdgeContext {
    pub subject: Subject,
    /// Tokens trailing the property phrase, e.g. "in" or "than"
    pub filter: Vec<Token>,
}

impl EdgeContext {
    pub fn new(subject: Subject, filter: Vec<Token>) -> Self {
        Self { subject, filter }
    }

    pub fn named_subject(&self) -> Option<&[Token]> {
        match &self.subject {
            Subject::Named(tokens) => Some(tokens),
            Subject::Person | Subject::Thing => None,
        }
    }
}

/// Builds graph fragments for the elementary clauses of a parsed question.
///
/// The question compiler decides which operation applies to a phrase; a
/// provider decides which graph fragment the phrase denotes.
pub trait GraphProvider {
    type Mappings: OntologyMappings;
    type Error;

    fn make_person_edge(&self, env: &mut Environment) -> Result<Edge<Self::Mappings>, Self::Error>;

    fn make_named_property_edge(
        &self,
        name: &[Token],
        env: &mut Environment,
    ) -> Result<Edge<Self::Mappings>, Self::Error>;

    fn make_inverse_property_edge(
        &self,
        name: &[Token],
        node: &Node<Self::Mappings>,
        context: &EdgeContext,
        env: &mut Environment,
    ) -> Result<Edge<Self::Mappings>, Self::Error>;

    fn make_adjective_property_edge(
        &self,
        name: &[Token],
        node: &Node<Self::Mappings>,
        context: &EdgeContext,
        env: &mut Environment,
    ) -> Result<Edge<Self::Mappings>, Self::Error>;

    fn make_comparative_property_edge(
        &self,
        name: &[Token],
        node: &Node<Self::Mappings>,
        context: &EdgeContext,
        env: &mut Environment,
    ) -> Result<Edge<Self::Mappings>, Self::Error>;

    fn make_value_property_edge(
        &self,
        name: &[Token],
        node: &Node<Self::Mappings>,
        context: &EdgeContext,
        env: &mut Environment,
    ) -> Result<Edge<Self::Mappings>, Self::Error>;

    fn make_relationship_edge(
        &self,
        name: &[Token],
        node: &Node<Self::Mappings>,
        env: &mut Environment,
    ) -> Result<Edge<Self::Mappings>, Self::Error>;

    fn make_value_node(
        &self,
        name: &[Token],
        filter: &[Token],
        env: &mut Environment,
    ) -> Result<Node<Self::Mappings>, Self::Error>;

    fn make_number_node(
        &self,
        number: &[Token],
        unit: &[Token],
        filter: &[Token],
        env: &mut Environment,
    ) -> Result<Node<Self::Mappings>, Self::Error>;

    /// Whether a coordinated filter should be read as alternative modifiers.
    fn is_disjunction(&self, property: &[Token], filter: &[Token]) -> bool;
}
