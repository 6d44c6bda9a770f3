use std::sync::Arc;

use indexmap::IndexSet;
use itertools::Itertools;
use question_graph::{Edge, EdgeContext, Environment, GraphProvider, Node};
use question_ontology::{ClassRef, Comparison, Ontology, OntologyMappings, PropertyRef};
use question_pattern::Token;
use tracing::{debug, trace};

use crate::{
    config::ProviderConfig,
    error::{IndexError, ProviderError, ProviderResult},
    index::OntologyPatternIndex,
};

/// Answers graph fragment requests using the patterns declared in an
/// ontology. Ambiguous phrases produce disjunctions over every match.
pub struct QuestionOntologyGraphProvider<M: OntologyMappings> {
    index: OntologyPatternIndex<M>,
}

/// The edge for a phrase naming a class, possibly with adjectives in front
struct ClassEdge<M: OntologyMappings> {
    edge: Edge<M>,
    classes: IndexSet<ClassRef<M>>,
}

impl<M: OntologyMappings> QuestionOntologyGraphProvider<M> {
    pub fn new(ontology: Arc<Ontology<M>>) -> Result<Self, IndexError> {
        Self::with_config(ontology, ProviderConfig::default())
    }

    pub fn with_config(ontology: Arc<Ontology<M>>, config: ProviderConfig) -> Result<Self, IndexError> {
        Ok(Self {
            index: OntologyPatternIndex::new(ontology, config.tags)?,
        })
    }

    pub fn index(&self) -> &OntologyPatternIndex<M> {
        &self.index
    }

    fn instance_property(&self) -> ProviderResult<PropertyRef<M>> {
        self.index
            .ontology()
            .instance_property()
            .map(|property| property.to_ref())
            .ok_or(ProviderError::NotAvailable)
    }

    fn class_edge(&self, name: &[Token], env: &mut Environment) -> ProviderResult<Option<ClassEdge<M>>> {
        let name = self.index.tags().strip_determiner(name);
        let prefixes = self.index.find_adjective_prefixes(name);

        let mut classes = IndexSet::new();
        if prefixes.is_empty() {
            classes.extend(self.index.find_named_classes(name));
        } else {
            for prefix in &prefixes {
                classes.extend(self.index.find_named_classes(&name[prefix.length..]));
            }
        }

        if classes.is_empty() {
            trace!(?name, "no class");
            return Ok(None);
        }

        let instance_property = self.instance_property()?;
        let is_a = Edge::any_of(
            classes
                .iter()
                .map(|class| Edge::is_a(instance_property.clone(), class.clone())),
        )
        .ok_or(ProviderError::NotAvailable)?;

        let adjectives = Edge::any_of(prefixes.into_iter().map(|prefix| {
            let node = env.new_node();
            let node = match prefix.result.order {
                Some(order) => node.ordered(order),
                None => node,
            };
            Edge::outgoing(prefix.result.property, node)
        }));

        let edge = match adjectives {
            Some(adjectives) => is_a.and(adjectives),
            None => is_a,
        };

        Ok(Some(ClassEdge { edge, classes }))
    }
}

/// The given node, or a fresh node compared with it
fn compared<M: OntologyMappings>(
    node: &Node<M>,
    comparison: Option<Comparison>,
    env: &mut Environment,
) -> Node<M> {
    match comparison {
        Some(comparison) => env.new_node().filtered(comparison, node.clone()),
        None => node.clone(),
    }
}

fn with_filter(name: &[Token], context: &EdgeContext) -> Vec<Token> {
    [name, context.filter.as_slice()].concat()
}

fn disjunction<M: OntologyMappings>(edges: impl IntoIterator<Item = Edge<M>>) -> ProviderResult<Edge<M>> {
    Edge::any_of(edges).ok_or(ProviderError::NotAvailable)
}

impl<M: OntologyMappings> GraphProvider for QuestionOntologyGraphProvider<M> {
    type Mappings = M;
    type Error = ProviderError;

    fn make_person_edge(&self, _env: &mut Environment) -> ProviderResult<Edge<M>> {
        let person = self
            .index
            .ontology()
            .person_class()
            .ok_or(ProviderError::NotAvailable)?;

        Ok(Edge::is_a(self.instance_property()?, person.to_ref()))
    }

    fn make_named_property_edge(&self, name: &[Token], env: &mut Environment) -> ProviderResult<Edge<M>> {
        let properties = self.index.find_named_properties(name);
        disjunction(
            properties
                .into_iter()
                .map(|property| Edge::outgoing(property, env.new_node())),
        )
    }

    fn make_inverse_property_edge(
        &self,
        name: &[Token],
        node: &Node<M>,
        context: &EdgeContext,
        env: &mut Environment,
    ) -> ProviderResult<Edge<M>> {
        let usages = self.index.find_inverse_properties(&with_filter(name, context));
        disjunction(usages.into_iter().map(|usage| {
            Edge::incoming(compared(node, usage.comparison, env), usage.property)
        }))
    }

    fn make_adjective_property_edge(
        &self,
        name: &[Token],
        node: &Node<M>,
        context: &EdgeContext,
        env: &mut Environment,
    ) -> ProviderResult<Edge<M>> {
        let usages = self.index.find_adjective_properties(&with_filter(name, context));
        disjunction(usages.into_iter().map(|usage| {
            Edge::outgoing(usage.property, compared(node, usage.comparison, env))
        }))
    }

    fn make_comparative_property_edge(
        &self,
        name: &[Token],
        node: &Node<M>,
        context: &EdgeContext,
        env: &mut Environment,
    ) -> ProviderResult<Edge<M>> {
        let usages = self.index.find_comparative_properties(&with_filter(name, context));
        disjunction(usages.into_iter().map(|usage| {
            let filtered = env.new_node();
            // a number is compared directly, anything else by its own value of the property
            let reference = if node.is_number() {
                node.clone()
            } else {
                env.new_node().incoming(node.clone(), usage.property.clone())
            };
            Edge::outgoing(usage.property, filtered.filtered(usage.comparison, reference))
        }))
    }

    fn make_value_property_edge(
        &self,
        name: &[Token],
        node: &Node<M>,
        context: &EdgeContext,
        env: &mut Environment,
    ) -> ProviderResult<Edge<M>> {
        let usages = self.index.find_value_properties(&with_filter(name, context));
        if !usages.is_empty() {
            return disjunction(usages.into_iter().map(|usage| {
                Edge::outgoing(usage.property, compared(node, usage.comparison, env))
            }));
        }

        let Some(subject) = context.named_subject() else {
            return Err(ProviderError::NotAvailable);
        };

        debug!(?name, "no value property, trying relations of the named subject");
        let relations = self.index.find_relations(&[subject, context.filter.as_slice()].concat());
        disjunction(relations.iter().map(|relation| relation.edge(node.clone())))
    }

    fn make_relationship_edge(
        &self,
        name: &[Token],
        node: &Node<M>,
        env: &mut Environment,
    ) -> ProviderResult<Edge<M>> {
        let Some(class_edge) = self.class_edge(name, env)? else {
            return Err(ProviderError::NotAvailable);
        };

        let mut relations = self.index.find_relations(name);
        for class in &class_edge.classes {
            relations.extend(self.index.equivalent_segments(class).iter().cloned());
        }

        let relations = disjunction(relations.iter().map(|relation| relation.edge(node.clone())))?;
        Ok(class_edge.edge.and(relations))
    }

    fn make_value_node(&self, name: &[Token], filter: &[Token], env: &mut Environment) -> ProviderResult<Node<M>> {
        trace!(?name, ?filter, "value node");

        if let Some(class_edge) = self.class_edge(name, env)? {
            return Ok(env.new_node().and(class_edge.edge));
        }

        let label_property = self
            .index
            .ontology()
            .label_property()
            .ok_or(ProviderError::NotAvailable)?;
        let label = name.iter().map(|token| token.word.as_str()).join(" ");

        debug!(%label, "no class, using label");
        Ok(env
            .new_node()
            .and(Edge::has_label(label_property.to_ref(), label)))
    }

    fn make_number_node(
        &self,
        number: &[Token],
        unit: &[Token],
        _filter: &[Token],
        _env: &mut Environment,
    ) -> ProviderResult<Node<M>> {
        let text = number.iter().map(|token| token.lemma.as_str()).join(" ");
        let value: f64 = text
            .parse()
            .map_err(|_| ProviderError::InvalidNumber(text.clone()))?;

        let unit = if unit.is_empty() {
            None
        } else {
            Some(unit.iter().map(|token| token.lemma.as_str()).join(" ").into())
        };

        Ok(Node::number(value, unit))
    }

    fn is_disjunction(&self, _property: &[Token], filter: &[Token]) -> bool {
        !filter.is_empty() && filter.iter().all(|token| self.index.tags().is_preposition(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use question_ontology::NoMappings;
    use test_log::test;

    fn provider(ontology: Ontology<NoMappings>) -> QuestionOntologyGraphProvider<NoMappings> {
        QuestionOntologyGraphProvider::new(Arc::new(ontology)).unwrap()
    }

    fn t(word: &str, tag: &str, lemma: &str) -> Token {
        Token::new(word, tag, lemma)
    }

    #[test]
    fn disjunction_requires_prepositions_only() {
        let provider = provider(Ontology::builder().build());

        assert!(provider.is_disjunction(&[], &[t("in", "IN", "in"), t("on", "IN", "on")]));
        assert!(!provider.is_disjunction(&[], &[t("in", "IN", "in"), t("Paris", "NNP", "Paris")]));
        assert!(!provider.is_disjunction(&[], &[]));
    }

    #[test]
    fn number_node_joins_lemmas() {
        let provider = provider(Ontology::builder().build());
        let mut env = Environment::new();

        assert_eq!(
            provider
                .make_number_node(&[t("1.5", "CD", "1.5")], &[], &[], &mut env)
                .unwrap(),
            Node::number(1.5, None)
        );
        assert_eq!(
            provider.make_number_node(&[t("a", "DT", "a")], &[], &[], &mut env),
            Err(ProviderError::InvalidNumber("a".to_string()))
        );
        assert_eq!(env.next_variable(), 0);
    }

    #[test]
    fn person_edge_needs_person_class() {
        let provider = provider(Ontology::builder().build());
        assert_eq!(
            provider.make_person_edge(&mut Environment::new()),
            Err(ProviderError::NotAvailable)
        );
    }

    #[test]
    fn value_node_without_label_property_is_not_available() {
        let provider = provider(Ontology::builder().build());
        assert_eq!(
            provider.make_value_node(&[t("Obama", "NNP", "Obama")], &[], &mut Environment::new()),
            Err(ProviderError::NotAvailable)
        );
    }
}
