//! Compiled pattern tables for every category of ontology pattern.

use std::{hash::Hash, sync::Arc};

use arcstr::ArcStr;
use fnv::FnvHashMap;
use indexmap::IndexSet;
use question_ontology::{
    Class, ClassRef, Comparison, Direction, Equivalent, FilterPattern, Ontology, OntologyMappings,
    Order, Property, PropertyPattern, PropertyRef, Segment,
};
use question_pattern::{MatchMode, Pattern, TagSet, Token, TokenMatch, TokenMatcher};
use tracing::{debug, trace};

use crate::{directed::DirectedProperty, error::IndexError, relations::RelationResolver};

/// A property matched together with the comparison its filter implies.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct PropertyUsage<M: OntologyMappings> {
    pub property: PropertyRef<M>,
    pub comparison: Option<Comparison>,
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ComparativeUsage<M: OntologyMappings> {
    pub property: PropertyRef<M>,
    pub comparison: Comparison,
}

/// An adjective preceding a class name, "oldest" in "oldest woman".
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct AdjectivePrefix<M: OntologyMappings> {
    pub property: PropertyRef<M>,
    /// Present for superlatives
    pub order: Option<Order>,
}

/// One matcher per pattern category, built once from the ontology.
///
/// Lookups never fail. An empty result set means the phrase does not name
/// anything in that category.
#[derive(Debug)]
pub struct OntologyPatternIndex<M: OntologyMappings> {
    ontology: Arc<Ontology<M>>,
    tags: TagSet,
    named_properties: TokenMatcher<PropertyRef<M>>,
    inverse_properties: TokenMatcher<PropertyUsage<M>>,
    value_properties: TokenMatcher<PropertyUsage<M>>,
    adjective_properties: TokenMatcher<PropertyUsage<M>>,
    adjective_prefixes: TokenMatcher<AdjectivePrefix<M>>,
    comparative_properties: TokenMatcher<ComparativeUsage<M>>,
    named_classes: TokenMatcher<ClassRef<M>>,
    relations: TokenMatcher<DirectedProperty<M>>,
    equivalent_segments: FnvHashMap<ArcStr, Vec<DirectedProperty<M>>>,
}

impl<M: OntologyMappings> OntologyPatternIndex<M> {
    pub fn new(ontology: Arc<Ontology<M>>, tags: TagSet) -> Result<Self, IndexError> {
        let named_properties =
            compile_property_patterns(&ontology, "named property", MatchMode::Full, |property, pattern| {
                match pattern {
                    PropertyPattern::Named(pattern) => Some((pattern.clone(), property.to_ref())),
                    _ => None,
                }
            })?;

        let inverse_properties =
            compile_property_patterns(&ontology, "inverse property", MatchMode::Full, |property, pattern| {
                match pattern {
                    PropertyPattern::Inverse(pattern, filter) => {
                        Some(usage_entry(property, pattern.clone(), filter.as_ref()))
                    }
                    _ => None,
                }
            })?;

        let value_properties =
            compile_property_patterns(&ontology, "value property", MatchMode::Full, |property, pattern| {
                match pattern {
                    PropertyPattern::Value(pattern, filter) => {
                        Some(usage_entry(property, pattern.clone(), filter.as_ref()))
                    }
                    _ => None,
                }
            })?;

        let adjective_properties = compile_property_patterns(
            &ontology,
            "adjective property",
            MatchMode::Full,
            |property, pattern| match pattern {
                PropertyPattern::Adjective(lemma, filter) => Some(usage_entry(
                    property,
                    tags.copula().then(tags.adjective(lemma)),
                    filter.as_ref(),
                )),
                _ => None,
            },
        )?;

        let adjective_prefixes = compile_property_patterns(
            &ontology,
            "adjective prefix",
            MatchMode::Prefix,
            |property, pattern| match pattern {
                PropertyPattern::Adjective(lemma, _) => Some((
                    tags.adjective(lemma),
                    AdjectivePrefix {
                        property: property.to_ref(),
                        order: None,
                    },
                )),
                PropertyPattern::SuperlativeAdjective(lemma, order) => Some((
                    tags.superlative_adjective(lemma),
                    AdjectivePrefix {
                        property: property.to_ref(),
                        order: Some(*order),
                    },
                )),
                _ => None,
            },
        )?;

        let comparative_properties = compile_property_patterns(
            &ontology,
            "comparative property",
            MatchMode::Full,
            |property, pattern| {
                let (pattern, comparison) = match pattern {
                    PropertyPattern::Comparative(lemma, comparison) => (
                        tags.copula().then(tags.comparative_adjective(lemma)),
                        *comparison,
                    ),
                    PropertyPattern::Adjective(
                        lemma,
                        Some(FilterPattern::Comparative(filter, comparison)),
                    ) => (
                        tags.copula()
                            .then(tags.adjective(lemma))
                            .then(filter.clone()),
                        *comparison,
                    ),
                    _ => return None,
                };
                Some((
                    pattern,
                    ComparativeUsage {
                        property: property.to_ref(),
                        comparison,
                    },
                ))
            },
        )?;

        let named_classes = compile_class_patterns(&ontology)?;
        let relations = compile_relation_patterns(&ontology)?;
        let equivalent_segments = resolve_equivalent_segments(&ontology)?;

        Ok(Self {
            ontology,
            tags,
            named_properties,
            inverse_properties,
            value_properties,
            adjective_properties,
            adjective_prefixes,
            comparative_properties,
            named_classes,
            relations,
            equivalent_segments,
        })
    }

    pub fn ontology(&self) -> &Ontology<M> {
        &self.ontology
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn find_named_properties(&self, name: &[Token]) -> IndexSet<PropertyRef<M>> {
        trace!(?name, "find named properties");
        self.named_properties.results(name)
    }

    pub fn find_inverse_properties(&self, name: &[Token]) -> IndexSet<PropertyUsage<M>> {
        trace!(?name, "find inverse properties");
        self.inverse_properties.results(name)
    }

    pub fn find_value_properties(&self, name: &[Token]) -> IndexSet<PropertyUsage<M>> {
        trace!(?name, "find value properties");
        self.value_properties.results(name)
    }

    /// Matched as copula, adjective and optional filter, "is tall"
    pub fn find_adjective_properties(&self, name: &[Token]) -> IndexSet<PropertyUsage<M>> {
        trace!(?name, "find adjective properties");
        self.adjective_properties.results(name)
    }

    /// Adjectives at the start of `name`, with the number of tokens they cover.
    pub fn find_adjective_prefixes(&self, name: &[Token]) -> IndexSet<TokenMatch<AdjectivePrefix<M>>> {
        trace!(?name, "find adjective prefixes");
        self.adjective_prefixes.matches(name)
    }

    /// Only patterns where the comparison is mandatory, "is older than"
    pub fn find_comparative_properties(&self, name: &[Token]) -> IndexSet<ComparativeUsage<M>> {
        trace!(?name, "find comparative properties");
        self.comparative_properties.results(name)
    }

    pub fn find_named_classes(&self, name: &[Token]) -> IndexSet<ClassRef<M>> {
        trace!(?name, "find named classes");
        self.named_classes.results(self.tags.strip_determiner(name))
    }

    pub fn find_relations(&self, name: &[Token]) -> IndexSet<DirectedProperty<M>> {
        trace!(?name, "find relations");
        self.relations.results(self.tags.strip_determiner(name))
    }

    /// The property chain a class is declared equivalent to, if any
    pub fn equivalent_segments(&self, class: &ClassRef<M>) -> &[DirectedProperty<M>] {
        self.equivalent_segments
            .get(&class.identifier)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

fn usage_entry<M: OntologyMappings>(
    property: &Property<M>,
    pattern: Pattern,
    filter: Option<&FilterPattern>,
) -> (Pattern, PropertyUsage<M>) {
    let (pattern, comparison) = match filter {
        Some(filter) => (pattern.then(filter.pattern().clone()), filter.comparison()),
        None => (pattern, None),
    };
    (
        pattern,
        PropertyUsage {
            property: property.to_ref(),
            comparison,
        },
    )
}

fn compile_property_patterns<M, R>(
    ontology: &Ontology<M>,
    category: &str,
    mode: MatchMode,
    mapping: impl Fn(&Property<M>, &PropertyPattern) -> Option<(Pattern, R)>,
) -> Result<TokenMatcher<R>, IndexError>
where
    M: OntologyMappings,
    R: Clone + Eq + Hash,
{
    let mut entries = vec![];
    for property in ontology.properties() {
        for pattern in &property.patterns {
            if let Some(entry) = mapping(property, pattern) {
                entries.push(entry);
            }
        }
    }

    debug!(category, patterns = entries.len(), "compiling patterns");
    Ok(TokenMatcher::compile(entries, mode)?)
}

fn compile_class_patterns<M: OntologyMappings>(
    ontology: &Ontology<M>,
) -> Result<TokenMatcher<ClassRef<M>>, IndexError> {
    let entries: Vec<_> = ontology
        .classes()
        .flat_map(|class| {
            class
                .named_patterns
                .iter()
                .map(move |pattern| (pattern.clone(), class.to_ref()))
        })
        .collect();

    debug!(category = "named class", patterns = entries.len(), "compiling patterns");
    Ok(TokenMatcher::compile(entries, MatchMode::Full)?)
}

/// A class pattern, followed by the relation's own pattern, names the related
/// instances: "place of birth" for `birthPlace` on `Place`.
fn compile_relation_patterns<M: OntologyMappings>(
    ontology: &Ontology<M>,
) -> Result<TokenMatcher<DirectedProperty<M>>, IndexError> {
    let resolver = RelationResolver::new(ontology);
    let mut entries = vec![];

    for class in ontology.classes() {
        for relation in resolver.relations(class)? {
            let property = ontology
                .property(&relation.property)
                .ok_or_else(|| IndexError::InvalidPropertyIdentifier(relation.property.clone()))?;
            let directed = DirectedProperty::new(property.to_ref(), relation.direction);

            for class_pattern in &class.named_patterns {
                let pattern = match &relation.pattern {
                    Some(pattern) => class_pattern.clone().then(pattern.clone()),
                    None => class_pattern.clone(),
                };
                entries.push((pattern, directed.clone()));
            }
        }
    }

    debug!(category = "relation", patterns = entries.len(), "compiling patterns");
    Ok(TokenMatcher::compile(entries, MatchMode::Full)?)
}

fn resolve_equivalent_segments<M: OntologyMappings>(
    ontology: &Ontology<M>,
) -> Result<FnvHashMap<ArcStr, Vec<DirectedProperty<M>>>, IndexError> {
    let mut table = FnvHashMap::default();

    for class in ontology.classes() {
        let segments = class_equivalent_segments(ontology, class)?;
        if !segments.is_empty() {
            table.insert(class.identifier.clone(), segments);
        }
    }

    Ok(table)
}

fn class_equivalent_segments<M: OntologyMappings>(
    ontology: &Ontology<M>,
    class: &Class<M>,
) -> Result<Vec<DirectedProperty<M>>, IndexError> {
    let mut output = vec![];

    for equivalent in &class.equivalents {
        match equivalent {
            Equivalent::Class(identifier) => {
                if ontology.class(identifier).is_none() {
                    return Err(IndexError::InvalidClassIdentifier(identifier.clone()));
                }
            }
            Equivalent::Segments(segments) => {
                for segment in segments {
                    let (identifier, direction) = match segment {
                        Segment::Outgoing(identifier) => (identifier, Direction::Outgoing),
                        Segment::Incoming(identifier) => (identifier, Direction::Incoming),
                        Segment::Individual(_) => continue,
                    };
                    let property = ontology
                        .property(identifier)
                        .ok_or_else(|| IndexError::InvalidPropertyIdentifier(identifier.clone()))?;
                    output.push(DirectedProperty::new(property.to_ref(), direction));
                }
            }
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;
    use question_ontology::{NoMappings, Relation};
    use question_pattern::TagCondition;
    use test_log::test;

    type Class = question_ontology::Class<NoMappings>;
    type Property = question_ontology::Property<NoMappings>;

    fn t(word: &str, tag: &str, lemma: &str) -> Token {
        Token::new(word, tag, lemma)
    }

    fn index(ontology: Ontology<NoMappings>) -> OntologyPatternIndex<NoMappings> {
        OntologyPatternIndex::new(Arc::new(ontology), TagSet::default()).unwrap()
    }

    fn property_ref(identifier: &str) -> PropertyRef<NoMappings> {
        PropertyRef {
            identifier: identifier.into(),
            mapping: None,
        }
    }

    #[test]
    fn adjective_filter_comparisons() {
        let index = index(
            Ontology::builder()
                .property(
                    Property::new("population")
                        .adjective("populous")
                        .adjective_with(
                            "populous",
                            FilterPattern::Comparative(Pattern::lemmas("more than"), Comparison::GreaterThan),
                        ),
                )
                .build(),
        );

        let is_populous = [t("is", "VBZ", "be"), t("populous", "JJ", "populous")];
        assert_eq!(
            index.find_adjective_properties(&is_populous),
            IndexSet::from([PropertyUsage {
                property: property_ref("population"),
                comparison: None,
            }])
        );
        assert!(index.find_comparative_properties(&is_populous).is_empty());

        let more_than = [
            t("is", "VBZ", "be"),
            t("populous", "JJ", "populous"),
            t("more", "JJR", "more"),
            t("than", "IN", "than"),
        ];
        assert_eq!(
            index.find_adjective_properties(&more_than),
            IndexSet::from([PropertyUsage {
                property: property_ref("population"),
                comparison: Some(Comparison::GreaterThan),
            }])
        );
        assert_eq!(
            index.find_comparative_properties(&more_than),
            IndexSet::from([ComparativeUsage {
                property: property_ref("population"),
                comparison: Comparison::GreaterThan,
            }])
        );
        // the adjective alone is also an attributive prefix
        assert_eq!(
            index
                .find_adjective_prefixes(&[t("populous", "JJ", "populous"), t("city", "NN", "city")])
                .len(),
            1
        );
    }

    #[test]
    fn relation_patterns_follow_class_patterns() {
        let index = index(
            Ontology::builder()
                .property(Property::new("birthPlace"))
                .class(
                    Class::new("Place")
                        .named(Pattern::lemma_tagged("place", TagCondition::prefix("NN")))
                        .relation(
                            Relation::incoming("birthPlace").with_pattern(Pattern::lemmas("of birth")),
                        ),
                )
                .build(),
        );

        let place_of_birth = [
            t("the", "DT", "the"),
            t("place", "NN", "place"),
            t("of", "IN", "of"),
            t("birth", "NN", "birth"),
        ];
        assert_eq!(
            index.find_relations(&place_of_birth),
            IndexSet::from([DirectedProperty::new(property_ref("birthPlace"), Direction::Incoming)])
        );
        assert!(index.find_relations(&place_of_birth[..2]).is_empty());
        assert_eq!(index.find_named_classes(&place_of_birth[..2]).len(), 1);
    }

    #[test]
    fn unknown_relation_property_fails_construction() {
        let result = OntologyPatternIndex::new(
            Arc::new(
                Ontology::<NoMappings>::builder()
                    .class(Class::new("Person").relation(Relation::outgoing("hasSpouse")))
                    .build(),
            ),
            TagSet::default(),
        );

        assert_matches!(
            result,
            Err(IndexError::InvalidPropertyIdentifier(identifier)) if identifier == "hasSpouse"
        );
    }

    #[test]
    fn equivalences_are_validated() {
        let result = OntologyPatternIndex::new(
            Arc::new(
                Ontology::<NoMappings>::builder()
                    .class(Class::new("Human").equivalent(Equivalent::Class("Person".into())))
                    .build(),
            ),
            TagSet::default(),
        );
        assert_matches!(result, Err(IndexError::InvalidClassIdentifier(_)));

        let result = OntologyPatternIndex::new(
            Arc::new(
                Ontology::<NoMappings>::builder()
                    .class(
                        Class::new("Mother")
                            .equivalent(Equivalent::Segments(vec![Segment::Incoming("hasMother".into())])),
                    )
                    .build(),
            ),
            TagSet::default(),
        );
        assert_matches!(result, Err(IndexError::InvalidPropertyIdentifier(_)));
    }

    #[test]
    fn individual_segments_are_skipped() {
        let index = index(
            Ontology::builder()
                .property(Property::new("gender"))
                .class(Class::new("Woman").equivalent(Equivalent::Segments(vec![
                    Segment::Outgoing("gender".into()),
                    Segment::Individual(()),
                ])))
                .build(),
        );

        let woman = index.ontology().class("Woman").unwrap().to_ref();
        assert_eq!(
            index.equivalent_segments(&woman),
            &[DirectedProperty::new(property_ref("gender"), Direction::Outgoing)]
        );
    }

    #[test]
    fn empty_ontology_matches_nothing() {
        let index = index(Ontology::builder().build());
        let span = [t("died", "VBD", "die")];

        assert!(index.find_named_properties(&span).is_empty());
        assert!(index.find_adjective_prefixes(&span).is_empty());
        assert!(index.find_named_classes(&span).is_empty());
        assert!(index.find_relations(&span).is_empty());
    }
}
