//! A small ontology in the shape of Wikidata, shared by scenario tests.

use std::sync::Arc;

use question_ontology::{
    Class, Comparison, Equivalent, FilterPattern, Ontology, OntologyMappings, Order, Property,
    Relation, Segment,
};
use question_pattern::{Pattern, TagCondition};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct WikidataMappings;

/// `Q` number of a Wikidata item
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Item(pub u64);

/// `P` number of a Wikidata property
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct WdProperty(pub u64);

impl OntologyMappings for WikidataMappings {
    type Class = Item;
    type Property = WdProperty;
    type Individual = Item;
}

fn noun(lemma: &str) -> Pattern {
    Pattern::lemma_tagged(lemma, TagCondition::prefix("NN"))
}

fn verb(lemma: &str) -> Pattern {
    Pattern::lemma_tagged(lemma, TagCondition::prefix("VB"))
}

pub fn test_ontology() -> Arc<Ontology<WikidataMappings>> {
    Arc::new(
        Ontology::builder()
            .property(Property::new("isA").mapped_to(WdProperty(31)))
            .property(Property::new("label"))
            .property(
                Property::new("died")
                    .mapped_to(WdProperty(570))
                    .named(verb("die")),
            )
            .property(
                Property::new("hasAge")
                    .named(noun("age"))
                    .superlative("old", Order::Descending)
                    .superlative("young", Order::Ascending)
                    .comparative("old", Comparison::GreaterThan)
                    .comparative("young", Comparison::LessThan),
            )
            .property(
                Property::new("hasHeight")
                    .mapped_to(WdProperty(2048))
                    .adjective("tall")
                    .superlative("tall", Order::Descending)
                    .comparative("tall", Comparison::GreaterThan),
            )
            .property(
                Property::new("hasBirthDate")
                    .mapped_to(WdProperty(569))
                    .value(verb("bear"))
                    .value_with(verb("bear"), FilterPattern::Named(Pattern::lemma("in")))
                    .value_with(
                        verb("bear"),
                        FilterPattern::Comparative(Pattern::lemma("before"), Comparison::LessThan),
                    )
                    .value_with(
                        verb("bear"),
                        FilterPattern::Comparative(Pattern::lemma("after"), Comparison::GreaterThan),
                    ),
            )
            .property(
                Property::new("hasPlaceOfBirth")
                    .mapped_to(WdProperty(19))
                    .named(noun("birthplace"))
                    .value_with(verb("bear"), FilterPattern::Named(Pattern::lemma("in"))),
            )
            .property(
                Property::new("hasAuthor")
                    .mapped_to(WdProperty(50))
                    .named(noun("author"))
                    .inverse_with(verb("write"), FilterPattern::Named(Pattern::lemma("by"))),
            )
            .property(Property::new("hasChild").mapped_to(WdProperty(40)))
            .property(Property::new("hasMother").mapped_to(WdProperty(25)))
            .class(
                Class::new("Person")
                    .mapped_to(Item(5))
                    .named(noun("person")),
            )
            .class(
                Class::new("Female")
                    .mapped_to(Item(6581072))
                    .named(noun("woman"))
                    .named(noun("female"))
                    .superclass("Person"),
            )
            .class(
                Class::new("Male")
                    .mapped_to(Item(6581097))
                    .named(noun("man"))
                    .superclass("Person"),
            )
            .class(
                Class::new("Child")
                    .named(noun("child"))
                    .superclass("Person")
                    .relation(Relation::incoming("hasChild")),
            )
            .class(
                Class::new("Mother")
                    .named(noun("mother"))
                    .superclass("Female")
                    .equivalent(Equivalent::Segments(vec![Segment::Incoming(
                        "hasMother".into(),
                    )])),
            )
            .class(
                Class::new("Place")
                    .mapped_to(Item(2221906))
                    .named(noun("place"))
                    .relation(
                        Relation::incoming("hasPlaceOfBirth").with_pattern(Pattern::lemmas("of birth")),
                    ),
            )
            .class(
                Class::new("Book")
                    .mapped_to(Item(571))
                    .named(noun("book"))
                    .relation(Relation::outgoing("hasAuthor")),
            )
            .instance_property("isA")
            .label_property("label")
            .person_class("Person")
            .build(),
    )
}
