use arcstr::ArcStr;
use indexmap::IndexMap;
use tracing::warn;

use crate::{class::Class, mappings::OntologyMappings, property::Property};

/// Read-only domain model. Classes and properties keep their declaration
/// order, which is the order in which ambiguous matches are reported.
#[derive(Clone, Debug)]
pub struct Ontology<M: OntologyMappings> {
    classes: IndexMap<ArcStr, Class<M>>,
    properties: IndexMap<ArcStr, Property<M>>,
    instance_property: Option<ArcStr>,
    label_property: Option<ArcStr>,
    person_class: Option<ArcStr>,
}

impl<M: OntologyMappings> Ontology<M> {
    pub fn builder() -> OntologyBuilder<M> {
        OntologyBuilder {
            ontology: Self {
                classes: Default::default(),
                properties: Default::default(),
                instance_property: None,
                label_property: None,
                person_class: None,
            },
        }
    }

    pub fn class(&self, identifier: &str) -> Option<&Class<M>> {
        self.classes.get(identifier)
    }

    pub fn property(&self, identifier: &str) -> Option<&Property<M>> {
        self.properties.get(identifier)
    }

    pub fn classes(&self) -> impl Iterator<Item = &Class<M>> {
        self.classes.values()
    }

    pub fn properties(&self) -> impl Iterator<Item = &Property<M>> {
        self.properties.values()
    }

    /// The "is-a" property relating instances to their classes
    pub fn instance_property(&self) -> Option<&Property<M>> {
        self.instance_property
            .as_ref()
            .and_then(|identifier| self.property(identifier))
    }

    pub fn label_property(&self) -> Option<&Property<M>> {
        self.label_property
            .as_ref()
            .and_then(|identifier| self.property(identifier))
    }

    pub fn person_class(&self) -> Option<&Class<M>> {
        self.person_class
            .as_ref()
            .and_then(|identifier| self.class(identifier))
    }
}

pub struct OntologyBuilder<M: OntologyMappings> {
    ontology: Ontology<M>,
}

impl<M: OntologyMappings> OntologyBuilder<M> {
    pub fn class(mut self, class: Class<M>) -> Self {
        if let Some(previous) = self.ontology.classes.insert(class.identifier.clone(), class) {
            warn!(identifier = %previous.identifier, "class redefined");
        }
        self
    }

    pub fn property(mut self, property: Property<M>) -> Self {
        if let Some(previous) = self
            .ontology
            .properties
            .insert(property.identifier.clone(), property)
        {
            warn!(identifier = %previous.identifier, "property redefined");
        }
        self
    }

    pub fn instance_property(mut self, identifier: impl Into<ArcStr>) -> Self {
        self.ontology.instance_property = Some(identifier.into());
        self
    }

    pub fn label_property(mut self, identifier: impl Into<ArcStr>) -> Self {
        self.ontology.label_property = Some(identifier.into());
        self
    }

    pub fn person_class(mut self, identifier: impl Into<ArcStr>) -> Self {
        self.ontology.person_class = Some(identifier.into());
        self
    }

    pub fn build(self) -> Ontology<M> {
        self.ontology
    }
}
