//! Declarative construction of OWL ontologies.

use crate::io::LoadedGraph;
use crate::vocab::{dcterms, owl, skos};
use oxrdf::vocab::{rdf, rdfs, xsd};
use oxrdf::{
    Graph, IriParseError, LanguageTagParseError, Literal, NamedNode, NamedNodeRef, Term,
    TripleRef,
};
use thiserror::Error;

/// An IRI or a language tag given to an [`OntologyBuilder`] is invalid.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid IRI: {0}")]
    Iri(#[from] IriParseError),
    #[error("Invalid language tag: {0}")]
    LanguageTag(#[from] LanguageTagParseError),
}

/// Builds an ontology graph with its header, its entities and the prefixes to serialize it with.
///
/// Local names are resolved against the ontology namespace. Adding a triple twice is a no-op.
///
/// ```
/// use ontoflow::OntologyBuilder;
///
/// let mut builder = OntologyBuilder::new("http://example.com/zoo#", "zoo")?;
/// builder.class("Animal")?.label("Animal", "en")?;
/// builder
///     .class("Dog")?
///     .sub_class_of("Animal")?
///     .label("Dog", "en")?
///     .label("Perro", "es")?;
/// builder.class("Cat")?.sub_class_of("Animal")?;
/// builder.disjoint("Dog", "Cat")?;
/// let ontology = builder.build();
/// assert_eq!(ontology.graph.len(), 10);
/// # Result::<_, ontoflow::BuildError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct OntologyBuilder {
    namespace: String,
    ontology: NamedNode,
    graph: Graph,
    prefixes: Vec<(String, String)>,
}

impl OntologyBuilder {
    /// Starts an ontology whose IRI is also the namespace of its entities.
    ///
    /// The namespace is bound to `prefix`, next to the `rdf`, `rdfs`, `owl` and `xsd` prefixes.
    pub fn new(ontology_iri: &str, prefix: &str) -> Result<Self, BuildError> {
        let ontology = NamedNode::new(ontology_iri)?;
        let mut graph = Graph::new();
        graph.insert(TripleRef::new(&ontology, rdf::TYPE, owl::ONTOLOGY));
        let mut builder = Self {
            namespace: ontology_iri.to_owned(),
            ontology,
            graph,
            prefixes: Vec::new(),
        };
        builder
            .bind_prefix(prefix, ontology_iri)
            .bind_prefix("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#")
            .bind_prefix("rdfs", "http://www.w3.org/2000/01/rdf-schema#")
            .bind_prefix("owl", owl::NAMESPACE)
            .bind_prefix("xsd", "http://www.w3.org/2001/XMLSchema#");
        Ok(builder)
    }

    /// Binds a prefix for serialization, replacing a previous binding of the same prefix.
    pub fn bind_prefix(&mut self, prefix: &str, namespace: &str) -> &mut Self {
        if let Some(binding) = self.prefixes.iter_mut().find(|(p, _)| p == prefix) {
            namespace.clone_into(&mut binding.1);
        } else {
            self.prefixes.push((prefix.to_owned(), namespace.to_owned()));
        }
        self
    }

    #[inline]
    pub fn ontology_iri(&self) -> NamedNodeRef<'_> {
        self.ontology.as_ref()
    }

    /// The IRI of a local name in the ontology namespace.
    pub fn iri(&self, local_name: &str) -> Result<NamedNode, BuildError> {
        Ok(NamedNode::new(format!("{}{local_name}", self.namespace))?)
    }

    /// Adds an annotation on the ontology itself.
    pub fn annotate(&mut self, predicate: NamedNodeRef<'_>, value: impl Into<Term>) -> &mut Self {
        let value = value.into();
        self.graph
            .insert(TripleRef::new(&self.ontology, predicate, &value));
        self
    }

    /// Adds an `owl:imports` of another ontology.
    pub fn import(&mut self, ontology: NamedNodeRef<'_>) -> &mut Self {
        self.annotate(owl::IMPORTS, ontology)
    }

    /// Declares an `owl:Class`.
    pub fn class(&mut self, local_name: &str) -> Result<EntityBuilder<'_>, BuildError> {
        self.declare(local_name, owl::CLASS)
    }

    /// Declares an `owl:ObjectProperty`.
    pub fn object_property(&mut self, local_name: &str) -> Result<EntityBuilder<'_>, BuildError> {
        self.declare(local_name, owl::OBJECT_PROPERTY)
    }

    /// Declares an `owl:DatatypeProperty`.
    pub fn datatype_property(
        &mut self,
        local_name: &str,
    ) -> Result<EntityBuilder<'_>, BuildError> {
        self.declare(local_name, owl::DATATYPE_PROPERTY)
    }

    /// Declares an `owl:AnnotationProperty`.
    pub fn annotation_property(
        &mut self,
        local_name: &str,
    ) -> Result<EntityBuilder<'_>, BuildError> {
        self.declare(local_name, owl::ANNOTATION_PROPERTY)
    }

    /// Declares an `owl:NamedIndividual` instance of the class `class_local_name`.
    pub fn individual(
        &mut self,
        local_name: &str,
        class_local_name: &str,
    ) -> Result<EntityBuilder<'_>, BuildError> {
        let class = self.iri(class_local_name)?;
        let entity = self.declare(local_name, owl::NAMED_INDIVIDUAL)?;
        Ok(entity.add(rdf::TYPE, class))
    }

    /// States that the two classes have no common instance.
    pub fn disjoint(&mut self, first: &str, second: &str) -> Result<&mut Self, BuildError> {
        let first = self.iri(first)?;
        let second = self.iri(second)?;
        self.graph
            .insert(TripleRef::new(&first, owl::DISJOINT_WITH, &second));
        Ok(self)
    }

    #[inline]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Returns the ontology with its prefix bindings.
    pub fn build(self) -> LoadedGraph {
        LoadedGraph {
            graph: self.graph,
            prefixes: self.prefixes,
        }
    }

    fn declare(
        &mut self,
        local_name: &str,
        kind: NamedNodeRef<'_>,
    ) -> Result<EntityBuilder<'_>, BuildError> {
        let entity = self.iri(local_name)?;
        self.graph.insert(TripleRef::new(&entity, rdf::TYPE, kind));
        Ok(EntityBuilder {
            builder: self,
            entity,
        })
    }
}

/// Adds statements about one entity of an [`OntologyBuilder`].
///
/// Statements are added to the ontology as soon as each method is called.
pub struct EntityBuilder<'a> {
    builder: &'a mut OntologyBuilder,
    entity: NamedNode,
}

#[expect(clippy::return_self_not_must_use)]
impl EntityBuilder<'_> {
    #[inline]
    pub fn iri(&self) -> NamedNodeRef<'_> {
        self.entity.as_ref()
    }

    /// Adds an arbitrary statement with this entity as subject.
    pub fn add(self, predicate: NamedNodeRef<'_>, object: impl Into<Term>) -> Self {
        let object = object.into();
        self.builder
            .graph
            .insert(TripleRef::new(&self.entity, predicate, &object));
        self
    }

    /// `rdfs:label` with a language tag.
    pub fn label(self, text: &str, language: &str) -> Result<Self, BuildError> {
        let literal = Literal::new_language_tagged_literal(text, language)?;
        Ok(self.add(rdfs::LABEL, literal))
    }

    /// `rdfs:comment` with a language tag.
    pub fn comment(self, text: &str, language: &str) -> Result<Self, BuildError> {
        let literal = Literal::new_language_tagged_literal(text, language)?;
        Ok(self.add(rdfs::COMMENT, literal))
    }

    /// `skos:definition`
    pub fn definition(self, text: &str) -> Self {
        self.add(skos::DEFINITION, Literal::new_simple_literal(text))
    }

    /// `skos:example`
    pub fn example(self, text: &str) -> Self {
        self.add(skos::EXAMPLE, Literal::new_simple_literal(text))
    }

    /// `skos:altLabel`, usually the symbol of the concept.
    pub fn alt_label(self, text: &str) -> Self {
        self.add(skos::ALT_LABEL, Literal::new_simple_literal(text))
    }

    /// `dcterms:source`, the reference of the clause defining the entity.
    pub fn source(self, text: &str) -> Self {
        self.add(dcterms::SOURCE, Literal::new_simple_literal(text))
    }

    /// `rdfs:subClassOf` a class of the same ontology.
    pub fn sub_class_of(self, local_name: &str) -> Result<Self, BuildError> {
        let parent = self.builder.iri(local_name)?;
        Ok(self.add(rdfs::SUB_CLASS_OF, parent))
    }

    /// `rdfs:subClassOf` a class of another ontology.
    pub fn sub_class_of_iri(self, parent: NamedNodeRef<'_>) -> Self {
        self.add(rdfs::SUB_CLASS_OF, parent)
    }

    /// `rdfs:subPropertyOf` a property of the same ontology.
    pub fn sub_property_of(self, local_name: &str) -> Result<Self, BuildError> {
        let parent = self.builder.iri(local_name)?;
        Ok(self.add(rdfs::SUB_PROPERTY_OF, parent))
    }

    /// `rdfs:subPropertyOf` a property of another ontology.
    pub fn sub_property_of_iri(self, parent: NamedNodeRef<'_>) -> Self {
        self.add(rdfs::SUB_PROPERTY_OF, parent)
    }

    /// `rdfs:domain` a class of the same ontology.
    pub fn domain(self, local_name: &str) -> Result<Self, BuildError> {
        let class = self.builder.iri(local_name)?;
        Ok(self.add(rdfs::DOMAIN, class))
    }

    /// `rdfs:domain` a class of another ontology.
    pub fn domain_iri(self, class: NamedNodeRef<'_>) -> Self {
        self.add(rdfs::DOMAIN, class)
    }

    /// `rdfs:range` a class of the same ontology.
    pub fn range(self, local_name: &str) -> Result<Self, BuildError> {
        let class = self.builder.iri(local_name)?;
        Ok(self.add(rdfs::RANGE, class))
    }

    /// `rdfs:range` a class or a datatype of another vocabulary.
    pub fn range_iri(self, class: NamedNodeRef<'_>) -> Self {
        self.add(rdfs::RANGE, class)
    }

    /// `rdfs:range xsd:decimal`
    pub fn decimal_range(self) -> Self {
        self.range_iri(xsd::DECIMAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_names_resolve_against_namespace() {
        let builder = OntologyBuilder::new("http://example.com/onto#", "ex").unwrap();
        assert_eq!(
            builder.iri("Thing").unwrap().as_str(),
            "http://example.com/onto#Thing"
        );
        assert!(builder.iri("not a name").is_err());
    }

    #[test]
    fn rebinding_a_prefix_replaces_it() {
        let mut builder = OntologyBuilder::new("http://example.com/onto#", "ex").unwrap();
        builder.bind_prefix("ex", "http://example.com/other#");
        let prefixes = builder.build().prefixes;
        assert_eq!(
            prefixes
                .iter()
                .filter(|(prefix, _)| prefix == "ex")
                .collect::<Vec<_>>(),
            [&("ex".to_owned(), "http://example.com/other#".to_owned())]
        );
    }

    #[test]
    fn invalid_language_tag() {
        let mut builder = OntologyBuilder::new("http://example.com/onto#", "ex").unwrap();
        assert!(matches!(
            builder.class("A").unwrap().label("A", "not a tag"),
            Err(BuildError::LanguageTag(_))
        ));
    }
}
