#![cfg(test)]

use ontoflow::vocab::{owl, skos};
use ontoflow::{
    EC1990_NAMESPACE, GraphFormat, OntologyBuilder, Reasoner, ReasonerOutput, RlReasoner,
    eurocode_ontology, load_graph, save_graph,
};
use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{Literal, NamedNode, TripleRef};
use std::error::Error;
use tempfile::TempDir;

fn ec(local_name: &str) -> Result<NamedNode, Box<dyn Error>> {
    Ok(NamedNode::new(format!("{EC1990_NAMESPACE}{local_name}"))?)
}

#[test]
fn test_declaring_twice_adds_nothing() -> Result<(), Box<dyn Error>> {
    let mut builder = OntologyBuilder::new("http://example.com/onto#", "ex")?;
    builder.class("Beam")?.label("Beam", "en")?;
    let size = builder.graph().len();
    builder.class("Beam")?.label("Beam", "en")?;
    assert_eq!(builder.graph().len(), size);
    Ok(())
}

#[test]
fn test_individuals_and_properties() -> Result<(), Box<dyn Error>> {
    let mut builder = OntologyBuilder::new("http://example.com/onto#", "ex")?;
    builder.class("Beam")?;
    builder
        .object_property("supports")?
        .domain("Beam")?
        .range_iri(owl::THING);
    builder
        .datatype_property("span")?
        .domain("Beam")?
        .decimal_range();
    let b1 = builder.individual("b1", "Beam")?.iri().into_owned();
    let graph = builder.build().graph;

    assert!(graph.contains(TripleRef::new(&b1, rdf::TYPE, owl::NAMED_INDIVIDUAL)));
    assert!(graph.contains(TripleRef::new(
        &b1,
        rdf::TYPE,
        &NamedNode::new("http://example.com/onto#Beam")?
    )));
    assert!(graph.contains(TripleRef::new(
        &NamedNode::new("http://example.com/onto#supports")?,
        rdf::TYPE,
        owl::OBJECT_PROPERTY
    )));
    Ok(())
}

#[test]
fn test_annotation_property() -> Result<(), Box<dyn Error>> {
    let mut builder = OntologyBuilder::new("http://example.com/onto#", "ex")?;
    builder
        .annotation_property("clause")?
        .label("Eurocode clause", "en")?;
    let graph = builder.build().graph;

    let clause = NamedNode::new("http://example.com/onto#clause")?;
    assert!(graph.contains(TripleRef::new(&clause, rdf::TYPE, owl::ANNOTATION_PROPERTY)));
    assert!(!graph.contains(TripleRef::new(&clause, rdf::TYPE, owl::DATATYPE_PROPERTY)));
    assert!(graph.contains(TripleRef::new(
        &clause,
        rdfs::LABEL,
        &Literal::new_language_tagged_literal("Eurocode clause", "en")?
    )));
    Ok(())
}

#[test]
fn test_eurocode_limit_state_hierarchy() -> Result<(), Box<dyn Error>> {
    let ontology = eurocode_ontology()?;
    let graph = &ontology.graph;
    for (class, parent) in [
        ("UltimateLimitState", "LimitState"),
        ("ServiceabilityLimitState", "LimitState"),
        ("STR", "UltimateLimitState"),
        ("FireDesignSituation", "AccidentalDesignSituation"),
    ] {
        assert!(
            graph.contains(TripleRef::new(&ec(class)?, rdfs::SUB_CLASS_OF, &ec(parent)?)),
            "{class} should be a subclass of {parent}"
        );
    }
    assert!(graph.contains(TripleRef::new(
        &ec("LimitState")?,
        rdfs::LABEL,
        &Literal::new_language_tagged_literal("Limit State", "en")?
    )));
    assert!(
        graph
            .objects_for_subject_predicate(&ec("LimitState")?, skos::DEFINITION)
            .next()
            .is_some()
    );
    Ok(())
}

#[test]
fn test_eurocode_is_consistent() -> Result<(), Box<dyn Error>> {
    let ontology = eurocode_ontology()?;
    let ReasonerOutput::Consistent(entailed) = RlReasoner::new().reason(&ontology.graph)? else {
        panic!("the EN 1990 ontology should be consistent")
    };
    assert!(entailed.contains(TripleRef::new(
        &ec("STR")?,
        rdfs::SUB_CLASS_OF,
        &ec("LimitState")?
    )));
    Ok(())
}

#[test]
fn test_eurocode_detects_clashing_design_situations() -> Result<(), Box<dyn Error>> {
    let mut graph = eurocode_ontology()?.graph;
    let situation = NamedNode::new("http://example.com/bridge#situation")?;
    graph.insert(TripleRef::new(
        &situation,
        rdf::TYPE,
        &ec("FireDesignSituation")?,
    ));
    graph.insert(TripleRef::new(
        &situation,
        rdf::TYPE,
        &ec("PersistentDesignSituation")?,
    ));
    let ReasonerOutput::Inconsistent(unsatisfiable) = RlReasoner::new().reason(&graph)? else {
        panic!("a situation cannot be both persistent and accidental")
    };
    assert!(unsatisfiable.contains(&ec("PersistentDesignSituation")?));
    assert!(unsatisfiable.contains(&ec("AccidentalDesignSituation")?));
    Ok(())
}

#[test]
fn test_eurocode_serializes_as_rdf_xml_and_turtle() -> Result<(), Box<dyn Error>> {
    let ontology = eurocode_ontology()?;
    let dir = TempDir::new()?;
    for (file, format) in [
        ("EC1990.owl", GraphFormat::RdfXml),
        ("EC1990.ttl", GraphFormat::Turtle),
    ] {
        let path = dir.path().join(file);
        save_graph(&ontology.graph, &path, format, &ontology.prefixes)?;
        let loaded = load_graph(&path, format)?;
        assert_eq!(loaded.graph, ontology.graph);
    }
    Ok(())
}
