#![cfg(test)]

use ontoflow::{ConversionError, GraphFormat, convert, load_graph, parse_graph, save_graph};
use oxrdf::vocab::{rdf, rdfs, xsd};
use oxrdf::{Graph, Literal, NamedNodeRef, TripleRef};
use std::error::Error;
use std::fs;
use tempfile::TempDir;

const DATA: &str = r#"
@prefix ex: <http://example.com/> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .

ex:Beam a ex:Member ;
    rdfs:label "Beam"@en , "Poutre"@fr ;
    ex:span "6.5"^^xsd:decimal ;
    rdfs:comment "A horizontal member" .
ex:Member rdfs:subClassOf ex:Element .
"#;

fn data() -> Result<Graph, Box<dyn Error>> {
    Ok(parse_graph(DATA.as_bytes(), GraphFormat::Turtle, None)?.graph)
}

#[test]
fn test_parse_keeps_prefixes() -> Result<(), Box<dyn Error>> {
    let loaded = parse_graph(DATA.as_bytes(), GraphFormat::Turtle, None)?;
    assert_eq!(loaded.graph.len(), 6);
    assert!(
        loaded
            .prefixes
            .contains(&("ex".to_owned(), "http://example.com/".to_owned()))
    );
    Ok(())
}

#[test]
fn test_turtle_to_rdf_xml_and_back() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let turtle = dir.path().join("data.ttl");
    let rdf_xml = dir.path().join("data.owl");
    let back = dir.path().join("back.ttl");
    fs::write(&turtle, DATA)?;

    assert_eq!(
        convert(&turtle, GraphFormat::Turtle, &rdf_xml, GraphFormat::RdfXml)?,
        6
    );
    assert_eq!(
        convert(&rdf_xml, GraphFormat::RdfXml, &back, GraphFormat::Turtle)?,
        6
    );

    let expected = data()?;
    assert_eq!(load_graph(&rdf_xml, GraphFormat::RdfXml)?.graph, expected);
    assert_eq!(load_graph(&back, GraphFormat::Turtle)?.graph, expected);
    Ok(())
}

#[test]
fn test_typed_and_tagged_literals_survive_rdf_xml() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("data.owl");
    save_graph(&data()?, &path, GraphFormat::RdfXml, &[])?;
    let graph = load_graph(&path, GraphFormat::RdfXml)?.graph;
    let beam = NamedNodeRef::new("http://example.com/Beam")?;
    assert!(graph.contains(TripleRef::new(
        beam,
        NamedNodeRef::new("http://example.com/span")?,
        &Literal::new_typed_literal("6.5", xsd::DECIMAL),
    )));
    assert!(graph.contains(TripleRef::new(
        beam,
        rdfs::LABEL,
        &Literal::new_language_tagged_literal("Poutre", "fr")?,
    )));
    assert!(graph.contains(TripleRef::new(
        beam,
        rdf::TYPE,
        NamedNodeRef::new("http://example.com/Member")?
    )));
    Ok(())
}

#[test]
fn test_parse_error_names_the_file() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let source = dir.path().join("broken.ttl");
    let destination = dir.path().join("broken.owl");
    fs::write(&source, "<http://example.com/s> <http://example.com/p> .")?;

    let Err(ConversionError::Parse(error)) = convert(
        &source,
        GraphFormat::Turtle,
        &destination,
        GraphFormat::RdfXml,
    ) else {
        panic!("the conversion of an invalid file should fail")
    };
    assert_eq!(error.path(), source);
    assert!(!error.is_io());
    assert!(error.to_string().contains("broken.ttl"));
    assert!(!destination.exists());
    Ok(())
}

#[test]
fn test_missing_source_is_an_io_error() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let error = load_graph(&dir.path().join("missing.owl"), GraphFormat::RdfXml)
        .err()
        .ok_or("loading a missing file should fail")?;
    assert!(error.is_io());
    Ok(())
}

#[test]
fn test_unwritable_destination() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let source = dir.path().join("data.ttl");
    fs::write(&source, DATA)?;
    let destination = dir.path().join("missing").join("data.owl");
    let Err(ConversionError::Write(error)) =
        convert(&source, GraphFormat::Turtle, &destination, GraphFormat::RdfXml)
    else {
        panic!("writing into a missing directory should fail")
    };
    assert_eq!(error.path(), destination);
    Ok(())
}
