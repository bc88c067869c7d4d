#![cfg(test)]

use ontoflow::vocab::owl;
use ontoflow::{
    FormatSelection, GraphFormat, LoadedOntology, ReasoningResult, RlReasoner, WorkflowConfig,
    WorkflowError, load_graph, merge_graphs, run_workflow, save_graph,
};
use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{Graph, NamedNodeRef, TripleRef};
use std::error::Error;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const ONTOLOGY: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://example.com/zoo");
const ANIMAL: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://example.com/zoo#Animal");
const DOG: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://example.com/zoo#Dog");
const CAT: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://example.com/zoo#Cat");
const REX: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://example.com/zoo#rex");

const DATA: &str = "@prefix zoo: <http://example.com/zoo#> .\nzoo:rex a zoo:Dog .\n";
const CLASHING_DATA: &str =
    "@prefix zoo: <http://example.com/zoo#> .\nzoo:rex a zoo:Dog , zoo:Cat .\n";

fn terminology() -> Graph {
    let mut graph = Graph::new();
    graph.insert(TripleRef::new(ONTOLOGY, rdf::TYPE, owl::ONTOLOGY));
    graph.insert(TripleRef::new(
        ONTOLOGY,
        owl::IMPORTS,
        NamedNodeRef::new_unchecked("https://w3id.org/bot"),
    ));
    graph.insert(TripleRef::new(DOG, rdfs::SUB_CLASS_OF, ANIMAL));
    graph.insert(TripleRef::new(DOG, owl::DISJOINT_WITH, CAT));
    graph
}

/// Writes the terminology, the Turtle data and a workflow file converting the data to RDF/XML.
fn setup(dir: &Path, data: &str, extra: &str) -> Result<WorkflowConfig, Box<dyn Error>> {
    save_graph(
        &terminology(),
        &dir.join("zoo.owl"),
        GraphFormat::RdfXml,
        &[("zoo".into(), "http://example.com/zoo#".into())],
    )?;
    fs::write(dir.join("data.ttl"), data)?;
    let config = dir.join("workflow.toml");
    fs::write(
        &config,
        format!(
            r#"
terminology = "zoo.owl"
data = "build/data.owl"
output = "build/reasoned.owl"
turtle_output = "build/reasoned.ttl"
temp_dir = "build/tmp"
prune_remote_imports = true
{extra}
[[convert]]
from = "data.ttl"
to = "build/data.owl"
"#
        ),
    )?;
    fs::create_dir_all(dir.join("build"))?;
    Ok(WorkflowConfig::from_file(&config)?)
}

#[test]
fn test_merge_is_a_union() {
    let mut data = Graph::new();
    data.insert(TripleRef::new(REX, rdf::TYPE, DOG));
    data.insert(TripleRef::new(DOG, rdfs::SUB_CLASS_OF, ANIMAL));
    let merged = merge_graphs(&terminology(), &data);
    assert_eq!(merged.len(), terminology().len() + 1);
    assert!(terminology().iter().all(|t| merged.contains(t)));
    assert!(data.iter().all(|t| merged.contains(t)));
    assert_eq!(merge_graphs(&terminology(), &Graph::new()), terminology());
}

#[test]
fn test_pruning_before_merge() {
    let merged = LoadedOntology::new(terminology(), Graph::new())
        .without_remote_imports()
        .merge();
    assert_eq!(merged.graph().len(), terminology().len() - 1);
    assert_eq!(
        merged.graph().triples_for_predicate(owl::IMPORTS).count(),
        0
    );
}

#[test]
fn test_staged_reasoning() -> Result<(), Box<dyn Error>> {
    let mut data = Graph::new();
    data.insert(TripleRef::new(REX, rdf::TYPE, DOG));
    let result = LoadedOntology::new(terminology(), data)
        .merge()
        .reason(&RlReasoner::new())?;
    let ReasoningResult::Consistent { inferred, .. } = result else {
        panic!("the zoo should be consistent")
    };
    assert!(inferred.contains(TripleRef::new(REX, rdf::TYPE, ANIMAL)));
    Ok(())
}

#[test]
fn test_consistent_workflow() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let config = setup(dir.path(), DATA, "baseline = \"build/data.owl\"")?;
    let mut report = Vec::new();
    let summary = run_workflow(&config, &mut report)?;
    let report = String::from_utf8(report)?;

    assert!(summary.result.is_consistent());
    assert!(dir.path().join("build/tmp").is_dir());
    assert!(report.starts_with("Reasoning completed: ontology is consistent"));
    assert!(report.contains(
        "+ <http://example.com/zoo#rex> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://example.com/zoo#Animal>"
    ));

    let output = load_graph(&dir.path().join("build/reasoned.owl"), GraphFormat::RdfXml)?;
    assert!(output.graph.contains(TripleRef::new(REX, rdf::TYPE, ANIMAL)));
    assert_eq!(output.graph.triples_for_predicate(owl::IMPORTS).count(), 0);
    let turtle = load_graph(&dir.path().join("build/reasoned.ttl"), GraphFormat::Turtle)?;
    assert_eq!(turtle.graph, output.graph);

    let new_triples = summary.new_triples.ok_or("a baseline is configured")?;
    assert!(new_triples.contains(TripleRef::new(REX, rdf::TYPE, ANIMAL)));
    assert!(!new_triples.contains(TripleRef::new(REX, rdf::TYPE, DOG)));
    Ok(())
}

#[test]
fn test_inconsistent_workflow_saves_the_merged_graph() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let config = setup(dir.path(), CLASHING_DATA, "")?;
    let mut report = Vec::new();
    let summary = run_workflow(&config, &mut report)?;
    let report = String::from_utf8(report)?;

    assert!(!summary.result.is_consistent());
    assert!(summary.new_triples.is_none());
    assert!(report.starts_with("Ontology is inconsistent\n"));
    assert!(report.contains("Unsatisfiable class: <http://example.com/zoo#Dog>"));

    let output = load_graph(&dir.path().join("build/reasoned.owl"), GraphFormat::RdfXml)?;
    assert!(output.graph.contains(TripleRef::new(REX, rdf::TYPE, CAT)));
    assert!(!output.graph.contains(TripleRef::new(REX, rdf::TYPE, ANIMAL)));
    Ok(())
}

#[test]
fn test_explicit_format_overrides_extensions() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let mut config = setup(dir.path(), DATA, "")?;
    config.format = FormatSelection::Explicit(GraphFormat::Turtle);
    let Err(WorkflowError::Parse(error)) = run_workflow(&config, Vec::new()) else {
        panic!("RDF/XML files should not parse as Turtle")
    };
    assert_eq!(error.path(), dir.path().join("zoo.owl"));
    Ok(())
}

#[test]
fn test_turtle_inputs_with_a_baseline() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    save_graph(
        &terminology(),
        &dir.path().join("zoo.owl"),
        GraphFormat::Turtle,
        &[],
    )?;
    fs::write(dir.path().join("data.owl"), DATA)?;
    let config = dir.path().join("workflow.toml");
    fs::write(
        &config,
        "terminology = \"zoo.owl\"\ndata = \"data.owl\"\noutput = \"reasoned.owl\"\n\
         baseline = \"data.owl\"\nformat = \"turtle\"\n",
    )?;
    let config = WorkflowConfig::from_file(&config)?;
    let mut report = Vec::new();
    let summary = run_workflow(&config, &mut report)?;

    assert!(summary.result.is_consistent());
    let new_triples = summary.new_triples.ok_or("a baseline is configured")?;
    assert!(new_triples.contains(TripleRef::new(REX, rdf::TYPE, ANIMAL)));
    assert!(!new_triples.contains(TripleRef::new(REX, rdf::TYPE, DOG)));
    assert!(String::from_utf8(report)?.contains("New inferred triples:"));
    let output = load_graph(&dir.path().join("reasoned.owl"), GraphFormat::RdfXml)?;
    assert!(output.graph.contains(TripleRef::new(REX, rdf::TYPE, ANIMAL)));
    Ok(())
}

#[test]
fn test_missing_workflow_file() {
    assert!(WorkflowConfig::from_file(Path::new("/nonexistent/workflow.toml")).is_err());
}
