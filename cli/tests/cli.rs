#![cfg(test)]

use anyhow::Result;
use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;

const TERMINOLOGY: &str = r#"@prefix zoo: <http://example.com/zoo#> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

zoo:Dog a owl:Class ; rdfs:subClassOf zoo:Animal ; owl:disjointWith zoo:Cat .
zoo:Cat a owl:Class ; rdfs:subClassOf zoo:Animal .
"#;

const DATA: &str = "@prefix zoo: <http://example.com/zoo#> .\nzoo:rex a zoo:Dog .\n";

fn cli_command() -> Result<Command> {
    Ok(Command::cargo_bin("ontoflow")?)
}

fn zoo() -> Result<TempDir> {
    let dir = TempDir::new()?;
    dir.child("zoo.ttl").write_str(TERMINOLOGY)?;
    dir.child("data.ttl").write_str(DATA)?;
    Ok(dir)
}

#[test]
fn cli_help() -> Result<()> {
    cli_command()?
        .arg("--help")
        .env("RUST_LOG", "info")
        .assert()
        .success()
        .stdout(predicate::str::contains("build-ontology"));
    Ok(())
}

#[test]
fn cli_convert_and_diff() -> Result<()> {
    let dir = zoo()?;
    cli_command()?
        .arg("convert")
        .arg("--from-file")
        .arg(dir.child("data.ttl").path())
        .arg("--to-file")
        .arg(dir.child("data.owl").path())
        .assert()
        .success();
    dir.child("data.owl")
        .assert(predicate::str::contains("http://example.com/zoo#rex"));

    cli_command()?
        .arg("diff")
        .arg("--original")
        .arg(dir.child("data.ttl").path())
        .arg("--reasoned")
        .arg(dir.child("data.owl").path())
        .assert()
        .success()
        .stdout("No new inferred triples found.\n");
    Ok(())
}

#[test]
fn cli_convert_unknown_format() -> Result<()> {
    let dir = zoo()?;
    cli_command()?
        .arg("convert")
        .arg("--from-file")
        .arg(dir.child("data.ttl").path())
        .arg("--to-file")
        .arg(dir.child("data.jsonld").path())
        .arg("--to-format")
        .arg("jsonld")
        .assert()
        .failure()
        .stderr(predicate::str::contains("jsonld"));
    Ok(())
}

#[test]
fn cli_convert_invalid_file() -> Result<()> {
    let dir = TempDir::new()?;
    dir.child("broken.ttl").write_str("<http://example.com/s> .")?;
    cli_command()?
        .arg("convert")
        .arg("--from-file")
        .arg(dir.child("broken.ttl").path())
        .arg("--to-file")
        .arg(dir.child("broken.owl").path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.ttl"));
    dir.child("broken.owl").assert(predicate::path::missing());
    Ok(())
}

#[test]
fn cli_reason_consistent() -> Result<()> {
    let dir = zoo()?;
    cli_command()?
        .arg("reason")
        .arg("--terminology")
        .arg(dir.child("zoo.ttl").path())
        .arg("--data")
        .arg(dir.child("data.ttl").path())
        .arg("--output")
        .arg(dir.child("reasoned.owl").path())
        .arg("--turtle-output")
        .arg(dir.child("reasoned.ttl").path())
        .arg("--baseline")
        .arg(dir.child("data.ttl").path())
        .arg("--temp-dir")
        .arg(dir.child("tmp").path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Reasoning completed: ontology is consistent",
        ))
        .stdout(predicate::str::contains(
            "+ <http://example.com/zoo#rex> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://example.com/zoo#Animal>",
        ));
    dir.child("reasoned.owl").assert(predicate::path::is_file());
    dir.child("reasoned.ttl")
        .assert(predicate::str::contains("Animal"));
    dir.child("tmp").assert(predicate::path::is_dir());
    Ok(())
}

#[test]
fn cli_reason_inconsistent() -> Result<()> {
    let dir = zoo()?;
    dir.child("data.ttl")
        .write_str("@prefix zoo: <http://example.com/zoo#> .\nzoo:rex a zoo:Dog , zoo:Cat .\n")?;
    cli_command()?
        .arg("reason")
        .arg("--terminology")
        .arg(dir.child("zoo.ttl").path())
        .arg("--data")
        .arg(dir.child("data.ttl").path())
        .arg("--output")
        .arg(dir.child("merged.owl").path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Ontology is inconsistent\n"))
        .stdout(predicate::str::contains(
            "Unsatisfiable class: <http://example.com/zoo#Cat>",
        ));
    dir.child("merged.owl").assert(predicate::path::is_file());
    Ok(())
}

#[test]
fn cli_reason_process_requires_program() -> Result<()> {
    let dir = zoo()?;
    cli_command()?
        .arg("reason")
        .arg("--terminology")
        .arg(dir.child("zoo.ttl").path())
        .arg("--data")
        .arg(dir.child("data.ttl").path())
        .arg("--output")
        .arg(dir.child("reasoned.owl").path())
        .arg("--reasoner")
        .arg("process")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--program"));
    Ok(())
}

#[test]
fn cli_reason_missing_program() -> Result<()> {
    let dir = zoo()?;
    cli_command()?
        .arg("reason")
        .arg("--terminology")
        .arg(dir.child("zoo.ttl").path())
        .arg("--data")
        .arg(dir.child("data.ttl").path())
        .arg("--output")
        .arg(dir.child("reasoned.owl").path())
        .arg("--reasoner")
        .arg("process")
        .arg("--program")
        .arg("/nonexistent/ontoflow-reasoner")
        .arg("--arg")
        .arg("{input}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to start the reasoner"));
    dir.child("reasoned.owl").assert(predicate::path::missing());
    Ok(())
}

#[test]
fn cli_run_workflow() -> Result<()> {
    let dir = zoo()?;
    dir.child("workflow.toml").write_str(
        r#"
terminology = "zoo.owl"
data = "data.owl"
output = "out/reasoned.owl"
baseline = "data.owl"

[[convert]]
from = "zoo.ttl"
to = "zoo.owl"

[[convert]]
from = "data.ttl"
to = "data.owl"

[reasoner]
kind = "rl"
max_iterations = 100
"#,
    )?;
    dir.child("out").create_dir_all()?;
    cli_command()?
        .arg("run")
        .arg("--config")
        .arg(dir.child("workflow.toml").path())
        .arg("--log-format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("New inferred triples:"))
        .stderr(predicate::str::contains("\"level\":\"INFO\""));
    dir.child("out/reasoned.owl").assert(predicate::path::is_file());
    Ok(())
}

#[test]
fn cli_run_invalid_workflow() -> Result<()> {
    let dir = TempDir::new()?;
    dir.child("workflow.toml")
        .write_str("terminology = \"t.owl\"\ndata = \"d.owl\"\n")?;
    cli_command()?
        .arg("run")
        .arg("--config")
        .arg(dir.child("workflow.toml").path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("workflow.toml"));
    Ok(())
}

#[test]
fn cli_build_ontology() -> Result<()> {
    let dir = TempDir::new()?;
    cli_command()?
        .arg("build-ontology")
        .arg("--to-file")
        .arg(dir.child("EC1990.ttl").path())
        .assert()
        .success();
    dir.child("EC1990.ttl")
        .assert(predicate::str::contains("UltimateLimitState"))
        .assert(predicate::str::contains("@prefix ec:"));
    Ok(())
}
