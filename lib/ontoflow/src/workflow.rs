//! Merging a terminology with assertional data, reasoning over it and persisting the outcome.
//!
//! The stages are types: a [`LoadedOntology`] is [merged](LoadedOntology::merge) into a
//! [`MergedOntology`] that is [reasoned](MergedOntology::reason) into a [`ReasoningResult`].

use crate::config::{ConfigError, WorkflowConfig};
use crate::convert::convert;
use crate::diff::{DiffReport, graph_difference};
use crate::error::{ConversionError, ParseError, WriteError};
use crate::io::{FormatSelection, GraphFormat, load_graph, save_graph};
use crate::reasoner::{Reasoner, ReasonerError, ReasonerOutput};
use crate::vocab::owl;
use oxrdf::{Graph, NamedNode, TermRef, Triple, TripleRef};
use std::collections::BTreeSet;
use std::fmt;
use std::fs::create_dir_all;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// A failure of the reasoning workflow.
///
/// An inconsistent ontology is not an error but a [`ReasoningResult::Inconsistent`].
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Write(#[from] WriteError),
    #[error(transparent)]
    Reasoner(#[from] ReasonerError),
    /// The temporary directory given to the reasoner could not be created.
    #[error("Failed to create the temporary directory {}: {source}", path.display())]
    TempDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The report could not be written.
    #[error("Failed to write the report: {0}")]
    Report(#[source] io::Error),
}

impl From<ConversionError> for WorkflowError {
    #[inline]
    fn from(error: ConversionError) -> Self {
        match error {
            ConversionError::Parse(e) => Self::Parse(e),
            ConversionError::Write(e) => Self::Write(e),
        }
    }
}

/// A terminology and the assertional data to check against it, not merged yet.
#[derive(Debug, Clone, Default)]
pub struct LoadedOntology {
    pub terminology: Graph,
    pub data: Graph,
    /// Prefixes to serialize the results with.
    pub prefixes: Vec<(String, String)>,
}

impl LoadedOntology {
    #[inline]
    pub fn new(terminology: Graph, data: Graph) -> Self {
        Self {
            terminology,
            data,
            prefixes: Vec::new(),
        }
    }

    /// Loads both files. The prefixes of the terminology win over the ones of the data.
    pub fn load(
        terminology: &Path,
        data: &Path,
        selection: FormatSelection,
    ) -> Result<Self, ParseError> {
        let terminology = load_graph(terminology, selection.resolve(terminology))?;
        let data = load_graph(data, selection.resolve(data))?;
        let mut prefixes = terminology.prefixes;
        for (name, iri) in data.prefixes {
            if !prefixes.iter().any(|(n, _)| *n == name) {
                prefixes.push((name, iri));
            }
        }
        Ok(Self {
            terminology: terminology.graph,
            data: data.graph,
            prefixes,
        })
    }

    /// Removes the `owl:imports` of the terminology that do not point to a local `file:` IRI.
    #[must_use]
    pub fn without_remote_imports(mut self) -> Self {
        let removed = prune_remote_imports(&mut self.terminology);
        if removed > 0 {
            info!("Pruned {removed} remote owl:imports from the terminology");
        }
        self
    }

    /// Builds the union of the terminology and the data.
    pub fn merge(self) -> MergedOntology {
        let graph = merge_graphs(&self.terminology, &self.data);
        info!(
            terminology = self.terminology.len(),
            data = self.data.len(),
            merged = graph.len(),
            "Merged data into the terminology"
        );
        MergedOntology {
            graph,
            prefixes: self.prefixes,
        }
    }
}

/// The union of a terminology and its data, ready to be reasoned over.
#[derive(Debug, Clone)]
pub struct MergedOntology {
    graph: Graph,
    prefixes: Vec<(String, String)>,
}

impl MergedOntology {
    #[inline]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    #[inline]
    pub fn prefixes(&self) -> &[(String, String)] {
        &self.prefixes
    }

    /// Runs the reasoner.
    ///
    /// A contradiction is returned as [`ReasoningResult::Inconsistent`]. Only failures of the
    /// reasoner itself are errors.
    pub fn reason(
        self,
        reasoner: &(impl Reasoner + ?Sized),
    ) -> Result<ReasoningResult, ReasonerError> {
        info!(
            reasoner = reasoner.name(),
            triples = self.graph.len(),
            "Reasoning"
        );
        Ok(match reasoner.reason(&self.graph)? {
            ReasonerOutput::Consistent(entailed) => {
                let mut augmented = self.graph.clone();
                augmented.extend(&entailed);
                let inferred = graph_difference(&self.graph, &augmented);
                info!(inferred = inferred.len(), "The ontology is consistent");
                ReasoningResult::Consistent {
                    augmented,
                    inferred,
                }
            }
            ReasonerOutput::Inconsistent(unsatisfiable) => {
                warn!(
                    unsatisfiable = unsatisfiable.len(),
                    "The ontology is inconsistent"
                );
                ReasoningResult::Inconsistent {
                    merged: self.graph,
                    unsatisfiable,
                }
            }
        })
    }
}

/// The outcome of reasoning over a [`MergedOntology`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReasoningResult {
    Consistent {
        /// The merged graph plus everything the reasoner entailed.
        augmented: Graph,
        /// The triples of `augmented` that were not in the merged graph.
        inferred: Graph,
    },
    Inconsistent {
        /// The merged graph, as it was given to the reasoner.
        merged: Graph,
        /// The classes found unsatisfiable. May be empty.
        unsatisfiable: BTreeSet<NamedNode>,
    },
}

impl ReasoningResult {
    #[inline]
    pub fn is_consistent(&self) -> bool {
        matches!(self, Self::Consistent { .. })
    }

    /// The graph to persist: the augmented graph, or the merged one if it is inconsistent.
    #[inline]
    pub fn graph(&self) -> &Graph {
        match self {
            Self::Consistent { augmented, .. } => augmented,
            Self::Inconsistent { merged, .. } => merged,
        }
    }

    /// Saves [`graph`](Self::graph) as RDF/XML, then optionally as Turtle.
    pub fn save(
        &self,
        output: &Path,
        turtle_output: Option<&Path>,
        prefixes: &[(String, String)],
    ) -> Result<(), WorkflowError> {
        save_graph(self.graph(), output, GraphFormat::RdfXml, prefixes)?;
        info!(path = %output.display(), "Saved the reasoned ontology");
        if let Some(turtle_output) = turtle_output {
            convert(
                output,
                GraphFormat::RdfXml,
                turtle_output,
                GraphFormat::Turtle,
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for ReasoningResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Consistent { inferred, .. } => writeln!(
                f,
                "Reasoning completed: ontology is consistent ({} inferred triples)",
                inferred.len()
            ),
            Self::Inconsistent { unsatisfiable, .. } => {
                writeln!(f, "Ontology is inconsistent")?;
                if unsatisfiable.is_empty() {
                    writeln!(f, "No unsatisfiable class could be identified")?;
                }
                for class in unsatisfiable {
                    writeln!(f, "Unsatisfiable class: {class}")?;
                }
                Ok(())
            }
        }
    }
}

/// The union of two graphs.
pub fn merge_graphs(terminology: &Graph, data: &Graph) -> Graph {
    let mut merged = terminology.clone();
    merged.extend(data);
    merged
}

/// Removes the `owl:imports` statements whose target is not a `file:` IRI.
///
/// Returns the number of removed statements.
pub fn prune_remote_imports(graph: &mut Graph) -> usize {
    let remote = graph
        .triples_for_predicate(owl::IMPORTS)
        .filter(|t| {
            matches!(t.object, TermRef::NamedNode(target) if !target.as_str().starts_with("file:"))
        })
        .map(TripleRef::into_owned)
        .collect::<Vec<Triple>>();
    for triple in &remote {
        graph.remove(triple);
    }
    remote.len()
}

/// Merges `data` into `terminology` and runs `reasoner` on the result.
///
/// ```
/// use ontoflow::{ReasoningResult, RlReasoner, run_reasoning};
/// use oxrdf::vocab::{rdf, rdfs};
/// use oxrdf::{Graph, NamedNodeRef, TripleRef};
///
/// let dog = NamedNodeRef::new("http://example.com/Dog")?;
/// let animal = NamedNodeRef::new("http://example.com/Animal")?;
/// let rex = NamedNodeRef::new("http://example.com/rex")?;
/// let mut terminology = Graph::new();
/// terminology.insert(TripleRef::new(dog, rdfs::SUB_CLASS_OF, animal));
/// let mut data = Graph::new();
/// data.insert(TripleRef::new(rex, rdf::TYPE, dog));
///
/// let ReasoningResult::Consistent { inferred, .. } =
///     run_reasoning(&terminology, &data, &RlReasoner::new())?
/// else {
///     unreachable!()
/// };
/// assert!(inferred.contains(TripleRef::new(rex, rdf::TYPE, animal)));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
pub fn run_reasoning(
    terminology: &Graph,
    data: &Graph,
    reasoner: &(impl Reasoner + ?Sized),
) -> Result<ReasoningResult, ReasonerError> {
    LoadedOntology::new(terminology.clone(), data.clone())
        .merge()
        .reason(reasoner)
}

/// What a [`run_workflow`] call produced.
#[derive(Debug, Clone)]
pub struct WorkflowSummary {
    pub result: ReasoningResult,
    /// The triples of the output that are not in the baseline, if a baseline is configured.
    pub new_triples: Option<Graph>,
}

/// Runs the whole configured pipeline: conversions, loading, merging, reasoning, saving and
/// diffing against the baseline.
///
/// The human readable reports are written to `out`.
pub fn run_workflow(
    config: &WorkflowConfig,
    mut out: impl Write,
) -> Result<WorkflowSummary, WorkflowError> {
    if let Some(temp_dir) = &config.temp_dir {
        create_dir_all(temp_dir).map_err(|source| WorkflowError::TempDir {
            path: temp_dir.clone(),
            source,
        })?;
    }
    for step in &config.conversions {
        convert(
            &step.from,
            step.from_format.resolve(&step.from),
            &step.to,
            step.to_format.resolve(&step.to),
        )?;
    }

    let mut ontology = LoadedOntology::load(&config.terminology, &config.data, config.format)?;
    if config.prune_remote_imports {
        ontology = ontology.without_remote_imports();
    }
    let merged = ontology.merge();
    let prefixes = merged.prefixes().to_vec();
    let reasoner = config.reasoner.build(
        config.temp_dir.as_deref(),
        config.infer_property_values,
    );
    let result = merged.reason(reasoner.as_ref())?;
    write!(out, "{result}").map_err(WorkflowError::Report)?;
    result.save(&config.output, config.turtle_output.as_deref(), &prefixes)?;

    let new_triples = match &config.baseline {
        Some(baseline) => {
            // The output is always written as RDF/XML whatever the input format selection.
            let baseline_graph = load_graph(baseline, config.format.resolve(baseline))?.graph;
            let output_graph = load_graph(&config.output, GraphFormat::RdfXml)?.graph;
            let new_triples = graph_difference(&baseline_graph, &output_graph);
            info!(
                baseline = %baseline.display(),
                new_triples = new_triples.len(),
                "Compared the output with the baseline"
            );
            DiffReport::new(&new_triples)
                .write_to(&mut out)
                .map_err(WorkflowError::Report)?;
            Some(new_triples)
        }
        None => None,
    };
    Ok(WorkflowSummary {
        result,
        new_triples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::NamedNodeRef;

    const ONTOLOGY: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://example.com/onto");

    #[test]
    fn only_remote_imports_are_pruned() {
        let local = NamedNodeRef::new_unchecked("file:///data/bot.owl");
        let remote = NamedNodeRef::new_unchecked("https://w3id.org/bot");
        let mut graph = Graph::new();
        graph.insert(TripleRef::new(ONTOLOGY, owl::IMPORTS, local));
        graph.insert(TripleRef::new(ONTOLOGY, owl::IMPORTS, remote));
        assert_eq!(prune_remote_imports(&mut graph), 1);
        assert!(graph.contains(TripleRef::new(ONTOLOGY, owl::IMPORTS, local)));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn inconsistent_report_without_classes() {
        let result = ReasoningResult::Inconsistent {
            merged: Graph::new(),
            unsatisfiable: BTreeSet::new(),
        };
        assert_eq!(
            result.to_string(),
            "Ontology is inconsistent\nNo unsatisfiable class could be identified\n"
        );
    }

    #[test]
    fn inconsistent_report_lists_classes() {
        let result = ReasoningResult::Inconsistent {
            merged: Graph::new(),
            unsatisfiable: BTreeSet::from([NamedNode::new_unchecked("http://example.com/Dog")]),
        };
        assert_eq!(
            result.to_string(),
            "Ontology is inconsistent\nUnsatisfiable class: <http://example.com/Dog>\n"
        );
    }
}
