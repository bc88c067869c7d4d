#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod builder;
mod config;
mod convert;
mod diff;
mod error;
mod eurocode;
mod io;
mod reasoner;
pub mod vocab;
mod workflow;

pub use builder::{BuildError, EntityBuilder, OntologyBuilder};
pub use config::{ConfigError, ConversionStep, ReasonerSettings, WorkflowConfig};
pub use convert::convert;
pub use diff::{DiffReport, diff_files, graph_difference};
pub use error::{ConversionError, ParseError, WriteError};
pub use eurocode::{EC1990_NAMESPACE, EC1990_PREFIX, eurocode_ontology};
pub use io::{
    FormatSelection, GraphFormat, LoadedGraph, UnknownFormatError, load_graph, parse_graph,
    save_graph, serialize_graph,
};
pub use reasoner::{
    ProcessReasoner, Reasoner, ReasonerError, ReasonerOutput, RlReasoner, RlReasonerConfig,
    RlRule,
};
pub use workflow::{
    LoadedOntology, MergedOntology, ReasoningResult, WorkflowError, WorkflowSummary,
    merge_graphs, prune_remote_imports, run_reasoning, run_workflow,
};
