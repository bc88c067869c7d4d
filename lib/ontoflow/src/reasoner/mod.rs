//! Reasoner abstraction and its implementations.
//!
//! A [`Reasoner`] takes a graph holding both terminology and data and either returns the
//! entailed triples or reports that no model exists. Everything else (the external program
//! could not be started, crashed, ran out of time...) is a [`ReasonerError`].

mod process;
mod rl;
mod rules;

use crate::error::{ParseError, WriteError};
use oxrdf::{Graph, NamedNode};
pub use process::ProcessReasoner;
pub use rl::{RlReasoner, RlReasonerConfig};
pub use rules::RlRule;
use std::collections::BTreeSet;
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

/// A reasoner that can be swapped behind the reasoning workflow.
pub trait Reasoner {
    /// A short name for logs.
    fn name(&self) -> &str;

    /// Computes what `graph` entails.
    ///
    /// A logical contradiction is a regular outcome ([`ReasonerOutput::Inconsistent`]), not an
    /// error.
    fn reason(&self, graph: &Graph) -> Result<ReasonerOutput, ReasonerError>;
}

impl<R: Reasoner + ?Sized> Reasoner for &R {
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn reason(&self, graph: &Graph) -> Result<ReasonerOutput, ReasonerError> {
        (**self).reason(graph)
    }
}

impl<R: Reasoner + ?Sized> Reasoner for Box<R> {
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn reason(&self, graph: &Graph) -> Result<ReasonerOutput, ReasonerError> {
        (**self).reason(graph)
    }
}

/// The two observable outcomes of a reasoner run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReasonerOutput {
    /// The input is consistent. Holds the entailed triples, possibly including input triples.
    Consistent(Graph),
    /// The input is contradictory. Holds the classes found unsatisfiable, possibly none if the
    /// reasoner could not localize the contradiction.
    Inconsistent(BTreeSet<NamedNode>),
}

/// A reasoner failure that is not a logical inconsistency.
#[derive(Debug, Error)]
pub enum ReasonerError {
    /// The reasoner executable could not be started (missing binary, permission denied...).
    #[error("Failed to start the reasoner {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The reasoner did not finish within the configured time.
    #[error("The reasoner did not finish within {} seconds", timeout.as_secs_f64())]
    Timeout { timeout: Duration },
    /// The reasoner exited with an error that is not an inconsistency report.
    #[error("The reasoner exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },
    /// The reasoner output could not be read back as RDF.
    #[error("The reasoner output is not valid RDF: {0}")]
    Output(#[source] ParseError),
    /// The reasoner input could not be written.
    #[error("Failed to write the reasoner input: {0}")]
    Input(#[from] WriteError),
    #[error(transparent)]
    Io(#[from] io::Error),
    /// Rule application did not reach a fixpoint within the allowed number of rounds.
    #[error("No fixpoint reached after {0} iterations")]
    MaxIterationsExceeded(usize),
}
