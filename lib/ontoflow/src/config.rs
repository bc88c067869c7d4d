//! Workflow description files.
//!
//! A workflow file is a TOML document describing a full run of [`run_workflow`]:
//!
//! ```toml
//! terminology = "ontologies/concrete.owl"
//! data = "workflow/test-data.owl"
//! output = "output/reasoned_ontology.owl"
//! turtle_output = "output/reasoned_ontology.ttl"
//! baseline = "workflow/test-data.owl"
//! temp_dir = "tmp/reasoner"
//! prune_remote_imports = true
//!
//! [[convert]]
//! from = "workflow/test-data.ttl"
//! to = "workflow/test-data.owl"
//!
//! [reasoner]
//! kind = "process"
//! program = "pellet"
//! args = ["realize", "{input}"]
//! timeout_secs = 600
//! ```
//!
//! Relative paths are resolved against the directory of the file.
//!
//! [`run_workflow`]: crate::run_workflow

use crate::io::{FormatSelection, GraphFormat};
use crate::reasoner::{ProcessReasoner, Reasoner, RlReasoner, RlReasonerConfig};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// A workflow file could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read the workflow file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid workflow file {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid workflow: {0}")]
    Invalid(String),
}

/// A full reasoning run.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkflowConfig {
    /// The terminology (TBox) file.
    pub terminology: PathBuf,
    /// The assertional data (ABox) file.
    pub data: PathBuf,
    /// Where the reasoned ontology is written, as RDF/XML.
    pub output: PathBuf,
    /// Where to also write the reasoned ontology as Turtle.
    #[serde(default)]
    pub turtle_output: Option<PathBuf>,
    /// File to diff the output against.
    #[serde(default)]
    pub baseline: Option<PathBuf>,
    /// How input file formats are chosen.
    #[serde(default)]
    pub format: FormatSelection,
    /// Directory in which the reasoner may create temporary files. Created if missing.
    #[serde(default)]
    pub temp_dir: Option<PathBuf>,
    /// Drop the `owl:imports` of non local ontologies before reasoning.
    #[serde(default)]
    pub prune_remote_imports: bool,
    /// Also derive property assertions between individuals.
    #[serde(default = "default_infer_property_values")]
    pub infer_property_values: bool,
    #[serde(default)]
    pub reasoner: ReasonerSettings,
    /// Conversions done before anything else.
    #[serde(default, rename = "convert")]
    pub conversions: Vec<ConversionStep>,
}

fn default_infer_property_values() -> bool {
    true
}

/// A file to convert before loading the ontology.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConversionStep {
    pub from: PathBuf,
    pub to: PathBuf,
    #[serde(default)]
    pub from_format: FormatSelection,
    #[serde(default)]
    pub to_format: FormatSelection,
}

/// Which reasoner to run.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ReasonerSettings {
    /// The in-process [`RlReasoner`].
    Rl {
        #[serde(default = "default_max_iterations")]
        max_iterations: usize,
        /// No limit if missing or 0.
        #[serde(default)]
        timeout_secs: Option<u64>,
    },
    /// An external program run by a [`ProcessReasoner`].
    Process {
        program: PathBuf,
        #[serde(default)]
        args: Vec<String>,
        /// 300 seconds if missing, no limit if 0.
        #[serde(default)]
        timeout_secs: Option<u64>,
        #[serde(default)]
        output_format: Option<GraphFormat>,
    },
}

fn default_max_iterations() -> usize {
    RlReasonerConfig::default().max_iterations
}

impl Default for ReasonerSettings {
    fn default() -> Self {
        Self::Rl {
            max_iterations: default_max_iterations(),
            timeout_secs: None,
        }
    }
}

impl ReasonerSettings {
    /// Instantiates the reasoner.
    pub fn build(&self, temp_dir: Option<&Path>, infer_property_values: bool) -> Box<dyn Reasoner> {
        match self {
            Self::Rl {
                max_iterations,
                timeout_secs,
            } => Box::new(RlReasoner::with_config(RlReasonerConfig {
                max_iterations: *max_iterations,
                timeout: timeout_secs
                    .filter(|secs| *secs > 0)
                    .map(Duration::from_secs),
                infer_property_values,
            })),
            Self::Process {
                program,
                args,
                timeout_secs,
                output_format,
            } => {
                let timeout = match timeout_secs {
                    None => Some(ProcessReasoner::DEFAULT_TIMEOUT),
                    Some(0) => None,
                    Some(secs) => Some(Duration::from_secs(*secs)),
                };
                let mut reasoner = ProcessReasoner::new(program)
                    .with_args(args.iter().cloned())
                    .with_timeout(timeout)
                    .with_output_format(output_format.unwrap_or(GraphFormat::RdfXml));
                if let Some(temp_dir) = temp_dir {
                    reasoner = reasoner.with_temp_dir(temp_dir);
                }
                Box::new(reasoner)
            }
        }
    }
}

impl WorkflowConfig {
    /// Reads a workflow file and resolves its relative paths against the file directory.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        let mut config = Self::from_toml(&content).map_err(|source| ConfigError::Toml {
            path: path.to_owned(),
            source,
        })?;
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        config.validate()?;
        debug!(path = %path.display(), "Loaded workflow");
        Ok(config)
    }

    /// Parses a workflow without resolving its paths.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Makes all relative paths relative to `base` instead of the working directory.
    ///
    /// A reasoner program given as a bare name is left untouched so that it is looked up in
    /// `PATH`.
    pub fn resolve_paths(&mut self, base: &Path) {
        for path in [&mut self.terminology, &mut self.data, &mut self.output] {
            resolve(base, path);
        }
        for path in [
            &mut self.turtle_output,
            &mut self.baseline,
            &mut self.temp_dir,
        ]
        .into_iter()
        .flatten()
        {
            resolve(base, path);
        }
        for step in &mut self.conversions {
            resolve(base, &mut step.from);
            resolve(base, &mut step.to);
        }
        if let ReasonerSettings::Process { program, .. } = &mut self.reasoner {
            if program.components().count() > 1 {
                resolve(base, program);
            }
        }
    }

    /// Checks the workflow does not overwrite its own inputs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for input in [&self.terminology, &self.data] {
            if *input == self.output || self.turtle_output.as_ref() == Some(input) {
                return Err(ConfigError::Invalid(format!(
                    "the output would overwrite the input {}",
                    input.display()
                )));
            }
        }
        if let ReasonerSettings::Process { program, .. } = &self.reasoner {
            if program.as_os_str().is_empty() {
                return Err(ConfigError::Invalid(
                    "the reasoner program must not be empty".into(),
                ));
            }
        }
        Ok(())
    }
}

fn resolve(base: &Path, path: &mut PathBuf) {
    if path.is_relative() {
        *path = base.join(&*path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_workflow_uses_the_rl_reasoner() {
        let config = WorkflowConfig::from_toml(
            "terminology = \"t.owl\"\ndata = \"d.ttl\"\noutput = \"o.owl\"\n",
        )
        .unwrap();
        assert!(config.infer_property_values);
        assert!(!config.prune_remote_imports);
        assert_eq!(config.format, FormatSelection::InferFromExtension);
        assert!(matches!(
            config.reasoner,
            ReasonerSettings::Rl {
                timeout_secs: None,
                ..
            }
        ));
        assert!(config.conversions.is_empty());
    }

    #[test]
    fn process_reasoner_and_conversions() {
        let config = WorkflowConfig::from_toml(
            r#"
            terminology = "t.owl"
            data = "d.owl"
            output = "o.owl"
            format = "rdf-xml"

            [[convert]]
            from = "d.ttl"
            to = "d.owl"

            [reasoner]
            kind = "process"
            program = "bin/pellet"
            args = ["realize", "{input}"]
            timeout_secs = 0
            "#,
        )
        .unwrap();
        assert_eq!(
            config.format,
            FormatSelection::Explicit(GraphFormat::RdfXml)
        );
        assert_eq!(config.conversions.len(), 1);
        let ReasonerSettings::Process {
            program,
            args,
            timeout_secs,
            ..
        } = &config.reasoner
        else {
            panic!("expected a process reasoner");
        };
        assert_eq!(program, Path::new("bin/pellet"));
        assert_eq!(args, &["realize", "{input}"]);
        assert_eq!(*timeout_secs, Some(0));
    }

    #[test]
    fn unknown_keys_and_formats_are_rejected() {
        assert!(
            WorkflowConfig::from_toml("terminology = \"t\"\ndata = \"d\"\noutput = \"o\"\nfoo = 1")
                .is_err()
        );
        assert!(
            WorkflowConfig::from_toml(
                "terminology = \"t\"\ndata = \"d\"\noutput = \"o\"\nformat = \"jsonld\""
            )
            .is_err()
        );
    }

    #[test]
    fn relative_paths_are_resolved() {
        let mut config = WorkflowConfig::from_toml(
            "terminology = \"t.owl\"\ndata = \"/abs/d.owl\"\noutput = \"out/o.owl\"\n\
             [reasoner]\nkind = \"process\"\nprogram = \"pellet\"\n",
        )
        .unwrap();
        config.resolve_paths(Path::new("/work"));
        assert_eq!(config.terminology, Path::new("/work/t.owl"));
        assert_eq!(config.data, Path::new("/abs/d.owl"));
        assert_eq!(config.output, Path::new("/work/out/o.owl"));
        let ReasonerSettings::Process { program, .. } = &config.reasoner else {
            panic!("expected a process reasoner");
        };
        assert_eq!(program, Path::new("pellet"));
    }

    #[test]
    fn output_must_not_overwrite_inputs() {
        let config = WorkflowConfig::from_toml(
            "terminology = \"t.owl\"\ndata = \"d.owl\"\noutput = \"d.owl\"\n",
        )
        .unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
