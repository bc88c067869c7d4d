use super::{Reasoner, ReasonerError, ReasonerOutput};
use crate::io::{GraphFormat, load_graph, save_graph};
use oxrdf::{Graph, NamedNode};
use regex::Regex;
use std::collections::BTreeSet;
use std::borrow::Cow;
use std::fs::{self, File};
use std::path::{self, Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::LazyLock;
use std::thread::sleep;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const INPUT_PLACEHOLDER: &str = "{input}";
const OUTPUT_PLACEHOLDER: &str = "{output}";

#[expect(clippy::expect_used)]
static IRI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<([^<>\s]+)>|(https?://[^\s<>"'(),\[\]]+)"#).expect("valid IRI pattern")
});

/// Runs an external OWL reasoner (Pellet, HermiT, Konclude...) as a child process.
///
/// The graph is written as RDF/XML into a fresh directory and the command line arguments may
/// refer to it with the `{input}` placeholder. The entailed graph is read back from the file
/// named by the `{output}` placeholder if one of the arguments uses it, and from the standard
/// output otherwise.
///
/// A non-zero exit is an inconsistency if the process output contains the word "inconsistent".
/// The unsatisfiable classes are then the IRIs written on lines mentioning "unsatisfiable" or
/// "inconsistent class".
///
/// ```no_run
/// use ontoflow::{ProcessReasoner, Reasoner};
/// use oxrdf::Graph;
/// use std::time::Duration;
///
/// let reasoner = ProcessReasoner::new("pellet")
///     .with_args(["realize", "{input}"])
///     .with_timeout(Some(Duration::from_secs(60)))
///     .with_temp_dir("/tmp/ontoflow");
/// let _output = reasoner.reason(&Graph::new())?;
/// # Result::<_, ontoflow::ReasonerError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct ProcessReasoner {
    program: PathBuf,
    args: Vec<String>,
    timeout: Option<Duration>,
    temp_dir: Option<PathBuf>,
    output_format: GraphFormat,
}

impl ProcessReasoner {
    /// Time after which the reasoner is killed if nothing else is configured.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: Some(Self::DEFAULT_TIMEOUT),
            temp_dir: None,
            output_format: GraphFormat::RdfXml,
        }
    }

    /// Sets the command line arguments. `{input}` and `{output}` are replaced by file paths.
    #[must_use]
    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the maximum running time. `None` waits for the process as long as it takes.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the directory in which the working directory of each run is created.
    ///
    /// It is also given to the child process as `TMPDIR`. The directory must exist.
    #[must_use]
    pub fn with_temp_dir(mut self, temp_dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(temp_dir.into());
        self
    }

    /// Sets the syntax the reasoner writes its result in (RDF/XML by default).
    #[must_use]
    pub fn with_output_format(mut self, format: GraphFormat) -> Self {
        self.output_format = format;
        self
    }

    #[inline]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// The program to spawn.
    ///
    /// The child runs inside its working directory so a program given by a relative path is
    /// made absolute against the current directory first. Bare names are kept for the `PATH`
    /// lookup.
    fn executable(&self) -> Result<Cow<'_, Path>, ReasonerError> {
        if self.program.is_relative() && self.program.components().count() > 1 {
            Ok(Cow::Owned(path::absolute(&self.program)?))
        } else {
            Ok(Cow::Borrowed(&self.program))
        }
    }

    fn command_line(&self, input: &Path, output: &Path) -> (Vec<String>, bool) {
        let input = input.to_string_lossy();
        let output = output.to_string_lossy();
        let mut uses_output = false;
        let args = self
            .args
            .iter()
            .map(|arg| {
                uses_output |= arg.contains(OUTPUT_PLACEHOLDER);
                arg.replace(INPUT_PLACEHOLDER, &input)
                    .replace(OUTPUT_PLACEHOLDER, &output)
            })
            .collect();
        (args, uses_output)
    }
}

impl Reasoner for ProcessReasoner {
    fn name(&self) -> &str {
        self.program
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("external reasoner")
    }

    fn reason(&self, graph: &Graph) -> Result<ReasonerOutput, ReasonerError> {
        let executable = self.executable()?;
        let temp_dir = self.temp_dir.as_deref().map(path::absolute).transpose()?;
        let mut builder = tempfile::Builder::new();
        builder.prefix("ontoflow-");
        let work_dir = match &temp_dir {
            Some(temp_dir) => builder.tempdir_in(temp_dir)?,
            None => builder.tempdir()?,
        };
        let input = work_dir.path().join("input.owl");
        let output = work_dir
            .path()
            .join(format!("output.{}", self.output_format.file_extension()));
        let stdout = work_dir.path().join("stdout.txt");
        let stderr = work_dir.path().join("stderr.txt");
        save_graph(graph, &input, GraphFormat::RdfXml, &[])?;

        let (args, uses_output) = self.command_line(&input, &output);
        let mut command = Command::new(&*executable);
        command
            .args(&args)
            .current_dir(work_dir.path())
            .env(
                "TMPDIR",
                temp_dir.as_deref().unwrap_or(work_dir.path()),
            )
            .stdin(Stdio::null())
            .stdout(File::create(&stdout)?)
            .stderr(File::create(&stderr)?);
        info!(
            program = %executable.display(),
            args = args.join(" "),
            triples = graph.len(),
            "Starting external reasoner"
        );
        let start = Instant::now();
        let mut child = command.spawn().map_err(|source| ReasonerError::Spawn {
            program: self.program.clone(),
            source,
        })?;
        let status = wait_with_timeout(&mut child, self.timeout)?;
        debug!(
            %status,
            elapsed_ms = start.elapsed().as_millis(),
            "External reasoner exited"
        );

        if status.success() {
            let result = if uses_output { &output } else { &stdout };
            let entailed = load_graph(result, self.output_format)
                .map_err(ReasonerError::Output)?
                .graph;
            return Ok(ReasonerOutput::Consistent(entailed));
        }

        let report = format!("{}\n{}", read_lossy(&stdout)?, read_lossy(&stderr)?);
        if report.to_ascii_lowercase().contains("inconsistent") {
            return Ok(ReasonerOutput::Inconsistent(unsatisfiable_classes(&report)));
        }
        Err(ReasonerError::Failed {
            status,
            stderr: read_lossy(&stderr)?.trim().to_owned(),
        })
    }
}

/// Waits for the child, killing it once `timeout` is elapsed.
fn wait_with_timeout(
    child: &mut Child,
    timeout: Option<Duration>,
) -> Result<ExitStatus, ReasonerError> {
    let Some(timeout) = timeout else {
        return Ok(child.wait()?);
    };
    let start = Instant::now();
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status);
        }
        if start.elapsed() >= timeout {
            if let Err(e) = child.kill() {
                warn!("Failed to kill the reasoner process {}: {e}", child.id());
            }
            // reap
            child.wait()?;
            return Err(ReasonerError::Timeout { timeout });
        }
        sleep(POLL_INTERVAL);
    }
}

fn read_lossy(path: &Path) -> Result<String, ReasonerError> {
    Ok(String::from_utf8_lossy(&fs::read(path)?).into_owned())
}

/// Extracts the class IRIs from the lines of a reasoner report that name unsatisfiable classes.
fn unsatisfiable_classes(report: &str) -> BTreeSet<NamedNode> {
    report
        .lines()
        .filter(|line| {
            let line = line.to_ascii_lowercase();
            line.contains("unsatisfiable") || line.contains("inconsistent class")
        })
        .flat_map(|line| IRI.captures_iter(line))
        .filter_map(|captures| {
            let iri = captures.get(1).or_else(|| captures.get(2))?;
            NamedNode::new(iri.as_str()).ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_bracketed_and_bare_iris() {
        let report = "Ontology is inconsistent\n\
            Unsatisfiable classes: <http://example.com/Dog>, http://example.com/Cat\n\
            Explanation: <http://example.com/rex> rdf:type <http://example.com/Dog>\n\
            Inconsistent class: https://example.com/Fish";
        assert_eq!(
            unsatisfiable_classes(report),
            BTreeSet::from([
                NamedNode::new_unchecked("http://example.com/Cat"),
                NamedNode::new_unchecked("http://example.com/Dog"),
                NamedNode::new_unchecked("https://example.com/Fish"),
            ])
        );
    }

    #[test]
    fn no_classes_without_matching_lines() {
        assert!(unsatisfiable_classes("ERROR: ontology is inconsistent").is_empty());
    }

    #[test]
    fn placeholders_are_substituted() {
        let reasoner = ProcessReasoner::new("reasoner").with_args(["-i", "{input}", "--out={output}"]);
        let (args, uses_output) =
            reasoner.command_line(Path::new("/w/input.owl"), Path::new("/w/output.owl"));
        assert_eq!(args, ["-i", "/w/input.owl", "--out=/w/output.owl"]);
        assert!(uses_output);

        let (_, uses_output) = ProcessReasoner::new("reasoner")
            .with_args(["{input}"])
            .command_line(Path::new("in"), Path::new("out"));
        assert!(!uses_output);
    }

    #[test]
    fn relative_programs_are_made_absolute() -> Result<(), ReasonerError> {
        let bare = ProcessReasoner::new("pellet");
        assert_eq!(bare.executable()?, Path::new("pellet"));

        let absolute = ProcessReasoner::new("/opt/pellet/pellet.sh");
        assert_eq!(absolute.executable()?, Path::new("/opt/pellet/pellet.sh"));

        let relative = ProcessReasoner::new("./bin/pellet");
        let executable = relative.executable()?;
        assert!(executable.is_absolute());
        assert!(executable.ends_with("bin/pellet"));
        Ok(())
    }
}
