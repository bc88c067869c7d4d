use clap::{Parser, Subcommand, ValueEnum, ValueHint};
use ontoflow::GraphFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "ontoflow")]
/// Conversion, reasoning and diffing of OWL ontologies
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
    /// Format of the logs written to the standard error
    ///
    /// The log level is set with the RUST_LOG environment variable (info by default).
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert an RDF file between Turtle and RDF/XML
    Convert {
        /// File to convert from
        #[arg(long, value_hint = ValueHint::FilePath)]
        from_file: PathBuf,
        /// The format of the file to convert from ("turtle" or "rdf-xml")
        ///
        /// By default, ".ttl" files are read as Turtle and all others as RDF/XML.
        #[arg(long)]
        from_format: Option<GraphFormat>,
        /// File to convert to
        #[arg(long, value_hint = ValueHint::FilePath)]
        to_file: PathBuf,
        /// The format of the file to convert to ("turtle" or "rdf-xml")
        ///
        /// By default the format is guessed from the target file extension.
        #[arg(long)]
        to_format: Option<GraphFormat>,
    },
    /// Print the triples of a reasoned file that are not in the original one
    Diff {
        /// The file before reasoning
        #[arg(long, value_hint = ValueHint::FilePath)]
        original: PathBuf,
        /// The file after reasoning
        #[arg(long, value_hint = ValueHint::FilePath)]
        reasoned: PathBuf,
        /// The format of both files. By default it is guessed from each file extension.
        #[arg(long)]
        format: Option<GraphFormat>,
    },
    /// Merge assertional data into a terminology, reason over it and save the result
    ///
    /// An inconsistent ontology is reported and saved as merged, it is not an error.
    Reason {
        /// The terminology (TBox)
        #[arg(long, value_hint = ValueHint::FilePath)]
        terminology: PathBuf,
        /// The data (ABox)
        #[arg(long, value_hint = ValueHint::FilePath)]
        data: PathBuf,
        /// Where to write the reasoned ontology as RDF/XML
        #[arg(long, value_hint = ValueHint::FilePath)]
        output: PathBuf,
        /// Where to also write the reasoned ontology as Turtle
        #[arg(long, value_hint = ValueHint::FilePath)]
        turtle_output: Option<PathBuf>,
        /// File to diff the reasoned ontology against
        #[arg(long, value_hint = ValueHint::FilePath)]
        baseline: Option<PathBuf>,
        /// The format of the input files. By default it is guessed from each file extension.
        #[arg(long)]
        format: Option<GraphFormat>,
        /// The reasoner to use
        #[arg(long, value_enum, default_value_t = ReasonerKind::Rl)]
        reasoner: ReasonerKind,
        /// The external reasoner executable
        #[arg(long, required_if_eq("reasoner", "process"), value_hint = ValueHint::CommandName)]
        program: Option<PathBuf>,
        /// Argument given to the external reasoner, in order
        ///
        /// "{input}" is replaced by the path of the merged ontology and "{output}" by the path
        /// the reasoner should write to. Without "{output}" the result is read from the
        /// standard output.
        #[arg(long = "arg", allow_hyphen_values = true)]
        args: Vec<String>,
        /// Maximum reasoning time in seconds
        ///
        /// Defaults to 300 seconds for external reasoners and no limit for the built-in one.
        /// 0 disables the limit.
        #[arg(long)]
        timeout: Option<u64>,
        /// Maximum number of rule application rounds of the built-in reasoner
        #[arg(long, default_value_t = 1000)]
        max_iterations: usize,
        /// Directory for the reasoner temporary files. It is created if missing.
        #[arg(long, env = "ONTOFLOW_TMPDIR", value_hint = ValueHint::DirPath)]
        temp_dir: Option<PathBuf>,
        /// Only infer types and schema triples, not property values between individuals
        #[arg(long)]
        no_property_values: bool,
        /// Drop the owl:imports of remote ontologies before reasoning
        #[arg(long)]
        prune_remote_imports: bool,
    },
    /// Run the pipeline described by a workflow file
    Run {
        /// The TOML workflow file
        #[arg(long, value_hint = ValueHint::FilePath)]
        config: PathBuf,
    },
    /// Write the EN 1990 (Eurocode 0) core ontology
    BuildOntology {
        /// File to write to
        #[arg(long, value_hint = ValueHint::FilePath)]
        to_file: PathBuf,
        /// The format to write ("turtle" or "rdf-xml")
        ///
        /// By default the format is guessed from the file extension.
        #[arg(long)]
        to_format: Option<GraphFormat>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReasonerKind {
    /// The built-in OWL 2 RL reasoner
    Rl,
    /// An external program
    Process,
}
