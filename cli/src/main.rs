use crate::cli::{Args, Command, LogFormat, ReasonerKind};
use anyhow::Context;
use clap::Parser;
use ontoflow::{
    DiffReport, FormatSelection, ReasonerSettings, WorkflowConfig, convert, diff_files,
    eurocode_ontology, run_workflow, save_graph,
};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;

pub fn main() -> anyhow::Result<()> {
    let matches = Args::parse();
    init_tracing(matches.log_format);
    match matches.command {
        Command::Convert {
            from_file,
            from_format,
            to_file,
            to_format,
        } => {
            convert(
                &from_file,
                FormatSelection::from(from_format).resolve(&from_file),
                &to_file,
                FormatSelection::from(to_format).resolve(&to_file),
            )?;
            Ok(())
        }
        Command::Diff {
            original,
            reasoned,
            format,
        } => {
            let new_triples = diff_files(&original, &reasoned, format.into())?;
            DiffReport::new(&new_triples)
                .write_to(io::stdout().lock())
                .context("Failed to write the report")
        }
        Command::Reason {
            terminology,
            data,
            output,
            turtle_output,
            baseline,
            format,
            reasoner,
            program,
            args,
            timeout,
            max_iterations,
            temp_dir,
            no_property_values,
            prune_remote_imports,
        } => {
            let reasoner = match reasoner {
                ReasonerKind::Rl => ReasonerSettings::Rl {
                    max_iterations,
                    timeout_secs: timeout.filter(|secs| *secs > 0),
                },
                ReasonerKind::Process => ReasonerSettings::Process {
                    program: program
                        .context("--program is required by the process reasoner")?,
                    args,
                    timeout_secs: timeout,
                    output_format: None,
                },
            };
            let config = WorkflowConfig {
                terminology,
                data,
                output,
                turtle_output,
                baseline,
                format: format.into(),
                temp_dir,
                prune_remote_imports,
                infer_property_values: !no_property_values,
                reasoner,
                conversions: Vec::new(),
            };
            config.validate()?;
            run_workflow(&config, io::stdout().lock())?;
            Ok(())
        }
        Command::Run { config } => {
            let config = WorkflowConfig::from_file(&config)?;
            run_workflow(&config, io::stdout().lock())?;
            Ok(())
        }
        Command::BuildOntology { to_file, to_format } => {
            let ontology = eurocode_ontology().context("Failed to build the EN 1990 ontology")?;
            let format = FormatSelection::from(to_format).resolve(&to_file);
            save_graph(&ontology.graph, &to_file, format, &ontology.prefixes)?;
            info!(
                path = %to_file.display(),
                %format,
                triples = ontology.graph.len(),
                "Wrote the EN 1990 ontology"
            );
            Ok(())
        }
    }
}

/// Logs go to the standard error so that reports on the standard output stay clean.
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    match format {
        LogFormat::Text => subscriber.init(),
        LogFormat::Json => subscriber.json().init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn arguments_are_consistent() {
        Args::command().debug_assert();
    }
}
