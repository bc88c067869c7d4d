use crate::error::ConversionError;
use crate::io::{GraphFormat, load_graph, save_graph};
use std::path::Path;
use tracing::info;

/// Converts an RDF file from one syntax to the other.
///
/// The whole file is loaded as a set of triples before anything is written, so a parse error
/// never leaves a half written destination behind. The prefixes declared in the source are
/// reused in the destination.
///
/// Returns the number of distinct triples written.
///
/// ```no_run
/// use ontoflow::{GraphFormat, convert};
/// use std::path::Path;
///
/// convert(
///     Path::new("workflow/test-data.ttl"),
///     GraphFormat::Turtle,
///     Path::new("output/test-data.owl"),
///     GraphFormat::RdfXml,
/// )?;
/// # Result::<_, ontoflow::ConversionError>::Ok(())
/// ```
pub fn convert(
    source: &Path,
    source_format: GraphFormat,
    destination: &Path,
    destination_format: GraphFormat,
) -> Result<usize, ConversionError> {
    let loaded = load_graph(source, source_format)?;
    save_graph(
        &loaded.graph,
        destination,
        destination_format,
        &loaded.prefixes,
    )?;
    info!(
        source = %source.display(),
        destination = %destination.display(),
        triples = loaded.graph.len(),
        "Converted {source_format} to {destination_format}"
    );
    Ok(loaded.graph.len())
}
