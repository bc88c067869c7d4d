//! Reading and writing graphs in Turtle and RDF/XML.

use crate::error::{ParseError, WriteError};
use oxiri::Iri;
use oxrdf::{Graph, Triple};
use oxrdfio::{RdfFormat, RdfParseError, RdfParser, RdfSerializer};
use serde::Deserialize;
use std::ffi::OsStr;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

/// The two concrete syntaxes ontology files are exchanged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum GraphFormat {
    /// [Turtle](https://www.w3.org/TR/turtle/), usually with the `.ttl` extension.
    Turtle,
    /// [RDF/XML](https://www.w3.org/TR/rdf-syntax-grammar/), usually with the `.owl` or `.rdf` extension.
    RdfXml,
}

impl GraphFormat {
    /// Guesses the format from a file name.
    ///
    /// Only the exact `ttl` extension selects Turtle. Every other path, including paths without
    /// extension, is read as RDF/XML.
    ///
    /// ```
    /// use ontoflow::GraphFormat;
    ///
    /// assert_eq!(GraphFormat::from_path("data/test.ttl"), GraphFormat::Turtle);
    /// assert_eq!(GraphFormat::from_path("data/test.owl"), GraphFormat::RdfXml);
    /// assert_eq!(GraphFormat::from_path("data/test"), GraphFormat::RdfXml);
    /// ```
    #[inline]
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        if path.as_ref().extension().and_then(OsStr::to_str) == Some("ttl") {
            Self::Turtle
        } else {
            Self::RdfXml
        }
    }

    /// The canonical name of the format, as accepted by [`FromStr`].
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Turtle => "turtle",
            Self::RdfXml => "rdf-xml",
        }
    }

    /// The usual file extension of the format.
    #[inline]
    pub const fn file_extension(self) -> &'static str {
        match self {
            Self::Turtle => "ttl",
            Self::RdfXml => "owl",
        }
    }

    #[inline]
    pub(crate) const fn rdf_format(self) -> RdfFormat {
        match self {
            Self::Turtle => RdfFormat::Turtle,
            Self::RdfXml => RdfFormat::RdfXml,
        }
    }
}

impl fmt::Display for GraphFormat {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GraphFormat {
    type Err = UnknownFormatError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "turtle" | "ttl" | "text/turtle" => Ok(Self::Turtle),
            "rdf-xml" | "rdfxml" | "xml" | "owl" | "rdf" | "application/rdf+xml" => {
                Ok(Self::RdfXml)
            }
            _ => Err(UnknownFormatError(name.to_owned())),
        }
    }
}

impl TryFrom<String> for GraphFormat {
    type Error = UnknownFormatError;

    #[inline]
    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

/// The format name is neither Turtle nor RDF/XML.
#[derive(Debug, Clone, thiserror::Error)]
#[error("The file format '{0}' is unknown, expected 'turtle' or 'rdf-xml'")]
pub struct UnknownFormatError(String);

/// How the format of a file is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum FormatSelection {
    /// Use [`GraphFormat::from_path`].
    #[default]
    InferFromExtension,
    /// Always use the given format.
    Explicit(GraphFormat),
}

impl FormatSelection {
    /// The format to use for the given file.
    #[inline]
    pub fn resolve(self, path: impl AsRef<Path>) -> GraphFormat {
        match self {
            Self::InferFromExtension => GraphFormat::from_path(path),
            Self::Explicit(format) => format,
        }
    }
}

impl From<Option<GraphFormat>> for FormatSelection {
    #[inline]
    fn from(format: Option<GraphFormat>) -> Self {
        format.map_or(Self::InferFromExtension, Self::Explicit)
    }
}

impl FromStr for FormatSelection {
    type Err = UnknownFormatError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if matches!(name, "infer-from-extension" | "auto") {
            Ok(Self::InferFromExtension)
        } else {
            name.parse().map(Self::Explicit)
        }
    }
}

impl TryFrom<String> for FormatSelection {
    type Error = UnknownFormatError;

    #[inline]
    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

/// A graph together with the prefixes declared by the file it was read from.
///
/// Keeping the prefixes allows a conversion to produce a file as readable as its source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedGraph {
    pub graph: Graph,
    pub prefixes: Vec<(String, String)>,
}

impl From<Graph> for LoadedGraph {
    #[inline]
    fn from(graph: Graph) -> Self {
        Self {
            graph,
            prefixes: Vec::new(),
        }
    }
}

/// Parses a file into a graph.
///
/// The file location is used as base IRI so relative IRIs resolve the way they would for any
/// other RDF tool reading the same file.
pub fn load_graph(path: &Path, format: GraphFormat) -> Result<LoadedGraph, ParseError> {
    let file = File::open(path).map_err(|e| ParseError::new(path, e))?;
    let base_iri = file_base_iri(path);
    let loaded = parse_graph(BufReader::new(file), format, base_iri.as_deref())
        .map_err(|e| ParseError::new(path, e))?;
    debug!(
        path = %path.display(),
        %format,
        triples = loaded.graph.len(),
        "Loaded graph"
    );
    Ok(loaded)
}

/// Parses a graph from any reader.
///
/// Named graphs are ignored: quads are folded into the default graph.
pub fn parse_graph(
    read: impl Read,
    format: GraphFormat,
    base_iri: Option<&str>,
) -> Result<LoadedGraph, RdfParseError> {
    let mut parser = RdfParser::from_format(format.rdf_format());
    if let Some(base_iri) = base_iri {
        parser = parser.with_base_iri(base_iri).map_err(|e| {
            RdfParseError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid base IRI {base_iri}: {e}"),
            ))
        })?;
    }
    let mut parser = parser.for_reader(read);
    let mut graph = Graph::new();
    for quad in parser.by_ref() {
        let quad = quad?;
        graph.insert(&Triple::new(quad.subject, quad.predicate, quad.object));
    }
    let prefixes = parser
        .prefixes()
        .map(|(name, iri)| (name.to_owned(), iri.to_owned()))
        .collect();
    Ok(LoadedGraph { graph, prefixes })
}

/// Writes a graph to a file, creating or truncating it.
///
/// The file is synced to disk before returning.
pub fn save_graph(
    graph: &Graph,
    path: &Path,
    format: GraphFormat,
    prefixes: &[(String, String)],
) -> Result<(), WriteError> {
    let file = File::create(path).map_err(|e| WriteError::new(path, e))?;
    let writer = serialize_graph(graph, BufWriter::new(file), format, prefixes)
        .map_err(|e| WriteError::new(path, e))?;
    close_file_writer(writer).map_err(|e| WriteError::new(path, e))?;
    debug!(
        path = %path.display(),
        %format,
        triples = graph.len(),
        "Saved graph"
    );
    Ok(())
}

/// Serializes a graph into a writer and returns the writer once everything is written.
///
/// Prefixes with an invalid IRI are skipped with a warning.
pub fn serialize_graph<W: Write>(
    graph: &Graph,
    write: W,
    format: GraphFormat,
    prefixes: &[(String, String)],
) -> io::Result<W> {
    let mut serializer = RdfSerializer::from_format(format.rdf_format());
    for (prefix_name, prefix_iri) in prefixes {
        if let Err(e) = Iri::parse(prefix_iri.as_str()) {
            warn!("Ignoring prefix {prefix_name}: {prefix_iri} with an invalid IRI: {e}");
            continue;
        }
        serializer = serializer
            .with_prefix(prefix_name, prefix_iri)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    }
    let mut writer = serializer.for_writer(write);
    for triple in graph {
        writer.serialize_triple(triple)?;
    }
    writer.finish()
}

fn close_file_writer(writer: BufWriter<File>) -> io::Result<()> {
    let mut file = writer
        .into_inner()
        .map_err(io::IntoInnerError::into_error)?;
    file.flush()?;
    file.sync_all()
}

fn file_base_iri(path: &Path) -> Option<String> {
    let absolute = std::path::absolute(path).ok()?;
    let absolute = absolute.to_str()?.replace('\\', "/");
    let iri = if absolute.starts_with('/') {
        format!("file://{absolute}")
    } else {
        format!("file:///{absolute}")
    };
    Iri::parse(iri).ok().map(Iri::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_sniffing_only_matches_ttl() {
        assert_eq!(GraphFormat::from_path("a.ttl"), GraphFormat::Turtle);
        assert_eq!(GraphFormat::from_path("a.TTL"), GraphFormat::RdfXml);
        assert_eq!(GraphFormat::from_path("a.ttl.bak"), GraphFormat::RdfXml);
        assert_eq!(GraphFormat::from_path("a.nt"), GraphFormat::RdfXml);
        assert_eq!(GraphFormat::from_path("dir.ttl/file"), GraphFormat::RdfXml);
    }

    #[test]
    fn format_names() {
        assert_eq!("ttl".parse::<GraphFormat>().unwrap(), GraphFormat::Turtle);
        assert_eq!("OWL".parse::<GraphFormat>().unwrap(), GraphFormat::RdfXml);
        assert!("jsonld".parse::<GraphFormat>().is_err());
        assert_eq!(
            "auto".parse::<FormatSelection>().unwrap(),
            FormatSelection::InferFromExtension
        );
        assert_eq!(
            "turtle".parse::<FormatSelection>().unwrap(),
            FormatSelection::Explicit(GraphFormat::Turtle)
        );
    }

    #[test]
    fn explicit_selection_ignores_extension() {
        let selection = FormatSelection::Explicit(GraphFormat::Turtle);
        assert_eq!(selection.resolve("data.owl"), GraphFormat::Turtle);
    }

    #[test]
    fn base_iri_is_a_file_iri() {
        let iri = file_base_iri(Path::new("/tmp/onto.owl")).unwrap();
        assert_eq!(iri, "file:///tmp/onto.owl");
    }
}
