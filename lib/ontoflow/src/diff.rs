//! Set difference between a baseline graph and a reasoned graph.

use crate::error::ParseError;
use crate::io::{FormatSelection, load_graph};
use oxrdf::Graph;
use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

/// Returns the triples of `reasoned` that are not in `original`.
///
/// Triples are compared verbatim: blank nodes only match blank nodes with the same identifier.
///
/// ```
/// use ontoflow::graph_difference;
/// use oxrdf::vocab::rdf;
/// use oxrdf::{Graph, NamedNodeRef, TripleRef};
///
/// let x = NamedNodeRef::new("http://example.com/x")?;
/// let dog = NamedNodeRef::new("http://example.com/Dog")?;
/// let animal = NamedNodeRef::new("http://example.com/Animal")?;
///
/// let mut original = Graph::new();
/// original.insert(TripleRef::new(x, rdf::TYPE, dog));
/// let mut reasoned = original.clone();
/// reasoned.insert(TripleRef::new(x, rdf::TYPE, animal));
///
/// let new_triples = graph_difference(&original, &reasoned);
/// assert_eq!(new_triples.len(), 1);
/// assert!(new_triples.contains(TripleRef::new(x, rdf::TYPE, animal)));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
pub fn graph_difference(original: &Graph, reasoned: &Graph) -> Graph {
    reasoned
        .iter()
        .filter(|triple| !original.contains(*triple))
        .collect()
}

/// Loads both files and returns the triples only present in `reasoned`.
///
/// Each file format is chosen by `selection`. With [`FormatSelection::InferFromExtension`],
/// `.ttl` files are read as Turtle and everything else as RDF/XML. The two files are sniffed
/// independently rather than both following the extension of `original`, so a Turtle baseline
/// can be compared with an RDF/XML reasoner output.
pub fn diff_files(
    original: &Path,
    reasoned: &Path,
    selection: FormatSelection,
) -> Result<Graph, ParseError> {
    let original_graph = load_graph(original, selection.resolve(original))?.graph;
    let reasoned_graph = load_graph(reasoned, selection.resolve(reasoned))?.graph;
    let new_triples = graph_difference(&original_graph, &reasoned_graph);
    info!(
        original = %original.display(),
        reasoned = %reasoned.display(),
        new_triples = new_triples.len(),
        "Compared graphs"
    );
    Ok(new_triples)
}

/// Human readable listing of new triples.
///
/// One `+ subject predicate object` line per triple, after a header line. An empty set renders
/// as a single line saying nothing new was found.
pub struct DiffReport<'a> {
    new_triples: &'a Graph,
}

impl<'a> DiffReport<'a> {
    #[inline]
    pub fn new(new_triples: &'a Graph) -> Self {
        Self { new_triples }
    }

    /// Writes the report.
    #[inline]
    pub fn write_to(&self, mut write: impl Write) -> io::Result<()> {
        write!(write, "{self}")
    }
}

impl fmt::Display for DiffReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.new_triples.is_empty() {
            return writeln!(f, "No new inferred triples found.");
        }
        writeln!(f, "New inferred triples:")?;
        for triple in self.new_triples {
            writeln!(
                f,
                "+ {} {} {}",
                triple.subject, triple.predicate, triple.object
            )?;
        }
        Ok(())
    }
}
