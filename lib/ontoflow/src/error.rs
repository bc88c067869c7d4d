use oxrdfio::RdfParseError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A file could not be read or is not valid RDF in the expected syntax.
#[derive(Debug, Error)]
#[error("Failed to parse {}: {source}", path.display())]
pub struct ParseError {
    path: PathBuf,
    #[source]
    source: RdfParseError,
}

impl ParseError {
    #[inline]
    pub(crate) fn new(path: impl Into<PathBuf>, source: impl Into<RdfParseError>) -> Self {
        Self {
            path: path.into(),
            source: source.into(),
        }
    }

    /// The file that failed to parse.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` if the file could not be read at all (missing, permission denied...).
    #[inline]
    pub fn is_io(&self) -> bool {
        matches!(self.source, RdfParseError::Io(_))
    }
}

/// A file could not be written.
#[derive(Debug, Error)]
#[error("Failed to write {}: {source}", path.display())]
pub struct WriteError {
    path: PathBuf,
    #[source]
    source: io::Error,
}

impl WriteError {
    #[inline]
    pub(crate) fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    /// The file that could not be written.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl From<WriteError> for io::Error {
    #[inline]
    fn from(error: WriteError) -> Self {
        error.source
    }
}

/// An error raised by [`convert`](crate::convert()).
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Write(#[from] WriteError),
}
