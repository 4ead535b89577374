//! Typed error taxonomy for the generation pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading or re-emitting slashdoc XML.
///
/// A structurally invalid store is fatal to the slashdoc steps; partial
/// output is never considered valid.
#[derive(Debug, Error)]
pub enum SlashdocError {
    #[error("malformed slashdoc XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed slashdoc attribute: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    #[error("malformed slashdoc text: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    #[error("slashdoc I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures while loading an assembly metadata snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read metadata snapshot {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode metadata snapshot {path:?}: {source}")]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
}
