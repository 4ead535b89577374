//! Ties metadata, slashdoc data, and output writers into documents.

use std::collections::HashSet;
use std::io::Write;

use anyhow::{Context, Result};

use crate::core::traits::MetadataSource;
use crate::output::html::ApiReferenceHtmlWriter;
use crate::render::signature::CSharpSignatures;
use crate::slashdoc::export::write_filtered;
use crate::slashdoc::store::SlashdocStore;
use crate::surface;

/// Write a filtered slashdoc document keeping only the public API, for use
/// with completion tooling. Retained fragments pass through unmodified.
pub fn write_public_api_slashdoc<W: Write>(
    assembly: &dyn MetadataSource,
    slashdoc_xml: &str,
    out: W,
) -> Result<()> {
    let retained: HashSet<String> = surface::public_api_ids(assembly);
    write_filtered(slashdoc_xml, &retained, out)
        .context("failed to write filtered slashdoc export")
}

/// Write the HTML API reference for an assembly.
pub fn write_public_api_reference_html<W: Write>(
    assembly: &dyn MetadataSource,
    slashdoc: &SlashdocStore,
    warn_missing_docs: bool,
    out: W,
) -> Result<W> {
    let language = CSharpSignatures::new();
    let title = format!("{} public API reference", assembly.simple_name());

    let mut writer =
        ApiReferenceHtmlWriter::new(out, &title, slashdoc, warn_missing_docs, &language)?;
    writer.describe_assembly(assembly)?;
    writer.finish()
}
