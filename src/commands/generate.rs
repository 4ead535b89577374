//! The `generate` command: one full documentation run for one assembly.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::loader::SnapshotLoader;
use crate::core::traits::MetadataSource;
use crate::engine;
use crate::slashdoc;
use crate::slashdoc::store::SlashdocStore;

/// Configuration of one generation run.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Path to the assembly metadata snapshot.
    pub module: PathBuf,
    /// Directory receiving the generated files, created if missing.
    pub output_dir: PathBuf,
    /// Report each public identifier without a documentation entry once.
    pub warn_missing_docs: bool,
}

/// Run a generation pass: load metadata, export the filtered slashdoc
/// (when a companion file exists), and write the HTML reference.
pub fn generate(config: GenerateConfig) -> Result<()> {
    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    let mut loader = SnapshotLoader::new();
    let assembly = loader.load(&config.module)?;

    let base_name = config
        .module
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| assembly.simple_name().to_string());
    let html_path = config.output_dir.join(format!("{base_name}.html"));
    let export_path = config.output_dir.join(format!("{base_name}.xml"));

    let slashdoc_path = config.module.with_extension("xml");
    let store = match read_slashdoc(&slashdoc_path)? {
        Some(xml) => {
            write_filtered_export(&assembly, &xml, &export_path)?;
            slashdoc::reader::parse(&xml).with_context(|| {
                format!("failed to parse slashdoc file {}", slashdoc_path.display())
            })?
        }
        None => {
            log::warn!(
                "could not open slashdoc file '{}'",
                slashdoc_path.display()
            );
            SlashdocStore::new()
        }
    };

    write_html_reference(&assembly, &store, config.warn_missing_docs, &html_path)?;

    log::info!(
        "generated {} for assembly {}",
        html_path.display(),
        assembly.simple_name()
    );

    Ok(())
}

fn read_slashdoc(path: &Path) -> Result<Option<String>> {
    if !path.is_file() {
        return Ok(None);
    }
    let xml = fs::read_to_string(path)
        .with_context(|| format!("failed to read slashdoc file {}", path.display()))?;
    Ok(Some(xml))
}

fn write_filtered_export(
    assembly: &dyn MetadataSource,
    slashdoc_xml: &str,
    path: &Path,
) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    engine::write_public_api_slashdoc(assembly, slashdoc_xml, BufWriter::new(file))
}

fn write_html_reference(
    assembly: &dyn MetadataSource,
    store: &SlashdocStore,
    warn_missing_docs: bool,
    path: &Path,
) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    engine::write_public_api_reference_html(assembly, store, warn_missing_docs, BufWriter::new(file))?;
    Ok(())
}
