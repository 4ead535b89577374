//! Loads assembly metadata snapshots from disk.
//!
//! A snapshot is the serialized descriptor tree for one assembly, produced
//! by an external extraction step; parsing the raw binary container is out
//! of scope here. Snapshots may reference companion snapshots of dependency
//! assemblies; each distinct dependency is resolved at most once per run
//! and types whose descriptors point into an unresolvable dependency are
//! omitted from enumeration instead of failing the whole load.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::metadata::AssemblyMetadata;
use crate::core::types::{MethodDescriptor, TypeDescriptor, TypeRef};
use crate::errors::SnapshotError;

/// On-disk shape of an assembly metadata snapshot.
#[derive(Debug, Deserialize)]
pub struct AssemblySnapshot {
    /// Simple name of the assembly.
    pub assembly: String,
    /// Names of assemblies this one depends on.
    #[serde(default)]
    pub references: Vec<String>,
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,
}

/// Snapshot loader with per-run dependency resolution caching.
#[derive(Debug, Default)]
pub struct SnapshotLoader {
    attempted: HashMap<String, bool>,
}

impl SnapshotLoader {
    pub fn new() -> Self {
        SnapshotLoader::default()
    }

    /// Load the snapshot at `path` into an [`AssemblyMetadata`].
    ///
    /// Dependency snapshots are looked for next to the input file under
    /// `<name>.json`. A dependency that cannot be located or decoded is
    /// reported once; types referring into it are dropped.
    pub fn load(&mut self, path: &Path) -> Result<AssemblyMetadata, SnapshotError> {
        let snapshot = read_snapshot(path)?;
        let dir = path.parent().unwrap_or_else(|| Path::new("."));

        for reference in &snapshot.references {
            self.resolve(dir, reference);
        }

        let mut types = Vec::with_capacity(snapshot.types.len());
        for ty in snapshot.types {
            let missing: Vec<String> = referenced_assemblies(&ty)
                .into_iter()
                .filter(|name| !self.resolve(dir, name))
                .collect();
            if missing.is_empty() {
                types.push(ty);
            } else {
                log::debug!(
                    "omitting type {} (unresolved dependencies: {})",
                    ty.path.encoded_name(),
                    missing.join(", ")
                );
            }
        }

        Ok(AssemblyMetadata::new(snapshot.assembly, types))
    }

    /// Dependency names that could not be resolved so far.
    pub fn unresolved(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .attempted
            .iter()
            .filter(|(_, &ok)| !ok)
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    fn resolve(&mut self, dir: &Path, name: &str) -> bool {
        if let Some(&outcome) = self.attempted.get(name) {
            return outcome;
        }

        let candidate = dir.join(format!("{name}.json"));
        let outcome = match read_snapshot(&candidate) {
            Ok(snapshot) => {
                log::info!("resolved dependency assembly {}", snapshot.assembly);
                true
            }
            Err(err) => {
                log::warn!("could not resolve dependency assembly '{name}': {err}");
                false
            }
        };
        self.attempted.insert(name.to_string(), outcome);
        outcome
    }
}

/// Load a single snapshot with a fresh loader.
pub fn load_assembly(path: &Path) -> Result<AssemblyMetadata, SnapshotError> {
    SnapshotLoader::new().load(path)
}

fn read_snapshot(path: &Path) -> Result<AssemblySnapshot, SnapshotError> {
    let text = fs::read_to_string(path).map_err(|source| SnapshotError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| SnapshotError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// External assemblies mentioned anywhere in a type's descriptor tree.
fn referenced_assemblies(ty: &TypeDescriptor) -> BTreeSet<String> {
    let mut names = BTreeSet::new();

    if let Some(base) = &ty.base {
        collect_assemblies(base, &mut names);
    }
    for interface in &ty.interfaces {
        collect_assemblies(interface, &mut names);
    }
    for method in ty.constructors.iter().chain(&ty.methods) {
        collect_method(method, &mut names);
    }
    for property in &ty.properties {
        collect_assemblies(&property.ty, &mut names);
        for param in &property.index_params {
            collect_assemblies(&param.ty, &mut names);
        }
    }
    for field in &ty.fields {
        collect_assemblies(&field.ty, &mut names);
    }
    for event in &ty.events {
        collect_assemblies(&event.handler, &mut names);
    }
    names
}

fn collect_method(method: &MethodDescriptor, names: &mut BTreeSet<String>) {
    collect_assemblies(&method.return_type, names);
    for param in &method.params {
        collect_assemblies(&param.ty, names);
    }
}

fn collect_assemblies(type_ref: &TypeRef, names: &mut BTreeSet<String>) {
    match type_ref {
        TypeRef::Primitive(_) | TypeRef::GenericParam(_) => {}
        TypeRef::Named(path) => {
            if let Some(assembly) = &path.assembly {
                names.insert(assembly.clone());
            }
            for segment in &path.segments {
                if let crate::core::types::SegmentArgs::Closed(args) = &segment.args {
                    for arg in args {
                        collect_assemblies(arg, names);
                    }
                }
            }
        }
        TypeRef::Array { element, .. } => collect_assemblies(element, names),
        TypeRef::Pointer(element) => collect_assemblies(element, names),
        TypeRef::Nullable(underlying) => collect_assemblies(underlying, names),
    }
}
