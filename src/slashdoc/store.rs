//! The documentation-fragment store and the per-run associator.

use std::collections::{HashMap, HashSet};

/// Raw slashdoc fragments keyed by canonical identifier.
///
/// Content is free-form markup; the store passes it through uninterpreted.
#[derive(Debug, Default, Clone)]
pub struct SlashdocStore {
    assembly_name: Option<String>,
    fragments: HashMap<String, String>,
}

impl SlashdocStore {
    pub fn new() -> Self {
        SlashdocStore::default()
    }

    pub fn assembly_name(&self) -> Option<&str> {
        self.assembly_name.as_deref()
    }

    pub fn set_assembly_name(&mut self, name: impl Into<String>) {
        self.assembly_name = Some(name.into());
    }

    pub fn set_fragment(&mut self, id: impl Into<String>, fragment: impl Into<String>) {
        self.fragments.insert(id.into(), fragment.into());
    }

    pub fn fragment(&self, id: &str) -> Option<&str> {
        self.fragments.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// Store lookups for one generation run, with miss tracking.
///
/// The first lookup miss per identifier is recorded and, when the warning
/// toggle is on, reported; repeated lookups of the same missing identifier
/// stay silent. The warned set belongs to the run, not the process.
#[derive(Debug)]
pub struct DocAssociator<'a> {
    store: &'a SlashdocStore,
    warn_missing: bool,
    missed: HashSet<String>,
}

impl<'a> DocAssociator<'a> {
    pub fn new(store: &'a SlashdocStore, warn_missing: bool) -> Self {
        DocAssociator {
            store,
            warn_missing,
            missed: HashSet::new(),
        }
    }

    /// Fragment for `id`, recording (and at most once reporting) a miss.
    pub fn lookup(&mut self, id: &str) -> Option<&'a str> {
        let fragment = self.store.fragment(id);
        if fragment.is_none() && self.missed.insert(id.to_string()) && self.warn_missing {
            log::warn!("no documentation entry for {id}");
        }
        fragment
    }

    /// Identifiers that missed at least once during this run.
    pub fn missed(&self) -> impl Iterator<Item = &str> {
        self.missed.iter().map(String::as_str)
    }

    pub fn miss_count(&self) -> usize {
        self.missed.len()
    }
}
