//! The loaded-assembly container handed to the documentation pipeline.

use std::collections::HashMap;

use crate::core::traits::MetadataSource;
use crate::core::types::TypeDescriptor;

/// A frozen view of one assembly: its simple name and every type it
/// declares, visible or not, indexed by encoded full name.
#[derive(Debug, Clone)]
pub struct AssemblyMetadata {
    name: String,
    types: Vec<TypeDescriptor>,
    index: HashMap<String, usize>,
}

impl AssemblyMetadata {
    pub fn new(name: impl Into<String>, types: Vec<TypeDescriptor>) -> Self {
        let index = types
            .iter()
            .enumerate()
            .map(|(i, t)| (t.path.encoded_name(), i))
            .collect();
        AssemblyMetadata {
            name: name.into(),
            types,
            index,
        }
    }
}

impl MetadataSource for AssemblyMetadata {
    fn simple_name(&self) -> &str {
        &self.name
    }

    fn types(&self) -> &[TypeDescriptor] {
        &self.types
    }

    fn lookup_type(&self, encoded_name: &str) -> Option<&TypeDescriptor> {
        self.index.get(encoded_name).map(|&i| &self.types[i])
    }
}
