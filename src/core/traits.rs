//! Collaborator contracts consumed by the documentation core.

use crate::core::types::TypeDescriptor;

/// Read-only access to the metadata of one loaded assembly.
///
/// The core never re-queries a live type system; it walks the frozen
/// descriptor snapshot exposed here.
pub trait MetadataSource {
    /// Simple name of the assembly, without extension or version.
    fn simple_name(&self) -> &str;

    /// Every type declared by the assembly, visible or not.
    fn types(&self) -> &[TypeDescriptor];

    /// Find a declared type by its encoded full name, for example
    /// `Sample.Widget` or ``Sample.Box`1``. Returns `None` for types the
    /// assembly does not declare.
    fn lookup_type(&self, encoded_name: &str) -> Option<&TypeDescriptor>;
}
