// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod core;
pub mod engine;
pub mod errors;
pub mod output;
pub mod render;
pub mod slashdoc;
pub mod surface;

// Re-export commonly used types
pub use crate::core::{
    load_assembly, AccessorDescriptor, AssemblyMetadata, EventDescriptor, FieldDescriptor,
    GenericOwner, MetadataSource, MethodDescriptor, ParamDescriptor, ParamMode, PathSegment,
    Primitive, PropertyDescriptor, SegmentArgs, SnapshotLoader, TypeDescriptor, TypeKind,
    TypePath, TypeRef, Visibility,
};

pub use crate::engine::{write_public_api_reference_html, write_public_api_slashdoc};

pub use crate::errors::{SlashdocError, SnapshotError};

pub use crate::output::ApiReferenceHtmlWriter;

pub use crate::render::{CSharpSignatures, LanguageSignatures, TypeReferencer};

pub use crate::slashdoc::{DocAssociator, SlashdocStore, SummaryHtmlFormatter};
