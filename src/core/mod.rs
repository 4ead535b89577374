pub mod loader;
pub mod metadata;
pub mod traits;
pub mod types;

pub use loader::{load_assembly, AssemblySnapshot, SnapshotLoader};
pub use metadata::AssemblyMetadata;
pub use traits::MetadataSource;
pub use types::{
    AccessorDescriptor, EventDescriptor, FieldDescriptor, GenericOwner, GenericParamRef,
    MethodDescriptor, ParamDescriptor, ParamMode, PathSegment, Primitive, PropertyDescriptor,
    SegmentArgs, TypeDescriptor, TypeKind, TypePath, TypeRef, Visibility,
};
