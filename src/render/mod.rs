//! Signature rendering and identifier derivation.
//!
//! This is the heart of the generator: given descriptors from the metadata
//! snapshot it produces, purely and deterministically, both the canonical
//! slashdoc identifier used to look up documentation fragments and the
//! human-readable C# declaration shown in the reference output.

pub mod ident;
pub mod signature;
pub mod type_ref;

pub use signature::{CSharpSignatures, LanguageSignatures};
pub use type_ref::TypeReferencer;
