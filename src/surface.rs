//! Public-surface filtering and member classification.
//!
//! Decides which types and members belong to the assembly's public API and
//! sorts special-named members into their display buckets. Special-name
//! dispatch happens once, here, through [`MemberKind`]; render code never
//! re-derives member roles from name inspection.

use std::collections::HashSet;

use crate::core::traits::MetadataSource;
use crate::core::types::{
    EventDescriptor, FieldDescriptor, MethodDescriptor, ParamMode, Primitive, PropertyDescriptor,
    TypeDescriptor, TypeKind, TypeRef,
};
use crate::render::ident;

/// Role of a method-shaped member, resolved once during classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Constructor,
    StaticConstructor,
    Finalizer,
    Operator,
    ConversionOperator,
    Accessor,
    Ordinary,
}

/// Classify a method-shaped member by its special-name convention.
pub fn classify_method(method: &MethodDescriptor) -> MemberKind {
    if method.name == ".ctor" {
        return MemberKind::Constructor;
    }
    if method.name == ".cctor" {
        return MemberKind::StaticConstructor;
    }
    if method.name == "Finalize" && method.params.is_empty() {
        return MemberKind::Finalizer;
    }
    if method.special_name {
        if method.name == "op_Explicit" || method.name == "op_Implicit" {
            return MemberKind::ConversionOperator;
        }
        if method.name.starts_with("op_") {
            return MemberKind::Operator;
        }
        return MemberKind::Accessor;
    }
    MemberKind::Ordinary
}

/// A type is part of the public surface iff it and every enclosing type
/// are public. A public type nested inside a non-public one is not visible.
pub fn is_type_visible(source: &dyn MetadataSource, ty: &TypeDescriptor) -> bool {
    if !ty.visibility.is_public() {
        return false;
    }

    let mut enclosing = ty.path.clone();
    while enclosing.segments.len() > 1 {
        enclosing.segments.pop();
        match source.lookup_type(&enclosing.encoded_name()) {
            Some(outer) if outer.visibility.is_public() => {}
            _ => return false,
        }
    }
    true
}

/// All visible types of the assembly, in declaration order.
pub fn visible_types<'a>(source: &'a dyn MetadataSource) -> Vec<&'a TypeDescriptor> {
    source
        .types()
        .iter()
        .filter(|ty| is_type_visible(source, *ty))
        .collect()
}

/// A method is trivial when it structurally overrides one of the universal
/// object-root conveniences. The match is on exact name and parameter
/// shape; a same-named method with different parameters is not trivial.
pub fn is_trivial_method(method: &MethodDescriptor) -> bool {
    match method.name.as_str() {
        "ToString" | "GetHashCode" => method.params.is_empty(),
        "Equals" => {
            method.params.len() == 1
                && method.params[0].mode == ParamMode::Value
                && method.params[0].ty == TypeRef::Primitive(Primitive::Object)
        }
        _ => false,
    }
}

/// Delegates disclose only their invoke shape; member listing is
/// compiler-synthesized plumbing and is suppressed wholesale.
pub fn hide_members(ty: &TypeDescriptor) -> bool {
    ty.is_delegate()
}

pub fn visible_constructors(ty: &TypeDescriptor) -> Vec<&MethodDescriptor> {
    ty.constructors
        .iter()
        .filter(|c| c.visibility.is_public() && classify_method(c) == MemberKind::Constructor)
        .collect()
}

pub fn visible_properties(ty: &TypeDescriptor) -> Vec<&PropertyDescriptor> {
    ty.properties
        .iter()
        .filter(|p| {
            p.getter_accessor(true).is_some() || p.setter_accessor(true).is_some()
        })
        .collect()
}

/// Public non-special methods. Finalizers never land here, whatever their
/// visibility; trivial-method suppression is applied by display callers.
pub fn visible_methods(ty: &TypeDescriptor) -> Vec<&MethodDescriptor> {
    ty.methods
        .iter()
        .filter(|m| m.visibility.is_public() && classify_method(m) == MemberKind::Ordinary)
        .collect()
}

pub fn visible_operators(ty: &TypeDescriptor) -> Vec<&MethodDescriptor> {
    ty.methods
        .iter()
        .filter(|m| {
            m.visibility.is_public()
                && matches!(
                    classify_method(m),
                    MemberKind::Operator | MemberKind::ConversionOperator
                )
        })
        .collect()
}

pub fn visible_fields(ty: &TypeDescriptor) -> Vec<&FieldDescriptor> {
    ty.fields
        .iter()
        .filter(|f| f.visibility.is_public())
        .collect()
}

pub fn visible_events(ty: &TypeDescriptor) -> Vec<&EventDescriptor> {
    ty.events
        .iter()
        .filter(|e| e.visibility.is_public())
        .collect()
}

/// Enum members: the declared public constants, without the synthesized
/// value field.
pub fn enum_members(ty: &TypeDescriptor) -> Vec<&FieldDescriptor> {
    ty.fields
        .iter()
        .filter(|f| f.visibility.is_public() && !f.special_name)
        .collect()
}

/// Identifiers of every visible type and member: the retained set for the
/// filtered slashdoc export. Visibility rules only; display classification
/// (trivial methods, delegate member hiding) does not apply here.
pub fn public_api_ids(source: &dyn MetadataSource) -> HashSet<String> {
    let mut ids = HashSet::new();

    for ty in visible_types(source) {
        ids.insert(ident::type_id(ty));

        if ty.kind == TypeKind::Enum {
            for field in enum_members(ty) {
                ids.insert(ident::field_id(ty, field));
            }
        } else {
            for ctor in visible_constructors(ty) {
                ids.insert(ident::method_id(ty, ctor));
            }
            for property in visible_properties(ty) {
                ids.insert(ident::property_id(ty, property));
            }
            for method in visible_methods(ty) {
                ids.insert(ident::method_id(ty, method));
            }
            for op in visible_operators(ty) {
                ids.insert(ident::method_id(ty, op));
            }
            for field in visible_fields(ty) {
                ids.insert(ident::field_id(ty, field));
            }
            for event in visible_events(ty) {
                ids.insert(ident::event_id(ty, event));
            }
        }
    }

    ids
}
