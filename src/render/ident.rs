//! Canonical slashdoc identifiers for types and members.
//!
//! These strings are the lookup keys into the external documentation store,
//! so the encoding must match the slashdoc convention exactly: `T:`/`M:`/
//! `P:`/`F:`/`E:` prefixes, backtick arity markers, `{}`-bracketed generic
//! instantiations, `@` for by-ref parameters, and `#`-escaped dots in
//! member names. Identifier construction is pure; equivalent descriptors
//! always produce character-identical output.

use crate::core::types::{
    EventDescriptor, FieldDescriptor, GenericOwner, MethodDescriptor, ParamDescriptor,
    PropertyDescriptor, SegmentArgs, TypeDescriptor, TypePath, TypeRef,
};

/// Identifier of a type (`T:Ns.Outer.Name` with arity suffix when generic).
pub fn type_id(ty: &TypeDescriptor) -> String {
    format!("T:{}", ty.path.encoded_name())
}

/// Identifier of a method or constructor declared on `declaring`.
pub fn method_id(declaring: &TypeDescriptor, method: &MethodDescriptor) -> String {
    let mut id = format!(
        "M:{}.{}",
        declaring.path.encoded_name(),
        hash_encode(&method.name)
    );

    if !method.generic_params.is_empty() {
        id.push_str("``");
        id.push_str(&method.generic_params.len().to_string());
    }

    if !method.params.is_empty() {
        id.push('(');
        id.push_str(&encode_params(&method.params));
        id.push(')');
    }

    if is_conversion_operator(method) {
        id.push('~');
        id.push_str(&encode(&method.return_type));
    }

    id
}

/// Identifier of a property; indexers append their index parameter types.
pub fn property_id(declaring: &TypeDescriptor, property: &PropertyDescriptor) -> String {
    let mut id = format!(
        "P:{}.{}",
        declaring.path.encoded_name(),
        hash_encode(&property.name)
    );
    if !property.index_params.is_empty() {
        id.push('(');
        id.push_str(&encode_params(&property.index_params));
        id.push(')');
    }
    id
}

/// Identifier of a field.
pub fn field_id(declaring: &TypeDescriptor, field: &FieldDescriptor) -> String {
    format!(
        "F:{}.{}",
        declaring.path.encoded_name(),
        hash_encode(&field.name)
    )
}

/// Identifier of an event.
pub fn event_id(declaring: &TypeDescriptor, event: &EventDescriptor) -> String {
    format!(
        "E:{}.{}",
        declaring.path.encoded_name(),
        hash_encode(&event.name)
    )
}

/// The encoded type name carried by a `T:` identifier, or `None` for
/// identifiers of any other kind.
pub fn type_name_of_id(id: &str) -> Option<&str> {
    id.strip_prefix("T:")
}

/// True for user-defined conversion operators, which suffix their
/// identifier with the encoded return type.
pub fn is_conversion_operator(method: &MethodDescriptor) -> bool {
    method.special_name && (method.name == "op_Explicit" || method.name == "op_Implicit")
}

fn encode_params(params: &[ParamDescriptor]) -> String {
    let encoded: Vec<String> = params.iter().map(encode_param).collect();
    encoded.join(",")
}

fn encode_param(param: &ParamDescriptor) -> String {
    let mut encoded = encode(&param.ty);
    if param.is_by_ref() {
        encoded.push('@');
    }
    encoded
}

/// Encoded spelling of a type reference inside an identifier.
fn encode(type_ref: &TypeRef) -> String {
    match type_ref {
        TypeRef::Primitive(primitive) => primitive.runtime_name().to_string(),
        TypeRef::GenericParam(param) => {
            let marker = match param.owner {
                GenericOwner::Type => "`",
                GenericOwner::Method => "``",
            };
            format!("{marker}{}", param.position)
        }
        TypeRef::Array { element, rank } => {
            format!("{}[{}]", encode(element), array_rank_descriptor(*rank))
        }
        TypeRef::Pointer(element) => format!("{}*", encode(element)),
        TypeRef::Nullable(underlying) => format!("System.Nullable{{{}}}", encode(underlying)),
        TypeRef::Named(path) => encode_path(path),
    }
}

fn encode_path(path: &TypePath) -> String {
    let open_name = path.encoded_name();

    let closed_args: Vec<&TypeRef> = path
        .segments
        .iter()
        .filter_map(|segment| match &segment.args {
            SegmentArgs::Closed(args) => Some(args.iter()),
            _ => None,
        })
        .flatten()
        .collect();

    if closed_args.is_empty() {
        return open_name;
    }

    // An instantiation drops the arity suffix from the open name and lists
    // its arguments in braces instead.
    let stem_len = open_name.find('`').unwrap_or(open_name.len());
    let encoded: Vec<String> = closed_args.into_iter().map(encode).collect();
    format!("{}{{{}}}", &open_name[..stem_len], encoded.join(","))
}

/// Dots in member names are carried as hash signs; in practice this only
/// affects the `.ctor`/`.cctor` constructor pseudo-names.
fn hash_encode(name: &str) -> String {
    name.replace('.', "#")
}

/// Rank 1 arrays have an empty rank descriptor; higher ranks carry one
/// `0:` lower-bound marker per dimension.
fn array_rank_descriptor(rank: u32) -> String {
    if rank > 1 {
        vec!["0:"; rank as usize].join(",")
    } else {
        String::new()
    }
}
