//! C# declaration signatures for types and members.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::core::types::{
    EventDescriptor, FieldDescriptor, MethodDescriptor, ParamDescriptor, ParamMode, Primitive,
    PropertyDescriptor, TypeDescriptor, TypeKind, TypeRef,
};
use crate::render::ident::is_conversion_operator;
use crate::render::type_ref::TypeReferencer;

/// Display token for each special-named operator method.
static OPERATORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // unary operators
        ("op_UnaryPlus", "operator +"),
        ("op_UnaryNegation", "operator -"),
        ("op_LogicalNot", "operator !"),
        ("op_OnesComplement", "operator ~"),
        ("op_Increment", "operator ++"),
        ("op_Decrement", "operator --"),
        ("op_True", "operator true"),
        ("op_False", "operator false"),
        // binary operators
        ("op_Addition", "operator +"),
        ("op_Subtraction", "operator -"),
        ("op_Multiply", "operator *"),
        ("op_Division", "operator /"),
        ("op_Modulus", "operator %"),
        ("op_BitwiseAnd", "operator &"),
        ("op_BitwiseOr", "operator |"),
        ("op_ExclusiveOr", "operator ^"),
        ("op_LeftShift", "operator <<"),
        ("op_RightShift", "operator >>"),
        ("op_Equality", "operator =="),
        ("op_Inequality", "operator !="),
        ("op_LessThan", "operator <"),
        ("op_LessThanOrEqual", "operator <="),
        ("op_GreaterThan", "operator >"),
        ("op_GreaterThanOrEqual", "operator >="),
        // conversion operators
        ("op_Explicit", "explicit operator"),
        ("op_Implicit", "implicit operator"),
    ])
});

/// Display token of a special operator name, if it is one.
pub fn operator_token(method_name: &str) -> Option<&'static str> {
    OPERATORS.get(method_name).copied()
}

/// Language-specific rendering of names and declaration signatures.
pub trait LanguageSignatures {
    /// Full name of a type, with namespace and enclosing types.
    fn display_name(&self, ty: &TypeDescriptor) -> String;

    /// Name of a type without namespace components.
    fn short_display_name(&self, ty: &TypeDescriptor) -> String;

    /// Category keyword: `class`, `interface`, `struct`, `enum`, `delegate`.
    fn meta_type_name(&self, ty: &TypeDescriptor) -> &'static str;

    fn type_signature(&self, ty: &TypeDescriptor) -> String;

    fn constructor_signature(&self, declaring: &TypeDescriptor, ctor: &MethodDescriptor)
        -> String;

    fn method_signature(&self, declaring: &TypeDescriptor, method: &MethodDescriptor) -> String;

    fn property_signature(
        &self,
        declaring: &TypeDescriptor,
        property: &PropertyDescriptor,
    ) -> String;

    fn field_signature(&self, declaring: &TypeDescriptor, field: &FieldDescriptor) -> String;

    fn event_signature(&self, declaring: &TypeDescriptor, event: &EventDescriptor) -> String;
}

/// The C# rendering convention.
#[derive(Debug, Default, Clone, Copy)]
pub struct CSharpSignatures;

impl CSharpSignatures {
    pub fn new() -> Self {
        CSharpSignatures
    }
}

impl LanguageSignatures for CSharpSignatures {
    fn display_name(&self, ty: &TypeDescriptor) -> String {
        TypeReferencer::global().reference_path(&ty.path, false)
    }

    fn short_display_name(&self, ty: &TypeDescriptor) -> String {
        TypeReferencer::global().reference_path(&ty.path, true)
    }

    fn meta_type_name(&self, ty: &TypeDescriptor) -> &'static str {
        match ty.kind {
            TypeKind::Class if ty.is_delegate() => "delegate",
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
            TypeKind::Struct => "struct",
            TypeKind::Enum => "enum",
        }
    }

    fn type_signature(&self, ty: &TypeDescriptor) -> String {
        let referencer = TypeReferencer::new(Some(&ty.path));
        let mut sig = String::new();

        if ty.is_delegate() {
            sig.push_str("delegate ");
            match ty.invoke_method() {
                Some(invoke) => {
                    sig.push_str(&referencer.reference(&invoke.return_type));
                    sig.push(' ');
                    sig.push_str(&self.short_display_name(ty));
                    append_method_params(invoke, &referencer, &mut sig);
                }
                // No invoke shape in the snapshot; show the bare name.
                None => sig.push_str(&self.short_display_name(ty)),
            }
            return sig;
        }

        match ty.kind {
            TypeKind::Class => {
                append_type_modifiers(ty, &mut sig);
                sig.push_str("class ");
                sig.push_str(&self.short_display_name(ty));
                append_base_and_interfaces(ty, &referencer, &mut sig);
            }
            TypeKind::Interface => {
                sig.push_str("interface ");
                sig.push_str(&self.short_display_name(ty));
                append_base_and_interfaces(ty, &referencer, &mut sig);
            }
            TypeKind::Struct => {
                sig.push_str("struct ");
                sig.push_str(&self.short_display_name(ty));
                append_base_and_interfaces(ty, &referencer, &mut sig);
            }
            TypeKind::Enum => {
                sig.push_str("enum ");
                sig.push_str(&self.short_display_name(ty));
            }
        }

        sig
    }

    fn constructor_signature(
        &self,
        declaring: &TypeDescriptor,
        ctor: &MethodDescriptor,
    ) -> String {
        let referencer = TypeReferencer::new(Some(&declaring.path));
        let mut sig = String::new();

        append_member_modifiers(ctor, &mut sig);
        sig.push_str(declaring.path.simple_name());
        append_method_params(ctor, &referencer, &mut sig);

        sig
    }

    fn method_signature(&self, declaring: &TypeDescriptor, method: &MethodDescriptor) -> String {
        if method.name == "Finalize" && method.params.is_empty() {
            return format!("~{}()", declaring.path.simple_name());
        }

        let referencer = TypeReferencer::new(Some(&declaring.path));
        let mut sig = String::new();

        // Interface members are implicitly public and abstract.
        if declaring.kind != TypeKind::Interface {
            append_member_modifiers(method, &mut sig);
        }

        let conversion = is_conversion_operator(method);
        if conversion {
            if let Some(token) = operator_token(&method.name) {
                sig.push_str(token);
                sig.push(' ');
            }
        }

        sig.push_str(&referencer.reference(&method.return_type));

        if !conversion {
            sig.push(' ');
            match operator_token(&method.name).filter(|_| method.special_name) {
                Some(token) => sig.push_str(token),
                None => sig.push_str(&method.name),
            }
        }

        if !method.generic_params.is_empty() {
            sig.push('<');
            sig.push_str(&method.generic_params.join(", "));
            sig.push('>');
        }

        append_method_params(method, &referencer, &mut sig);

        sig
    }

    fn property_signature(
        &self,
        declaring: &TypeDescriptor,
        property: &PropertyDescriptor,
    ) -> String {
        let referencer = TypeReferencer::new(Some(&declaring.path));
        let mut sig = String::new();

        let getter = property.getter_accessor(true);
        let setter = property.setter_accessor(true);

        if declaring.kind != TypeKind::Interface {
            if let Some(accessor) = getter.or(setter) {
                if accessor.is_static {
                    sig.push_str("static ");
                }
                if accessor.is_abstract {
                    sig.push_str("abstract ");
                }
            }
        }

        sig.push_str(&referencer.reference(&property.ty));
        sig.push(' ');

        if property.is_indexer() {
            sig.push_str("this[");
            sig.push_str(&format_parameters(&property.index_params, &referencer));
            sig.push(']');
        } else {
            sig.push_str(&property.name);
        }

        sig.push_str(" { ");
        if getter.is_some() {
            sig.push_str("get; ");
        }
        if setter.is_some() {
            sig.push_str("set; ");
        }
        sig.push('}');

        sig
    }

    fn field_signature(&self, declaring: &TypeDescriptor, field: &FieldDescriptor) -> String {
        let referencer = TypeReferencer::new(Some(&declaring.path));
        let mut sig = String::new();

        if field.is_const {
            sig.push_str("const ");
        } else if field.is_static {
            sig.push_str("static ");
        }
        if field.is_readonly {
            sig.push_str("readonly ");
        }

        sig.push_str(&referencer.reference(&field.ty));
        sig.push(' ');
        sig.push_str(&field.name);

        sig
    }

    fn event_signature(&self, declaring: &TypeDescriptor, event: &EventDescriptor) -> String {
        let referencer = TypeReferencer::new(Some(&declaring.path));
        let mut sig = String::new();

        if declaring.kind != TypeKind::Interface {
            if event.is_static {
                sig.push_str("static ");
            }
            if event.is_abstract {
                sig.push_str("abstract ");
            }
        }

        sig.push_str("event ");
        sig.push_str(&referencer.reference(&event.handler));
        sig.push(' ');
        sig.push_str(&event.name);

        sig
    }
}

/// `static` for types that can neither be instantiated nor inherited,
/// `abstract` for merely abstract ones.
fn append_type_modifiers(ty: &TypeDescriptor, sig: &mut String) {
    if ty.is_abstract {
        if ty.is_sealed {
            sig.push_str("static ");
        } else {
            sig.push_str("abstract ");
        }
    }
}

fn append_member_modifiers(method: &MethodDescriptor, sig: &mut String) {
    if method.is_static {
        sig.push_str("static ");
    }
    if method.is_abstract {
        sig.push_str("abstract ");
    }
}

fn append_method_params(method: &MethodDescriptor, referencer: &TypeReferencer, sig: &mut String) {
    sig.push('(');
    if method.is_extension {
        sig.push_str("this ");
    }
    sig.push_str(&format_parameters(&method.params, referencer));
    sig.push(')');
}

fn format_parameters(params: &[ParamDescriptor], referencer: &TypeReferencer) -> String {
    let rendered: Vec<String> = params
        .iter()
        .map(|param| {
            let ty = referencer.reference(&param.ty);
            match param.mode {
                ParamMode::Value => format!("{} {}", ty, param.name),
                ParamMode::Ref => format!("ref {} {}", ty, param.name),
                ParamMode::Out => format!("out {} {}", ty, param.name),
            }
        })
        .collect();
    rendered.join(", ")
}

fn append_base_and_interfaces(
    ty: &TypeDescriptor,
    referencer: &TypeReferencer,
    sig: &mut String,
) {
    let mut bases: Vec<String> = Vec::new();

    if let Some(base) = &ty.base {
        if !is_root_base(base) {
            bases.push(referencer.reference(base));
        }
    }
    for interface in &ty.interfaces {
        bases.push(referencer.reference(interface));
    }

    if !bases.is_empty() {
        sig.push_str(" : ");
        sig.push_str(&bases.join(", "));
    }
}

/// The universal object root and the value-type root never appear in a
/// base clause.
fn is_root_base(base: &TypeRef) -> bool {
    match base {
        TypeRef::Primitive(Primitive::Object) => true,
        TypeRef::Named(path) => path.is_system_type("Object") || path.is_system_type("ValueType"),
        _ => false,
    }
}
