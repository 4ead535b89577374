//! Descriptor model for assembly metadata.
//!
//! Everything in here is an immutable snapshot: descriptors are built once
//! when an assembly snapshot is loaded and never mutated afterwards. Display
//! strings and lookup identifiers are pure functions over these types.

use serde::{Deserialize, Serialize};

/// Built-in primitive types with fixed display tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Primitive {
    Bool,
    Byte,
    SByte,
    Char,
    Decimal,
    Double,
    Float,
    Int,
    UInt,
    Long,
    ULong,
    Object,
    Short,
    UShort,
    String,
    Void,
}

impl Primitive {
    /// The C# keyword for this primitive.
    pub fn display_token(self) -> &'static str {
        match self {
            Primitive::Bool => "bool",
            Primitive::Byte => "byte",
            Primitive::SByte => "sbyte",
            Primitive::Char => "char",
            Primitive::Decimal => "decimal",
            Primitive::Double => "double",
            Primitive::Float => "float",
            Primitive::Int => "int",
            Primitive::UInt => "uint",
            Primitive::Long => "long",
            Primitive::ULong => "ulong",
            Primitive::Object => "object",
            Primitive::Short => "short",
            Primitive::UShort => "ushort",
            Primitive::String => "string",
            Primitive::Void => "void",
        }
    }

    /// The runtime type name used in slashdoc identifiers.
    pub fn runtime_name(self) -> &'static str {
        match self {
            Primitive::Bool => "System.Boolean",
            Primitive::Byte => "System.Byte",
            Primitive::SByte => "System.SByte",
            Primitive::Char => "System.Char",
            Primitive::Decimal => "System.Decimal",
            Primitive::Double => "System.Double",
            Primitive::Float => "System.Single",
            Primitive::Int => "System.Int32",
            Primitive::UInt => "System.UInt32",
            Primitive::Long => "System.Int64",
            Primitive::ULong => "System.UInt64",
            Primitive::Object => "System.Object",
            Primitive::Short => "System.Int16",
            Primitive::UShort => "System.UInt16",
            Primitive::String => "System.String",
            Primitive::Void => "System.Void",
        }
    }
}

/// Whether a generic parameter was declared on the type or on the method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenericOwner {
    Type,
    Method,
}

/// A use of a generic parameter, by declaration position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericParamRef {
    pub name: String,
    pub position: u32,
    pub owner: GenericOwner,
}

/// Generic argument list of one path segment.
///
/// `Open` carries declared parameter names (an unbound definition), `Closed`
/// carries the actual arguments of an instantiation. Arguments of a `Closed`
/// list may still contain generic parameter references (half-open forms).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentArgs {
    #[default]
    None,
    Open(Vec<String>),
    Closed(Vec<TypeRef>),
}

/// One component of a type's lexical path: a simple type name (arity suffix
/// already stripped) plus its generic argument list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSegment {
    pub name: String,
    #[serde(default)]
    pub args: SegmentArgs,
}

impl PathSegment {
    /// A segment without generic arguments.
    pub fn plain(name: impl Into<String>) -> Self {
        PathSegment {
            name: name.into(),
            args: SegmentArgs::None,
        }
    }

    /// An unbound generic segment declaring the given parameter names.
    pub fn open(name: impl Into<String>, params: &[&str]) -> Self {
        PathSegment {
            name: name.into(),
            args: SegmentArgs::Open(params.iter().map(|p| (*p).to_string()).collect()),
        }
    }

    /// An instantiated generic segment with the given arguments.
    pub fn closed(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        PathSegment {
            name: name.into(),
            args: SegmentArgs::Closed(args),
        }
    }

    /// Number of generic parameters or arguments carried by this segment.
    pub fn arity(&self) -> usize {
        match &self.args {
            SegmentArgs::None => 0,
            SegmentArgs::Open(params) => params.len(),
            SegmentArgs::Closed(args) => args.len(),
        }
    }
}

/// Full lexical location of a named type: namespace plus the chain of
/// enclosing type segments, outermost first, ending with the type itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypePath {
    pub namespace: String,
    pub segments: Vec<PathSegment>,
    /// Defining assembly, when it is not the inspected assembly itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assembly: Option<String>,
}

impl TypePath {
    pub fn new(namespace: impl Into<String>, segments: Vec<PathSegment>) -> Self {
        TypePath {
            namespace: namespace.into(),
            segments,
            assembly: None,
        }
    }

    /// A non-generic type directly inside the `System` namespace.
    pub fn system(name: &str) -> Self {
        TypePath::new("System", vec![PathSegment::plain(name)])
    }

    /// Simple name of the type itself, without namespace, enclosing types,
    /// or generic arguments. Used for constructor and finalizer names.
    pub fn simple_name(&self) -> &str {
        self.segments.last().map(|s| s.name.as_str()).unwrap_or("")
    }

    /// True when this path names exactly `System.<name>` without arguments.
    pub fn is_system_type(&self, name: &str) -> bool {
        self.namespace == "System"
            && self.segments.len() == 1
            && self.segments[0].name == name
            && self.segments[0].args == SegmentArgs::None
    }

    /// Namespace components, empty for the global namespace.
    pub fn namespace_parts(&self) -> impl Iterator<Item = &str> {
        self.namespace.split('.').filter(|p| !p.is_empty())
    }

    /// Canonical dotted spelling with arity suffixes, for example
    /// ``Ns.Outer.Name`2``, ignoring any generic arguments. This is the
    /// open-form name used as the type lookup key and inside slashdoc
    /// identifiers.
    pub fn encoded_name(&self) -> String {
        let mut out = String::new();
        for part in self.namespace_parts() {
            out.push_str(part);
            out.push('.');
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            out.push_str(&segment.name);
            if segment.arity() > 0 {
                out.push('`');
                out.push_str(&segment.arity().to_string());
            }
        }
        out
    }
}

/// A reference to a type, as it appears in member signatures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeRef {
    Primitive(Primitive),
    Named(TypePath),
    Array { element: Box<TypeRef>, rank: u32 },
    Pointer(Box<TypeRef>),
    Nullable(Box<TypeRef>),
    GenericParam(GenericParamRef),
}

impl Default for TypeRef {
    fn default() -> Self {
        TypeRef::Primitive(Primitive::Void)
    }
}

impl TypeRef {
    pub fn named(path: TypePath) -> Self {
        TypeRef::Named(path)
    }

    pub fn array(element: TypeRef, rank: u32) -> Self {
        TypeRef::Array {
            element: Box::new(element),
            rank,
        }
    }

    pub fn pointer(element: TypeRef) -> Self {
        TypeRef::Pointer(Box::new(element))
    }

    pub fn nullable(underlying: TypeRef) -> Self {
        TypeRef::Nullable(Box::new(underlying))
    }

    /// A reference to a generic parameter declared on the enclosing type.
    pub fn type_param(name: impl Into<String>, position: u32) -> Self {
        TypeRef::GenericParam(GenericParamRef {
            name: name.into(),
            position,
            owner: GenericOwner::Type,
        })
    }

    /// A reference to a generic parameter declared on the method itself.
    pub fn method_param(name: impl Into<String>, position: u32) -> Self {
        TypeRef::GenericParam(GenericParamRef {
            name: name.into(),
            position,
            owner: GenericOwner::Method,
        })
    }
}

/// Declared accessibility. Only `Public` takes part in the public surface;
/// the remaining distinctions exist so snapshots can carry them through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Public,
    Family,
    Assembly,
    Private,
}

impl Visibility {
    pub fn is_public(self) -> bool {
        matches!(self, Visibility::Public)
    }
}

/// Category keyword of a type. Delegates are classes whose base type is the
/// multicast-delegate root and are detected, not declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeKind {
    Class,
    Interface,
    Struct,
    Enum,
}

/// Parameter passing mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamMode {
    #[default]
    Value,
    Ref,
    Out,
}

/// A method or indexer parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDescriptor {
    pub name: String,
    pub ty: TypeRef,
    #[serde(default)]
    pub mode: ParamMode,
}

impl ParamDescriptor {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        ParamDescriptor {
            name: name.into(),
            ty,
            mode: ParamMode::Value,
        }
    }

    pub fn by_ref(name: impl Into<String>, ty: TypeRef) -> Self {
        ParamDescriptor {
            name: name.into(),
            ty,
            mode: ParamMode::Ref,
        }
    }

    pub fn out(name: impl Into<String>, ty: TypeRef) -> Self {
        ParamDescriptor {
            name: name.into(),
            ty,
            mode: ParamMode::Out,
        }
    }

    /// True for `ref` and `out` parameters.
    pub fn is_by_ref(&self) -> bool {
        !matches!(self.mode, ParamMode::Value)
    }
}

/// A method, constructor, operator, accessor, or finalizer.
///
/// Constructors are carried with their metadata names `.ctor` / `.cctor`;
/// operators and accessors are special-named members recognized by prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MethodDescriptor {
    pub name: String,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_override: bool,
    pub special_name: bool,
    pub is_extension: bool,
    pub generic_params: Vec<String>,
    pub params: Vec<ParamDescriptor>,
    pub return_type: TypeRef,
}

impl MethodDescriptor {
    /// A public instance method with the given shape.
    pub fn new(name: impl Into<String>, return_type: TypeRef, params: Vec<ParamDescriptor>) -> Self {
        MethodDescriptor {
            name: name.into(),
            return_type,
            params,
            ..Default::default()
        }
    }

    /// A public instance constructor.
    pub fn constructor(params: Vec<ParamDescriptor>) -> Self {
        MethodDescriptor {
            name: ".ctor".to_string(),
            params,
            special_name: true,
            ..Default::default()
        }
    }

    /// The static (class) constructor.
    pub fn static_constructor() -> Self {
        MethodDescriptor {
            name: ".cctor".to_string(),
            is_static: true,
            visibility: Visibility::Private,
            special_name: true,
            ..Default::default()
        }
    }

    /// A finalizer (`Finalize`, family visibility, no parameters).
    pub fn finalizer() -> Self {
        MethodDescriptor {
            name: "Finalize".to_string(),
            visibility: Visibility::Family,
            is_override: true,
            ..Default::default()
        }
    }
}

/// One half of a property (or the adder of an event).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessorDescriptor {
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_abstract: bool,
}

impl AccessorDescriptor {
    pub fn public() -> Self {
        AccessorDescriptor::default()
    }

    pub fn private() -> Self {
        AccessorDescriptor {
            visibility: Visibility::Private,
            ..Default::default()
        }
    }
}

/// A property; indexers are properties with index parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    pub name: String,
    pub ty: TypeRef,
    #[serde(default)]
    pub getter: Option<AccessorDescriptor>,
    #[serde(default)]
    pub setter: Option<AccessorDescriptor>,
    #[serde(default)]
    pub index_params: Vec<ParamDescriptor>,
}

impl PropertyDescriptor {
    /// A read/write property with public accessors.
    pub fn read_write(name: impl Into<String>, ty: TypeRef) -> Self {
        PropertyDescriptor {
            name: name.into(),
            ty,
            getter: Some(AccessorDescriptor::public()),
            setter: Some(AccessorDescriptor::public()),
            index_params: Vec::new(),
        }
    }

    /// Getter, restricted to public accessors when `public_only` is set.
    pub fn getter_accessor(&self, public_only: bool) -> Option<&AccessorDescriptor> {
        self.getter
            .as_ref()
            .filter(|a| !public_only || a.visibility.is_public())
    }

    /// Setter, restricted to public accessors when `public_only` is set.
    pub fn setter_accessor(&self, public_only: bool) -> Option<&AccessorDescriptor> {
        self.setter
            .as_ref()
            .filter(|a| !public_only || a.visibility.is_public())
    }

    pub fn is_indexer(&self) -> bool {
        !self.index_params.is_empty()
    }
}

/// A field. Enum members are public const fields carrying their raw value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldDescriptor {
    pub name: String,
    pub ty: TypeRef,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_const: bool,
    pub is_readonly: bool,
    pub special_name: bool,
    /// Raw constant value, present for const fields and enum members.
    pub constant: Option<i64>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        FieldDescriptor {
            name: name.into(),
            ty,
            ..Default::default()
        }
    }
}

/// An event. Modifier and visibility information comes from the adder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventDescriptor {
    pub name: String,
    pub handler: TypeRef,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_abstract: bool,
}

impl EventDescriptor {
    pub fn new(name: impl Into<String>, handler: TypeRef) -> Self {
        EventDescriptor {
            name: name.into(),
            handler,
            ..Default::default()
        }
    }
}

/// A type declared by the inspected assembly, with its declared members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub path: TypePath,
    pub kind: TypeKind,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub is_sealed: bool,
    #[serde(default)]
    pub base: Option<TypeRef>,
    #[serde(default)]
    pub interfaces: Vec<TypeRef>,
    #[serde(default)]
    pub constructors: Vec<MethodDescriptor>,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub events: Vec<EventDescriptor>,
}

impl TypeDescriptor {
    /// An empty public type of the given kind.
    pub fn new(path: TypePath, kind: TypeKind) -> Self {
        TypeDescriptor {
            path,
            kind,
            visibility: Visibility::Public,
            is_abstract: false,
            is_sealed: false,
            base: None,
            interfaces: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
            properties: Vec::new(),
            fields: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.path.namespace
    }

    /// A delegate is a class deriving directly from the multicast-delegate
    /// root type.
    pub fn is_delegate(&self) -> bool {
        self.kind == TypeKind::Class
            && matches!(
                &self.base,
                Some(TypeRef::Named(path)) if path.is_system_type("MulticastDelegate")
            )
    }

    /// The delegate invoke shape, when this type declares one.
    pub fn invoke_method(&self) -> Option<&MethodDescriptor> {
        self.methods.iter().find(|m| m.name == "Invoke")
    }
}
