//! Shared fixture descriptors: a small test assembly exercising nesting,
//! generics, operators, indexers, finalizers, delegates, and visibility.

#![allow(dead_code)]

use apiref::{
    AccessorDescriptor, AssemblyMetadata, EventDescriptor, FieldDescriptor, MethodDescriptor,
    ParamDescriptor, PathSegment, Primitive, PropertyDescriptor, TypeDescriptor, TypeKind,
    TypePath, TypeRef, Visibility,
};

pub const NS: &str = "TestData.Xyz.Foo";

pub fn path(names: &[&str]) -> TypePath {
    TypePath::new(
        NS,
        names.iter().map(|name| PathSegment::plain(*name)).collect(),
    )
}

pub fn named(names: &[&str]) -> TypeRef {
    TypeRef::named(path(names))
}

pub fn system(name: &str) -> TypeRef {
    TypeRef::named(TypePath::system(name))
}

pub fn int() -> TypeRef {
    TypeRef::Primitive(Primitive::Int)
}

pub fn boolean() -> TypeRef {
    TypeRef::Primitive(Primitive::Bool)
}

pub fn string() -> TypeRef {
    TypeRef::Primitive(Primitive::String)
}

pub fn object() -> TypeRef {
    TypeRef::Primitive(Primitive::Object)
}

pub fn void() -> TypeRef {
    TypeRef::Primitive(Primitive::Void)
}

pub fn event_handler() -> TypeRef {
    system("EventHandler")
}

fn multicast_delegate_base() -> Option<TypeRef> {
    Some(TypeRef::named(TypePath::system("MulticastDelegate")))
}

fn delegate_type(segments: Vec<PathSegment>, invoke: MethodDescriptor) -> TypeDescriptor {
    let mut ty = TypeDescriptor::new(TypePath::new(NS, segments), TypeKind::Class);
    ty.is_sealed = true;
    ty.base = multicast_delegate_base();
    ty.methods.push(invoke);
    ty
}

/// `TestGeneric<T, G>`, open form.
pub fn test_generic_path() -> TypePath {
    TypePath::new(NS, vec![PathSegment::open("TestGeneric", &["T", "G"])])
}

/// `TestGeneric<int, G>`, the half-open instantiation.
pub fn half_open_test_generic() -> TypeRef {
    TypeRef::named(TypePath::new(
        NS,
        vec![PathSegment::closed(
            "TestGeneric",
            vec![int(), TypeRef::type_param("G", 1)],
        )],
    ))
}

pub fn test_class() -> TypeDescriptor {
    let mut ty = TypeDescriptor::new(path(&["TestClass"]), TypeKind::Class);
    ty.base = Some(object());
    ty.interfaces.push(system("ICloneable"));

    ty.constructors.push(MethodDescriptor::constructor(vec![
        ParamDescriptor::new("xyz", string()),
    ]));

    ty.methods.push(MethodDescriptor::finalizer());
    ty.methods
        .push(MethodDescriptor::new("Clone", object(), vec![]));
    ty.methods
        .push(MethodDescriptor::new("MethodReturningVoid", void(), vec![]));
    // Trivial override of the object-root string conversion.
    let mut to_string = MethodDescriptor::new("ToString", string(), vec![]);
    to_string.is_override = true;
    ty.methods.push(to_string);

    let mut negation = MethodDescriptor::new(
        "op_LogicalNot",
        named(&["TestClass"]),
        vec![ParamDescriptor::new("t", named(&["TestClass"]))],
    );
    negation.is_static = true;
    negation.special_name = true;
    ty.methods.push(negation);

    ty.properties
        .push(PropertyDescriptor::read_write("ReadWriteProperty", int()));
    ty.properties.push(PropertyDescriptor {
        name: "ReadOnlyProperty".to_string(),
        ty: int(),
        getter: Some(AccessorDescriptor::public()),
        setter: None,
        index_params: vec![],
    });
    ty.properties.push(PropertyDescriptor {
        name: "SemiReadOnlyProperty".to_string(),
        ty: int(),
        getter: Some(AccessorDescriptor::public()),
        setter: Some(AccessorDescriptor::private()),
        index_params: vec![],
    });
    ty.properties.push(PropertyDescriptor {
        name: "WriteOnlyProperty".to_string(),
        ty: int(),
        getter: None,
        setter: Some(AccessorDescriptor::public()),
        index_params: vec![],
    });
    ty.properties.push(PropertyDescriptor {
        name: "SemiWriteOnlyProperty".to_string(),
        ty: int(),
        getter: Some(AccessorDescriptor::private()),
        setter: Some(AccessorDescriptor::public()),
        index_params: vec![],
    });
    let static_accessor = AccessorDescriptor {
        is_static: true,
        ..AccessorDescriptor::public()
    };
    ty.properties.push(PropertyDescriptor {
        name: "StaticProperty".to_string(),
        ty: int(),
        getter: Some(static_accessor),
        setter: Some(static_accessor),
        index_params: vec![],
    });
    ty.properties.push(PropertyDescriptor {
        name: "InternalProperty".to_string(),
        ty: int(),
        getter: Some(AccessorDescriptor {
            visibility: Visibility::Assembly,
            ..AccessorDescriptor::public()
        }),
        setter: Some(AccessorDescriptor::private()),
        index_params: vec![],
    });
    ty.properties.push(PropertyDescriptor {
        name: "Item".to_string(),
        ty: string(),
        getter: Some(AccessorDescriptor::public()),
        setter: Some(AccessorDescriptor::public()),
        index_params: vec![ParamDescriptor::new("index", int())],
    });

    ty.fields.push(FieldDescriptor::new("x", int()));
    let mut y = FieldDescriptor::new("y", boolean());
    y.is_const = true;
    y.is_static = true;
    y.constant = Some(0);
    ty.fields.push(y);

    let mut an_event = EventDescriptor::new("AnEvent", event_handler());
    an_event.is_static = true;
    ty.events.push(an_event);

    ty
}

pub fn nested_class() -> TypeDescriptor {
    let mut ty = TypeDescriptor::new(path(&["TestClass", "NestedClass"]), TypeKind::Class);
    ty.base = Some(object());
    ty.methods.push(MethodDescriptor::new("Foo", void(), vec![]));
    ty
}

pub fn nested_frotz_delegate() -> TypeDescriptor {
    delegate_type(
        vec![
            PathSegment::plain("TestClass"),
            PathSegment::plain("Frotz"),
        ],
        MethodDescriptor::new("Invoke", int(), vec![ParamDescriptor::new("x", int())]),
    )
}

pub fn public_test_class() -> TypeDescriptor {
    let mut ty = TypeDescriptor::new(path(&["PublicTestClass"]), TypeKind::Class);
    ty.base = Some(object());
    ty
}

pub fn specialized_test_class() -> TypeDescriptor {
    let mut ty = TypeDescriptor::new(path(&["SpecializedTestClass"]), TypeKind::Class);
    ty.base = Some(named(&["PublicTestClass"]));
    ty
}

pub fn internal_test_class() -> TypeDescriptor {
    let mut ty = TypeDescriptor::new(path(&["InternalTestClass"]), TypeKind::Class);
    ty.visibility = Visibility::Assembly;
    ty.base = Some(object());
    ty
}

pub fn sealed_test_class() -> TypeDescriptor {
    let mut ty = TypeDescriptor::new(path(&["SealedTestClass"]), TypeKind::Class);
    ty.visibility = Visibility::Assembly;
    ty.is_sealed = true;
    ty.base = Some(object());
    ty
}

pub fn abstract_test_class() -> TypeDescriptor {
    let mut ty = TypeDescriptor::new(path(&["AbstractTestClass"]), TypeKind::Class);
    ty.visibility = Visibility::Assembly;
    ty.is_abstract = true;
    ty.base = Some(object());
    ty
}

pub fn static_test_class() -> TypeDescriptor {
    let mut ty = TypeDescriptor::new(path(&["StaticTestClass"]), TypeKind::Class);
    ty.visibility = Visibility::Assembly;
    ty.is_abstract = true;
    ty.is_sealed = true;
    ty.base = Some(object());
    ty.constructors.push(MethodDescriptor::static_constructor());

    let mut extension = MethodDescriptor::new(
        "ExtensionMethod",
        void(),
        vec![ParamDescriptor::new(
            "subject",
            named(&["InternalTestClass"]),
        )],
    );
    extension.is_static = true;
    extension.is_extension = true;
    ty.methods.push(extension);

    ty
}

pub fn member_signature_test_class() -> TypeDescriptor {
    let mut ty = TypeDescriptor::new(path(&["MemberSignatureTestClass"]), TypeKind::Class);
    ty.is_abstract = true;
    ty.base = Some(named(&["MemberSignatureTestClassBase"]));
    let this = named(&["MemberSignatureTestClass"]);

    ty.constructors.push(MethodDescriptor::constructor(vec![]));
    ty.constructors.push(MethodDescriptor::constructor(vec![
        ParamDescriptor::new("other", this.clone()),
    ]));

    ty.methods.push(MethodDescriptor::finalizer());
    ty.methods
        .push(MethodDescriptor::new("PublicMethod", void(), vec![]));
    let mut protected = MethodDescriptor::new("ProtectedMethod", void(), vec![]);
    protected.visibility = Visibility::Family;
    ty.methods.push(protected);
    let mut internal = MethodDescriptor::new("InternalMethod", void(), vec![]);
    internal.visibility = Visibility::Assembly;
    ty.methods.push(internal);
    let mut private = MethodDescriptor::new("PrivateMethod", void(), vec![]);
    private.visibility = Visibility::Private;
    ty.methods.push(private);
    let mut stat = MethodDescriptor::new("StaticMethod", void(), vec![]);
    stat.is_static = true;
    ty.methods.push(stat);
    ty.methods
        .push(MethodDescriptor::new("VirtualMethod", void(), vec![]));
    let mut sealed = MethodDescriptor::new("SealedMethod", void(), vec![]);
    sealed.is_override = true;
    ty.methods.push(sealed);
    let mut abstr = MethodDescriptor::new("AbstractMethod", void(), vec![]);
    abstr.is_abstract = true;
    ty.methods.push(abstr);
    ty.methods.push(MethodDescriptor::new(
        "MethodWithNullableParameter",
        void(),
        vec![ParamDescriptor::new(
            "s",
            TypeRef::nullable(named(&["TestStruct"])),
        )],
    ));
    ty.methods.push(MethodDescriptor::new(
        "MethodWithNullableReturnValue",
        TypeRef::nullable(boolean()),
        vec![],
    ));

    let mut negation = MethodDescriptor::new(
        "op_LogicalNot",
        this.clone(),
        vec![ParamDescriptor::new("t", this.clone())],
    );
    negation.is_static = true;
    negation.special_name = true;
    ty.methods.push(negation);

    let mut addition = MethodDescriptor::new(
        "op_Addition",
        this.clone(),
        vec![
            ParamDescriptor::new("t", this.clone()),
            ParamDescriptor::new("q", int()),
        ],
    );
    addition.is_static = true;
    addition.special_name = true;
    ty.methods.push(addition);

    let mut explicit = MethodDescriptor::new(
        "op_Explicit",
        int(),
        vec![ParamDescriptor::new("t", this.clone())],
    );
    explicit.is_static = true;
    explicit.special_name = true;
    ty.methods.push(explicit);

    let mut implicit = MethodDescriptor::new(
        "op_Implicit",
        boolean(),
        vec![ParamDescriptor::new("t", this)],
    );
    implicit.is_static = true;
    implicit.special_name = true;
    ty.methods.push(implicit);

    ty.fields.push(FieldDescriptor::new("publicField", int()));
    let mut protected_field = FieldDescriptor::new("protectedField", int());
    protected_field.visibility = Visibility::Family;
    ty.fields.push(protected_field);
    let mut static_field = FieldDescriptor::new("staticField", int());
    static_field.is_static = true;
    ty.fields.push(static_field);
    let mut readonly_field = FieldDescriptor::new("readonlyField", int());
    readonly_field.is_readonly = true;
    ty.fields.push(readonly_field);
    let mut static_readonly = FieldDescriptor::new("staticReadonlyField", int());
    static_readonly.is_static = true;
    static_readonly.is_readonly = true;
    ty.fields.push(static_readonly);
    let mut const_field = FieldDescriptor::new("constField", int());
    const_field.is_const = true;
    const_field.is_static = true;
    const_field.constant = Some(17);
    ty.fields.push(const_field);
    let mut internal_const = FieldDescriptor::new("internalConstField", int());
    internal_const.visibility = Visibility::Assembly;
    internal_const.is_const = true;
    internal_const.is_static = true;
    internal_const.constant = Some(18);
    ty.fields.push(internal_const);

    ty.events
        .push(EventDescriptor::new("PublicEvent", event_handler()));
    let mut private_event = EventDescriptor::new("PrivateEvent", event_handler());
    private_event.visibility = Visibility::Private;
    ty.events.push(private_event);
    let mut static_event = EventDescriptor::new("StaticEvent", event_handler());
    static_event.is_static = true;
    ty.events.push(static_event);
    ty.events
        .push(EventDescriptor::new("SealedEvent", event_handler()));
    let mut abstract_event = EventDescriptor::new("AbstractEvent", event_handler());
    abstract_event.is_abstract = true;
    ty.events.push(abstract_event);

    ty
}

pub fn delegate1() -> TypeDescriptor {
    delegate_type(
        vec![PathSegment::plain("Delegate1")],
        MethodDescriptor::new("Invoke", int(), vec![ParamDescriptor::new("x", int())]),
    )
}

pub fn generic_delegate() -> TypeDescriptor {
    let mut ty = TypeDescriptor::new(
        TypePath::new(NS, vec![PathSegment::open("GenericDelegate", &["T", "Y"])]),
        TypeKind::Class,
    );
    ty.is_sealed = true;
    ty.base = multicast_delegate_base();
    ty.methods.push(MethodDescriptor::new(
        "Invoke",
        TypeRef::type_param("Y", 1),
        vec![ParamDescriptor::new("x", TypeRef::type_param("T", 0))],
    ));
    ty
}

pub fn itest_interface() -> TypeDescriptor {
    let mut ty = TypeDescriptor::new(path(&["ITest"]), TypeKind::Interface);
    ty.is_abstract = true;

    let mut foo = MethodDescriptor::new("Foo", void(), vec![ParamDescriptor::new("count", int())]);
    foo.is_abstract = true;
    ty.methods.push(foo);

    ty.properties.push(PropertyDescriptor {
        name: "Whatever".to_string(),
        ty: int(),
        getter: Some(AccessorDescriptor {
            is_abstract: true,
            ..AccessorDescriptor::public()
        }),
        setter: None,
        index_params: vec![],
    });

    let mut bang = EventDescriptor::new("Bang", event_handler());
    bang.is_abstract = true;
    ty.events.push(bang);

    ty
}

pub fn itest2_interface() -> TypeDescriptor {
    let mut ty = TypeDescriptor::new(path(&["ITest2"]), TypeKind::Interface);
    ty.is_abstract = true;
    ty.interfaces.push(system("IDisposable"));
    let mut foo = MethodDescriptor::new("Foo", void(), vec![ParamDescriptor::new("count", int())]);
    foo.is_abstract = true;
    ty.methods.push(foo);
    ty
}

pub fn igeneric_interface() -> TypeDescriptor {
    let mut ty = TypeDescriptor::new(
        TypePath::new(NS, vec![PathSegment::open("IGeneric", &["T"])]),
        TypeKind::Interface,
    );
    ty.is_abstract = true;
    ty
}

pub fn test_struct() -> TypeDescriptor {
    let mut ty = TypeDescriptor::new(path(&["TestStruct"]), TypeKind::Struct);
    ty.is_sealed = true;
    ty.base = Some(TypeRef::named(TypePath::system("ValueType")));
    ty.interfaces.push(system("IFormattable"));
    ty.events
        .push(EventDescriptor::new("PublicEvent", event_handler()));
    ty.methods.push(MethodDescriptor::new(
        "ToString",
        string(),
        vec![
            ParamDescriptor::new("format", string()),
            ParamDescriptor::new("formatProvider", system("IFormatProvider")),
        ],
    ));
    ty
}

pub fn test_struct_generic() -> TypeDescriptor {
    let mut ty = TypeDescriptor::new(
        TypePath::new(NS, vec![PathSegment::open("TestStructGeneric", &["T"])]),
        TypeKind::Struct,
    );
    ty.is_sealed = true;
    ty.base = Some(TypeRef::named(TypePath::system("ValueType")));
    ty
}

pub fn test_enum() -> TypeDescriptor {
    let mut ty = TypeDescriptor::new(path(&["TestEnum"]), TypeKind::Enum);
    ty.is_sealed = true;
    ty.base = Some(TypeRef::named(TypePath::system("Enum")));
    for (name, value) in [("One", 1), ("Two", 2), ("Three", 3)] {
        let mut member = FieldDescriptor::new(name, named(&["TestEnum"]));
        member.is_const = true;
        member.is_static = true;
        member.constant = Some(value);
        ty.fields.push(member);
    }
    ty
}

pub fn test_generic() -> TypeDescriptor {
    let mut ty = TypeDescriptor::new(test_generic_path(), TypeKind::Class);
    ty.base = Some(object());

    ty.constructors.push(MethodDescriptor::constructor(vec![
        ParamDescriptor::new("t", TypeRef::type_param("T", 0)),
        ParamDescriptor::new("g", TypeRef::type_param("G", 1)),
    ]));

    ty.methods.push(MethodDescriptor::finalizer());
    ty.methods.push(MethodDescriptor::new(
        "Foo",
        TypeRef::type_param("G", 1),
        vec![ParamDescriptor::new("t", TypeRef::type_param("T", 0))],
    ));
    ty.methods.push(MethodDescriptor::new(
        "HalfOpenReturn",
        half_open_test_generic(),
        vec![],
    ));
    ty.methods.push(MethodDescriptor::new(
        "HalfOpenParameter",
        void(),
        vec![ParamDescriptor::new("parameter", half_open_test_generic())],
    ));
    ty.methods.push(MethodDescriptor::new(
        "TryGetValue",
        boolean(),
        vec![
            ParamDescriptor::new("t", TypeRef::type_param("T", 0)),
            ParamDescriptor::by_ref("g", TypeRef::type_param("G", 1)),
        ],
    ));
    ty.methods.push(MethodDescriptor::new(
        "OutParameter",
        void(),
        vec![ParamDescriptor::out("g", TypeRef::type_param("G", 1))],
    ));

    ty
}

pub fn test_class_with_generic_method() -> TypeDescriptor {
    let mut ty = TypeDescriptor::new(path(&["TestClassWithGenericMethod"]), TypeKind::Class);
    ty.base = Some(object());
    let mut bar = MethodDescriptor::new(
        "Bar",
        void(),
        vec![ParamDescriptor::new("q", TypeRef::method_param("Q", 0))],
    );
    bar.generic_params.push("Q".to_string());
    ty.methods.push(bar);
    ty
}

pub fn birds_nest() -> Vec<TypeDescriptor> {
    let mut nest = TypeDescriptor::new(path(&["BirdsNest"]), TypeKind::Class);
    nest.base = Some(object());

    let mut first = TypeDescriptor::new(path(&["BirdsNest", "First"]), TypeKind::Class);
    first.base = Some(object());

    let mut inner = TypeDescriptor::new(path(&["BirdsNest", "First", "Inner"]), TypeKind::Class);
    inner.base = Some(object());

    let mut second = TypeDescriptor::new(path(&["BirdsNest", "Second"]), TypeKind::Class);
    second.visibility = Visibility::Family;
    second.base = Some(object());

    let mut third = TypeDescriptor::new(path(&["BirdsNest", "Third"]), TypeKind::Struct);
    third.visibility = Visibility::Assembly;
    third.is_sealed = true;
    third.base = Some(TypeRef::named(TypePath::system("ValueType")));

    let nested_delegate = delegate_type(
        vec![
            PathSegment::plain("BirdsNest"),
            PathSegment::plain("NestedDelegate"),
        ],
        MethodDescriptor::new("Invoke", int(), vec![ParamDescriptor::new("x", int())]),
    );

    vec![nest, first, inner, second, third, nested_delegate]
}

/// An internal outer type with a public nested type; the nested type must
/// not be part of the public surface.
pub fn hidden_outer_types() -> Vec<TypeDescriptor> {
    let mut outer = TypeDescriptor::new(path(&["HiddenOuter"]), TypeKind::Class);
    outer.visibility = Visibility::Assembly;
    outer.base = Some(object());

    let mut inner = TypeDescriptor::new(path(&["HiddenOuter", "Inner"]), TypeKind::Class);
    inner.base = Some(object());

    vec![outer, inner]
}

/// The whole menagerie as one assembly.
pub fn sample_assembly() -> AssemblyMetadata {
    let mut types = vec![
        test_class(),
        nested_class(),
        nested_frotz_delegate(),
        public_test_class(),
        specialized_test_class(),
        internal_test_class(),
        sealed_test_class(),
        abstract_test_class(),
        static_test_class(),
        member_signature_test_class(),
        delegate1(),
        generic_delegate(),
        itest_interface(),
        itest2_interface(),
        igeneric_interface(),
        test_struct(),
        test_struct_generic(),
        test_enum(),
        test_generic(),
        test_class_with_generic_method(),
    ];
    types.extend(birds_nest());
    types.extend(hidden_outer_types());
    AssemblyMetadata::new("TestData", types)
}
