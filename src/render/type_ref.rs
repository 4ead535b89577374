//! Renders type references as C# source text, relative to a lexical context.

use crate::core::types::{PathSegment, SegmentArgs, TypePath, TypeRef};

/// One element of a type's lexical sequence: namespace components first,
/// then each enclosing type down to the type itself.
#[derive(Debug, PartialEq)]
enum SeqItem<'a> {
    Namespace(&'a str),
    Type(&'a PathSegment),
}

/// Renders type references, eliding the parts shared with the context type.
///
/// With a context, types in the same or a parent namespace are referenced
/// without the shared leading components; without one, references are fully
/// qualified. The context never swallows a type completely: at least the
/// bare type name survives, even when the reference names the context type
/// itself.
pub struct TypeReferencer<'a> {
    context: Vec<SeqItem<'a>>,
}

impl<'a> TypeReferencer<'a> {
    /// A referencer without a context; references are fully qualified.
    pub fn global() -> Self {
        TypeReferencer {
            context: Vec::new(),
        }
    }

    /// A referencer rendering relative to the given type.
    pub fn new(context: Option<&'a TypePath>) -> Self {
        TypeReferencer {
            context: context.map(full_sequence).unwrap_or_default(),
        }
    }

    /// Reference to `type_ref`, relative to the context if there is one.
    pub fn reference(&self, type_ref: &TypeRef) -> String {
        self.render(type_ref, false)
    }

    /// Like [`reference`](Self::reference), additionally skipping namespace
    /// components that survive context elision.
    pub fn short_reference(&self, type_ref: &TypeRef) -> String {
        self.render(type_ref, true)
    }

    /// Reference to a named type given directly by path.
    pub fn reference_path(&self, path: &TypePath, skip_namespace: bool) -> String {
        let sequence = full_sequence(path);
        let mut skip = self.items_shared_with_context(&sequence);

        if skip_namespace {
            while skip < sequence.len() && matches!(sequence[skip], SeqItem::Namespace(_)) {
                skip += 1;
            }
        }

        let parts: Vec<String> = sequence[skip..]
            .iter()
            .map(|item| self.item_to_string(item))
            .collect();
        parts.join(".")
    }

    fn render(&self, type_ref: &TypeRef, skip_namespace: bool) -> String {
        match type_ref {
            TypeRef::Primitive(primitive) => primitive.display_token().to_string(),
            TypeRef::Array { element, rank } => {
                format!("{}[{}]", self.reference(element), array_commas(*rank))
            }
            TypeRef::Pointer(element) => format!("{}*", self.reference(element)),
            TypeRef::Nullable(underlying) => format!("{}?", self.reference(underlying)),
            TypeRef::GenericParam(param) => param.name.clone(),
            TypeRef::Named(path) => self.reference_path(path, skip_namespace),
        }
    }

    /// Length of the leading prefix shared with the context, never reaching
    /// the final element of the rendered sequence.
    fn items_shared_with_context(&self, sequence: &[SeqItem<'_>]) -> usize {
        let mut count = 0;
        while count < self.context.len()
            && count + 1 < sequence.len()
            && self.context[count] == sequence[count]
        {
            count += 1;
        }
        count
    }

    fn item_to_string(&self, item: &SeqItem<'_>) -> String {
        match item {
            SeqItem::Namespace(part) => (*part).to_string(),
            SeqItem::Type(segment) => match &segment.args {
                SegmentArgs::None => segment.name.clone(),
                SegmentArgs::Open(params) => {
                    format!("{}<{}>", segment.name, params.join(", "))
                }
                SegmentArgs::Closed(args) => {
                    let rendered: Vec<String> =
                        args.iter().map(|arg| self.reference(arg)).collect();
                    format!("{}<{}>", segment.name, rendered.join(", "))
                }
            },
        }
    }
}

fn full_sequence(path: &TypePath) -> Vec<SeqItem<'_>> {
    path.namespace_parts()
        .map(SeqItem::Namespace)
        .chain(path.segments.iter().map(SeqItem::Type))
        .collect()
}

/// Inner commas of an array suffix: rank 1 has none, rank N has N−1,
/// separated by single spaces (`[, ,]` for rank 3).
fn array_commas(rank: u32) -> String {
    if rank > 1 {
        vec![","; rank as usize - 1].join(" ")
    } else {
        String::new()
    }
}
