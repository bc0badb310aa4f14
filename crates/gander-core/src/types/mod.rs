//! Resolved type descriptors and the predicates the checker runs on them.
//!
//! A [`Type`] describes a source-language type: its category (basic kind,
//! array, map, channel, function, pointer, interface, struct, or the nil
//! type), whether it is still the provisional "untyped" type of a literal,
//! an optional declared name, and the method set used for interface
//! assignability. Exactly one category applies to a type at a time.

mod kind;

pub use kind::{BasicKind, KindInfo};

use std::fmt;

use rustc_hash::FxHashMap;

/// Method set: method name mapped to its canonical signature.
///
/// Untyped literals always carry an empty set.
pub type MethodSet = FxHashMap<String, String>;

/// Channel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    /// Bidirectional channel (`chan T`).
    Both,
    /// Receive-only channel (`<-chan T`).
    Recv,
    /// Send-only channel (`chan<- T`).
    Send,
}

/// The category of a resolved type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    /// A scalar type backed by a [`BasicKind`].
    Basic(BasicKind),
    /// An array reference (nil-able, like a slice).
    Array(Box<Type>),
    /// A map from key type to value type.
    Map(Box<Type>, Box<Type>),
    /// A channel with a direction.
    Chan(ChanDir, Box<Type>),
    /// A function with parameter and result types.
    Func(Vec<Type>, Vec<Type>),
    /// A pointer to an element type.
    Ptr(Box<Type>),
    /// An interface with its required method set.
    Interface(MethodSet),
    /// A struct with ordered, named fields.
    Struct(Vec<(String, Type)>),
    /// The type of the nil value.
    Nil,
}

/// A resolved type descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct Type {
    /// The category of this type.
    pub kind: TypeKind,
    /// True only for the provisional type of a literal not yet bound to a
    /// concrete declared type.
    pub untyped: bool,
    /// Declared name, if any; used for display and identity.
    pub name: Option<String>,
    /// Methods declared on this type (empty for literals).
    pub methods: MethodSet,
}

impl Type {
    /// Create a concrete basic type.
    pub fn basic(kind: BasicKind) -> Self {
        Self {
            kind: TypeKind::Basic(kind),
            untyped: false,
            name: None,
            methods: MethodSet::default(),
        }
    }

    /// Create the provisional (untyped) type of a literal.
    pub fn untyped(kind: BasicKind) -> Self {
        Self {
            untyped: true,
            ..Self::basic(kind)
        }
    }

    /// Create the type of the nil value.
    pub fn nil() -> Self {
        Self {
            kind: TypeKind::Nil,
            untyped: true,
            name: None,
            methods: MethodSet::default(),
        }
    }

    /// Create a pointer type.
    pub fn ptr(elem: Type) -> Self {
        Self::of(TypeKind::Ptr(Box::new(elem)))
    }

    /// Create an array-reference type.
    pub fn array(elem: Type) -> Self {
        Self::of(TypeKind::Array(Box::new(elem)))
    }

    /// Create a map type.
    pub fn map(key: Type, value: Type) -> Self {
        Self::of(TypeKind::Map(Box::new(key), Box::new(value)))
    }

    /// Create a channel type.
    pub fn chan(dir: ChanDir, elem: Type) -> Self {
        Self::of(TypeKind::Chan(dir, Box::new(elem)))
    }

    /// Create a function type.
    pub fn func(params: Vec<Type>, results: Vec<Type>) -> Self {
        Self::of(TypeKind::Func(params, results))
    }

    /// Create an interface type from its required method set.
    pub fn interface(methods: MethodSet) -> Self {
        Self::of(TypeKind::Interface(methods))
    }

    /// Create a struct type from its fields.
    pub fn struct_of(fields: Vec<(String, Type)>) -> Self {
        Self::of(TypeKind::Struct(fields))
    }

    fn of(kind: TypeKind) -> Self {
        Self {
            kind,
            untyped: false,
            name: None,
            methods: MethodSet::default(),
        }
    }

    /// Attach a declared name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach a method set.
    pub fn with_methods(mut self, methods: MethodSet) -> Self {
        self.methods = methods;
        self
    }

    /// The backing basic kind, if this is a scalar type.
    pub fn basic_kind(&self) -> Option<BasicKind> {
        match self.kind {
            TypeKind::Basic(k) => Some(k),
            _ => None,
        }
    }

    /// Look up a method signature by name.
    pub fn method(&self, name: &str) -> Option<&str> {
        self.methods.get(name).map(String::as_str)
    }

    /// Whether this type is numeric (integer, float, or complex).
    pub fn is_numeric(&self) -> bool {
        self.basic_kind().is_some_and(BasicKind::is_numeric)
    }

    /// Whether this type is an integer type.
    pub fn is_integer(&self) -> bool {
        self.basic_kind().is_some_and(BasicKind::is_integer)
    }

    /// Whether this type is a floating-point type.
    pub fn is_float(&self) -> bool {
        self.basic_kind().is_some_and(BasicKind::is_float)
    }

    /// Whether this type is a complex type.
    pub fn is_complex(&self) -> bool {
        self.basic_kind().is_some_and(BasicKind::is_complex)
    }

    /// Whether this type is a string type.
    pub fn is_string(&self) -> bool {
        matches!(self.kind, TypeKind::Basic(BasicKind::String))
    }

    /// Whether this type is a boolean type.
    pub fn is_boolean(&self) -> bool {
        matches!(self.kind, TypeKind::Basic(BasicKind::Bool))
    }

    /// Whether this type is the nil type.
    pub fn is_nil(&self) -> bool {
        matches!(self.kind, TypeKind::Nil)
    }

    /// Whether this type is an interface.
    pub fn is_interface(&self) -> bool {
        matches!(self.kind, TypeKind::Interface(_))
    }

    /// Whether this type is an array reference.
    pub fn is_array(&self) -> bool {
        matches!(self.kind, TypeKind::Array(_))
    }

    /// Whether this type is a map.
    pub fn is_map(&self) -> bool {
        matches!(self.kind, TypeKind::Map(_, _))
    }

    /// Whether this type is a channel.
    pub fn is_chan(&self) -> bool {
        matches!(self.kind, TypeKind::Chan(_, _))
    }

    /// Whether this type is a send-only channel.
    pub fn is_send_chan(&self) -> bool {
        matches!(self.kind, TypeKind::Chan(ChanDir::Send, _))
    }

    /// Whether this type is a function.
    pub fn is_func(&self) -> bool {
        matches!(self.kind, TypeKind::Func(_, _))
    }

    /// Whether this type is a pointer.
    pub fn is_ptr(&self) -> bool {
        matches!(self.kind, TypeKind::Ptr(_))
    }

    /// Whether this type's category admits the nil value.
    pub fn has_nil(&self) -> bool {
        matches!(
            self.kind,
            TypeKind::Ptr(_)
                | TypeKind::Array(_)
                | TypeKind::Map(_, _)
                | TypeKind::Chan(_, _)
                | TypeKind::Func(_, _)
                | TypeKind::Interface(_)
                | TypeKind::Nil
        )
    }

    /// Whether values of this type support ordering operators.
    pub fn is_ordered(&self) -> bool {
        self.basic_kind().is_some_and(BasicKind::is_ordered)
    }

    /// Whether values of this type support equality operators. The nil
    /// type is not comparable by itself; nil comparisons are legal only
    /// against a nil-admitting operand.
    pub fn comparable(&self) -> bool {
        match &self.kind {
            TypeKind::Basic(_) | TypeKind::Ptr(_) | TypeKind::Chan(_, _)
            | TypeKind::Interface(_) => true,
            TypeKind::Struct(fields) => fields.iter().all(|(_, t)| t.comparable()),
            TypeKind::Array(_) | TypeKind::Map(_, _) | TypeKind::Func(_, _)
            | TypeKind::Nil => false,
        }
    }

    /// The concrete type an untyped constant assumes when no other typing
    /// context forces a different one: untyped bool becomes `bool`, the
    /// untyped integer kinds become `int`, untyped floats `float64`,
    /// untyped complex `complex128`, untyped strings `string`. Concrete
    /// types and the nil type are returned unchanged.
    pub fn default_type(&self) -> Type {
        if !self.untyped {
            return self.clone();
        }
        match self.kind {
            TypeKind::Basic(k) => {
                let default = match k {
                    BasicKind::Bool => BasicKind::Bool,
                    k if k.is_integer() => BasicKind::Int,
                    k if k.is_float() => BasicKind::Float64,
                    k if k.is_complex() => BasicKind::Complex128,
                    _ => BasicKind::String,
                };
                Type::basic(default)
            }
            _ => self.clone(),
        }
    }

    /// Whether a value of this type may be stored into a destination of
    /// type `dst` without an explicit conversion.
    pub fn assignable_to(&self, dst: &Type) -> bool {
        if self == dst {
            return true;
        }
        if self.is_nil() {
            return dst.has_nil();
        }
        if let TypeKind::Interface(required) = &dst.kind {
            return required
                .iter()
                .all(|(name, sig)| self.method(name) == Some(sig.as_str()));
        }
        // A named and an unnamed type with the same underlying shape are
        // mutually assignable.
        self.untyped == dst.untyped
            && self.kind == dst.kind
            && (self.name.is_none() || dst.name.is_none())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            return write!(f, "{name}");
        }
        match &self.kind {
            TypeKind::Basic(k) => {
                if self.untyped {
                    write!(f, "untyped {k}")
                } else {
                    write!(f, "{k}")
                }
            }
            TypeKind::Array(elem) => write!(f, "[]{elem}"),
            TypeKind::Map(key, value) => write!(f, "map[{key}]{value}"),
            TypeKind::Chan(ChanDir::Both, elem) => write!(f, "chan {elem}"),
            TypeKind::Chan(ChanDir::Recv, elem) => write!(f, "<-chan {elem}"),
            TypeKind::Chan(ChanDir::Send, elem) => write!(f, "chan<- {elem}"),
            TypeKind::Func(params, results) => {
                write!(f, "func(")?;
                for (i, p) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{p}")?;
                }
                write!(f, ")")?;
                match results.len() {
                    0 => Ok(()),
                    1 => write!(f, " {}", results[0]),
                    _ => {
                        write!(f, " (")?;
                        for (i, r) in results.iter().enumerate() {
                            if i > 0 {
                                write!(f, ", ")?;
                            }
                            write!(f, "{r}")?;
                        }
                        write!(f, ")")
                    }
                }
            }
            TypeKind::Ptr(elem) => write!(f, "*{elem}"),
            TypeKind::Interface(methods) => {
                if methods.is_empty() {
                    write!(f, "interface{{}}")
                } else {
                    let mut names: Vec<&str> =
                        methods.keys().map(String::as_str).collect();
                    names.sort_unstable();
                    write!(f, "interface{{ {} }}", names.join("; "))
                }
            }
            TypeKind::Struct(fields) => {
                write!(f, "struct{{")?;
                for (i, (name, ty)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ";")?;
                    }
                    write!(f, " {name} {ty}")?;
                }
                write!(f, " }}")
            }
            TypeKind::Nil => write!(f, "nil"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untyped_default_types() {
        assert_eq!(
            Type::untyped(BasicKind::Int).default_type(),
            Type::basic(BasicKind::Int)
        );
        assert_eq!(
            Type::untyped(BasicKind::Int32).default_type(),
            Type::basic(BasicKind::Int)
        );
        assert_eq!(
            Type::untyped(BasicKind::Float64).default_type(),
            Type::basic(BasicKind::Float64)
        );
        assert_eq!(
            Type::untyped(BasicKind::Complex128).default_type(),
            Type::basic(BasicKind::Complex128)
        );
        assert_eq!(
            Type::untyped(BasicKind::Bool).default_type(),
            Type::basic(BasicKind::Bool)
        );
        assert_eq!(
            Type::untyped(BasicKind::String).default_type(),
            Type::basic(BasicKind::String)
        );
    }

    #[test]
    fn default_type_is_identity_on_concrete() {
        let named = Type::basic(BasicKind::Int8).named("small");
        assert_eq!(named.default_type(), named);
    }

    #[test]
    fn nil_admits_nilable_categories() {
        let nil = Type::nil();
        assert!(nil.assignable_to(&Type::ptr(Type::basic(BasicKind::Int))));
        assert!(nil.assignable_to(&Type::map(
            Type::basic(BasicKind::String),
            Type::basic(BasicKind::Int),
        )));
        assert!(nil.assignable_to(&Type::interface(MethodSet::default())));
        assert!(!nil.assignable_to(&Type::basic(BasicKind::Int)));
    }

    #[test]
    fn interface_assignability_by_method_set() {
        let mut required = MethodSet::default();
        required.insert("read".to_string(), "func([]uint8) int".to_string());
        let iface = Type::interface(required.clone());

        let reader = Type::struct_of(vec![]).named("file").with_methods(required);
        assert!(reader.assignable_to(&iface));

        let not_reader = Type::struct_of(vec![]).named("empty");
        assert!(!not_reader.assignable_to(&iface));

        // Every type satisfies the empty interface.
        assert!(
            Type::basic(BasicKind::Int).assignable_to(&Type::interface(MethodSet::default()))
        );
    }

    #[test]
    fn named_and_unnamed_are_mutually_assignable() {
        let plain = Type::basic(BasicKind::Int);
        let named = Type::basic(BasicKind::Int).named("myint");
        assert!(plain.assignable_to(&named));
        assert!(named.assignable_to(&plain));

        let other = Type::basic(BasicKind::Int).named("yourint");
        assert!(!named.assignable_to(&other));
    }

    #[test]
    fn comparability() {
        assert!(Type::basic(BasicKind::Int).comparable());
        assert!(Type::ptr(Type::basic(BasicKind::Int)).comparable());
        assert!(!Type::array(Type::basic(BasicKind::Int)).comparable());
        assert!(!Type::map(Type::basic(BasicKind::String), Type::basic(BasicKind::Int)).comparable());
        assert!(!Type::func(vec![], vec![]).comparable());

        let cmp = Type::struct_of(vec![("a".to_string(), Type::basic(BasicKind::Int))]);
        assert!(cmp.comparable());
        let not_cmp = Type::struct_of(vec![(
            "xs".to_string(),
            Type::array(Type::basic(BasicKind::Int)),
        )]);
        assert!(!not_cmp.comparable());
    }

    #[test]
    fn display_renders_source_syntax() {
        assert_eq!(Type::untyped(BasicKind::Int).to_string(), "untyped int");
        assert_eq!(Type::ptr(Type::basic(BasicKind::Int)).to_string(), "*int");
        assert_eq!(
            Type::map(Type::basic(BasicKind::String), Type::basic(BasicKind::Int)).to_string(),
            "map[string]int"
        );
        assert_eq!(
            Type::chan(ChanDir::Send, Type::basic(BasicKind::Int)).to_string(),
            "chan<- int"
        );
        assert_eq!(Type::nil().to_string(), "nil");
        assert_eq!(
            Type::interface(MethodSet::default()).to_string(),
            "interface{}"
        );
        assert_eq!(
            Type::basic(BasicKind::Int8).named("small").to_string(),
            "small"
        );
    }

    #[test]
    fn send_only_channels() {
        assert!(Type::chan(ChanDir::Send, Type::basic(BasicKind::Int)).is_send_chan());
        assert!(!Type::chan(ChanDir::Both, Type::basic(BasicKind::Int)).is_send_chan());
        assert!(Type::chan(ChanDir::Recv, Type::basic(BasicKind::Int)).is_chan());
    }
}
