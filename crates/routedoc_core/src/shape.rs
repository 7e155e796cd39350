//! Runtime description of declared Rust types.
//!
//! Rust has no runtime reflection, so documentable types describe themselves
//! through the [`Shape`] trait: a type reports a [`TypeShape`] value that the
//! extractor can walk without knowing the type at compile time. Struct impls
//! are normally generated by `#[derive(Shape)]`; scalar and container impls
//! live here.

/// One declared field of a struct shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Field name as declared (or as renamed by a `#[shape(rename)]` attribute)
    pub name: &'static str,
    /// Shape of the field's declared type
    pub shape: TypeShape,
    /// Explicit requiredness override; defaults to `false`
    pub required: bool,
}

impl Field {
    pub fn new(name: &'static str, shape: TypeShape) -> Self {
        Self {
            name,
            shape,
            required: false,
        }
    }

    /// Mark the field as required in the documented output.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Runtime shape of a declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeShape {
    /// A struct with named fields, in declaration order
    Struct {
        name: &'static str,
        fields: Vec<Field>,
    },
    /// A primitive, labeled with its documented type tag
    Scalar(&'static str),
    /// A homogeneous sequence
    List(Box<TypeShape>),
    /// An optional value
    Optional(Box<TypeShape>),
    /// A string-keyed map
    Map(Box<TypeShape>),
}

impl TypeShape {
    /// Human-readable type tag for the documented output.
    ///
    /// A struct is labeled with its own name; field extraction never expands
    /// it into nested properties.
    pub fn label(&self) -> String {
        match self {
            Self::Struct { name, .. } => (*name).to_string(),
            Self::Scalar(tag) => (*tag).to_string(),
            Self::List(inner) => format!("array<{}>", inner.label()),
            Self::Optional(inner) => format!("optional<{}>", inner.label()),
            Self::Map(inner) => format!("map<{}>", inner.label()),
        }
    }
}

/// A type that can describe its own declared shape.
pub trait Shape {
    fn shape() -> TypeShape;
}

macro_rules! impl_scalar_shape {
    ($tag:literal => $($ty:ty),+ $(,)?) => {
        $(
            impl Shape for $ty {
                fn shape() -> TypeShape {
                    TypeShape::Scalar($tag)
                }
            }
        )+
    };
}

impl_scalar_shape!("int" => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_scalar_shape!("float" => f32, f64);
impl_scalar_shape!("bool" => bool);
impl_scalar_shape!("string" => String, &str, char);

impl<T: Shape> Shape for Vec<T> {
    fn shape() -> TypeShape {
        TypeShape::List(Box::new(T::shape()))
    }
}

impl<T: Shape> Shape for Option<T> {
    fn shape() -> TypeShape {
        TypeShape::Optional(Box::new(T::shape()))
    }
}

impl<T: Shape> Shape for Box<T> {
    fn shape() -> TypeShape {
        T::shape()
    }
}

impl<T: Shape, S> Shape for std::collections::HashMap<String, T, S> {
    fn shape() -> TypeShape {
        TypeShape::Map(Box::new(T::shape()))
    }
}
