//! Procedural macros for routedoc - shape derivation for documented types.
//!
//! Provides `#[derive(Shape)]`, which implements `routedoc::shape::Shape`
//! for a struct with named fields so its declared fields can be flattened
//! into documented properties.

use proc_macro::TokenStream;

mod error;
mod shape_impl;

/// Derive `Shape` for a struct with named fields.
///
/// Fields are reported in declaration order. Field attributes:
///
/// - `#[shape(required)]` - document the field as required (the default is
///   always `false`)
/// - `#[shape(rename = "other")]` - document the field under a different name
///
/// Enums, tuple structs, and unit structs are rejected at compile time.
#[proc_macro_derive(Shape, attributes(shape))]
pub fn derive_shape(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);
    shape_impl::process_derive_shape(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
