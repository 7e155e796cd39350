//! Shape derive macro implementation.
//!
//! Expands `#[derive(Shape)]` on a named-field struct into an impl of
//! `routedoc::shape::Shape` that reports the struct's name and its fields in
//! declaration order.
//!
//! # Field Attributes
//!
//! - `#[shape(required)]` - mark the field required in the documented output
//! - `#[shape(rename = "...")]` - document the field under a different name
//!
//! # Key Functions
//!
//! - [`extract_field_attrs`] - Parse `#[shape]` attributes on a field
//! - [`process_derive_shape`] - Process the derive input and expand the impl

use proc_macro2::TokenStream;
use quote::quote;

use crate::error::{MacroResult, err_spanned};

/// Parsed `#[shape]` attributes for one field.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct FieldAttrs {
    pub required: bool,
    pub rename: Option<String>,
}

/// Extract `#[shape(...)]` attributes from a field.
pub(crate) fn extract_field_attrs(attrs: &[syn::Attribute]) -> MacroResult<FieldAttrs> {
    let mut parsed = FieldAttrs::default();
    for attr in attrs {
        if !attr.path().is_ident("shape") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("required") {
                parsed.required = true;
                Ok(())
            } else if meta.path.is_ident("rename") {
                let value = meta.value()?;
                let lit: syn::LitStr = value.parse()?;
                parsed.rename = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("unknown shape attribute, expected `required` or `rename`"))
            }
        })?;
    }
    Ok(parsed)
}

/// Process derive input and expand the `Shape` impl.
pub(crate) fn process_derive_shape(input: &syn::DeriveInput) -> MacroResult<TokenStream> {
    let name = &input.ident;

    let syn::Data::Struct(data) = &input.data else {
        return Err(err_spanned(
            input,
            "Shape can only be derived for structs with named fields",
        ));
    };
    let syn::Fields::Named(fields) = &data.fields else {
        return Err(err_spanned(
            &data.fields,
            "Shape requires named fields; tuple and unit structs are not documentable",
        ));
    };

    let field_tokens = fields
        .named
        .iter()
        .map(|field| {
            let attrs = extract_field_attrs(&field.attrs)?;
            // named fields always carry an ident
            let ident = field.ident.as_ref().expect("named field");
            let field_name = attrs.rename.unwrap_or_else(|| ident.to_string());
            let ty = &field.ty;

            let base = quote! {
                routedoc::shape::Field::new(#field_name, <#ty as routedoc::shape::Shape>::shape())
            };
            Ok(if attrs.required {
                quote! { #base.required() }
            } else {
                base
            })
        })
        .collect::<MacroResult<Vec<_>>>()?;

    let name_str = name.to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics routedoc::shape::Shape for #name #ty_generics #where_clause {
            fn shape() -> routedoc::shape::TypeShape {
                routedoc::shape::TypeShape::Struct {
                    name: #name_str,
                    fields: vec![#(#field_tokens),*],
                }
            }
        }
    })
}
