//! Unified error handling for routedoc_macro.
//!
//! All proc-macro operations return [`MacroResult<T>`] instead of panicking,
//! so the compiler can display errors with proper source locations.

use syn::Error;
use syn::spanned::Spanned;

/// Result type for all macro operations.
pub type MacroResult<T> = Result<T, Error>;

/// Create an error pointing at a specific AST node.
#[inline]
pub fn err_spanned<T: Spanned, M: std::fmt::Display>(node: &T, message: M) -> Error {
    Error::new(node.span(), message)
}
