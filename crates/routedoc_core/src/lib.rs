//! Routedoc Core - endpoint documentation model and extraction engine
//!
//! Provides the runtime type-shape model, the property extractor that
//! flattens a declared struct into an ordered property list, and the
//! append-only [`Document`] the rendered output is generated from.

pub mod builder;
pub mod document;
pub mod error;
pub mod extract;
pub mod method;
pub mod shape;

pub use builder::*;
pub use document::*;
pub use error::*;
pub use extract::*;
pub use method::*;
pub use shape::*;
