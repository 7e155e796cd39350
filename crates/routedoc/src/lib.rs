//! Routedoc - typed HTTP API documentation, rendered as servable HTML
//!
//! Declare your request and response models with `#[derive(Shape)]`, describe
//! each endpoint with an [`EndpointConfig`], accumulate them into an
//! [`ApiDoc`], and mount the resulting handler into an axum `Router`:
//!
//! ```ignore
//! #[derive(Shape)]
//! struct CreateUser {
//!     name: String,
//!     age: u32,
//! }
//!
//! let mut doc = ApiDoc::new();
//! doc.accumulate([
//!     EndpointConfig::new::<CreateUser>("/users", vec![HttpMethod::Post])
//!         .response::<CreateUser>(201),
//! ])?;
//! let app = Router::new().route("/docs", doc.handler()?);
//! ```
//!
//! The handler captures a snapshot rendered at construction time; endpoints
//! accumulated afterwards are not reflected in the served output.

pub mod render;
pub mod serve;

pub use routedoc_core::{builder, document, error, method, shape};

pub use routedoc_core::builder::{EndpointConfig, ResponseSpec};
pub use routedoc_core::document::{
    Document, EndpointDescriptor, Property, RequestDescriptor, ResponseDescriptor, SCHEMA_VERSION,
};
pub use routedoc_core::error::DocError;
pub use routedoc_core::extract::extract;
pub use routedoc_core::method::HttpMethod;
pub use routedoc_core::shape::{Field, Shape, TypeShape};
pub use routedoc_macro::Shape;
pub use serve::{ApiDoc, ServeError};
