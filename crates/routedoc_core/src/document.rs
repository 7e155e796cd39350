//! Documentation model: flattened properties, endpoint descriptors, and the
//! append-only [`Document`] aggregate.

use serde::{Deserialize, Serialize};

use crate::builder::EndpointConfig;
use crate::error::DocError;
use crate::method::HttpMethod;

/// Schema version stamped on every document. Reserved for future evolution.
pub const SCHEMA_VERSION: u32 = 0;

/// One flattened field of a request or response shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Field name as declared
    pub name: String,
    /// Human-readable type tag, e.g. "int", "string", "array<string>"
    #[serde(rename = "type")]
    pub type_label: String,
    /// Whether the field is documented as required
    pub required: bool,
    /// Opaque reference payload, unused by the default template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<serde_json::Value>,
}

impl Property {
    pub fn new(name: impl Into<String>, type_label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_label: type_label.into(),
            required: false,
            reference: None,
        }
    }
}

/// Documented shape of an endpoint's request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestDescriptor {
    /// Label of the declared request type
    pub raw_type_label: String,
    /// Flattened fields, in declaration order
    pub properties: Vec<Property>,
}

/// One declared (status code, shape) pair for an endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseDescriptor {
    /// HTTP status code
    pub status_code: u16,
    /// Label of the declared response type
    pub raw_type_label: String,
    /// Flattened fields, in declaration order
    pub properties: Vec<Property>,
}

/// One documented route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    /// Numeric identifier, unset in the current scope
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Route path
    pub path: String,
    /// HTTP verbs the route answers to, in declared order
    pub methods: Vec<HttpMethod>,
    /// Documented request shape
    pub request: RequestDescriptor,
    /// Documented responses, in declared order (duplicate status codes are
    /// preserved, not deduplicated)
    pub responses: Vec<ResponseDescriptor>,
}

/// The aggregate root: every documented endpoint plus the schema version.
///
/// A document starts empty and only grows; there is no update or delete on
/// existing endpoints. `accumulate` takes `&mut self`, so the borrow checker
/// rules out concurrent mutation — build the document first, then hand it to
/// the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub schema_version: u32,
    pub endpoints: Vec<EndpointDescriptor>,
}

impl Document {
    /// Create an empty document at the current schema version.
    pub fn new() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            endpoints: Vec::new(),
        }
    }

    /// Build each config in order and append the resulting descriptors.
    ///
    /// Stops at the first config that fails to build and returns its error.
    /// Descriptors built before the failure stay appended, so a failed batch
    /// can leave the document partially extended.
    pub fn accumulate<I>(&mut self, configs: I) -> Result<(), DocError>
    where
        I: IntoIterator<Item = EndpointConfig>,
    {
        for config in configs {
            let endpoint = config.build()?;
            self.endpoints.push(endpoint);
        }
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
