//! Endpoint descriptor construction from caller-supplied configuration.

use crate::document::{EndpointDescriptor, RequestDescriptor, ResponseDescriptor};
use crate::error::DocError;
use crate::extract::extract;
use crate::method::HttpMethod;
use crate::shape::{Shape, TypeShape};

/// One declared (status code, response shape) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseSpec {
    pub status_code: u16,
    pub shape: TypeShape,
}

impl ResponseSpec {
    pub fn of<T: Shape>(status_code: u16) -> Self {
        Self {
            status_code,
            shape: T::shape(),
        }
    }
}

/// Configuration for one documented endpoint: everything the builder needs
/// to produce an [`EndpointDescriptor`].
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointConfig {
    pub path: String,
    pub methods: Vec<HttpMethod>,
    pub request: TypeShape,
    pub responses: Vec<ResponseSpec>,
}

impl EndpointConfig {
    /// Start a config for `path` with the request shape taken from `R`.
    pub fn new<R: Shape>(path: impl Into<String>, methods: impl Into<Vec<HttpMethod>>) -> Self {
        Self {
            path: path.into(),
            methods: methods.into(),
            request: R::shape(),
            responses: Vec::new(),
        }
    }

    /// Declare a response shape for `status_code`. Responses are documented
    /// in declaration order; duplicate status codes are kept as given.
    #[must_use]
    pub fn response<T: Shape>(mut self, status_code: u16) -> Self {
        self.responses.push(ResponseSpec::of::<T>(status_code));
        self
    }

    /// Build the endpoint descriptor.
    ///
    /// Validation and extraction are atomic per endpoint: any failure yields
    /// no descriptor at all. Extraction errors from the request or any
    /// response shape propagate unchanged.
    pub fn build(&self) -> Result<EndpointDescriptor, DocError> {
        if self.path.is_empty() {
            return Err(DocError::InvalidPath);
        }
        if self.methods.is_empty() {
            return Err(DocError::EmptyMethods {
                path: self.path.clone(),
            });
        }

        let request = RequestDescriptor {
            raw_type_label: self.request.label(),
            properties: extract(&self.request)?,
        };

        let mut responses = Vec::with_capacity(self.responses.len());
        for spec in &self.responses {
            responses.push(ResponseDescriptor {
                status_code: spec.status_code,
                raw_type_label: spec.shape.label(),
                properties: extract(&spec.shape)?,
            });
        }

        Ok(EndpointDescriptor {
            id: None,
            path: self.path.clone(),
            methods: self.methods.clone(),
            request,
            responses,
        })
    }
}
