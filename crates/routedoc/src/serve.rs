//! The Document-bearing [`ApiDoc`] instance and its axum handler adapter.

use axum::http::header;
use axum::routing::{MethodRouter, any};
use handlebars::Handlebars;
use routedoc_core::builder::EndpointConfig;
use routedoc_core::document::Document;
use routedoc_core::error::DocError;
use thiserror::Error;
use tracing::{debug, warn};

use crate::render::{DEFAULT_TEMPLATE, render_document};

/// Errors raised while rendering or serving the documentation.
#[derive(Debug, Error)]
pub enum ServeError {
    /// An endpoint configuration failed to build
    #[error(transparent)]
    Doc(#[from] DocError),

    /// The template failed to parse or execute against the document
    #[error("failed to render documentation: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// Owns the growing [`Document`] and the rendering template.
///
/// Intended usage is a build phase followed by a serve phase: `accumulate`
/// endpoint configs while setting the application up, then call [`handler`]
/// once and mount the result. `accumulate` takes `&mut self`, so the build
/// phase cannot overlap with serving.
///
/// [`handler`]: ApiDoc::handler
pub struct ApiDoc {
    registry: Handlebars<'static>,
    template: String,
    document: Document,
}

impl ApiDoc {
    /// Create an instance with the default template and an empty document.
    pub fn new() -> Self {
        Self {
            registry: Handlebars::new(),
            template: DEFAULT_TEMPLATE.to_string(),
            document: Document::new(),
        }
    }

    /// The accumulated document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Replace the rendering template.
    ///
    /// The source is not parsed here; a broken template surfaces as a
    /// [`ServeError::Render`] from [`render_snapshot`](Self::render_snapshot).
    pub fn set_template(&mut self, template: impl Into<String>) {
        self.template = template.into();
    }

    /// Build each config in order and append it to the document.
    ///
    /// Stops at the first failing config and returns its error; descriptors
    /// built before the failure stay appended (see [`Document::accumulate`]).
    pub fn accumulate<I>(&mut self, configs: I) -> Result<(), DocError>
    where
        I: IntoIterator<Item = EndpointConfig>,
    {
        let before = self.document.endpoints.len();
        let result = self.document.accumulate(configs);
        for endpoint in &self.document.endpoints[before..] {
            debug!(path = %endpoint.path, "documented endpoint");
        }
        if let Err(err) = &result {
            warn!(%err, "endpoint batch stopped early");
        }
        result
    }

    /// Render the current document with the installed template.
    pub fn render_snapshot(&self) -> Result<String, ServeError> {
        let html = render_document(&self.registry, &self.template, &self.document)?;
        Ok(html)
    }

    /// Render once and return a handler serving the captured snapshot.
    ///
    /// The returned route answers every method with the same body and a
    /// `text/html; charset=utf-8` content type; it performs no path or
    /// method filtering of its own. Endpoints accumulated after this call
    /// are not reflected in the served output.
    pub fn handler(&self) -> Result<MethodRouter, ServeError> {
        let body = self.render_snapshot()?;
        debug!(bytes = body.len(), "rendered documentation snapshot");

        Ok(any(move || {
            let body = body.clone();
            async move {
                (
                    [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                    body,
                )
            }
        }))
    }
}

impl Default for ApiDoc {
    fn default() -> Self {
        Self::new()
    }
}
