//! HTML rendering of a [`Document`] through Handlebars.

use handlebars::{Handlebars, RenderError};
use routedoc_core::document::Document;

/// Default documentation template.
///
/// Renders the schema version plus, per endpoint, its path, methods, request
/// properties, and each declared response with its status code and
/// properties.
pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>API Documentation</title>
</head>
<body>
<h1>API Documentation</h1>
<p>Schema version: {{schema_version}}</p>
{{#each endpoints}}
<section>
<h2>{{#each methods}}{{this}} {{/each}}{{path}}</h2>
<h3>Request: {{request.raw_type_label}}</h3>
<table>
<tr><th>name</th><th>type</th><th>required</th></tr>
{{#each request.properties}}
<tr><td>{{name}}</td><td>{{type}}</td><td>{{required}}</td></tr>
{{/each}}
</table>
{{#each responses}}
<h3>Response {{status_code}}: {{raw_type_label}}</h3>
<table>
<tr><th>name</th><th>type</th><th>required</th></tr>
{{#each properties}}
<tr><td>{{name}}</td><td>{{type}}</td><td>{{required}}</td></tr>
{{/each}}
</table>
{{/each}}
</section>
{{/each}}
</body>
</html>
"#;

/// Render `document` against `template`.
///
/// The template source is parsed on every call, so a broken template
/// surfaces here as a [`RenderError`] rather than at registry setup.
/// Rendering is deterministic: the same document and template always produce
/// byte-identical output.
pub(crate) fn render_document(
    registry: &Handlebars<'_>,
    template: &str,
    document: &Document,
) -> Result<String, RenderError> {
    registry.render_template(template, document)
}
