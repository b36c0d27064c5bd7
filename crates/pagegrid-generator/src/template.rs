//! HTML template system for page generation.
//!
//! Provides a lightweight template system using string interpolation rather than
//! heavy template engines like Tera or Handlebars.

use std::collections::HashMap;

use thiserror::Error;

/// Template rendering errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Missing required variable.
    #[error("missing required variable: {0}")]
    MissingVariable(String),

    /// Template not found.
    #[error("template not found: {0}")]
    NotFound(String),

    /// Invalid template syntax.
    #[error("invalid template syntax: {0}")]
    InvalidSyntax(String),
}

/// Result type for template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Template context with variables for interpolation.
///
/// Values are inserted verbatim; callers escape them for their context first.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    variables: HashMap<String, String>,
}

impl TemplateContext {
    /// Create a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variable into the context.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Create context with initial variables.
    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get a variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }
}

/// A simple template that supports variable interpolation.
///
/// Variables are specified as `{{ variable_name }}` in the template string.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    content: String,
}

impl Template {
    /// Create a new template with the given name and content.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Render the template with the given context.
    ///
    /// Replaces all `{{ variable }}` placeholders with values from context.
    /// Substituted values are never re-scanned for placeholders.
    pub fn render(&self, context: &TemplateContext) -> Result<String> {
        let mut result = self.content.clone();
        let mut pos = 0;

        while let Some(start) = result[pos..].find("{{") {
            let start = pos + start;
            let end = result[start..]
                .find("}}")
                .ok_or_else(|| TemplateError::InvalidSyntax("unclosed {{ delimiter".to_string()))?;
            let end = start + end + 2;

            let var_name = result[start + 2..end - 2].trim();

            // Optional variables render empty: {{ variable? }}
            let (var_name, optional) = match var_name.strip_suffix('?') {
                Some(stripped) => (stripped, true),
                None => (var_name, false),
            };

            let value = match context.get(var_name) {
                Some(v) => v.to_string(),
                None if optional => String::new(),
                None => return Err(TemplateError::MissingVariable(var_name.to_string())),
            };

            result.replace_range(start..end, &value);
            pos = start + value.len();
        }

        Ok(result)
    }
}

/// The built-in page, card and index templates, looked up by name.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: HashMap<String, Template>,
}

impl TemplateRegistry {
    /// Create a registry holding the built-in templates.
    #[must_use]
    pub fn new() -> Self {
        let templates = [
            Template::new("page", DEFAULT_PAGE_TEMPLATE),
            Template::new("card", DEFAULT_CARD_TEMPLATE),
            Template::new("index", DEFAULT_INDEX_TEMPLATE),
            Template::new("index_group", DEFAULT_INDEX_GROUP_TEMPLATE),
        ]
        .into_iter()
        .map(|t| (t.name.clone(), t))
        .collect();

        Self { templates }
    }

    fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Render a named template with the given context.
    pub fn render(&self, name: &str, context: &TemplateContext) -> Result<String> {
        let template = self
            .get(name)
            .ok_or_else(|| TemplateError::NotFound(name.to_string()))?;
        template.render(context)
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Stylesheet inlined into every generated document.
pub const DEFAULT_STYLESHEET: &str = r#"
    body { font-family: Arial, sans-serif; max-width: 900px; margin: auto; padding: 20px; line-height: 1.6 }
    .product { border: 1px solid #ddd; padding: 15px; border-radius: 6px }
    .product a { display: inline-block; background: #ff9900; padding: 10px 15px; color: #000; text-decoration: none; border-radius: 5px }
    .group ul { padding-left: 1.25rem }
    footer { margin-top: 2rem; color: #666; font-size: 0.875rem }
"#;

/// Recommendation page template.
pub const DEFAULT_PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="{{ lang }}">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{{ title }} ({{ year }})</title>
  <meta name="description" content="{{ title }} – Expert recommendations and buying guide.">
  <link rel="canonical" href="{{ canonical_url }}">

  <script type="application/ld+json">
  {
    "@context": "https://schema.org",
    "@type": "FAQPage",
    "mainEntity": [{
      "@type": "Question",
      "name": {{ faq_question }},
      "acceptedAnswer": {
        "@type": "Answer",
        "text": {{ faq_answer }}
      }
    }]
  }
  </script>

  <style>{{ stylesheet }}</style>
</head>
<body>

<h1>{{ title }} ({{ year }})</h1>

<p>
Finding the best {{ product }} for {{ audience }} in {{ country }} can significantly improve productivity.
Below are our top recommendations based on performance, durability, and value.
</p>

<h2>Top Picks</h2>
{{ cards? }}

<h2>Buying Guide</h2>
<ul>
  <li>Performance &amp; reliability</li>
  <li>Build quality</li>
  <li>Warranty &amp; support</li>
  <li>Customer reviews</li>
</ul>

<footer>
<p><em>{{ disclosure }}</em></p>
</footer>

</body>
</html>
"##;

/// Product card template.
pub const DEFAULT_CARD_TEMPLATE: &str = r#"
<div class="product">
  <h3>{{ name }}</h3>
  <p><strong>Price:</strong> {{ price }}</p>
  <ul>{{ features? }}</ul>
  <a href="{{ link }}" target="_blank" rel="nofollow sponsored">
    Check Price on Amazon
  </a>
</div>
<hr/>
"#;

/// Landing page template.
pub const DEFAULT_INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="{{ lang }}">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{{ site_title }} ({{ year }})</title>
  <meta name="description" content="{{ site_title }} – Product recommendations by audience and country.">
  <link rel="canonical" href="{{ canonical_url }}">
  <style>{{ stylesheet }}</style>
</head>
<body>

<h1>{{ site_title }} ({{ year }})</h1>

{{ groups? }}

<footer>
<p>&copy; {{ year }} {{ site_title }}</p>
</footer>

</body>
</html>
"#;

/// One product group on the landing page.
pub const DEFAULT_INDEX_GROUP_TEMPLATE: &str = r#"
<section class="group">
  <h2>{{ heading }}</h2>
  <ul>
{{ items }}  </ul>
</section>
"#;
