//! HTML generation for recommendation pages.
//!
//! Turns a page descriptor and its selected products into a complete,
//! self-contained HTML document. Rendering is pure: no I/O happens here.

use std::sync::Arc;

use pagegrid_core::{Config, PageDescriptor, Product};
use thiserror::Error;
use tracing::debug;

use crate::{
    clock::{Clock, SystemClock},
    template::{DEFAULT_STYLESHEET, TemplateContext, TemplateError, TemplateRegistry},
};

/// HTML generation errors.
#[derive(Debug, Error)]
pub enum HtmlError {
    /// Template error.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// JSON-LD encoding error.
    #[error("structured data error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for HTML generation.
pub type Result<T> = std::result::Result<T, HtmlError>;

const FAQ_ANSWER: &str = "depends on performance, comfort, and value for money. Our top picks are listed above.";

/// HTML page generator.
#[derive(Debug)]
pub struct HtmlGenerator {
    templates: TemplateRegistry,
    config: Config,
    clock: Arc<dyn Clock>,
}

impl HtmlGenerator {
    /// Create a new HTML generator using the system clock.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a generator with an explicit year source.
    #[must_use]
    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Self {
        Self {
            templates: TemplateRegistry::new(),
            config,
            clock,
        }
    }

    /// Generate HTML for a page.
    pub fn generate_page(&self, page: &PageDescriptor, products: &[&Product]) -> Result<String> {
        debug!(slug = %page.slug, products = products.len(), "generating HTML for page");

        let cards = products
            .iter()
            .map(|p| self.generate_card(p))
            .collect::<Result<String>>()?;

        let question = format!("Which is the best {} for {}?", page.product, page.audience);
        let answer = format!("The best {} {FAQ_ANSWER}", page.product);

        let ctx = TemplateContext::new()
            .with_var("lang", escape_html(&self.config.site.language))
            .with_var("title", escape_html(&page.title))
            .with_var("year", self.clock.year().to_string())
            .with_var(
                "canonical_url",
                escape_html(&self.config.url_for(&page.file_name())),
            )
            .with_var("faq_question", json_string(&question)?)
            .with_var("faq_answer", json_string(&answer)?)
            .with_var("stylesheet", DEFAULT_STYLESHEET)
            .with_var("product", escape_html(&page.product))
            .with_var("audience", escape_html(&page.audience))
            .with_var("country", escape_html(&page.country))
            .with_var("cards", cards)
            .with_var("disclosure", escape_html(&self.config.site.disclosure));

        Ok(self.templates.render("page", &ctx)?)
    }

    /// Generate the card for a single product.
    fn generate_card(&self, product: &Product) -> Result<String> {
        let features: String = product
            .features
            .iter()
            .map(|f| format!("<li>{}</li>", escape_html(f)))
            .collect();

        let ctx = TemplateContext::new()
            .with_var("name", escape_html(&product.name))
            .with_var("price", escape_html(&product.price))
            .with_var("features", features)
            .with_var("link", escape_html(&product.link));

        Ok(self.templates.render("card", &ctx)?)
    }
}

/// Escape text for HTML element content and quoted attribute values.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Encode a JSON string literal that is safe inside a `<script>` element.
fn json_string(s: &str) -> Result<String> {
    Ok(serde_json::to_string(s)?.replace("</", "<\\/"))
}
