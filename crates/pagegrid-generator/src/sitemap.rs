//! Sitemap generation.
//!
//! Generates XML sitemaps for search engine optimization.

use pagegrid_core::{Config, PageDescriptor};
use tracing::debug;

/// Change frequency for sitemap entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Daily,
    Weekly,
}

impl ChangeFreq {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }
}

/// A sitemap URL entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapUrl {
    /// URL location.
    pub loc: String,

    /// Change frequency.
    pub changefreq: ChangeFreq,

    /// Priority (0.0 to 1.0).
    pub priority: f32,
}

/// Sitemap generator.
#[derive(Debug)]
pub struct SitemapGenerator {
    config: Config,
}

impl SitemapGenerator {
    /// Create a new sitemap generator.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// All URL entries: the site root first, then every page in order.
    #[must_use]
    pub fn urls(&self, pages: &[PageDescriptor]) -> Vec<SitemapUrl> {
        let root = SitemapUrl {
            loc: self.config.url_for(""),
            changefreq: ChangeFreq::Daily,
            priority: 1.0,
        };

        std::iter::once(root)
            .chain(pages.iter().map(|page| SitemapUrl {
                loc: self.config.url_for(&page.file_name()),
                changefreq: ChangeFreq::Weekly,
                priority: 0.8,
            }))
            .collect()
    }

    /// Generate sitemap XML from pages.
    #[must_use]
    pub fn generate(&self, pages: &[PageDescriptor]) -> String {
        debug!(count = pages.len(), "generating sitemap");

        let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
        xml.push('\n');

        for url in self.urls(pages) {
            xml.push_str(&url_to_xml(&url));
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

fn url_to_xml(url: &SitemapUrl) -> String {
    let mut xml = String::from("  <url>\n");
    xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&url.loc)));
    xml.push_str(&format!(
        "    <changefreq>{}</changefreq>\n",
        url.changefreq.as_str()
    ));
    xml.push_str(&format!("    <priority>{:.1}</priority>\n", url.priority));
    xml.push_str("  </url>\n");
    xml
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
