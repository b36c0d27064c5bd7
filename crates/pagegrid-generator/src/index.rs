//! Landing page generation.
//!
//! Groups pages by product and links a bounded number of them per group.

use std::sync::Arc;

use pagegrid_core::{Config, PageDescriptor, keyword::title_case};
use tracing::debug;

use crate::{
    clock::{Clock, SystemClock},
    html::{Result, escape_html},
    template::{DEFAULT_STYLESHEET, TemplateContext, TemplateRegistry},
};

/// Pages sharing a product keyword, in enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductGroup<'a> {
    pub product: &'a str,
    pub pages: Vec<&'a PageDescriptor>,
}

/// Group pages by product, keeping first-seen product order.
#[must_use]
pub fn group_by_product(pages: &[PageDescriptor]) -> Vec<ProductGroup<'_>> {
    let mut groups: Vec<ProductGroup<'_>> = Vec::new();

    for page in pages {
        match groups.iter_mut().find(|g| g.product == page.product) {
            Some(group) => group.pages.push(page),
            None => groups.push(ProductGroup {
                product: &page.product,
                pages: vec![page],
            }),
        }
    }

    groups
}

/// Index page generator.
#[derive(Debug)]
pub struct IndexGenerator {
    templates: TemplateRegistry,
    config: Config,
    clock: Arc<dyn Clock>,
}

impl IndexGenerator {
    /// Create a new index generator using the system clock.
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

    /// Number of links the index will contain for these pages.
    #[must_use]
    pub fn link_count(&self, pages: &[PageDescriptor]) -> usize {
        group_by_product(pages)
            .iter()
            .map(|g| g.pages.len().min(self.config.build.index_limit))
            .sum()
    }

    /// Generate the index HTML.
    pub fn generate(&self, pages: &[PageDescriptor]) -> Result<String> {
        let limit = self.config.build.index_limit;
        let groups = group_by_product(pages);

        debug!(groups = groups.len(), limit, "generating index page");

        let mut groups_html = String::new();
        for group in &groups {
            let items: String = group
                .pages
                .iter()
                .take(limit)
                .map(|p| {
                    format!(
                        "    <li><a href=\"{}\">{}</a></li>\n",
                        escape_html(&p.file_name()),
                        escape_html(&p.title)
                    )
                })
                .collect();

            let ctx = TemplateContext::new()
                .with_var("heading", escape_html(&title_case(group.product)))
                .with_var("items", items);
            groups_html.push_str(&self.templates.render("index_group", &ctx)?);
        }

        let ctx = TemplateContext::new()
            .with_var("lang", escape_html(&self.config.site.language))
            .with_var("site_title", escape_html(&self.config.site.title))
            .with_var("year", self.clock.year().to_string())
            .with_var("canonical_url", escape_html(&self.config.url_for("")))
            .with_var("stylesheet", DEFAULT_STYLESHEET)
            .with_var("groups", groups_html);

        Ok(self.templates.render("index", &ctx)?)
    }
}

#[cfg(test)]
mod tests {
    use pagegrid_core::{KeywordGrid, enumerate};

    use super::*;
    use crate::clock::FixedClock;

    fn generator(limit: usize) -> IndexGenerator {
        let mut config = Config::default();
        config.site.title = "Gear Guides".to_string();
        config.build.index_limit = limit;
        IndexGenerator::with_clock(config, Arc::new(FixedClock(2026)))
    }

    #[test]
    fn test_group_by_product_keeps_first_seen_order() {
        let pages = vec![
            PageDescriptor::new("mouse", "coders", "uk"),
            PageDescriptor::new("desk", "coders", "uk"),
            PageDescriptor::new("mouse", "designers", "uk"),
        ];

        let groups = group_by_product(&pages);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].product, "mouse");
        assert_eq!(groups[0].pages.len(), 2);
        assert_eq!(groups[0].pages[1].audience, "designers");
        assert_eq!(groups[1].product, "desk");
    }

    #[test]
    fn test_generate_index() {
        let grid = KeywordGrid::new(&["laptop", "remote desk"], &["developers"], &["usa"]);
        let pages = enumerate(&grid);

        let html = generator(20).generate(&pages).unwrap();

        assert!(html.contains("<title>Gear Guides (2026)</title>"));
        assert!(html.contains("<h2>Laptop</h2>"));
        assert!(html.contains("<h2>Remote Desk</h2>"));
        assert!(html.contains(
            r#"<li><a href="best-laptop-for-developers-in-usa.html">Best Laptop for Developers in USA</a></li>"#
        ));
        assert!(html.find("<h2>Laptop</h2>") < html.find("<h2>Remote Desk</h2>"));
        assert!(html.contains("&copy; 2026 Gear Guides"));
    }

    #[test]
    fn test_links_capped_per_group() {
        let grid = KeywordGrid::default();
        let pages = enumerate(&grid);
        let generator = generator(20);

        let html = generator.generate(&pages).unwrap();

        // 5 audiences x 4 countries = 20 pages per product, exactly at the cap.
        assert_eq!(html.matches("<li><a href=").count(), 120);
        assert_eq!(generator.link_count(&pages), 120);

        let generator = IndexGenerator::with_clock(
            {
                let mut config = Config::default();
                config.build.index_limit = 7;
                config
            },
            Arc::new(FixedClock(2026)),
        );
        let html = generator.generate(&pages).unwrap();
        assert_eq!(html.matches("<li><a href=").count(), 6 * 7);
        assert!(html.contains("best-laptop-for-programmers-in-canada.html"));
        assert!(!html.contains("best-laptop-for-programmers-in-australia.html"));
    }

    #[test]
    fn test_cap_bounds_large_groups() {
        let countries: Vec<String> = (0..30).map(|i| format!("c{i}")).collect();
        let grid = KeywordGrid {
            products: vec!["monitor".to_string()],
            audiences: vec!["designers".to_string()],
            countries,
        };
        let pages = enumerate(&grid);

        let html = generator(20).generate(&pages).unwrap();
        assert_eq!(html.matches("<li><a href=").count(), 20);
        assert!(html.contains("best-monitor-for-designers-in-c19.html"));
        assert!(!html.contains("best-monitor-for-designers-in-c20.html"));
    }

    #[test]
    fn test_empty_index() {
        let html = generator(20).generate(&[]).unwrap();
        assert!(html.contains("<h1>Gear Guides (2026)</h1>"));
        assert!(!html.contains("<section"));
    }
}
