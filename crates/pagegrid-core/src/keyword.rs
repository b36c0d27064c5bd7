//! Keyword grid enumeration.
//!
//! Expands the product × audience × country grid into one [`PageDescriptor`]
//! per combination.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// The three ordered keyword lists that define the page matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordGrid {
    /// Product keywords, matched against `Product::category`.
    #[serde(default = "default_products")]
    pub products: Vec<String>,

    /// Audience segments, matched against `Product::best_for`.
    #[serde(default = "default_audiences")]
    pub audiences: Vec<String>,

    /// Target countries.
    #[serde(default = "default_countries")]
    pub countries: Vec<String>,
}

fn default_products() -> Vec<String> {
    ["laptop", "monitor", "keyboard", "mouse", "chair", "desk"]
        .map(String::from)
        .to_vec()
}

fn default_audiences() -> Vec<String> {
    [
        "developers",
        "programmers",
        "coders",
        "designers",
        "remote workers",
    ]
    .map(String::from)
    .to_vec()
}

fn default_countries() -> Vec<String> {
    ["usa", "uk", "canada", "australia"].map(String::from).to_vec()
}

impl Default for KeywordGrid {
    fn default() -> Self {
        Self {
            products: default_products(),
            audiences: default_audiences(),
            countries: default_countries(),
        }
    }
}

impl KeywordGrid {
    /// Build a grid from borrowed string lists.
    #[must_use]
    pub fn new(products: &[&str], audiences: &[&str], countries: &[&str]) -> Self {
        let owned = |xs: &[&str]| -> Vec<String> { xs.iter().map(|s| (*s).to_string()).collect() };
        Self {
            products: owned(products),
            audiences: owned(audiences),
            countries: owned(countries),
        }
    }

    /// Number of pages this grid expands to.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.products.len() * self.audiences.len() * self.countries.len()
    }

    /// Reject lists with entries that have no letters or digits, or that
    /// collide once slugified.
    pub fn validate(&self) -> Result<()> {
        for (name, list) in [
            ("products", &self.products),
            ("audiences", &self.audiences),
            ("countries", &self.countries),
        ] {
            let mut seen = HashSet::new();
            for entry in list {
                let slug = slugify(entry);
                if slug.is_empty() {
                    return Err(CoreError::config(format!(
                        "keywords.{name} entry '{entry}' has no letters or digits"
                    )));
                }
                if !seen.insert(slug) {
                    return Err(CoreError::config(format!(
                        "keywords.{name} contains duplicate entry '{entry}'"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Identity and metadata of one generated page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageDescriptor {
    /// URL-safe identifier, also the output file stem.
    pub slug: String,

    /// Human-readable page title.
    pub title: String,

    /// Product keyword as configured.
    pub product: String,

    /// Audience segment as configured.
    pub audience: String,

    /// Country, upper-cased for display.
    pub country: String,
}

impl PageDescriptor {
    /// Build the descriptor for a single combination.
    #[must_use]
    pub fn new(product: &str, audience: &str, country: &str) -> Self {
        let slug = slugify(&format!("best {product} for {audience} in {country}"));
        let title = format!(
            "Best {} for {} in {}",
            title_case(product),
            title_case(audience),
            country.to_uppercase()
        );

        Self {
            slug,
            title,
            product: product.to_string(),
            audience: audience.to_string(),
            country: country.to_uppercase(),
        }
    }

    /// Output file name for this page.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.html", self.slug)
    }
}

/// Expand the grid in nested order: products, then audiences, then countries.
#[must_use]
pub fn enumerate(grid: &KeywordGrid) -> Vec<PageDescriptor> {
    let mut pages = Vec::with_capacity(grid.page_count());

    for product in &grid.products {
        for audience in &grid.audiences {
            for country in &grid.countries {
                pages.push(PageDescriptor::new(product, audience, country));
            }
        }
    }

    pages
}

/// Generate a URL-safe slug: letters and digits are kept lower-cased, every
/// other run of characters becomes a single hyphen.
#[must_use]
pub fn slugify(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Upper-case every letter that follows a non-letter, lower-case the rest.
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_combination() {
        let grid = KeywordGrid::new(&["laptop"], &["developers"], &["usa"]);
        let pages = enumerate(&grid);

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].slug, "best-laptop-for-developers-in-usa");
        assert_eq!(pages[0].title, "Best Laptop for Developers in USA");
        assert_eq!(pages[0].product, "laptop");
        assert_eq!(pages[0].audience, "developers");
        assert_eq!(pages[0].country, "USA");
    }

    #[test]
    fn test_cartesian_count_and_unique_slugs() {
        let grid = KeywordGrid::default();
        let pages = enumerate(&grid);

        assert_eq!(pages.len(), 6 * 5 * 4);
        assert_eq!(pages.len(), grid.page_count());

        let slugs: HashSet<_> = pages.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs.len(), pages.len());
    }

    #[test]
    fn test_nested_order() {
        let grid = KeywordGrid::new(&["a", "b"], &["x", "y"], &["1", "2"]);
        let slugs: Vec<_> = enumerate(&grid).into_iter().map(|p| p.slug).collect();

        assert_eq!(
            slugs,
            vec![
                "best-a-for-x-in-1",
                "best-a-for-x-in-2",
                "best-a-for-y-in-1",
                "best-a-for-y-in-2",
                "best-b-for-x-in-1",
                "best-b-for-x-in-2",
                "best-b-for-y-in-1",
                "best-b-for-y-in-2",
            ]
        );
    }

    #[test]
    fn test_multi_word_audience() {
        let page = PageDescriptor::new("chair", "remote workers", "uk");

        assert_eq!(page.slug, "best-chair-for-remote-workers-in-uk");
        assert_eq!(page.title, "Best Chair for Remote Workers in UK");
        assert_eq!(page.audience, "remote workers");
        assert_eq!(page.file_name(), "best-chair-for-remote-workers-in-uk.html");
    }

    #[test]
    fn test_empty_list_yields_no_pages() {
        let grid = KeywordGrid::new(&["laptop"], &[], &["usa"]);
        assert!(enumerate(&grid).is_empty());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("remote workers"), "Remote Workers");
        assert_eq!(title_case("LAPTOP"), "Laptop");
        assert_eq!(title_case("wi-fi router"), "Wi-Fi Router");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Remote  Workers"), "remote-workers");
        assert_eq!(slugify(" usa "), "usa");
        assert_eq!(slugify("usb-c/thunderbolt dock"), "usb-c-thunderbolt-dock");
        assert_eq!(slugify("mic & boom arm"), "mic-boom-arm");
        assert_eq!(slugify("../etc"), "etc");
    }

    #[test]
    fn test_punctuated_keywords_give_url_safe_slugs() {
        let grid = KeywordGrid::new(
            &["usb-c/thunderbolt dock", "mic & boom arm"],
            &["developers"],
            &["usa"],
        );
        assert!(grid.validate().is_ok());

        let pages = enumerate(&grid);
        assert_eq!(pages[0].slug, "best-usb-c-thunderbolt-dock-for-developers-in-usa");
        assert_eq!(pages[1].slug, "best-mic-boom-arm-for-developers-in-usa");
        for page in &pages {
            assert!(
                page.slug
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            );
        }
    }

    #[test]
    fn test_validate_rejects_punctuation_only_entries() {
        let grid = KeywordGrid::new(&["laptop"], &["developers"], &["&/"]);
        let err = grid.validate().unwrap_err();
        assert!(err.to_string().contains("no letters or digits"));
    }

    #[test]
    fn test_validate_rejects_entries_colliding_after_punctuation() {
        let grid = KeywordGrid::new(&["usb-c dock", "usb c/dock"], &["developers"], &["usa"]);
        assert!(grid.validate().unwrap_err().to_string().contains("duplicate"));
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let grid = KeywordGrid::new(&["laptop", "Laptop"], &["developers"], &["usa"]);
        let err = grid.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_validate_rejects_blank_entries() {
        let grid = KeywordGrid::new(&["laptop"], &["  "], &["usa"]);
        assert!(grid.validate().is_err());
    }

    #[test]
    fn test_default_grid_is_valid() {
        assert!(KeywordGrid::default().validate().is_ok());
    }
}
