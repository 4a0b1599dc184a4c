//! Sitemap generation.
//!
//! Generates a sitemap.xml file listing all pages for search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/post/1/</loc>
//!     <lastmod>2024-03-15</lastmod>
//!   </url>
//! </urlset>
//! ```

use crate::{
    build::PageSpec,
    config::SiteConfig,
    log,
    utils::minify::{MinifyType, minify},
};
use anyhow::{Context, Result};
use std::fs;

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// ============================================================================
// Public API
// ============================================================================

/// Build sitemap if enabled in config.
///
/// Uses the build's page plan instead of re-scanning the output directory.
pub fn build_sitemap(config: &SiteConfig, pages: &[PageSpec]) -> Result<()> {
    if config.build.sitemap.enable {
        let sitemap = Sitemap::from_pages(config, pages);
        sitemap.write(config)?;
    }
    Ok(())
}

// ============================================================================
// Sitemap Implementation
// ============================================================================

/// Sitemap data structure
struct Sitemap {
    /// List of URL entries
    urls: Vec<UrlEntry>,
}

/// Single URL entry in the sitemap
struct UrlEntry {
    /// Full URL location
    loc: String,
    /// Last modification date (optional, YYYY-MM-DD format)
    lastmod: Option<&'static str>,
}

impl Sitemap {
    /// Build sitemap from the page plan. The not-found page is excluded.
    fn from_pages(config: &SiteConfig, pages: &[PageSpec]) -> Self {
        let urls = pages
            .iter()
            .filter(|page| page.in_sitemap())
            .map(|page| UrlEntry {
                loc: config.full_url(&page.route),
                lastmod: page.lastmod,
            })
            .collect();

        Self { urls }
    }

    /// Generate sitemap XML string.
    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
            if let Some(lastmod) = entry.lastmod {
                xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write sitemap to the output file.
    fn write(self, config: &SiteConfig) -> Result<()> {
        let sitemap_path = config.build.output.join(&config.build.sitemap.path);
        let xml = self.into_xml();
        let xml = minify(MinifyType::Xml(xml.as_bytes()), config);

        if let Some(parent) = sitemap_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&sitemap_path, &*xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!("sitemap"; "{}", sitemap_path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::plan_pages;
    use crate::content::store;

    fn make_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.base.url = Some("https://example.com".to_string());
        config
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a&b"), "a&amp;b");
        assert_eq!(escape_xml("<url>"), "&lt;url&gt;");
        assert_eq!(escape_xml("https://example.com/?a=1&b=2"),
                   "https://example.com/?a=1&amp;b=2");
    }

    #[test]
    fn test_sitemap_xml_structure() {
        let config = make_config();
        let pages = plan_pages(store());
        let xml = Sitemap::from_pages(&config, &pages).into_xml();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(SITEMAP_NS));
        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(xml.contains("<loc>https://example.com/post/1/</loc>"));
        assert!(xml.contains("<lastmod>2024-03-15</lastmod>"));
        // The fallback page is not indexed
        assert!(!xml.contains("404"));
    }

    #[test]
    fn test_sitemap_covers_tag_pages() {
        let config = make_config();
        let pages = plan_pages(store());
        let xml = Sitemap::from_pages(&config, &pages).into_xml();

        assert!(xml.contains("<loc>https://example.com/tags/react/</loc>"));
        assert!(xml.contains("<loc>https://example.com/tags/ai-ml/</loc>"));
    }
}
