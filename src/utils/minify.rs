//! Minification for generated HTML and XML.
//!
//! A unified `minify` function gated by `[build].minify` in the config.

use crate::config::SiteConfig;
use std::borrow::Cow;

/// Content type for minification.
pub enum MinifyType<'a> {
    /// HTML content
    Html(&'a [u8]),
    /// XML content
    Xml(&'a [u8]),
}

/// Minify content based on type and config.
///
/// Returns `Cow::Borrowed` if minify disabled, `Cow::Owned` if minified.
pub fn minify<'a>(content: MinifyType<'a>, config: &SiteConfig) -> Cow<'a, [u8]> {
    if !config.build.minify {
        return match content {
            MinifyType::Html(bytes) | MinifyType::Xml(bytes) => Cow::Borrowed(bytes),
        };
    }

    match content {
        MinifyType::Html(html) => Cow::Owned(minify_html_inner(html)),
        MinifyType::Xml(xml) => Cow::Owned(minify_xml_inner(xml)),
    }
}

/// Minify HTML content using the `minify_html` crate.
fn minify_html_inner(html: &[u8]) -> Vec<u8> {
    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg.minify_css = true;
    cfg.minify_js = true;
    cfg.remove_bangs = true;
    cfg.remove_processing_instructions = true;
    minify_html::minify(html, &cfg)
}

/// Minify XML by stripping indentation and blank lines.
fn minify_xml_inner(xml: &[u8]) -> Vec<u8> {
    let xml_str = std::str::from_utf8(xml).unwrap_or("");
    xml_str
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("")
        .into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_minify(enabled: bool) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.minify = enabled;
        config
    }

    #[test]
    fn test_minify_html_strips_whitespace() {
        let html = b"<html>\n  <head>\n  </head>\n  <body>\n    <p>Hello</p>\n  </body>\n</html>";
        let result = minify(MinifyType::Html(html), &config_with_minify(true));
        let result_str = String::from_utf8_lossy(&result);

        assert!(!result_str.contains("\n  "));
        assert!(result_str.contains("<p>Hello</p>"));
    }

    #[test]
    fn test_minify_html_disabled_is_identity() {
        let html = b"<html>\n  <body>\n  </body>\n</html>";
        let result = minify(MinifyType::Html(html), &config_with_minify(false));
        assert_eq!(&*result, html);
    }

    #[test]
    fn test_minify_xml_basic() {
        let xml = br#"<?xml version="1.0"?>
<root>
  <item>Hello</item>
</root>"#;
        let result = minify(MinifyType::Xml(xml), &config_with_minify(true));

        assert_eq!(
            &*result,
            br#"<?xml version="1.0"?><root><item>Hello</item></root>"#
        );
    }

    #[test]
    fn test_minify_xml_keeps_inner_whitespace() {
        let xml = b"  <tag>  content  </tag>  ";
        let result = minify(MinifyType::Xml(xml), &config_with_minify(true));
        assert_eq!(&*result, b"<tag>  content  </tag>");
    }

    #[test]
    fn test_minify_xml_feed_like() {
        let xml = br#"<?xml version="1.0" encoding="utf-8"?>
<rss version="2.0">
  <channel>
    <title>Portfolio</title>
  </channel>
</rss>"#;
        let result = minify(MinifyType::Xml(xml), &config_with_minify(true));
        let result_str = String::from_utf8_lossy(&result);

        assert!(!result_str.contains('\n'));
        assert!(result_str.contains("<title>Portfolio</title>"));
    }
}
