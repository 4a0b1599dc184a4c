//! `[build]` section configuration.
//!
//! Contains output paths and settings for the generated site.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in vitrine.toml - build settings.
///
/// # Example
/// ```toml
/// [build]
/// output = "public"
/// assets = "assets"
/// minify = true
///
/// [build.rss]
/// enable = true
/// path = "feed.xml"
///
/// [build.sitemap]
/// enable = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory. Set from CLI, not from the config file.
    #[serde(skip)]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Output directory for the generated site.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Directory of user assets copied verbatim into the output.
    #[serde(default = "defaults::build::assets")]
    #[educe(Default = defaults::build::assets())]
    pub assets: PathBuf,

    /// Directory name (under output) for the JSON data files
    /// consumed by the client-side search page.
    #[serde(default = "defaults::build::data")]
    #[educe(Default = defaults::build::data())]
    pub data: PathBuf,

    /// Minify generated HTML/XML.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub minify: bool,

    /// Clear the output directory completely before building.
    #[serde(default = "defaults::r#false")]
    pub clean: bool,

    /// rss feed settings
    #[serde(default)]
    pub rss: RssConfig,

    /// sitemap settings
    #[serde(default)]
    pub sitemap: SitemapConfig,
}

/// `[build.rss]` section - rss feed generation.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RssConfig {
    /// Enable rss feed generation.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Feed file path, relative to the output directory.
    #[serde(default = "defaults::build::rss::path")]
    #[educe(Default = defaults::build::rss::path())]
    pub path: PathBuf,
}

/// `[build.sitemap]` section - sitemap generation.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SitemapConfig {
    /// Enable sitemap generation.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Sitemap file path, relative to the output directory.
    #[serde(default = "defaults::build::sitemap::path")]
    #[educe(Default = defaults::build::sitemap::path())]
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_build_config_defaults() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test site"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.output, PathBuf::from("public"));
        assert_eq!(config.build.assets, PathBuf::from("assets"));
        assert_eq!(config.build.data, PathBuf::from("_data"));
        assert!(config.build.minify);
        assert!(!config.build.clean);
        assert!(config.build.rss.enable);
        assert_eq!(config.build.rss.path, PathBuf::from("feed.xml"));
        assert!(config.build.sitemap.enable);
        assert_eq!(config.build.sitemap.path, PathBuf::from("sitemap.xml"));
    }

    #[test]
    fn test_build_config_overrides() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test site"

            [build]
            output = "dist"
            minify = false

            [build.rss]
            enable = false

            [build.sitemap]
            enable = false
            path = "map.xml"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert!(!config.build.minify);
        assert!(!config.build.rss.enable);
        assert!(!config.build.sitemap.enable);
        assert_eq!(config.build.sitemap.path, PathBuf::from("map.xml"));
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test site"

            [build]
            content = "posts"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }
}
