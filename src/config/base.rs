//! `[base]` section configuration.
//!
//! Contains basic site information like title, author, description, etc.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in vitrine.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "Portfolio"
/// description = "Modern web development projects and technical insights"
/// author = "Alice"
/// url = "https://alice.dev"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title displayed in the navbar and browser tab.
    pub title: String,

    /// Author name for the rss feed and meta tags.
    #[serde(default = "defaults::base::author")]
    #[educe(Default = defaults::base::author())]
    pub author: String,

    /// Author email for the rss feed.
    #[serde(default = "defaults::base::email")]
    #[educe(Default = defaults::base::email())]
    pub email: String,

    /// Site description for SEO meta tags and the footer blurb.
    pub description: String,

    /// Base URL for absolute links in rss/sitemap.
    /// Required when `[build.rss].enable` or `[build.sitemap].enable` is true.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// BCP 47 language code (e.g., "en-US").
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,

    /// Copyright notice for the site footer.
    #[serde(default)]
    pub copyright: String,
}
