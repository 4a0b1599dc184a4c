//! rss feed generation.
//!
//! Builds a validated rss channel from the post catalog.

use crate::{
    config::SiteConfig,
    content::{ContentStore, Post},
    log,
    utils::{
        date::Date,
        minify::{MinifyType, minify},
    },
};
use anyhow::{Result, anyhow};
use regex::Regex;
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};
use std::{fs, sync::LazyLock};

// ============================================================================
// Public API
// ============================================================================

/// Build the rss feed if enabled in config.
pub fn build_rss(config: &SiteConfig, store: &ContentStore) -> Result<()> {
    if config.build.rss.enable {
        RssFeed::build(config, store).write(config)?;
    }
    Ok(())
}

// ============================================================================
// RssFeed Implementation
// ============================================================================

/// rss feed builder
struct RssFeed<'a> {
    config: &'a SiteConfig,
    posts: Vec<&'static Post>,
}

impl<'a> RssFeed<'a> {
    /// Collect feed entries from the catalog, in catalog order
    /// (which is newest first).
    fn build(config: &'a SiteConfig, store: &ContentStore) -> Self {
        let posts = store.all().iter().collect();
        Self { config, posts }
    }

    /// Generate rss xml string
    fn into_xml(self) -> Result<String> {
        let items: Vec<_> = self
            .posts
            .iter()
            .filter_map(|post| post_to_rss_item(post, self.config))
            .collect();

        let channel = ChannelBuilder::default()
            .title(&self.config.base.title)
            .link(self.config.base.url.as_deref().unwrap_or_default())
            .description(&self.config.base.description)
            .language(self.config.base.language.clone())
            .generator("vitrine".to_string())
            .items(items)
            .build();

        channel
            .validate()
            .map_err(|e| anyhow!("rss validation failed: {e}"))?;
        Ok(channel.to_string())
    }

    /// Write rss feed to file
    fn write(self, config: &SiteConfig) -> Result<()> {
        let xml = self.into_xml()?;
        let xml = minify(MinifyType::Xml(xml.as_bytes()), config);
        let rss_path = config.build.output.join(&config.build.rss.path);

        if let Some(parent) = rss_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&rss_path, &*xml)?;

        log!("rss"; "{}", rss_path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert a `Post` to an rss item.
/// Returns None if the publication date fails to parse.
fn post_to_rss_item(post: &Post, config: &SiteConfig) -> Option<rss::Item> {
    let pub_date = Date::parse(post.published).map(Date::to_rfc2822)?;
    let link = config.full_url(&post.url_path());
    let author = normalize_rss_author(config);

    Some(
        ItemBuilder::default()
            .title(post.title.to_string())
            .link(Some(link.clone()))
            .guid(GuidBuilder::default().permalink(true).value(link).build())
            .description(post.excerpt.to_string())
            .pub_date(pub_date)
            .author(author)
            .build(),
    )
}

/// Normalize the author field to rss format: "email@example.com (Name)"
///
/// Priority:
/// 1. Site config author if already in valid format
/// 2. Combine site config email and author
fn normalize_rss_author(config: &SiteConfig) -> Option<String> {
    static RE_VALID_AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}[ \t]*\([^)]+\)$").unwrap()
    });

    let site_author = &config.base.author;
    if RE_VALID_AUTHOR.is_match(site_author) {
        return Some(site_author.clone());
    }

    Some(format!("{} ({})", config.base.email, site_author))
}
