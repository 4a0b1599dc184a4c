//! Post record types.
//!
//! These types are serialized to JSON and exposed in `/_data/posts.json` for
//! the client-side search page.

use serde::Serialize;
use std::fmt;

/// Post category. A closed two-value set: an article or a showcased project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Blog,
    Project,
}

impl Category {
    /// Lowercase name as used in URLs and serialized data.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Project => "project",
        }
    }

    /// URL path of this category's listing page.
    pub const fn listing_path(self) -> &'static str {
        match self {
            Self::Blog => "/blog/",
            Self::Project => "/projects/",
        }
    }

    /// Heading for the related-posts block on detail pages.
    pub const fn related_heading(self) -> &'static str {
        match self {
            Self::Blog => "Related Articles",
            Self::Project => "Related Projects",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tri-state category selector: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Whether a record of the given category passes this selector.
    pub const fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected as u8 == category as u8,
        }
    }

    /// Parse from the lowercase names used in URLs and query strings.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(Self::All),
            "blog" => Some(Self::Only(Category::Blog)),
            "project" => Some(Self::Only(Category::Project)),
            _ => None,
        }
    }
}

/// A single immutable post record.
///
/// The whole collection is defined once in the catalog and never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// Unique identifier across the collection
    pub id: &'static str,

    /// Post title
    pub title: &'static str,

    /// Short summary shown on cards and in search results
    pub excerpt: &'static str,

    /// Full body text. Displayed verbatim with paragraph breaks preserved;
    /// no markup processing is applied.
    #[serde(skip)]
    pub content: &'static str,

    /// Category (blog article or project)
    pub category: Category,

    /// Free-form tags. Order is insignificant for filtering;
    /// compared case-insensitively during search.
    pub tags: &'static [&'static str],

    /// Publication date, "YYYY-MM-DD"
    pub published: &'static str,

    /// Display-only read-time label (e.g. "8 min read")
    pub read_time: &'static str,

    /// Cover image URL
    pub image: &'static str,

    /// Highlighted on the home page when set
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub featured: bool,
}

impl Post {
    /// URL path of this post's detail page.
    pub fn url_path(&self) -> String {
        format!("/post/{}/", self.id)
    }

    /// Exact tag membership, as used by tag-chip selection.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(&tag)
    }

    /// Case-insensitive substring match against any tag, as used by search.
    pub fn has_tag_fragment(&self, fragment: &str) -> bool {
        let fragment = fragment.to_lowercase();
        self.tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&fragment))
    }
}
