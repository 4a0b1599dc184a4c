//! Read-only access to the post catalog.
//!
//! All accessors are total, synchronous, side-effect-free, and deterministic:
//! the catalog is fixed at compile time, so every query is a pure function of
//! its arguments. Results preserve catalog order; there is no re-ranking.
//!
//! # Caching
//!
//! The JSON views consumed by the client-side search page are generated once
//! and cached. With an immutable catalog the cache never invalidates, but the
//! double-checked locking keeps generation race-free when the build's rayon
//! workers and the dev server both ask for it.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use parking_lot::RwLock;
use serde::Serialize;

use super::catalog;
use super::post::{CategoryFilter, Post};

/// Global store over the compiled-in catalog.
static STORE: LazyLock<ContentStore> = LazyLock::new(|| ContentStore::new(catalog::posts()));

/// Get the global content store.
pub fn store() -> &'static ContentStore {
    &STORE
}

/// Cached JSON strings for the `/_data/` files.
#[derive(Debug, Default)]
struct JsonCache {
    posts: Option<String>,
    tags: Option<String>,
}

/// A post reference within the tag index.
///
/// Contains minimal information for listing posts by tag.
#[derive(Debug, Clone, Serialize)]
pub struct TaggedPost {
    /// Detail page URL path
    pub url: String,

    /// Post title
    pub title: &'static str,

    /// Publication date, "YYYY-MM-DD"
    pub published: &'static str,
}

/// Tag index: tag name → posts carrying that tag, in catalog order.
/// Sorted alphabetically by tag name.
pub type TagIndex = BTreeMap<&'static str, Vec<TaggedPost>>;

/// Read-only accessor layer over a post collection.
#[derive(Debug)]
pub struct ContentStore {
    posts: &'static [Post],
    json_cache: RwLock<JsonCache>,
}

impl ContentStore {
    pub fn new(posts: &'static [Post]) -> Self {
        Self {
            posts,
            json_cache: RwLock::new(JsonCache::default()),
        }
    }

    /// All posts in catalog order.
    pub fn all(&self) -> &'static [Post] {
        self.posts
    }

    /// Look up a post by identifier. `None` is the not-found signal,
    /// rendered as the fallback view - never an error.
    pub fn get(&self, id: &str) -> Option<&'static Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    /// All posts passing the category selector, in catalog order.
    pub fn by_category(&self, filter: CategoryFilter) -> Vec<&'static Post> {
        self.posts
            .iter()
            .filter(|post| filter.matches(post.category))
            .collect()
    }

    /// Posts flagged as featured, in catalog order.
    pub fn featured(&self) -> Vec<&'static Post> {
        self.posts.iter().filter(|post| post.featured).collect()
    }

    /// Posts whose tag set contains a case-insensitive substring match
    /// to the given fragment, in catalog order.
    pub fn by_tag(&self, fragment: &str) -> Vec<&'static Post> {
        self.posts
            .iter()
            .filter(|post| post.has_tag_fragment(fragment))
            .collect()
    }

    /// The sorted, deduplicated tag vocabulary.
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<_> = self.posts.iter().flat_map(|post| post.tags).copied().collect();
        tags.sort_unstable();
        tags.dedup();
        tags
    }

    /// Up to `limit` other posts sharing the category of the given post,
    /// excluding the post itself, in catalog order.
    ///
    /// Returns an empty list for an unknown identifier.
    pub fn related(&self, id: &str, limit: usize) -> Vec<&'static Post> {
        let Some(current) = self.get(id) else {
            return Vec::new();
        };

        self.by_category(CategoryFilter::Only(current.category))
            .into_iter()
            .filter(|post| post.id != current.id)
            .take(limit)
            .collect()
    }

    /// Build the tag index from the catalog.
    pub fn tag_index(&self) -> TagIndex {
        let mut index: TagIndex = BTreeMap::new();

        for post in self.posts {
            for tag in post.tags {
                let entries = index.entry(tag).or_default();
                // A post may list the same tag twice; index it once
                if entries.last().is_none_or(|last| last.url != post.url_path()) {
                    entries.push(TaggedPost {
                        url: post.url_path(),
                        title: post.title,
                        published: post.published,
                    });
                }
            }
        }

        index
    }

    /// Serialize the catalog to JSON with caching.
    ///
    /// First call generates JSON, subsequent calls return the cached value.
    pub fn posts_json(&self) -> String {
        // Fast path: check if cached (read lock only)
        {
            let cache = self.json_cache.read();
            if let Some(ref json) = cache.posts {
                return json.clone();
            }
        }

        // Slow path: generate and cache (upgrade to write lock)
        let mut cache = self.json_cache.write();
        // Double-check after acquiring write lock
        if let Some(ref json) = cache.posts {
            return json.clone();
        }

        let json =
            serde_json::to_string_pretty(self.posts).unwrap_or_else(|_| "[]".to_string());
        cache.posts = Some(json.clone());
        json
    }

    /// Serialize the tag index to JSON with caching.
    pub fn tags_json(&self) -> String {
        {
            let cache = self.json_cache.read();
            if let Some(ref json) = cache.tags {
                return json.clone();
            }
        }

        let mut cache = self.json_cache.write();
        if let Some(ref json) = cache.tags {
            return json.clone();
        }

        let index = self.tag_index();
        let json = serde_json::to_string_pretty(&index).unwrap_or_else(|_| "{}".to_string());
        cache.tags = Some(json.clone());
        json
    }

    /// Number of posts in the catalog.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Category;

    #[test]
    fn test_get_known_id() {
        let post = store().get("1").expect("post 1 exists");
        assert_eq!(post.id, "1");
        assert!(post.title.contains("React and TypeScript"));
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        assert!(store().get("999").is_none());
        assert!(store().get("").is_none());
    }

    #[test]
    fn test_get_returns_exactly_one() {
        for post in store().all() {
            let found = store().get(post.id).unwrap();
            assert_eq!(found.id, post.id);
        }
    }

    #[test]
    fn test_by_category_all_is_identity() {
        let all = store().by_category(CategoryFilter::All);
        assert_eq!(all.len(), store().len());
        // Order preserved
        for (got, expected) in all.iter().zip(store().all()) {
            assert_eq!(got.id, expected.id);
        }
    }

    #[test]
    fn test_by_category_filters() {
        let projects = store().by_category(CategoryFilter::Only(Category::Project));
        assert!(projects.iter().all(|p| p.category == Category::Project));
        let ids: Vec<_> = projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["2", "4", "6"]);

        let blogs = store().by_category(CategoryFilter::Only(Category::Blog));
        let ids: Vec<_> = blogs.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["1", "3", "5"]);
    }

    #[test]
    fn test_featured() {
        let featured = store().featured();
        assert!(featured.iter().all(|p| p.featured));
        let ids: Vec<_> = featured.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn test_by_tag_fragment_case_insensitive() {
        // "react" matches "React" and "React Native"
        let ids: Vec<_> = store().by_tag("react").iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["1", "2", "4", "5"]);

        // Same result regardless of case
        let upper: Vec<_> = store().by_tag("REACT").iter().map(|p| p.id).collect();
        assert_eq!(ids, upper);
    }

    #[test]
    fn test_by_tag_no_matches_is_empty() {
        assert!(store().by_tag("cobol").is_empty());
    }

    #[test]
    fn test_tags_sorted_deduped() {
        let tags = store().tags();
        let mut sorted = tags.clone();
        sorted.sort_unstable();
        assert_eq!(tags, sorted);

        let mut deduped = tags.clone();
        deduped.dedup();
        assert_eq!(tags, deduped);

        // "React" appears on three posts but once in the vocabulary
        assert_eq!(tags.iter().filter(|t| **t == "React").count(), 1);
    }

    #[test]
    fn test_related_same_category_excluding_self() {
        // Post 2 is a project; the other projects are 4 and 6
        let related: Vec<_> = store().related("2", 3).iter().map(|p| p.id).collect();
        assert_eq!(related, vec!["4", "6"]);

        // Post 1 is a blog post; the other blog posts are 3 and 5
        let related: Vec<_> = store().related("1", 3).iter().map(|p| p.id).collect();
        assert_eq!(related, vec!["3", "5"]);
    }

    #[test]
    fn test_related_respects_limit() {
        let related = store().related("1", 1);
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].id, "3");
    }

    #[test]
    fn test_related_unknown_id_is_empty() {
        assert!(store().related("999", 3).is_empty());
    }

    #[test]
    fn test_tag_index() {
        let index = store().tag_index();

        // Sorted by tag name
        let keys: Vec<_> = index.keys().copied().collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);

        assert_eq!(index["React"].len(), 3);
        assert_eq!(index["CSS"].len(), 1);
        assert_eq!(index["React"][0].url, "/post/1/");
    }

    #[test]
    fn test_posts_json_cached() {
        let first = store().posts_json();
        let second = store().posts_json();
        assert_eq!(first, second);
        assert!(first.contains("TaskFlow"));
        // Full bodies stay out of the search index
        assert!(!first.contains("reconciliation algorithm"));
    }

    #[test]
    fn test_tags_json() {
        let json = store().tags_json();
        assert!(json.contains("\"React\""));
        assert!(json.contains("/post/1/"));
    }
}
