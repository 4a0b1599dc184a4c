//! The filter engine.
//!
//! Combines three independent predicates - category, tag selection, and
//! free-text search - conjunctively over the post collection. All predicates
//! are pure; the result preserves the collection's order and an empty result
//! is a valid "no matches" outcome, never an error.
//!
//! Tag *selection* uses exact membership (toggled tag chips), while the text
//! predicate compares case-insensitively against title, excerpt, and tags.

use std::collections::BTreeSet;

use crate::content::{CategoryFilter, Post};

/// A filter selection: what the visitor has narrowed the list down to.
///
/// Transient by design - built per request or per generated page, never
/// persisted.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Tri-state category selector.
    pub category: CategoryFilter,

    /// Selected tags. Empty means "no tag filter". Insertion order is
    /// irrelevant, hence the set.
    pub tags: BTreeSet<String>,

    /// Free-text query. Leading/trailing whitespace is insignificant.
    pub query: String,
}

impl Selection {
    /// The empty selection: matches every post.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// True when no predicate narrows anything down.
    pub fn is_empty(&self) -> bool {
        self.category == CategoryFilter::All
            && self.tags.is_empty()
            && self.query.trim().is_empty()
    }

    /// Whether a post satisfies all three predicates.
    pub fn matches(&self, post: &Post) -> bool {
        self.category.matches(post.category)
            && self.tags_match(post)
            && self.query_matches(post)
    }

    /// Tag predicate: vacuously true for an empty selection, otherwise
    /// any-match intersection with the post's tags.
    fn tags_match(&self, post: &Post) -> bool {
        self.tags.is_empty() || self.tags.iter().any(|tag| post.has_tag(tag))
    }

    /// Text predicate: vacuously true for a blank query, otherwise the
    /// lowercased query must be a substring of the lowercased title,
    /// excerpt, or any tag.
    fn query_matches(&self, post: &Post) -> bool {
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        post.title.to_lowercase().contains(&query)
            || post.excerpt.to_lowercase().contains(&query)
            || post.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
    }
}

/// Filter a post collection down to the ordered subset matching `selection`.
pub fn filter<'a>(posts: &'a [Post], selection: &Selection) -> Vec<&'a Post> {
    posts.iter().filter(|post| selection.matches(post)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Category, posts};

    fn ids(result: &[&Post]) -> Vec<&'static str> {
        result.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_empty_selection_is_identity() {
        let result = filter(posts(), &Selection::none());
        assert_eq!(ids(&result), vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_category_only() {
        let selection = Selection::none()
            .with_category(CategoryFilter::Only(Category::Project));
        let result = filter(posts(), &selection);

        assert!(result.iter().all(|p| p.category == Category::Project));
        assert_eq!(ids(&result), vec!["2", "4", "6"]);
    }

    #[test]
    fn test_category_all_preserves_order() {
        let selection = Selection::none().with_category(CategoryFilter::All);
        let result = filter(posts(), &selection);
        assert_eq!(ids(&result), vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_tag_selection_any_match() {
        // Posts tagged "CSS" or "Performance": 3 and 5. Any-match, not all-match.
        let selection = Selection::none().with_tag("CSS").with_tag("Performance");
        let result = filter(posts(), &selection);
        assert_eq!(ids(&result), vec!["3", "5"]);
    }

    #[test]
    fn test_tag_selection_is_exact() {
        // Chip selection is exact membership: "react" is not a tag, "React" is
        let lowercase = Selection::none().with_tag("react");
        assert!(filter(posts(), &lowercase).is_empty());

        let exact = Selection::none().with_tag("React");
        assert_eq!(ids(&filter(posts(), &exact)), vec!["1", "2", "5"]);
    }

    #[test]
    fn test_empty_tag_set_is_noop() {
        let selection = Selection {
            tags: BTreeSet::new(),
            ..Selection::none()
        };
        assert_eq!(filter(posts(), &selection).len(), posts().len());
    }

    #[test]
    fn test_query_matches_title_excerpt_and_tags() {
        // "react" (case-insensitive) hits titles, excerpts, and tags:
        // every post except the CSS layout one and FinanceAI
        let selection = Selection::none().with_query("react");
        assert_eq!(ids(&filter(posts(), &selection)), vec!["1", "2", "4", "5"]);

        // "grid" only appears in the CSS post
        let selection = Selection::none().with_query("grid");
        assert_eq!(ids(&filter(posts(), &selection)), vec!["3"]);
    }

    #[test]
    fn test_query_normalization_equivalence() {
        let variants = ["React", "react", " react ", "\tREACT\n"];
        let baseline = ids(&filter(posts(), &Selection::none().with_query("react")));

        for variant in variants {
            let result = filter(posts(), &Selection::none().with_query(variant));
            assert_eq!(ids(&result), baseline, "query {variant:?} diverged");
        }
    }

    #[test]
    fn test_blank_query_is_noop() {
        for blank in ["", "   ", "\t\n"] {
            let selection = Selection::none().with_query(blank);
            assert_eq!(filter(posts(), &selection).len(), posts().len());
        }
    }

    #[test]
    fn test_conjunction() {
        let selection = Selection::none()
            .with_category(CategoryFilter::Only(Category::Blog))
            .with_tag("React")
            .with_query("performance");
        let result = filter(posts(), &selection);

        // Only the performance deep-dive is a blog post tagged React
        // matching "performance"
        assert_eq!(ids(&result), vec!["5"]);
    }

    #[test]
    fn test_predicates_commute() {
        // Filtering by (c, T, q) at once equals filtering sequentially
        // in any order
        let category = Selection::none().with_category(CategoryFilter::Only(Category::Project));
        let tags = Selection::none().with_tag("React").with_tag("Firebase");
        let query = Selection::none().with_query("app");

        let combined = Selection::none()
            .with_category(CategoryFilter::Only(Category::Project))
            .with_tag("React")
            .with_tag("Firebase")
            .with_query("app");
        let at_once = ids(&filter(posts(), &combined));

        let orders: [[&Selection; 3]; 3] = [
            [&category, &tags, &query],
            [&query, &category, &tags],
            [&tags, &query, &category],
        ];
        for order in orders {
            let mut result: Vec<&Post> = posts().iter().collect();
            for step in order {
                result.retain(|post| step.matches(post));
            }
            assert_eq!(ids(&result), at_once);
        }
    }

    #[test]
    fn test_empty_result_is_valid() {
        // A blog post tagged Firebase does not exist; empty, not an error
        let selection = Selection::none()
            .with_category(CategoryFilter::Only(Category::Blog))
            .with_tag("Firebase");
        assert!(filter(posts(), &selection).is_empty());
    }

    #[test]
    fn test_is_empty() {
        assert!(Selection::none().is_empty());
        assert!(Selection::none().with_query("   ").is_empty());
        assert!(!Selection::none().with_tag("React").is_empty());
        assert!(
            !Selection::none()
                .with_category(CategoryFilter::Only(Category::Blog))
                .is_empty()
        );
    }
}
