//! Tag slugification for URL paths.
//!
//! Tags in the catalog are free-form display strings ("AI/ML", "Node.js",
//! "Real-time"). Listing pages live under `/tags/<slug>/`, so each tag needs a
//! stable, URL-safe form.

use deunicode::deunicode;

/// Convert a display string to a URL slug.
///
/// Pipeline: transliterate to ASCII, lowercase, collapse every run of
/// non-alphanumeric characters into a single `-`, trim leading/trailing `-`.
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(text);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_sep = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            pending_sep = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }

    slug
}

/// URL path of the listing page for a tag.
///
/// Example: `"Node.js"` → `"/tags/node-js/"`
pub fn tag_path(tag: &str) -> String {
    format!("/tags/{}/", slugify(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_simple() {
        assert_eq!(slugify("React"), "react");
        assert_eq!(slugify("Performance"), "performance");
    }

    #[test]
    fn test_slugify_multi_word() {
        assert_eq!(slugify("Web Development"), "web-development");
        assert_eq!(slugify("Responsive Design"), "responsive-design");
    }

    #[test]
    fn test_slugify_punctuation() {
        assert_eq!(slugify("Node.js"), "node-js");
        assert_eq!(slugify("AI/ML"), "ai-ml");
        assert_eq!(slugify("Real-time"), "real-time");
    }

    #[test]
    fn test_slugify_collapses_separator_runs() {
        assert_eq!(slugify("a -- b"), "a-b");
        assert_eq!(slugify("  spaced  out  "), "spaced-out");
    }

    #[test]
    fn test_slugify_trims_separators() {
        assert_eq!(slugify("-leading"), "leading");
        assert_eq!(slugify("trailing!"), "trailing");
    }

    #[test]
    fn test_slugify_unicode() {
        assert_eq!(slugify("Café"), "cafe");
        assert_eq!(slugify("Füll-Stack"), "full-stack");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_tag_path() {
        assert_eq!(tag_path("TypeScript"), "/tags/typescript/");
        assert_eq!(tag_path("AI/ML"), "/tags/ai-ml/");
    }
}
