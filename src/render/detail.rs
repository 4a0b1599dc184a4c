//! Detail views: a single post, and the not-found fallback.

use super::layout::{escape, render_page};
use super::list::display_date;
use crate::{
    config::SiteConfig,
    content::{ContentStore, Post},
    utils::slug,
};

/// How many related posts a detail page shows.
const RELATED_LIMIT: usize = 3;

/// A post's detail page: hero, body, tags, related posts.
pub fn post_page(config: &SiteConfig, store: &ContentStore, post: &Post) -> String {
    let mut body = format!(
        r#"<section class="post-hero">
    <img src="{image}" alt="">
    <div class="container">
        <a href="{category_path}" class="badge badge-category">{category}</a>
        <h1>{title}</h1>
        <p class="lede">{excerpt}</p>
        <div class="post-meta">
            <span>{date}</span>
            <span>{read_time}</span>
        </div>
    </div>
</section>
<section class="section">
    <div class="container">
        <article class="post-content">{content}</article>
        <div class="post-tags">
            <h3>Tags</h3>
            <div class="tag-list">
                {tags}
            </div>
        </div>
"#,
        image = escape(post.image),
        category_path = post.category.listing_path(),
        category = post.category,
        title = escape(post.title),
        excerpt = escape(post.excerpt),
        date = display_date(post),
        read_time = escape(post.read_time),
        // Verbatim body; paragraph breaks are preserved by `white-space: pre-line`
        content = escape(post.content),
        tags = tag_links(post),
    );

    let related = store.related(post.id, RELATED_LIMIT);
    if !related.is_empty() {
        body.push_str(&format!(
            r#"        <div class="related">
            <h3>{heading}</h3>
            <div class="post-grid">
{cards}
            </div>
        </div>
"#,
            heading = post.category.related_heading(),
            cards = related
                .iter()
                .map(|other| related_card(other))
                .collect::<Vec<_>>()
                .join("\n"),
        ));
    }

    body.push_str("    </div>\n</section>\n");

    render_page(config, post.title, post.excerpt, "", &body)
}

/// The fallback view for unknown routes and unknown post identifiers.
pub fn not_found_page(config: &SiteConfig) -> String {
    let body = r#"<section class="section">
    <div class="container no-matches">
        <h1>Post Not Found</h1>
        <p>The post you're looking for doesn't exist.</p>
        <a href="/">Return Home</a>
    </div>
</section>
"#;
    render_page(config, "Not Found", "Page not found", "", body)
}

/// Tag badges linking to tag listing pages.
fn tag_links(post: &Post) -> String {
    post.tags
        .iter()
        .map(|tag| {
            format!(
                r#"<a href="{path}">{label}</a>"#,
                path = slug::tag_path(tag),
                label = escape(tag),
            )
        })
        .collect::<Vec<_>>()
        .join("\n                ")
}

/// A compact card for the related-posts block.
fn related_card(post: &Post) -> String {
    format!(
        r#"                <a class="post-card" href="{url}">
                    <img src="{image}" alt="{title}" loading="lazy">
                    <div class="post-card-body">
                        <h3>{title}</h3>
                        <p class="excerpt">{excerpt}</p>
                    </div>
                </a>"#,
        url = post.url_path(),
        image = escape(post.image),
        title = escape(post.title),
        excerpt = escape(post.excerpt),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::store;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.base.title = "Portfolio".to_string();
        config
    }

    #[test]
    fn test_post_page_renders_fields() {
        let post = store().get("1").unwrap();
        let html = post_page(&test_config(), store(), post);

        assert!(html.contains("Building Modern Web Applications"));
        assert!(html.contains("March 15, 2024"));
        assert!(html.contains("8 min read"));
        assert!(html.contains(r#"href="/blog/""#));
        // Body text is present and escaped, not interpreted
        assert!(html.contains("## Why TypeScript?"));
    }

    #[test]
    fn test_post_page_related_same_category() {
        let post = store().get("2").unwrap();
        let html = post_page(&test_config(), store(), post);

        assert!(html.contains("Related Projects"));
        assert!(html.contains("/post/4/"));
        assert!(html.contains("/post/6/"));
        // Blog posts are not related to a project
        assert!(!html.contains("/post/3/"));
    }

    #[test]
    fn test_post_page_related_heading_for_blog() {
        let post = store().get("3").unwrap();
        let html = post_page(&test_config(), store(), post);
        assert!(html.contains("Related Articles"));
    }

    #[test]
    fn test_not_found_page() {
        let html = not_found_page(&test_config());
        assert!(html.contains("Post Not Found"));
        assert!(html.contains("Return Home"));
    }

    #[test]
    fn test_tag_links_cover_all_tags() {
        let post = store().get("6").unwrap();
        let links = tag_links(post);
        assert!(links.contains(r#"href="/tags/ai-ml/""#));
        assert!(links.contains(r#"href="/tags/data-science/""#));
    }
}
