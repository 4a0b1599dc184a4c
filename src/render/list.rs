//! List views: home, category/tag listings, search results.

use super::layout::{escape, render_page};
use crate::{
    config::SiteConfig,
    content::{Category, CategoryFilter, ContentStore, Post},
    filter::{self, Selection},
    utils::{date::Date, slug},
};

/// Search page fragment with the client-side JSON lookup (embedded)
const SEARCH_TEMPLATE: &str = include_str!("embed/search.html");

/// Hero blurbs per category, mirrored in the listing pages.
const BLOG_BLURB: &str = "Insights, tutorials, and thoughts on modern web development, design patterns, and emerging technologies.";
const PROJECTS_BLURB: &str = "A showcase of my latest work - from full-stack applications to innovative solutions that solve real-world problems.";

// ============================================================================
// Pages
// ============================================================================

/// The home page: hero, feature blurbs, featured posts, full listing.
pub fn home_page(config: &SiteConfig, store: &ContentStore) -> String {
    let mut body = String::with_capacity(16 * 1024);

    body.push_str(
        r#"<section class="hero">
    <div class="container">
        <h1>Building the Future<br>One Line at a Time</h1>
        <p>Exploring modern web development, sharing insights, and showcasing innovative projects that push the boundaries of what's possible.</p>
        <div class="actions">
            <a class="primary" href="/projects/">View Projects</a>
            <a class="outline" href="/blog/">Read Blog</a>
        </div>
    </div>
</section>
<section class="section alt">
    <div class="container">
        <div class="section-heading">
            <h2>What I Do</h2>
            <p>Passionate about creating exceptional digital experiences through code, design, and innovation.</p>
        </div>
        <div class="features">
            <div class="feature">
                <h3>Full-Stack Development</h3>
                <p>Building scalable web applications with modern technologies like React, TypeScript, and Node.js.</p>
            </div>
            <div class="feature">
                <h3>UI/UX Design</h3>
                <p>Creating intuitive and beautiful user interfaces that provide exceptional user experiences.</p>
            </div>
            <div class="feature">
                <h3>Performance Optimization</h3>
                <p>Optimizing applications for speed, accessibility, and exceptional user experience across all devices.</p>
            </div>
        </div>
    </div>
</section>
"#,
    );

    let featured = store.featured();
    if !featured.is_empty() {
        body.push_str(
            r#"<section class="section">
    <div class="container">
        <div class="section-heading">
            <h2>Featured Posts</h2>
            <p>Highlighting the most impactful projects and insights</p>
        </div>
"#,
        );
        body.push_str(&post_grid(&featured, true));
        body.push_str("    </div>\n</section>\n");
    }

    body.push_str(&listing_section(
        store,
        &Selection::none(),
        "All Posts",
        "Explore my latest thoughts on web development, projects, and technology",
    ));

    render_page(config, "", &config.base.description, "/", &body)
}

/// A category listing page (`/blog/` or `/projects/`).
pub fn category_page(config: &SiteConfig, store: &ContentStore, category: Category) -> String {
    let (title, blurb) = match category {
        Category::Blog => ("Blog", BLOG_BLURB),
        Category::Project => ("Projects", PROJECTS_BLURB),
    };

    let mut body = format!(
        r#"<section class="hero">
    <div class="container">
        <h1>{title}</h1>
        <p>{blurb}</p>
    </div>
</section>
"#,
    );

    let selection = Selection::none().with_category(CategoryFilter::Only(category));
    body.push_str(&listing_section(store, &selection, "All Posts", blurb));

    render_page(config, title, blurb, category.listing_path(), &body)
}

/// A tag listing page (`/tags/<slug>/`).
pub fn tag_page(config: &SiteConfig, store: &ContentStore, tag: &str) -> String {
    let selection = Selection::none().with_tag(tag);
    let matches = filter::filter(store.all(), &selection);

    let heading = format!("Posts tagged \u{201c}{}\u{201d}", escape(tag));
    let count_line = format!("{} posts with this tag", matches.len());

    let mut body = format!(
        r#"<section class="section">
    <div class="container">
        <div class="section-heading">
            <h2>{heading}</h2>
            <p>{count_line}</p>
        </div>
"#,
    );
    if matches.is_empty() {
        body.push_str(&no_matches());
    } else {
        body.push_str(&post_grid(&matches, false));
    }
    body.push_str("    </div>\n</section>\n");

    let description = format!("Posts tagged {tag}");
    render_page(config, tag, &description, "", &body)
}

/// The static search page: a shell whose script filters
/// `/_data/posts.json` in the browser.
pub fn search_shell_page(config: &SiteConfig) -> String {
    render_page(config, "Search", "Search posts", "", SEARCH_TEMPLATE)
}

/// Tag-fragment results rendered server-side by the dev server.
///
/// Unlike the generated tag pages (exact membership), this uses the store's
/// case-insensitive fragment lookup, so `/search?tag=native` finds
/// "React Native".
pub fn tag_results_page(config: &SiteConfig, store: &ContentStore, fragment: &str) -> String {
    let matches = store.by_tag(fragment);

    let heading = format!("Posts tagged \u{201c}{}\u{201d}", escape(fragment));
    let count_line = format!("Found {} posts with matching tags", matches.len());

    let mut body = format!(
        r#"<section class="section">
    <div class="container">
        <div class="section-heading">
            <h2>{heading}</h2>
            <p>{count_line}</p>
        </div>
"#,
    );
    if matches.is_empty() {
        body.push_str(&no_matches());
    } else {
        body.push_str(&post_grid(&matches, false));
    }
    body.push_str("    </div>\n</section>\n");

    render_page(config, fragment, "Posts by tag", "", &body)
}

/// Search results rendered server-side by the dev server's `/search` route.
pub fn search_results_page(
    config: &SiteConfig,
    store: &ContentStore,
    selection: &Selection,
) -> String {
    let matches = filter::filter(store.all(), selection);

    let query = selection.query.trim();
    let heading = if query.is_empty() {
        "Search Results".to_string()
    } else {
        format!("Search Results for \u{201c}{}\u{201d}", escape(query))
    };
    let count_line = format!("Found {} posts matching your search", matches.len());

    let mut body = format!(
        r#"<section class="section">
    <div class="container">
        <div class="section-heading">
            <h2>{heading}</h2>
            <p>{count_line}</p>
        </div>
"#,
    );
    if matches.is_empty() {
        body.push_str(&no_matches());
    } else {
        body.push_str(&post_grid(&matches, false));
    }
    body.push_str("    </div>\n</section>\n");

    render_page(config, "Search", "Search results", "", &body)
}

// ============================================================================
// Fragments
// ============================================================================

/// Listing section: filter sidebar next to the matching post grid.
fn listing_section(
    store: &ContentStore,
    selection: &Selection,
    heading: &str,
    sub: &str,
) -> String {
    let matches = filter::filter(store.all(), selection);

    let grid = if matches.is_empty() {
        no_matches()
    } else {
        post_grid(&matches, false)
    };

    format!(
        r#"<section class="section alt">
    <div class="container">
        <div class="section-heading">
            <h2>{heading}</h2>
            <p>{sub}</p>
        </div>
        <div class="listing">
{sidebar}
            <div>
{grid}
            </div>
        </div>
    </div>
</section>
"#,
        heading = escape(heading),
        sub = escape(sub),
        sidebar = filter_bar(store, selection),
    )
}

/// The filter sidebar: category links and the tag vocabulary.
///
/// In the generated site each chip is a link to the corresponding listing
/// page; the active entries reflect the page's own selection.
fn filter_bar(store: &ContentStore, selection: &Selection) -> String {
    let category_link = |label: &str, path: &str, filter: CategoryFilter| {
        let class = if selection.category == filter { r#" class="active""# } else { "" };
        format!(r#"<a href="{path}"{class}>{label}</a>"#)
    };

    let categories = [
        category_link("All Posts", "/", CategoryFilter::All),
        category_link("Blog", "/blog/", CategoryFilter::Only(Category::Blog)),
        category_link("Projects", "/projects/", CategoryFilter::Only(Category::Project)),
    ]
    .join("\n                    ");

    let tags = store
        .tags()
        .iter()
        .map(|tag| {
            let class = if selection.tags.contains(*tag) { r#" class="active""# } else { "" };
            format!(
                r#"<a href="{path}"{class}>{label}</a>"#,
                path = slug::tag_path(tag),
                label = escape(tag),
            )
        })
        .collect::<Vec<_>>()
        .join("\n                    ");

    format!(
        r#"            <aside class="filter-bar">
                <div class="group">
                    <h3>Category</h3>
                    <div class="tag-list">
                    {categories}
                    </div>
                </div>
                <div class="group">
                    <h3>Tags</h3>
                    <div class="tag-list">
                    {tags}
                    </div>
                </div>
            </aside>"#,
    )
}

/// A grid of post cards.
fn post_grid(posts: &[&Post], featured_variant: bool) -> String {
    let cards = posts
        .iter()
        .map(|post| post_card(post, featured_variant))
        .collect::<Vec<_>>()
        .join("\n");
    format!("        <div class=\"post-grid\">\n{cards}\n        </div>\n")
}

/// The "no matches" fallback: a valid outcome, not an error.
fn no_matches() -> String {
    r#"        <div class="no-matches">
            <p>No posts found matching your criteria.</p>
            <a href="/">Clear Filters</a>
        </div>
"#
    .to_string()
}

/// A single post card.
fn post_card(post: &Post, featured_variant: bool) -> String {
    let card_class = if featured_variant { "post-card featured" } else { "post-card" };
    let featured_badge = if post.featured {
        r#"<span class="badge badge-featured">Featured</span> "#
    } else {
        ""
    };

    // Cards show at most three tags, five on featured cards
    let tag_limit = if featured_variant { 5 } else { 3 };
    let tags = post
        .tags
        .iter()
        .take(tag_limit)
        .map(|tag| {
            format!(
                r#"<a href="{path}">{label}</a>"#,
                path = slug::tag_path(tag),
                label = escape(tag),
            )
        })
        .collect::<Vec<_>>()
        .join("\n                ");

    format!(
        r#"        <article class="{card_class}">
            <a href="{url}"><img src="{image}" alt="{title}" loading="lazy"></a>
            <div class="post-card-body">
                {featured_badge}<span class="badge badge-category">{category}</span>
                <div class="post-meta">
                    <span>{date}</span>
                    <span>{read_time}</span>
                </div>
                <h3><a href="{url}">{title}</a></h3>
                <p class="excerpt">{excerpt}</p>
                <div class="tag-list">
                {tags}
                </div>
            </div>
        </article>"#,
        url = post.url_path(),
        image = escape(post.image),
        title = escape(post.title),
        category = post.category,
        date = display_date(post),
        read_time = escape(post.read_time),
        excerpt = escape(post.excerpt),
    )
}

/// Publication date in long form ("March 15, 2024").
pub(super) fn display_date(post: &Post) -> String {
    Date::parse(post.published)
        .map(Date::to_long_display)
        .unwrap_or_else(|| post.published.to_string())
}
