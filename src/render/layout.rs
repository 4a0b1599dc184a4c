//! Page shell: layout template, navbar, footer, escaping.

use crate::config::SiteConfig;

/// Page layout shell (embedded at compile time)
const LAYOUT_TEMPLATE: &str = include_str!("embed/layout.html");

/// Default stylesheet, written to `assets/style.css` when the user supplies
/// none of their own.
pub const DEFAULT_STYLESHEET: &str = include_str!("embed/style.css");

/// Navbar entries: (label, url path)
const NAV_ITEMS: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Blog", "/blog/"),
    ("Projects", "/projects/"),
    ("About", "/about/"),
];

/// Escape text for safe interpolation into HTML.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Assemble a complete HTML page around a body fragment.
///
/// `active` is the URL path of the current top-level section, used to
/// highlight the matching navbar link.
pub fn render_page(
    config: &SiteConfig,
    title: &str,
    description: &str,
    active: &str,
    body: &str,
) -> String {
    let site_title = escape(&config.base.title);
    let page_title = if title.is_empty() {
        site_title.clone()
    } else {
        format!("{} | {}", escape(title), site_title)
    };

    LAYOUT_TEMPLATE
        .replace("{lang}", &escape(&config.base.language))
        .replace("{title}", &page_title)
        .replace("{description}", &escape(description))
        .replace("{site_title}", &site_title)
        .replace("{rss_link}", &rss_link(config))
        .replace("{nav_links}", &nav_links(active))
        .replace("{footer}", &footer(config))
        .replace("{body}", body)
}

/// `<link rel="alternate">` for the rss feed, empty when disabled.
fn rss_link(config: &SiteConfig) -> String {
    if !config.build.rss.enable {
        return String::new();
    }
    let path = config.build.rss.path.to_string_lossy();
    format!(
        r#"<link rel="alternate" type="application/rss+xml" title="{}" href="/{}">"#,
        escape(&config.base.title),
        escape(&path),
    )
}

/// Navbar links with the active section highlighted.
fn nav_links(active: &str) -> String {
    NAV_ITEMS
        .iter()
        .map(|(label, path)| {
            let class = if *path == active { r#" class="active""# } else { "" };
            format!(r#"<a href="{path}"{class}>{label}</a>"#)
        })
        .collect::<Vec<_>>()
        .join("\n                ")
}

/// Site footer: brand blurb, quick links, categories, legal line.
fn footer(config: &SiteConfig) -> String {
    let quick_links = NAV_ITEMS
        .iter()
        .map(|(label, path)| format!(r#"<a href="{path}">{label}</a>"#))
        .collect::<Vec<_>>()
        .join("<br>\n                    ");

    let legal = if config.base.copyright.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="legal">&copy; {}</div>"#,
            escape(&config.base.copyright)
        )
    };

    format!(
        r#"            <div class="footer-grid">
                <div>
                    <h4>{title}</h4>
                    <p>{description}</p>
                </div>
                <div>
                    <h4>Quick Links</h4>
                    {quick_links}
                </div>
                <div>
                    <h4>Categories</h4>
                    <a href="/blog/">Blog</a><br>
                    <a href="/projects/">Projects</a>
                </div>
            </div>
            {legal}"#,
        title = escape(&config.base.title),
        description = escape(&config.base.description),
    )
}
