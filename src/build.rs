//! Site building orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── plan_pages() ──► one PageSpec per page the site needs
//!     │
//!     ├── rayon::join
//!     │       ├── render + write every page (parallel)
//!     │       └── copy assets, ensure default stylesheet
//!     │
//!     ├── write_data_files() ──► /_data/posts.json, /_data/tags.json
//!     │
//!     └── rayon::join
//!             ├── build_rss()
//!             └── build_sitemap()
//! ```

use crate::{
    config::SiteConfig,
    content::{Category, ContentStore, Post, store},
    generator::{rss::build_rss, sitemap::build_sitemap},
    log, render,
    utils::{
        log::ProgressBars,
        minify::{MinifyType, minify},
        slug,
    },
};
use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicBool, Ordering},
};
use walkdir::WalkDir;

/// A page the build will render.
pub struct PageSpec {
    /// Site-relative route ("/", "/post/1/", "/404.html")
    pub route: String,

    /// Last-modified date for the sitemap, "YYYY-MM-DD"
    pub lastmod: Option<&'static str>,

    kind: PageKind,
}

enum PageKind {
    Home,
    Listing(Category),
    Tag(&'static str),
    Post(&'static Post),
    About,
    Search,
    NotFound,
}

impl PageSpec {
    /// Whether this page belongs in the sitemap.
    pub fn in_sitemap(&self) -> bool {
        !matches!(self.kind, PageKind::NotFound)
    }

    /// File path of this page under the output directory.
    ///
    /// Directory routes get an `index.html`; file routes are written as-is.
    fn output_path(&self, output: &Path) -> PathBuf {
        let relative = self.route.trim_start_matches('/');
        if self.route.ends_with('/') || relative.is_empty() {
            output.join(relative).join("index.html")
        } else {
            output.join(relative)
        }
    }

    /// Render this page to HTML.
    fn render(&self, config: &SiteConfig, store: &ContentStore) -> String {
        match &self.kind {
            PageKind::Home => render::home_page(config, store),
            PageKind::Listing(category) => render::category_page(config, store, *category),
            PageKind::Tag(tag) => render::tag_page(config, store, tag),
            PageKind::Post(post) => render::post_page(config, store, post),
            PageKind::About => render::about_page(config),
            PageKind::Search => render::search_shell_page(config),
            PageKind::NotFound => render::not_found_page(config),
        }
    }
}

/// Plan every page of the site: fixed views, one listing per tag in the
/// vocabulary, one detail page per post.
pub fn plan_pages(store: &ContentStore) -> Vec<PageSpec> {
    let fixed = [
        ("/", PageKind::Home),
        ("/blog/", PageKind::Listing(Category::Blog)),
        ("/projects/", PageKind::Listing(Category::Project)),
        ("/about/", PageKind::About),
        ("/search/", PageKind::Search),
        ("/404.html", PageKind::NotFound),
    ];

    let mut pages: Vec<PageSpec> = fixed
        .into_iter()
        .map(|(route, kind)| PageSpec {
            route: route.to_string(),
            lastmod: None,
            kind,
        })
        .collect();

    pages.extend(store.tags().into_iter().map(|tag| PageSpec {
        route: slug::tag_path(tag),
        lastmod: None,
        kind: PageKind::Tag(tag),
    }));

    pages.extend(store.all().iter().map(|post| PageSpec {
        route: post.url_path(),
        lastmod: Some(post.published),
        kind: PageKind::Post(post),
    }));

    pages
}

/// Build the entire site, rendering pages and processing assets in parallel.
pub fn build_site(config: &SiteConfig) -> Result<()> {
    let store = store();
    let output = &config.build.output;

    prepare_output(output, config.build.clean)?;

    let pages = plan_pages(store);
    let asset_files = collect_asset_files(&config.build.assets);

    log!("build"; "rendering {} pages", pages.len());
    let progress = ProgressBars::new(&[
        ("pages", pages.len()),
        // +1 for the default stylesheet check
        ("assets", asset_files.len() + 1),
    ]);

    let has_error = AtomicBool::new(false);

    let (pages_result, assets_result) = rayon::join(
        || {
            pages.par_iter().try_for_each(|page| {
                if has_error.load(Ordering::Relaxed) {
                    return Err(anyhow!("Aborted"));
                }
                if let Err(e) = write_page(page, config, store) {
                    if !has_error.swap(true, Ordering::Relaxed) {
                        log!("error"; "{}: {:#}", page.route, e);
                    }
                    return Err(anyhow!("Build failed"));
                }
                progress.inc(0);
                Ok(())
            })
        },
        || {
            asset_files.par_iter().try_for_each(|path| {
                if has_error.load(Ordering::Relaxed) {
                    return Err(anyhow!("Aborted"));
                }
                if let Err(e) = copy_asset(path, config) {
                    if !has_error.swap(true, Ordering::Relaxed) {
                        log!("error"; "{}: {:#}", path.display(), e);
                    }
                    return Err(anyhow!("Build failed"));
                }
                progress.inc(1);
                Ok(())
            })?;

            let result = ensure_default_stylesheet(output);
            progress.inc(1);
            result
        },
    );

    progress.finish();
    pages_result?;
    assets_result?;

    write_data_files(config, store)?;

    let (rss_result, sitemap_result) = rayon::join(
        || build_rss(config, store),
        || build_sitemap(config, &pages),
    );
    rss_result?;
    sitemap_result?;

    log_build_result(output)
}

/// Ensure the output directory exists.
///
/// When `clean` is true, removes all existing content first.
fn prepare_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clear output directory: {}", output.display()))?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))
}

/// Render one page, minify it, and write it under the output directory.
fn write_page(page: &PageSpec, config: &SiteConfig, store: &ContentStore) -> Result<()> {
    let html = page.render(config, store);
    let html = minify(MinifyType::Html(html.as_bytes()), config);

    let path = page.output_path(&config.build.output);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, &*html).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Collect all files under the user assets directory.
fn collect_asset_files(assets: &Path) -> Vec<PathBuf> {
    if !assets.is_dir() {
        return Vec::new();
    }
    WalkDir::new(assets)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect()
}

/// Copy one asset file into `output/assets/`, preserving its relative path.
fn copy_asset(path: &Path, config: &SiteConfig) -> Result<()> {
    let relative = path
        .strip_prefix(&config.build.assets)
        .with_context(|| format!("Asset outside assets dir: {}", path.display()))?;
    let dest = config.build.output.join("assets").join(relative);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(path, &dest).with_context(|| format!("Failed to copy {}", path.display()))?;
    Ok(())
}

/// Write the embedded stylesheet unless the user assets already provided one.
fn ensure_default_stylesheet(output: &Path) -> Result<()> {
    let css_path = output.join("assets").join("style.css");
    if css_path.exists() {
        return Ok(());
    }
    if let Some(parent) = css_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&css_path, render::DEFAULT_STYLESHEET)
        .with_context(|| format!("Failed to write {}", css_path.display()))
}

/// Write the JSON views consumed by the client-side search page.
fn write_data_files(config: &SiteConfig, store: &ContentStore) -> Result<()> {
    let data_dir = config.build.output.join(&config.build.data);
    fs::create_dir_all(&data_dir)?;

    fs::write(data_dir.join("posts.json"), store.posts_json())?;
    fs::write(data_dir.join("tags.json"), store.tags_json())?;
    Ok(())
}

/// Log build result based on output directory contents
fn log_build_result(output: &Path) -> Result<()> {
    let file_count = fs::read_dir(output)?.filter_map(Result::ok).count();

    if file_count == 0 {
        log!("warn"; "output is empty");
    } else {
        log!("build"; "done");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn make_config(root: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.base.title = "Portfolio".to_string();
        config.base.description = "Test portfolio".to_string();
        config.base.url = Some("https://example.com".to_string());
        config.build.output = root.join("public");
        config.build.assets = root.join("assets");
        config.build.minify = false;
        config
    }

    #[test]
    fn test_plan_pages_covers_everything() {
        let pages = plan_pages(store());
        let routes: Vec<_> = pages.iter().map(|p| p.route.as_str()).collect();

        for fixed in ["/", "/blog/", "/projects/", "/about/", "/search/", "/404.html"] {
            assert!(routes.contains(&fixed), "missing {fixed}");
        }
        for post in store().all() {
            assert!(routes.contains(&post.url_path().as_str()));
        }
        // One page per vocabulary tag
        assert!(routes.contains(&"/tags/react/"));
        assert!(routes.contains(&"/tags/web-development/"));
        assert_eq!(pages.len(), 6 + store().tags().len() + store().len());
    }

    #[test]
    fn test_page_output_paths() {
        let output = Path::new("/out");
        let pages = plan_pages(store());

        let home = pages.iter().find(|p| p.route == "/").unwrap();
        assert_eq!(home.output_path(output), Path::new("/out/index.html"));

        let post = pages.iter().find(|p| p.route == "/post/1/").unwrap();
        assert_eq!(
            post.output_path(output),
            Path::new("/out/post/1/index.html")
        );

        let not_found = pages.iter().find(|p| p.route == "/404.html").unwrap();
        assert_eq!(not_found.output_path(output), Path::new("/out/404.html"));
    }

    #[test]
    fn test_build_site_writes_full_tree() {
        let dir = tempdir().unwrap();
        let config = make_config(dir.path());

        build_site(&config).unwrap();

        let output = &config.build.output;
        assert!(output.join("index.html").exists());
        assert!(output.join("blog/index.html").exists());
        assert!(output.join("projects/index.html").exists());
        assert!(output.join("about/index.html").exists());
        assert!(output.join("search/index.html").exists());
        assert!(output.join("404.html").exists());
        assert!(output.join("post/1/index.html").exists());
        assert!(output.join("post/6/index.html").exists());
        assert!(output.join("tags/react/index.html").exists());
        assert!(output.join("_data/posts.json").exists());
        assert!(output.join("_data/tags.json").exists());
        assert!(output.join("assets/style.css").exists());
        assert!(output.join("feed.xml").exists());
        assert!(output.join("sitemap.xml").exists());
    }

    #[test]
    fn test_build_site_copies_user_assets() {
        let dir = tempdir().unwrap();
        let config = make_config(dir.path());

        fs::create_dir_all(config.build.assets.join("images")).unwrap();
        fs::write(config.build.assets.join("images/me.png"), b"png").unwrap();
        fs::write(config.build.assets.join("style.css"), "body{}").unwrap();

        build_site(&config).unwrap();

        let output = &config.build.output;
        assert!(output.join("assets/images/me.png").exists());
        // The user stylesheet wins over the embedded default
        assert_eq!(
            fs::read_to_string(output.join("assets/style.css")).unwrap(),
            "body{}"
        );
    }

    #[test]
    fn test_build_site_clean_removes_stale_files() {
        let dir = tempdir().unwrap();
        let mut config = make_config(dir.path());

        fs::create_dir_all(&config.build.output).unwrap();
        fs::write(config.build.output.join("stale.html"), "old").unwrap();

        config.build.clean = true;
        build_site(&config).unwrap();

        assert!(!config.build.output.join("stale.html").exists());
        assert!(config.build.output.join("index.html").exists());
    }

    #[test]
    fn test_feeds_disabled_are_not_written() {
        let dir = tempdir().unwrap();
        let mut config = make_config(dir.path());
        config.build.rss.enable = false;
        config.build.sitemap.enable = false;

        build_site(&config).unwrap();

        assert!(!config.build.output.join("feed.xml").exists());
        assert!(!config.build.output.join("sitemap.xml").exists());
    }
}
