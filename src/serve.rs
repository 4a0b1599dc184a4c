//! Development server for previewing the generated site.
//!
//! A lightweight HTTP server built on `tiny_http`:
//!
//! - Static file serving from the build output directory
//! - Automatic `index.html` resolution for directories
//! - A dynamic `/search` route that runs the filter engine per request
//! - The generated `404.html` as the not-found fallback
//! - Graceful shutdown on Ctrl+C
//!
//! Everything except `/search` is served straight from disk; the search route
//! parses the query string into a filter `Selection` and renders the result
//! list on the fly, which exercises the same engine the static search page
//! uses client-side.

use crate::{
    config::{SiteConfig, cfg},
    content::{CategoryFilter, store},
    filter::Selection,
    log,
    render::{search_results_page, tag_results_page},
};
use anyhow::{Context, Result};
use std::{
    fs,
    io::Cursor,
    net::SocketAddr,
    path::Path,
    sync::Arc,
};
use tiny_http::{Header, Request, Response, Server, StatusCode};

/// Try binding to port, retry with incremented port if in use
const MAX_PORT_RETRIES: u16 = 10;

// ============================================================================
// Server Entry Point
// ============================================================================

/// Start the development server.
///
/// Binds to the configured interface and port (with auto-retry on port
/// conflict), sets up the Ctrl+C handler, then blocks in the request loop.
pub fn serve_site() -> Result<()> {
    let c = cfg();
    let interface: std::net::IpAddr = c.serve.interface.parse()?;
    let base_port = c.serve.port;

    let (server, addr) = try_bind_port(interface, base_port, MAX_PORT_RETRIES)?;
    let server = Arc::new(server);

    // Set up Ctrl+C handler for graceful shutdown
    let server_for_signal = Arc::clone(&server);
    ctrlc::set_handler(move || {
        log!("serve"; "shutting down...");
        server_for_signal.unblock();
    })
    .context("Failed to set Ctrl+C handler")?;

    log!("serve"; "http://{}", addr);

    // Handle requests in main thread (blocks until Ctrl+C)
    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, &cfg()) {
            log!("serve"; "request error: {e}");
        }
    }

    Ok(())
}

/// Try to bind to a port, retrying with incremented port numbers if in use.
fn try_bind_port(
    interface: std::net::IpAddr,
    base_port: u16,
    max_retries: u16,
) -> Result<(Server, SocketAddr)> {
    for offset in 0..max_retries {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(_) if offset + 1 < max_retries => {
                // Will retry silently
                continue;
            }
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "Failed to bind after {} attempts (ports {}-{}): {}",
                    max_retries,
                    base_port,
                    port,
                    e
                ));
            }
        }
    }
    unreachable!()
}

// ============================================================================
// Request Handling
// ============================================================================

/// Handle a single HTTP request.
///
/// Request resolution order:
/// 1. `/search` with a query string → run the filter engine, render results
/// 2. Exact file match → serve file
/// 3. Directory with index.html → serve index.html
/// 4. Nothing found → the generated 404 page
fn handle_request(request: Request, config: &SiteConfig) -> Result<()> {
    let serve_root = &config.build.output;

    // Decode URL-encoded characters (e.g., %20 → space)
    let url_path = urlencoding::decode(request.url())
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_default();

    // Split query string (e.g., ?q=react) before resolving the path
    let (path, query) = match url_path.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (url_path.as_str(), None),
    };
    let request_path = path.trim_matches('/');

    // Dynamic search route: evaluate the filter engine server-side
    if request_path == "search" {
        if let Some(query) = query {
            // Tag-fragment lookup takes precedence over free-text search
            if let Some((_, fragment)) =
                parse_query(query).into_iter().find(|(key, _)| key.as_str() == "tag")
            {
                let html = tag_results_page(config, store(), &fragment);
                return serve_html(request, html);
            }

            let selection = parse_selection(query);
            // An empty selection falls through to the static search shell
            if !selection.is_empty() {
                let html = search_results_page(config, store(), &selection);
                return serve_html(request, html);
            }
        }
    }

    let local_path = serve_root.join(request_path);

    // Try to serve the file directly
    if local_path.is_file() {
        return serve_file(request, &local_path);
    }

    // If it's a directory, try index.html
    if local_path.is_dir() {
        let index_path = local_path.join("index.html");
        if index_path.is_file() {
            return serve_file(request, &index_path);
        }
    }

    serve_not_found(request, serve_root)
}

/// Parse a filter `Selection` from the search route's query string.
///
/// Recognized parameters: `q` (free text), `category` (all/blog/project),
/// `tags` (comma-separated exact tag names). Unknown parameters and unknown
/// category values are ignored.
fn parse_selection(query: &str) -> Selection {
    let mut selection = Selection::none();

    for (key, value) in parse_query(query) {
        match key.as_str() {
            "q" => selection = selection.with_query(value),
            "category" => {
                if let Some(filter) = CategoryFilter::parse(&value) {
                    selection = selection.with_category(filter);
                }
            }
            "tags" => {
                for tag in value.split(',').map(str::trim).filter(|tag| !tag.is_empty()) {
                    selection = selection.with_tag(tag);
                }
            }
            _ => {}
        }
    }

    selection
}

/// Split a query string into decoded key/value pairs.
///
/// The request URL was percent-decoded as a whole already; this handles the
/// `+`-for-space convention of form submissions.
fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (key.replace('+', " "), value.replace('+', " "))
        })
        .collect()
}

// ============================================================================
// Response Helpers
// ============================================================================

/// Serve a file with appropriate content type.
fn serve_file(request: Request, path: &Path) -> Result<()> {
    let content = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let content_type = guess_content_type(path);

    let response = Response::from_data(content)
        .with_header(Header::from_bytes("Content-Type", content_type).unwrap());

    request.respond(response)?;
    Ok(())
}

/// Serve HTML content.
fn serve_html(request: Request, content: String) -> Result<()> {
    let response = Response::from_string(content)
        .with_header(Header::from_bytes("Content-Type", "text/html; charset=utf-8").unwrap());
    request.respond(response)?;
    Ok(())
}

/// Serve the generated 404 page with a 404 status, falling back to plain
/// text when the site has not been built.
fn serve_not_found(request: Request, serve_root: &Path) -> Result<()> {
    let fallback = serve_root.join("404.html");

    if let Ok(content) = fs::read(&fallback) {
        let response = Response::from_data(content)
            .with_status_code(StatusCode(404))
            .with_header(
                Header::from_bytes("Content-Type", "text/html; charset=utf-8").unwrap(),
            );
        request.respond(response)?;
        return Ok(());
    }

    let response = Response::new(
        StatusCode(404),
        vec![Header::from_bytes("Content-Type", "text/plain").unwrap()],
        Cursor::new("404 Not Found"),
        Some(13),
        None,
    );
    request.respond(response)?;
    Ok(())
}

// ============================================================================
// Content Type Detection
// ============================================================================

/// Guess MIME content type from file extension.
///
/// Returns `application/octet-stream` for unknown extensions.
fn guess_content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        // Web content
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "application/javascript; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        Some("xml") => "application/xml; charset=utf-8",

        // Images
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",

        // Documents
        Some("txt") => "text/plain; charset=utf-8",

        // Default binary
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Category;

    #[test]
    fn test_parse_query() {
        let pairs = parse_query("q=react&category=blog");
        assert_eq!(
            pairs,
            vec![
                ("q".to_string(), "react".to_string()),
                ("category".to_string(), "blog".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_query_plus_as_space() {
        let pairs = parse_query("q=web+development");
        assert_eq!(pairs[0].1, "web development");
    }

    #[test]
    fn test_parse_query_empty_and_bare_keys() {
        assert!(parse_query("").is_empty());
        let pairs = parse_query("q");
        assert_eq!(pairs, vec![("q".to_string(), String::new())]);
    }

    #[test]
    fn test_parse_selection_full() {
        let selection = parse_selection("q=+React+&category=blog&tags=CSS,Performance");

        assert_eq!(selection.query, " React ");
        assert_eq!(
            selection.category,
            CategoryFilter::Only(Category::Blog)
        );
        assert!(selection.tags.contains("CSS"));
        assert!(selection.tags.contains("Performance"));
    }

    #[test]
    fn test_parse_selection_ignores_unknown() {
        let selection = parse_selection("category=nope&utm_source=x&q=css");
        assert_eq!(selection.category, CategoryFilter::All);
        assert_eq!(selection.query, "css");
        assert!(selection.tags.is_empty());
    }

    #[test]
    fn test_parse_selection_empty_is_noop_filter() {
        let selection = parse_selection("");
        assert!(selection.is_empty());
    }

    #[test]
    fn test_guess_content_type() {
        assert_eq!(
            guess_content_type(Path::new("index.html")),
            "text/html; charset=utf-8"
        );
        assert_eq!(
            guess_content_type(Path::new("assets/style.css")),
            "text/css; charset=utf-8"
        );
        assert_eq!(
            guess_content_type(Path::new("_data/posts.json")),
            "application/json; charset=utf-8"
        );
        assert_eq!(
            guess_content_type(Path::new("feed.xml")),
            "application/xml; charset=utf-8"
        );
        assert_eq!(
            guess_content_type(Path::new("unknown.bin")),
            "application/octet-stream"
        );
    }
}
