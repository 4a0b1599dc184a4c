//! Stateless HTML rendering.
//!
//! Every page is a pure function of (config, content store, filter
//! selection). Pages are assembled from embedded template shells with
//! placeholder replacement; all interpolated content is HTML-escaped.

mod about;
mod detail;
mod layout;
mod list;

pub use about::about_page;
pub use detail::{not_found_page, post_page};
pub use layout::DEFAULT_STYLESHEET;
pub use list::{
    category_page, home_page, search_results_page, search_shell_page, tag_page,
    tag_results_page,
};
