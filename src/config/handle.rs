//! Global config with atomic replacement.
//!
//! Uses `arc-swap` for lock-free reads. The config is loaded once in `main`
//! and read from the dev server's request loop and rayon build workers;
//! `ArcSwap` keeps every reader wait-free without threading a reference
//! through each call site.
//!
//! # Usage
//!
//! ```ignore
//! use crate::config::cfg;
//!
//! let c = cfg();
//! build_site(&c)?;  // Arc auto-derefs to &SiteConfig
//! ```

use super::SiteConfig;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage with atomic replacement support.
///
/// Initialized with default config, then replaced with the loaded config in
/// main.
pub static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

/// Get current config as `Arc<SiteConfig>`.
///
/// Returns an `Arc` that keeps the config alive. Thread-safe and wait-free;
/// the Arc auto-derefs to `&SiteConfig`.
#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

/// Initialize global config (called once at startup).
///
/// This replaces the default config with the loaded one.
#[inline]
pub fn init_config(config: SiteConfig) {
    CONFIG.store(Arc::new(config));
}
