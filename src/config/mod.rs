//! Site configuration management for `vitrine.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                      |
//! |-------------|----------------------------------------------|
//! | `[base]`    | Site metadata (title, author, url)           |
//! | `[build]`   | Output paths, minify, rss, sitemap           |
//! | `[serve]`   | Development server (port, interface)         |
//! | `[extra]`   | User-defined custom fields                   |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "Portfolio"
//! description = "Modern web development projects and technical insights"
//! url = "https://example.com"
//!
//! [build]
//! output = "public"
//! minify = true
//!
//! [build.rss]
//! enable = true
//!
//! [serve]
//! port = 5277
//!
//! [extra]
//! analytics_id = "UA-12345"
//! ```

mod base;
mod build;
pub mod defaults;
mod error;
mod handle;
mod serve;

pub use handle::{cfg, init_config};

// Internal imports used in this module
use base::BaseConfig;
use build::BuildConfig;
use error::ConfigError;
use serve::ServeConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing vitrine.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Development server settings
    #[serde(default)]
    pub serve: ServeConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Get CLI arguments reference
    pub fn get_cli(&self) -> &'static Cli {
        self.cli.unwrap()
    }

    /// Join a site-relative path (e.g. "/post/3/") onto the base URL.
    ///
    /// Falls back to the bare path when no base URL is configured.
    pub fn full_url(&self, path: &str) -> String {
        match &self.base.url {
            Some(url) => format!("{}{}", url.trim_end_matches('/'), path),
            None => path.to_owned(),
        }
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        // Determine the final root path based on command
        let root = match &cli.command {
            Commands::Init { name: Some(name) } => {
                let base = cli
                    .root
                    .as_ref()
                    .cloned()
                    .unwrap_or_else(|| self.get_root().to_owned());
                base.join(name)
            }
            _ => cli
                .root
                .as_ref()
                .cloned()
                .unwrap_or_else(|| self.get_root().to_owned()),
        };

        self.set_root(&root);
        self.update_path_with_root(&root);

        match &cli.command {
            Commands::Build { build_args } => self.update_with_build_args(build_args),
            Commands::Serve {
                build_args,
                interface,
                port,
            } => {
                self.update_with_build_args(build_args);
                Self::update_option(&mut self.serve.interface, interface.as_ref());
                Self::update_option(&mut self.serve.port, port.as_ref());
                self.base.url = Some(format!(
                    "http://{}:{}",
                    self.serve.interface, self.serve.port
                ));
            }
            Commands::Init { .. } => {}
        }
    }

    /// Apply shared build arguments from Build/Serve commands
    fn update_with_build_args(&mut self, args: &crate::cli::BuildArgs) {
        if args.clean {
            self.build.clean = true;
        }
        Self::update_option(&mut self.build.minify, args.minify.as_ref());
        Self::update_option(&mut self.build.rss.enable, args.rss.as_ref());
        Self::update_option(&mut self.build.sitemap.enable, args.sitemap.as_ref());
        if let Some(base_url) = &args.base_url {
            self.base.url = Some(base_url.clone());
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path) {
        let cli = self.get_cli();

        // Apply CLI overrides first
        Self::update_option(&mut self.build.output, cli.output.as_ref());
        Self::update_option(&mut self.build.assets, cli.assets.as_ref());

        // Normalize root to absolute path
        let root = Self::normalize_path(root);
        self.set_root(&root);

        // Normalize config path
        self.config_path = Self::normalize_path(&root.join(&cli.config));

        // Normalize all directory paths
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
        self.build.assets = Self::normalize_path(&root.join(&self.build.assets));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration for the current command
    pub fn validate(&self) -> Result<()> {
        let cli = self.get_cli();

        if !self.config_path.exists() {
            bail!("Config file not found");
        }

        if (self.build.rss.enable || self.build.sitemap.enable) && self.base.url.is_none() {
            bail!("[base.url] is required for rss/sitemap generation");
        }

        if let Some(base_url) = &self.base.url {
            if !base_url.starts_with("http") {
                bail!(ConfigError::Validation(
                    "[base.url] must start with http:// or https://".into()
                ));
            }
        }

        if let Commands::Init { .. } = &cli.command {
            if self.get_root().exists() {
                bail!("Path already exists");
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
