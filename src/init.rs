//! Site initialization module.
//!
//! Creates new site structure with default configuration.

use crate::{config::SiteConfig, render};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Default config filename
const CONFIG_FILE: &str = "vitrine.toml";

/// Default site directory structure
const SITE_DIRS: &[&str] = &["assets/images", "assets/fonts"];

/// Ignore patterns written to .gitignore
const IGNORE_CONTENT: &str = "public\n";

/// Create a new site with default structure
pub fn new_site(config: &SiteConfig, has_name: bool) -> Result<()> {
    let root = config.get_root();

    // Safety check: if no name was provided (init in current dir),
    // the directory must be completely empty
    if !has_name && !is_dir_empty(root)? {
        bail!(
            "Current directory is not empty. Use `vitrine init <SITE_NAME>` to create in a subdirectory."
        );
    }

    init_site_structure(root)?;
    init_default_config(root)?;
    init_default_stylesheet(root)?;
    init_ignore_file(root)?;

    Ok(())
}

/// Check if a directory is completely empty
fn is_dir_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Write default configuration file
fn init_default_config(root: &Path) -> Result<()> {
    let content = toml::to_string_pretty(&SiteConfig::default())?;
    fs::write(root.join(CONFIG_FILE), content)?;
    Ok(())
}

/// Create site directory structure
fn init_site_structure(root: &Path) -> Result<()> {
    for dir in SITE_DIRS {
        let path = root.join(dir);
        if path.exists() {
            bail!(
                "Path `{}` already exists. Try `vitrine init <SITE_NAME>` instead.",
                path.display()
            );
        }
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
    }
    Ok(())
}

/// Seed the assets directory with the embedded stylesheet so the scaffold
/// builds a styled site out of the box.
fn init_default_stylesheet(root: &Path) -> Result<()> {
    fs::write(root.join("assets/style.css"), render::DEFAULT_STYLESHEET)?;
    Ok(())
}

/// Initialize .gitignore with the output directory
fn init_ignore_file(root: &Path) -> Result<()> {
    let path = root.join(".gitignore");
    if !path.exists() {
        fs::write(&path, IGNORE_CONTENT)?;
    }
    Ok(())
}
