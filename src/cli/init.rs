//! `docsite init`: write a starter `site.toml`.

use crate::config::{CONFIG_FILE, RawConfig, resolve};
use crate::embed::{SITE_TOML, SiteTomlVars};
use crate::log;
use anyhow::{Context, Result, bail};
use std::{
    fs,
    path::{Path, PathBuf},
};

const DEFAULT_TITLE: &str = "Python Course";
const DEFAULT_URL: &str = "https://python.example.com";

/// Write the starter config into `dir` (default: current directory).
///
/// The rendered file is resolved before it is written, so a bad `--url`
/// never reaches disk. Returns the path written.
pub fn new_site(
    dir: Option<&Path>,
    title: Option<&str>,
    url: Option<&str>,
    force: bool,
) -> Result<PathBuf> {
    let root = match dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().context("Failed to get current working directory")?,
    };

    let path = root.join(CONFIG_FILE);
    if path.exists() && !force {
        bail!(
            "'{}' already exists, use --force to overwrite",
            path.display()
        );
    }

    let content = SITE_TOML.render(&SiteTomlVars {
        title: title.unwrap_or(DEFAULT_TITLE),
        url: url.unwrap_or(DEFAULT_URL),
    });
    resolve(RawConfig::from_str(&content)?)?;

    fs::create_dir_all(&root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(path)
}
