//! `docsite check`: resolve config files and report problems.

use super::{Cli, locate_config};
use crate::config::{self, LoadError, ResolvedConfig};
use crate::utils::plural_count;
use crate::{debug, log};
use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

/// Check every file on its own; fail if any of them is invalid.
pub fn check_configs(cli: &Cli, files: &[PathBuf]) -> Result<()> {
    let paths = if files.is_empty() {
        vec![locate_config(cli)?]
    } else {
        files.to_vec()
    };

    let failed = paths.iter().filter(|path| !check_one(path)).count();

    if failed > 0 {
        bail!(
            "{} of {} invalid",
            plural_count(failed, "config"),
            paths.len()
        );
    }
    Ok(())
}

/// Resolve one file and print its diagnostics. Returns true if it resolved.
fn check_one(path: &Path) -> bool {
    let display = path.display().to_string();
    debug!("check"; "resolving {}", display);

    match config::load(path) {
        Ok(loaded) => {
            loaded.diagnostics.print_warnings(&display);
            log!("ok"; "{}: {}", display, summary(&loaded.config));
            true
        }
        Err(LoadError::Invalid(diag)) => {
            diag.print_warnings(&display);
            log!("error"; "{}", display);
            eprintln!("{diag}\n");
            false
        }
        Err(e) => {
            log!("error"; "{}: {:#}", display, anyhow::Error::from(e));
            false
        }
    }
}

/// One-line description of a resolved config.
pub fn summary(config: &ResolvedConfig) -> String {
    format!(
        "{} ({}), {}, {}",
        plural_count(config.locales().len(), "locale"),
        config.i18n().codes().collect::<Vec<_>>().join(", "),
        plural_count(config.navbar().items.len(), "nav item"),
        plural_count(config.footer().targets().count(), "footer link"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::{SITE_TOML, SiteTomlVars};
    use clap::Parser;
    use std::fs;

    fn write_starter(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let content = SITE_TOML.render(&SiteTomlVars {
            title: "Python Course",
            url: "https://python.example.com",
        });
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_summary() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_starter(dir.path(), "site.toml");
        let loaded = config::load(&path).unwrap();
        assert_eq!(
            summary(&loaded.config),
            "2 locales (en, fa), 1 nav item, 6 footer links"
        );
    }

    #[test]
    fn test_each_file_checked_independently() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_starter(dir.path(), "python.toml");
        let bad = dir.path().join("branding.toml");
        fs::write(
            &bad,
            "title = \"Fluffy\"\nurl = \"https://fluffy.example.com\"\n[i18n]\nlocales = [\"en\", \"en\"]",
        )
        .unwrap();

        let cli = Cli::parse_from(["docsite", "check"]);
        assert!(check_configs(&cli, std::slice::from_ref(&good)).is_ok());

        let err = check_configs(&cli, &[good, bad]).unwrap_err();
        assert_eq!(err.to_string(), "1 config of 2 invalid");
    }

    #[test]
    fn test_unreadable_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::parse_from(["docsite", "check"]);
        let missing = dir.path().join("missing.toml");
        assert!(check_configs(&cli, &[missing]).is_err());
    }
}
