//! `docsite show`: print the resolved configuration for the renderer.

use super::{Cli, OutputFormat, locate_config};
use crate::config::{self, ResolvedConfig};
use crate::debug;
use anyhow::Result;

pub fn show_config(cli: &Cli, format: OutputFormat) -> Result<()> {
    let path = locate_config(cli)?;
    debug!("show"; "resolving {}", path.display());

    let loaded = config::load(&path)?;
    loaded
        .diagnostics
        .print_warnings(&path.display().to_string());

    print!("{}", render(&loaded.config, format)?);
    Ok(())
}

/// Serialize a resolved config in the requested format.
pub fn render(config: &ResolvedConfig, format: OutputFormat) -> Result<String> {
    let mut out = match format {
        OutputFormat::Json => serde_json::to_string_pretty(config)?,
        OutputFormat::Toml => toml::to_string_pretty(config)?,
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RawConfig, resolve};
    use crate::embed::{SITE_TOML, SiteTomlVars};

    fn starter() -> ResolvedConfig {
        let content = SITE_TOML.render(&SiteTomlVars {
            title: "Python Course",
            url: "https://python.example.com",
        });
        resolve(RawConfig::from_str(&content).unwrap()).unwrap()
    }

    #[test]
    fn test_render_json() {
        let out = render(&starter(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["title"], "Python Course");
        assert_eq!(value["i18n"]["default_locale"], "en");
        assert_eq!(value["navbar"]["items"][0]["type"], "doc_link");
        assert_eq!(
            value["footer"]["links"][0]["items"][0]["target"]["internal"],
            "/docs/intro"
        );
    }

    #[test]
    fn test_render_toml() {
        let out = render(&starter(), OutputFormat::Toml).unwrap();
        assert!(out.contains("title = \"Python Course\""));
        assert!(out.contains("sidebar_id = \"tutorialSidebar\""));
        assert!(out.ends_with('\n'));
    }
}
