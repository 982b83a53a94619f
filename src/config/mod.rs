pub mod model;

use crate::app::state::CardSpec;
use crate::countdown::Target;
use crate::ui::theme::Theme;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub use model::{AppConfig, CardConfig, LoggingConfig};

/// Set to point at a config file other than the default location.
pub const CONFIG_ENV: &str = "EVERYSECOND_CONFIG";

fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("everysecond")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    let path = config_path();
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}

/// Validate every colour and target once, up front, so nothing downstream
/// has to deal with a malformed value.
pub fn resolve(config: &AppConfig) -> Result<(Theme, Vec<CardSpec>)> {
    let theme = Theme::from_config(&config.theme).context("Invalid [theme]")?;
    let cards = config
        .cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            resolve_card(card, theme)
                .with_context(|| format!("Invalid card #{} ({:?})", i + 1, card.title))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok((theme, cards))
}

fn resolve_card(card: &CardConfig, page_theme: Theme) -> Result<CardSpec> {
    let target = Target::parse(&card.target, &card.timezone)?;
    let theme = match &card.theme {
        Some(cfg) => Theme::from_config(cfg)?,
        None => page_theme,
    };
    Ok(CardSpec {
        title: card.title.clone(),
        subtitle: card.subtitle.clone().filter(|s| !s.is_empty()),
        target,
        zone_label: card.zone_label.clone(),
        theme,
    })
}
