//! Configuration data model.
//!
//! All structs derive `Deserialize` for TOML. Every field has a
//! default, so the built-in board (end of Q3 and end of FY'26, Pacific time)
//! shows up without any config file.

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default = "default_cards")]
    pub cards: Vec<CardConfig>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page: PageConfig::default(),
            theme: ThemeConfig::default(),
            cards: default_cards(),
            logging: LoggingConfig::default(),
        }
    }
}

fn default_cards() -> Vec<CardConfig> {
    vec![
        CardConfig {
            title: "Countdown to End of Q3".into(),
            subtitle: Some("Q3 ends Oct 31, 2025 at 11:59:59 PM PT".into()),
            target: "2025-10-31T23:59:59".into(),
            timezone: default_timezone(),
            zone_label: default_zone_label(),
            theme: None,
        },
        CardConfig {
            title: "Countdown to End of FY'26".into(),
            subtitle: Some("FY'26 ends Jan 31, 2026 at 11:59:59 PM PT".into()),
            target: "2026-01-31T23:59:59".into(),
            timezone: default_timezone(),
            zone_label: default_zone_label(),
            theme: None,
        },
    ]
}

/// Static page copy around the cards.
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_page_title")]
    pub title: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    #[serde(default = "default_footer")]
    pub footer: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_page_title(),
            tagline: default_tagline(),
            footer: default_footer(),
        }
    }
}

/// Brand colours as `#RRGGBB` strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThemeConfig {
    /// Page background.
    #[serde(default = "default_ink")]
    pub ink: String,
    /// Card surfaces.
    #[serde(default = "default_panel")]
    pub panel: String,
    #[serde(default = "default_purple")]
    pub purple: String,
    #[serde(default = "default_pink")]
    pub pink: String,
    #[serde(default = "default_sky")]
    pub sky: String,
    #[serde(default = "default_yellow")]
    pub yellow: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            ink: default_ink(),
            panel: default_panel(),
            purple: default_purple(),
            pink: default_pink(),
            sky: default_sky(),
            yellow: default_yellow(),
        }
    }
}

/// One countdown card.
#[derive(Debug, Clone, Deserialize)]
pub struct CardConfig {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Civil date/time in `timezone`, e.g. `2025-10-31T23:59:59`.
    pub target: String,
    /// IANA zone name the target is anchored to.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Suffix shown after the formatted target. Empty uses the zone
    /// abbreviation (PST/PDT).
    #[serde(default = "default_zone_label")]
    pub zone_label: String,
    /// Per-card palette; falls back to the page theme.
    #[serde(default)]
    pub theme: Option<ThemeConfig>,
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// Filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_page_title() -> String {
    "ClickUp • Every Second Counts".to_string()
}
fn default_tagline() -> String {
    "Live, second-by-second".to_string()
}
fn default_footer() -> String {
    "Built with vibes and urgency. Times anchored to America/Los_Angeles (PT).".to_string()
}
fn default_timezone() -> String {
    "America/Los_Angeles".to_string()
}
fn default_zone_label() -> String {
    "PT".to_string()
}
fn default_ink() -> String {
    "#0B0E14".to_string()
}
fn default_panel() -> String {
    "#121722".to_string()
}
fn default_purple() -> String {
    "#7B68EE".to_string()
}
fn default_pink() -> String {
    "#FD71AF".to_string()
}
fn default_sky() -> String {
    "#49CCF9".to_string()
}
fn default_yellow() -> String {
    "#FFC800".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/everysecond/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
