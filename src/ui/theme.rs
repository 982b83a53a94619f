//! Brand palette and the styles derived from it.

use crate::config::model::ThemeConfig;
use ratatui::style::{Color, Modifier, Style};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("{name}: '{value}' is not a #RRGGBB colour")]
    BadColor { name: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub ink: Color,
    pub panel: Color,
    pub purple: Color,
    pub pink: Color,
    pub sky: Color,
    pub yellow: Color,
}

const WHITE: Color = Color::Rgb(255, 255, 255);

impl Default for Theme {
    fn default() -> Self {
        Self {
            ink: Color::Rgb(0x0B, 0x0E, 0x14),
            panel: Color::Rgb(0x12, 0x17, 0x22),
            purple: Color::Rgb(0x7B, 0x68, 0xEE),
            pink: Color::Rgb(0xFD, 0x71, 0xAF),
            sky: Color::Rgb(0x49, 0xCC, 0xF9),
            yellow: Color::Rgb(0xFF, 0xC8, 0x00),
        }
    }
}

impl Theme {
    pub fn from_config(cfg: &ThemeConfig) -> Result<Self, ThemeError> {
        Ok(Self {
            ink: parse_hex("ink", &cfg.ink)?,
            panel: parse_hex("panel", &cfg.panel)?,
            purple: parse_hex("purple", &cfg.purple)?,
            pink: parse_hex("pink", &cfg.pink)?,
            sky: parse_hex("sky", &cfg.sky)?,
            yellow: parse_hex("yellow", &cfg.yellow)?,
        })
    }

    pub fn canvas(&self) -> Style {
        Style::default().fg(WHITE).bg(self.ink)
    }

    pub fn card(&self) -> Style {
        Style::default().fg(WHITE).bg(self.panel)
    }

    pub fn card_border(&self) -> Style {
        Style::default().fg(mix(self.panel, WHITE, 0.08)).bg(self.panel)
    }

    pub fn page_title(&self) -> Style {
        Style::default()
            .fg(WHITE)
            .bg(self.ink)
            .add_modifier(Modifier::BOLD)
    }

    /// Card titles carry the purple glow of the page heading.
    pub fn card_title(&self) -> Style {
        Style::default()
            .fg(mix(WHITE, self.purple, 0.35))
            .bg(self.panel)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subtitle(&self) -> Style {
        Style::default().fg(mix(self.panel, WHITE, 0.7)).bg(self.panel)
    }

    pub fn block(&self) -> Style {
        Style::default().bg(mix(self.panel, WHITE, 0.05))
    }

    pub fn block_border(&self) -> Style {
        Style::default()
            .fg(mix(self.panel, WHITE, 0.10))
            .bg(mix(self.panel, WHITE, 0.05))
    }

    pub fn block_value(&self) -> Style {
        Style::default()
            .fg(WHITE)
            .bg(mix(self.panel, WHITE, 0.05))
            .add_modifier(Modifier::BOLD)
    }

    pub fn block_label(&self) -> Style {
        Style::default()
            .fg(mix(self.panel, WHITE, 0.6))
            .bg(mix(self.panel, WHITE, 0.05))
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(mix(self.ink, WHITE, 0.6)).bg(self.ink)
    }

    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.yellow)
            .bg(self.ink)
            .add_modifier(Modifier::BOLD)
    }

    /// Colour stops for the divider under the time blocks.
    pub fn divider_stops(&self) -> [Color; 3] {
        [self.purple, self.pink, self.sky]
    }
}

/// Parse `#RRGGBB` (the leading `#` is optional).
pub fn parse_hex(name: &'static str, value: &str) -> Result<Color, ThemeError> {
    let bad = || ThemeError::BadColor {
        name,
        value: value.to_string(),
    };
    let trimmed = value.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(bad());
    }
    let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| bad())?;
    let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| bad())?;
    let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| bad())?;
    Ok(Color::Rgb(r, g, b))
}

/// Linear blend from `a` toward `b`; `t` is clamped to `0.0..=1.0`.
/// Non-RGB colours are returned unchanged from whichever end is closer.
pub fn mix(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (a, b) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let lerp = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
            Color::Rgb(lerp(r1, r2), lerp(g1, g2), lerp(b1, b2))
        }
        _ if t < 0.5 => a,
        _ => b,
    }
}

/// `width` colours spread evenly across the gradient `stops`.
pub fn gradient(stops: &[Color], width: usize) -> Vec<Color> {
    match (stops.len(), width) {
        (_, 0) | (0, _) => Vec::new(),
        (1, _) => vec![stops[0]; width],
        (_, 1) => vec![stops[0]],
        _ => {
            let segments = (stops.len() - 1) as f32;
            (0..width)
                .map(|i| {
                    let pos = i as f32 / (width - 1) as f32 * segments;
                    let idx = (pos.floor() as usize).min(stops.len() - 2);
                    mix(stops[idx], stops[idx + 1], pos - idx as f32)
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_brand_config() {
        let theme = Theme::from_config(&ThemeConfig::default()).unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("x", "#7B68EE"), Ok(Color::Rgb(123, 104, 238)));
        assert_eq!(parse_hex("x", "fd71af"), Ok(Color::Rgb(253, 113, 175)));
        assert!(parse_hex("x", "#FFF").is_err());
        assert!(parse_hex("x", "#GG0000").is_err());
        assert!(parse_hex("x", "#ééé").is_err());
    }

    #[test]
    fn test_bad_color_names_the_field() {
        let cfg = ThemeConfig {
            sky: "blue".into(),
            ..ThemeConfig::default()
        };
        let err = Theme::from_config(&cfg).unwrap_err();
        assert_eq!(err.to_string(), "sky: 'blue' is not a #RRGGBB colour");
    }

    #[test]
    fn test_gradient_endpoints() {
        let theme = Theme::default();
        let stops = theme.divider_stops();
        let colors = gradient(&stops, 9);
        assert_eq!(colors.len(), 9);
        assert_eq!(colors[0], theme.purple);
        assert_eq!(colors[4], theme.pink);
        assert_eq!(colors[8], theme.sky);
        assert!(gradient(&stops, 0).is_empty());
        assert_eq!(gradient(&stops, 1), vec![theme.purple]);
    }

    #[test]
    fn test_mix() {
        let black = Color::Rgb(0, 0, 0);
        assert_eq!(mix(black, WHITE, 0.0), black);
        assert_eq!(mix(black, WHITE, 1.0), WHITE);
        assert_eq!(mix(black, WHITE, 0.5), Color::Rgb(128, 128, 128));
        assert_eq!(mix(black, WHITE, 7.0), WHITE);
    }
}
