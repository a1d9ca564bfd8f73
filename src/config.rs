//! Chart layout and styling knobs.
//!
//! Every field has a default matching the 1100×600 canvas the chart was designed
//! for, so a JSON config file only needs to name what it overrides:
//!
//! ```json
//! { "bar_width": 28.0, "actual_color": "#4472c4", "locale": "de" }
//! ```

use crate::error::{ChartError, Result};
use crate::filter::FilterPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Layout, colors and behaviour of the rendered chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    /// Horizontal plot range in pixels (left, right).
    pub plot_x: (f64, f64),
    /// Vertical plot range in pixels (top, bottom).
    pub plot_y: (f64, f64),
    pub bar_width: f64,
    pub x_ticks: usize,
    pub y_ticks: usize,
    /// Locale tag for tick label formatting (`en`, `de`, ...).
    pub locale: String,
    pub actual_color: String,
    pub estimated_color: String,
    pub average_color: String,
    /// Opacity applied to bars carrying the dimmed marker.
    pub dim_opacity: f64,
    pub bar_fade_in_ms: u32,
    pub bar_fade_out_ms: u32,
    pub average_fade_ms: u32,
    /// Top-left corner of the filter panel.
    pub filter_panel: (f64, f64),
    pub filter_policy: FilterPolicy,
    pub font_px: u32,
    /// TTF/OTF file used for text in PNG and plain-SVG output.
    pub font_path: Option<PathBuf>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1100,
            height: 600,
            plot_x: (100.0, 1050.0),
            plot_y: (50.0, 550.0),
            bar_width: 34.0,
            x_ticks: 30,
            y_ticks: 10,
            locale: "en".into(),
            actual_color: "#85a2d1".into(),
            estimated_color: "#808080".into(),
            average_color: "#808080".into(),
            dim_opacity: 0.2,
            bar_fade_in_ms: 200,
            bar_fade_out_ms: 500,
            average_fade_ms: 100,
            filter_panel: (900.0, 60.0),
            filter_policy: FilterPolicy::default(),
            font_px: 12,
            font_path: None,
        }
    }
}

impl ChartConfig {
    /// Read a JSON config file; missing fields keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let cfg: ChartConfig = serde_json::from_str(&raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject colors the backends cannot paint.
    pub fn validate(&self) -> Result<()> {
        for c in [&self.actual_color, &self.estimated_color, &self.average_color] {
            parse_hex_color(c)?;
        }
        Ok(())
    }

    /// Pixel y of the x-axis baseline (bottom of every bar).
    pub fn baseline(&self) -> f64 {
        self.plot_y.1
    }
}

/// Parse `#rrggbb` into its components.
pub fn parse_hex_color(s: &str) -> Result<(u8, u8, u8)> {
    let hex = s
        .strip_prefix('#')
        .filter(|h| h.len() == 6 && h.is_ascii())
        .ok_or_else(|| ChartError::InvalidColor(s.to_string()))?;
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ChartError::InvalidColor(s.to_string()))
    };
    Ok((channel(0)?, channel(2)?, channel(4)?))
}
