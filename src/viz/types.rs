//! Public types for the visualization module.

use std::path::Path;

/// Output formats supported by [`super::write_scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// SVG document keeping ids, class markers, hover titles and opacity transitions.
    Svg,
    /// PNG raster drawn through plotters.
    Png,
    /// SVG drawn through plotters' SVG backend (no ids, classes or hover text).
    PlainSvg,
}

impl OutputFormat {
    /// Infer from the file extension: `.png` is PNG, anything else interactive SVG.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("png") => OutputFormat::Png,
            _ => OutputFormat::Svg,
        }
    }
}
