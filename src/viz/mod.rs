//! Chart rendering: build the scene, then hand it to a backend.
//!
//! - Axes with cleaned tick labels (no thousands separators, blank padding years)
//! - Bars colored by provenance, value labels above each bar
//! - Dashed average line with its own label
//! - Filter panel and the two shared tooltips
//! - Output as interactive SVG, plain SVG or PNG

pub mod average;
pub mod axis;
pub mod bars;
pub mod legend;
pub mod raster;
pub mod scene;
pub mod svg;
pub mod text;
pub mod tooltip;
pub mod types;
pub mod util;

pub use types::OutputFormat;

use crate::config::ChartConfig;
use crate::error::Result;
use crate::models::Season;
use crate::scale::ChartScales;
use scene::Scene;
use std::path::Path;
use tooltip::{AVERAGE_TOOLTIP_ID, BAR_TOOLTIP_ID, TooltipContent, fill_tooltip, tooltip_node};

/// Draw every chart component into a fresh scene.
///
/// Paint order: axes, bars and their labels, average line, filter panel,
/// tooltips last so they cover everything else.
pub fn build_scene(rows: &[Season], scales: &ChartScales, average: f64, cfg: &ChartConfig) -> Scene {
    let locale = util::map_locale(&cfg.locale);
    let mut scene = Scene::new(cfg.width, cfg.height);

    axis::draw_axes(&mut scene, scales, cfg, locale);
    bars::draw_bars(&mut scene, rows, scales, cfg);
    average::draw_average_line(&mut scene, average, scales, cfg);
    legend::draw_filter_panel(&mut scene, cfg);

    scene.push(tooltip_node(BAR_TOOLTIP_ID, "bar-tooltip"));
    // The average tooltip never changes text; only its position and opacity do.
    let mut avg_tip = tooltip_node(AVERAGE_TOOLTIP_ID, "avg-tooltip");
    let y = scales.y.apply(average);
    fill_tooltip(
        &mut avg_tip,
        &TooltipContent::for_average(average),
        (cfg.plot_x.0, y - 28.0),
        cfg.font_px,
    );
    scene.push(avg_tip);
    scene
}

/// Write `scene` to `path` in the chosen format.
pub fn write_scene(scene: &Scene, cfg: &ChartConfig, path: &Path, format: OutputFormat) -> Result<()> {
    if format != OutputFormat::Svg
        && let Some(font) = &cfg.font_path
    {
        raster::register_font_file(font)?;
    }
    match format {
        OutputFormat::Svg => svg::write_svg(scene, cfg, path)?,
        OutputFormat::Png => raster::render_png(scene, cfg, path)?,
        OutputFormat::PlainSvg => raster::render_plain_svg(scene, cfg, path)?,
    }
    log::info!("wrote {:?} chart to {}", format, path.display());
    Ok(())
}
