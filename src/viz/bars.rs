//! One bar and one value label per season.

use super::scene::{Anchor, Node, Scene, Style};
use super::tooltip::TooltipContent;
use crate::config::ChartConfig;
use crate::models::{Provenance, Season};
use crate::scale::ChartScales;

/// Marker shared by every bar rect.
pub const BAR: &str = "bar";
/// Marker for de-emphasized bars.
pub const DIMMED: &str = "dimmed";

pub fn bar_id(year: i32) -> String {
    format!("bar-{year}")
}

pub fn fill_for(p: Provenance, cfg: &ChartConfig) -> &str {
    match p {
        Provenance::Actual => &cfg.actual_color,
        Provenance::Estimated => &cfg.estimated_color,
    }
}

/// Geometry of a season's bar: (x, y, width, height).
pub fn bar_rect(row: &Season, scales: &ChartScales, cfg: &ChartConfig) -> (f64, f64, f64, f64) {
    let top = scales.y_map(row);
    let x = scales.x_map(row) - cfg.bar_width / 2.0;
    (x, top, cfg.bar_width, (cfg.baseline() - top).max(0.0))
}

pub fn draw_bars(scene: &mut Scene, rows: &[Season], scales: &ChartScales, cfg: &ChartConfig) {
    let mut bars = Node::group().with_id("bars");
    let mut labels = Node::group().with_id("bar-labels");

    for row in rows {
        let (x, y, w, h) = bar_rect(row, scales, cfg);
        bars.push(
            Node::rect(x, y, w, h)
                .with_id(bar_id(row.year))
                .with_class(BAR)
                .with_class(row.provenance.marker())
                .with_style(Style {
                    fill: Some(fill_for(row.provenance, cfg).to_string()),
                    ..Style::default()
                })
                .with_title(TooltipContent::for_season(row).plain_text()),
        );
        labels.push(
            Node::text(scales.x_map(row), y - 4.0, row.avg_viewers_mil.text())
                .with_class("bar-label")
                .with_anchor(Anchor::Middle)
                .with_style(Style {
                    fill: Some("#000000".into()),
                    font_px: Some(cfg.font_px.saturating_sub(1).max(8)),
                    ..Style::default()
                }),
        );
    }
    log::debug!("drew {} bars", rows.len());
    scene.push(bars);
    scene.push(labels);
}
