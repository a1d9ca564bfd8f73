//! The "Viewership Data" panel holding the two filter toggles.
//!
//! Each toggle is a color swatch plus a label; clicking one is routed through
//! the event table in [`crate::events`].

use super::scene::{Node, Scene, Style};
use super::text::estimate_text_width_px;
use crate::config::ChartConfig;
use crate::models::Provenance;

pub const FILTER_TOGGLE: &str = "filter-toggle";
/// Marker on a toggle whose filter is on.
pub const ACTIVE: &str = "active";

const SWATCH: f64 = 14.0;
const ROW_H: f64 = 22.0;
const PAD: f64 = 8.0;
const TITLE: &str = "Viewership Data";

pub fn toggle_id(p: Provenance) -> String {
    format!("filter-{}", p.marker())
}

pub fn draw_filter_panel(scene: &mut Scene, cfg: &ChartConfig) {
    let (x, y) = cfg.filter_panel;
    let title_px = cfg.font_px + 2;
    let label_w = Provenance::ALL
        .iter()
        .map(|p| estimate_text_width_px(&p.to_string(), cfg.font_px))
        .max()
        .unwrap_or(0) as f64;
    let w = (SWATCH + 6.0 + label_w)
        .max(estimate_text_width_px(TITLE, title_px) as f64)
        + 2.0 * PAD;
    let h = PAD + title_px as f64 + 6.0 + ROW_H * Provenance::ALL.len() as f64 + PAD;

    let mut panel = Node::group().with_id("viewership-filter");
    panel.push(Node::rect(x, y, w, h).with_style(Style {
        fill: Some("#ffffff".into()),
        stroke: Some("#999999".into()),
        stroke_width: Some(1.0),
        ..Style::default()
    }));
    panel.push(Node::text(x + PAD, y + PAD + title_px as f64, TITLE).with_style(Style {
        fill: Some("#000000".into()),
        font_px: Some(title_px),
        font_weight_bold: true,
        ..Style::default()
    }));

    let first_row = y + PAD + title_px as f64 + 6.0;
    for (i, p) in Provenance::ALL.iter().enumerate() {
        let row_y = first_row + i as f64 * ROW_H;
        let mut toggle = Node::group()
            .with_id(toggle_id(*p))
            .with_class(FILTER_TOGGLE)
            .with_title(format!("Click to emphasize {p} viewership"));
        toggle.push(Node::rect(x + PAD, row_y, SWATCH, SWATCH).with_style(Style {
            fill: Some(super::bars::fill_for(*p, cfg).to_string()),
            ..Style::default()
        }));
        toggle.push(
            Node::text(x + PAD + SWATCH + 6.0, row_y + SWATCH - 2.0, p.to_string()).with_style(
                Style {
                    fill: Some("#000000".into()),
                    font_px: Some(cfg.font_px),
                    ..Style::default()
                },
            ),
        );
        panel.push(toggle);
    }
    scene.push(panel);
}
