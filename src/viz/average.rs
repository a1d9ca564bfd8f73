//! Dashed reference line at the mean viewership.

use super::scene::{Node, Scene, Style};
use crate::config::ChartConfig;
use crate::scale::ChartScales;

pub const AVERAGE_LINE_ID: &str = "avg-line";
pub const AVERAGE_LABEL_ID: &str = "avg-label";

/// Draw the line across the full plot width plus the static value label.
///
/// `average` is expected already rounded to one decimal.
pub fn draw_average_line(scene: &mut Scene, average: f64, scales: &ChartScales, cfg: &ChartConfig) {
    let y = scales.y.apply(average);
    let (left, right) = cfg.plot_x;
    scene.push(
        Node::line(left, y, right, y)
            .with_id(AVERAGE_LINE_ID)
            .with_class("avg-line")
            .with_style(Style {
                stroke: Some(cfg.average_color.clone()),
                stroke_width: Some(2.0),
                dash: Some((5, 5)),
                ..Style::default()
            })
            .with_title(format!("Average = {average:.1}")),
    );
    scene.push(
        Node::text(left + 10.0, y - 6.0, format!("{average:.1}"))
            .with_id(AVERAGE_LABEL_ID)
            .with_class("avg-label")
            .with_style(Style {
                fill: Some(cfg.average_color.clone()),
                font_px: Some(cfg.font_px),
                font_weight_bold: true,
                ..Style::default()
            }),
    );
}
