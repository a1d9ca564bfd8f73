//! Bottom (year) and left (viewership) axes with their titles.

use num_format::Locale;

use super::scene::{Anchor, Node, Scene, Style};
use super::util::format_tick;
use crate::config::ChartConfig;
use crate::models::AxisLimits;
use crate::scale::ChartScales;

pub const TICK_LABEL: &str = "tick-label";
const TICK_LEN: f64 = 6.0;
const AXIS_COLOR: &str = "#000000";

/// Draw both axes and their titles, then clean up the tick labels.
pub fn draw_axes(scene: &mut Scene, scales: &ChartScales, cfg: &ChartConfig, locale: &Locale) {
    scene.push(bottom_axis(scales, cfg, locale));
    scene.push(left_axis(scales, cfg, locale));
    clean_tick_labels(scene, &scales.limits, locale);
    for title in axis_titles(cfg) {
        scene.push(title);
    }
}

fn stroke() -> Style {
    Style {
        stroke: Some(AXIS_COLOR.into()),
        stroke_width: Some(1.0),
        ..Style::default()
    }
}

fn label_style(cfg: &ChartConfig) -> Style {
    Style {
        fill: Some(AXIS_COLOR.into()),
        font_px: Some(cfg.font_px.saturating_sub(2).max(8)),
        ..Style::default()
    }
}

fn bottom_axis(scales: &ChartScales, cfg: &ChartConfig, locale: &Locale) -> Node {
    let y0 = cfg.baseline();
    let (left, right) = cfg.plot_x;
    let mut g = Node::group().with_id("x-axis").with_class("axis");
    g.push(Node::line(left, y0, right, y0).with_style(stroke()));

    // Years only: fractional ticks appear when the domain is only a couple of years wide.
    for t in scales.x.ticks(cfg.x_ticks).into_iter().filter(|t| t.fract() == 0.0) {
        let x = scales.x.apply(t);
        g.push(Node::line(x, y0, x, y0 + TICK_LEN).with_style(stroke()));
        g.push(
            Node::text(x, y0 + TICK_LEN + 12.0, format_tick(t, 0, locale))
                .with_class(TICK_LABEL)
                .with_anchor(Anchor::Middle)
                .with_style(label_style(cfg)),
        );
    }
    g
}

fn left_axis(scales: &ChartScales, cfg: &ChartConfig, locale: &Locale) -> Node {
    let x0 = cfg.plot_x.0;
    let (top, bottom) = cfg.plot_y;
    let precision = scales.y.tick_precision(cfg.y_ticks);
    let mut g = Node::group().with_id("y-axis").with_class("axis");
    g.push(Node::line(x0, top, x0, bottom).with_style(stroke()));

    for t in scales.y.ticks(cfg.y_ticks) {
        let y = scales.y.apply(t);
        g.push(Node::line(x0 - TICK_LEN, y, x0, y).with_style(stroke()));
        g.push(
            Node::text(x0 - TICK_LEN - 3.0, y + 4.0, format_tick(t, precision, locale))
                .with_class(TICK_LABEL)
                .with_anchor(Anchor::End)
                .with_style(label_style(cfg)),
        );
    }
    g
}

/// Final text for one tick label: padding years vanish, separators are stripped.
pub fn clean_label(label: &str, padding: &[String], separator: &str) -> String {
    if padding.iter().any(|p| p == label) {
        String::new()
    } else if !separator.is_empty() && label.contains(separator) {
        label.replace(separator, "")
    } else {
        label.to_string()
    }
}

/// Pass over every rendered tick label in the scene.
pub fn clean_tick_labels(scene: &mut Scene, limits: &AxisLimits, locale: &Locale) {
    let (lo, hi) = limits.padding_years();
    let padding = [
        format_tick(lo as f64, 0, locale),
        format_tick(hi as f64, 0, locale),
    ];
    let separator = locale.separator();
    scene.for_each_class_mut(TICK_LABEL, |node| {
        if let Some(text) = node.text_content() {
            let cleaned = clean_label(text, &padding, separator);
            node.set_text(cleaned);
        }
    });
}

fn axis_titles(cfg: &ChartConfig) -> Vec<Node> {
    let (left, right) = cfg.plot_x;
    let (top, bottom) = cfg.plot_y;
    let style = Style {
        fill: Some(AXIS_COLOR.into()),
        font_px: Some(cfg.font_px + 2),
        ..Style::default()
    };
    vec![
        Node::text((left + right) / 2.0, bottom + 40.0, "Year")
            .with_id("x-title")
            .with_anchor(Anchor::Middle)
            .with_style(style.clone()),
        Node::text(left - 40.0, (top + bottom) / 2.0, "Avg. Viewers (in millions)")
            .with_id("y-title")
            .with_anchor(Anchor::Middle)
            .with_rotation(-90.0)
            .with_style(style),
    ]
}
