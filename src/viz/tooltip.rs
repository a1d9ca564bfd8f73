//! Tooltip content and the shared tooltip elements.
//!
//! The chart owns exactly two tooltip elements (one for bars, one for the
//! average line). Hovering rewrites their content and position; nothing else
//! holds tooltip state.

use super::scene::{Node, Style};
use super::text::{estimate_text_width_px, wrap_text_to_width};
use crate::models::Season;

pub const BAR_TOOLTIP_ID: &str = "tooltip";
pub const AVERAGE_TOOLTIP_ID: &str = "avg-tooltip";

const PAD: f64 = 8.0;
const MAX_TEXT_PX: u32 = 260;

/// What the bar tooltip shows for one season.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub header: String,
    pub lines: Vec<String>,
}

impl TooltipContent {
    pub fn for_season(s: &Season) -> Self {
        Self {
            header: format!("Season # {}", s.year),
            lines: vec![
                format!("Year: {}", s.year),
                format!("Episodes: {}", s.num_episodes),
                format!("Avg Viewers (mil): {}", s.avg_viewers_mil),
                String::new(),
                format!("Most Watched Episode: \"{}\"", s.most_watched_episode),
                format!("Viewers (mil): {}", s.most_watched_viewers_mil),
            ],
        }
    }

    pub fn for_average(avg: f64) -> Self {
        Self {
            header: String::new(),
            lines: vec![format!("Average = {avg:.1}")],
        }
    }

    /// Header and lines joined with newlines, as used for SVG `<title>` hover text.
    pub fn plain_text(&self) -> String {
        let mut parts = Vec::with_capacity(self.lines.len() + 1);
        if !self.header.is_empty() {
            parts.push(self.header.as_str());
        }
        parts.extend(self.lines.iter().map(String::as_str));
        parts.join("\n")
    }
}

/// An invisible, empty tooltip element; events fill it in.
pub fn tooltip_node(id: &str, class: &str) -> Node {
    Node::group()
        .with_id(id)
        .with_class("tooltip")
        .with_class(class)
        .with_style(Style {
            opacity: Some(0.0),
            ..Style::default()
        })
}

/// Replace a tooltip element's children with a box showing `content`,
/// anchored at `(x, y)`.
pub fn fill_tooltip(node: &mut Node, content: &TooltipContent, (x, y): (f64, f64), font_px: u32) {
    let line_h = font_px as f64 + 4.0;
    let mut rows: Vec<(String, bool)> = Vec::new();
    if !content.header.is_empty() {
        rows.push((content.header.clone(), true));
    }
    for l in &content.lines {
        if l.is_empty() {
            rows.push((String::new(), false));
            continue;
        }
        for wrapped in wrap_text_to_width(l, font_px, MAX_TEXT_PX) {
            rows.push((wrapped, false));
        }
    }

    let text_w = rows
        .iter()
        .map(|(r, _)| estimate_text_width_px(r, font_px))
        .max()
        .unwrap_or(0);
    let w = text_w as f64 + 2.0 * PAD;
    let h = rows.len() as f64 * line_h + 2.0 * PAD;

    node.children.clear();
    node.push(Node::rect(x, y, w, h).with_style(Style {
        fill: Some("#ffffff".into()),
        stroke: Some("#333333".into()),
        stroke_width: Some(1.0),
        ..Style::default()
    }));
    for (i, (row, bold)) in rows.into_iter().enumerate() {
        if row.is_empty() {
            continue;
        }
        let baseline = y + PAD + (i as f64 + 1.0) * line_h - 4.0;
        node.push(Node::text(x + PAD, baseline, row).with_style(Style {
            fill: Some("#000000".into()),
            font_px: Some(font_px),
            font_weight_bold: bold,
            ..Style::default()
        }));
    }
}

/// Fade a tooltip element in or out over `ms` milliseconds.
pub fn set_visibility(node: &mut Node, visible: bool, ms: u32) {
    node.style.opacity = Some(if visible { 1.0 } else { 0.0 });
    node.style.transition_ms = Some(ms);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Millions, Provenance};

    #[test]
    fn average_tooltip_has_one_decimal() {
        let c = TooltipContent::for_average(20.0);
        assert_eq!(c.lines, vec!["Average = 20.0".to_string()]);
    }

    #[test]
    fn filled_tooltip_contains_every_line() {
        let s = Season {
            year: 1990,
            num_episodes: 13,
            avg_viewers_mil: Millions::from(27.8),
            most_watched_episode: "Life on the Fast Lane".into(),
            most_watched_viewers_mil: Millions::from(33.5),
            provenance: Provenance::Estimated,
        };
        let content = TooltipContent::for_season(&s);
        let mut node = tooltip_node(BAR_TOOLTIP_ID, "bar-tooltip");
        fill_tooltip(&mut node, &content, (10.0, 20.0), 12);
        let texts: Vec<&str> = node.children.iter().filter_map(|c| c.text_content()).collect();
        assert_eq!(texts[0], "Season # 1990");
        assert!(texts.contains(&"Episodes: 13"));
        assert!(texts.join(" ").contains("\"Life on the Fast Lane\""));
        assert_eq!(node.style.opacity, Some(0.0));
    }
}
