//! Serialize a scene as a standalone SVG document.
//!
//! Ids and class markers survive, so the dimmed state and the active toggles are
//! visible in the output, and the embedded stylesheet gives the dimmed marker
//! its opacity. Bars and the average line carry `<title>` hover text.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use super::bars::DIMMED;
use super::legend::{ACTIVE, FILTER_TOGGLE};
use super::scene::{Anchor, Node, Scene, Shape, Style};
use super::text::xml_escape;
use crate::config::ChartConfig;
use crate::error::Result;

pub fn write_svg(scene: &Scene, cfg: &ChartConfig, path: &Path) -> Result<()> {
    fs::write(path, to_svg_string(scene, cfg))?;
    Ok(())
}

pub fn to_svg_string(scene: &Scene, cfg: &ChartConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
        w = scene.width,
        h = scene.height
    );
    let _ = writeln!(out, "  <style>");
    let _ = writeln!(out, "    .bar {{ transition: opacity 200ms; }}");
    let _ = writeln!(out, "    .{DIMMED} {{ opacity: {}; }}", num(cfg.dim_opacity));
    let _ = writeln!(out, "    .tooltip {{ pointer-events: none; }}");
    let _ = writeln!(out, "    .{FILTER_TOGGLE} {{ cursor: pointer; }}");
    let _ = writeln!(out, "    .{FILTER_TOGGLE}.{ACTIVE} text {{ font-weight: bold; text-decoration: underline; }}");
    let _ = writeln!(out, "  </style>");
    let _ = writeln!(out, r##"  <rect width="100%" height="100%" fill="#ffffff"/>"##);
    for node in &scene.nodes {
        write_node(&mut out, node, 1);
    }
    out.push_str("</svg>\n");
    out
}

/// Compact number formatting: at most two decimals, no trailing zeros.
fn num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn common_attrs(node: &Node) -> String {
    let mut a = String::new();
    if let Some(id) = &node.id {
        let _ = write!(a, r#" id="{}""#, xml_escape(id));
    }
    if !node.classes.is_empty() {
        let classes: Vec<&str> = node.classes.iter().map(String::as_str).collect();
        let _ = write!(a, r#" class="{}""#, xml_escape(&classes.join(" ")));
    }
    a.push_str(&style_attrs(&node.style));
    a
}

fn style_attrs(s: &Style) -> String {
    let mut a = String::new();
    if let Some(fill) = &s.fill {
        let _ = write!(a, r#" fill="{}""#, xml_escape(fill));
    }
    if let Some(stroke) = &s.stroke {
        let _ = write!(a, r#" stroke="{}""#, xml_escape(stroke));
    }
    if let Some(w) = s.stroke_width {
        let _ = write!(a, r#" stroke-width="{}""#, num(w));
    }
    if let Some((dash, gap)) = s.dash {
        let _ = write!(a, r#" stroke-dasharray="{dash}, {gap}""#);
    }
    if let Some(px) = s.font_px {
        let _ = write!(a, r#" font-size="{px}""#);
    }
    if s.font_weight_bold {
        a.push_str(r#" font-weight="bold""#);
    }
    // inline so it overrides the class rules
    let mut css = Vec::new();
    if let Some(o) = s.opacity {
        css.push(format!("opacity:{}", num(o)));
    }
    if let Some(ms) = s.transition_ms {
        css.push(format!("transition:opacity {ms}ms"));
    }
    if !css.is_empty() {
        let _ = write!(a, r#" style="{}""#, css.join(";"));
    }
    a
}

fn title_tag(node: &Node) -> Option<String> {
    node.title
        .as_ref()
        .map(|t| format!("<title>{}</title>", xml_escape(t)))
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    let indent = "  ".repeat(depth);
    let attrs = common_attrs(node);
    let title = title_tag(node);
    match &node.shape {
        Shape::Group => {
            let _ = writeln!(out, "{indent}<g{attrs}>");
            if let Some(t) = title {
                let _ = writeln!(out, "{indent}  {t}");
            }
            for c in &node.children {
                write_node(out, c, depth + 1);
            }
            let _ = writeln!(out, "{indent}</g>");
        }
        Shape::Rect { x, y, w, h } => {
            let geom = format!(
                r#" x="{}" y="{}" width="{}" height="{}""#,
                num(*x),
                num(*y),
                num(*w),
                num(*h)
            );
            leaf(out, &indent, "rect", &geom, &attrs, title.as_deref(), None);
        }
        Shape::Line { x1, y1, x2, y2 } => {
            let geom = format!(
                r#" x1="{}" y1="{}" x2="{}" y2="{}""#,
                num(*x1),
                num(*y1),
                num(*x2),
                num(*y2)
            );
            leaf(out, &indent, "line", &geom, &attrs, title.as_deref(), None);
        }
        Shape::Text { x, y, content, anchor, rotate } => {
            let mut geom = format!(r#" x="{}" y="{}""#, num(*x), num(*y));
            match anchor {
                Anchor::Start => {}
                Anchor::Middle => geom.push_str(r#" text-anchor="middle""#),
                Anchor::End => geom.push_str(r#" text-anchor="end""#),
            }
            if let Some(deg) = rotate {
                let _ = write!(geom, r#" transform="rotate({}, {}, {})""#, num(*deg), num(*x), num(*y));
            }
            let body = xml_escape(content);
            leaf(out, &indent, "text", &geom, &attrs, title.as_deref(), Some(&body));
        }
    }
}

fn leaf(
    out: &mut String,
    indent: &str,
    tag: &str,
    geom: &str,
    attrs: &str,
    title: Option<&str>,
    body: Option<&str>,
) {
    match (title, body) {
        (None, None) => {
            let _ = writeln!(out, "{indent}<{tag}{geom}{attrs}/>");
        }
        (t, b) => {
            let _ = writeln!(
                out,
                "{indent}<{tag}{geom}{attrs}>{}{}</{tag}>",
                t.unwrap_or(""),
                b.unwrap_or("")
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_compact() {
        assert_eq!(num(550.0), "550");
        assert_eq!(num(83.333333), "83.33");
        assert_eq!(num(0.2), "0.2");
        assert_eq!(num(-0.001), "0");
    }

    #[test]
    fn nodes_keep_ids_classes_and_titles() {
        let mut scene = Scene::new(100, 50);
        scene.push(
            Node::rect(1.0, 2.0, 3.0, 4.0)
                .with_id("bar-1990")
                .with_class("bar")
                .with_class("dimmed")
                .with_title("Season # 1990 & more"),
        );
        scene.push(Node::text(5.0, 6.0, "1990").with_anchor(Anchor::Middle));
        let svg = to_svg_string(&scene, &ChartConfig::default());
        assert!(svg.contains(r#"<rect x="1" y="2" width="3" height="4" id="bar-1990" class="bar dimmed">"#));
        assert!(svg.contains("<title>Season # 1990 &amp; more</title>"));
        assert!(svg.contains(r#"<text x="5" y="6" text-anchor="middle">1990</text>"#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
