//! Draw a scene through plotters: PNG via the bitmap backend, plain SVG via
//! the SVG backend.
//!
//! Plotters has no notion of ids, classes or hover, so this path bakes the
//! current state in: dimmed bars get the dim opacity, hidden tooltips are
//! skipped. Text needs a registered "sans-serif" font (`ab_glyph` does not
//! discover system fonts); see [`register_font_file`].

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontStyle, FontTransform};
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use super::bars::DIMMED;
use super::scene::{Anchor, Node, Scene, Shape};
use crate::config::{ChartConfig, parse_hex_color};
use crate::error::{ChartError, Result};

static TEXT_WARNED: AtomicBool = AtomicBool::new(false);

/// Register a TTF/OTF file as the "sans-serif" family (normal and bold).
///
/// The font bytes are leaked: plotters keeps them for the rest of the process.
pub fn register_font_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let bytes: &'static [u8] = Box::leak(fs::read(path.as_ref())?.into_boxed_slice());
    for style in [FontStyle::Normal, FontStyle::Bold] {
        plotters::style::register_font("sans-serif", style, bytes)
            .map_err(|_| ChartError::Render(format!("invalid font file {}", path.as_ref().display())))?;
    }
    log::debug!("registered font {}", path.as_ref().display());
    Ok(())
}

pub fn render_png(scene: &Scene, cfg: &ChartConfig, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (scene.width, scene.height)).into_drawing_area();
    draw_scene(&root, scene, cfg)?;
    root.present().map_err(render_err)
}

pub fn render_plain_svg(scene: &Scene, cfg: &ChartConfig, path: &Path) -> Result<()> {
    let root = SVGBackend::new(path, (scene.width, scene.height)).into_drawing_area();
    draw_scene(&root, scene, cfg)?;
    root.present().map_err(render_err)
}

/// Plain SVG rendered into memory.
pub fn render_plain_svg_string(scene: &Scene, cfg: &ChartConfig) -> Result<String> {
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, (scene.width, scene.height)).into_drawing_area();
        draw_scene(&root, scene, cfg)?;
        root.present().map_err(render_err)?;
    }
    Ok(buf)
}

fn render_err<E: std::fmt::Debug>(e: E) -> ChartError {
    ChartError::Render(format!("{e:?}"))
}

/// Paint every visible node onto `root`, white background first.
pub fn draw_scene<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    scene: &Scene,
    cfg: &ChartConfig,
) -> Result<()> {
    root.fill(&WHITE).map_err(render_err)?;
    for node in &scene.nodes {
        draw_node(root, node, 1.0, cfg)?;
    }
    Ok(())
}

fn color(s: &str) -> Result<RGBColor> {
    let (r, g, b) = parse_hex_color(s)?;
    Ok(RGBColor(r, g, b))
}

#[inline]
fn px(v: f64) -> i32 {
    v.round() as i32
}

fn draw_node<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    node: &Node,
    parent_opacity: f64,
    cfg: &ChartConfig,
) -> Result<()> {
    let mut opacity = parent_opacity * node.style.opacity.unwrap_or(1.0);
    if node.has_class(DIMMED) {
        opacity *= cfg.dim_opacity;
    }
    if opacity <= 0.0 {
        return Ok(());
    }

    match &node.shape {
        Shape::Group => {
            for c in &node.children {
                draw_node(root, c, opacity, cfg)?;
            }
        }
        Shape::Rect { x, y, w, h } => {
            let corners = [(px(*x), px(*y)), (px(x + w), px(y + h))];
            if let Some(fill) = &node.style.fill {
                let style = color(fill)?.mix(opacity).filled();
                root.draw(&Rectangle::new(corners, style)).map_err(render_err)?;
            }
            if let Some(stroke) = &node.style.stroke {
                let width = node.style.stroke_width.unwrap_or(1.0).round().max(1.0) as u32;
                let style = color(stroke)?.mix(opacity).stroke_width(width);
                root.draw(&Rectangle::new(corners, style)).map_err(render_err)?;
            }
        }
        Shape::Line { x1, y1, x2, y2 } => {
            let stroke = node.style.stroke.as_deref().unwrap_or("#000000");
            let width = node.style.stroke_width.unwrap_or(1.0).round().max(1.0) as u32;
            let style = color(stroke)?.mix(opacity).stroke_width(width);
            let segments = match node.style.dash {
                Some((dash, gap)) => dash_segments((*x1, *y1), (*x2, *y2), dash as f64, gap as f64),
                None => vec![((*x1, *y1), (*x2, *y2))],
            };
            for (a, b) in segments {
                root.draw(&PathElement::new(vec![(px(a.0), px(a.1)), (px(b.0), px(b.1))], style))
                    .map_err(render_err)?;
            }
        }
        Shape::Text { x, y, content, anchor, rotate } => {
            if content.is_empty() {
                return Ok(());
            }
            let fill = node.style.fill.as_deref().unwrap_or("#000000");
            let size = node.style.font_px.unwrap_or(cfg.font_px) as f64;
            let font_style = if node.style.font_weight_bold { FontStyle::Bold } else { FontStyle::Normal };
            let mut font = ("sans-serif", size, font_style).into_font();
            if rotate.is_some_and(|deg| deg.rem_euclid(360.0) == 270.0) {
                font = font.transform(FontTransform::Rotate270);
            }
            let h = match anchor {
                Anchor::Start => HPos::Left,
                Anchor::Middle => HPos::Center,
                Anchor::End => HPos::Right,
            };
            let style = font.color(&color(fill)?.mix(opacity)).pos(Pos::new(h, VPos::Bottom));
            // Missing fonts only cost the labels, not the chart.
            if let Err(e) = root.draw(&Text::new(content.clone(), (px(*x), px(*y)), style)) {
                if !TEXT_WARNED.swap(true, Ordering::Relaxed) {
                    log::warn!("skipping text, no usable font registered ({e:?})");
                }
            }
        }
    }
    Ok(())
}

/// Split a line into dash-length pieces separated by `gap`.
pub fn dash_segments(a: (f64, f64), b: (f64, f64), dash: f64, gap: f64) -> Vec<((f64, f64), (f64, f64))> {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 || dash <= 0.0 {
        return vec![(a, b)];
    }
    let (ux, uy) = (dx / len, dy / len);
    let at = |d: f64| (a.0 + ux * d, a.1 + uy * d);
    let mut out = Vec::new();
    let mut s = 0.0;
    while s < len {
        let e = (s + dash).min(len);
        out.push((at(s), at(e)));
        s += dash + gap;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashes_cover_the_line_with_gaps() {
        let segs = dash_segments((100.0, 10.0), (120.0, 10.0), 5.0, 5.0);
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0], ((100.0, 10.0), (105.0, 10.0)));
        assert_eq!(segs[1], ((110.0, 10.0), (115.0, 10.0)));
    }

    #[test]
    fn zero_length_line_is_one_segment() {
        assert_eq!(dash_segments((1.0, 1.0), (1.0, 1.0), 5.0, 5.0).len(), 1);
    }
}
