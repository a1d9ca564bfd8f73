use std::fs;

use season_viewers::viz::raster::render_plain_svg_string;
use season_viewers::viz::svg::to_svg_string;
use season_viewers::viz::OutputFormat;
use season_viewers::{ChartApp, ChartConfig, Provenance};
use tempfile::tempdir;

const FIXTURE: &str = "tests/fixtures/seasons.csv";

#[test]
fn interactive_svg_keeps_markers_and_hover_text() {
    let mut app = ChartApp::load(FIXTURE, ChartConfig::default()).unwrap();
    app.click_filter(Provenance::Actual).unwrap();

    let svg = to_svg_string(app.scene(), app.config());
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"id="bar-1990""#));
    assert!(svg.contains(r#"class="bar dimmed estimated""#));
    assert!(svg.contains(r#"class="actual bar""#));
    assert!(svg.contains(r##"fill="#85a2d1""##));
    assert!(svg.contains(r#"stroke-dasharray="5, 5""#));
    assert!(svg.contains("Viewership Data"));
    assert!(svg.contains("<title>Season # 1993"));
    assert!(svg.contains("Lisa&apos;s First Word"));
    assert!(svg.contains(".dimmed { opacity: 0.2; }"));
}

#[test]
fn writes_svg_and_png_files() {
    let dir = tempdir().unwrap();
    let app = ChartApp::load(FIXTURE, ChartConfig::default()).unwrap();

    let svg_path = dir.path().join("chart.svg");
    app.write(&svg_path, OutputFormat::from_path(&svg_path)).unwrap();
    assert!(fs::read_to_string(&svg_path).unwrap().contains("avg-line"));

    let png_path = dir.path().join("chart.png");
    assert_eq!(OutputFormat::from_path(&png_path), OutputFormat::Png);
    app.write(&png_path, OutputFormat::Png).unwrap();
    assert!(fs::metadata(&png_path).unwrap().len() > 0);
}

#[test]
fn plain_svg_goes_through_plotters() {
    let mut app = ChartApp::load(FIXTURE, ChartConfig::default()).unwrap();
    app.hover_bar(1995).unwrap();
    let svg = render_plain_svg_string(app.scene(), app.config()).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("<rect"));
    assert!(!svg.contains("bar-1995"));
}
