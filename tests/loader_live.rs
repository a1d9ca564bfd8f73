//! Live download tests. Run with: `cargo test --features online --test loader_live -- --nocapture`
//!
//! Point `SEASON_VIEWERS_DATA_URL` at a CSV with the season columns.
#![cfg(feature = "online")]

use season_viewers::ChartApp;
use season_viewers::ChartConfig;
use std::process::Command;

fn data_url() -> Option<String> {
    match std::env::var("SEASON_VIEWERS_DATA_URL") {
        Ok(url) => Some(url),
        Err(_) => {
            eprintln!("SEASON_VIEWERS_DATA_URL not set; skipping");
            None
        }
    }
}

#[test]
fn load_remote_seasons() {
    let Some(url) = data_url() else { return };
    let app = ChartApp::load(&url, ChartConfig::default()).unwrap();
    assert!(!app.rows().is_empty());
    assert!(app.rows().windows(2).all(|w| w[0].year < w[1].year));
}

#[test]
fn run_cli_render_from_url() {
    let Some(url) = data_url() else { return };
    let exe = env!("CARGO_BIN_EXE_season-viewers");
    let tmp = std::env::temp_dir().join("season_viewers_live.svg");
    let status = Command::new(exe)
        .args(["render", "--data", &url, "--out"])
        .arg(&tmp)
        .status()
        .expect("spawn cli");
    assert!(status.success());
    assert!(std::fs::metadata(&tmp).is_ok());
    std::fs::remove_file(&tmp).ok();
}
