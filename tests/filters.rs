use season_viewers::viz::bars::{BAR, DIMMED};
use season_viewers::viz::legend::{ACTIVE, toggle_id};
use season_viewers::{ChartApp, ChartConfig, FilterPolicy, Provenance};

const FIXTURE: &str = "tests/fixtures/seasons.csv";

fn dimmed_count(app: &ChartApp, p: Provenance) -> usize {
    app.scene()
        .select_class(BAR)
        .filter(|n| n.has_class(p.marker()) && n.has_class(DIMMED))
        .count()
}

fn bar_count(app: &ChartApp, p: Provenance) -> usize {
    app.scene()
        .select_class(BAR)
        .filter(|n| n.has_class(p.marker()))
        .count()
}

#[test]
fn actual_filter_dims_only_estimated_bars() {
    let mut app = ChartApp::load(FIXTURE, ChartConfig::default()).unwrap();
    app.click_filter(Provenance::Actual).unwrap();

    assert_eq!(dimmed_count(&app, Provenance::Estimated), bar_count(&app, Provenance::Estimated));
    assert_eq!(bar_count(&app, Provenance::Estimated), 3);
    assert_eq!(dimmed_count(&app, Provenance::Actual), 0);
    assert!(app.filters().actual_on);
    let toggle = app.scene().find_id(&toggle_id(Provenance::Actual)).unwrap();
    assert!(toggle.has_class(ACTIVE));

    app.click_filter(Provenance::Actual).unwrap();
    assert_eq!(app.scene().select_class(DIMMED).count(), 0);
    assert!(!app.filters().actual_on);
}

#[test]
fn estimated_filter_dims_actual_bars() {
    let mut app = ChartApp::load(FIXTURE, ChartConfig::default()).unwrap();
    app.click_filter(Provenance::Estimated).unwrap();
    assert_eq!(dimmed_count(&app, Provenance::Actual), 5);
    assert_eq!(dimmed_count(&app, Provenance::Estimated), 0);
}

#[test]
fn toggling_twice_restores_original_scene() {
    let mut app = ChartApp::load(FIXTURE, ChartConfig::default()).unwrap();
    let original = app.scene().clone();
    for _ in 0..2 {
        app.click_filter(Provenance::Actual).unwrap();
        app.click_filter(Provenance::Actual).unwrap();
    }
    assert_eq!(app.scene(), &original);
}

#[test]
fn composable_filters_keep_the_other_filter_in_effect() {
    let mut app = ChartApp::load(FIXTURE, ChartConfig::default()).unwrap();
    app.click_filter(Provenance::Actual).unwrap();
    app.click_filter(Provenance::Estimated).unwrap();
    assert_eq!(app.scene().select_class(DIMMED).count(), 8);

    app.click_filter(Provenance::Actual).unwrap();
    assert_eq!(dimmed_count(&app, Provenance::Estimated), 0);
    assert_eq!(dimmed_count(&app, Provenance::Actual), 5);
}

#[test]
fn clear_all_policy_releases_every_bar() {
    let cfg = ChartConfig {
        filter_policy: FilterPolicy::ClearAllOnRelease,
        ..ChartConfig::default()
    };
    let mut app = ChartApp::load(FIXTURE, cfg).unwrap();
    app.click_filter(Provenance::Actual).unwrap();
    app.click_filter(Provenance::Estimated).unwrap();
    app.click_filter(Provenance::Actual).unwrap();

    assert_eq!(app.scene().select_class(DIMMED).count(), 0);
    assert!(app.filters().estimated_on);
}
