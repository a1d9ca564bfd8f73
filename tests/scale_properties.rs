use season_viewers::models::{Provenance, Season};
use season_viewers::scale::ChartScales;
use season_viewers::viz::bars::bar_rect;
use season_viewers::{ChartApp, ChartConfig};

fn season(year: i32, v: f64) -> Season {
    Season {
        year,
        num_episodes: 22,
        avg_viewers_mil: v.into(),
        most_watched_episode: format!("Episode {year}"),
        most_watched_viewers_mil: (v + 3.0).into(),
        provenance: Provenance::Actual,
    }
}

#[test]
fn x_increases_with_year_and_y_decreases_with_viewers() {
    let rows: Vec<Season> = [(1990, 27.8), (1991, 24.4), (1995, 15.6), (2003, 9.1), (2014, 0.0)]
        .into_iter()
        .map(|(y, v)| season(y, v))
        .collect();
    let cfg = ChartConfig::default();
    let scales = ChartScales::build(&rows, &cfg).unwrap();

    for w in rows.windows(2) {
        assert!(scales.x_map(&w[0]) < scales.x_map(&w[1]));
    }
    let mut by_viewers = rows.clone();
    by_viewers.sort_by(|a, b| a.avg_viewers_mil.value().partial_cmp(&b.avg_viewers_mil.value()).unwrap());
    for w in by_viewers.windows(2) {
        assert!(scales.y_map(&w[0]) > scales.y_map(&w[1]));
    }
}

#[test]
fn domains_are_padded() {
    let rows = vec![season(1990, 27.81), season(1991, 14.43)];
    let scales = ChartScales::build(&rows, &ChartConfig::default()).unwrap();
    assert_eq!(scales.x.domain, (1989.0, 1992.0));
    assert_eq!(scales.x.range, (100.0, 1050.0));
    assert!((scales.y.domain.0 - 31.85).abs() < 1e-9);
    assert!((scales.y.domain.1 - 8.4).abs() < 1e-9);
    assert_eq!(scales.y.range, (50.0, 550.0));
}

#[test]
fn single_row_spans_two_years_and_keeps_bar_width() {
    let rows = vec![season(2000, 12.5)];
    let cfg = ChartConfig::default();
    let scales = ChartScales::build(&rows, &cfg).unwrap();
    assert_eq!(scales.x.domain, (1999.0, 2001.0));
    assert_eq!(scales.x_map(&rows[0]), 575.0);

    let (x, y, w, h) = bar_rect(&rows[0], &scales, &cfg);
    assert_eq!(w, 34.0);
    assert_eq!(x, 575.0 - 17.0);
    assert!((y + h - 550.0).abs() < 1e-9);
}

#[test]
fn empty_rows_are_rejected() {
    let err = ChartApp::new(Vec::new(), ChartConfig::default());
    assert!(err.is_err());
}
