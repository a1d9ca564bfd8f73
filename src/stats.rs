use crate::error::{ChartError, Result};
use crate::models::{AxisLimits, Provenance, Season};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary statistics for one provenance category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub provenance: Provenance,
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Year and viewership bounds, viewership rounded outward to 0.05.
pub fn find_limits(rows: &[Season]) -> Result<AxisLimits> {
    let year_min = rows.iter().map(|r| r.year).min().ok_or(ChartError::EmptyData)?;
    let year_max = rows.iter().map(|r| r.year).max().ok_or(ChartError::EmptyData)?;
    let vmin = rows
        .iter()
        .map(|r| r.avg_viewers_mil.value())
        .fold(f64::INFINITY, f64::min);
    let vmax = rows
        .iter()
        .map(|r| r.avg_viewers_mil.value())
        .fold(f64::NEG_INFINITY, f64::max);
    Ok(AxisLimits {
        year_min,
        year_max,
        viewers_min: round_to_twentieth(vmin, f64::floor),
        viewers_max: round_to_twentieth(vmax, f64::ceil),
    })
}

// Snap to a multiple of 0.05. Products like 22.4 * 20 land a hair below 448, so the
// scaled value is cleaned to 6 decimals before snapping.
fn round_to_twentieth(v: f64, snap: fn(f64) -> f64) -> f64 {
    let scaled = (v * 20.0 * 1e6).round() / 1e6;
    let snapped = snap(scaled) / 20.0;
    (snapped * 100.0).round() / 100.0
}

/// Round to one decimal place, halves away from zero.
pub fn round_to_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Mean of the average-viewership column, rounded to one decimal.
pub fn average_viewers(rows: &[Season]) -> Result<f64> {
    if rows.is_empty() {
        return Err(ChartError::EmptyData);
    }
    let total: f64 = rows.iter().map(|r| r.avg_viewers_mil.value()).sum();
    Ok(round_to_tenth(total / rows.len() as f64))
}

/// Per-category statistics, ordered Actual then Estimated; absent categories are skipped.
pub fn provenance_summary(rows: &[Season]) -> Vec<Summary> {
    let mut groups: BTreeMap<Provenance, Vec<f64>> = BTreeMap::new();
    for r in rows {
        groups.entry(r.provenance).or_default().push(r.avg_viewers_mil.value());
    }

    let mut out = Vec::new();
    for (provenance, vals) in groups {
        let count = vals.len();
        let min = vals.iter().copied().fold(f64::INFINITY, f64::min);
        let max = vals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = vals.iter().sum::<f64>() / count as f64;
        out.push(Summary { provenance, count, min, max, mean });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(year: i32, v: f64) -> Season {
        Season {
            year,
            num_episodes: 22,
            avg_viewers_mil: v.into(),
            most_watched_episode: "Ep".into(),
            most_watched_viewers_mil: (v + 5.0).into(),
            provenance: Provenance::Actual,
        }
    }

    #[test]
    fn limits_round_outward() {
        let rows = vec![row(1990, 27.81), row(1991, 24.43), row(1992, 22.43)];
        let l = find_limits(&rows).unwrap();
        assert_eq!((l.year_min, l.year_max), (1990, 1992));
        assert_eq!(l.viewers_max, 27.85);
        assert_eq!(l.viewers_min, 22.4);
    }

    #[test]
    fn limits_of_empty_is_error() {
        assert!(matches!(find_limits(&[]), Err(ChartError::EmptyData)));
    }

    #[test]
    fn tenth_rounding_goes_half_up() {
        assert_eq!(round_to_tenth(20.25), 20.3);
        assert_eq!(round_to_tenth(20.136), 20.1);
        assert_eq!(round_to_tenth(0.05), 0.1);
    }
}
