//! Linear scales mapping data values (years, millions of viewers) to pixels.

use crate::config::ChartConfig;
use crate::error::Result;
use crate::models::{AxisLimits, Season};
use crate::stats::find_limits;

/// Linear mapping from a domain interval onto a pixel range.
///
/// The domain may be inverted (`d0 > d1`); the y scale relies on this so that
/// larger values map to smaller pixel rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    #[inline]
    pub fn apply(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (v - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Roughly `count` evenly spaced round values inside the domain, in domain order.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }

    /// Decimal places needed to print the ticks from `ticks(count)` without loss.
    pub fn tick_precision(&self, count: usize) -> usize {
        let (lo, hi) = ordered(self.domain);
        let step = tick_step(lo, hi, count);
        if !(step.is_finite() && step > 0.0) {
            return 0;
        }
        (-step.log10().floor()).max(0.0) as usize
    }
}

/// Both chart scales, built once from the loaded rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScales {
    pub limits: AxisLimits,
    pub x: LinearScale,
    pub y: LinearScale,
}

impl ChartScales {
    /// Year axis padded by one year on both sides; viewership axis inverted
    /// with 4M headroom above the maximum and 6M below the minimum.
    pub fn build(rows: &[Season], cfg: &ChartConfig) -> Result<Self> {
        let limits = find_limits(rows)?;
        let (pad_lo, pad_hi) = limits.padding_years();
        let x = LinearScale::new((pad_lo as f64, pad_hi as f64), cfg.plot_x);
        let y = LinearScale::new(
            (limits.viewers_max + 4.0, limits.viewers_min - 6.0),
            cfg.plot_y,
        );
        log::debug!("scales: x {:?} -> {:?}, y {:?} -> {:?}", x.domain, x.range, y.domain, y.range);
        Ok(Self { limits, x, y })
    }

    /// Pixel column of a row's bar center.
    pub fn x_map(&self, row: &Season) -> f64 {
        self.x.apply(row.year as f64)
    }

    /// Pixel row of the top of a row's bar.
    pub fn y_map(&self, row: &Season) -> f64 {
        self.y.apply(row.avg_viewers_mil.value())
    }
}

fn ordered((a, b): (f64, f64)) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

// Step of 1, 2 or 5 times a power of ten closest to (hi - lo) / count.
fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
    if count == 0 {
        return f64::NAN;
    }
    let raw = (hi - lo) / count as f64;
    if !(raw.is_finite() && raw > 0.0) {
        return f64::NAN;
    }
    let power = raw.log10().floor();
    let base = 10f64.powf(power);
    let error = raw / base;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * base
}

/// Nice tick values between `start` and `stop` (either order), d3-style.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !(start.is_finite() && stop.is_finite()) || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (lo, hi) = ordered((start, stop));
    let step = tick_step(lo, hi, count);
    if !step.is_finite() {
        return Vec::new();
    }

    // Work in integer multiples of the step; for fractional steps divide by the
    // inverse instead so values like 0.1 * 3 print as 0.3.
    let mut out: Vec<f64> = if step < 1.0 {
        let inv = (1.0 / step).round();
        let i1 = (lo * inv).ceil() as i64;
        let i2 = (hi * inv).floor() as i64;
        (i1..=i2).map(|i| i as f64 / inv).collect()
    } else {
        let i1 = (lo / step).ceil() as i64;
        let i2 = (hi / step).floor() as i64;
        (i1..=i2).map(|i| i as f64 * step).collect()
    };
    if stop < start {
        out.reverse();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_follow_one_two_five_steps() {
        assert_eq!(nice_ticks(0.0, 10.0, 10), (0..=10).map(f64::from).collect::<Vec<_>>());
        assert_eq!(nice_ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(nice_ticks(1988.0, 2016.0, 30).len(), 29);
        assert_eq!(nice_ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn inverted_domain_ticks_descend() {
        let t = nice_ticks(30.0, 10.0, 4);
        assert_eq!(t, vec![30.0, 25.0, 20.0, 15.0, 10.0]);
    }

    #[test]
    fn precision_tracks_step() {
        let s = LinearScale::new((0.0, 1.0), (0.0, 100.0));
        assert_eq!(s.tick_precision(5), 1);
        let s = LinearScale::new((35.0, 5.0), (50.0, 550.0));
        assert_eq!(s.tick_precision(10), 0);
    }

    #[test]
    fn apply_maps_endpoints() {
        let s = LinearScale::new((1989.0, 1991.0), (100.0, 1050.0));
        assert_eq!(s.apply(1989.0), 100.0);
        assert_eq!(s.apply(1991.0), 1050.0);
        assert_eq!(s.apply(1990.0), 575.0);
    }
}
