//! The two category filters.
//!
//! Turning on the "Actual" filter dims every estimated bar, and turning on
//! "Estimated" dims every actual bar. Bars are never hidden.

use crate::events::Effect;
use crate::models::Provenance;
use serde::{Deserialize, Serialize};

/// How the two toggles interact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterPolicy {
    /// The dimmed set is recomputed from both toggles after every click:
    /// a category is dimmed while the opposite category's filter is on.
    #[default]
    Composable,
    /// Switching either toggle off clears the dimmed marker from every bar,
    /// even if the other toggle is still on.
    ClearAllOnRelease,
}

/// On/off state of both toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterState {
    pub actual_on: bool,
    pub estimated_on: bool,
}

impl FilterState {
    pub fn is_on(&self, p: Provenance) -> bool {
        match p {
            Provenance::Actual => self.actual_on,
            Provenance::Estimated => self.estimated_on,
        }
    }

    fn set(&mut self, p: Provenance, on: bool) {
        match p {
            Provenance::Actual => self.actual_on = on,
            Provenance::Estimated => self.estimated_on = on,
        }
    }

    /// Whether bars of `p` should be dimmed when filters compose.
    pub fn dims(&self, p: Provenance) -> bool {
        self.is_on(p.opposite())
    }

    /// Flip the toggle for `p` and return the visual changes to apply.
    pub fn toggle(&mut self, p: Provenance, policy: FilterPolicy) -> Vec<Effect> {
        let on = !self.is_on(p);
        self.set(p, on);
        let mut effects = vec![Effect::SetToggle { provenance: p, on }];
        match policy {
            FilterPolicy::Composable => {
                for c in Provenance::ALL {
                    effects.push(if self.dims(c) { Effect::Dim(c) } else { Effect::Undim(c) });
                }
            }
            FilterPolicy::ClearAllOnRelease => {
                effects.push(if on { Effect::Dim(p.opposite()) } else { Effect::UndimAll });
            }
        }
        log::debug!("filter {p} -> {on} ({policy:?})");
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composable_toggles_recompute_both_categories() {
        let mut s = FilterState::default();
        let fx = s.toggle(Provenance::Actual, FilterPolicy::Composable);
        assert_eq!(
            fx,
            vec![
                Effect::SetToggle { provenance: Provenance::Actual, on: true },
                Effect::Undim(Provenance::Actual),
                Effect::Dim(Provenance::Estimated),
            ]
        );
        s.toggle(Provenance::Estimated, FilterPolicy::Composable);
        assert!(s.dims(Provenance::Actual) && s.dims(Provenance::Estimated));

        let fx = s.toggle(Provenance::Actual, FilterPolicy::Composable);
        assert!(fx.contains(&Effect::Dim(Provenance::Actual)));
        assert!(fx.contains(&Effect::Undim(Provenance::Estimated)));
    }

    #[test]
    fn clear_all_policy_releases_everything() {
        let mut s = FilterState::default();
        s.toggle(Provenance::Actual, FilterPolicy::ClearAllOnRelease);
        s.toggle(Provenance::Estimated, FilterPolicy::ClearAllOnRelease);
        let fx = s.toggle(Provenance::Actual, FilterPolicy::ClearAllOnRelease);
        assert_eq!(fx.last(), Some(&Effect::UndimAll));
        assert!(s.estimated_on);
    }

    #[test]
    fn policy_names_in_config() {
        let p: FilterPolicy = serde_json::from_str("\"clear-all-on-release\"").unwrap();
        assert_eq!(p, FilterPolicy::ClearAllOnRelease);
    }
}
