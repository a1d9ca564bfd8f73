use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a season's viewership figure was measured or estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Provenance {
    Actual,
    Estimated,
}

impl Provenance {
    /// Marker class attached to bars of this category.
    pub fn marker(self) -> &'static str {
        match self {
            Provenance::Actual => "actual",
            Provenance::Estimated => "estimated",
        }
    }

    /// The category a filter toggle for `self` dims.
    pub fn opposite(self) -> Provenance {
        match self {
            Provenance::Actual => Provenance::Estimated,
            Provenance::Estimated => Provenance::Actual,
        }
    }

    pub const ALL: [Provenance; 2] = [Provenance::Actual, Provenance::Estimated];
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Actual => f.write_str("Actual"),
            Provenance::Estimated => f.write_str("Estimated"),
        }
    }
}

/// A viewer count in millions, kept together with the text it was read from
/// so labels show `20.0` rather than `20`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Millions {
    value: f64,
    text: String,
}

impl Millions {
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<f64> for Millions {
    fn from(value: f64) -> Self {
        Self { value, text: value.to_string() }
    }
}

impl TryFrom<String> for Millions {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        let text = raw.trim().to_string();
        let value = text
            .parse::<f64>()
            .map_err(|e| format!("invalid viewer count {text:?}: {e}"))?;
        Ok(Self { value, text })
    }
}

impl From<Millions> for String {
    fn from(m: Millions) -> Self {
        m.text
    }
}

impl fmt::Display for Millions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// One season of viewership statistics (one row of the input file).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub year: i32,
    #[serde(rename = "num_episodes")]
    pub num_episodes: u32,
    #[serde(rename = "avg_num_viewers_mil")]
    pub avg_viewers_mil: Millions,
    #[serde(rename = "most_watched_epi")]
    pub most_watched_episode: String,
    #[serde(rename = "viewers_of_most_watched_epi")]
    pub most_watched_viewers_mil: Millions,
    #[serde(rename = "actual_estimated")]
    pub provenance: Provenance,
}

/// Axis bounds derived once from the loaded rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLimits {
    pub year_min: i32,
    pub year_max: i32,
    /// Lowest average viewership, floored to a multiple of 0.05.
    pub viewers_min: f64,
    /// Highest average viewership, ceiled to a multiple of 0.05.
    pub viewers_max: f64,
}

impl AxisLimits {
    /// The blank ticks reserved on both ends of the year axis.
    pub fn padding_years(&self) -> (i32, i32) {
        (self.year_min - 1, self.year_max + 1)
    }
}
