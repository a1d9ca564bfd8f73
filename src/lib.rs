//! season_viewers
//!
//! Render a bar chart of television-season viewership: one bar per season
//! colored by whether its figure is measured or estimated, a dashed line at the
//! average, hover tooltips, and two filters that dim the other category.
//! Pairs with the `season-viewers` CLI.
//!
//! ### Features
//! - Load seasons from a CSV file or an HTTP URL
//! - Scales with padded year ticks and separator-free labels
//! - Pure event table for hover and filter clicks, applied to an in-memory scene
//! - Output as interactive SVG, plain SVG or PNG
//!
//! ### Example
//! ```no_run
//! use season_viewers::{ChartApp, ChartConfig, Provenance};
//! use season_viewers::viz::OutputFormat;
//!
//! let mut app = ChartApp::load("SimpsonsData.csv", ChartConfig::default())?;
//! app.click_filter(Provenance::Actual)?;
//! app.write("viewers.svg", OutputFormat::Svg)?;
//! println!("average {:.1}M", app.average());
//! # Ok::<(), season_viewers::ChartError>(())
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod filter;
pub mod loader;
pub mod models;
pub mod scale;
pub mod stats;
pub mod viz;

pub use app::ChartApp;
pub use config::ChartConfig;
pub use error::ChartError;
pub use filter::{FilterPolicy, FilterState};
pub use models::{AxisLimits, Millions, Provenance, Season};
