//! Application state built once per chart.
//!
//! `ChartApp` owns the loaded rows, the scales, the rendered scene and the
//! interaction state. Events go through [`ChartApp::dispatch`], which consults
//! the handler table and applies the resulting effects to the scene.

use crate::config::ChartConfig;
use crate::error::{ChartError, Result};
use crate::events::{self, Effect, Event, EventName, HandlerContext, InteractionState, Target, TooltipKind};
use crate::filter::FilterState;
use crate::loader;
use crate::models::{Provenance, Season};
use crate::scale::ChartScales;
use crate::stats::average_viewers;
use crate::viz::bars::{BAR, DIMMED};
use crate::viz::legend::{ACTIVE, toggle_id};
use crate::viz::scene::Scene;
use crate::viz::tooltip::{AVERAGE_TOOLTIP_ID, BAR_TOOLTIP_ID, fill_tooltip, set_visibility};
use crate::viz::{self, OutputFormat};
use std::path::Path;

pub struct ChartApp {
    cfg: ChartConfig,
    rows: Vec<Season>,
    scales: ChartScales,
    average: f64,
    scene: Scene,
    state: InteractionState,
}

impl ChartApp {
    /// Validate `rows`, compute scales and the average, and draw the initial scene.
    pub fn new(mut rows: Vec<Season>, cfg: ChartConfig) -> Result<Self> {
        cfg.validate()?;
        loader::validate(&mut rows)?;
        let scales = ChartScales::build(&rows, &cfg)?;
        let average = average_viewers(&rows)?;
        let scene = viz::build_scene(&rows, &scales, average, &cfg);
        log::info!(
            "chart ready: {} seasons {}-{}, average {average:.1}M",
            rows.len(),
            scales.limits.year_min,
            scales.limits.year_max
        );
        let state = InteractionState {
            policy: cfg.filter_policy,
            ..InteractionState::default()
        };
        Ok(Self { cfg, rows, scales, average, scene, state })
    }

    /// Load rows from a path or URL and build the chart.
    pub fn load(source: &str, cfg: ChartConfig) -> Result<Self> {
        let rows = loader::load_source(source)?;
        Self::new(rows, cfg)
    }

    pub fn rows(&self) -> &[Season] {
        &self.rows
    }

    pub fn scales(&self) -> &ChartScales {
        &self.scales
    }

    pub fn average(&self) -> f64 {
        self.average
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn config(&self) -> &ChartConfig {
        &self.cfg
    }

    pub fn filters(&self) -> FilterState {
        self.state.filters
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.state
    }

    /// Handle one event and apply its effects; returns the effects applied.
    pub fn dispatch(&mut self, event: Event) -> Result<Vec<Effect>> {
        let ctx = HandlerContext {
            rows: &self.rows,
            average: self.average,
            cfg: &self.cfg,
        };
        let effects = events::handle(&mut self.state, &event, &ctx)?;
        self.apply(&effects)?;
        Ok(effects)
    }

    pub fn click_filter(&mut self, p: Provenance) -> Result<Vec<Effect>> {
        self.dispatch(Event::new(Target::Toggle(p), EventName::Click, (0.0, 0.0)))
    }

    /// Hover a season's bar with the pointer at the bar's top center.
    pub fn hover_bar(&mut self, year: i32) -> Result<Vec<Effect>> {
        let row = self
            .rows
            .iter()
            .find(|r| r.year == year)
            .ok_or_else(|| ChartError::UnknownTarget(format!("bar for year {year}")))?;
        let pointer = (self.scales.x_map(row), self.scales.y_map(row));
        self.dispatch(Event::new(Target::Bar(year), EventName::PointerEnter, pointer))
    }

    pub fn leave_bar(&mut self, year: i32) -> Result<Vec<Effect>> {
        self.dispatch(Event::new(Target::Bar(year), EventName::PointerLeave, (0.0, 0.0)))
    }

    /// Hover the average line at its horizontal midpoint.
    pub fn hover_average(&mut self) -> Result<Vec<Effect>> {
        let (left, right) = self.cfg.plot_x;
        let pointer = ((left + right) / 2.0, self.scales.y.apply(self.average));
        self.dispatch(Event::new(Target::AverageLine, EventName::PointerEnter, pointer))
    }

    pub fn leave_average(&mut self) -> Result<Vec<Effect>> {
        self.dispatch(Event::new(Target::AverageLine, EventName::PointerLeave, (0.0, 0.0)))
    }

    /// Apply effects to the scene.
    pub fn apply(&mut self, effects: &[Effect]) -> Result<()> {
        for effect in effects {
            match effect {
                Effect::SetToggle { provenance, on } => {
                    let id = toggle_id(*provenance);
                    let node = self
                        .scene
                        .find_id_mut(&id)
                        .ok_or_else(|| ChartError::UnknownTarget(id.clone()))?;
                    node.classed(ACTIVE, *on);
                }
                Effect::Dim(p) => self.mark_bars(Some(*p), true),
                Effect::Undim(p) => self.mark_bars(Some(*p), false),
                Effect::UndimAll => self.mark_bars(None, false),
                Effect::ShowTooltip { kind, content, at, fade_ms } => {
                    let font_px = self.cfg.font_px;
                    let node = self.tooltip_mut(*kind)?;
                    fill_tooltip(node, content, *at, font_px);
                    set_visibility(node, true, *fade_ms);
                }
                Effect::HideTooltip { kind, fade_ms } => {
                    let node = self.tooltip_mut(*kind)?;
                    set_visibility(node, false, *fade_ms);
                }
            }
        }
        Ok(())
    }

    // `None` targets every bar.
    fn mark_bars(&mut self, category: Option<Provenance>, dimmed: bool) {
        self.scene.for_each_class_mut(BAR, |node| {
            if category.is_none_or(|c| node.has_class(c.marker())) {
                node.classed(DIMMED, dimmed);
            }
        });
    }

    fn tooltip_mut(&mut self, kind: TooltipKind) -> Result<&mut crate::viz::scene::Node> {
        let id = match kind {
            TooltipKind::Bar => BAR_TOOLTIP_ID,
            TooltipKind::Average => AVERAGE_TOOLTIP_ID,
        };
        self.scene
            .find_id_mut(id)
            .ok_or_else(|| ChartError::UnknownTarget(id.to_string()))
    }

    /// Write the current scene in `format`.
    pub fn write<P: AsRef<Path>>(&self, path: P, format: OutputFormat) -> Result<()> {
        viz::write_scene(&self.scene, &self.cfg, path.as_ref(), format)
    }
}
