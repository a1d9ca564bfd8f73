//! Pointer and click handling as a lookup table.
//!
//! Handlers are keyed by (element category, event name). Each one is a pure
//! function: it updates [`InteractionState`] and returns the [`Effect`]s the
//! scene should undergo, without touching any rendering surface. Combinations
//! missing from the table are ignored.

use crate::config::ChartConfig;
use crate::error::{ChartError, Result};
use crate::filter::{FilterPolicy, FilterState};
use crate::models::{Provenance, Season};
use crate::viz::tooltip::TooltipContent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementCategory {
    Bar,
    AverageLine,
    FilterToggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventName {
    Click,
    PointerEnter,
    PointerLeave,
}

/// The element an event lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The bar of the season with this year.
    Bar(i32),
    AverageLine,
    Toggle(Provenance),
}

impl Target {
    pub fn category(&self) -> ElementCategory {
        match self {
            Target::Bar(_) => ElementCategory::Bar,
            Target::AverageLine => ElementCategory::AverageLine,
            Target::Toggle(_) => ElementCategory::FilterToggle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    pub target: Target,
    pub name: EventName,
    /// Pointer position in canvas pixels.
    pub pointer: (f64, f64),
}

impl Event {
    pub fn new(target: Target, name: EventName, pointer: (f64, f64)) -> Self {
        Self { target, name, pointer }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipKind {
    Bar,
    Average,
}

/// A change to apply to the scene.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SetToggle { provenance: Provenance, on: bool },
    /// Add the dimmed marker to every bar of this category.
    Dim(Provenance),
    /// Remove the dimmed marker from every bar of this category.
    Undim(Provenance),
    /// Remove the dimmed marker from every bar.
    UndimAll,
    ShowTooltip {
        kind: TooltipKind,
        content: TooltipContent,
        at: (f64, f64),
        fade_ms: u32,
    },
    HideTooltip { kind: TooltipKind, fade_ms: u32 },
}

/// Everything event handling may change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    pub filters: FilterState,
    pub policy: FilterPolicy,
    /// Element currently under the pointer, if any. A leave event for any
    /// other element is stale and ignored.
    pub hovered: Option<Target>,
}

/// Read-only chart data handlers may consult.
pub struct HandlerContext<'a> {
    pub rows: &'a [Season],
    pub average: f64,
    pub cfg: &'a ChartConfig,
}

pub type Handler = fn(&mut InteractionState, &Event, &HandlerContext<'_>) -> Result<Vec<Effect>>;

static HANDLERS: &[((ElementCategory, EventName), Handler)] = &[
    ((ElementCategory::Bar, EventName::PointerEnter), bar_enter),
    ((ElementCategory::Bar, EventName::PointerLeave), bar_leave),
    ((ElementCategory::AverageLine, EventName::PointerEnter), average_enter),
    ((ElementCategory::AverageLine, EventName::PointerLeave), average_leave),
    ((ElementCategory::FilterToggle, EventName::Click), toggle_click),
];

pub fn lookup(category: ElementCategory, name: EventName) -> Option<Handler> {
    HANDLERS
        .iter()
        .find(|(key, _)| *key == (category, name))
        .map(|(_, h)| *h)
}

/// Run the handler registered for `event`, if any.
pub fn handle(
    state: &mut InteractionState,
    event: &Event,
    ctx: &HandlerContext<'_>,
) -> Result<Vec<Effect>> {
    match lookup(event.target.category(), event.name) {
        Some(h) => h(state, event, ctx),
        None => {
            log::trace!("no handler for {:?}", event);
            Ok(Vec::new())
        }
    }
}

// Tooltips sit 28px above the pointer.
fn tooltip_anchor((x, y): (f64, f64)) -> (f64, f64) {
    (x, y - 28.0)
}

fn target_row<'a>(ev: &Event, ctx: &HandlerContext<'a>) -> Result<&'a Season> {
    let Target::Bar(year) = ev.target else {
        return Err(ChartError::UnknownTarget(format!("{:?}", ev.target)));
    };
    ctx.rows
        .iter()
        .find(|r| r.year == year)
        .ok_or_else(|| ChartError::UnknownTarget(format!("bar for year {year}")))
}

fn bar_enter(state: &mut InteractionState, ev: &Event, ctx: &HandlerContext<'_>) -> Result<Vec<Effect>> {
    let row = target_row(ev, ctx)?;
    state.hovered = Some(ev.target);
    Ok(vec![Effect::ShowTooltip {
        kind: TooltipKind::Bar,
        content: TooltipContent::for_season(row),
        at: tooltip_anchor(ev.pointer),
        fade_ms: ctx.cfg.bar_fade_in_ms,
    }])
}

fn bar_leave(state: &mut InteractionState, ev: &Event, ctx: &HandlerContext<'_>) -> Result<Vec<Effect>> {
    target_row(ev, ctx)?;
    if state.hovered != Some(ev.target) {
        return Ok(Vec::new());
    }
    state.hovered = None;
    Ok(vec![Effect::HideTooltip {
        kind: TooltipKind::Bar,
        fade_ms: ctx.cfg.bar_fade_out_ms,
    }])
}

fn average_enter(state: &mut InteractionState, ev: &Event, ctx: &HandlerContext<'_>) -> Result<Vec<Effect>> {
    state.hovered = Some(ev.target);
    Ok(vec![Effect::ShowTooltip {
        kind: TooltipKind::Average,
        content: TooltipContent::for_average(ctx.average),
        at: tooltip_anchor(ev.pointer),
        fade_ms: ctx.cfg.average_fade_ms,
    }])
}

fn average_leave(state: &mut InteractionState, ev: &Event, ctx: &HandlerContext<'_>) -> Result<Vec<Effect>> {
    if state.hovered != Some(ev.target) {
        return Ok(Vec::new());
    }
    state.hovered = None;
    Ok(vec![Effect::HideTooltip {
        kind: TooltipKind::Average,
        fade_ms: ctx.cfg.average_fade_ms,
    }])
}

fn toggle_click(state: &mut InteractionState, ev: &Event, _ctx: &HandlerContext<'_>) -> Result<Vec<Effect>> {
    let Target::Toggle(p) = ev.target else {
        return Err(ChartError::UnknownTarget(format!("{:?}", ev.target)));
    };
    let policy = state.policy;
    Ok(state.filters.toggle(p, policy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_no_click_handler_for_bars() {
        assert!(lookup(ElementCategory::Bar, EventName::Click).is_none());
        assert!(lookup(ElementCategory::FilterToggle, EventName::Click).is_some());
        assert!(lookup(ElementCategory::FilterToggle, EventName::PointerEnter).is_none());
    }
}
