//! Render-ready data for one frame of the dashboard.
//!
//! [`DashboardView::build`] runs the resolver, color scale and ranking for the
//! current [`SelectionState`] and packs the results the way the charts consume
//! them. Nothing here draws; a UI layer takes the view and renders it.

use serde::Serialize;

use crate::dataset::RegionDataset;
use crate::error::Result;
use crate::metrics::Metric;
use crate::models::{GridCell, MixSlice, RankedValue, RegionDetail};
use crate::ranking::{national_mix, national_total, ranked, top_n};
use crate::resolve::detail;
use crate::scale::ScaleCache;
use crate::state::SelectionState;

/// Bars shown in the top chart unless configured otherwise.
pub const DEFAULT_TOP_N: usize = 10;

/// Knobs for [`DashboardView::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    pub top_n: usize,
    /// Clamp grid colors to 0..=255 instead of passing raw channels through.
    pub clamp_colors: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            clamp_colors: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardView {
    pub metric: Metric,
    pub metric_name: &'static str,
    pub unit: &'static str,
    /// Accent color for the selected metric (`#rrggbb`).
    pub accent: &'static str,
    pub grid_title: String,
    pub chart_title: String,
    /// Every region in ranked order.
    pub grid: Vec<GridCell>,
    pub top: Vec<RankedValue>,
    pub mix: Vec<MixSlice>,
    pub national_total: f64,
    pub detail: Option<RegionDetail>,
}

impl DashboardView {
    pub fn build(
        dataset: &RegionDataset,
        state: &SelectionState,
        cache: &mut ScaleCache,
        opts: &ViewOptions,
    ) -> Result<Self> {
        let metric = state.metric;
        let scale = cache.get(dataset, metric);
        let displayed = state.displayed_region();

        let grid = ranked(dataset, metric)
            .into_iter()
            .map(|rv| {
                let color = scale.color(rv.value);
                GridCell {
                    active: displayed == Some(rv.name.as_str()),
                    color: if opts.clamp_colors {
                        color.clamped()
                    } else {
                        color
                    },
                    name: rv.name,
                    value: rv.value,
                }
            })
            .collect();

        let detail = displayed.map(|name| detail(dataset, name)).transpose()?;

        Ok(Self {
            metric,
            metric_name: metric.name(),
            unit: metric.unit(),
            accent: metric.info().color,
            grid_title: format!("{} per län", metric.name()),
            chart_title: format!("Topp {} län - {}", opts.top_n, metric.name()),
            grid,
            top: top_n(dataset, metric, opts.top_n),
            mix: national_mix(dataset),
            national_total: national_total(dataset),
            detail,
        })
    }

    /// The grid cell currently highlighted, if any.
    pub fn active_cell(&self) -> Option<&GridCell> {
        self.grid.iter().find(|c| c.active)
    }
}
