//! UI selection state as an immutable value plus a pure reducer.
//!
//! The presentation layer owns a [`SelectionState`], feeds user interactions
//! through [`reduce`], and re-derives everything it draws from the result.

use serde::{Deserialize, Serialize};

use crate::dataset::RegionDataset;
use crate::metrics::Metric;

/// Which metric is selected and which region is clicked or hovered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub metric: Metric,
    pub clicked: Option<String>,
    pub hovered: Option<String>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            metric: Metric::Wind,
            clicked: None,
            hovered: None,
        }
    }
}

impl SelectionState {
    /// Region for the detail panel: hover wins over a sticky click.
    pub fn displayed_region(&self) -> Option<&str> {
        self.hovered.as_deref().or(self.clicked.as_deref())
    }
}

/// A discrete user interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    SelectMetric(Metric),
    /// Pointer entered a tile (`Some`) or left the grid (`None`).
    HoverRegion(Option<String>),
    /// Clicking the clicked region again clears it; `None` clears explicitly.
    ClickRegion(Option<String>),
}

/// Apply `event` to `state`.
///
/// Events naming regions outside `dataset` are ignored and the state is
/// returned unchanged.
pub fn reduce(state: &SelectionState, event: Event, dataset: &RegionDataset) -> SelectionState {
    let mut next = state.clone();
    match event {
        Event::SelectMetric(metric) => next.metric = metric,
        Event::HoverRegion(target) => {
            if let Some(name) = target.as_deref()
                && !dataset.contains(name)
            {
                log::debug!("ignoring hover on unknown region {name:?}");
                return next;
            }
            next.hovered = target;
        }
        Event::ClickRegion(target) => {
            next.clicked = match target {
                Some(name) if !dataset.contains(&name) => {
                    log::debug!("ignoring click on unknown region {name:?}");
                    return next;
                }
                Some(name) if state.clicked.as_deref() == Some(name.as_str()) => None,
                other => other,
            };
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selects_wind_and_nothing_else() {
        let s = SelectionState::default();
        assert_eq!(s.metric, Metric::Wind);
        assert_eq!(s.displayed_region(), None);
    }
}
