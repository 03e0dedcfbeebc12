//! renewables_se
//!
//! The computational core of an interactive dashboard over Swedish regional
//! renewable-energy statistics (wind, hydro, solar, totals, per-capita).
//! Pairs with the `renewables` CLI.
//!
//! ### Features
//! - Compiled-in 2023 snapshot of the 21 counties, or validated custom datasets
//! - Value resolution per `(region, metric)`, including derived kWh per inhabitant
//! - Min-max normalized color scale with a two-color gradient per metric
//! - Stable rankings, top-N lists, national mix and totals
//! - Selection state as a value plus a pure reducer, and a render-ready view model
//! - Locale-aware number formatting, summary statistics, CSV/JSON export
//!
//! ### Example
//! ```
//! use renewables_se::{Metric, RegionDataset, ranking, scale};
//!
//! let data = RegionDataset::reference();
//! let top = ranking::top_n(&data, Metric::Wind, 3);
//! assert_eq!(top[0].name, "Västerbotten");
//! let color = scale::color_for(&data, "Västerbotten", Metric::Wind)?;
//! println!("{}", color.to_css());
//! # Ok::<(), renewables_se::Error>(())
//! ```

pub mod dataset;
pub mod error;
pub mod format;
pub mod metrics;
pub mod models;
pub mod ranking;
pub mod resolve;
pub mod scale;
pub mod state;
pub mod stats;
pub mod storage;
pub mod view;

pub use dataset::RegionDataset;
pub use error::{Error, Result};
pub use metrics::Metric;
pub use models::{GridCell, MixSlice, RankedValue, Region, RegionDetail};
pub use resolve::resolve;
pub use scale::{Color, ColorScale, ScaleCache};
pub use state::{Event, SelectionState, reduce};
pub use view::{DashboardView, ViewOptions};
