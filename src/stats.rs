use crate::dataset::RegionDataset;
use crate::metrics::Metric;
use crate::resolve::value_of;
use serde::{Deserialize, Serialize};

/// Summary statistics for one metric across all regions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub metric: Metric,
    pub count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    /// Region holding the minimum (first in dataset order on ties).
    pub min_region: Option<String>,
    /// Region holding the maximum (first in dataset order on ties).
    pub max_region: Option<String>,
}

/// Compute statistics for one metric.
pub fn summary(dataset: &RegionDataset, metric: Metric) -> Summary {
    let pairs: Vec<(&str, f64)> = dataset
        .regions()
        .iter()
        .map(|r| (r.name.as_str(), value_of(r, metric)))
        .collect();

    let mut vals: Vec<f64> = pairs.iter().map(|(_, v)| *v).collect();
    vals.sort_by(|a, b| a.total_cmp(b));
    let count = vals.len();
    let min = vals.first().cloned();
    let max = vals.last().cloned();
    let mean = if count > 0 {
        Some(vals.iter().copied().sum::<f64>() / count as f64)
    } else {
        None
    };
    let median = if count == 0 {
        None
    } else if count % 2 == 1 {
        Some(vals[count / 2])
    } else {
        Some((vals[count / 2 - 1] + vals[count / 2]) / 2.0)
    };
    let holder = |target: Option<f64>| {
        target.and_then(|t| {
            pairs
                .iter()
                .find(|(_, v)| *v == t)
                .map(|(n, _)| n.to_string())
        })
    };

    Summary {
        metric,
        count,
        min,
        max,
        mean,
        median,
        min_region: holder(min),
        max_region: holder(max),
    }
}

/// Statistics for every metric, in registry order.
pub fn summaries(dataset: &RegionDataset) -> Vec<Summary> {
    Metric::ALL.iter().map(|&m| summary(dataset, m)).collect()
}

/// A region whose supplied `total` disagrees with `wind + hydro + solar`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Discrepancy {
    pub name: String,
    pub total: f64,
    pub component_sum: f64,
    /// `total - component_sum`
    pub difference: f64,
}

/// Regions whose total differs from the sum of components by more than `tolerance` GWh.
///
/// Reporting only; `total` stays authoritative.
pub fn total_discrepancies(dataset: &RegionDataset, tolerance: f64) -> Vec<Discrepancy> {
    dataset
        .regions()
        .iter()
        .filter_map(|r| {
            let component_sum = r.component_sum();
            let difference = r.total - component_sum;
            (difference.abs() > tolerance).then(|| Discrepancy {
                name: r.name.clone(),
                total: r.total,
                component_sum,
                difference,
            })
        })
        .collect()
}
