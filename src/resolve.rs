//! Value resolution for `(region, metric)` pairs.

use crate::dataset::RegionDataset;
use crate::error::Result;
use crate::metrics::Metric;
use crate::models::{Region, RegionDetail, RegionRow};

/// GWh to kWh.
pub const KWH_PER_GWH: f64 = 1_000_000.0;

/// Value of `metric` for a region that is already in hand.
///
/// Stored metrics are returned verbatim. `PerCapita` is
/// `total * 1_000_000 / population` rounded to the nearest integer, with
/// halves rounded away from zero (`f64::round`).
pub fn value_of(region: &Region, metric: Metric) -> f64 {
    match metric {
        Metric::Wind => region.wind,
        Metric::Hydro => region.hydro,
        Metric::Solar => region.solar,
        Metric::Total => region.total,
        Metric::PerCapita => per_capita(region.total, region.population),
    }
}

/// kWh per inhabitant for a total in GWh.
pub fn per_capita(total_gwh: f64, population: u64) -> f64 {
    (total_gwh * KWH_PER_GWH / population as f64).round()
}

/// Displayed value of `metric` for the named region.
///
/// Fails with `InvalidRegion` for names outside the dataset.
pub fn resolve(dataset: &RegionDataset, region: &str, metric: Metric) -> Result<f64> {
    Ok(value_of(dataset.get(region)?, metric))
}

/// Like [`resolve`], but takes the metric as its string key.
///
/// Fails with `InvalidMetric` for keys outside the closed set.
pub fn resolve_key(dataset: &RegionDataset, region: &str, metric_key: &str) -> Result<f64> {
    let metric = metric_key.parse::<Metric>()?;
    resolve(dataset, region, metric)
}

/// Resolved values of `metric` for every region, in dataset order.
pub fn values(dataset: &RegionDataset, metric: Metric) -> Vec<f64> {
    dataset
        .regions()
        .iter()
        .map(|r| value_of(r, metric))
        .collect()
}

/// The detail record for one region (all five metrics).
pub fn detail(dataset: &RegionDataset, region: &str) -> Result<RegionDetail> {
    let r = dataset.get(region)?;
    Ok(RegionDetail {
        name: r.name.clone(),
        wind: r.wind,
        hydro: r.hydro,
        solar: r.solar,
        total: r.total,
        per_capita: value_of(r, Metric::PerCapita),
    })
}

/// Flat rows for export, in dataset order.
pub fn rows(dataset: &RegionDataset) -> Vec<RegionRow> {
    dataset
        .regions()
        .iter()
        .map(|r| RegionRow {
            name: r.name.clone(),
            wind: r.wind,
            hydro: r.hydro,
            solar: r.solar,
            total: r.total,
            population: r.population,
            per_capita: value_of(r, Metric::PerCapita),
        })
        .collect()
}
