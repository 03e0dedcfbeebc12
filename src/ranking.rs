//! Ranked region lists and national aggregates.

use std::cmp::Ordering;

use crate::dataset::RegionDataset;
use crate::error::{Error, Result};
use crate::metrics::Metric;
use crate::models::{MixSlice, RankedValue};
use crate::resolve::value_of;

/// Regions and their values sorted by value, highest first.
///
/// The sort is stable: equal values keep dataset order.
pub fn ranked(dataset: &RegionDataset, metric: Metric) -> Vec<RankedValue> {
    let mut out: Vec<RankedValue> = dataset
        .regions()
        .iter()
        .map(|r| RankedValue {
            name: r.name.clone(),
            value: value_of(r, metric),
        })
        .collect();
    // Values are finite; -0.0 and 0.0 must compare equal here.
    out.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
    out
}

/// Region names sorted by value, highest first.
pub fn ranked_regions(dataset: &RegionDataset, metric: Metric) -> Vec<String> {
    ranked(dataset, metric).into_iter().map(|r| r.name).collect()
}

/// The first `n` entries of the ranking; all of them when `n` exceeds the count.
pub fn top_n(dataset: &RegionDataset, metric: Metric, n: usize) -> Vec<RankedValue> {
    let mut all = ranked(dataset, metric);
    all.truncate(n);
    all
}

/// 1-based position of `region` in the ranking.
pub fn rank_of(dataset: &RegionDataset, metric: Metric, region: &str) -> Result<usize> {
    ranked(dataset, metric)
        .iter()
        .position(|r| r.name == region)
        .map(|i| i + 1)
        .ok_or_else(|| Error::InvalidRegion(region.to_string()))
}

/// Sum of `metric` over all regions. Not meaningful for `PerCapita`.
pub fn national_sum(dataset: &RegionDataset, metric: Metric) -> f64 {
    dataset.regions().iter().map(|r| value_of(r, metric)).sum()
}

/// National production per generation type (hydro, wind, solar).
///
/// `total` and `perCapita` are excluded: the former duplicates the three
/// components, the latter does not add up across regions.
pub fn national_mix(dataset: &RegionDataset) -> Vec<MixSlice> {
    Metric::GENERATION
        .iter()
        .map(|&metric| MixSlice {
            label: metric.name().to_string(),
            value: national_sum(dataset, metric),
            color: metric.accent(),
        })
        .collect()
}

/// Sum of the authoritative `total` field across all regions.
pub fn national_total(dataset: &RegionDataset) -> f64 {
    national_sum(dataset, Metric::Total)
}

/// National kWh per inhabitant, from the summed totals and populations.
pub fn national_per_capita(dataset: &RegionDataset) -> f64 {
    let population: u64 = dataset.regions().iter().map(|r| r.population).sum();
    if population == 0 {
        return 0.0;
    }
    crate::resolve::per_capita(national_total(dataset), population)
}
