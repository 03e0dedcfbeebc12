use serde::{Deserialize, Serialize};

use crate::scale::Color;

/// One administrative region and its renewable production for the snapshot year.
///
/// Energy quantities are in GWh. `total` is supplied independently of the three
/// components and is treated as authoritative; it is never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Region {
    pub name: String,
    pub wind: f64,
    pub hydro: f64,
    pub solar: f64,
    pub total: f64,
    pub population: u64,
}

impl Region {
    pub fn new(
        name: impl Into<String>,
        wind: f64,
        hydro: f64,
        solar: f64,
        total: f64,
        population: u64,
    ) -> Self {
        Self {
            name: name.into(),
            wind,
            hydro,
            solar,
            total,
            population,
        }
    }

    /// `wind + hydro + solar`, for auditing against `total`.
    pub fn component_sum(&self) -> f64 {
        self.wind + self.hydro + self.solar
    }
}

/// Every metric value for the region shown in the detail panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegionDetail {
    pub name: String,
    pub wind: f64,
    pub hydro: f64,
    pub solar: f64,
    pub total: f64,
    pub per_capita: f64,
}

/// Flat export row: the stored fields plus the resolved per-capita value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegionRow {
    pub name: String,
    pub wind: f64,
    pub hydro: f64,
    pub solar: f64,
    pub total: f64,
    pub population: u64,
    pub per_capita: f64,
}

/// One tile of the ranked region grid.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GridCell {
    pub name: String,
    pub value: f64,
    pub color: Color,
    /// True for the region currently shown in the detail panel.
    pub active: bool,
}

/// One bar of the top-N chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedValue {
    pub name: String,
    pub value: f64,
}

/// One slice of the national energy-mix pie.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MixSlice {
    pub label: String,
    pub value: f64,
    pub color: Color,
}

impl MixSlice {
    /// Fraction of the whole mix this slice represents, in `[0, 1]`.
    ///
    /// Returns 0 when the mix sums to zero.
    pub fn share(&self, mix: &[MixSlice]) -> f64 {
        let sum: f64 = mix.iter().map(|s| s.value).sum();
        if sum > 0.0 { self.value / sum } else { 0.0 }
    }
}
