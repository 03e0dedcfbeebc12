//! Metric registry: the closed set of selectable quantities and their display metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::scale::{Color, Gradient};

/// A selectable quantity used to rank and color regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Wind,
    Hydro,
    Solar,
    Total,
    /// Derived: `total` in kWh per inhabitant.
    PerCapita,
}

/// Static display metadata for one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub unit: &'static str,
    /// Accent color (`#rrggbb`) for buttons and bars.
    pub color: &'static str,
    /// Two-color ramp used by the region grid.
    pub gradient: Gradient,
}

static REGISTRY: [MetricInfo; 5] = [
    MetricInfo {
        key: "wind",
        name: "Vindkraft",
        unit: "GWh",
        color: "#3b82f6",
        gradient: Gradient::new([59.0, 130.0, 246.0], [30.0, 50.0, -100.0]),
    },
    MetricInfo {
        key: "hydro",
        name: "Vattenkraft",
        unit: "GWh",
        color: "#06b6d4",
        gradient: Gradient::new([6.0, 182.0, 212.0], [40.0, 50.0, -100.0]),
    },
    MetricInfo {
        key: "solar",
        name: "Solkraft",
        unit: "GWh",
        color: "#f59e0b",
        gradient: Gradient::new([245.0, 158.0, 11.0], [-50.0, 60.0, 100.0]),
    },
    MetricInfo {
        key: "total",
        name: "Total förnybar",
        unit: "GWh",
        color: "#10b981",
        gradient: Gradient::new([16.0, 185.0, 129.0], [50.0, -50.0, 50.0]),
    },
    MetricInfo {
        key: "perCapita",
        name: "kWh per invånare",
        unit: "kWh",
        color: "#8b5cf6",
        gradient: Gradient::new([139.0, 92.0, 246.0], [-80.0, 120.0, -100.0]),
    },
];

impl Metric {
    /// All metrics in button order.
    pub const ALL: [Metric; 5] = [
        Metric::Wind,
        Metric::Hydro,
        Metric::Solar,
        Metric::Total,
        Metric::PerCapita,
    ];

    /// The generation types that add up to a region's production, in mix order.
    pub const GENERATION: [Metric; 3] = [Metric::Hydro, Metric::Wind, Metric::Solar];

    pub fn info(self) -> &'static MetricInfo {
        &REGISTRY[self as usize]
    }

    pub fn key(self) -> &'static str {
        self.info().key
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn unit(self) -> &'static str {
        self.info().unit
    }

    pub fn gradient(self) -> Gradient {
        self.info().gradient
    }

    /// The accent color as a [`Color`]; the gradient start if the hex is malformed.
    pub fn accent(self) -> Color {
        Color::from_hex(self.info().color).unwrap_or_else(|| self.gradient().start())
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "wind" => Ok(Metric::Wind),
            "hydro" => Ok(Metric::Hydro),
            "solar" => Ok(Metric::Solar),
            "total" => Ok(Metric::Total),
            "perCapita" | "per-capita" | "per_capita" => Ok(Metric::PerCapita),
            other => Err(Error::InvalidMetric(other.to_string())),
        }
    }
}
