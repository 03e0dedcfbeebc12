//! Continuous color scale for the region grid.
//!
//! A value is min-max normalized against **all** regions for the selected
//! metric and mapped onto that metric's two-color gradient. Channel arithmetic
//! is left unclamped in [`Color`]; clamping happens only when converting to
//! 8-bit output ([`Color::to_rgb8`]) or when explicitly requested.

use ahash::AHashMap;
use serde::Serialize;

use crate::dataset::RegionDataset;
use crate::error::Result;
use crate::metrics::Metric;
use crate::resolve::{value_of, values};

/// RGB color with unclamped floating-point channels (nominally 0..=255).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// 8-bit RGB color ready for a renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let h = hex.strip_prefix('#')?;
        if h.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(h.get(i..i + 2)?, 16).ok();
        Some(Self::new(
            f64::from(channel(0)?),
            f64::from(channel(2)?),
            f64::from(channel(4)?),
        ))
    }

    /// Channels limited to the displayable range.
    pub fn clamped(self) -> Self {
        Self::new(clamp255(self.r), clamp255(self.g), clamp255(self.b))
    }

    /// True when every channel is inside 0..=255.
    pub fn in_gamut(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (0.0..=255.0).contains(c))
    }

    pub fn to_rgb8(self) -> Rgb8 {
        let c = self.clamped();
        Rgb8 {
            r: c.r.round() as u8,
            g: c.g.round() as u8,
            b: c.b.round() as u8,
        }
    }

    pub fn to_hex(self) -> String {
        let Rgb8 { r, g, b } = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// CSS `rgb(...)` with the raw channel values.
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

fn clamp255(x: f64) -> f64 {
    x.clamp(0.0, 255.0)
}

/// Linear two-color ramp: `channel = base + t * delta`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gradient {
    pub base: [f64; 3],
    pub delta: [f64; 3],
}

impl Gradient {
    pub const fn new(base: [f64; 3], delta: [f64; 3]) -> Self {
        Self { base, delta }
    }

    /// Color at position `t`; `t` is used as given.
    pub fn at(&self, t: f64) -> Color {
        Color::new(
            self.base[0] + t * self.delta[0],
            self.base[1] + t * self.delta[1],
            self.base[2] + t * self.delta[2],
        )
    }

    pub fn start(&self) -> Color {
        self.at(0.0)
    }

    pub fn end(&self) -> Color {
        self.at(1.0)
    }
}

/// Normalization basis for one metric over one dataset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorScale {
    pub metric: Metric,
    pub min: f64,
    pub max: f64,
}

impl ColorScale {
    /// Min and max of the resolved values across every region.
    pub fn for_metric(dataset: &RegionDataset, metric: Metric) -> Self {
        let vals = values(dataset, metric);
        let (min, max) = if vals.is_empty() {
            (0.0, 0.0)
        } else {
            (
                vals.iter().copied().fold(f64::INFINITY, f64::min),
                vals.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            )
        };
        log::trace!("scale for {metric}: min={min} max={max}");
        Self { metric, min, max }
    }

    /// All regions share one value; every color maps to the start of the ramp.
    pub fn is_degenerate(&self) -> bool {
        self.max <= self.min
    }

    /// Position of `value` on the scale, in `[0, 1]`.
    pub fn normalize(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    pub fn color(&self, value: f64) -> Color {
        self.metric.gradient().at(self.normalize(value))
    }
}

/// Grid color for the named region under `metric`.
///
/// The normalization basis is recomputed from the whole dataset on every call.
pub fn color_for(dataset: &RegionDataset, region: &str, metric: Metric) -> Result<Color> {
    let r = dataset.get(region)?;
    Ok(ColorScale::for_metric(dataset, metric).color(value_of(r, metric)))
}

/// Memoized [`ColorScale`]s keyed by metric.
///
/// Entries belong to a single dataset revision; asking with a different
/// dataset drops every cached scale first.
#[derive(Debug, Default)]
pub struct ScaleCache {
    revision: Option<u64>,
    scales: AHashMap<Metric, ColorScale>,
}

impl ScaleCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, dataset: &RegionDataset, metric: Metric) -> ColorScale {
        if self.revision != Some(dataset.revision()) {
            if self.revision.is_some() {
                log::debug!(
                    "dataset revision changed to {}, dropping {} cached scales",
                    dataset.revision(),
                    self.scales.len()
                );
            }
            self.scales.clear();
            self.revision = Some(dataset.revision());
        }
        *self
            .scales
            .entry(metric)
            .or_insert_with(|| ColorScale::for_metric(dataset, metric))
    }

    /// Grid color via the cached scale.
    pub fn color_for(
        &mut self,
        dataset: &RegionDataset,
        region: &str,
        metric: Metric,
    ) -> Result<Color> {
        let r = dataset.get(region)?;
        Ok(self.get(dataset, metric).color(value_of(r, metric)))
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    pub fn clear(&mut self) {
        self.scales.clear();
        self.revision = None;
    }
}
