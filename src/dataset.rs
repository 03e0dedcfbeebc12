//! The immutable region table: construction, validation, and lookup.
//!
//! The reference snapshot covers Sweden's 21 counties (län) for 2023, based on
//! open data from SCB and Energimyndigheten. Custom datasets can be built with
//! [`RegionDataset::from_regions`], which enforces the invariants the resolver
//! relies on (unique names, positive population, non-negative quantities).

use ahash::{AHashMap, AHashSet};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{Error, Result};
use crate::models::Region;

/// (name, wind, hydro, solar, total, population); energy in GWh.
const REFERENCE_2023: [(&str, f64, f64, f64, f64, u64); 21] = [
    ("Norrbotten", 3420.0, 18500.0, 45.0, 21965.0, 251_295),
    ("Västerbotten", 4850.0, 9800.0, 38.0, 14688.0, 271_736),
    ("Jämtland", 2100.0, 7200.0, 22.0, 9322.0, 131_024),
    ("Västernorrland", 1680.0, 5100.0, 31.0, 6811.0, 245_453),
    ("Gävleborg", 890.0, 2800.0, 52.0, 3742.0, 287_382),
    ("Dalarna", 520.0, 3900.0, 48.0, 4468.0, 287_191),
    ("Värmland", 780.0, 2100.0, 35.0, 2915.0, 282_414),
    ("Örebro", 340.0, 180.0, 68.0, 588.0, 304_805),
    ("Västmanland", 125.0, 420.0, 55.0, 600.0, 279_334),
    ("Uppsala", 185.0, 280.0, 92.0, 557.0, 391_366),
    ("Stockholm", 95.0, 150.0, 185.0, 430.0, 2_415_064),
    ("Södermanland", 210.0, 190.0, 75.0, 475.0, 297_540),
    ("Östergötland", 1250.0, 320.0, 110.0, 1680.0, 465_495),
    ("Jönköping", 890.0, 580.0, 88.0, 1558.0, 367_064),
    ("Kronoberg", 520.0, 340.0, 62.0, 922.0, 201_469),
    ("Kalmar", 1580.0, 180.0, 95.0, 1855.0, 245_446),
    ("Gotland", 380.0, 0.0, 78.0, 458.0, 61_001),
    ("Blekinge", 240.0, 85.0, 48.0, 373.0, 159_606),
    ("Skåne", 3200.0, 120.0, 285.0, 3605.0, 1_396_612),
    ("Halland", 890.0, 220.0, 105.0, 1215.0, 333_848),
    ("Västra Götaland", 2450.0, 1800.0, 198.0, 4448.0, 1_746_259),
];

static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

/// Ordered, immutable set of regions.
///
/// Iteration order is the insertion order; ranking ties fall back to it.
#[derive(Debug, Clone)]
pub struct RegionDataset {
    regions: Vec<Region>,
    index: AHashMap<String, usize>,
    revision: u64,
}

impl RegionDataset {
    /// The compiled-in 2023 snapshot.
    pub fn reference() -> Self {
        let regions = REFERENCE_2023
            .iter()
            .map(|&(name, wind, hydro, solar, total, population)| {
                Region::new(name, wind, hydro, solar, total, population)
            })
            .collect();
        Self::assemble(regions)
    }

    /// Build a dataset from arbitrary regions after validating them.
    pub fn from_regions(regions: Vec<Region>) -> Result<Self> {
        if regions.is_empty() {
            return Err(Error::EmptyDataset);
        }
        let mut seen = AHashSet::with_capacity(regions.len());
        for r in &regions {
            if !seen.insert(r.name.as_str()) {
                return Err(Error::DuplicateRegion(r.name.clone()));
            }
            if r.population == 0 {
                return Err(Error::NonPositivePopulation(r.name.clone()));
            }
            for (field, v) in [
                ("wind", r.wind),
                ("hydro", r.hydro),
                ("solar", r.solar),
                ("total", r.total),
            ] {
                if !v.is_finite() || v < 0.0 {
                    return Err(Error::NegativeQuantity {
                        region: r.name.clone(),
                        field,
                    });
                }
            }
        }
        Ok(Self::assemble(regions))
    }

    fn assemble(regions: Vec<Region>) -> Self {
        let index = regions
            .iter()
            .enumerate()
            .map(|(i, r)| (r.name.clone(), i))
            .collect();
        let revision = NEXT_REVISION.fetch_add(1, Ordering::Relaxed);
        log::debug!(
            "dataset revision {revision} assembled with {} regions",
            regions.len()
        );
        Self {
            regions,
            index,
            revision,
        }
    }

    pub fn get(&self, name: &str) -> Result<&Region> {
        self.index
            .get(name)
            .map(|&i| &self.regions[i])
            .ok_or_else(|| Error::InvalidRegion(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|r| r.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Identifier unique to this constructed dataset; caches key on it.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Default for RegionDataset {
    fn default() -> Self {
        Self::reference()
    }
}
