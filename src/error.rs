//! Error type shared by the resolver, scale, and ranking functions.

use thiserror::Error;

/// Everything that can go wrong when querying or building a dataset.
///
/// All variants are local validation failures; nothing here is transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The region name is not part of the dataset.
    #[error("unknown region: {0}")]
    InvalidRegion(String),
    /// The metric key is outside `wind`, `hydro`, `solar`, `total`, `perCapita`.
    #[error("unknown metric: {0} (expected wind, hydro, solar, total or perCapita)")]
    InvalidMetric(String),
    /// Two regions share the same name.
    #[error("duplicate region: {0}")]
    DuplicateRegion(String),
    /// Population must be strictly positive for per-capita values.
    #[error("region {0} has a non-positive population")]
    NonPositivePopulation(String),
    /// Energy quantities are non-negative (and finite).
    #[error("region {region} has an invalid {field} quantity")]
    NegativeQuantity { region: String, field: &'static str },
    /// A dataset needs at least one region.
    #[error("dataset contains no regions")]
    EmptyDataset,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
