use crate::dataset::RegionDataset;
use crate::resolve::rows;
use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save one row per region (all five metrics) as CSV with header.
pub fn save_csv<P: AsRef<Path>>(dataset: &RegionDataset, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    for mut row in rows(dataset) {
        row.name = sanitize_cell(&row.name);
        wtr.serialize(&row)?;
    }
    wtr.flush()?;
    log::debug!("wrote {} rows to {}", dataset.len(), path.display());
    Ok(())
}

/// Prefix text cells that a spreadsheet would evaluate as a formula.
fn sanitize_cell(s: &str) -> String {
    match s.chars().next() {
        Some('=' | '+' | '-' | '@' | '\t' | '\r') => format!("'{s}"),
        _ => s.to_string(),
    }
}

/// Save the same rows as a pretty JSON array.
pub fn save_json<P: AsRef<Path>>(dataset: &RegionDataset, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut f = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let s = serde_json::to_string_pretty(&rows(dataset))?;
    f.write_all(s.as_bytes())?;
    log::debug!("wrote {} rows to {}", dataset.len(), path.display());
    Ok(())
}
