use renewables_se::models::{Region, RegionRow};
use renewables_se::storage;
use renewables_se::RegionDataset;
use std::fs;
use tempfile::tempdir;

#[test]
fn save_csv_and_json() {
    let ds = RegionDataset::reference();
    let dir = tempdir().unwrap();

    let csv_path = dir.path().join("regions.csv");
    storage::save_csv(&ds, &csv_path).unwrap();
    let csv_txt = fs::read_to_string(&csv_path).unwrap();
    assert!(csv_txt.starts_with("name,wind,hydro,solar,total,population,perCapita"));
    assert_eq!(csv_txt.lines().count(), 1 + ds.len());

    let json_path = dir.path().join("regions.json");
    storage::save_json(&ds, &json_path).unwrap();
    let json_txt = fs::read_to_string(&json_path).unwrap();
    let rows: Vec<RegionRow> = serde_json::from_str(&json_txt).unwrap();
    assert_eq!(rows.len(), ds.len());
    let stockholm = rows.iter().find(|r| r.name == "Stockholm").unwrap();
    assert_eq!(stockholm.per_capita, 178.0);
    assert_eq!(stockholm.population, 2_415_064);
}

#[test]
fn csv_round_trips_through_reader() {
    let ds = RegionDataset::reference();
    let dir = tempdir().unwrap();
    let path = dir.path().join("r.csv");
    storage::save_csv(&ds, &path).unwrap();

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let rows: Vec<RegionRow> = rdr.deserialize().map(|r| r.unwrap()).collect();
    assert_eq!(rows[0].name, "Norrbotten");
    assert_eq!(rows[0].per_capita, 87407.0);
    assert_eq!(rows[18].name, "Skåne");
}

#[test]
fn csv_cells_are_prefixed_to_avoid_formulas() {
    let ds = RegionDataset::from_regions(vec![
        Region::new("=HYPERLINK(\"http://evil\")", 1.0, 0.0, 0.0, 1.0, 1),
        Region::new("@foo", 1.0, 0.0, 0.0, 1.0, 1),
    ])
    .unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join("inj.csv");
    storage::save_csv(&ds, &path).unwrap();

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let names: Vec<String> = rdr
        .records()
        .map(|r| r.unwrap().get(0).unwrap().to_string())
        .collect();
    assert!(names[0].starts_with('\''), "not prefixed: {}", names[0]);
    assert!(names[0].contains("=HYPERLINK"));
    assert_eq!(names[1], "'@foo");
}

#[test]
fn unwritable_path_is_an_error() {
    let ds = RegionDataset::reference();
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("x.json");
    let err = storage::save_json(&ds, &path).unwrap_err();
    assert!(err.to_string().contains("creating"));
}
