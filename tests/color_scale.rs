use renewables_se::metrics::Metric;
use renewables_se::models::Region;
use renewables_se::scale::{Color, ColorScale, ScaleCache, color_for};
use renewables_se::{Error, RegionDataset};

#[test]
fn extremes_map_to_gradient_endpoints() {
    let ds = RegionDataset::reference();
    // wind: Stockholm is the minimum (95), Västerbotten the maximum (4850)
    assert_eq!(
        color_for(&ds, "Stockholm", Metric::Wind).unwrap(),
        Color::new(59.0, 130.0, 246.0)
    );
    assert_eq!(
        color_for(&ds, "Västerbotten", Metric::Wind).unwrap(),
        Color::new(89.0, 180.0, 146.0)
    );
    // per capita: Stockholm minimum, Norrbotten maximum
    assert_eq!(
        color_for(&ds, "Stockholm", Metric::PerCapita).unwrap(),
        Color::new(139.0, 92.0, 246.0)
    );
    assert_eq!(
        color_for(&ds, "Norrbotten", Metric::PerCapita).unwrap(),
        Color::new(59.0, 212.0, 146.0)
    );
    // hydro minimum is Gotland with 0 GWh
    assert_eq!(
        color_for(&ds, "Gotland", Metric::Hydro).unwrap(),
        Color::new(6.0, 182.0, 212.0)
    );
}

#[test]
fn scale_uses_all_regions_for_selected_metric() {
    let ds = RegionDataset::reference();
    let wind = ColorScale::for_metric(&ds, Metric::Wind);
    assert_eq!((wind.min, wind.max), (95.0, 4850.0));
    let solar = ColorScale::for_metric(&ds, Metric::Solar);
    assert_eq!((solar.min, solar.max), (22.0, 285.0));
    let total = ColorScale::for_metric(&ds, Metric::Total);
    assert_eq!((total.min, total.max), (373.0, 21965.0));
    let pc = ColorScale::for_metric(&ds, Metric::PerCapita);
    assert_eq!((pc.min, pc.max), (178.0, 87407.0));
}

#[test]
fn colors_are_deterministic_and_metric_dependent() {
    let ds = RegionDataset::reference();
    let a = color_for(&ds, "Halland", Metric::Wind).unwrap();
    let b = color_for(&ds, "Halland", Metric::Wind).unwrap();
    assert_eq!(a, b);

    // Same raw value (890 GWh) means a different position once the basis changes.
    let halland = ds.get("Halland").unwrap();
    let wind = ColorScale::for_metric(&ds, Metric::Wind);
    let total = ColorScale::for_metric(&ds, Metric::Total);
    assert_ne!(wind.normalize(halland.wind), total.normalize(halland.wind));
    assert_ne!(
        color_for(&ds, "Halland", Metric::Wind).unwrap(),
        color_for(&ds, "Halland", Metric::Total).unwrap()
    );
}

#[test]
fn midpoint_interpolates_each_channel() {
    let ds = RegionDataset::from_regions(vec![
        Region::new("Low", 0.0, 0.0, 0.0, 0.0, 1),
        Region::new("Mid", 50.0, 0.0, 0.0, 50.0, 1),
        Region::new("High", 100.0, 0.0, 0.0, 100.0, 1),
    ])
    .unwrap();
    assert_eq!(
        color_for(&ds, "Mid", Metric::Wind).unwrap(),
        Color::new(74.0, 155.0, 196.0)
    );
    assert_eq!(
        color_for(&ds, "Mid", Metric::Total).unwrap(),
        Color::new(41.0, 160.0, 154.0)
    );
}

#[test]
fn degenerate_dataset_maps_to_start_color() {
    let ds = RegionDataset::from_regions(vec![
        Region::new("A", 7.0, 1.0, 2.0, 10.0, 5),
        Region::new("B", 7.0, 3.0, 0.0, 10.0, 5),
    ])
    .unwrap();
    let scale = ColorScale::for_metric(&ds, Metric::Wind);
    assert!(scale.is_degenerate());
    assert_eq!(scale.normalize(7.0), 0.0);
    let c = color_for(&ds, "B", Metric::Wind).unwrap();
    assert!(c.r.is_finite() && c.g.is_finite() && c.b.is_finite());
    assert_eq!(c, Metric::Wind.gradient().start());
    // solar is not degenerate in this dataset
    assert!(!ColorScale::for_metric(&ds, Metric::Solar).is_degenerate());
}

#[test]
fn unknown_region_has_no_color() {
    let ds = RegionDataset::reference();
    assert_eq!(
        color_for(&ds, "Nowhere", Metric::Solar).unwrap_err(),
        Error::InvalidRegion("Nowhere".into())
    );
}

#[test]
fn cache_agrees_with_fresh_computation() {
    let ds = RegionDataset::reference();
    let mut cache = ScaleCache::new();
    for m in Metric::ALL {
        for name in ds.names() {
            assert_eq!(
                cache.color_for(&ds, name, m).unwrap(),
                color_for(&ds, name, m).unwrap()
            );
        }
    }
    assert_eq!(cache.len(), 5);
}

#[test]
fn cache_is_invalidated_by_a_new_dataset() {
    let first = RegionDataset::reference();
    let mut cache = ScaleCache::new();
    cache.get(&first, Metric::Wind);
    cache.get(&first, Metric::Solar);
    assert_eq!(cache.len(), 2);

    let second = RegionDataset::from_regions(vec![
        Region::new("X", 1.0, 0.0, 0.0, 1.0, 1),
        Region::new("Y", 3.0, 0.0, 0.0, 3.0, 1),
    ])
    .unwrap();
    let scale = cache.get(&second, Metric::Wind);
    assert_eq!((scale.min, scale.max), (1.0, 3.0));
    assert_eq!(cache.len(), 1);

    cache.clear();
    assert!(cache.is_empty());
}
