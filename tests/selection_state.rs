use renewables_se::metrics::Metric;
use renewables_se::state::{Event, SelectionState, reduce};
use renewables_se::RegionDataset;

fn apply(events: Vec<Event>) -> SelectionState {
    let ds = RegionDataset::reference();
    events
        .into_iter()
        .fold(SelectionState::default(), |s, e| reduce(&s, e, &ds))
}

#[test]
fn select_metric_replaces_metric_only() {
    let s = apply(vec![
        Event::ClickRegion(Some("Skåne".into())),
        Event::SelectMetric(Metric::Solar),
    ]);
    assert_eq!(s.metric, Metric::Solar);
    assert_eq!(s.clicked.as_deref(), Some("Skåne"));
}

#[test]
fn hover_takes_precedence_over_click() {
    let s = apply(vec![
        Event::ClickRegion(Some("Skåne".into())),
        Event::HoverRegion(Some("Gotland".into())),
    ]);
    assert_eq!(s.displayed_region(), Some("Gotland"));

    let left = apply(vec![
        Event::ClickRegion(Some("Skåne".into())),
        Event::HoverRegion(Some("Gotland".into())),
        Event::HoverRegion(None),
    ]);
    assert_eq!(left.displayed_region(), Some("Skåne"));
}

#[test]
fn clicking_the_same_region_twice_toggles_it_off() {
    let s = apply(vec![
        Event::ClickRegion(Some("Kalmar".into())),
        Event::ClickRegion(Some("Kalmar".into())),
    ]);
    assert_eq!(s.clicked, None);

    let switched = apply(vec![
        Event::ClickRegion(Some("Kalmar".into())),
        Event::ClickRegion(Some("Halland".into())),
    ]);
    assert_eq!(switched.clicked.as_deref(), Some("Halland"));

    let cleared = apply(vec![
        Event::ClickRegion(Some("Kalmar".into())),
        Event::ClickRegion(None),
    ]);
    assert_eq!(cleared.clicked, None);
}

#[test]
fn unknown_regions_are_ignored() {
    let ds = RegionDataset::reference();
    let start = apply(vec![
        Event::ClickRegion(Some("Uppsala".into())),
        Event::HoverRegion(Some("Dalarna".into())),
    ]);
    let after_click = reduce(&start, Event::ClickRegion(Some("Narnia".into())), &ds);
    assert_eq!(after_click, start);
    let after_hover = reduce(&start, Event::HoverRegion(Some("Narnia".into())), &ds);
    assert_eq!(after_hover, start);
}

#[test]
fn reducer_does_not_mutate_input() {
    let ds = RegionDataset::reference();
    let before = SelectionState::default();
    let after = reduce(&before, Event::SelectMetric(Metric::Hydro), &ds);
    assert_eq!(before.metric, Metric::Wind);
    assert_eq!(after.metric, Metric::Hydro);
}
