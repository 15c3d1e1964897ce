//! Integration tests for map reconciliation against the recording widget.

use waymark_core::models::{MapStyle, Path, Point};
use waymark_map::headless::{HeadlessWidget, WidgetOp};
use waymark_map::{tile_source, LatLngBounds, MapCanvas, FIT_PADDING};

fn point(id: &str, name: &str, lat: f64, lng: f64) -> Point {
    Point::new(id, name, lat, lng)
}

fn sample_data() -> (Vec<Point>, Vec<Path>) {
    let points = vec![
        point("1", "Kimironko", -1.942618, 30.1382016),
        point("2", "DownTown", -1.9428851, 30.0574266),
    ];
    let paths = vec![Path::new(
        "p1",
        "Commute",
        points[0].clone(),
        points[1].clone(),
        "#ef4444",
    )];
    (points, paths)
}

#[test]
fn first_reconcile_applies_tiles_then_features_then_bounds() {
    let (points, paths) = sample_data();
    let mut canvas = MapCanvas::new(HeadlessWidget::new());

    canvas.reconcile(MapStyle::Osm, 0, &points, &paths);

    let ops = canvas.widget_mut().take_ops();
    assert_eq!(
        ops[0],
        WidgetOp::SetTileLayer(tile_source(MapStyle::Osm).url_template)
    );
    assert_eq!(ops[1], WidgetOp::ClearFeatures);
    // One marker per point, then one route per path, in holder order.
    assert_eq!(
        ops[2],
        WidgetOp::AddMarker { id: "1".into(), name: "Kimironko".into() }
    );
    assert_eq!(
        ops[3],
        WidgetOp::AddMarker { id: "2".into(), name: "DownTown".into() }
    );
    assert_eq!(
        ops[4],
        WidgetOp::AddRoute { id: "p1".into(), color: "#ef4444".into() }
    );
    match &ops[5] {
        WidgetOp::FitBounds { bounds, padding } => {
            assert_eq!(*padding, FIT_PADDING);
            assert_eq!(
                *bounds,
                LatLngBounds::from_features(&points, &paths).unwrap()
            );
        }
        other => panic!("expected FitBounds, got {:?}", other),
    }
    assert_eq!(ops.len(), 6);
}

#[test]
fn unchanged_state_issues_no_operations() {
    let (points, paths) = sample_data();
    let mut canvas = MapCanvas::new(HeadlessWidget::new());
    canvas.reconcile(MapStyle::Osm, 0, &points, &paths);
    canvas.widget_mut().take_ops();

    canvas.reconcile(MapStyle::Osm, 0, &points, &paths);
    assert!(canvas.widget_mut().take_ops().is_empty());
}

#[test]
fn style_change_only_swaps_the_tile_layer() {
    let (points, paths) = sample_data();
    let mut canvas = MapCanvas::new(HeadlessWidget::new());
    canvas.reconcile(MapStyle::Osm, 0, &points, &paths);
    canvas.widget_mut().take_ops();

    canvas.reconcile(MapStyle::Dark, 0, &points, &paths);

    let ops = canvas.widget_mut().take_ops();
    assert_eq!(
        ops,
        vec![WidgetOp::SetTileLayer(
            tile_source(MapStyle::Dark).url_template
        )]
    );
}

#[test]
fn data_change_rebuilds_features_without_touching_tiles() {
    let (mut points, paths) = sample_data();
    let mut canvas = MapCanvas::new(HeadlessWidget::new());
    canvas.reconcile(MapStyle::Osm, 0, &points, &paths);
    canvas.widget_mut().take_ops();

    points.push(point("3", "Remera", -1.95, 30.1));
    canvas.reconcile(MapStyle::Osm, 1, &points, &paths);

    let ops = canvas.widget_mut().take_ops();
    assert_eq!(ops[0], WidgetOp::ClearFeatures);
    assert!(ops
        .iter()
        .all(|op| !matches!(op, WidgetOp::SetTileLayer(_))));
    let markers = ops
        .iter()
        .filter(|op| matches!(op, WidgetOp::AddMarker { .. }))
        .count();
    assert_eq!(markers, 3);
}

#[test]
fn empty_collections_leave_the_viewport_alone() {
    let mut canvas = MapCanvas::new(HeadlessWidget::new());

    canvas.reconcile(MapStyle::Osm, 0, &[], &[]);

    let ops = canvas.widget_mut().take_ops();
    assert!(ops
        .iter()
        .all(|op| !matches!(op, WidgetOp::FitBounds { .. })));
    // The feature pass still runs; there is just nothing to add.
    assert!(ops.contains(&WidgetOp::ClearFeatures));
}

#[test]
fn bounds_cover_path_endpoints_outside_the_point_set() {
    // A path endpoint that no longer matches a live point still counts.
    let points = vec![point("1", "A", -1.95, 30.06)];
    let paths = vec![Path::new(
        "p1",
        "Far",
        point("x", "Gone", -1.6833, 29.6167),
        point("y", "Alive", -1.95, 30.06),
        "#10b981",
    )];
    let mut canvas = MapCanvas::new(HeadlessWidget::new());

    canvas.reconcile(MapStyle::Osm, 0, &points, &paths);

    let ops = canvas.widget_mut().take_ops();
    let bounds = ops
        .iter()
        .find_map(|op| match op {
            WidgetOp::FitBounds { bounds, .. } => Some(*bounds),
            _ => None,
        })
        .expect("bounds fitted");
    assert_eq!(bounds.west, 29.6167);
}
