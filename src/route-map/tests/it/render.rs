use chrono::{TimeZone, Utc};
use route_map::leaflet::LeafletRenderer;
use routes_core::{MapDocument, MapRenderer, PositionReport, TrackBuilder};

fn document(reports: Vec<PositionReport>) -> MapDocument {
    TrackBuilder::default().build(reports).unwrap()
}

fn report(mmsi: &str, minute: u32) -> PositionReport {
    PositionReport::new(
        mmsi.parse().unwrap(),
        59.9,
        10.7,
        Utc.with_ymd_and_hms(2024, 3, 1, 12, minute, 0).unwrap(),
    )
}

#[test]
fn test_renders_layers_and_controls() {
    let html = LeafletRenderer
        .render(&document(vec![report("257000001", 0), report("257000001", 5)]))
        .unwrap();

    assert!(html.contains(r#"L.map("map", { center: [59.9,10.7], zoom: 6"#));
    assert!(html.contains(r#"baseLayers["OpenStreetMap"]"#));
    assert!(html.contains(r#"baseLayers["Simple map"]"#));
    assert!(html.contains(r#"baseLayers["Terrain"]"#));
    assert!(html.contains(r#"baseLayers["Satellite imagery"]"#));
    assert!(html.contains(r#"overlays["Static route: 257000001"]"#));
    assert!(html.contains("L.control.layers(baseLayers, overlays"));
}

#[test]
fn test_renders_animation_options() {
    let html = LeafletRenderer
        .render(&document(vec![report("1", 0)]))
        .unwrap();

    assert!(html.contains("leaflet.timedimension.min.js"));
    assert!(html.contains(r#"L.timeDimension({ period: "PT5M" })"#));
    assert!(html.contains(r#""autoPlay":false"#));
    assert!(html.contains(r#""maxSpeed":5.0"#));
    assert!(html.contains(r#""loopButton":true"#));
    assert!(html.contains(r#""timeSliderDragUpdate":true"#));
    assert!(html.contains(r#""loop":false"#));
    assert!(html.contains(r#""addlastPoint":true"#));
    assert!(html.contains(r#""time":"2024-03-01T12:00:00Z""#));
}

#[test]
fn test_document_without_animation_skips_time_dimension() {
    let mut doc = document(vec![report("1", 0)]);
    doc.animation = None;

    let html = LeafletRenderer.render(&doc).unwrap();

    assert!(!html.contains("timedimension"));
    assert!(!html.contains("L.timeDimension"));
    assert!(html.contains("L.polyline"));
}

#[test]
fn test_vessel_ids_cannot_break_out_of_script() {
    let html = LeafletRenderer
        .render(&document(vec![report("</script><b>x", 0)]))
        .unwrap();

    assert_eq!(html.matches("</script>").count(), html.matches("<script").count());
    assert!(html.contains("Static route: &lt;/script&gt;&lt;b&gt;x"));
    assert!(html.contains(r#""popup":"<b>&lt;/script&gt;&lt;b&gt;x<\/b>"#));
}
