use crate::helper::TestHelper;
use chrono::{DateTime, Utc};
use route_map::error::Error;
use routes_core::{Color, ValidationError};

#[test]
fn test_single_vessel_three_reports() {
    let helper = TestHelper::new().with_rows(&[
        "257000001,60.2,5.2,2024-03-01 12:20:00",
        "257000001,60.0,5.0,2024-03-01 12:00:00",
        "257000001,60.1,5.1,2024-03-01 12:10:00",
    ]);

    let document = helper.document().unwrap();

    assert_eq!(document.routes.len(), 1);
    let lats: Vec<f64> = document.routes[0].line.coords().map(|c| c.y).collect();
    assert_eq!(lats, vec![60.0, 60.1, 60.2]);

    let animation = document.animation.unwrap();
    assert_eq!(animation.data.points().count(), 3);
    assert_eq!(animation.data.lines().count(), 1);
}

#[test]
fn test_one_route_per_vessel_with_all_its_rows() {
    let helper = TestHelper::new().with_rows(&[
        "111,1.0,1.0,2024-03-01 12:00:00",
        "222,2.0,2.0,2024-03-01 12:00:00",
        "111,1.5,1.5,2024-03-01 11:00:00",
        "333,3.0,3.0,2024-03-01 12:00:00",
        "222,2.5,2.5,2024-03-01 13:00:00",
        "111,1.7,1.7,2024-03-01 10:00:00",
    ]);

    let document = helper.document().unwrap();

    let routes: Vec<(&str, usize)> = document
        .routes
        .iter()
        .map(|r| (r.mmsi.as_ref(), r.line.coords().count()))
        .collect();
    assert_eq!(routes, vec![("111", 3), ("222", 2), ("333", 1)]);

    let animation = document.animation.unwrap();
    assert_eq!(animation.data.points().count(), 6);
    assert_eq!(animation.data.lines().count(), 3);
}

#[test]
fn test_route_vertices_are_in_time_order() {
    let helper = TestHelper::new().with_rows(&[
        "1,3.0,0.0,2024-03-01 12:30:00",
        "1,1.0,0.0,2024-03-01 12:10:00",
        "1,2.0,0.0,2024-03-01 12:20:00",
    ]);

    let document = helper.document().unwrap();
    let animation = document.animation.unwrap();

    let (line, props) = animation.data.lines().next().unwrap();
    let times: Vec<DateTime<Utc>> = props
        .times
        .iter()
        .map(|t| DateTime::parse_from_rfc3339(t).unwrap().to_utc())
        .collect();

    assert!(times.windows(2).all(|w| w[0] <= w[1]));
    let lats: Vec<f64> = line.coords().map(|c| c.y).collect();
    assert_eq!(lats, vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_point_times_match_source_rows() {
    let helper = TestHelper::new().with_rows(&[
        "1,1.0,1.0,2024-03-01T12:00:07",
        "1,1.0,1.0,2024-03-01T12:05:59",
    ]);

    let document = helper.document().unwrap();
    let times: Vec<String> = document
        .animation
        .unwrap()
        .data
        .points()
        .map(|(_, p)| p.time.clone())
        .collect();

    assert_eq!(times, vec!["2024-03-01T12:00:07Z", "2024-03-01T12:05:59Z"]);
}

#[test]
fn test_ninth_vessel_reuses_first_color() {
    let rows: Vec<String> = (0..9)
        .map(|i| format!("{},1.0,1.0,2024-03-01 12:00:00", 100 + i))
        .collect();
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    let helper = TestHelper::new().with_rows(&rows);

    let document = helper.document().unwrap();
    let colors: Vec<Color> = document.routes.iter().map(|r| r.color).collect();

    assert_eq!(colors.len(), 9);
    assert_eq!(colors[8], colors[0]);
    assert_ne!(colors[1], colors[0]);
}

#[test]
fn test_run_writes_html_file() {
    let helper = TestHelper::new().with_rows(&[
        "257000001,59.9,10.7,2024-03-01 12:00:00",
        "257000002,60.1,5.3,2024-03-01 12:05:00",
    ]);

    helper.run().unwrap();

    let html = helper.html();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Static route: 257000001"));
    assert!(html.contains("Static route: 257000002"));
    assert!(html.contains("L.timeDimension"));
}

#[test]
fn test_empty_input_fails_without_output() {
    let helper = TestHelper::new().with_rows(&[]);

    let err = helper.run().unwrap_err();

    assert!(matches!(
        err.validation(),
        Some(ValidationError::EmptyInput { .. })
    ));
    assert!(!helper.output().exists());
}

#[test]
fn test_unparseable_timestamp_fails_without_output() {
    let helper = TestHelper::new().with_rows(&[
        "1,1.0,1.0,2024-03-01 12:00:00",
        "1,1.0,1.0,31/31/2024",
    ]);

    let err = helper.run().unwrap_err();

    assert!(matches!(
        err.validation(),
        Some(ValidationError::InvalidTimestamp { line: 3, .. })
    ));
    assert!(!helper.output().exists());
}

#[test]
fn test_missing_column_fails_without_output() {
    let helper = TestHelper::new().with_csv("mmsi,lat,postime\n1,1.0,2024-03-01 12:00:00\n");

    let err = helper.run().unwrap_err();

    assert!(matches!(
        err.validation(),
        Some(ValidationError::MissingColumn { column, .. }) if column == "lon"
    ));
    assert!(!helper.output().exists());
}

#[test]
fn test_missing_input_file_is_an_io_error() {
    let helper = TestHelper::new();

    let err = helper.run().unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
    assert!(!helper.output().exists());
}

#[test]
fn test_failed_run_keeps_previous_output() {
    let helper = TestHelper::new().with_rows(&["1,1.0,1.0,not a timestamp"]);
    std::fs::write(helper.output(), "previous").unwrap();

    assert!(helper.run().is_err());
    assert_eq!(helper.html(), "previous");
}

#[cfg(unix)]
#[test]
fn test_written_map_is_readable_by_group_and_others() {
    use std::os::unix::fs::PermissionsExt;

    let helper = TestHelper::new().with_rows(&["1,1.0,1.0,2024-03-01 12:00:00"]);

    helper.run().unwrap();

    let mode = std::fs::metadata(helper.output())
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o644, 0o644, "mode was {mode:o}");
}

#[test]
fn test_popup_shows_time_as_written() {
    let helper = TestHelper::new().with_rows(&["1,60.0,5.0,2024-03-01T12:30:15+02:00"]);

    let document = helper.document().unwrap();
    let animation = document.animation.unwrap();
    let (_, props) = animation.data.points().next().unwrap();

    assert_eq!(
        props.popup,
        "<b>1</b><br>2024-03-01 12:30<br>Lat: 60.0 <br>Lon: 5.0"
    );
    assert_eq!(props.time, "2024-03-01T10:30:15Z");
}
