use crate::{
    AnimationOptions, Color, Feature, FeatureCollection, FeatureProperties, Geometry, IconStyle,
    LineProperties, LineStyle, MapDocument, MapOptions, MarkerIcon, Mean, Palette,
    PointProperties, PositionReport, RouteOverlay, TileLayer, TimestampedGeoJson, Track,
    ValidationError, group_tracks, iso_timestamp, validation_error::EmptyInputSnafu,
};
use chrono_tz::Tz;
use geo::{Coord, Point, coord};
use tracing::{debug, info, instrument, warn};

static POINT_RADIUS: u32 = 7;
static POINT_FILL_OPACITY: f64 = 0.8;
static ANIMATED_LINE_WEIGHT: u32 = 5;
static POPUP_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Turns position reports into the static route overlays and the animated feature collection
/// of a [`MapDocument`].
#[derive(Debug, Clone)]
pub struct TrackBuilder {
    map: MapOptions,
    animation: AnimationOptions,
    palette: Palette,
}

impl Default for TrackBuilder {
    fn default() -> Self {
        Self::new(
            MapOptions::default(),
            AnimationOptions::default(),
            Palette::default(),
        )
    }
}

impl TrackBuilder {
    pub fn new(map: MapOptions, animation: AnimationOptions, palette: Palette) -> TrackBuilder {
        TrackBuilder {
            map,
            animation,
            palette,
        }
    }

    #[instrument(skip_all, fields(num_reports = reports.len()))]
    pub fn build(&self, reports: Vec<PositionReport>) -> Result<MapDocument, ValidationError> {
        let Some(center) = map_center(&reports) else {
            return EmptyInputSnafu.fail();
        };

        let tracks = group_tracks(reports);
        if tracks.len() > self.palette.len() {
            warn!(
                "{} vessels share a palette of {} colors, colors will be reused",
                tracks.len(),
                self.palette.len()
            );
        }

        let mut routes = Vec::with_capacity(tracks.len());
        let mut features = Vec::new();

        for (i, track) in tracks.iter().enumerate() {
            let color = self.palette.color_for(i);
            debug!(mmsi = %track.mmsi(), num_positions = track.len(), %color, "building track");

            routes.push(self.route_overlay(track, color));
            features.extend(
                track
                    .positions()
                    .iter()
                    .map(|p| point_feature(p, color, self.map.display_timezone)),
            );
            features.push(line_feature(track, color));
        }

        info!(
            "built {} tracks with {} animated features",
            routes.len(),
            features.len()
        );

        let animation = if features.is_empty() {
            None
        } else {
            Some(TimestampedGeoJson {
                data: FeatureCollection { features },
                options: self.animation.clone(),
            })
        };

        Ok(MapDocument {
            center,
            zoom_start: self.map.zoom_start,
            base_layer: TileLayer::open_street_map(),
            tile_layers: TileLayer::selectable(),
            routes,
            animation,
            layer_control: true,
        })
    }

    fn route_overlay(&self, track: &Track, color: Color) -> RouteOverlay {
        RouteOverlay {
            name: format!("Static route: {}", track.mmsi()),
            mmsi: track.mmsi().clone(),
            color,
            line: track.line_string(),
            weight: self.map.line_weight,
            opacity: self.map.line_opacity,
        }
    }
}

/// Mean of all latitudes and longitudes in the input, regardless of vessel.
fn map_center(reports: &[PositionReport]) -> Option<Coord<f64>> {
    let latitude = reports.iter().map(|r| r.latitude).mean()?;
    let longitude = reports.iter().map(|r| r.longitude).mean()?;
    Some(coord! { x: longitude, y: latitude })
}

fn point_feature(
    report: &PositionReport,
    color: Color,
    display_timezone: Option<Tz>,
) -> Feature {
    Feature {
        geometry: Geometry::Point(Point::from(report.coord())),
        properties: FeatureProperties::Point(PointProperties {
            time: iso_timestamp(&report.timestamp),
            icon: MarkerIcon::Circle,
            iconstyle: IconStyle {
                fill_color: color.css(),
                fill_opacity: POINT_FILL_OPACITY,
                stroke: true,
                radius: POINT_RADIUS,
            },
            popup: popup(report, display_timezone),
        }),
    }
}

fn line_feature(track: &Track, color: Color) -> Feature {
    Feature {
        geometry: Geometry::LineString(track.line_string()),
        properties: FeatureProperties::Line(LineProperties {
            times: track
                .positions()
                .iter()
                .map(|p| iso_timestamp(&p.timestamp))
                .collect(),
            style: LineStyle {
                color: color.css(),
                weight: ANIMATED_LINE_WEIGHT,
            },
        }),
    }
}

fn popup(report: &PositionReport, display_timezone: Option<Tz>) -> String {
    let time = match display_timezone {
        Some(tz) => report.timestamp.with_timezone(&tz).format(POPUP_TIME_FORMAT),
        None => report.local_timestamp().format(POPUP_TIME_FORMAT),
    };

    // Debug formatting keeps the decimal point on whole degrees, `60.0` rather than `60`.
    format!(
        "<b>{}</b><br>{}<br>Lat: {:?} <br>Lon: {:?}",
        html_escape::encode_text(report.mmsi.as_ref()),
        time,
        report.latitude,
        report.longitude,
    )
}
