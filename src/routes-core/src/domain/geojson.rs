use chrono::{DateTime, SecondsFormat, Utc};
use geo::{LineString, Point};
use serde::{Serialize, Serializer, ser::SerializeMap};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: FeatureProperties,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point<f64>),
    LineString(LineString<f64>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureProperties {
    Point(PointProperties),
    Line(LineProperties),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointProperties {
    pub time: String,
    pub icon: MarkerIcon,
    pub iconstyle: IconStyle,
    pub popup: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerIcon {
    Circle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconStyle {
    pub fill_color: &'static str,
    pub fill_opacity: f64,
    pub stroke: bool,
    pub radius: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineProperties {
    pub times: Vec<String>,
    pub style: LineStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: &'static str,
    pub weight: u32,
}

impl FeatureCollection {
    pub fn points(&self) -> impl Iterator<Item = (&Point<f64>, &PointProperties)> {
        self.features.iter().filter_map(|f| match (&f.geometry, &f.properties) {
            (Geometry::Point(p), FeatureProperties::Point(props)) => Some((p, props)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (&LineString<f64>, &LineProperties)> {
        self.features.iter().filter_map(|f| match (&f.geometry, &f.properties) {
            (Geometry::LineString(l), FeatureProperties::Line(props)) => Some((l, props)),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl Serialize for Geometry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        match self {
            Geometry::Point(p) => {
                map.serialize_entry("type", "Point")?;
                map.serialize_entry("coordinates", &[p.x(), p.y()])?;
            }
            Geometry::LineString(l) => {
                let coordinates: Vec<[f64; 2]> = l.coords().map(|c| [c.x, c.y]).collect();
                map.serialize_entry("type", "LineString")?;
                map.serialize_entry("coordinates", &coordinates)?;
            }
        }
        map.end()
    }
}

/// ISO 8601 in UTC, keeping sub-second precision only when present.
pub fn iso_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
