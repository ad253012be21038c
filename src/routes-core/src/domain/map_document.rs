use crate::{AnimationOptions, Color, FeatureCollection, Mmsi, TileLayer};
use geo::{Coord, LineString};

/// Everything a renderer needs to emit the final page.
#[derive(Debug, Clone, PartialEq)]
pub struct MapDocument {
    /// `x` is longitude, `y` is latitude.
    pub center: Coord<f64>,
    pub zoom_start: u8,
    /// Shown when the page loads.
    pub base_layer: TileLayer,
    pub tile_layers: Vec<TileLayer>,
    pub routes: Vec<RouteOverlay>,
    pub animation: Option<TimestampedGeoJson>,
    pub layer_control: bool,
}

/// Static polyline of one vessel, toggleable on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteOverlay {
    pub name: String,
    pub mmsi: Mmsi,
    pub color: Color,
    pub line: LineString<f64>,
    pub weight: u32,
    pub opacity: f64,
}

/// Animated layer covering every vessel.
#[derive(Debug, Clone, PartialEq)]
pub struct TimestampedGeoJson {
    pub data: FeatureCollection,
    pub options: AnimationOptions,
}

impl MapDocument {
    /// The base layer followed by the selectable tile layers.
    pub fn base_layers(&self) -> impl Iterator<Item = &TileLayer> {
        std::iter::once(&self.base_layer).chain(self.tile_layers.iter())
    }
}
