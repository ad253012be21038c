mod template;

use crate::error::{Error, Result, error::JsonSnafu};
use routes_core::{
    AnimationOptions, MapDocument, MapRenderer, RouteOverlay, TileLayer, TimestampedGeoJson,
    iso8601_duration,
};
use serde::Serialize;
use snafu::ResultExt;
use std::time::Duration;
use template::*;

/// Renders a [`MapDocument`] as a standalone Leaflet page.
///
/// Route overlays become `L.featureGroup`s listed in the layer control, the animated layer is
/// driven by Leaflet.TimeDimension.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeafletRenderer;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileOptions<'a> {
    attribution: &'a str,
    max_zoom: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    subdomains: Option<&'a str>,
}

#[derive(Serialize)]
struct PolylineOptions<'a> {
    color: &'a str,
    weight: u32,
    opacity: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TimeDimensionControlOptions<'a> {
    position: &'a str,
    min_speed: f64,
    max_speed: f64,
    auto_play: bool,
    loop_button: bool,
    time_slider_drag_update: bool,
    speed_slider: bool,
    player_options: PlayerOptions,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlayerOptions {
    transition_time: u64,
    #[serde(rename = "loop")]
    loop_playback: bool,
    start_over: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TimeDimensionLayerOptions {
    update_time_dimension: bool,
    #[serde(rename = "addlastPoint")]
    add_last_point: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<String>,
}

impl MapRenderer for LeafletRenderer {
    type Error = Error;

    fn render(&self, document: &MapDocument) -> Result<String> {
        let mut html = String::from(HEAD);
        if document.animation.is_some() {
            html.push_str(TIME_DIMENSION_HEAD);
        }
        html.push_str(BODY_START);

        html.push_str(&format!(
            "    var map = L.map(\"map\", {{ center: {}, zoom: {}, zoomControl: true }});\n",
            js(&[document.center.y, document.center.x])?,
            document.zoom_start,
        ));

        html.push_str("    var baseLayers = {};\n");
        for (i, layer) in document.base_layers().enumerate() {
            html.push_str(&tile_layer(i, layer, i == 0)?);
        }

        html.push_str("    var overlays = {};\n");
        for (i, route) in document.routes.iter().enumerate() {
            html.push_str(&route_overlay(i, route)?);
        }

        if let Some(animation) = &document.animation {
            html.push_str(&animated_layer(animation)?);
        }

        if document.layer_control {
            html.push_str(
                "    L.control.layers(baseLayers, overlays, { position: \"topright\", collapsed: true }).addTo(map);\n",
            );
        }

        html.push_str(BODY_END);
        Ok(html)
    }
}

fn tile_layer(index: usize, layer: &TileLayer, visible: bool) -> Result<String> {
    let options = TileOptions {
        attribution: &layer.attribution,
        max_zoom: layer.max_zoom,
        subdomains: layer.subdomains.as_deref(),
    };

    let mut out = format!(
        "    var tile_layer_{index} = L.tileLayer({}, {});\n",
        js(&layer.url_template)?,
        js(&options)?,
    );
    if visible {
        out.push_str(&format!("    tile_layer_{index}.addTo(map);\n"));
    }
    out.push_str(&format!(
        "    baseLayers[{}] = tile_layer_{index};\n",
        layer_name(&layer.name)?
    ));
    Ok(out)
}

fn route_overlay(index: usize, route: &RouteOverlay) -> Result<String> {
    // Leaflet expects [lat, lon].
    let lat_lons: Vec<[f64; 2]> = route.line.coords().map(|c| [c.y, c.x]).collect();
    let options = PolylineOptions {
        color: route.color.css(),
        weight: route.weight,
        opacity: route.opacity,
    };

    Ok(format!(
        "    var route_{index} = L.featureGroup().addTo(map);\n    \
         L.polyline({}, {}).addTo(route_{index});\n    \
         overlays[{}] = route_{index};\n",
        js(&lat_lons)?,
        js(&options)?,
        layer_name(&route.name)?,
    ))
}

fn animated_layer(animation: &TimestampedGeoJson) -> Result<String> {
    let AnimationOptions {
        period,
        duration,
        add_last_point,
        auto_play,
        loop_playback,
        max_speed,
        min_speed,
        loop_button,
        time_slider_drag_update,
        speed_slider,
        transition_time,
        date_options,
        position,
    } = &animation.options;

    let control = TimeDimensionControlOptions {
        position,
        min_speed: *min_speed,
        max_speed: *max_speed,
        auto_play: *auto_play,
        loop_button: *loop_button,
        time_slider_drag_update: *time_slider_drag_update,
        speed_slider: *speed_slider,
        player_options: PlayerOptions {
            transition_time: millis(*transition_time),
            loop_playback: *loop_playback,
            start_over: true,
        },
    };
    let layer = TimeDimensionLayerOptions {
        update_time_dimension: true,
        add_last_point: *add_last_point,
        duration: (*duration).map(iso8601_duration),
    };

    let mut out = String::from(ANIMATED_LAYER_FACTORY);
    out.push_str(&format!(
        "    L.Control.TimeDimensionCustom = L.Control.TimeDimension.extend({{\n      \
         _getDisplayDateFormat: function (date) {{\n        \
         return moment(date).format({});\n      \
         }}\n    }});\n",
        js(date_options)?,
    ));
    out.push_str(&format!(
        "    map.timeDimension = L.timeDimension({{ period: {} }});\n",
        js(&iso8601_duration(*period))?,
    ));
    out.push_str(&format!(
        "    map.addControl(new L.Control.TimeDimensionCustom({}));\n",
        js(&control)?,
    ));
    out.push_str(&format!(
        "    L.timeDimension.layer.geoJson(animatedGeoJson({}), {}).addTo(map);\n",
        js(&animation.data)?,
        js(&layer)?,
    ));
    Ok(out)
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// The layer control inserts names as HTML.
fn layer_name(name: &str) -> Result<String> {
    js(&html_escape::encode_text(name))
}

/// JSON for embedding inside a `<script>` element.
fn js<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)
        .context(JsonSnafu)?
        .replace("</", "<\\/"))
}
