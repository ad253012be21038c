//! Static parts of the rendered page.

pub const HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no" />
  <title>Ship routes</title>

  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/leaflet@1.9.4/dist/leaflet.css" />
  <script src="https://cdn.jsdelivr.net/npm/leaflet@1.9.4/dist/leaflet.js"></script>
  <style>
    html, body { width: 100%; height: 100%; margin: 0; padding: 0; }
    #map { position: absolute; top: 0; bottom: 0; right: 0; left: 0; }
  </style>
"#;

/// Scripts and styles required by the time slider.
pub const TIME_DIMENSION_HEAD: &str = r#"
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/leaflet-timedimension@1.1.1/dist/leaflet.timedimension.control.css" />
  <script src="https://cdnjs.cloudflare.com/ajax/libs/jquery/2.0.0/jquery.min.js"></script>
  <script src="https://cdnjs.cloudflare.com/ajax/libs/jqueryui/1.10.2/jquery-ui.min.js"></script>
  <script src="https://cdn.jsdelivr.net/npm/iso8601-js-period@0.2.1/iso8601.min.js"></script>
  <script src="https://cdn.jsdelivr.net/npm/leaflet-timedimension@1.1.1/dist/leaflet.timedimension.min.js"></script>
  <script src="https://cdnjs.cloudflare.com/ajax/libs/moment.js/2.18.1/moment.min.js"></script>
"#;

pub const BODY_START: &str = r#"</head>
<body>
  <div id="map"></div>
  <script>
"#;

pub const BODY_END: &str = r#"  </script>
</body>
</html>
"#;

/// Builds the animated layer from the `data`, with circle markers styled by
/// `properties.iconstyle`, lines styled by `properties.style` and popups from
/// `properties.popup`.
pub const ANIMATED_LAYER_FACTORY: &str = r#"
    function animatedGeoJson(data) {
      return L.geoJson(data, {
        pointToLayer: function (feature, latLng) {
          if (feature.properties.icon === "circle") {
            return L.circleMarker(latLng, feature.properties.iconstyle || {});
          }
          return L.marker(latLng);
        },
        style: function (feature) {
          return feature.properties.style;
        },
        onEachFeature: function (feature, layer) {
          if (feature.properties.popup) {
            layer.bindPopup(feature.properties.popup);
          }
        }
      });
    }
"#;
