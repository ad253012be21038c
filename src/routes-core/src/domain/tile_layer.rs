/// A background imagery source selectable from the layer control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLayer {
    pub name: String,
    pub url_template: String,
    pub attribution: String,
    pub subdomains: Option<String>,
    pub max_zoom: u8,
}

impl TileLayer {
    pub fn open_street_map() -> TileLayer {
        TileLayer {
            name: "OpenStreetMap".into(),
            url_template: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".into(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors".into(),
            subdomains: None,
            max_zoom: 19,
        }
    }

    pub fn light() -> TileLayer {
        TileLayer {
            name: "Simple map".into(),
            url_template: "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png".into(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>".into(),
            subdomains: Some("abcd".into()),
            max_zoom: 20,
        }
    }

    pub fn terrain() -> TileLayer {
        TileLayer {
            name: "Terrain".into(),
            url_template: "https://tiles.stadiamaps.com/tiles/stamen_terrain/{z}/{x}/{y}{r}.png"
                .into(),
            attribution: "&copy; <a href=\"https://www.stadiamaps.com/\">Stadia Maps</a> &copy; <a href=\"https://www.stamen.com/\">Stamen Design</a> &copy; <a href=\"https://openmaptiles.org/\">OpenMapTiles</a> &copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors".into(),
            subdomains: None,
            max_zoom: 18,
        }
    }

    pub fn satellite() -> TileLayer {
        TileLayer {
            name: "Satellite imagery".into(),
            url_template: "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}".into(),
            attribution: "Esri".into(),
            subdomains: None,
            max_zoom: 18,
        }
    }

    /// The light, terrain and satellite layers in the order they appear in the layer control.
    pub fn selectable() -> Vec<TileLayer> {
        vec![Self::light(), Self::terrain(), Self::satellite()]
    }
}
