use crate::error::{Result, error::EmptyPaletteSnafu};
use chrono_tz::Tz;
use config::{Config, ConfigError, Environment, File};
use routes_core::{AnimationOptions, Color, MapOptions, Palette};
use serde::Deserialize;
use snafu::OptionExt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Timezone of `postime` values that carry no offset.
    pub input_timezone: Tz,
    pub map: MapOptions,
    pub animation: AnimationOptions,
    pub palette: Vec<Color>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: "ships_routes.csv".into(),
            output: "multiship_route_map.html".into(),
            input_timezone: Tz::UTC,
            map: MapOptions::default(),
            animation: AnimationOptions::default(),
            palette: Palette::default().colors().to_vec(),
        }
    }
}

impl Settings {
    /// Layers, lowest precedence first: built in defaults, `config_file`, `ROUTE_MAP__*`
    /// environment variables and finally the `input`/`output` overrides.
    pub fn new(
        config_file: Option<&Path>,
        input: Option<&Path>,
        output: Option<&Path>,
    ) -> std::result::Result<Settings, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder
            .add_source(Environment::with_prefix("ROUTE_MAP").separator("__"))
            .set_override_option("input", input.map(path_value))?
            .set_override_option("output", output.map(path_value))?
            .build()?
            .try_deserialize()
    }

    pub fn palette(&self) -> Result<Palette> {
        Palette::new(self.palette.clone()).context(EmptyPaletteSnafu)
    }
}

fn path_value(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
