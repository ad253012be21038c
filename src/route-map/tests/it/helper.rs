use route_map::{error::Result, settings::Settings, startup::App};
use routes_core::MapDocument;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

pub static HEADER: &str = "mmsi,lat,lon,postime";

pub struct TestHelper {
    _temp_dir: TempDir,
    pub settings: Settings,
}

impl TestHelper {
    pub fn new() -> TestHelper {
        let temp_dir = tempdir().unwrap();
        let settings = Settings {
            input: temp_dir.path().join("ships_routes.csv"),
            output: temp_dir.path().join("multiship_route_map.html"),
            ..Default::default()
        };
        TestHelper {
            _temp_dir: temp_dir,
            settings,
        }
    }

    /// Writes `rows` below the default header to the input file.
    pub fn with_rows(self, rows: &[&str]) -> TestHelper {
        let mut contents = format!("{HEADER}\n");
        for row in rows {
            contents.push_str(row);
            contents.push('\n');
        }
        self.with_csv(&contents)
    }

    pub fn with_csv(self, contents: &str) -> TestHelper {
        std::fs::write(&self.settings.input, contents).unwrap();
        self
    }

    pub fn output(&self) -> PathBuf {
        self.settings.output.clone()
    }

    pub fn app(&self) -> App {
        App::build(self.settings.clone()).unwrap()
    }

    pub fn document(&self) -> Result<MapDocument> {
        self.app().document()
    }

    pub fn run(&self) -> Result<()> {
        self.app().run()
    }

    pub fn html(&self) -> String {
        std::fs::read_to_string(self.output()).unwrap()
    }
}
