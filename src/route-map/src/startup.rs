use crate::{
    csv_source::CsvSource,
    error::{
        Error, Result,
        error::{IoSnafu, ValidationSnafu},
    },
    leaflet::LeafletRenderer,
    settings::Settings,
};
use routes_core::{MapDocument, MapRenderer, PositionSource, TrackBuilder};
use snafu::ResultExt;
use std::{
    io::Write,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;
use tracing::{info, instrument};

pub struct App<S = CsvSource, R = LeafletRenderer> {
    source: S,
    renderer: R,
    builder: TrackBuilder,
    output: PathBuf,
}

impl App {
    pub fn build(settings: Settings) -> Result<App> {
        let palette = settings.palette()?;
        let Settings {
            input,
            output,
            input_timezone,
            map,
            animation,
            palette: _,
        } = settings;

        Ok(App::new(
            CsvSource::new(input, input_timezone),
            LeafletRenderer,
            TrackBuilder::new(map, animation, palette),
            output,
        ))
    }
}

impl<S, R> App<S, R>
where
    S: PositionSource<Error = Error>,
    R: MapRenderer<Error = Error>,
{
    pub fn new(source: S, renderer: R, builder: TrackBuilder, output: PathBuf) -> App<S, R> {
        App {
            source,
            renderer,
            builder,
            output,
        }
    }

    /// Reads every position report and builds the map without rendering it.
    pub fn document(&self) -> Result<MapDocument> {
        let positions = self.source.positions()?;
        self.builder.build(positions).context(ValidationSnafu)
    }

    /// Builds and renders the map, the output file is only touched once rendering succeeded.
    #[instrument(skip(self), fields(output = %self.output.display()))]
    pub fn run(&self) -> Result<()> {
        let document = self.document()?;
        let html = self.renderer.render(&document)?;

        write_atomically(&self.output, &html)?;
        info!("wrote map with {} routes", document.routes.len());
        Ok(())
    }
}

fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).context(IoSnafu { path: dir })?;
    file.write_all(contents.as_bytes())
        .context(IoSnafu { path })?;

    // Temp files are created owner only, the map should be readable like any other page.
    #[cfg(unix)]
    {
        use std::{fs::Permissions, os::unix::fs::PermissionsExt};
        file.as_file()
            .set_permissions(Permissions::from_mode(0o644))
            .context(IoSnafu { path })?;
    }

    file.persist(path)
        .map_err(|e| e.error)
        .context(IoSnafu { path })?;
    Ok(())
}
