#![deny(warnings)]
#![deny(rust_2018_idioms)]

use clap::Parser;
use route_map::{
    error::{Error, error::ConfigSnafu},
    settings::Settings,
    startup::App,
};
use snafu::ResultExt;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// CSV file with `mmsi`, `lat`, `lon` and `postime` columns [default: ships_routes.csv]
    input: Option<PathBuf>,

    /// Where the HTML map is written [default: multiship_route_map.html]
    output: Option<PathBuf>,

    /// YAML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[snafu::report]
fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let settings = Settings::new(
        args.config.as_deref(),
        args.input.as_deref(),
        args.output.as_deref(),
    )
    .context(ConfigSnafu)?;

    App::build(settings)?.run()
}
