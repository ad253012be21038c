use crate::{
    error::{
        Error, Result,
        error::{CsvSnafu, IoSnafu, ValidationSnafu},
    },
    timestamp::parse_timestamp,
};
use chrono_tz::Tz;
use csv::{ReaderBuilder, StringRecord, Trim};
use routes_core::{
    Mmsi, PositionReport, PositionSource, ValidationError,
    validation_error::{
        InvalidCoordinateSnafu, InvalidTimestampSnafu, MissingColumnSnafu, MissingVesselIdSnafu,
    },
};
use serde::Deserialize;
use snafu::ResultExt;
use std::{
    fs::File,
    io::Read,
    path::PathBuf,
};
use tracing::{info, instrument};

pub static REQUIRED_COLUMNS: [&str; 4] = ["lat", "lon", "postime", "mmsi"];

/// Reads position reports from a CSV file with a header row.
///
/// Columns other than [`REQUIRED_COLUMNS`] are ignored.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    timezone: Tz,
}

#[derive(Debug, Deserialize)]
struct CsvPosition<'a> {
    mmsi: &'a str,
    lat: &'a str,
    lon: &'a str,
    postime: &'a str,
}

impl CsvSource {
    /// `timezone` applies to `postime` values without an explicit offset.
    pub fn new(path: impl Into<PathBuf>, timezone: Tz) -> CsvSource {
        CsvSource {
            path: path.into(),
            timezone,
        }
    }

    /// Reads every row, failing on the first invalid one.
    pub fn read_from(&self, reader: impl Read) -> Result<Vec<PositionReport>> {
        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

        let headers = reader.headers().context(CsvSnafu)?.clone();
        check_headers(&headers).context(ValidationSnafu)?;

        let mut positions = Vec::new();
        for record in reader.records() {
            let record = record.context(CsvSnafu)?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let row: CsvPosition<'_> = record.deserialize(Some(&headers)).context(CsvSnafu)?;

            positions.push(row.into_report(line, self.timezone).context(ValidationSnafu)?);
        }

        Ok(positions)
    }
}

impl PositionSource for CsvSource {
    type Error = Error;

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn positions(&self) -> Result<Vec<PositionReport>> {
        let file = File::open(&self.path).context(IoSnafu { path: &self.path })?;
        let positions = self.read_from(file)?;
        info!("read {} position reports", positions.len());
        Ok(positions)
    }
}

fn check_headers(headers: &StringRecord) -> std::result::Result<(), ValidationError> {
    match REQUIRED_COLUMNS
        .iter()
        .find(|c| !headers.iter().any(|h| h == **c))
    {
        Some(column) => MissingColumnSnafu { column: *column }.fail(),
        None => Ok(()),
    }
}

impl CsvPosition<'_> {
    fn into_report(
        self,
        line: u64,
        timezone: Tz,
    ) -> std::result::Result<PositionReport, ValidationError> {
        let mmsi: Mmsi = self
            .mmsi
            .parse()
            .map_err(|_| MissingVesselIdSnafu { line }.build())?;
        let latitude = coordinate(self.lat, "lat", line)?;
        let longitude = coordinate(self.lon, "lon", line)?;
        let timestamp = parse_timestamp(self.postime, timezone).ok_or_else(|| {
            InvalidTimestampSnafu {
                line,
                value: self.postime,
            }
            .build()
        })?;

        Ok(
            PositionReport::new(mmsi, latitude, longitude, timestamp.to_utc())
                .with_utc_offset(*timestamp.offset()),
        )
    }
}

fn coordinate(
    value: &str,
    column: &'static str,
    line: u64,
) -> std::result::Result<f64, ValidationError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InvalidCoordinateSnafu { line, column, value }.build())
}
