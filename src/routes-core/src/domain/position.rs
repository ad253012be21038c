use crate::{ParseStringError, parse_string_error::EmptySnafu};
use chrono::{DateTime, FixedOffset, Offset, Utc};
use geo::{Coord, coord};
use std::{fmt::Display, ops::Deref, str::FromStr};

/// Vessel identifier as found in the `mmsi` column, trimmed.
///
/// Numeric and textual identifiers are both accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Mmsi(String);

impl Mmsi {
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for Mmsi {
    type Err = ParseStringError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.is_empty() {
            EmptySnafu.fail()
        } else {
            Ok(Self(value.into()))
        }
    }
}

impl AsRef<str> for Mmsi {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for Mmsi {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Mmsi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionReport {
    pub mmsi: Mmsi,
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: DateTime<Utc>,
    /// Offset the timestamp was written with in the source, UTC unless set.
    pub utc_offset: FixedOffset,
}

impl PositionReport {
    pub fn new(mmsi: Mmsi, latitude: f64, longitude: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            mmsi,
            latitude,
            longitude,
            timestamp,
            utc_offset: Utc.fix(),
        }
    }

    pub fn with_utc_offset(mut self, utc_offset: FixedOffset) -> Self {
        self.utc_offset = utc_offset;
        self
    }

    /// The timestamp as written in the source.
    pub fn local_timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp.with_timezone(&self.utc_offset)
    }

    /// GeoJSON axis order, `x` is longitude.
    pub fn coord(&self) -> Coord<f64> {
        coord! { x: self.longitude, y: self.latitude }
    }
}
