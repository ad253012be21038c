use snafu::{Location, Snafu};

/// Input rejected before any map geometry is built.
#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum ValidationError {
    #[snafu(display("Input contained no position reports"))]
    EmptyInput {
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("Input is missing required column '{column}'"))]
    MissingColumn {
        #[snafu(implicit)]
        location: Location,
        column: String,
    },
    #[snafu(display("Row on line {line} has an empty vessel identifier"))]
    MissingVesselId {
        #[snafu(implicit)]
        location: Location,
        line: u64,
    },
    #[snafu(display("Row on line {line} has an invalid '{column}' value '{value}'"))]
    InvalidCoordinate {
        #[snafu(implicit)]
        location: Location,
        line: u64,
        column: &'static str,
        value: String,
    },
    #[snafu(display("Row on line {line} has an unparseable timestamp '{value}'"))]
    InvalidTimestamp {
        #[snafu(implicit)]
        location: Location,
        line: u64,
        value: String,
    },
}

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum ParseStringError {
    #[snafu(display("String was unexpectedly empty"))]
    Empty {
        #[snafu(implicit)]
        location: Location,
    },
}
