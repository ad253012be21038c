#![deny(warnings)]
#![deny(rust_2018_idioms)]

//! Implements a binary that reads vessel position reports from a CSV file and renders every
//! vessel's route, plus a time slider replaying it, to a standalone HTML map.

pub mod csv_source;
pub mod error;
pub mod leaflet;
pub mod settings;
pub mod startup;
pub mod timestamp;
