#![deny(warnings)]
#![deny(rust_2018_idioms)]

//! Domain types and track building for rendering vessel routes on an interactive map.

mod domain;
mod error;
mod mean;
mod ports;
mod track_builder;

pub use domain::*;
pub use error::*;
pub use mean::*;
pub use ports::*;
pub use track_builder::*;
