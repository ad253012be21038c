mod color;
mod geojson;
mod map_document;
mod options;
mod position;
mod tile_layer;
mod track;

pub use color::*;
pub use geojson::*;
pub use map_document::*;
pub use options::*;
pub use position::*;
pub use tile_layer::*;
pub use track::*;
