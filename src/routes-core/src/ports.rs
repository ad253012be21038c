use crate::{MapDocument, PositionReport};

/// Produces the position reports a map is built from.
pub trait PositionSource {
    type Error;

    fn positions(&self) -> Result<Vec<PositionReport>, Self::Error>;
}

/// Turns a finished map document into a standalone page.
pub trait MapRenderer {
    type Error;

    fn render(&self, document: &MapDocument) -> Result<String, Self::Error>;
}
