use serde::Deserialize;
use strum::{EnumIter, EnumString, IntoEnumIterator};

/// Route colors, named the way the marker palette of the map widget names them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, EnumIter, EnumString, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Color {
    Blue,
    Red,
    Green,
    Purple,
    Orange,
    DarkRed,
    CadetBlue,
    DarkPurple,
}

impl Color {
    /// Value usable as a CSS color in the rendered page.
    ///
    /// `darkpurple` is not a CSS keyword so it maps to the hex value the marker palette uses.
    pub fn css(&self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Green => "green",
            Color::Purple => "purple",
            Color::Orange => "orange",
            Color::DarkRed => "darkred",
            Color::CadetBlue => "cadetblue",
            Color::DarkPurple => "#5b396b",
        }
    }
}

/// Ordered, non-empty set of colors handed out to vessels by iteration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette(Vec<Color>);

impl Palette {
    pub fn new(colors: Vec<Color>) -> Option<Palette> {
        if colors.is_empty() {
            None
        } else {
            Some(Palette(colors))
        }
    }

    /// Wraps around once `index` runs past the palette.
    pub fn color_for(&self, index: usize) -> Color {
        self.0[index % self.0.len()]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.0
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette(Color::iter().collect())
    }
}
