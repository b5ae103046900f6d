use std::fmt;
use std::str::FromStr;

use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_maps::errors::MandelbrotColourMapError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MandelbrotColourMapKind {
    #[default]
    FireGradient,
    BlueWhiteGradient,
}

impl MandelbrotColourMapKind {
    pub const ALL: &'static [Self] = &[Self::FireGradient, Self::BlueWhiteGradient];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::FireGradient => "Fire gradient",
            Self::BlueWhiteGradient => "Blue-white gradient",
        }
    }

    /// Short name accepted on the command line.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FireGradient => "fire",
            Self::BlueWhiteGradient => "blue-white",
        }
    }
}

impl fmt::Display for MandelbrotColourMapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for MandelbrotColourMapKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown palette '{}'", s))
    }
}

/// Colours pixels that escaped after a given number of iterations.
pub trait MandelbrotColourMap: fmt::Debug + Send + Sync {
    fn map(&self, iterations: u32) -> Result<Colour, MandelbrotColourMapError>;

    fn kind(&self) -> MandelbrotColourMapKind;

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}
