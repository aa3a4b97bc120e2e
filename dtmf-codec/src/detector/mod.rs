//! Tone recognition over a single fixed-length buffer.

use crate::table::Symbol;

pub mod dtmf;

pub use self::dtmf::{identify, Detector, DEFAULT_TOLERANCE_HZ};

/// Outcome of a detection pass. `Unrecognized` is an ordinary result for
/// noisy or malformed input, not an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Detection {
    Recognized(Symbol),
    Unrecognized,
}

impl Detection {
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Detection::Recognized(symbol) => Some(symbol),
            Detection::Unrecognized => None,
        }
    }

    pub fn is_recognized(self) -> bool {
        matches!(self, Detection::Recognized(_))
    }
}

impl From<Option<Symbol>> for Detection {
    fn from(symbol: Option<Symbol>) -> Self {
        symbol.map_or(Detection::Unrecognized, Detection::Recognized)
    }
}

/// The two strongest spectral bins, in selection order (weaker first).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DominantFrequencies {
    pub first_hz: f64,
    pub second_hz: f64,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Analysis {
    pub detection: Detection,
    /// `None` when the spectrum has fewer than two bins.
    pub dominant: Option<DominantFrequencies>,
}
