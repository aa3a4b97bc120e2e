//! Synthesis and recognition of DTMF keypad tones.
//!
//! A tone is the sum of one low-band and one high-band sine. [`generator`]
//! turns a [`Symbol`] into a normalized 16-bit [`ToneBuffer`], and
//! [`detector`] recovers the symbol from a buffer by picking the two
//! strongest FFT bins and matching them against [`table::FREQUENCY_TABLE`].
//!
//! ```rust
//! use dtmf_codec::{detector, generator, Detection, Symbol};
//!
//! let buffer = generator::generate(Symbol::K5, 8000, 0.5).unwrap();
//! assert_eq!(buffer.len(), 4000);
//! assert_eq!(detector::identify(&buffer).unwrap(), Detection::Recognized(Symbol::K5));
//! ```

pub mod buffer;
pub mod detector;
pub mod error;
pub mod generator;
pub mod spectrum;
pub mod table;

pub use buffer::ToneBuffer;
pub use detector::{Analysis, Detection, Detector, DominantFrequencies};
pub use error::{Error, Result};
pub use generator::ToneSettings;
pub use table::{FrequencyPair, Symbol};
