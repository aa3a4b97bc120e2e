use tracing::debug;

use crate::buffer::ToneBuffer;
use crate::error::{Error, Result};
use crate::spectrum::Spectrum;
use crate::table::reverse_lookup;

use super::{Analysis, Detection, DominantFrequencies};

pub const DEFAULT_TOLERANCE_HZ: f64 = 20.0;

/// FFT peak-picking DTMF detector.
///
/// The two strongest bins below Nyquist are taken as the tone pair and
/// matched against the frequency table with an absolute tolerance on each
/// frequency. The tolerance should be at least one bin width
/// (`sample_rate / len`, 2 Hz for 0.5 s at 8 kHz), otherwise bin
/// quantization alone can defeat an exact match.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Detector {
    tolerance_hz: f64,
}

impl Default for Detector {
    fn default() -> Self {
        Self::with_tolerance(DEFAULT_TOLERANCE_HZ)
    }
}

impl Detector {
    pub fn with_tolerance(tolerance_hz: f64) -> Self {
        Self { tolerance_hz }
    }

    pub fn tolerance_hz(&self) -> f64 {
        self.tolerance_hz
    }

    pub fn analyze(&self, buffer: &ToneBuffer) -> Result<Analysis> {
        if buffer.is_empty() {
            return Err(Error::EmptyBuffer);
        }

        let spectrum = Spectrum::of(buffer.samples(), buffer.sample_rate());
        if spectrum.len() < 2 {
            debug!(samples = buffer.len(), "too few spectral bins for a tone pair");
            return Ok(Analysis {
                detection: Detection::Unrecognized,
                dominant: None,
            });
        }

        let bins = spectrum.dominant_bins(2);
        let dominant = DominantFrequencies {
            first_hz: spectrum.frequencies()[bins[0]],
            second_hz: spectrum.frequencies()[bins[1]],
        };

        let detection = Detection::from(reverse_lookup(
            dominant.first_hz,
            dominant.second_hz,
            self.tolerance_hz,
        ));

        debug!(
            first_hz = dominant.first_hz,
            second_hz = dominant.second_hz,
            tolerance_hz = self.tolerance_hz,
            ?detection,
            "dtmf analysis"
        );

        Ok(Analysis {
            detection,
            dominant: Some(dominant),
        })
    }

    pub fn identify(&self, buffer: &ToneBuffer) -> Result<Detection> {
        self.analyze(buffer).map(|analysis| analysis.detection)
    }
}

/// [`Detector::identify`] with the default 20 Hz tolerance.
pub fn identify(buffer: &ToneBuffer) -> Result<Detection> {
    Detector::default().identify(buffer)
}
