use crate::error::{Error, Result};

/// Signed 16-bit PCM samples at a fixed sample rate. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToneBuffer {
    samples: Vec<i16>,
    sample_rate: u32,
}

impl ToneBuffer {
    pub fn new(samples: Vec<i16>, sample_rate: u32) -> Result<Self> {
        if sample_rate == 0 {
            return Err(Error::InvalidSampleRate(sample_rate));
        }

        Ok(Self {
            samples,
            sample_rate,
        })
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Seconds of audio, `len / sample_rate`.
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    pub fn into_samples(self) -> Vec<i16> {
        self.samples
    }
}
