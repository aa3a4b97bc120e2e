//! Tone synthesis: symbol in, normalized 16-bit PCM out.

use tracing::trace;

use crate::buffer::ToneBuffer;
use crate::error::{Error, Result};
use crate::table::{lookup, Symbol};

use self::dual_tone::DualToneGenerator;

pub mod dual_tone;

pub const DEFAULT_SAMPLE_RATE: u32 = 8000;
pub const DEFAULT_DURATION: f64 = 0.5;

/// Full-scale value a normalized waveform peaks at.
pub const FULL_SCALE: f64 = 32767.0;

pub trait ToneGenerator {
    fn output(&self) -> f64;
    fn advance(&mut self);
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ToneSettings {
    pub sample_rate: u32,
    pub duration: f64,
}

impl Default for ToneSettings {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            duration: DEFAULT_DURATION,
        }
    }
}

impl ToneSettings {
    pub fn generate(&self, symbol: Symbol) -> Result<ToneBuffer> {
        generate(symbol, self.sample_rate, self.duration)
    }

    /// `floor(sample_rate * duration)`.
    pub fn sample_count(&self) -> usize {
        (self.sample_rate as f64 * self.duration) as usize
    }
}

/// Synthesizes `duration` seconds of `symbol` at `sample_rate`.
///
/// The time grid covers `[0, duration)` with `floor(sample_rate * duration)`
/// evenly spaced points; the endpoint is excluded. Samples are scaled so the
/// peak lands on full scale and then truncated toward zero.
pub fn generate(symbol: Symbol, sample_rate: u32, duration: f64) -> Result<ToneBuffer> {
    if sample_rate == 0 {
        return Err(Error::InvalidSampleRate(sample_rate));
    }
    if !(duration.is_finite() && duration > 0.0) {
        return Err(Error::InvalidDuration(duration));
    }

    let settings = ToneSettings { sample_rate, duration };
    let n = settings.sample_count();
    let pair = lookup(symbol);

    let mut generator = DualToneGenerator::from_pair(pair, duration / n as f64);
    let waveform: Vec<f64> = (0..n)
        .map(|_| {
            generator.advance();
            generator.output()
        })
        .collect();

    let samples = normalize(&waveform)?;
    trace!(%symbol, sample_rate, samples = samples.len(), "generated tone");

    ToneBuffer::new(samples, sample_rate)
}

pub fn generate_glyph(glyph: &str, sample_rate: u32, duration: f64) -> Result<ToneBuffer> {
    generate(glyph.parse()?, sample_rate, duration)
}

/// Scales `waveform` by `FULL_SCALE / peak` and truncates to `i16`.
pub fn normalize(waveform: &[f64]) -> Result<Vec<i16>> {
    let peak = waveform.iter().fold(0.0f64, |peak, x| peak.max(x.abs()));
    if peak == 0.0 {
        return Err(Error::DegenerateSignal);
    }

    Ok(waveform.iter().map(|x| (x / peak * FULL_SCALE) as i16).collect())
}
