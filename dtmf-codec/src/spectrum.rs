//! Magnitude spectrum of a PCM buffer, non-negative frequencies only.

use num_complex::Complex;
use rustfft::FftPlanner;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Peak {
    pub frequency_hz: f64,
    pub magnitude: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Spectrum {
    frequencies: Vec<f64>,
    magnitudes: Vec<f64>,
    bin_width: f64,
}

impl Spectrum {
    /// Transforms the whole of `samples` and keeps the first `len / 2` bins.
    /// Bin `k` sits at `k * sample_rate / len` Hz.
    pub fn of(samples: &[i16], sample_rate: u32) -> Self {
        let m = samples.len();
        if m == 0 {
            return Self {
                frequencies: Vec::new(),
                magnitudes: Vec::new(),
                bin_width: 0.0,
            };
        }

        let mut buffer: Vec<Complex<f64>> = samples
            .iter()
            .map(|&s| Complex::new(s as f64, 0.0))
            .collect();

        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(m);
        fft.process(&mut buffer);

        let bins = m / 2;
        let bin_width = sample_rate as f64 / m as f64;

        Self {
            frequencies: (0..bins).map(|k| k as f64 * bin_width).collect(),
            magnitudes: buffer[..bins].iter().map(|c| c.norm()).collect(),
            bin_width,
        }
    }

    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    pub fn magnitudes(&self) -> &[f64] {
        &self.magnitudes
    }

    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Indices of the `count` strongest bins, weakest first. Equal magnitudes
    /// order by index, so the higher bin wins a tie for the last slot.
    pub fn dominant_bins(&self, count: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.magnitudes.len()).collect();
        order.sort_by(|&a, &b| {
            self.magnitudes[a]
                .total_cmp(&self.magnitudes[b])
                .then(a.cmp(&b))
        });
        order.split_off(order.len().saturating_sub(count))
    }

    /// Strongest `count` bins, strongest first.
    pub fn peaks(&self, count: usize) -> Vec<Peak> {
        self.dominant_bins(count)
            .into_iter()
            .rev()
            .map(|k| Peak {
                frequency_hz: self.frequencies[k],
                magnitude: self.magnitudes[k],
            })
            .collect()
    }
}
