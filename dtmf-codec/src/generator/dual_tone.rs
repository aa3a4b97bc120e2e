use std::f64::consts::TAU;

use crate::table::FrequencyPair;

use super::ToneGenerator;

/// Sum of two unit sines, sampled on the grid `t_n = n * time_step`.
pub struct DualToneGenerator {
    omega_0: f64,
    omega_1: f64,
    time_step: f64,
    index: usize,
    output: f64,
}

impl DualToneGenerator {
    pub fn new(freq_0_hz: f64, freq_1_hz: f64, time_step: f64) -> Self {
        Self {
            omega_0: TAU * freq_0_hz,
            omega_1: TAU * freq_1_hz,
            time_step,
            index: 0,
            output: 0.0,
        }
    }

    pub fn from_pair(pair: FrequencyPair, time_step: f64) -> Self {
        Self::new(pair.low_hz as f64, pair.high_hz as f64, time_step)
    }
}

impl ToneGenerator for DualToneGenerator {
    fn output(&self) -> f64 {
        self.output
    }

    fn advance(&mut self) {
        // t from the index, never accumulated.
        let t = self.index as f64 * self.time_step;
        self.output = (self.omega_0 * t).sin() + (self.omega_1 * t).sin();
        self.index += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_phase() {
        let mut dut = DualToneGenerator::new(770.0, 1336.0, 1.0 / 8000.0);
        dut.advance();
        assert_eq!(dut.output(), 0.0);
    }

    #[test]
    fn matches_closed_form() {
        let time_step = 0.5 / 4000.0;
        let mut dut = DualToneGenerator::new(697.0, 1209.0, time_step);

        for n in 0..100 {
            dut.advance();
            let t = n as f64 * time_step;
            let expected = (TAU * 697.0 * t).sin() + (TAU * 1209.0 * t).sin();
            assert_eq!(dut.output(), expected);
            assert!(dut.output().abs() <= 2.0);
        }
    }
}
