//! WAV persistence for tone buffers.

use std::path::Path;

use dtmf_codec::{Symbol, ToneBuffer};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use tracing::debug;

use crate::error::Result;

/// `dtmf_tone_<key>.wav`, with `*` and `#` spelled `star` and `hash`.
pub(crate) fn tone_file_name(symbol: Symbol) -> String {
    let name = match symbol {
        Symbol::Star => "star".to_string(),
        Symbol::Hash => "hash".to_string(),
        other => other.to_string(),
    };
    format!("dtmf_tone_{name}.wav")
}

/// Mono, 16-bit signed PCM.
pub(crate) fn write_tone(path: &Path, buffer: &ToneBuffer) -> Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: buffer.sample_rate(),
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)?;
    for &sample in buffer.samples() {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    debug!(path = %path.display(), samples = buffer.len(), "wrote tone");
    Ok(())
}

/// Reads any integer or float WAV. Channels are averaged down to mono and
/// samples rescaled to the 16-bit range.
pub(crate) fn read_tone(path: &Path) -> Result<ToneBuffer> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();

    let interleaved: Vec<f64> = match spec.sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(|v| v as f64 * i16::MAX as f64))
            .collect::<std::result::Result<_, _>>()?,
        SampleFormat::Int => {
            let scale = 2f64.powi(16 - spec.bits_per_sample as i32);
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f64 * scale))
                .collect::<std::result::Result<_, _>>()?
        }
    };

    let channels = spec.channels.max(1) as usize;
    let samples: Vec<i16> = interleaved
        .chunks_exact(channels)
        .map(|frame| {
            let mean = frame.iter().sum::<f64>() / channels as f64;
            mean.round().clamp(i16::MIN as f64, i16::MAX as f64) as i16
        })
        .collect();

    debug!(
        path = %path.display(),
        channels = spec.channels,
        bits = spec.bits_per_sample,
        sample_rate = spec.sample_rate,
        frames = samples.len(),
        "read tone"
    );

    Ok(ToneBuffer::new(samples, spec.sample_rate)?)
}

#[cfg(test)]
mod tests {
    use dtmf_codec::generator::generate;

    use super::*;

    #[test]
    fn file_names() {
        assert_eq!(tone_file_name(Symbol::Star), "dtmf_tone_star.wav");
        assert_eq!(tone_file_name(Symbol::Hash), "dtmf_tone_hash.wav");
        assert_eq!(tone_file_name(Symbol::K0), "dtmf_tone_0.wav");
        assert_eq!(tone_file_name(Symbol::K7), "dtmf_tone_7.wav");
    }

    #[test]
    fn round_trip_16_bit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(tone_file_name(Symbol::K8));

        let buffer = generate(Symbol::K8, 8000, 0.5).unwrap();
        write_tone(&path, &buffer).unwrap();

        assert_eq!(read_tone(&path).unwrap(), buffer);
    }

    #[test]
    fn stereo_is_averaged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stereo.wav");

        let spec = WavSpec {
            channels: 2,
            sample_rate: 16000,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(&path, spec).unwrap();
        for (left, right) in [(100i16, 300i16), (-100, -300), (32767, 32767)] {
            writer.write_sample(left).unwrap();
            writer.write_sample(right).unwrap();
        }
        writer.finalize().unwrap();

        let dut = read_tone(&path).unwrap();
        assert_eq!(dut.sample_rate(), 16000);
        assert_eq!(dut.samples(), &[200, -200, 32767]);
    }

    #[test]
    fn float_and_8_bit_rescaled() {
        let dir = tempfile::tempdir().unwrap();

        let path = dir.path().join("float.wav");
        let spec = WavSpec {
            channels: 1,
            sample_rate: 8000,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };
        let mut writer = WavWriter::create(&path, spec).unwrap();
        for v in [0.0f32, 0.5, -1.0] {
            writer.write_sample(v).unwrap();
        }
        writer.finalize().unwrap();
        assert_eq!(read_tone(&path).unwrap().samples(), &[0, 16384, -32767]);

        let path = dir.path().join("8bit.wav");
        let spec = WavSpec {
            channels: 1,
            sample_rate: 8000,
            bits_per_sample: 8,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(&path, spec).unwrap();
        for v in [0i8, 64, -128] {
            writer.write_sample(v).unwrap();
        }
        writer.finalize().unwrap();
        assert_eq!(read_tone(&path).unwrap().samples(), &[0, 16384, -32768]);
    }
}
