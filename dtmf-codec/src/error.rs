use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid DTMF symbol {0:?}, choose from 0-9, *, #")]
    InvalidSymbol(String),
    #[error("invalid sample rate {0} Hz")]
    InvalidSampleRate(u32),
    #[error("invalid duration {0} s")]
    InvalidDuration(f64),
    #[error("synthesized waveform has no energy to normalize")]
    DegenerateSignal,
    #[error("sample buffer is empty")]
    EmptyBuffer,
}

pub type Result<T> = std::result::Result<T, Error>;
