use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error(transparent)]
    Codec(#[from] dtmf_codec::Error),
    #[error("wav: {0}")]
    Wav(#[from] hound::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("tone worker panicked")]
    WorkerPanicked,
    #[error("logging setup: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, ToolError>;
