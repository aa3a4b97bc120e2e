//! Synthesize and save every keypad tone, one worker thread per key.

use std::path::{Path, PathBuf};

use crossbeam::channel::unbounded;
use dtmf_codec::{Symbol, ToneSettings};
use tracing::{debug, info};

use crate::error::{Result, ToolError};
use crate::wav::{tone_file_name, write_tone};

/// Writes `dtmf_tone_<key>.wav` for all twelve keys into `directory` and
/// returns the paths in table order.
pub(crate) fn save_all(directory: &Path, settings: ToneSettings) -> Result<Vec<(Symbol, PathBuf)>> {
    let (sender, receiver) = unbounded();

    crossbeam::scope(|scope| {
        for (index, symbol) in Symbol::ALL.into_iter().enumerate() {
            let sender = sender.clone();
            scope
                .builder()
                .name(format!("tone_{symbol}"))
                .spawn(move |_| {
                    let path = directory.join(tone_file_name(symbol));
                    let result = settings
                        .generate(symbol)
                        .map_err(ToolError::from)
                        .and_then(|buffer| write_tone(&path, &buffer))
                        .map(|_| path);
                    debug!(%symbol, ok = result.is_ok(), "tone worker done");
                    // Receiver outlives the scope.
                    let _ = sender.send((index, symbol, result));
                })?;
        }
        Ok::<_, ToolError>(())
    })
    .map_err(|_| ToolError::WorkerPanicked)??;

    drop(sender);

    let mut results: Vec<_> = receiver.iter().collect();
    results.sort_by_key(|(index, _, _)| *index);

    let saved = results
        .into_iter()
        .map(|(_, symbol, result)| result.map(|path| (symbol, path)))
        .collect::<Result<Vec<_>>>()?;

    info!(count = saved.len(), directory = %directory.display(), "saved all tones");
    Ok(saved)
}
