pub mod error;
pub mod replay;
pub mod stats;

pub use error::{Error, Result};
pub use replay::types::Replay;
pub use replay::{decode, decode_with_options, DecodeOptions, TextDecoding};
pub use stats::ReplaySummary;

use std::fs;
use std::path::Path;
use tracing::info;

pub fn load_replay_file(path: impl AsRef<Path>) -> Result<Replay> {
    load_replay_file_with_options(path, &DecodeOptions::default())
}

/// Reads the whole file into memory and decodes it.
pub fn load_replay_file_with_options(
    path: impl AsRef<Path>,
    options: &DecodeOptions,
) -> Result<Replay> {
    let path = path.as_ref();
    let content = fs::read(path)?;
    let replay = decode_with_options(&content, options)?;
    info!(
        path = %path.display(),
        bytes = content.len(),
        frames = replay.frame_count,
        notes = replay.note_count,
        "loaded replay"
    );

    Ok(replay)
}
