pub mod buffer;
pub mod decoder;
pub mod parsers;
pub mod types;

use std::fmt;

use decoder::Decoder;
use tracing::debug;
use types::Replay;

use crate::error::{Error, Result};

/// First four bytes of every BSOR file, read little-endian.
pub const MAGIC_NUMBER: u32 = 0x442d3d69;

/// Marker byte that opens each section, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Section {
    Info = 0,
    Frames = 1,
    Notes = 2,
    Walls = 3,
    Heights = 4,
    Pauses = 5,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Info => "info",
            Section::Frames => "frames",
            Section::Notes => "notes",
            Section::Walls => "walls",
            Section::Heights => "heights",
            Section::Pauses => "pauses",
        };
        f.write_str(name)
    }
}

/// How string bytes that are not valid UTF-8 are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextDecoding {
    /// Invalid sequences become U+FFFD.
    #[default]
    Lossy,
    /// Invalid sequences fail the decode with `Error::TextDecode`.
    Strict,
}

#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    pub text: TextDecoding,
    /// Fail when bytes follow the pauses section instead of ignoring them.
    pub reject_trailing_bytes: bool,
}

impl DecodeOptions {
    pub fn strict_text(mut self, strict: bool) -> Self {
        self.text = if strict {
            TextDecoding::Strict
        } else {
            TextDecoding::Lossy
        };
        self
    }

    pub fn reject_trailing_bytes(mut self, reject: bool) -> Self {
        self.reject_trailing_bytes = reject;
        self
    }
}

/// Decodes a complete BSOR buffer with default options.
pub fn decode(data: &[u8]) -> Result<Replay> {
    decode_with_options(data, &DecodeOptions::default())
}

pub fn decode_with_options(data: &[u8], options: &DecodeOptions) -> Result<Replay> {
    if data.is_empty() {
        return Err(Error::EmptyInput);
    }
    debug!(len = data.len(), ?options, "decoding replay");
    Decoder::with_options(data, options).decode()
}
