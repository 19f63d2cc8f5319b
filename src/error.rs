//! Error types for replay decoding.

use std::str::Utf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The buffer handed to the decoder has no bytes at all.
    #[error("Replay buffer is empty")]
    EmptyInput,

    /// Leading four bytes are not the BSOR magic number.
    #[error("Not a BSOR replay: expected magic 0x442d3d69, found {0:#010x}")]
    BadMagic(u32),

    /// A section marker byte did not carry the expected ordinal.
    #[error("Unexpected section marker at offset {offset}: expected {expected}, found {found}")]
    UnexpectedSection { offset: usize, expected: u8, found: u8 },

    /// A read needed more bytes than the buffer holds.
    #[error("Unexpected end of input at offset {offset}: needed {needed} bytes, {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// String bytes are not valid UTF-8 (strict text decoding only).
    #[error("Invalid UTF-8 in string at offset {offset}: {source}")]
    TextDecode { offset: usize, source: Utf8Error },

    /// A length prefix or element count was negative.
    #[error("Negative length {length} at offset {offset}")]
    NegativeLength { offset: usize, length: i32 },

    /// Bytes remain after the last section and the caller asked to reject them.
    #[error("{remaining} trailing bytes after offset {offset}")]
    TrailingBytes { offset: usize, remaining: usize },

    #[error("Invalid replay structure: {0}")]
    InvalidStructure(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidStructure(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
