use thiserror::Error;

use crate::Encoding;

pub type CodecResult<T> = Result<T, CodecError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("unknown encoding tag: {0:?}")]
    UnknownEncoding(String),

    #[error("expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("{enc} needs {expected} bytes, buffer holds {actual}")]
    ShortBuffer {
        enc: Encoding,
        expected: usize,
        actual: usize,
    },

    #[error("value kind does not match encoding {enc}")]
    ValueKind { enc: Encoding },
}

impl CodecError {
    pub fn unknown_encoding(tag: impl Into<String>) -> Self {
        CodecError::UnknownEncoding(tag.into())
    }
}
