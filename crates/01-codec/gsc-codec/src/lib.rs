//! Byte-level encodings used by Gold/Silver memory fields.
//!
//! Everything in this crate is a pure transformation between raw byte
//! sequences and typed values. Memory access and address bookkeeping live in
//! `gsc-catalog`.

#![allow(missing_docs)]

mod codec;
mod encoding;
mod error;
pub mod text;
mod value;

pub use codec::{decode, decode_bcd, encode, encode_bcd, Encoded, BCD_MAX};
pub use encoding::Encoding;
pub use error::{CodecError, CodecResult};
pub use text::{decode_gsc_text, encode_gsc_text};
pub use value::FieldValue;
