#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Encoding engine for file2src.
//!
//! Turns a byte stream of known length into the text of an array declaration
//! in one of the supported dialects:
//! - **Escape decoding** (`escape`): prefix text to raw bytes
//! - **Prefix injection** (`prefix`): verbatim content written ahead of the array
//! - **Emission** (`emit`): header, hex body and footer per dialect
//!
//! # Example
//!
//! ```
//! use file2src_core::{ArraySpec, ByteStream, Dialect};
//!
//! let data = [0x41u8, 0x42];
//! let mut stream = ByteStream::new(&data[..], data.len() as u64);
//! let mut out = Vec::new();
//! Dialect::C
//!     .emit(&ArraySpec::new("data", "unsigned char"), &mut stream, &mut out)
//!     .unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("const size_t data_sz = 2;"));
//! ```

pub mod emit;
pub mod error;
pub mod escape;
pub mod prefix;
pub mod stream;

#[cfg(test)]
mod test_utils;

pub use emit::{ArraySpec, DEFAULT_COLUMNS, Dialect};
pub use error::{Error, Result};
pub use escape::{DecodeError, unescape};
pub use prefix::Prefix;
pub use stream::ByteStream;
