//! Array declaration emission.
//!
//! Every dialect walks the same sequence:
//! `Header → (ReadChunk → FormatChunk)* → [Terminator] → Footer`.
//! A read or write fault stops the walk where it happened; the footer is
//! only written after the whole stream was consumed.

mod c;
mod go;
mod rust;

#[cfg(test)]
mod emit_tests;

use std::io::{Read, Write};

use crate::{ByteStream, Result};

/// Elements per body line unless configured otherwise.
pub const DEFAULT_COLUMNS: usize = 16;

/// Naming and typing of the emitted array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArraySpec {
    pub(crate) name: String,
    pub(crate) elem_type: String,
    pub(crate) null_terminate: bool,
    pub(crate) columns: usize,
}

impl ArraySpec {
    pub fn new(name: impl Into<String>, elem_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elem_type: elem_type.into(),
            null_terminate: false,
            columns: DEFAULT_COLUMNS,
        }
    }

    /// Append one zero element after the data.
    pub fn null_terminate(mut self, value: bool) -> Self {
        self.null_terminate = value;
        self
    }

    /// Set the number of elements per body line (at least one).
    pub fn columns(mut self, value: usize) -> Self {
        self.columns = value.max(1);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn elem_type(&self) -> &str {
        &self.elem_type
    }

    /// Declared element count for `len` data bytes.
    pub fn element_count(&self, len: u64) -> u64 {
        len + u64::from(self.null_terminate)
    }
}

/// Supported output dialects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// `const size_t x_sz = N; T x[x_sz] = { ... };`
    C,
    /// `var x = [N]T{ ... }`
    Go,
    /// `pub const x: [T; N] = [ ... ];`
    Rust,
}

impl Dialect {
    /// Write the complete declaration for `stream` to `out`.
    ///
    /// Returns the number of data bytes encoded (the terminator excluded).
    pub fn emit<R, W>(
        self,
        spec: &ArraySpec,
        stream: &mut ByteStream<R>,
        out: &mut W,
    ) -> Result<u64>
    where
        R: Read,
        W: Write + ?Sized,
    {
        match self {
            Dialect::C => c::emit(spec, stream, out),
            Dialect::Go => go::emit(spec, stream, out),
            Dialect::Rust => rust::emit(spec, stream, out),
        }
    }
}

/// Where commas go in the body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Commas {
    /// Between elements only; the last declared element has none.
    Separating,
    /// After every element, the last one included.
    Trailing,
}

/// Stream the data as rows of `0x..` literals, one row per chunk.
///
/// `count` is the declared element count, terminator included, so separating
/// commas still precede a terminator written afterwards.
fn write_rows<R, W>(
    spec: &ArraySpec,
    stream: &mut ByteStream<R>,
    out: &mut W,
    commas: Commas,
    count: u64,
) -> Result<u64>
where
    R: Read,
    W: Write + ?Sized,
{
    let mut chunk = vec![0u8; spec.columns];
    let mut written = 0u64;

    loop {
        let n = stream.read_chunk(&mut chunk)?;
        if n == 0 {
            break;
        }

        out.write_all(b"\t")?;
        for &byte in &chunk[..n] {
            write!(out, "0x{byte:02x}")?;
            written += 1;
            if commas == Commas::Trailing || written < count {
                out.write_all(b",")?;
            }
        }
        out.write_all(b"\n")?;
    }

    Ok(written)
}
