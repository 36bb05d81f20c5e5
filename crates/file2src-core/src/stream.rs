use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::{Error, Result};

/// Forward-only, read-once byte source with a length known up front.
///
/// The declared length comes from the input's metadata, not from consuming it.
/// Reading more or fewer bytes than declared is reported as
/// [`Error::LengthMismatch`].
#[derive(Debug)]
pub struct ByteStream<R> {
    reader: R,
    declared: u64,
    consumed: u64,
}

impl ByteStream<File> {
    /// Open `path` and take its size from the file metadata.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::InputOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let declared = file
            .metadata()
            .map_err(|source| Error::InputStat {
                path: path.to_path_buf(),
                source,
            })?
            .len();
        Ok(Self::new(file, declared))
    }
}

impl<R: Read> ByteStream<R> {
    pub fn new(reader: R, declared: u64) -> Self {
        Self {
            reader,
            declared,
            consumed: 0,
        }
    }

    /// Declared total length in bytes.
    pub fn len(&self) -> u64 {
        self.declared
    }

    pub fn is_empty(&self) -> bool {
        self.declared == 0
    }

    /// Bytes handed out so far.
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    /// Fill `buf` with the next chunk and return how many bytes were read.
    ///
    /// Only the final chunk may be short. `Ok(0)` means clean end of stream,
    /// which is only reported once exactly the declared length was consumed.
    pub fn read_chunk(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::StreamRead(e)),
            }
        }

        self.consumed += filled as u64;
        let exhausted = filled < buf.len();
        if self.consumed > self.declared || (exhausted && self.consumed != self.declared) {
            return Err(Error::LengthMismatch {
                declared: self.declared,
                actual: self.consumed,
            });
        }
        Ok(filled)
    }
}
