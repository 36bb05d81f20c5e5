//! Content written verbatim ahead of the array declaration.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::escape::unescape;
use crate::{Error, Result};

/// Optional prefix file followed by optional decoded prefix text.
///
/// Text is decoded when the prefix is built, so a malformed escape fails
/// before anything reaches the output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Prefix {
    file: Option<PathBuf>,
    text: Vec<u8>,
}

impl Prefix {
    pub fn new(file: Option<PathBuf>, raw_text: Option<&str>) -> Result<Self> {
        let text = match raw_text {
            Some(raw) => unescape(raw)?,
            None => Vec::new(),
        };
        Ok(Self { file, text })
    }

    pub fn is_empty(&self) -> bool {
        self.file.is_none() && self.text.is_empty()
    }

    /// Decoded prefix text.
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// Copy the prefix file, then the decoded text, to `out`.
    ///
    /// Returns the number of bytes written.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> Result<u64> {
        let mut written = 0;

        if let Some(path) = &self.file {
            let mut file = File::open(path).map_err(|source| Error::PrefixFileOpen {
                path: path.clone(),
                source,
            })?;
            written += io::copy(&mut file, out).map_err(Error::PrefixCopy)?;
        }

        out.write_all(&self.text).map_err(Error::PrefixCopy)?;
        written += self.text.len() as u64;

        Ok(written)
    }
}
