//! Test utilities shared across modules.

use std::io::{self, Write};

/// Writer whose every write fails, as on a full disk.
pub struct FullDisk;

impl Write for FullDisk {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("no space left"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
