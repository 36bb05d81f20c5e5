use std::io::{Read, Write};

use super::{ArraySpec, Commas, write_rows};
use crate::{ByteStream, Result};

pub(super) fn emit<R, W>(
    spec: &ArraySpec,
    stream: &mut ByteStream<R>,
    out: &mut W,
) -> Result<u64>
where
    R: Read,
    W: Write + ?Sized,
{
    let count = spec.element_count(stream.len());

    // Go accepts a trailing comma, so every element gets one.
    writeln!(out, "var {} = [{count}]{}{{", spec.name(), spec.elem_type())?;

    let written = write_rows(spec, stream, out, Commas::Trailing, count)?;
    if spec.null_terminate {
        writeln!(out, "\t0x00,")?;
    }

    writeln!(out, "}}")?;
    Ok(written)
}
