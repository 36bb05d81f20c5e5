//! Output dialects known to file2src.
//!
//! Each dialect is compiled in behind its own `lang-*` feature. Lookup is by
//! name or alias, case-insensitive.

use std::io::{Read, Write};

use file2src_core::{ArraySpec, ByteStream, Dialect, Error, Result};

pub mod builtin;

pub use builtin::*;

/// A dialect together with the naming and typing defaults it ships with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lang {
    name: &'static str,
    aliases: &'static [&'static str],
    dialect: Dialect,
    default_type: &'static str,
}

impl Lang {
    /// Canonical name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Every key this dialect answers to, the canonical name included.
    pub fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Element type used when none is configured.
    pub fn default_type(&self) -> &'static str {
        self.default_type
    }

    /// The configured element type, or this dialect's default when unset.
    pub fn resolve_type<'a>(&self, configured: Option<&'a str>) -> &'a str {
        configured.unwrap_or(self.default_type)
    }

    /// Write the declaration for `stream` in this dialect.
    pub fn emit<R, W>(
        &self,
        spec: &ArraySpec,
        stream: &mut ByteStream<R>,
        out: &mut W,
    ) -> Result<u64>
    where
        R: Read,
        W: Write + ?Sized,
    {
        self.dialect.emit(spec, stream, out)
    }
}

/// Look up a dialect by name or alias.
pub fn lookup(name: &str) -> Result<Lang> {
    from_name(name).ok_or_else(|| Error::UnsupportedDialect(name.to_string()))
}
