use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use file2src_core::{ArraySpec, ByteStream, Error, Prefix, Result};

use super::lang_resolver::{resolve_lang, unsupported_hint};

pub struct EncodeArgs {
    pub input: PathBuf,
    pub name: String,
    pub elem_type: Option<String>,
    pub lang: String,
    pub prefix_file: Option<PathBuf>,
    pub prefix_text: Option<String>,
    pub output: Option<PathBuf>,
    pub null_terminate: bool,
    pub columns: usize,
}

pub fn run(args: EncodeArgs) {
    if let Err(e) = encode(args) {
        match &e {
            Error::UnsupportedDialect(name) => {
                eprintln!("error: {}; {}", e, unsupported_hint(name))
            }
            _ => eprintln!("error: {}", e),
        }
        std::process::exit(1);
    }
}

/// Write the prefix and the encoded array for `args.input`.
///
/// Nothing is written and no file is created until the dialect is resolved,
/// the prefix text is decoded and the input is open.
pub fn encode(args: EncodeArgs) -> Result<()> {
    let lang = resolve_lang(&args.lang)?;
    let elem_type = lang.resolve_type(args.elem_type.as_deref());
    log::debug!("dialect '{}', element type '{}'", lang.name(), elem_type);

    let prefix = Prefix::new(args.prefix_file, args.prefix_text.as_deref())?;

    let mut stream = ByteStream::open(&args.input)?;
    log::debug!("input '{}': {} bytes", args.input.display(), stream.len());

    let spec = ArraySpec::new(args.name, elem_type)
        .null_terminate(args.null_terminate)
        .columns(args.columns);

    let mut out = open_output(args.output.as_deref())?;

    if !prefix.is_empty() {
        let written = prefix.write_to(&mut out)?;
        log::debug!("wrote {} prefix bytes", written);
    }

    let encoded = lang.emit(&spec, &mut stream, &mut out)?;
    out.flush()?;

    log::debug!(
        "encoded {} bytes as '{}' ({} elements)",
        encoded,
        spec.name(),
        spec.element_count(encoded)
    );
    Ok(())
}

fn open_output(path: Option<&Path>) -> Result<BufWriter<Box<dyn Write>>> {
    let sink: Box<dyn Write> = match path {
        Some(path) => Box::new(File::create(path).map_err(|source| Error::OutputCreate {
            path: path.to_path_buf(),
            source,
        })?),
        None => Box::new(io::stdout().lock()),
    };
    Ok(BufWriter::new(sink))
}
