use crate::mach::{Dump, Options};
use crate::Error;
use ansi_term::Style;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod monitor;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub files: Vec<PathBuf>,
    pub connect: Option<String>,
    pub options: Options,
}

/// Run every requested dump. Returns false if any of them failed.
pub fn main(config: Config) -> bool {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut files = vec![];
    let mut ok = true;
    if let Some(address) = &config.connect {
        match monitor::snapshot(address) {
            Ok(path) => files.push(path),
            Err(error) => {
                report(&mut out, &error);
                ok = false;
            }
        }
    }
    files.extend(config.files.iter().cloned());
    for path in files {
        if let Err(error) = analyse_file(&mut out, &path, options_for(&path, config.options)) {
            report(&mut out, &error);
            ok = false;
        }
    }
    ok
}

fn report<W: Write>(out: &mut W, error: &Error) {
    log::debug!("{:?}", error);
    if let Err(e) = writeln!(out, "{}", Style::new().bold().paint(error.to_string())) {
        eprintln!("{}", e);
    }
}

/// PRG files carry a load address in front of the memory.
pub fn options_for(path: &Path, options: Options) -> Options {
    let prg = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("prg"))
        .unwrap_or(false);
    Options {
        load_address: options.load_address || prg,
        ..options
    }
}

pub fn analyse_file<W: Write>(out: &mut W, path: &Path, options: Options) -> Result<(), Error> {
    writeln!(out, "Reading from '{}'.", path.display())?;
    let bytes = load(path)?;
    analyse(out, bytes, options)
}

pub fn analyse<W: Write>(out: &mut W, bytes: Vec<u8>, options: Options) -> Result<(), Error> {
    let dump = Dump::new(bytes, options);
    let mut written = Ok(());
    dump.analyse(|event| {
        if written.is_ok() {
            written = writeln!(out, "{}", event);
        }
    })?;
    Ok(written?)
}

fn load(path: &Path) -> Result<Vec<u8>, Error> {
    std::fs::read(path).map_err(|error| Error::from(error).in_file(path))
}
