use clap::Parser;
use std::path::PathBuf;
use vardump::mach::Options;
use vardump::term::{self, Config};

/// Dump all variables of a Commodore BASIC program from a C64 memory dump.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Connect to a remote monitor (host:port) and dump its memory
    #[arg(short, long)]
    connect: Option<String>,

    /// Input files start with a 2-byte load address (implied for .prg)
    #[arg(long)]
    prg: bool,

    /// Refuse memory whose BASIC pointers are out of order
    #[arg(long)]
    strict: bool,

    /// Also list the values of integer and float arrays
    #[arg(short, long)]
    elements: bool,

    /// Dump file names
    files: Vec<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let config = Config {
        files: args.files,
        connect: args.connect,
        options: Options {
            load_address: args.prg,
            strict: args.strict,
            elements: args.elements,
        },
    };
    if !term::main(config) {
        std::process::exit(1);
    }
}
