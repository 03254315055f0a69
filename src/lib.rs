//! # BASIC Variable Dump
//!
//! Read a memory snapshot of a Commodore 64 and list every variable the
//! BASIC interpreter is holding: scalars, arrays, `DEF FN` functions, and
//! the garbage left behind on the string stack.
//!
//! Snapshots come from an emulator monitor (`bsave "c64.dump" 0 0000 FFFF`)
//! or straight from a running monitor with `--connect host:port`.
//! ```text
//! $ vardump c64.dump
//! Reading from 'c64.dump'.
//! Beginning of BASIC program is at $0801.
//! Variables begin at $0A21.
//! ...
//! I% = 42
//! A$ [$9FF6, 10] = "HELLO WORLD"*
//! ```
//!
//! Files ending in `.prg` are taken to start with a load address.

#[path = "doc/memory_layout.rs"]
#[allow(non_snake_case)]
pub mod _Memory_Layout;

mod error;
pub mod mach;
pub mod term;

pub use error::Error;
pub use error::ErrorCode;
