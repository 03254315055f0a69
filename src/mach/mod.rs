/*!
## Rust Machine Module

This Rust module models the memory of a Commodore BASIC machine and
decodes the variables held in it.

*/

pub type Address = usize;

mod array;
mod dump;
mod heap;
mod image;
mod val;
mod var;

pub use array::decode_array;
pub use array::Array;
pub use array::ArrayTable;
pub use array::Elements;
pub use dump::Dump;
pub use dump::Event;
pub use dump::Garbage;
pub use dump::Options;
pub use heap::GarbageRanges;
pub use heap::Heap;
pub use image::Header;
pub use image::Image;
pub use image::HEADER_ADDRESS;
pub use val::ascii_lossy;
pub use val::decode_float;
pub use val::scientific;
pub use val::Function;
pub use val::Kind;
pub use val::Name;
pub use val::Str;
pub use val::Val;
pub use var::decode_scalar;
pub use var::Variable;
pub use var::SLOT;
