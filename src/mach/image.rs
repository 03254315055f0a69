use super::Address;
use crate::error;
use crate::Error;

type Result<T> = std::result::Result<T, Error>;

/// Absolute address of the BASIC pointer block in zero page.
pub const HEADER_ADDRESS: Address = 0x2B;

const HEADER_WORDS: usize = 7;

/// ## Memory image
///
/// Machine memory with offset 0 at absolute address 0. Every read is
/// bounds-checked and fails with `TruncatedImage` at the address asked for.

#[derive(Debug, Clone, Default)]
pub struct Image {
    bytes: Vec<u8>,
}

impl Image {
    pub fn new(mut bytes: Vec<u8>, load_address: bool) -> Image {
        if load_address {
            let skip = bytes.len().min(2);
            bytes.drain(..skip);
        }
        Image { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn byte(&self, at: Address) -> Result<u8> {
        match self.bytes.get(at) {
            Some(b) => Ok(*b),
            None => Err(error!(TruncatedImage, at)),
        }
    }

    pub fn slice(&self, at: Address, len: usize) -> Result<&[u8]> {
        match at.checked_add(len) {
            Some(end) if end <= self.bytes.len() => Ok(&self.bytes[at..end]),
            _ => Err(error!(TruncatedImage, at)),
        }
    }

    pub fn u16_le(&self, at: Address) -> Result<u16> {
        let b = self.slice(at, 2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    pub fn u16_be(&self, at: Address) -> Result<u16> {
        let b = self.slice(at, 2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    pub fn i16_be(&self, at: Address) -> Result<i16> {
        let b = self.slice(at, 2)?;
        Ok(i16::from_be_bytes([b[0], b[1]]))
    }

    pub fn header(&self) -> Result<Header> {
        if self.len() < HEADER_ADDRESS + 2 * HEADER_WORDS {
            return Err(error!(TruncatedImage, HEADER_ADDRESS; "NO BASIC POINTERS"));
        }
        let word = |n: usize| self.u16_le(HEADER_ADDRESS + 2 * n).map(Address::from);
        Ok(Header {
            program_start: word(0)?,
            variables_start: word(1)?,
            arrays_start: word(2)?,
            arrays_end: word(3)?,
            string_heap_top: word(4)?,
            string_alloc: word(5)?,
            memory_size: word(6)?,
        })
    }
}

/// ## Layout header
///
/// The interpreter's region pointers, TXTTAB through MEMSIZ.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub program_start: Address,
    pub variables_start: Address,
    pub arrays_start: Address,
    pub arrays_end: Address,
    pub string_heap_top: Address,
    pub string_alloc: Address,
    pub memory_size: Address,
}

impl Header {
    pub fn is_consistent(&self) -> bool {
        self.variables_start <= self.arrays_start
            && self.arrays_start <= self.arrays_end
            && self.arrays_end <= self.string_heap_top
            && self.string_heap_top <= self.memory_size
    }

    pub fn validate(&self) -> Result<()> {
        if self.is_consistent() {
            Ok(())
        } else {
            Err(error!(InconsistentLayout, HEADER_ADDRESS; "REGION POINTERS OUT OF ORDER"))
        }
    }
}

impl std::fmt::Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Beginning of BASIC program is at ${:04X}.", self.program_start)?;
        writeln!(f, "Variables begin at ${:04X}.", self.variables_start)?;
        writeln!(f, "Array variables begin at ${:04X}.", self.arrays_start)?;
        writeln!(f, "Array variables end at ${:04X}.", self.arrays_end)?;
        writeln!(f, "Top of string stack is ${:04X}.", self.string_heap_top)?;
        write!(f, "End of BASIC memory is ${:04X}.", self.memory_size)
    }
}
