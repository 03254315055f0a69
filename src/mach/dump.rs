use super::val::ascii_lossy;
use super::var::SLOT;
use super::{decode_scalar, Address, Array, ArrayTable, Header, Heap, Image, Val, Variable};
use crate::error;
use crate::Error;
use std::ops::Range;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Input starts with a 2-byte load address (PRG container).
    pub load_address: bool,
    /// Refuse a header whose region pointers are out of order.
    pub strict: bool,
    /// Also decode integer and float array elements.
    pub elements: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Header(Header),
    Scalar(Variable),
    Array(Array),
    Garbage(Garbage),
}

/// Unreferenced bytes in the string heap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Garbage {
    pub range: Range<Address>,
    pub text: String,
}

/// ## Dump session
///
/// Walks one memory image: header, scalar table, array table, then the
/// string heap garbage left over from both.

#[derive(Debug)]
pub struct Dump {
    image: Image,
    options: Options,
}

impl Dump {
    pub fn new(bytes: Vec<u8>, options: Options) -> Dump {
        Dump {
            image: Image::new(bytes, options.load_address),
            options,
        }
    }

    /// Emit events in memory order. The first decode error ends the session;
    /// everything emitted before it stands.
    pub fn analyse<F: FnMut(Event)>(&self, mut emit: F) -> Result<()> {
        let image = &self.image;
        let header = image.header()?;
        if self.options.strict {
            header.validate()?;
        } else if !header.is_consistent() {
            log::warn!("region pointers out of order: {:?}", header);
        }
        log::info!(
            "analysing {} bytes, variables ${:04X}-${:04X}, arrays ${:04X}-${:04X}",
            image.len(),
            header.variables_start,
            header.arrays_start,
            header.arrays_start,
            header.arrays_end
        );
        emit(Event::Header(header));

        let mut heap = Heap::new(image.len(), header.string_heap_top);
        for at in (header.variables_start..header.arrays_start).step_by(SLOT) {
            let mut var = decode_scalar(image, at)?;
            if let Val::String(s) = &mut var.value {
                heap.claim(s);
            }
            emit(Event::Scalar(var));
        }

        let arrays = ArrayTable::new(image, &mut heap, header.arrays_start, header.arrays_end);
        for item in arrays {
            let (mut array, _) = item?;
            if self.options.elements {
                array.read_numeric(image)?;
            }
            emit(Event::Array(array));
        }

        if header.memory_size > image.len() {
            return Err(error!(TruncatedImage, image.len(); "STRING HEAP RUNS PAST END OF IMAGE"));
        }
        for range in heap.garbage(header.string_heap_top, header.memory_size) {
            let text = ascii_lossy(image.slice(range.start, range.len())?);
            emit(Event::Garbage(Garbage { range, text }));
        }
        Ok(())
    }

    pub fn events(&self) -> Result<Vec<Event>> {
        let mut events = vec![];
        self.analyse(|event| events.push(event))?;
        Ok(events)
    }
}

impl std::fmt::Display for Garbage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "String Heap Garbage [${:04X}:${:04X}]: \"{}\"",
            self.range.start, self.range.end, self.text
        )
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::Header(h) => write!(f, "{}", h),
            Event::Scalar(v) => write!(f, "{}", v),
            Event::Array(a) => write!(f, "{}", a),
            Event::Garbage(g) => write!(f, "{}", g),
        }
    }
}
