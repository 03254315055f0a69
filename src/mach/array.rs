use super::val::{decode_float, scientific};
use super::{Address, Heap, Image, Kind, Name, Str};
use crate::error;
use crate::Error;

type Result<T> = std::result::Result<T, Error>;

const DESCRIPTOR: usize = 3;

/// ## Array variable record
///
/// Name, little-endian total length, dimension count, then one big-endian
/// element count per dimension from the last declared to the first.
/// String arrays follow with one 3-byte descriptor per element.

#[derive(Debug, Clone, PartialEq)]
pub struct Array {
    pub address: Address,
    pub name: Name,
    pub kind: Kind,
    pub total_bytes: u16,
    /// Element counts in declared order. Each is the DIM bound plus one.
    pub dimensions: Vec<u16>,
    pub elements: Elements,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Elements {
    Unread,
    Integers(Vec<i16>),
    Floats(Vec<f64>),
    Strings(Vec<Str>),
}

impl Array {
    pub fn header_bytes(&self) -> usize {
        5 + 2 * self.dimensions.len()
    }

    pub fn next_address(&self) -> Address {
        self.address + usize::from(self.total_bytes)
    }

    fn payload(&self) -> (Address, usize) {
        let start = self.address + self.header_bytes();
        let len = usize::from(self.total_bytes).saturating_sub(self.header_bytes());
        (start, len)
    }

    /// Decode the values of an integer or float array.
    pub fn read_numeric(&mut self, image: &Image) -> Result<()> {
        let (start, len) = self.payload();
        self.elements = match self.kind {
            Kind::Integer => Elements::Integers(
                (0..len / 2)
                    .map(|i| image.i16_be(start + 2 * i))
                    .collect::<Result<Vec<_>>>()?,
            ),
            Kind::Float => Elements::Floats(
                (0..len / 5)
                    .map(|i| -> Result<f64> {
                        let b = image.slice(start + 5 * i, 5)?;
                        Ok(decode_float([b[0], b[1], b[2], b[3], b[4]]))
                    })
                    .collect::<Result<Vec<_>>>()?,
            ),
            _ => return Ok(()),
        };
        Ok(())
    }
}

/// Decode the array record at `at`. String elements on the string stack are
/// claimed in `heap`.
pub fn decode_array(image: &Image, at: Address, heap: &mut Heap) -> Result<Array> {
    let (name, kind) = Name::read(image, at)?;
    if kind == Kind::Function {
        return Err(error!(UnsupportedRecord, at; "FUNCTION TYPE IN ARRAY TABLE"));
    }
    let total_bytes = image.u16_le(at + 2)?;
    let dims = usize::from(image.byte(at + 4)?);
    let mut dimensions = (0..dims)
        .map(|i| image.u16_be(at + 5 + 2 * i))
        .collect::<Result<Vec<_>>>()?;
    dimensions.reverse();
    let mut array = Array {
        address: at,
        name,
        kind,
        total_bytes,
        dimensions,
        elements: Elements::Unread,
    };
    if kind == Kind::String {
        let (start, len) = array.payload();
        if len % DESCRIPTOR != 0 {
            log::warn!(
                "string array {}$ at ${:04X} has {} stray bytes",
                name,
                at,
                len % DESCRIPTOR
            );
        }
        let mut strings = Vec::with_capacity(len / DESCRIPTOR);
        for i in 0..len / DESCRIPTOR {
            let mut s = Str::read(image, start + DESCRIPTOR * i)?;
            heap.claim(&mut s);
            strings.push(s);
        }
        array.elements = Elements::Strings(strings);
    }
    log::debug!("array {}{} at ${:04X}, {} bytes", name, kind.suffix(), at, total_bytes);
    Ok(array)
}

/// ## Array table walker
///
/// Yields each record with the address of the one after it. Stops at the end
/// of the table or after the first error.

pub struct ArrayTable<'a> {
    image: &'a Image,
    heap: &'a mut Heap,
    cursor: Address,
    end: Address,
}

impl<'a> ArrayTable<'a> {
    pub fn new(image: &'a Image, heap: &'a mut Heap, start: Address, end: Address) -> Self {
        ArrayTable {
            image,
            heap,
            cursor: start,
            end,
        }
    }
}

impl<'a> Iterator for ArrayTable<'a> {
    type Item = Result<(Array, Address)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.end {
            return None;
        }
        let at = self.cursor;
        match decode_array(self.image, at, self.heap) {
            Ok(array) if array.total_bytes == 0 => {
                self.cursor = self.end;
                Some(Err(error!(InconsistentLayout, at; "ARRAY RECORD WITH ZERO LENGTH")))
            }
            Ok(array) => {
                self.cursor = array.next_address();
                Some(Ok((array, self.cursor)))
            }
            Err(e) => {
                self.cursor = self.end;
                Some(Err(e))
            }
        }
    }
}

impl std::fmt::Display for Array {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let dims: Vec<String> = self
            .dimensions
            .iter()
            .map(|n| (i32::from(*n) - 1).to_string())
            .collect();
        write!(
            f,
            "{}{} ({}) : {} bytes at ${:04X}",
            self.name,
            self.kind.suffix(),
            dims.join(","),
            self.total_bytes,
            self.address
        )?;
        let values: Vec<String> = match &self.elements {
            Elements::Unread => return Ok(()),
            Elements::Integers(v) => v.iter().map(|n| n.to_string()).collect(),
            Elements::Floats(v) => v.iter().map(|n| scientific(*n)).collect(),
            Elements::Strings(v) => v.iter().map(|s| s.to_string()).collect(),
        };
        write!(f, " = [{}]", values.join(", "))
    }
}
