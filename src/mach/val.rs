use super::{Address, Image};
use crate::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable type tag
///
/// Bit 7 of the first name byte is the `fun` flag and bit 7 of the second
/// name byte is the `str` flag. The pair picks one of four record shapes.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Integer,
    Function,
    String,
    Float,
}

impl Kind {
    pub fn from_flags(fun: bool, str: bool) -> Kind {
        match (fun, str) {
            (true, true) => Kind::Integer,
            (true, false) => Kind::Function,
            (false, true) => Kind::String,
            (false, false) => Kind::Float,
        }
    }

    pub fn from_name_bytes(first: u8, second: u8) -> Kind {
        Kind::from_flags(first & 0x80 != 0, second & 0x80 != 0)
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            Kind::Integer => "%",
            Kind::String => "$",
            Kind::Float | Kind::Function => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Name {
    first: char,
    second: Option<char>,
}

impl Name {
    pub fn from_bytes(first: u8, second: u8) -> Name {
        let second = second & 0x7F;
        Name {
            first: char::from(first & 0x7F),
            second: if second == 0 {
                None
            } else {
                Some(char::from(second))
            },
        }
    }

    pub fn read(image: &Image, at: Address) -> Result<(Name, Kind)> {
        let b = image.slice(at, 2)?;
        Ok((Name::from_bytes(b[0], b[1]), Kind::from_name_bytes(b[0], b[1])))
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.second {
            Some(second) => write!(f, "{}{}", self.first, second),
            None => write!(f, "{}", self.first),
        }
    }
}

/// A string descriptor and the bytes it points at.
#[derive(Debug, Clone, PartialEq)]
pub struct Str {
    pub address: Address,
    pub bytes: Vec<u8>,
    pub stack: bool,
}

impl Str {
    /// Read a 3-byte descriptor: length, then a little-endian pointer.
    pub fn read(image: &Image, at: Address) -> Result<Str> {
        let len = image.byte(at)? as usize;
        let address = Address::from(image.u16_le(at + 1)?);
        let bytes = image.slice(address, len)?.to_vec();
        Ok(Str {
            address,
            bytes,
            stack: false,
        })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn end(&self) -> Address {
        self.address + self.bytes.len()
    }

    pub fn text(&self) -> String {
        ascii_lossy(&self.bytes)
    }
}

impl std::fmt::Display for Str {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "\"{}\"", self.text())?;
        if self.stack {
            write!(f, "*")?;
        }
        Ok(())
    }
}

/// DEF FN record. The last byte has no known meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Function {
    pub definition: u16,
    pub variable: u16,
    pub unknown: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Integer(i16),
    Float(f64),
    String(Str),
    Function(Function),
}

impl Val {
    pub fn kind(&self) -> Kind {
        match self {
            Val::Integer(_) => Kind::Integer,
            Val::Float(_) => Kind::Float,
            Val::String(_) => Kind::String,
            Val::Function(_) => Kind::Function,
        }
    }
}

/// Decode the packed 5-byte float: exponent biased by 128, then four
/// mantissa bytes with the sign in bit 7 of the last one.
pub fn decode_float(b: [u8; 5]) -> f64 {
    let exponent = b[0];
    if exponent == 0 {
        return 0.0;
    }
    let mut mantissa = f64::from(b[1]) * 2f64.powi(-32)
        + f64::from(b[2]) * 2f64.powi(-24)
        + f64::from(b[3]) * 2f64.powi(-16)
        + f64::from(b[4] | 0x80) * 2f64.powi(-8);
    if b[4] & 0x80 != 0 {
        mantissa = -mantissa;
    }
    mantissa * 2f64.powi(i32::from(exponent) - 128)
}

/// `1.234500E+03` style, six fraction digits and a signed two digit exponent.
pub fn scientific(value: f64) -> String {
    let s = format!("{:.6E}", value);
    match s.split_once('E') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(exp) => format!(
                "{}E{}{:02}",
                mantissa,
                if exp < 0 { '-' } else { '+' },
                exp.abs()
            ),
            Err(_) => s,
        },
        None => s,
    }
}

pub fn ascii_lossy(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if b < 0x80 { char::from(b) } else { '\u{FFFD}' })
        .collect()
}
