use super::val::{decode_float, scientific};
use super::{Address, Function, Image, Kind, Name, Str, Val};
use crate::Error;

type Result<T> = std::result::Result<T, Error>;

/// Every scalar entry occupies seven bytes, two of them the name.
pub const SLOT: usize = 7;

/// ## Scalar variable record

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub address: Address,
    pub name: Name,
    pub value: Val,
}

/// Decode the scalar slot at `at`. Only a string value reads outside the slot.
pub fn decode_scalar(image: &Image, at: Address) -> Result<Variable> {
    let slot = image.slice(at, SLOT)?;
    let name = Name::from_bytes(slot[0], slot[1]);
    let value = match Kind::from_name_bytes(slot[0], slot[1]) {
        Kind::Integer => Val::Integer(i16::from_be_bytes([slot[2], slot[3]])),
        Kind::Float => Val::Float(decode_float([slot[2], slot[3], slot[4], slot[5], slot[6]])),
        Kind::String => Val::String(Str::read(image, at + 2)?),
        Kind::Function => Val::Function(Function {
            definition: u16::from_le_bytes([slot[2], slot[3]]),
            variable: u16::from_le_bytes([slot[4], slot[5]]),
            unknown: slot[6],
        }),
    };
    log::debug!("scalar {}{} at ${:04X}", name, value.kind().suffix(), at);
    Ok(Variable {
        address: at,
        name,
        value,
    })
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.value {
            Val::Integer(n) => write!(f, "{}% = {}", self.name, n),
            Val::Float(n) => write!(f, "{} = {}", self.name, scientific(*n)),
            Val::String(s) => write!(
                f,
                "{}$ [${:04X}, {}] = {}",
                self.name,
                s.address,
                s.len(),
                s
            ),
            Val::Function(func) => write!(
                f,
                "DEF FN {} @ ${:04X} = DEF@${:04X} VAR@${:04X} ${:02X}",
                self.name, self.address, func.definition, func.variable, func.unknown
            ),
        }
    }
}
