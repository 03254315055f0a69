use vardump::mach::{Options, HEADER_ADDRESS};

/// Memory image under construction.
pub struct Memory {
    bytes: Vec<u8>,
}

impl Memory {
    pub fn new(len: usize) -> Memory {
        Memory {
            bytes: vec![0; len],
        }
    }

    /// TXTTAB, VARTAB, ARYTAB, STREND, FRETOP, FRESPC, MEMSIZ
    pub fn header(&mut self, words: [u16; 7]) -> &mut Memory {
        for (i, w) in words.iter().enumerate() {
            self.poke(HEADER_ADDRESS + 2 * i, &w.to_le_bytes());
        }
        self
    }

    pub fn poke(&mut self, at: usize, bytes: &[u8]) -> &mut Memory {
        self.bytes[at..at + bytes.len()].copy_from_slice(bytes);
        self
    }

    pub fn fill(&mut self, at: usize, len: usize, byte: u8) -> &mut Memory {
        for b in &mut self.bytes[at..at + len] {
            *b = byte;
        }
        self
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

/// Pack a value the way the interpreter does: biased exponent, then the
/// mantissa low byte first with the sign in bit 7 of the top byte.
pub fn encode_float(value: f64) -> [u8; 5] {
    if value == 0.0 {
        return [0; 5];
    }
    let mut exp = value.abs().log2().floor() as i32 + 1;
    let mut m = value.abs() / 2f64.powi(exp);
    while m >= 1.0 {
        m /= 2.0;
        exp += 1;
    }
    while m < 0.5 {
        m *= 2.0;
        exp -= 1;
    }
    let bits = (m * 2f64.powi(32)) as u64;
    let sign = if value < 0.0 { 0x80 } else { 0x00 };
    [
        (exp + 128) as u8,
        bits as u8,
        (bits >> 8) as u8,
        (bits >> 16) as u8,
        ((bits >> 24) as u8 & 0x7F) | sign,
    ]
}

/// Report lines for one image, as the terminal prints them.
pub fn report(bytes: Vec<u8>, options: Options) -> (Vec<String>, Option<vardump::Error>) {
    let mut out = vec![];
    let result = vardump::term::analyse(&mut out, bytes, options);
    let text = String::from_utf8(out).unwrap();
    (text.lines().map(|s| s.to_string()).collect(), result.err())
}
