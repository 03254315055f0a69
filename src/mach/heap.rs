use super::{Address, Str};
use std::ops::Range;

/// ## String heap liveness map
///
/// One flag per byte of the image. Strings whose bytes start at or above the
/// top of the string stack are claimed as used, whatever is left unclaimed
/// between the stack top and the end of BASIC memory is garbage.

#[derive(Debug, Clone)]
pub struct Heap {
    used: Vec<bool>,
    top: Address,
}

impl Heap {
    pub fn new(len: usize, top: Address) -> Heap {
        Heap {
            used: vec![false; len],
            top,
        }
    }

    pub fn is_used(&self, at: Address) -> bool {
        self.used.get(at).copied().unwrap_or(false)
    }

    /// Mark `start..end` as used. Empty or out of bounds ranges are ignored.
    pub fn mark_used(&mut self, start: Address, end: Address) {
        if start >= end || end > self.used.len() {
            return;
        }
        for flag in &mut self.used[start..end] {
            *flag = true;
        }
    }

    /// Flag a string living on the string stack and mark its bytes.
    pub fn claim(&mut self, s: &mut Str) {
        if s.address >= self.top {
            s.stack = true;
            self.mark_used(s.address, s.end());
        }
    }

    pub fn garbage(&self, lower: Address, upper: Address) -> GarbageRanges<'_> {
        let upper = upper.min(self.used.len());
        GarbageRanges {
            used: &self.used,
            cursor: lower.min(upper),
            upper,
        }
    }
}

/// Maximal unused runs, produced fresh from the map on every call.
pub struct GarbageRanges<'a> {
    used: &'a [bool],
    cursor: Address,
    upper: Address,
}

impl<'a> Iterator for GarbageRanges<'a> {
    type Item = Range<Address>;

    fn next(&mut self) -> Option<Range<Address>> {
        while self.cursor < self.upper && self.used[self.cursor] {
            self.cursor += 1;
        }
        if self.cursor >= self.upper {
            return None;
        }
        let start = self.cursor;
        while self.cursor < self.upper && !self.used[self.cursor] {
            self.cursor += 1;
        }
        Some(start..self.cursor)
    }
}
