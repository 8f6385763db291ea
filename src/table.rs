use std::fmt;
use std::ops::Range;

use crate::curves::{Curve, GammaCurve};

/// Number of entries in the table, one per 8-bit input value.
pub const TABLE_SIZE: usize = 256;

/// Largest output value (12-bit).
pub const SCALE: u16 = 4095;

const INPUT_MAX: f64 = (TABLE_SIZE - 1) as f64;

/// Computes the linear-to-gamma lookup table.
///
/// Entry `i` is `round(scale * curve(i / 255))`. Nothing is cached: each
/// call to [`TableGenerator::iter`] walks the inputs again from zero.
pub struct TableGenerator {
    curve: Box<dyn Curve>,
    scale: u16,
}

impl TableGenerator {
    pub fn new() -> Self {
        Self::with_curve(Box::new(GammaCurve::default()), SCALE)
    }

    pub(crate) fn with_curve(curve: Box<dyn Curve>, scale: u16) -> Self {
        Self { curve, scale }
    }

    pub fn scale(&self) -> u16 {
        self.scale
    }

    pub fn curve_name(&self) -> &'static str {
        self.curve.name()
    }

    pub fn value(&self, index: u8) -> u16 {
        let x = f64::from(index) / INPUT_MAX;
        (f64::from(self.scale) * self.curve.apply(x)).round() as u16
    }

    pub fn iter(&self) -> Values<'_> {
        Values {
            generator: self,
            indices: 0..TABLE_SIZE,
        }
    }

    pub fn to_array(&self) -> [u16; TABLE_SIZE] {
        let mut table = [0u16; TABLE_SIZE];
        for (slot, value) in table.iter_mut().zip(self.iter()) {
            *slot = value;
        }
        table
    }
}

impl Default for TableGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TableGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableGenerator")
            .field("curve", &self.curve.name())
            .field("scale", &self.scale)
            .finish()
    }
}

impl<'a> IntoIterator for &'a TableGenerator {
    type Item = u16;
    type IntoIter = Values<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator over the table entries, in index order.
#[derive(Clone)]
pub struct Values<'a> {
    generator: &'a TableGenerator,
    indices: Range<usize>,
}

impl Iterator for Values<'_> {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        // TABLE_SIZE is 256, so every index fits in a u8.
        self.indices.next().map(|i| self.generator.value(i as u8))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl DoubleEndedIterator for Values<'_> {
    fn next_back(&mut self) -> Option<u16> {
        self.indices.next_back().map(|i| self.generator.value(i as u8))
    }
}

impl ExactSizeIterator for Values<'_> {}

impl fmt::Debug for Values<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Values")
            .field("remaining", &self.indices)
            .finish()
    }
}
