use crate::finite_field::Field256;
use crate::finite_field_log::FIELD;
use crate::params::FIELD_SIZE;
use itertools::iproduct;
use log::debug;
use once_cell::sync::Lazy;
use std::ops;

// A multiplication table for the field, as an alternative to calling multiply(). The product of a
// and b is `table[a][b]`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct MultiplicationTable {
    rows: Box<[[u8; FIELD_SIZE]]>,
}

impl MultiplicationTable {
    #[inline]
    pub fn get(self: &Self, a: u8, b: u8) -> u8 {
        return self.rows[a as usize][b as usize];
    }

    // Every product with `a`, indexed by the other factor.
    pub fn row(self: &Self, a: u8) -> &[u8; FIELD_SIZE] {
        return &self.rows[a as usize];
    }
}

impl ops::Index<usize> for MultiplicationTable {
    type Output = [u8; FIELD_SIZE];

    fn index(&self, a: usize) -> &[u8; FIELD_SIZE] {
        return &self.rows[a];
    }
}

// Built from FIELD the first time it is touched.
pub static MULTIPLICATION_TABLE: Lazy<MultiplicationTable> =
    Lazy::new(|| generate_multiplication_table(&FIELD));

pub fn generate_multiplication_table<F: Field256>(field: &F) -> MultiplicationTable {
    let mut rows = vec![[0u8; FIELD_SIZE]; FIELD_SIZE].into_boxed_slice();
    for (a, b) in iproduct!(0..FIELD_SIZE, 0..FIELD_SIZE) {
        rows[a][b] = field.mul(a as u8, b as u8);
    }
    debug!("built {}x{} multiplication table", FIELD_SIZE, FIELD_SIZE);
    return MultiplicationTable { rows: rows };
}
