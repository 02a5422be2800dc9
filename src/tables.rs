use crate::error::GaloisError;
use crate::params::{EXP_TABLE_SIZE, FIELD_SIZE, MULTIPLICATIVE_ORDER};
use std::ops;

// Mapping from members of the field to their integer logarithms, base x (the element 2). Every
// nonzero element has exactly one logarithm in 0..=254. Zero has no logarithm; its slot in `logs`
// holds a meaningless 0.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct LogTable {
    logs: [u8; FIELD_SIZE],
}

impl LogTable {
    // Returns the logarithm of an element, or None for zero.
    pub const fn log(self: &Self, element: u8) -> Option<u8> {
        if element == 0 {
            return None;
        }
        return Some(self.logs[element as usize]);
    }

    // Logarithm of a nonzero element widened for use as an exponent table index. The caller is
    // responsible for ruling out zero.
    #[inline(always)]
    pub(crate) const fn index(self: &Self, element: u8) -> usize {
        return self.logs[element as usize] as usize;
    }
}

// Inverse of the logarithm table. Maps integer logarithms to members of the field. The 255 powers
// of the generator are written twice, so `exps[l] == exps[l + 255]` for every l in 0..=254.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ExpTable {
    exps: [u8; EXP_TABLE_SIZE],
}

impl ExpTable {
    #[inline(always)]
    pub const fn get(self: &Self, log: usize) -> u8 {
        return self.exps[log];
    }

    pub fn as_slice(self: &Self) -> &[u8] {
        return &self.exps[..];
    }
}

impl ops::Index<usize> for ExpTable {
    type Output = u8;

    fn index(&self, log: usize) -> &u8 {
        return &self.exps[log];
    }
}

// Generates a logarithm table given a candidate polynomial (the low 8 bits of a degree 8
// polynomial over GF(2)).
//
// Starting from 1 we repeatedly multiply by x: shift left and, if the x^8 bit is set, drop it and
// reduce by XORing in the polynomial. If x generates the multiplicative group the walk visits all
// 255 nonzero elements before returning to 1. Otherwise it hits an element a second time, which is
// reported as a DuplicateLogarithm.
pub const fn generate_log_table(polynomial: u8) -> Result<LogTable, GaloisError> {
    let mut seen = [false; FIELD_SIZE];
    let mut logs = [0u8; FIELD_SIZE];
    let mut b: usize = 1;
    let mut log: usize = 0;
    while log < MULTIPLICATIVE_ORDER {
        if seen[b] {
            return Err(GaloisError::DuplicateLogarithm {
                polynomial: polynomial,
                element: b as u8,
                log: log as u8,
            });
        }
        seen[b] = true;
        logs[b] = log as u8;
        b <<= 1;
        if b >= FIELD_SIZE {
            b = (b - FIELD_SIZE) ^ polynomial as usize;
        }
        log += 1;
    }
    return Ok(LogTable { logs: logs });
}

// Generates the exponent table from a complete logarithm table.
pub const fn generate_exp_table(log_table: &LogTable) -> ExpTable {
    let mut exps = [0u8; EXP_TABLE_SIZE];
    let mut i: usize = 1;
    while i < FIELD_SIZE {
        let log = log_table.logs[i] as usize;
        exps[log] = i as u8;
        exps[log + MULTIPLICATIVE_ORDER] = i as u8;
        i += 1;
    }
    return ExpTable { exps: exps };
}
