use crate::error::{GaloisError, Result};
use crate::finite_field::Field256;
use crate::params::{GENERATING_POLYNOMIAL, MULTIPLICATIVE_ORDER};
use crate::tables::{generate_exp_table, generate_log_table, ExpTable, LogTable};

// Field implementation backed by logarithm and exponent tables, so multiplication and division
// are a couple of lookups. Multiplication sits in the inner loop of erasure coding; the exponent
// table holds every power twice so the sum of two logarithms never needs reducing `mod` 255.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ExpLogField {
    polynomial: u8,
    log: LogTable,
    exp: ExpTable,
}

// The field generated by GENERATING_POLYNOMIAL. Built at compile time and shared read-only.
pub static FIELD: ExpLogField = match ExpLogField::new(GENERATING_POLYNOMIAL) {
    Ok(field) => field,
    Err(_) => panic!("GENERATING_POLYNOMIAL does not generate GF(2^8)"),
};

impl ExpLogField {
    // Builds the tables for `polynomial`. Fails with DuplicateLogarithm unless x generates the
    // whole multiplicative group under that polynomial.
    pub const fn new(polynomial: u8) -> Result<ExpLogField> {
        match generate_log_table(polynomial) {
            Ok(log) => Ok(ExpLogField {
                polynomial: polynomial,
                exp: generate_exp_table(&log),
                log: log,
            }),
            Err(e) => Err(e),
        }
    }

    pub const fn polynomial(self: &Self) -> u8 {
        return self.polynomial;
    }

    pub const fn log_table(self: &Self) -> &LogTable {
        return &self.log;
    }

    pub const fn exp_table(self: &Self) -> &ExpTable {
        return &self.exp;
    }
}

impl Field256 for ExpLogField {
    #[inline]
    fn mul(&self, x: u8, y: u8) -> u8 {
        if x == 0 || y == 0 {
            return 0;
        }
        return self.exp.get(self.log.index(x) + self.log.index(y));
    }

    #[inline]
    fn div(&self, x: u8, y: u8) -> Result<u8> {
        if y == 0 {
            return Err(GaloisError::InvalidArgument("divisor is zero"));
        }
        if x == 0 {
            return Ok(0);
        }
        let mut log = self.log.index(x) as isize - self.log.index(y) as isize;
        if log < 0 {
            log += MULTIPLICATIVE_ORDER as isize;
        }
        return Ok(self.exp.get(log as usize));
    }

    fn exp(&self, x: u8, n: u32) -> u8 {
        if n == 0 {
            return 1;
        }
        if x == 0 {
            return 0;
        }
        let log = (self.log.index(x) as u64 * n as u64) % MULTIPLICATIVE_ORDER as u64;
        return self.exp.get(log as usize);
    }

    fn inv(&self, x: u8) -> Result<u8> {
        if x == 0 {
            return Err(GaloisError::InvalidArgument("zero has no multiplicative inverse"));
        }
        // log(1) == 0 lands on the repeated half of the table.
        return Ok(self.exp.get(MULTIPLICATIVE_ORDER - self.log.index(x)));
    }
}

// Adds two elements of the field. It's just XOR.
#[inline]
pub fn add(a: u8, b: u8) -> u8 {
    return ExpLogField::add(a, b);
}

// Inverse of addition, which is addition again.
#[inline]
pub fn subtract(a: u8, b: u8) -> u8 {
    return ExpLogField::sub(a, b);
}

#[inline]
pub fn multiply(a: u8, b: u8) -> u8 {
    return FIELD.mul(a, b);
}

// Inverse of multiplication. Fails with InvalidArgument when `b` is zero, whatever `a` is.
#[inline]
pub fn divide(a: u8, b: u8) -> Result<u8> {
    return FIELD.div(a, b);
}

// Computes a^n, the same as multiplying a by itself n times. exp(a, 0) == 1 for every a.
pub fn exp(a: u8, n: u32) -> u8 {
    return FIELD.exp(a, n);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finite_field::DirectField;
    use proptest::prelude::*;

    #[test]
    fn known_values() {
        assert_eq!(multiply(3, 7), 9);
        assert_eq!(divide(9, 7), Ok(3));
        assert_eq!(add(5, 5), 0);
        assert_eq!(exp(2, 8), 29);
        assert_eq!(
            divide(1, 0),
            Err(GaloisError::InvalidArgument("divisor is zero"))
        );
    }

    #[test]
    fn zero_additive_identity() {
        for i in 0..=255 {
            assert_eq!(i, add(i, 0));
            assert_eq!(i, add(0, i));
            assert_eq!(i, subtract(i, 0));
        }
    }

    #[test]
    fn add_involution() {
        for i in 0..=255 {
            for j in 0..=255 {
                assert_eq!(add(add(i, j), j), i);
                assert_eq!(add(i, j), subtract(i, j));
            }
        }
    }

    #[test]
    fn one_multiplicative_identity() {
        for i in 0..=255 {
            assert_eq!(i, multiply(i, 1));
            assert_eq!(i, multiply(1, i));
            assert_eq!(0, multiply(i, 0));
            assert_eq!(0, multiply(0, i));
        }
    }

    #[test]
    fn mul_div_inverse() {
        for i in 1..=255 {
            for j in 1..=255 {
                let z = multiply(i, j);
                assert_eq!(divide(z, j), Ok(i));
                assert_eq!(divide(z, i), Ok(j));
            }
        }
    }

    #[test]
    fn div_by_zero() {
        for i in 0..=255 {
            assert!(divide(i, 0).is_err());
        }
        for i in 1..=255 {
            assert_eq!(divide(0, i), Ok(0));
        }
    }

    #[test]
    fn matches_direct_field() {
        let direct = DirectField::default();
        for i in 0..=255 {
            for j in 0..=255 {
                assert_eq!(FIELD.mul(i, j), direct.mul(i, j));
            }
            assert_eq!(FIELD.inv(i), direct.inv(i));
        }
    }

    #[test]
    fn exp_is_repeated_mul() {
        for i in 0..=255 {
            let mut expected = 1;
            for n in 0..600 {
                assert_eq!(exp(i, n), expected, "{}^{}", i, n);
                expected = multiply(expected, i);
            }
        }
    }

    #[test]
    fn exp_edge_cases() {
        assert_eq!(exp(0, 0), 1);
        assert_eq!(exp(0, 1), 0);
        for i in 1..=255 {
            assert_eq!(exp(i, 255), 1);
            assert_eq!(exp(i, 256), i);
            assert_eq!(exp(i, u32::MAX), FIELD.exp(i, u32::MAX % 255));
        }
    }

    #[test]
    fn alternate_polynomial() {
        let field = ExpLogField::new(45).unwrap();
        let direct = DirectField::new(45);
        assert_eq!(field.polynomial(), 45);
        for i in 0..=255 {
            for j in 1..=255 {
                assert_eq!(field.mul(i, j), direct.mul(i, j));
                assert_eq!(field.div(i, j), direct.div(i, j));
            }
        }
    }

    #[test]
    fn bad_polynomial() {
        assert!(ExpLogField::new(0x1B).is_err());
    }

    proptest! {
        #[test]
        fn mul_associative(a in any::<u8>(), b in any::<u8>(), c in any::<u8>()) {
            prop_assert_eq!(multiply(multiply(a, b), c), multiply(a, multiply(b, c)));
        }

        #[test]
        fn mul_distributes_over_add(a in any::<u8>(), b in any::<u8>(), c in any::<u8>()) {
            prop_assert_eq!(multiply(a, add(b, c)), add(multiply(a, b), multiply(a, c)));
        }

        #[test]
        fn exp_adds_exponents(a in 1..=255u8, m in 0..10_000u32, n in 0..10_000u32) {
            prop_assert_eq!(exp(a, m + n), multiply(exp(a, m), exp(a, n)));
        }
    }
}
