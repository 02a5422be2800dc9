use crate::error::{GaloisError, Result};
use crate::params::{GENERATING_POLYNOMIAL, MULTIPLICATIVE_ORDER};

// A finite field with 256 elements. Also known as a Galois extension field, GF(2^8). As a field,
// it supports addition, additive inverse (and thus subtraction), additive identity, multiplication,
// multiplicative identity, and multiplicative inverse for non-zero elements (and thus division).
//
// Each element is a polynomial of degree at most 7 whose coefficients are elements of GF(2), i.e.
// either 0 or 1. Thus, we can represent each polynomial with an 8 bit integer.
//
// The only function that must be implemented is mul(), but others can be overridden for speed.
pub trait Field256 {
    // Additive identity.
    fn zero() -> u8 {
        return 0;
    }
    // Multiplicative identity.
    fn one() -> u8 {
        return 1;
    }

    // Addition and subtraction in GF(2^n) add or subtract each coefficient in GF(2), where both
    // are XOR (1 + 1 `mod` 2 == 0). So both are the bitwise-XOR of the two polynomials, and every
    // element is its own additive inverse.
    fn add(x: u8, y: u8) -> u8 {
        return x ^ y;
    }
    fn sub(x: u8, y: u8) -> u8 {
        return x ^ y;
    }
    fn neg(x: u8) -> u8 {
        return x;
    }

    fn mul(&self, x: u8, y: u8) -> u8;

    fn div(&self, x: u8, y: u8) -> Result<u8> {
        if y == 0 {
            return Err(GaloisError::InvalidArgument("divisor is zero"));
        }
        return Ok(self.mul(x, self.inv(y)?));
    }

    // Returns x ^ n. Nonzero elements satisfy x ^ 255 == 1, so only n `mod` 255 multiplications
    // are needed. x ^ 0 == 1 for every x, including zero.
    fn exp(&self, x: u8, n: u32) -> u8 {
        if n == 0 {
            return 1;
        }
        if x == 0 {
            return 0;
        }
        let mut result = 1;
        for _ in 0..(n as usize % MULTIPLICATIVE_ORDER) {
            result = self.mul(result, x);
        }
        return result;
    }

    // Returns the multiplicative inverse of an element. For simplicity it's just a brute-force
    // search of all 255 non-zero elements to find which, when multiplied by the input element,
    // gives 1.
    fn inv(&self, x: u8) -> Result<u8> {
        if x == 0 {
            return Err(GaloisError::InvalidArgument("zero has no multiplicative inverse"));
        }
        return (1..=255u8)
            .find(|i| self.mul(*i, x) == 1)
            .ok_or(GaloisError::InvalidArgument(
                "element has no multiplicative inverse under this polynomial",
            ));
    }
}

// Field implementation that does computations directly, without tables. Multiplication is
// carry-less shift-and-add reduced by `polynomial`. Only a true field when the polynomial is
// irreducible.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct DirectField {
    polynomial: u8,
}

impl Default for DirectField {
    fn default() -> DirectField {
        return DirectField::new(GENERATING_POLYNOMIAL);
    }
}

impl DirectField {
    pub const fn new(polynomial: u8) -> DirectField {
        return DirectField {
            polynomial: polynomial,
        };
    }

    pub const fn polynomial(self: &Self) -> u8 {
        return self.polynomial;
    }
}

impl Field256 for DirectField {
    fn mul(&self, x: u8, y: u8) -> u8 {
        let mut result = 0;
        let mut a = x;
        let mut b = y;
        // "Russian peasant" multiplication for GF extension fields.
        for _ in 0..8 {
            // If (b & 1) == 1, then negating it gives all "1"s via 2s-complement, otherwise, -0 ==
            // 0, so we can use this to mask in/out certain values.
            result ^= (b & 1).wrapping_neg() & a;
            // Shift and break as early as possible.
            b >>= 1;
            if b == 0 {
                break;
            }
            // If a would have a "carry" when doubling it, reduce it via the polynomial.
            a = (a << 1) ^ (((a & 0b10000000) >> 7).wrapping_neg() & self.polynomial);
        }
        return result;
    }
}
