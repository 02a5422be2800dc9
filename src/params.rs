// The number of elements in the field, GF(2^8).
pub const FIELD_SIZE: usize = 256;

// The order of the multiplicative group (every element except zero). Logarithms are taken modulo
// this value.
pub const MULTIPLICATIVE_ORDER: usize = FIELD_SIZE - 1;

// The polynomial used to generate the logarithm table, without its leading x^8 term (we shift it
// out before reducing). 29 is x^8 + x^4 + x^3 + x^2 + 1.
//
// Sixteen byte values work here (see `diagnostics::all_possible_polynomials`). The choice is
// arbitrary and we just use the first one.
pub const GENERATING_POLYNOMIAL: u8 = 29;

// Length of the exponent table. Every power of the generator is stored twice so that the sum of
// two logarithms (at most 254 + 254) can index it directly.
pub const EXP_TABLE_SIZE: usize = FIELD_SIZE * 2 - 2;
