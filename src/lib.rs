// Arithmetic over GF(2^8), the coefficient field for Reed-Solomon erasure coding.

pub mod diagnostics;
pub mod error;
pub mod finite_field;
pub mod finite_field_log;
pub mod mul_table;
pub mod params;
pub mod tables;

pub use diagnostics::all_possible_polynomials;
pub use error::{GaloisError, Result};
pub use finite_field::{DirectField, Field256};
pub use finite_field_log::{add, divide, exp, multiply, subtract, ExpLogField, FIELD};
pub use mul_table::{generate_multiplication_table, MultiplicationTable, MULTIPLICATION_TABLE};
pub use params::{EXP_TABLE_SIZE, FIELD_SIZE, GENERATING_POLYNOMIAL, MULTIPLICATIVE_ORDER};
pub use tables::{generate_exp_table, generate_log_table, ExpTable, LogTable};
