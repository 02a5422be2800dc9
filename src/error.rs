use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum GaloisError {
    // An operand outside the domain of the operation, e.g. a zero divisor.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    // The candidate polynomial revisited an element before producing all 255 nonzero powers, so
    // it does not generate the field.
    #[error("duplicate logarithm {log} for element {element} (bad polynomial {polynomial}?)")]
    DuplicateLogarithm { polynomial: u8, element: u8, log: u8 },
}

pub type Result<T> = std::result::Result<T, GaloisError>;
