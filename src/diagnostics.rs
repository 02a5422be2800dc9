use crate::error::GaloisError;
use crate::params::FIELD_SIZE;
use crate::tables::generate_log_table;
use itertools::{Either, Itertools};
use log::{debug, trace};

// Returns, in ascending order, every polynomial that can be used to generate the field.
//
// Nothing on the arithmetic path uses this; it documents which of the 256 candidate bytes work.
pub fn all_possible_polynomials() -> Vec<u8> {
    let (valid, rejected): (Vec<u8>, Vec<GaloisError>) =
        (0..=u8::MAX).partition_map(|p| match generate_log_table(p) {
            Ok(_) => Either::Left(p),
            Err(e) => {
                trace!("polynomial {} rejected: {}", p, e);
                Either::Right(e)
            }
        });
    debug!(
        "{} of {} candidate polynomials generate the field ({} rejected)",
        valid.len(),
        FIELD_SIZE,
        rejected.len()
    );
    return valid;
}
