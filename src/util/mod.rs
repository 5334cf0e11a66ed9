//! Ancillary collaborators (§6): small, self-contained helpers the core
//! touches only at its boundary. Not the focus of review.

pub mod float_cmp;
pub mod natural_sort;
pub mod numeric;
pub mod primes;
