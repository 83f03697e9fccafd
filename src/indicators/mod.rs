//! Pure indicator computations, separate from transport concerns.

pub mod inflation;
pub mod jobs;
