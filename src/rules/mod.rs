//! Move generation and the legality filter.
//!
//! Data flows one way: piece tables → [`movegen`] → [`legality`]. [`attacks`] and [`drops`]
//! hold the check and drop-placement predicates the filter is built from.

pub mod attacks;
pub mod drops;
pub mod legality;
pub mod movegen;
