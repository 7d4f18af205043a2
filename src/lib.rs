//! Approximations to arccos(x) from the truncated Maclaurin
//! series of arcsin(x):
//!   arccos(x) = pi/2 - sum_{i=0}^{n-1} (2i)! x^(2i+1) / (4^i (i!)^2 (2i+1))

mod constants;
pub use constants::*;

pub mod special_functions;

mod approximator;
pub use approximator::*;

pub mod sweep;
pub mod setup;
