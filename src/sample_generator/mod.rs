//! Deterministic streams of samples, used to exercise and benchmark averages
mod random;
mod sequential;

pub use random::*;
pub use sequential::*;
