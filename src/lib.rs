#[cfg(test)]
mod tests;

pub mod error;

pub mod moving_average;

pub mod record;

#[cfg(feature = "sample-generator")]
pub mod sample_generator;

pub use error::{DecodeError, EncodeError};
pub use moving_average::{Config, Mode, MovingAverage};
pub use record::Record;

/// Number of samples an exponential average accumulates before it starts
/// reporting an estimate
pub const MIN_COUNTER: u8 = 10;

/// Age of the default (simple) moving average. Asking for an exponential
/// average with this age is a no-op
pub const MIN_AGE: f64 = 30.;

/// Convert from an age, in number of samples, to the decay coefficient
/// used by the smoothing step: 2 / (age + 1)
/// Example:
/// age -> decay
/// 1   -> 1
/// 3   -> 1/2
/// 5   -> 1/3
/// 30  -> 2/31
pub fn age_to_decay(age: f64) -> f64 {
    2. / (age + 1.)
}
