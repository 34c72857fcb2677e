use crate::{age_to_decay, MIN_AGE, MIN_COUNTER};

/// How new samples are folded into the running estimate
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Smoothing with the default decay, bootstrapped by the first non-zero value
    Simple,
    /// Arithmetic mean over a warm-up period, then exponential smoothing
    Exponential,
}

/// A construction option for [`MovingAverage::with`]
/// Options are applied in order, so later options win on conflicting fields
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Config {
    /// Switch to exponential mode with decay 2 / (age + 1)
    /// An age of 0 or of exactly `MIN_AGE` is ignored
    Age(f64),
    /// Restore a previously observed value
    Value(f64),
    /// Restore a previously observed sample counter
    Counter(u8),
}

/// A running average of a stream of values
///
/// In simple mode, the first non-zero sample becomes the estimate and every
/// following sample is blended in with a fixed decay of 2 / 31. A value of
/// exactly zero is taken to mean "no sample yet", so an average that really
/// is zero will be reset by the next sample.
///
/// In exponential mode, the first `MIN_COUNTER` samples are summed and `get`
/// reports 0. The next sample turns the sum into an arithmetic mean and
/// applies the first smoothing step; from then on every sample is blended in
/// with the decay derived from the configured age.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MovingAverage {
    mode: Mode,
    decay: f64,
    /// The estimate, or the running sum while warming up
    value: f64,
    /// Number of samples seen, not counted past `MIN_COUNTER + 1`
    counter: u8,
}

impl Default for MovingAverage {
    fn default() -> Self {
        MovingAverage {
            mode: Mode::Simple,
            decay: age_to_decay(MIN_AGE),
            value: 0.,
            counter: 0,
        }
    }
}

impl MovingAverage {
    /// Create a simple moving average
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an exponential moving average over roughly `age` samples
    /// Fall back to a simple moving average if `age` is 0 or `MIN_AGE`
    pub fn with_age(age: f64) -> Self {
        Self::with(vec![Config::Age(age)])
    }

    /// Create a moving average from a list of options, applied in order
    pub fn with<I>(configs: I) -> Self
    where
        I: IntoIterator<Item = Config>,
    {
        let mut average = Self::default();
        for config in configs {
            average.apply(config);
        }
        average
    }

    fn apply(&mut self, config: Config) {
        match config {
            Config::Age(age) => {
                if age == 0. || age == MIN_AGE {
                    log::debug!("ignoring moving average age {}", age);
                    return;
                }
                self.inject_decay(age_to_decay(age));
            }
            Config::Value(value) => self.value = value,
            Config::Counter(counter) => self.counter = counter,
        }
    }

    /// Switch to exponential mode with a raw decay coefficient
    /// Only meant to restore a decoded record, where the age is not known
    pub(crate) fn inject_decay(&mut self, decay: f64) {
        self.mode = Mode::Exponential;
        self.decay = decay;
    }

    /// Fold a new sample into the average
    pub fn add(&mut self, sample: f64) {
        match self.mode {
            Mode::Simple => {
                if self.value == 0. {
                    self.value = sample;
                } else {
                    self.smooth(sample);
                }
            }
            Mode::Exponential => {
                if self.counter < MIN_COUNTER {
                    self.counter += 1;
                    self.value += sample;
                } else if self.counter == MIN_COUNTER {
                    self.counter += 1;
                    self.value /= MIN_COUNTER as f64;
                    log::trace!("moving average warmed up with mean {}", self.value);
                    self.smooth(sample);
                } else {
                    self.smooth(sample);
                }
            }
        }
    }

    fn smooth(&mut self, sample: f64) {
        self.value = (sample * self.decay) + (self.value * (1. - self.decay));
    }

    /// Return the current estimate
    /// An exponential average returns 0 until it has seen more than
    /// `MIN_COUNTER` samples
    pub fn get(&self) -> f64 {
        match self.mode {
            Mode::Exponential if self.counter <= MIN_COUNTER => 0.,
            _ => self.value,
        }
    }

    /// Overwrite the current estimate
    /// An exponential average that is still warming up is considered warm
    /// right away, so `get` returns `value` immediately
    pub fn set(&mut self, value: f64) {
        self.value = value;
        if self.mode == Mode::Exponential && self.counter <= MIN_COUNTER {
            log::trace!("moving average forced out of warm-up");
            self.counter = MIN_COUNTER + 1;
        }
    }

    /// Whether `get` reports an actual estimate
    /// For simple averages this follows the zero-means-empty convention
    pub fn is_ready(&self) -> bool {
        match self.mode {
            Mode::Simple => self.value != 0.,
            Mode::Exponential => self.counter > MIN_COUNTER,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn decay(&self) -> f64 {
        self.decay
    }

    pub fn counter(&self) -> u8 {
        self.counter
    }

    /// Raw state, which is the running sum during warm-up
    pub(crate) fn raw_value(&self) -> f64 {
        self.value
    }
}

impl Extend<f64> for MovingAverage {
    fn extend<T: IntoIterator<Item = f64>>(&mut self, iter: T) {
        for sample in iter {
            self.add(sample);
        }
    }
}
