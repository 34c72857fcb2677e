use crate::error::{DecodeError, EncodeError};
use crate::moving_average::{Config, Mode, MovingAverage};
use serde::ser::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// The compact form a moving average is stored and transported in
/// Example: {"e":1,"d":0.3333333333333333,"v":26.733333333333338,"c":11}
/// `e` is left out for simple averages. Missing fields read as zero
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    /// 1 for an exponential average
    #[serde(rename = "e", skip_serializing_if = "is_zero")]
    pub exponential: u8,
    #[serde(rename = "d")]
    pub decay: f64,
    #[serde(rename = "v")]
    pub value: f64,
    #[serde(rename = "c")]
    pub counter: u8,
}

fn is_zero(flag: &u8) -> bool {
    *flag == 0
}

impl From<MovingAverage> for Record {
    fn from(average: MovingAverage) -> Record {
        Record {
            exponential: match average.mode() {
                Mode::Simple => 0,
                Mode::Exponential => 1,
            },
            decay: average.decay(),
            value: average.raw_value(),
            counter: average.counter(),
        }
    }
}

impl From<Record> for MovingAverage {
    fn from(record: Record) -> MovingAverage {
        let mut average =
            MovingAverage::with(vec![Config::Value(record.value), Config::Counter(record.counter)]);
        // Simple averages always get the default decay back, whatever `d` says
        if record.exponential == 1 {
            average.inject_decay(record.decay);
        }
        average
    }
}

impl Serialize for MovingAverage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let record = Record::from(*self);
        // JSON has no NaN nor infinity, they would come back as an unreadable null
        if !record.value.is_finite() || !record.decay.is_finite() {
            return Err(S::Error::custom(format!(
                "non-finite moving average state: value={} decay={}",
                record.value, record.decay
            )));
        }
        record.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MovingAverage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // A null record is read as an empty one
        let record = Option::<Record>::deserialize(deserializer)?;
        Ok(record.unwrap_or_default().into())
    }
}

impl MovingAverage {
    /// Encode the current state as a JSON record
    pub fn to_json(&self) -> Result<String, EncodeError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Build a moving average from a JSON record
    pub fn from_json(data: &str) -> Result<MovingAverage, DecodeError> {
        serde_json::from_str(data).map_err(|err| {
            log::debug!("failed to decode moving average record: {}", err);
            DecodeError::from(err)
        })
    }

    /// Replace the whole state with the one in a JSON record
    /// On failure, `self` is left untouched
    pub fn decode_from(&mut self, data: &str) -> Result<(), DecodeError> {
        *self = Self::from_json(data)?;
        Ok(())
    }
}

impl FromStr for MovingAverage {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}
