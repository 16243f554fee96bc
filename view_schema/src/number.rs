use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Fixed-point decimal with 6 decimal places of precision.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Scalar(pub i64);

impl Scalar {
    pub const SCALE: i64 = 1_000_000;
    const DIGITS: usize = 6;

    pub fn from_f64(value: f64) -> Self {
        Self((value * Self::SCALE as f64).round() as i64)
    }

    pub fn from_i64(value: i64) -> Self {
        Self(value.saturating_mul(Self::SCALE))
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }

    pub fn zero() -> Self {
        Self(0)
    }

    pub fn raw(self) -> i64 {
        self.0
    }

    pub fn from_raw(value: i64) -> Self {
        Self(value)
    }

    pub fn is_whole(self) -> bool {
        self.0 % Self::SCALE == 0
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let scale = Self::SCALE as u64;
        let whole = magnitude / scale;
        let fraction = magnitude % scale;
        if fraction == 0 {
            return write!(f, "{sign}{whole}");
        }
        let digits = format!("{:0width$}", fraction, width = Self::DIGITS);
        write!(f, "{sign}{whole}.{}", digits.trim_end_matches('0'))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberParseError {
    #[error("empty numeric literal")]
    Empty,
    #[error("invalid numeric literal {0:?}")]
    Invalid(String),
    #[error("{0:?} has more than six decimal places")]
    TooPrecise(String),
}

impl FromStr for Scalar {
    type Err = NumberParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(NumberParseError::Empty);
        }
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (whole, fraction) = body.split_once('.').unwrap_or((body, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(NumberParseError::Invalid(input.to_string()));
        }
        if fraction.len() > Self::DIGITS {
            return Err(NumberParseError::TooPrecise(input.to_string()));
        }
        let all_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) {
            return Err(NumberParseError::Invalid(input.to_string()));
        }
        let whole_value: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| NumberParseError::Invalid(input.to_string()))?
        };
        let padded = format!("{:0<width$}", fraction, width = Self::DIGITS);
        let fraction_value: i64 = padded
            .parse()
            .map_err(|_| NumberParseError::Invalid(input.to_string()))?;
        let raw = whole_value
            .checked_mul(Self::SCALE)
            .and_then(|value| value.checked_add(fraction_value))
            .ok_or_else(|| NumberParseError::Invalid(input.to_string()))?;
        Ok(Self(if negative { -raw } else { raw }))
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ScalarVisitor)
    }
}

struct ScalarVisitor;

impl<'de> Visitor<'de> for ScalarVisitor {
    type Value = Scalar;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal number or decimal string")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Scalar, E> {
        Ok(Scalar::from_i64(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Scalar, E> {
        i64::try_from(value)
            .map(Scalar::from_i64)
            .map_err(|_| E::custom("decimal out of range"))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Scalar, E> {
        Ok(Scalar::from_f64(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Scalar, E> {
        value.parse().map_err(E::custom)
    }
}

/// A magnitude that may be written either as a whole number or a decimal.
///
/// Equality, ordering and hashing go through the numeric value, so
/// `Integer(2)` and `Decimal(2.0)` are interchangeable.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Decimal(Scalar),
}

impl Number {
    fn widened(self) -> i128 {
        match self {
            Number::Integer(value) => value as i128 * Scalar::SCALE as i128,
            Number::Decimal(value) => value.raw() as i128,
        }
    }

    pub fn zero() -> Self {
        Number::Integer(0)
    }

    pub fn is_negative(self) -> bool {
        self.widened() < 0
    }

    pub fn decimal(value: f64) -> Self {
        Number::Decimal(Scalar::from_f64(value))
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::zero()
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.widened() == other.widened()
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.widened().cmp(&other.widened())
    }
}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.widened().hash(state);
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(value) => write!(f, "{value}"),
            Number::Decimal(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value.into())
    }
}

impl From<Scalar> for Number {
    fn from(value: Scalar) -> Self {
        Number::Decimal(value)
    }
}

/// A magnitude paired with its unit of measure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quantity {
    pub number: Number,
    pub units: String,
}

impl Quantity {
    pub fn new(number: impl Into<Number>, units: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            units: units.into(),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.units.is_empty() {
            write!(f, "{}", self.number)
        } else {
            write!(f, "{} {}", self.number, self.units)
        }
    }
}
