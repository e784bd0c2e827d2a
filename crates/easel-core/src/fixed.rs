//! Fixed-point decimal used for persisted geometry.
//!
//! Canvas files store coordinates, sizes and zoom as decimal strings backed by
//! a scaled integer, so values survive any number of save/load cycles without
//! floating-point drift. Conversion to `f64` happens only when records are
//! turned back into API types.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Decimal with four fractional digits, stored as a scaled `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fixed(i64);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixedParseError {
    #[error("empty decimal")]
    Empty,
    #[error("invalid decimal '{0}'")]
    Invalid(String),
    #[error("'{0}' has more than {max} decimal places", max = Fixed::DECIMALS)]
    TooPrecise(String),
    #[error("'{0}' is out of range")]
    Overflow(String),
}

impl Fixed {
    pub const DECIMALS: usize = 4;
    pub const SCALE: i64 = 10_000;
    pub const ZERO: Fixed = Fixed(0);
    /// Largest magnitude accepted from `f64` input; well inside the `i64` range.
    pub const MAX_MAGNITUDE: f64 = 1e12;

    pub fn from_raw(raw: i64) -> Self {
        Fixed(raw)
    }

    pub fn raw(self) -> i64 {
        self.0
    }

    /// Round to the nearest representable value. Non-finite input maps to zero.
    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            return Fixed::ZERO;
        }
        // `as` saturates at the i64 bounds
        Fixed((value * Self::SCALE as f64).round() as i64)
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }

    /// True when `value` can be stored without saturating.
    pub fn in_range(value: f64) -> bool {
        value.is_finite() && value.abs() <= Self::MAX_MAGNITUDE
    }
}

impl From<f64> for Fixed {
    fn from(value: f64) -> Self {
        Fixed::from_f64(value)
    }
}

impl From<Fixed> for f64 {
    fn from(value: Fixed) -> Self {
        value.to_f64()
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = Self::SCALE as u64;
        let whole = abs / scale;
        let frac = abs % scale;
        if frac == 0 {
            return write!(f, "{sign}{whole}");
        }
        let digits = format!("{:0width$}", frac, width = Self::DECIMALS);
        write!(f, "{sign}{whole}.{}", digits.trim_end_matches('0'))
    }
}

impl FromStr for Fixed {
    type Err = FixedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(FixedParseError::Empty);
        }
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let (whole, frac) = body.split_once('.').unwrap_or((body, ""));
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
            return Err(FixedParseError::Invalid(s.to_string()));
        }
        if frac.len() > Self::DECIMALS {
            return Err(FixedParseError::TooPrecise(s.to_string()));
        }

        let overflow = || FixedParseError::Overflow(s.to_string());
        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| overflow())?
        };
        let frac: i64 = if frac.is_empty() {
            0
        } else {
            let padded = format!("{:0<width$}", frac, width = Self::DECIMALS);
            padded.parse().map_err(|_| overflow())?
        };
        let abs = whole
            .checked_mul(Self::SCALE)
            .and_then(|w| w.checked_add(frac))
            .ok_or_else(overflow)?;
        Ok(Fixed(if negative { -abs } else { abs }))
    }
}

impl Serialize for Fixed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Fixed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
