// File: crates/chart-core/src/datum.rs
// Summary: Discriminated coordinate value: plain number or timestamp with its date kept.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// One coordinate value. Timestamps sort and map like their epoch seconds
/// but keep the original date for display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Datum {
    Number(f64),
    Timestamp(DateTime<Utc>),
}

impl Datum {
    /// Numeric magnitude used for sorting and axis mapping. Timestamps map
    /// to fractional epoch seconds.
    #[inline]
    pub fn value(&self) -> f64 {
        match self {
            Datum::Number(v) => *v,
            Datum::Timestamp(t) => t.timestamp_millis() as f64 / 1000.0,
        }
    }

    /// True when the magnitude is a usable coordinate.
    pub fn is_finite(&self) -> bool {
        self.value().is_finite()
    }

    /// Total order by magnitude.
    pub fn cmp_value(&self, other: &Datum) -> Ordering {
        self.value().total_cmp(&other.value())
    }
}

impl From<f64> for Datum {
    fn from(v: f64) -> Self {
        Datum::Number(v)
    }
}

impl From<DateTime<Utc>> for Datum {
    fn from(t: DateTime<Utc>) -> Self {
        Datum::Timestamp(t)
    }
}

impl From<NaiveDate> for Datum {
    fn from(d: NaiveDate) -> Self {
        Datum::Timestamp(d.and_time(NaiveTime::MIN).and_utc())
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Datum::Number(v) => write!(f, "{v}"),
            Datum::Timestamp(t) if t.time() == NaiveTime::MIN => {
                write!(f, "{}", t.format("%Y-%m-%d"))
            }
            Datum::Timestamp(t) => write!(f, "{}", t.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}
