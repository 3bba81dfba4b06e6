use core::{cmp::Ordering, fmt, str::FromStr};
use std::num::FpCategory;

use crate::{Classify, Endian, Error, F80, Info, endian::adapt};

/// A 64-bit signed integer that reserves `0x8000_0000_0000_0000` for NaN.
///
/// The sentinel is `i64::MIN`, so that one integer value is not
/// representable: storing it in any way yields NaN. Comparisons follow
/// IEEE unordered semantics, so a NaN comp is unequal even to itself.
#[derive(Clone, Copy, Default)]
pub struct Comp(i64);

impl Comp {
    /// Raw bit pattern of the NaN sentinel.
    pub const NAN_BITS: u64 = 0x8000_0000_0000_0000;
    pub const NAN: Self = Self::from_bits(Self::NAN_BITS);
    pub const ZERO: Self = Self(0);

    // ───────────────────────────── Constructors ─────────────────────────────

    /// Stores `bits` verbatim; [`Comp::NAN_BITS`] becomes NaN.
    pub const fn from_bits(bits: u64) -> Self { Self(bits as i64) }

    /// Reads an 8-byte two's-complement record in the given byte order.
    pub fn from_bytes(bytes: [u8; 8], order: Endian) -> Self {
        Self(i64::from_ne_bytes(adapt(bytes, order)))
    }

    // ───────────────────────────── Accessors ────────────────────────────────

    pub const fn to_bits(self) -> u64 { self.0 as u64 }

    pub fn to_bytes(self, order: Endian) -> [u8; 8] {
        adapt(self.0.to_ne_bytes(), order)
    }

    /// The integer value, or `None` for NaN.
    pub const fn value(self) -> Option<i64> {
        if self.0 == i64::MIN { None } else { Some(self.0) }
    }

    /// Magnitude; NaN stays NaN. Never overflows, because the only
    /// unnegatable value is the sentinel itself.
    pub fn abs(self) -> Self {
        match self.value() {
            Some(value) => Self(value.abs()),
            None => self,
        }
    }

    /// NaN for the sentinel, otherwise the nearest `f64`.
    pub fn to_f64(self) -> f64 {
        self.value().map_or(f64::NAN, |value| value as f64)
    }

    /// NaN for the sentinel, otherwise the nearest `f32`.
    pub fn to_f32(self) -> f32 {
        self.value().map_or(f32::NAN, |value| value as f32)
    }

    /// NaN for the sentinel, otherwise the exact extended value.
    pub fn to_f80(self) -> F80 {
        self.value()
            .map_or(F80::NAN, |value| F80::from(Info::from_i64(value)))
    }
}

// ──────────────────────────── Integer Conversions ───────────────────────────

impl From<i32> for Comp {
    fn from(value: i32) -> Self { Self(i64::from(value)) }
}

impl From<i64> for Comp {
    fn from(value: i64) -> Self { Self(value) }
}

impl From<Comp> for i64 {
    fn from(value: Comp) -> Self { value.0 }
}

// ───────────────────────────── Float Conversions ────────────────────────────

/// NaN, infinities and magnitudes of 2^63 or more become NaN; everything
/// else is truncated toward zero.
impl From<Info> for Comp {
    fn from(info: Info) -> Self {
        match info.to_i64_truncated() {
            Some(value) => Self(value),
            None => {
                if !info.nan && !info.inf {
                    log::trace!("{info} is out of comp range");
                }
                Self::NAN
            }
        }
    }
}

impl From<f32> for Comp {
    fn from(value: f32) -> Self { Self::from(Info::from(value)) }
}

impl From<f64> for Comp {
    fn from(value: f64) -> Self { Self::from(Info::from(value)) }
}

impl From<F80> for Comp {
    fn from(value: F80) -> Self { Self::from(Info::from(value)) }
}

impl From<Comp> for f64 {
    fn from(value: Comp) -> Self { value.to_f64() }
}

impl From<Comp> for f32 {
    fn from(value: Comp) -> Self { value.to_f32() }
}

impl From<Comp> for F80 {
    fn from(value: Comp) -> Self { value.to_f80() }
}

// ─────────────────────────────── Comparison ─────────────────────────────────

impl PartialEq for Comp {
    fn eq(&self, other: &Self) -> bool {
        if self.is_nan() || other.is_nan() {
            return false;
        }
        self.0 == other.0
    }
}

impl PartialOrd for Comp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            return None;
        }
        Some(self.0.cmp(&other.0))
    }
}

// ───────────────────────────── Classification ───────────────────────────────

impl Classify for Comp {
    fn classify(&self) -> FpCategory {
        match self.0 {
            i64::MIN => FpCategory::Nan,
            0 => FpCategory::Zero,
            _ => FpCategory::Normal,
        }
    }

    fn signbit(&self) -> bool { self.value().is_some_and(|value| value < 0) }
}

// ───────────────────────────────── Text ─────────────────────────────────────

impl fmt::Display for Comp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("nan"),
        }
    }
}

impl fmt::Debug for Comp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Comp({self})")
    }
}

/// Accepts `nan` in any case, or a decimal integer.
impl FromStr for Comp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("nan") {
            return Ok(Self::NAN);
        }
        Ok(Self(s.parse::<i64>()?))
    }
}
