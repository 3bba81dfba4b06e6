use core::fmt;
use std::num::FpCategory;

use half::f16;

use crate::{
    Classify, FloatLayout, Format, HostExtended, LongDouble, Precision, Result,
    endian::adapt, extended,
};

/// Layout-independent decomposition of a binary floating-point value.
///
/// Every layout codec reads into and writes out of this record, which is what
/// makes half, single, double and extended values mutually convertible. The
/// significand is aligned so that an explicit leading bit, when present,
/// occupies bit 63 and the fraction follows directly beneath it.
///
/// When `nan` or `inf` is set, `exponent` and `significand` carry whatever
/// the source pattern held and are ignored on reconstruction; `sign` still
/// applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Info {
    pub sign: bool,
    /// Whether bit 63 of `significand` is set, i.e. the value is normalized.
    pub one: bool,
    /// Unbiased exponent. Pinned to the layout's minimum for subnormals.
    pub exponent: i32,
    pub significand: u64,
    pub nan: bool,
    pub inf: bool,
}

impl Info {
    pub const INFINITY: Self = Self {
        sign: false,
        one: false,
        exponent: 0,
        significand: 0,
        nan: false,
        inf: true,
    };
    pub const NEG_INFINITY: Self = Self { sign: true, ..Self::INFINITY };
    pub const NAN: Self = Self { nan: true, inf: false, ..Self::INFINITY };

    // ───────────────────────────── Decomposition ────────────────────────────

    pub fn from_half_bits(bits: u16) -> Self {
        Self::decompose(u64::from(bits), &FloatLayout::HALF)
    }

    pub fn from_single_bits(bits: u32) -> Self {
        Self::decompose(u64::from(bits), &FloatLayout::SINGLE)
    }

    pub fn from_double_bits(bits: u64) -> Self {
        Self::decompose(bits, &FloatLayout::DOUBLE)
    }

    /// Decomposes an extended value from its sign/exponent word and its
    /// 64-bit significand, whose leading bit is stored explicitly.
    ///
    /// Unnormals (non-zero exponent field, leading bit clear) keep their
    /// stored exponent with `one == false` and so classify as subnormal.
    /// Pseudo-denormals (zero exponent field, leading bit set) come out with
    /// `one == true` at the minimum exponent.
    pub fn from_extended_parts(sign_exponent: u16, significand: u64) -> Self {
        let layout = &FloatLayout::EXTENDED;
        let word = u64::from(sign_exponent);
        let sign = word & layout.sign_bit != 0;
        let raw_exp = word & layout.nan_exp;
        let one = significand & FloatLayout::ONE_BIT != 0;

        if raw_exp == layout.nan_exp {
            let fraction = significand & layout.significand_mask;
            return Self {
                sign,
                one,
                exponent: layout.max_exp + 1,
                significand,
                nan: fraction != 0,
                inf: fraction == 0,
            };
        }

        let exponent = if raw_exp == 0 {
            layout.min_exp
        } else {
            if !one {
                log::trace!(
                    "unnormal extended pattern {sign_exponent:#06x}:{significand:#018x}"
                );
            }
            raw_exp as i32 - layout.bias
        };
        Self { sign, one, exponent, significand, nan: false, inf: false }
    }

    /// Shared read path of the implicit-leading-bit layouts.
    fn decompose(bits: u64, layout: &FloatLayout) -> Self {
        let width = layout.significand_bits;
        let align = 63 - width;
        let sign = bits & layout.sign_bit != 0;
        let raw_exp = (bits >> width) & layout.exponent_mask();
        let fraction = bits & layout.significand_mask;

        if raw_exp == layout.exponent_mask() {
            return Self {
                sign,
                one: false,
                exponent: layout.max_exp + 1,
                significand: fraction << align,
                nan: fraction != 0,
                inf: fraction == 0,
            };
        }

        if raw_exp == 0 {
            Self {
                sign,
                one: false,
                exponent: layout.min_exp,
                significand: fraction << align,
                nan: false,
                inf: false,
            }
        } else {
            Self {
                sign,
                one: true,
                exponent: raw_exp as i32 - layout.bias,
                significand: FloatLayout::ONE_BIT | (fraction << align),
                nan: false,
                inf: false,
            }
        }
    }

    // ──────────────────────────── Reconstruction ────────────────────────────

    pub fn to_half_bits(&self) -> u16 {
        self.compose(&FloatLayout::HALF) as u16
    }

    pub fn to_single_bits(&self) -> u32 {
        self.compose(&FloatLayout::SINGLE) as u32
    }

    pub fn to_double_bits(&self) -> u64 { self.compose(&FloatLayout::DOUBLE) }

    /// Packs into the extended sign/exponent word and explicit significand.
    ///
    /// The 64-bit significand always fits, so only values whose exponent lies
    /// below the extended subnormal range are rounded.
    pub fn to_extended_parts(&self) -> (u16, u64) {
        let layout = &FloatLayout::EXTENDED;
        let sign = if self.sign { layout.sign_bit as u16 } else { 0 };
        let nan_exp = layout.nan_exp as u16;

        if self.nan {
            return (sign | nan_exp, FloatLayout::ONE_BIT | layout.quiet_nan);
        }
        if self.inf {
            return (sign | nan_exp, FloatLayout::ONE_BIT);
        }
        let Some((exponent, significand)) = self.normalized() else {
            return (sign, 0);
        };

        if exponent > layout.max_exp {
            log::trace!("exponent {exponent} overflows extended, saturating");
            return (sign | nan_exp, FloatLayout::ONE_BIT);
        }
        if exponent >= layout.min_exp {
            return (sign | (exponent + layout.bias) as u16, significand);
        }

        let shift = i64::from(layout.min_exp) - i64::from(exponent);
        let significand = round_shift(significand, shift);
        if significand & FloatLayout::ONE_BIT != 0 {
            // rounded up into the smallest normal
            (sign | 1, significand)
        } else {
            if significand == 0 {
                log::trace!("exponent {exponent} underflows extended to zero");
            }
            (sign, significand)
        }
    }

    /// Shared write path of the implicit-leading-bit layouts.
    fn compose(&self, layout: &FloatLayout) -> u64 {
        let width = layout.significand_bits;
        let sign = if self.sign { layout.sign_bit } else { 0 };

        if self.nan {
            return sign | layout.nan_exp | layout.quiet_nan;
        }
        if self.inf {
            return sign | layout.nan_exp;
        }
        let Some((exponent, significand)) = self.normalized() else {
            return sign;
        };

        if exponent > layout.max_exp {
            log::trace!("exponent {exponent} overflows {width}-bit fraction layout");
            return sign | layout.nan_exp;
        }

        if exponent >= layout.min_exp {
            // Leading bit plus `width` fraction bits. Adding the rounded
            // mantissa on top of (biased - 1) lets a carry out of the
            // fraction bump the exponent, up to and including infinity.
            let mantissa = round_shift(significand, i64::from(63 - width));
            let biased = (exponent + layout.bias) as u64;
            let packed = ((biased - 1) << width) + mantissa;
            if packed >= layout.nan_exp {
                log::trace!("rounding {exponent} overflowed to infinity");
            }
            return sign | packed;
        }

        let shift = i64::from(63 - width)
            + i64::from(layout.min_exp)
            - i64::from(exponent);
        let mantissa = round_shift(significand, shift);
        if mantissa == 0 {
            log::trace!("exponent {exponent} underflows {width}-bit fraction layout to zero");
        }
        // a mantissa of exactly 1 << width lands on the smallest normal
        sign | mantissa
    }

    /// Exponent and significand shifted so bit 63 is set, or `None` for zero.
    fn normalized(&self) -> Option<(i32, u64)> {
        if self.significand == 0 {
            return None;
        }
        let lz = self.significand.leading_zeros();
        Some((
            self.exponent.saturating_sub(lz as i32),
            self.significand << lz,
        ))
    }

    // ───────────────────────────── Wire records ─────────────────────────────

    /// Decodes a record of `format` from `bytes`, adapting byte order first.
    pub fn decode(format: Format, bytes: &[u8]) -> Result<Self> {
        format.check_len(bytes.len())?;
        Ok(match format.precision() {
            Precision::Single => {
                let mut raw = [0u8; 4];
                raw.copy_from_slice(bytes);
                Self::from_single_bits(u32::from_ne_bytes(adapt(raw, format.endian)))
            }
            Precision::Double => {
                let mut raw = [0u8; 8];
                raw.copy_from_slice(bytes);
                Self::from_double_bits(u64::from_ne_bytes(adapt(raw, format.endian)))
            }
            Precision::Extended => {
                Self::from_extended_record(extended::read_record(format, bytes))
            }
        })
    }

    /// Encodes into `out`, which must be exactly one record of `format`.
    /// Extended records of 12 or 16 bytes are zero-padded.
    pub fn encode(&self, format: Format, out: &mut [u8]) -> Result<()> {
        format.check_len(out.len())?;
        match format.precision() {
            Precision::Single => out.copy_from_slice(&adapt(
                self.to_single_bits().to_ne_bytes(),
                format.endian,
            )),
            Precision::Double => out.copy_from_slice(&adapt(
                self.to_double_bits().to_ne_bytes(),
                format.endian,
            )),
            Precision::Extended => {
                extended::write_record(self.to_extended_record(), format, out)
            }
        }
        Ok(())
    }

    /// Encodes into a freshly allocated record of `format`.
    pub fn to_bytes(&self, format: Format) -> Result<Vec<u8>> {
        let mut out = vec![0u8; format.len()];
        self.encode(format, &mut out)?;
        Ok(out)
    }

    pub(crate) fn from_extended_record(record: u128) -> Self {
        Self::from_extended_parts((record >> 64) as u16, record as u64)
    }

    pub(crate) fn to_extended_record(&self) -> u128 {
        let (sign_exponent, significand) = self.to_extended_parts();
        (u128::from(sign_exponent) << 64) | u128::from(significand)
    }

    // ───────────────────────────── Host values ──────────────────────────────

    /// Converts to the build's widest native floating type.
    pub fn to_long_double(&self) -> LongDouble { LongDouble::from_info(self) }

    /// Exact decomposition of an integer; 64 significand bits hold any `i64`.
    pub fn from_i64(value: i64) -> Self {
        if value == 0 {
            return Self::default();
        }
        let magnitude = value.unsigned_abs();
        let lz = magnitude.leading_zeros();
        Self {
            sign: value < 0,
            one: true,
            exponent: 63 - lz as i32,
            significand: magnitude << lz,
            nan: false,
            inf: false,
        }
    }

    /// The value truncated toward zero, or `None` for NaN, infinities and
    /// magnitudes of 2^63 or more.
    pub fn to_i64_truncated(&self) -> Option<i64> {
        if self.nan || self.inf {
            return None;
        }
        let Some((exponent, significand)) = self.normalized() else {
            return Some(0);
        };
        if exponent < 0 {
            return Some(0);
        }
        if exponent > 62 {
            return None;
        }
        let magnitude = (significand >> (63 - exponent)) as i64;
        Some(if self.sign { -magnitude } else { magnitude })
    }

    /// The same value with the sign cleared.
    pub fn abs(self) -> Self { Self { sign: false, ..self } }
}

// ─────────────────────────────── Classification ─────────────────────────────

impl Classify for Info {
    fn classify(&self) -> FpCategory {
        if self.nan {
            FpCategory::Nan
        } else if self.inf {
            FpCategory::Infinite
        } else if self.significand == 0 {
            FpCategory::Zero
        } else if self.significand & FloatLayout::ONE_BIT != 0 {
            FpCategory::Normal
        } else {
            FpCategory::Subnormal
        }
    }

    fn signbit(&self) -> bool { self.sign }
}

// ───────────────────────────── Host Conversions ─────────────────────────────

impl From<f16> for Info {
    fn from(value: f16) -> Self { Self::from_half_bits(value.to_bits()) }
}

impl From<f32> for Info {
    fn from(value: f32) -> Self { Self::from_single_bits(value.to_bits()) }
}

impl From<f64> for Info {
    fn from(value: f64) -> Self { Self::from_double_bits(value.to_bits()) }
}

impl From<Info> for f16 {
    fn from(info: Info) -> Self { f16::from_bits(info.to_half_bits()) }
}

impl From<Info> for f32 {
    fn from(info: Info) -> Self { f32::from_bits(info.to_single_bits()) }
}

impl From<Info> for f64 {
    fn from(info: Info) -> Self { f64::from_bits(info.to_double_bits()) }
}

// ───────────────────────────────── Display ──────────────────────────────────

impl fmt::Display for Info {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.sign { '-' } else { '+' };
        let class = match self.classify() {
            FpCategory::Nan => return write!(f, "{sign}nan"),
            FpCategory::Infinite => return write!(f, "{sign}inf"),
            FpCategory::Zero => "zero",
            FpCategory::Subnormal => "subnormal",
            FpCategory::Normal => "normal",
        };
        write!(
            f,
            "{sign}{class} exp={} sig=0x{:016x}",
            self.exponent, self.significand
        )
    }
}

// ────────────────────────────── Internals ───────────────────────────────────

/// Shifts `value` right by `shift` bits, rounding to nearest, ties to even.
fn round_shift(value: u64, shift: i64) -> u64 {
    if shift <= 0 {
        return value;
    }
    // past 65 bits everything is below half an ulp
    let shift = shift.min(65) as u32;
    let wide = u128::from(value);
    let quotient = wide >> shift;
    let remainder = wide & ((1u128 << shift) - 1);
    let half = 1u128 << (shift - 1);
    let round_up = remainder > half || (remainder == half && quotient & 1 == 1);
    (quotient + u128::from(round_up)) as u64
}
