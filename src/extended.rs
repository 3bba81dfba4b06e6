use core::fmt;
use std::num::FpCategory;

use byteorder::{ByteOrder, NativeEndian};

use crate::{Classify, Format, Info, Precision, Result, endian::adapt_in_place};

/// Mask over the 80 significant bits of an extended record.
const RECORD_MASK: u128 = (1 << 80) - 1;

/// An 80-bit extended precision value, held bit-exactly.
///
/// This is the host representation on platforms whose `long double` is the
/// x87/68881 extended format. It carries no arithmetic; it exists so that
/// extended records can be transferred without passing through a narrower
/// type. Equality compares bit patterns.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct F80(u128);

impl F80 {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(0x3fff_8000_0000_0000_0000);
    pub const INFINITY: Self = Self(0x7fff_8000_0000_0000_0000);
    pub const NEG_INFINITY: Self = Self(0xffff_8000_0000_0000_0000);
    /// The quiet NaN written whenever a NaN is reconstructed.
    pub const NAN: Self = Self(0x7fff_c000_0000_0000_0000);

    /// Builds a value from the low 80 bits of `bits`; higher bits are ignored.
    pub const fn from_bits(bits: u128) -> Self { Self(bits & RECORD_MASK) }

    pub const fn to_bits(self) -> u128 { self.0 }

    pub const fn from_parts(sign_exponent: u16, significand: u64) -> Self {
        Self(((sign_exponent as u128) << 64) | significand as u128)
    }

    /// The sign bit and the 15-bit biased exponent.
    pub const fn sign_exponent(self) -> u16 { (self.0 >> 64) as u16 }

    /// The 64-bit significand, explicit leading bit included.
    pub const fn significand(self) -> u64 { self.0 as u64 }

    /// Rounds to the nearest `f64`, ties to even.
    pub fn to_f64(self) -> f64 { f64::from(Info::from(self)) }

    /// Rounds to the nearest `f32`, ties to even.
    pub fn to_f32(self) -> f32 { f32::from(Info::from(self)) }

    pub const fn abs(self) -> Self { Self(self.0 & !(1 << 79)) }
}

impl From<Info> for F80 {
    fn from(info: Info) -> Self {
        let (sign_exponent, significand) = info.to_extended_parts();
        Self::from_parts(sign_exponent, significand)
    }
}

impl From<F80> for Info {
    fn from(value: F80) -> Self {
        Info::from_extended_parts(value.sign_exponent(), value.significand())
    }
}

impl From<f64> for F80 {
    fn from(value: f64) -> Self { Self::from(Info::from(value)) }
}

impl From<f32> for F80 {
    fn from(value: f32) -> Self { Self::from(Info::from(value)) }
}

impl Classify for F80 {
    fn classify(&self) -> FpCategory { Info::from(*self).classify() }

    fn signbit(&self) -> bool { self.sign_exponent() & 0x8000 != 0 }
}

impl fmt::Debug for F80 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "F80({:#06x}:{:#018x})",
            self.sign_exponent(),
            self.significand()
        )
    }
}

impl fmt::Display for F80 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Info::from(*self), f)
    }
}

// ───────────────────────────── Host policy ──────────────────────────────────

/// A host type that extended records are read into and written from.
///
/// The implementation decides the path: [`F80`] moves the 80 bits directly,
/// while `f64` decomposes through [`Info`] and so loses the extra exponent
/// range and the low 11 significand bits. A given type always takes the same
/// path.
pub trait HostExtended: Copy {
    /// Whether the type carries full extended range and precision.
    const NATIVE: bool;

    fn from_info(info: &Info) -> Self;

    fn to_info(self) -> Info;

    /// Builds a value from an 80-bit record in `sign_exponent << 64 |
    /// significand` form.
    fn from_record(record: u128) -> Self;

    fn to_record(self) -> u128;
}

impl HostExtended for F80 {
    const NATIVE: bool = true;

    fn from_info(info: &Info) -> Self { Self::from(*info) }

    fn to_info(self) -> Info { Info::from(self) }

    fn from_record(record: u128) -> Self { Self::from_bits(record) }

    fn to_record(self) -> u128 { self.0 }
}

impl HostExtended for f64 {
    const NATIVE: bool = false;

    fn from_info(info: &Info) -> Self { Self::from(*info) }

    fn to_info(self) -> Info { Info::from(self) }

    fn from_record(record: u128) -> Self {
        Self::from(Info::from_extended_record(record))
    }

    fn to_record(self) -> u128 { Info::from(self).to_extended_record() }
}

/// The widest floating type of the build target.
///
/// `F80` on x86, x86_64 and m68k; `f64` everywhere else, or when the
/// `double-extended` feature is enabled.
#[cfg(all(
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "m68k"),
    not(feature = "double-extended")
))]
pub type LongDouble = F80;

/// The widest floating type of the build target.
///
/// `F80` on x86, x86_64 and m68k; `f64` everywhere else, or when the
/// `double-extended` feature is enabled.
#[cfg(not(all(
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "m68k"),
    not(feature = "double-extended")
)))]
pub type LongDouble = f64;

/// Whether [`LongDouble`] holds genuine 80-bit extended values.
pub const NATIVE_EXTENDED: bool = <LongDouble as HostExtended>::NATIVE;

// ───────────────────────────── Record I/O ───────────────────────────────────

/// Reads a host extended value from one record of `format`.
///
/// Extended records go through `H`'s record path; single and double records
/// are widened through [`Info`].
pub fn read_extended<H: HostExtended>(format: Format, bytes: &[u8]) -> Result<H> {
    format.check_len(bytes.len())?;
    Ok(match format.precision() {
        Precision::Extended => H::from_record(read_record(format, bytes)),
        Precision::Single | Precision::Double => {
            H::from_info(&Info::decode(format, bytes)?)
        }
    })
}

/// Writes a host extended value as one record of `format`, zero-filling the
/// pad of 12- and 16-byte records. Single and double records are narrowed
/// through [`Info`].
pub fn write_extended<H: HostExtended>(
    value: H,
    format: Format,
    out: &mut [u8],
) -> Result<()> {
    format.check_len(out.len())?;
    match format.precision() {
        Precision::Extended => write_record(value.to_record(), format, out),
        Precision::Single | Precision::Double => {
            value.to_info().encode(format, out)?
        }
    }
    Ok(())
}

/// Loads an extended record, dropping the pad bytes.
///
/// A record is the 80-bit value zero-extended to the record width in the
/// record's byte order, so after adaptation it is a native-order integer.
/// `bytes` must already have been checked against `format`.
pub(crate) fn read_record(format: Format, bytes: &[u8]) -> u128 {
    let len = bytes.len();
    let mut buffer = [0u8; 16];
    buffer[..len].copy_from_slice(bytes);
    adapt_in_place(&mut buffer[..len], format.endian);
    NativeEndian::read_uint128(&buffer[..len], len) & RECORD_MASK
}

/// Stores an 80-bit record into `out`, pad bytes zeroed.
pub(crate) fn write_record(record: u128, format: Format, out: &mut [u8]) {
    let len = out.len();
    NativeEndian::write_uint128(out, record & RECORD_MASK, len);
    adapt_in_place(out, format.endian);
}
