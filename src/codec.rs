//! Direct single and double codecs.
//!
//! Host `f32`/`f64` and their wire records have the same width and the same
//! IEEE-754 layout, so these paths are a byte copy plus byte-order
//! adaptation, with no classification or rounding.

use crate::{Endian, Format, Precision, Result, endian::adapt, read_extended, write_extended};

pub fn read_single(bytes: [u8; 4], order: Endian) -> f32 {
    f32::from_ne_bytes(adapt(bytes, order))
}

pub fn write_single(value: f32, order: Endian) -> [u8; 4] {
    adapt(value.to_ne_bytes(), order)
}

pub fn read_double(bytes: [u8; 8], order: Endian) -> f64 {
    f64::from_ne_bytes(adapt(bytes, order))
}

pub fn write_double(value: f64, order: Endian) -> [u8; 8] {
    adapt(value.to_ne_bytes(), order)
}

/// Reads any record width into an `f64`.
///
/// Single records widen exactly; extended records take the double-precision
/// fallback and round to nearest.
pub fn read_f64(format: Format, bytes: &[u8]) -> Result<f64> {
    format.check_len(bytes.len())?;
    Ok(match format.precision() {
        Precision::Single => {
            let mut raw = [0u8; 4];
            raw.copy_from_slice(bytes);
            f64::from(read_single(raw, format.endian))
        }
        Precision::Double => {
            let mut raw = [0u8; 8];
            raw.copy_from_slice(bytes);
            read_double(raw, format.endian)
        }
        Precision::Extended => read_extended::<f64>(format, bytes)?,
    })
}

/// Writes an `f64` as any record width.
///
/// Single records round to nearest (the `as f32` conversion); extended
/// records widen exactly.
pub fn write_f64(value: f64, format: Format, out: &mut [u8]) -> Result<()> {
    format.check_len(out.len())?;
    match format.precision() {
        Precision::Single => {
            out.copy_from_slice(&write_single(value as f32, format.endian))
        }
        Precision::Double => {
            out.copy_from_slice(&write_double(value, format.endian))
        }
        Precision::Extended => write_extended(value, format, out)?,
    }
    Ok(())
}
