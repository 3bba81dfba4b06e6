//! Bit-exact Interchange of Single, Double, and 80-bit Extended Floats
//!
//! Converts between host floating-point values and the fixed on-disk
//! layouts of the SANE numeric environment: 4-byte single, 8-byte double,
//! and 10-byte extended records (optionally zero-padded to 12 or 16 bytes),
//! in either byte order.
//!
//! Single and double records map directly onto `f32`/`f64`. Everything else
//! passes through [`Info`], a layout-independent decomposition (sign,
//! explicit leading bit, unbiased exponent, 64-bit significand, NaN and
//! infinity flags) that every layout reads into and writes out of. Narrowing
//! rounds to nearest, ties to even; NaN payloads are not carried across.
//!
//! Extended records are read into a [`HostExtended`] type. [`F80`] holds all
//! 80 bits; `f64` is the fallback for hosts without extended hardware and
//! loses the extra range and precision. [`LongDouble`] names whichever of the
//! two the build target uses.
//!
//! [`Comp`] is the 64-bit integer that reserves `0x8000_0000_0000_0000` as
//! NaN and shares the [`Classify`] vocabulary with the floating types.
//!
//! No conversion fails. The only errors are length mismatches when a record
//! is handed over as an untyped slice.

mod endian;
pub use endian::{Endian, adapt, reverse_bytes};
mod format;
pub use format::*;
mod layout;
pub use layout::*;
mod classify;
pub use classify::*;
mod info;
pub use info::*;
mod codec;
pub use codec::*;
mod extended;
pub use extended::*;
mod comp;
pub use comp::*;
mod error;
pub use error::*;
