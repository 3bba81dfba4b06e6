/// Byte order of a wire record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Least significant byte first.
    Little,
    /// Most significant byte first (network order, the 68k/PPC layout).
    Big,
}

impl Endian {
    /// The byte order of the host.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Self = Self::Little;
    /// The byte order of the host.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Self = Self::Big;

    /// The byte order that is not `self`.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Little => Self::Big,
            Self::Big => Self::Little,
        }
    }

    pub const fn is_native(self) -> bool {
        matches!(
            (self, Self::NATIVE),
            (Self::Little, Self::Little) | (Self::Big, Self::Big)
        )
    }
}

/// Reverses `bytes` in place.
pub fn reverse_bytes(bytes: &mut [u8]) { bytes.reverse(); }

/// Converts a record between `order` and host order.
///
/// The operation is its own inverse: it reverses the record when `order`
/// differs from [`Endian::NATIVE`] and leaves it alone otherwise, so the same
/// call serves both the read and the write direction.
pub fn adapt<const N: usize>(mut bytes: [u8; N], order: Endian) -> [u8; N] {
    if !order.is_native() {
        reverse_bytes(&mut bytes);
    }
    bytes
}

/// Slice form of [`adapt`], used for variable-width extended records.
pub(crate) fn adapt_in_place(bytes: &mut [u8], order: Endian) {
    if !order.is_native() {
        reverse_bytes(bytes);
    }
}
