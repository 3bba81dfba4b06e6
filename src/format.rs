use crate::{Endian, Error, Result};

/// Size of a wire record, which also selects its layout rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    /// 4-octet single precision (f32)
    Single,
    /// 8-octet double precision (f64)
    Double,
    /// 10-octet 80-bit extended precision
    Extended10,
    /// 80-bit extended precision zero-padded to 12 octets
    Extended12,
    /// 80-bit extended precision zero-padded to 16 octets
    Extended16,
}

/// The layout family a [`Width`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    Single,
    Double,
    Extended,
}

#[allow(clippy::len_without_is_empty)]
impl Width {
    pub fn from_len(len: usize) -> Result<Self> {
        match len {
            4 => Ok(Self::Single),
            8 => Ok(Self::Double),
            10 => Ok(Self::Extended10),
            12 => Ok(Self::Extended12),
            16 => Ok(Self::Extended16),
            _ => Err(Error::InvalidLength(len)),
        }
    }

    pub const fn len(self) -> usize {
        match self {
            Self::Single => 4,
            Self::Double => 8,
            Self::Extended10 => 10,
            Self::Extended12 => 12,
            Self::Extended16 => 16,
        }
    }

    pub const fn precision(self) -> Precision {
        match self {
            Self::Single => Precision::Single,
            Self::Double => Precision::Double,
            Self::Extended10 | Self::Extended12 | Self::Extended16 => {
                Precision::Extended
            }
        }
    }
}

/// A wire layout variant: record width paired with byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Format {
    pub width: Width,
    pub endian: Endian,
}

#[allow(clippy::len_without_is_empty)]
impl Format {
    pub const SINGLE_BE: Self = Self::new(Width::Single, Endian::Big);
    pub const SINGLE_LE: Self = Self::new(Width::Single, Endian::Little);
    pub const DOUBLE_BE: Self = Self::new(Width::Double, Endian::Big);
    pub const DOUBLE_LE: Self = Self::new(Width::Double, Endian::Little);
    pub const EXTENDED_BE: Self = Self::new(Width::Extended10, Endian::Big);
    pub const EXTENDED_LE: Self = Self::new(Width::Extended10, Endian::Little);

    pub const fn new(width: Width, endian: Endian) -> Self {
        Self { width, endian }
    }

    /// The format of `width` in host byte order.
    pub const fn native(width: Width) -> Self {
        Self::new(width, Endian::NATIVE)
    }

    /// Resolves a record length into a format of the given byte order.
    pub fn from_len(len: usize, endian: Endian) -> Result<Self> {
        Ok(Self::new(Width::from_len(len)?, endian))
    }

    pub const fn len(self) -> usize { self.width.len() }

    pub const fn precision(self) -> Precision { self.width.precision() }

    /// The same width in the other byte order.
    pub const fn swapped(self) -> Self {
        Self::new(self.width, self.endian.opposite())
    }

    /// Fails unless `len` is exactly the size of a record in this format.
    pub(crate) fn check_len(self, len: usize) -> Result<()> {
        if len == self.len() {
            Ok(())
        } else {
            Err(Error::BufferLength { expected: self.len(), actual: len })
        }
    }
}
