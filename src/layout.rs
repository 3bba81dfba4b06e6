/// Bit-field parameters of one binary floating-point layout.
///
/// Every value is a compile-time constant; the four layouts the engine knows
/// about are the associated constants [`FloatLayout::HALF`],
/// [`FloatLayout::SINGLE`], [`FloatLayout::DOUBLE`] and
/// [`FloatLayout::EXTENDED`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatLayout {
    /// Value subtracted from the stored exponent field
    pub bias: i32,
    /// Width of the exponent field
    pub exponent_bits: u32,
    /// Width of the stored fraction, excluding any leading integer bit
    pub significand_bits: u32,
    /// Largest unbiased exponent of a finite value
    pub max_exp: i32,
    /// Smallest unbiased exponent of a normal value
    pub min_exp: i32,
    /// Mask over the stored fraction
    pub significand_mask: u64,
    /// Sign bit, positioned within the sign/exponent word
    pub sign_bit: u64,
    /// All-ones exponent field, positioned within the sign/exponent word
    pub nan_exp: u64,
    /// Fraction pattern of the quiet NaN written on reconstruction
    pub quiet_nan: u64,
    /// Fraction pattern of a signaling NaN
    pub signaling_nan: u64,
    /// Whether the leading significand bit is stored rather than implied
    pub explicit_one: bool,
}

impl FloatLayout {
    /// An IEEE-754 interchange layout packed into a single word of
    /// `1 + exponent_bits + significand_bits` bits.
    const fn ieee(exponent_bits: u32, significand_bits: u32) -> Self {
        let bias = (1 << (exponent_bits - 1)) - 1;
        Self {
            bias,
            exponent_bits,
            significand_bits,
            max_exp: bias,
            min_exp: 1 - bias,
            significand_mask: (1 << significand_bits) - 1,
            sign_bit: 1 << (exponent_bits + significand_bits),
            nan_exp: ((1 << exponent_bits) - 1) << significand_bits,
            quiet_nan: 0x2 << (significand_bits - 2),
            signaling_nan: 0x1 << (significand_bits - 2),
            explicit_one: false,
        }
    }

    pub const HALF: Self = Self::ieee(5, 10);
    pub const SINGLE: Self = Self::ieee(8, 23);
    pub const DOUBLE: Self = Self::ieee(11, 52);

    /// The 80-bit extended layout. Sign and exponent share a separate 16-bit
    /// word, so `sign_bit` and `nan_exp` are positioned within that word, and
    /// the 64-bit significand carries its leading bit explicitly.
    pub const EXTENDED: Self = Self {
        bias: 16383,
        exponent_bits: 15,
        significand_bits: 63,
        max_exp: 16383,
        min_exp: -16382,
        significand_mask: (1 << 63) - 1,
        sign_bit: 0x8000,
        nan_exp: 0x7fff,
        quiet_nan: 0x2 << 61,
        signaling_nan: 0x1 << 61,
        explicit_one: true,
    };

    /// Mask over the exponent field once shifted down to bit 0.
    pub const fn exponent_mask(&self) -> u64 { (1 << self.exponent_bits) - 1 }

    /// The explicit leading significand bit of the extended layout.
    pub const ONE_BIT: u64 = 1 << 63;
}
