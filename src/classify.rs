use std::num::FpCategory;

/// Floating-point style classification, shared by [`Info`](crate::Info),
/// [`F80`](crate::F80) and [`Comp`](crate::Comp).
///
/// Implementors supply [`classify`](Classify::classify) and
/// [`signbit`](Classify::signbit); the predicates follow from those.
pub trait Classify {
    fn classify(&self) -> FpCategory;

    /// Whether the sign bit is set. Always `false` for a NaN comp.
    fn signbit(&self) -> bool;

    fn is_nan(&self) -> bool { self.classify() == FpCategory::Nan }

    fn is_infinite(&self) -> bool { self.classify() == FpCategory::Infinite }

    fn is_finite(&self) -> bool {
        !matches!(self.classify(), FpCategory::Nan | FpCategory::Infinite)
    }

    fn is_normal(&self) -> bool { self.classify() == FpCategory::Normal }
}
