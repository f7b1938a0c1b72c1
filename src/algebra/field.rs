use super::ring::Ring;
use crate::error::Result;

/// A (commutative) field.
///
/// Extends `Ring` with multiplicative inverses for all non-zero elements.
/// This is everything the row-reduction engine knows about its entries.
pub trait Field: Ring {
    /// Multiplicative inverse `a⁻¹`.
    ///
    /// - `self` is zero  ⇒  `Err(Error::DivisionByZero)`
    /// - otherwise       ⇒  `Ok(a⁻¹)`
    fn inverse(&self) -> Result<Self>;

    /// Division `self / rhs`.
    ///
    /// Returns `Error::DivisionByZero` if `rhs` is zero.
    #[inline]
    fn try_div(self, rhs: &Self) -> Result<Self> {
        rhs.inverse().map(|inv| self * inv)
    }
}
