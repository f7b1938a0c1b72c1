use core::fmt;
use core::ops::{Add, Mul, Neg};

/// A commutative ring whose elements can be used as matrix entries.
///
/// This trait assumes:
/// - (R, +) is an abelian group; `-a` is the additive inverse of `a`
/// - (R, ·) is a commutative monoid
/// - multiplication distributes over addition.
///
/// Elements are values: every operation consumes or clones its operands and
/// returns a fresh element. No ordering or magnitude is assumed, only the
/// zero/one tests below.
pub trait Ring:
    Sized + Clone + fmt::Display + Add<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// Whether this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Whether this is the multiplicative identity.
    fn is_one(&self) -> bool;
}
