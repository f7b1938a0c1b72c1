use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use crate::algebra::field::Field;
use crate::algebra::ring::Ring;
use crate::error::{Error, Result};
use crate::structures::poly::Poly;
use crate::utils::gcd_u128;

/// A rational function `numerator / denominator` over integer polynomials.
///
/// Every constructor except [`PolyFraction::new_unsimplified`] runs
/// [`PolyFraction::simplify`], which divides out the largest monomial
/// `a·x^b` common to both sides. Other common polynomial factors are kept,
/// so `(x + 1)/(x + 1)` stays as written but still tests as one.
///
/// # Example
///
/// ```
/// use rowstep::{Poly, PolyFraction};
///
/// // 4x^2 / 6x = 2x / 3
/// let f = PolyFraction::new(Poly::monomial(4, 2), Poly::monomial(6, 1)).unwrap();
/// assert_eq!(f.numerator(), &Poly::new(vec![0, 2]));
/// assert_eq!(f.denominator(), &Poly::constant(3));
/// assert_eq!(f.to_string(), "(2x^1)/(3)");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PolyFraction {
    num: Poly,
    den: Poly,
}

#[cfg(feature = "serde")]
impl serde::Serialize for PolyFraction {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("PolyFraction", 2)?;
        state.serialize_field("numerator", &self.num)?;
        state.serialize_field("denominator", &self.den)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PolyFraction {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            numerator: Poly,
            denominator: Poly,
        }

        let raw = Raw::deserialize(deserializer)?;
        PolyFraction::new(raw.numerator, raw.denominator).map_err(serde::de::Error::custom)
    }
}

impl PolyFraction {
    /// Create a simplified fraction.
    ///
    /// Returns `Error::DivisionByZero` if `denominator` is the zero polynomial.
    pub fn new(numerator: Poly, denominator: Poly) -> Result<Self> {
        if denominator.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::new_unsimplified(numerator, denominator).simplify())
    }

    /// Create a fraction exactly as given, without simplifying.
    ///
    /// The caller is responsible for `denominator` being non-zero.
    pub fn new_unsimplified(numerator: Poly, denominator: Poly) -> Self {
        Self {
            num: numerator,
            den: denominator,
        }
    }

    /// The polynomial `p` over `1`.
    pub fn from_poly(p: Poly) -> Self {
        Self::new_unsimplified(p, Poly::one()).simplify()
    }

    pub fn zero() -> Self {
        Self::new_unsimplified(Poly::zero(), Poly::one())
    }

    pub fn one() -> Self {
        Self::new_unsimplified(Poly::one(), Poly::one())
    }

    pub fn numerator(&self) -> &Poly {
        &self.num
    }

    pub fn denominator(&self) -> &Poly {
        &self.den
    }

    /// Divide numerator and denominator by their common monomial factor.
    ///
    /// The scalar part is the gcd of the two sides' coefficient gcds and the
    /// power part is the smaller of their lowest non-zero degrees. A zero
    /// numerator collapses to the canonical `0/1`. Simplifying an already
    /// simplified fraction returns it unchanged.
    pub fn simplify(self) -> Self {
        if self.num.is_zero() {
            return Self::zero();
        }

        let (num_scalar, num_power) = self.num.common_factor();
        let (den_scalar, den_power) = self.den.common_factor();
        let scalar = gcd_u128(num_scalar.into(), den_scalar.into());
        let power = num_power.min(den_power);

        let mut num = self.num.div_power(power);
        let mut den = self.den.div_power(power);
        if scalar > 1 {
            // A content of 2^63 means every coefficient is 0 or i64::MIN on
            // both sides; dividing both by -2^63 gives the same fraction.
            let divisor = i64::try_from(scalar).unwrap_or(i64::MIN);
            num = num.div_scalar(divisor);
            den = den.div_scalar(divisor);
        }
        Self { num, den }
    }
}

/* ---- Ring / Field ---- */

impl Ring for PolyFraction {
    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    /// Structural: the numerator equals the denominator as stored.
    fn is_one(&self) -> bool {
        self.num == self.den
    }
}

impl Field for PolyFraction {
    fn inverse(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::new_unsimplified(self.den.clone(), self.num.clone()).simplify())
    }
}

/* ---- operator impls ---- */

impl Add for PolyFraction {
    type Output = Self;

    /// `a/b + c/d = (ad + cb) / bd`
    fn add(self, rhs: Self) -> Self::Output {
        let num = self.num * &rhs.den + &(rhs.num * &self.den);
        let den = self.den * rhs.den;
        Self::new_unsimplified(num, den).simplify()
    }
}

impl Sub for PolyFraction {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl Mul for PolyFraction {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new_unsimplified(self.num * rhs.num, self.den * rhs.den).simplify()
    }
}

impl Neg for PolyFraction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new_unsimplified(-self.num, self.den)
    }
}

impl From<Poly> for PolyFraction {
    fn from(p: Poly) -> Self {
        Self::from_poly(p)
    }
}

impl From<i64> for PolyFraction {
    fn from(c: i64) -> Self {
        Self::from_poly(Poly::constant(c))
    }
}

impl Default for PolyFraction {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for PolyFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PolyFraction({:?} / {:?})", self.num, self.den)
    }
}

impl fmt::Display for PolyFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "({})/({})", self.num, self.den)
        }
    }
}
