use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use crate::algebra::field::Field;
use crate::algebra::ring::Ring;
use crate::error::{Error, Result};
use crate::utils::gcd_u128;

/// Exact rational number `numerator / denominator` over `i64`.
///
/// Always kept in lowest terms with a positive denominator, so structural
/// equality is numeric equality. Zero is stored as `0/1`.
///
/// Intermediate products are computed in `i128` and reduced before being
/// narrowed back, so only results that are themselves out of `i64` range
/// overflow.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    num: i64,
    den: i64,
}

#[cfg(feature = "rand")]
impl rand::distributions::Distribution<Rational> for rand::distributions::Standard {
    /// Small values with numerator in `-9..=9` and denominator in `1..=9`.
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Rational {
        Rational::reduce(rng.gen_range(-9..=9), rng.gen_range(1..=9))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rational {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (self.num, self.den).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rational {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (num, den) = <(i64, i64)>::deserialize(deserializer)?;
        Rational::new(num, den).map_err(serde::de::Error::custom)
    }
}

impl Rational {
    /// Create `numerator / denominator` in lowest terms.
    ///
    /// Returns `Error::DivisionByZero` if `denominator` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use rowstep::Rational;
    ///
    /// let r = Rational::new(2, -4).unwrap();
    /// assert_eq!(r.numerator(), -1);
    /// assert_eq!(r.denominator(), 2);
    /// assert_eq!(r.to_string(), "-1/2");
    /// ```
    pub fn new(numerator: i64, denominator: i64) -> Result<Self> {
        if denominator == 0 {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::reduce(numerator as i128, denominator as i128))
    }

    /// The integer `n` as `n/1`.
    pub const fn from_integer(n: i64) -> Self {
        Self { num: n, den: 1 }
    }

    pub const fn zero() -> Self {
        Self::from_integer(0)
    }

    pub const fn one() -> Self {
        Self::from_integer(1)
    }

    pub const fn numerator(&self) -> i64 {
        self.num
    }

    /// Always positive.
    pub const fn denominator(&self) -> i64 {
        self.den
    }

    /// Nearest `f64` to this rational.
    pub fn to_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Normalize sign and divide out the gcd. `den` must be non-zero.
    ///
    /// # Panics
    ///
    /// Panics if the reduced value does not fit in `i64`.
    fn reduce(num: i128, den: i128) -> Self {
        debug_assert!(den != 0, "Rational denominator must be non-zero");
        let (mut num, mut den) = if den < 0 { (-num, -den) } else { (num, den) };
        if num == 0 {
            return Self::zero();
        }
        // Bounded by `den`, so it fits back in i128.
        let g = gcd_u128(num.unsigned_abs(), den.unsigned_abs()) as i128;
        num /= g;
        den /= g;
        Self {
            num: i64::try_from(num).expect("Rational numerator overflows i64"),
            den: i64::try_from(den).expect("Rational denominator overflows i64"),
        }
    }
}

/* ---- Ring / Field ---- */

impl Ring for Rational {
    #[inline]
    fn is_zero(&self) -> bool {
        self.num == 0
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.num == 1 && self.den == 1
    }
}

impl Field for Rational {
    fn inverse(&self) -> Result<Self> {
        if self.num == 0 {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::reduce(self.den as i128, self.num as i128))
    }
}

/* ---- operator impls ---- */

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let num = self.num as i128 * rhs.den as i128 + rhs.num as i128 * self.den as i128;
        let den = self.den as i128 * rhs.den as i128;
        Self::reduce(num, den)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::reduce(
            self.num as i128 * rhs.num as i128,
            self.den as i128 * rhs.den as i128,
        )
    }
}

impl Neg for Rational {
    type Output = Self;

    /// # Panics
    ///
    /// Panics on `i64::MIN / 1`, whose negation does not fit in `i64`.
    fn neg(self) -> Self::Output {
        Self {
            num: self
                .num
                .checked_neg()
                .expect("Rational numerator overflows i64"),
            den: self.den,
        }
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<i32> for Rational {
    fn from(value: i32) -> Self {
        Self::from_integer(value as i64)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.num, self.den)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}


#[cfg(all(test, feature = "rand"))]
mod rand_tests {
    use super::*;
    use crate::utils::gcd;
    use rand::Rng;

    #[test]
    fn random_is_reduced() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let r: Rational = rng.gen();
            assert!(r.denominator() > 0 && r.denominator() <= 9);
            assert!(r.numerator().abs() <= 9);
            assert_eq!(gcd(r.numerator(), r.denominator()), 1);
        }
    }

    #[test]
    fn random_distribution() {
        // Generate many random values and check we get variety
        let mut rng = rand::thread_rng();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(rng.gen::<Rational>());
        }
        assert!(seen.len() > 20);
    }
}
