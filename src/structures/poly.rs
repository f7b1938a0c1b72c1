use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use crate::utils::gcd_u128;

/// Polynomial over the integers.
///
/// Coefficients are stored in ascending order of degree:
/// `coeffs[i]` is the coefficient of `x^i`.
///
/// There is always at least one coefficient; the zero polynomial is `[0]`.
/// Unlike a fully normalized representation, high-degree zero coefficients are
/// only trimmed by addition, and equality compares the stored coefficients
/// as they are: `[1, 0] != [1]`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Poly {
    coeffs: Vec<i64>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Poly {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.coeffs.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Poly {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let coeffs = Vec::<i64>::deserialize(deserializer)?;
        Ok(Self::new(coeffs))
    }
}

impl Poly {
    /// Create a polynomial from coefficients in ascending order.
    ///
    /// `coeffs[i]` is the coefficient of `x^i`. The coefficients are kept
    /// as given; an empty vector becomes the zero polynomial `[0]`.
    ///
    /// # Example
    ///
    /// ```
    /// use rowstep::Poly;
    ///
    /// // 3 + 2x + 5x^2
    /// let p = Poly::new(vec![3, 2, 5]);
    /// assert_eq!(p.degree(), 2);
    /// assert_eq!(p.to_string(), "5x^2 + 2x^1 + 3x^0");
    /// ```
    pub fn new(coeffs: Vec<i64>) -> Self {
        if coeffs.is_empty() {
            return Self::zero();
        }
        Self { coeffs }
    }

    /// The zero polynomial `[0]`.
    pub fn zero() -> Self {
        Self { coeffs: vec![0] }
    }

    /// The constant polynomial `[1]`.
    pub fn one() -> Self {
        Self::constant(1)
    }

    pub fn constant(c: i64) -> Self {
        Self { coeffs: vec![c] }
    }

    /// The polynomial `x`.
    pub fn x() -> Self {
        Self { coeffs: vec![0, 1] }
    }

    /// Create a monomial `c * x^n`.
    ///
    /// # Example
    ///
    /// ```
    /// use rowstep::Poly;
    ///
    /// let m = Poly::monomial(3, 2); // 3x^2
    /// assert_eq!(m.coefficients(), &[0, 0, 3]);
    /// assert_eq!(m.eval(2), 12);
    /// ```
    pub fn monomial(c: i64, n: usize) -> Self {
        let mut coeffs = vec![0; n + 1];
        coeffs[n] = c;
        Self { coeffs }
    }

    /// Whether every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0)
    }

    /// Whether this is exactly `[1]`.
    pub fn is_one(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0] == 1
    }

    /// Index of the highest stored coefficient, which may itself be zero.
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Get the coefficient of `x^i`.
    ///
    /// Returns zero if `i` is beyond the stored coefficients.
    pub fn coeff(&self, i: usize) -> i64 {
        self.coeffs.get(i).copied().unwrap_or(0)
    }

    /// Get a slice of all coefficients.
    pub fn coefficients(&self) -> &[i64] {
        &self.coeffs
    }

    /// Evaluate the polynomial at an integer using Horner's method.
    pub fn eval(&self, x: i64) -> i64 {
        // p(x) = a_0 + x(a_1 + x(a_2 + ... + x*a_n))
        self.coeffs.iter().rev().fold(0, |acc, &c| acc * x + c)
    }

    /// The largest monomial `a·x^b` dividing every term, as `(a, b)`.
    ///
    /// `a` is the gcd of all coefficient magnitudes and `b` the lowest degree
    /// with a non-zero coefficient. Both are `0` for the zero polynomial. `a`
    /// is unsigned because `[i64::MIN]` has content `2^63`.
    ///
    /// # Example
    ///
    /// ```
    /// use rowstep::Poly;
    ///
    /// // 6x^2 + 3x^3 + 6x^4 = 3x^2 (2 + x + 2x^2)
    /// let p = Poly::new(vec![0, 0, 6, 3, 6]);
    /// assert_eq!(p.common_factor(), (3, 2));
    /// assert_eq!(Poly::zero().common_factor(), (0, 0));
    /// ```
    pub fn common_factor(&self) -> (u64, usize) {
        let power = self.coeffs.iter().position(|&c| c != 0).unwrap_or(0);
        let scalar = self
            .coeffs
            .iter()
            .fold(0, |acc, &c| gcd_u128(acc, c.unsigned_abs().into()));
        // Every coefficient magnitude fits in u64, and so does their gcd.
        (scalar as u64, power)
    }

    /// Divide every coefficient by `divisor`.
    ///
    /// The caller must ensure `divisor` is non-zero and divides every
    /// coefficient exactly.
    pub fn div_scalar(&self, divisor: i64) -> Self {
        debug_assert!(divisor != 0, "division of a polynomial by zero");
        debug_assert!(
            self.coeffs.iter().all(|&c| c % divisor == 0),
            "{divisor} does not divide every coefficient"
        );
        Self {
            coeffs: self.coeffs.iter().map(|&c| c / divisor).collect(),
        }
    }

    /// Divide by `x^power`, dropping the lowest `power` coefficients.
    ///
    /// The caller must ensure `power` does not exceed the lowest non-zero
    /// degree, so only zero coefficients are dropped.
    pub fn div_power(&self, power: usize) -> Self {
        debug_assert!(
            self.coeffs.iter().take(power).all(|&c| c == 0),
            "x^{power} does not divide the polynomial"
        );
        Self::new(self.coeffs.iter().skip(power).copied().collect())
    }
}

/* ---- Operator implementations ---- */

impl Add for Poly {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self + &rhs
    }
}

impl Add<&Poly> for Poly {
    type Output = Self;

    /// Pointwise sum, then trailing zeros are trimmed down to one coefficient.
    fn add(self, rhs: &Poly) -> Self::Output {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let mut coeffs: Vec<i64> = (0..len).map(|i| self.coeff(i) + rhs.coeff(i)).collect();
        while coeffs.len() > 1 && coeffs.last() == Some(&0) {
            coeffs.pop();
        }
        Self { coeffs }
    }
}

impl Neg for Poly {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            coeffs: self.coeffs.into_iter().map(|c| -c).collect(),
        }
    }
}

impl Sub for Poly {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl Mul for Poly {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self * &rhs
    }
}

impl Mul<&Poly> for Poly {
    type Output = Self;

    /// Schoolbook convolution; the result has `len(a) + len(b) - 1`
    /// coefficients and is not trimmed.
    fn mul(self, rhs: &Poly) -> Self::Output {
        let mut coeffs = vec![0; self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        Self { coeffs }
    }
}

impl Mul<i64> for Poly {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        Self {
            coeffs: self.coeffs.into_iter().map(|c| c * rhs).collect(),
        }
    }
}

impl From<i64> for Poly {
    fn from(c: i64) -> Self {
        Self::constant(c)
    }
}

impl Default for Poly {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Poly{:?}", self.coeffs)
    }
}

/// Descending-degree terms `cx^i`, skipping zero coefficients and joined by
/// `" + "`. A single stored coefficient renders bare.
impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coeffs.len() == 1 {
            return write!(f, "{}", self.coeffs[0]);
        }
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (i, &c) in self.coeffs.iter().enumerate().rev() {
            if c == 0 {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            write!(f, "{}x^{}", c, i)?;
        }
        Ok(())
    }
}
