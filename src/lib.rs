//! Step-by-step Gauss-Jordan reduction over exact fields.
//!
//! A [`Matrix`] over any [`Field`] can be brought to reduced row echelon form
//! either all at once with [`Matrix::compute_rref`] or one elementary row
//! operation at a time with [`Matrix::generate_rref_steps`]. Two fields ship
//! with the crate: [`Rational`] numbers and [`PolyFraction`] rational
//! functions with integer coefficients.

pub mod algebra;
pub mod error;
pub mod structures;
pub mod utils;

pub use algebra::field::Field;
pub use algebra::ring::Ring;
pub use error::{Error, Result};

pub use structures::matrix::Matrix;
pub use structures::poly::Poly;
pub use structures::poly_fraction::PolyFraction;
pub use structures::rational::Rational;
pub use structures::rref::{RrefSteps, Step, StepInfo};
pub use utils::gcd;
