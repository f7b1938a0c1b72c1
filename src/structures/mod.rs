pub mod matrix;
pub mod poly;
pub mod poly_fraction;
pub mod rational;
pub mod rref;
