//! Step-by-step Row Reduction
//!
//! This example reduces two matrices to reduced row echelon form and prints
//! every elementary row operation along the way:
//! - a 3×3 matrix of rational numbers
//! - a 2×2 matrix of polynomial fractions in `x`
//!
//! Run with: cargo run --example rref_steps
//! Set `RUST_LOG=rowstep=trace` to see the engine's own events.

use rowstep::{Field, Matrix, Poly, PolyFraction, Rational, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    println!("=== Step-by-step RREF ===\n");

    rational_matrix()?;
    poly_fraction_matrix()?;

    Ok(())
}

/// Reduce a rational matrix that needs a row swap
fn rational_matrix() -> Result<()> {
    println!("--- Rational entries ---\n");

    let m = Matrix::new(
        3,
        3,
        vec![
            vec![Rational::from(0), Rational::from(2), Rational::from(4)],
            vec![Rational::from(1), Rational::from(1), Rational::from(1)],
            vec![Rational::from(2), Rational::new(1, 2)?, Rational::from(3)],
        ],
    )?;

    print_steps(&m);
    Ok(())
}

/// Reduce a matrix over the rational functions in `x`
fn poly_fraction_matrix() -> Result<()> {
    println!("--- Polynomial fraction entries ---\n");

    let x = PolyFraction::from(Poly::x());
    let m = Matrix::new(
        2,
        2,
        vec![
            vec![PolyFraction::from(2), x.clone()],
            vec![PolyFraction::from(0), x],
        ],
    )?;

    print_steps(&m);
    Ok(())
}

fn print_steps<T: Field>(m: &Matrix<T>) {
    println!("Start:\n{}", m);

    let mut count = 0;
    for step in m.generate_rref_steps() {
        count += 1;
        println!("{}. {}", count, step.info);
        println!("{}", step.result);
    }

    println!("{} steps, reduced form:\n{}", count, m.compute_rref());
}
