//! Demonstration of the matriz operation set.
//!
//! Run with: `cargo run --example showcase`

use matriz::prelude::*;
use rand::Rng;

fn main() -> Result<()> {
    println!("=== Matrix Calculator Demo ===");

    println!("\n1. Creating matrices:");
    let a = Matrix::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3)?;
    let b = Matrix::from_slice(&[7.0, 8.0, 9.0, 10.0, 11.0, 12.0], 2, 3)?;

    println!("Matrix A:");
    print!("{a}");
    println!("Matrix B:");
    print!("{b}");

    println!("\n2. Matrix addition A + B:");
    let sum = a.add(&b)?;
    print!("{sum}");

    println!("\n3. Transpose of A:");
    let a_transposed = a.transpose();
    print!("{a_transposed}");

    println!("\n4. Matrix multiplication:");
    let c = Matrix::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2)?;
    println!("Matrix C (3x2):");
    print!("{c}");

    let product = a.matmul(&c)?;
    println!("Matrix A × C:");
    print!("{product}");

    println!("\n5. Matrix from array:");
    let arr = [1.5, 2.5, 3.5, 4.5, 5.5, 6.5];
    let d = Matrix::from_slice(&arr, 2, 3)?;
    print!("{d}");

    println!("\n6. Truncated rendering of a large matrix:");
    let mut rng = rand::thread_rng();
    let mut large = Matrix::zeros(15, 12)?;
    for i in 0..large.n_rows() {
        for j in 0..large.n_cols() {
            large.set(i, j, rng.gen_range(-10.0..10.0));
        }
    }
    print!("{large}");

    println!("\n7. Error handling demonstration:");
    match Matrix::zeros(0, 5) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("Caught expected error: {e}"),
    }

    println!("\n8. Releasing a matrix:");
    let mut released = d.clone();
    released.release();
    print!("{released}");

    println!("\n=== Demo completed successfully! ===");
    Ok(())
}
