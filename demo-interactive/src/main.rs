//! Interactive Vector Exercise Demo
//!
//! Prints a fixed demonstration of the vector operations, then prompts on
//! stdin for a vector and a pair and echoes the results. Malformed input
//! is caught and reported as a printed message; the process still exits
//! normally.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package demo-interactive
//! ```
//!
//! Set `RUST_LOG=debug` to see validation and parse events.

use std::cmp::Ordering;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;
use vector_lab_core::{Pair, Vec3};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    demonstration_sequence();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    println!("\nEnter a vector:");
    match Vec3::read_from(&mut input, &mut output) {
        Ok(v) => {
            println!("You entered: {v}");
            println!("Its length is {}", v.length());
        }
        Err(err) => {
            tracing::debug!(%err, "vector prompt failed");
            println!("Input error: {err}");
        }
    }

    println!("\nEnter a pair:");
    match Pair::read_from(&mut input, &mut output) {
        Ok(pair) => {
            println!("You entered: {pair}");
            println!("Its power is {}", pair.power());
        }
        Err(err) => {
            tracing::debug!(%err, "pair prompt failed");
            println!("Input error: {err}");
        }
    }

    let _ = output.flush();
}

/// The fixed demonstration sequence over known operands.
fn demonstration_sequence() {
    let v1 = Vec3::new(1.0, 2.0, 3.0).unwrap();
    let v2 = Vec3::new(4.0, 5.0, 6.0).unwrap();

    println!("Vectors:");
    println!("  v1 = {v1}");
    println!("  v2 = {v2}");
    println!("Sum:            {}", v1 + v2);
    println!("Difference:     {}", v1 - v2);
    println!("Dot product:    {}", v1.dot(&v2));
    println!("Scaled (v1*2):  {}", v1.scale(2.0).unwrap());
    println!("Lengths:        |v1| = {}, |v2| = {}", v1.length(), v2.length());
    println!("Equal:          {}", v1 == v2);

    match v1.compare_length(&v2) {
        Ordering::Greater => println!("Comparison:     v1 is longer than v2"),
        Ordering::Less => println!("Comparison:     v1 is shorter than v2"),
        Ordering::Equal => println!("Comparison:     v1 and v2 have equal length"),
    }
}
