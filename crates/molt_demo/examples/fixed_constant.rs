//! A single bounded constant, fixed until the next rebuild
//!
//! Success criteria:
//! - Prints one number in 0..10000
//! - Re-running the binary never changes it
//! - Recompiling in a different second almost always does
//!
//! Run with: cargo run -p molt_demo --example fixed_constant

fn main() {
    let random_number = molt::rand_bounded!(10_000);
    println!("Random Number: {random_number}");
}
