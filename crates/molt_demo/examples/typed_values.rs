//! One draw of every value shape the macros offer
//!
//! Success criteria:
//! - Each line prints a value of the named type
//! - All lines are stable across runs of one build
//!
//! Run with: cargo run -p molt_demo --example typed_values

fn main() {
    println!("i32    {}", molt::rand_i32!());
    println!("u32    {}", molt::rand_u32!());
    println!("i64    {}", molt::rand_i64!());
    println!("u64    {}", molt::rand_u64!());
    println!("f32    {}", molt::rand_f32!());
    println!("f64    {}", molt::rand_f64!());
    println!("normal {}", molt::rand_normal!(1.0, 0.0));
    println!("seed   {}", molt::build_seed!());
}
