//! Junk insertion around a real computation
//!
//! Success criteria:
//! - The checksum matches its unobfuscated value on every run
//! - Disassembling two differently-seeded builds shows different filler
//!
//! Run with: cargo run -p molt_demo --example junk_walk

fn checksum(data: &[u8]) -> u32 {
    molt::junk!();
    let mut sum = 0u32;
    for &byte in data {
        molt::junk!();
        molt::random_chance!(1, sum = sum.wrapping_mul(31));
        sum = sum.wrapping_add(byte as u32);
        molt::junk!();
    }
    molt::junk!();
    sum
}

fn main() {
    let data = b"the instruction stream changes, the answer never does";
    molt::random_order!(
        println!("checksum: {:#010x}", checksum(data)),
        println!("seed:     {}", molt::build_seed!())
    );
}
