//! Molt Engine Core
//!
//! The deterministic arithmetic behind molt's build-time polymorphism:
//! - Seed derivation from build-timestamp text
//! - The squares mixing transform (counter-based RNG)
//! - Typed value derivation and bounded sampling
//! - Box-Muller normal variates
//!
//! Everything in this crate is a pure function of its arguments. There is no
//! carried generator state: callers supply a seed and a counter, and the same
//! pair always produces the same value, on every machine, in every process,
//! forever. That property is what lets the macro layer resolve every "random"
//! value during compilation and splice plain literals into the caller's code.

pub mod normal;
pub mod sample;
pub mod seed;
pub mod squares;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
