//! Molt Build-Time Randomness
//!
//! Per-build random constants and junk-code expansion with zero runtime
//! entropy
//!
//! ## Architecture
//!
//! - **Engine:** pure `const fn` arithmetic (Widynski squares, typed
//!   derivation, Box-Muller), re-exported here as [`engine`]
//! - **Macros:** compiler-resolved expansion sites; each claims a unique
//!   counter and bakes its draw into the token stream
//! - **Session:** one seed per compiler process, derived from the build
//!   timestamp or pinned with `MOLT_SEED` for reproducible binaries
//!
//! Every value a macro produces is a literal by the time the optimizer
//! sees it. Two builds in different seconds disagree at every expansion
//! site; one build agrees with itself forever.
//!
//! ```ignore
//! use molt::{junk, rand_bounded, rand_u32};
//!
//! const NOISE: u32 = rand_u32!();
//!
//! fn rotate(value: u32) -> u32 {
//!     junk!();
//!     value.rotate_left(rand_bounded!(31) + 1)
//! }
//! ```

pub use molt_core as engine;

pub use molt_macros::{
    build_seed, junk, rand_bounded, rand_f32, rand_f64, rand_i32, rand_i64, rand_normal,
    rand_u32, rand_u64, random_chance, random_order,
};
