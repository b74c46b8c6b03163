//! Build-time random value and filler-code expansion
//!
//! Each macro below resolves while the compiler runs and leaves behind
//! plain tokens: a suffixed literal, or the one code shape the build
//! selected. Nothing here survives to run time except those tokens.
//!
//! Determinism model: the hosting compiler process latches one seed on
//! first expansion (from the wall clock rendered as C-style `__DATE__` /
//! `__TIME__` text, or from `MOLT_SEED` when set), and every expansion
//! site claims the next index from a process-wide counter. Same seed,
//! same source, same expansion order: bit-identical output. A rebuild in
//! a different second reshuffles every value and every filler shape.
//!
//! These macros are re-exported through the `molt` facade crate, and the
//! ones that emit runtime calls name that crate absolutely; depend on
//! `molt`, not on this crate directly.

use proc_macro::TokenStream;
use syn::parse::Nothing;
use syn::parse_macro_input;

mod expand;
mod junk;
mod site;

fn finish(result: syn::Result<proc_macro2::TokenStream>) -> TokenStream {
    match result {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// A pseudo-random `u32` literal, fixed per build.
///
/// # Examples
///
/// ```ignore
/// const KEY: u32 = molt::rand_u32!();
/// let mask = molt::rand_u32!(); // a different site, a different value
/// ```
#[proc_macro]
pub fn rand_u32(input: TokenStream) -> TokenStream {
    parse_macro_input!(input as Nothing);
    finish(expand::value_u32())
}

/// A pseudo-random `i32` literal: the same bits as a `u32` draw,
/// reinterpreted.
#[proc_macro]
pub fn rand_i32(input: TokenStream) -> TokenStream {
    parse_macro_input!(input as Nothing);
    finish(expand::value_i32())
}

/// A pseudo-random `u64` literal built from two consecutive draws, first
/// draw in the high half.
#[proc_macro]
pub fn rand_u64(input: TokenStream) -> TokenStream {
    parse_macro_input!(input as Nothing);
    finish(expand::value_u64())
}

/// Signed view of a [`rand_u64!`] draw.
#[proc_macro]
pub fn rand_i64(input: TokenStream) -> TokenStream {
    parse_macro_input!(input as Nothing);
    finish(expand::value_i64())
}

/// A pseudo-random `f32` literal on the unit interval.
#[proc_macro]
pub fn rand_f32(input: TokenStream) -> TokenStream {
    parse_macro_input!(input as Nothing);
    finish(expand::value_f32())
}

/// A pseudo-random `f64` literal on the unit interval, built from two
/// consecutive draws.
#[proc_macro]
pub fn rand_f64(input: TokenStream) -> TokenStream {
    parse_macro_input!(input as Nothing);
    finish(expand::value_f64())
}

/// A pseudo-random `u32` literal below the given bound.
///
/// The bound must be a positive integer literal; the reduction is plain
/// modulo, bias and all.
///
/// # Examples
///
/// ```ignore
/// let dice = molt::rand_bounded!(6); // 0..=5, fixed per build
/// ```
#[proc_macro]
pub fn rand_bounded(input: TokenStream) -> TokenStream {
    let bound = parse_macro_input!(input as syn::LitInt);
    finish(expand::value_bounded(bound))
}

/// A normally distributed `f64`, as a runtime Box-Muller call over two
/// build-fixed unit draws.
///
/// Sigma and mu are ordinary expressions and may be runtime values; only
/// the underlying uniform draws are baked in.
///
/// # Examples
///
/// ```ignore
/// let jitter = molt::rand_normal!(1.0, 0.0);
/// let delay_ms = molt::rand_normal!(2.5, base_delay);
/// ```
#[proc_macro]
pub fn rand_normal(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as expand::NormalInput);
    finish(expand::normal(input))
}

/// One inert filler operation, selected from 21 shapes per build.
///
/// Expands to a block that materializes and discards opaque arithmetic
/// through `black_box`. Program semantics are untouched; the emitted
/// instructions differ from build to build.
///
/// # Examples
///
/// ```ignore
/// fn checksum(data: &[u8]) -> u32 {
///     molt::junk!();
///     let sum = data.iter().map(|&b| b as u32).sum();
///     molt::junk!();
///     sum
/// }
/// ```
#[proc_macro]
pub fn junk(input: TokenStream) -> TokenStream {
    parse_macro_input!(input as Nothing);
    finish(junk::emit())
}

/// Run two independent operations in a per-build order.
///
/// Both expressions execute exactly once; only their relative order is
/// decided by the build. The caller guarantees independence.
///
/// # Examples
///
/// ```ignore
/// molt::random_order!(init_table_a(), init_table_b());
/// ```
#[proc_macro]
pub fn random_order(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as expand::OrderInput);
    finish(expand::ordered(input))
}

/// Run an operation iff this site drew 0 out of `rate`.
///
/// Across many builds the operation appears with frequency about
/// `1/rate`; within one build the outcome is fixed. A rate of 1 always
/// runs the operation.
///
/// # Examples
///
/// ```ignore
/// molt::random_chance!(4, insert_decoy_branch());
/// ```
#[proc_macro]
pub fn random_chance(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as expand::ChanceInput);
    finish(expand::gated(input))
}

/// The session seed as a `u64` literal, for logging or reproduction.
///
/// # Examples
///
/// ```ignore
/// println!("built with seed {}", molt::build_seed!());
/// ```
#[proc_macro]
pub fn build_seed(input: TokenStream) -> TokenStream {
    parse_macro_input!(input as Nothing);
    finish(expand::seed_literal())
}
