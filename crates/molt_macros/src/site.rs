//! Per-session draw bookkeeping.
//!
//! The compiler process hosting this macro library is the unit of
//! determinism: one seed, latched on first use, and one monotone counter
//! handing every expansion site its own draw index. Restarting the build in
//! a different second moves the seed; nothing else does.

use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicU64, Ordering};

use molt_core::{sample, squares};

/// Environment variable that pins the session seed for reproducible builds.
/// Accepts decimal or `0x`-prefixed hex.
pub const SEED_ENV: &str = "MOLT_SEED";

/// Next unclaimed draw index for this session. Indices are claimed in
/// expansion order and never reused.
static NEXT_SITE: AtomicU64 = AtomicU64::new(0);

/// Session seed, resolved once. The error arm keeps the message so every
/// expansion can report it at its own span instead of panicking the
/// compiler.
static BUILD_SEED: Lazy<Result<u64, String>> = Lazy::new(resolve_seed);

fn resolve_seed() -> Result<u64, String> {
    if let Ok(text) = std::env::var(SEED_ENV) {
        return parse_override(&text);
    }
    // Render the wall clock into the same fixed text layouts a C compiler
    // bakes into __DATE__ / __TIME__, then run the positional-weight
    // derivation over the text. The round trip through text is deliberate:
    // the seed is a function of the timestamp's printed form.
    let now = chrono::Local::now();
    let date = now.format("%b %e %Y").to_string();
    let time = now.format("%H:%M:%S").to_string();
    molt_core::seed::derive(&date, &time).map_err(|err| err.to_string())
}

fn parse_override(text: &str) -> Result<u64, String> {
    let text = text.trim();
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => text.parse::<u64>(),
    };
    parsed.map_err(|_| {
        format!("{SEED_ENV} must be a u64, decimal or 0x-prefixed hex; got {text:?}")
    })
}

/// Claim `n` consecutive draw indices and return the first. Multi-index
/// claims stay adjacent even if expansions ever interleave.
fn claim(n: u64) -> u64 {
    NEXT_SITE.fetch_add(n, Ordering::Relaxed)
}

/// The latched session seed.
pub fn seed() -> Result<u64, String> {
    BUILD_SEED.clone()
}

/// Claim one index and return its raw engine output.
pub fn draw() -> Result<u32, String> {
    let seed = seed()?;
    Ok(squares::squares(claim(1), seed))
}

/// Claim one index and reduce its draw below `bound`.
pub fn draw_bounded(bound: u32) -> Result<u32, String> {
    Ok(sample::bounded(draw()?, bound))
}

/// Claim two consecutive indices and concatenate their draws, first index
/// in the high half.
pub fn draw_u64() -> Result<u64, String> {
    let seed = seed()?;
    let base = claim(2);
    let hi = squares::squares(base, seed);
    let lo = squares::squares(base + 1, seed);
    Ok(sample::compose_u64(hi, lo))
}

/// Two consecutive indices folded onto the unit interval.
pub fn draw_f64() -> Result<f64, String> {
    Ok(sample::to_f64(draw_u64()?))
}
