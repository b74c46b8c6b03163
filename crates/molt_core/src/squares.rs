//! Squares mixing transform
//!
//! A counter-based generator in the style of Widynski's "Squares" method
//! (<https://arxiv.org/abs/2004.06278>): the output is a pure function of a
//! `(counter, seed)` pair, with no state carried between calls. Ordinary
//! stateful generators cannot run ahead of the program that hosts them; a
//! counter-based one can, which is what allows every draw to be resolved
//! while the program is still being compiled.

/// `x * x`, wrapping.
const fn sq(x: u64) -> u64 {
    x.wrapping_mul(x)
}

/// `x * x + x`, wrapping.
const fn sm(x: u64) -> u64 {
    sq(x).wrapping_add(x)
}

/// Swap the high and low 32-bit halves.
const fn sh(x: u64) -> u64 {
    x.rotate_left(32)
}

/// Mix a `(count, seed)` pair into one pseudo-random `u32`.
///
/// Two rounds of square-and-swap over `cs = (count + 1) * seed`, then the
/// high 32 bits of a final squared sum. All arithmetic wraps mod 2^64.
///
/// The function is total and involves nothing but integer arithmetic, so it
/// is `const` and bit-identical across compilers, targets, and builds. That
/// determinism is load-bearing: the macro layer calls this during expansion
/// and the resulting literal must be reproducible from `(count, seed)` alone.
///
/// Edge behavior, documented rather than rejected:
/// - `count == u64::MAX` wraps `count + 1` to zero, so `cs == 0` and the
///   output is 0.
/// - `seed == 0` forces `cs == 0` at every counter; the whole stream is 0.
/// - Tiny products (`cs` below ~2^16) keep the intermediate squares inside
///   64 bits, where the half-swap feeds zeros into the second round and the
///   output collapses to 0. Timestamp-derived seeds are at least ~10^7 and
///   never get near that region; only a hand-picked override seed can.
pub const fn squares(count: u64, seed: u64) -> u32 {
    let cs = count.wrapping_add(1).wrapping_mul(seed);
    let round1 = sq(sh(sm(cs)));
    let round2 = sq(sh(round1.wrapping_add(cs).wrapping_add(seed)));
    (round2.wrapping_add(cs) >> 32) as u32
}
