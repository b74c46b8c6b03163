//! End-to-end expansion checks through the public facade.
//!
//! This file compiles in its own compiler session, so it gets its own
//! latched seed and its own counter space. Every assertion here must hold
//! for whatever seed that session drew.

use molt::{
    build_seed, junk, rand_bounded, rand_f32, rand_f64, rand_i32, rand_i64, rand_normal,
    rand_u32, rand_u64, random_chance, random_order,
};

const POOL: [u32; 4] = [rand_u32!(), rand_u32!(), rand_u32!(), rand_u32!()];

fn fixed_point() -> u32 {
    rand_u32!()
}

#[test]
fn a_site_is_one_value_forever() {
    let first = fixed_point();
    for _ in 0..100 {
        assert_eq!(fixed_point(), first);
    }
}

#[test]
fn every_draw_comes_off_the_session_engine() {
    // Sites claim counter indices densely from zero, so each drawn word
    // must appear somewhere in the engine's output for this session's
    // seed. 256 indices is far more than this file expands.
    let seed = build_seed!();
    let session: std::collections::HashSet<u32> =
        (0..256).map(|k| molt::engine::squares::squares(k, seed)).collect();
    for word in POOL {
        assert!(session.contains(&word), "{word} is not a session draw");
    }
    assert!(session.contains(&fixed_point()));
}

#[test]
fn wide_draws_compose_adjacent_sites() {
    let seed = build_seed!();
    let wide = rand_u64!();
    let found = (0..255).any(|k| {
        let hi = molt::engine::squares::squares(k, seed);
        let lo = molt::engine::squares::squares(k + 1, seed);
        molt::engine::sample::compose_u64(hi, lo) == wide
    });
    assert!(found, "wide draw is not an adjacent composition: {wide:#x}");
}

#[test]
fn typed_draws_carry_their_types() {
    let signed: i32 = rand_i32!();
    let wide_signed: i64 = rand_i64!();
    let unit_small: f32 = rand_f32!();
    let unit_wide: f64 = rand_f64!();
    let _ = (signed, wide_signed);
    assert!((0.0..=1.0).contains(&unit_small));
    assert!((0.0..=1.0).contains(&unit_wide));
}

#[test]
fn bounded_draw_sizes_an_array() {
    let buf = [0u8; rand_bounded!(7) as usize + 1];
    assert!((1..=7).contains(&buf.len()));
}

#[test]
fn sigma_zero_normal_is_exactly_mu() {
    let pinned: f64 = rand_normal!(0.0, 5.0);
    assert_eq!(pinned, 5.0);
}

#[test]
fn standard_normal_draw_is_sane() {
    let z = rand_normal!(1.0, 0.0);
    assert!(z.is_finite());
    // The log guard caps the radial term just under 38 sigma.
    assert!(z.abs() < 38.0);
}

#[test]
fn normal_accepts_runtime_scale_and_shift() {
    let sigma = 2.0f64;
    let mu = 10.0f64;
    let z = rand_normal!(sigma, mu);
    assert!(z.is_finite());
    assert!((z - 10.0).abs() <= 2.0 * 38.0);
}

#[test]
fn obfuscation_leaves_results_alone() {
    fn checksum(data: &[u8]) -> u32 {
        junk!();
        let mut sum = 0u32;
        for &byte in data {
            junk!();
            sum = sum.wrapping_mul(31).wrapping_add(byte as u32);
        }
        random_chance!(1, sum = sum.rotate_left(1));
        sum
    }

    let plain = |data: &[u8]| {
        let mut sum = 0u32;
        for &byte in data {
            sum = sum.wrapping_mul(31).wrapping_add(byte as u32);
        }
        sum.rotate_left(1)
    };

    let data = b"molt molt molt";
    assert_eq!(checksum(data), plain(data));
}

#[test]
fn ordered_operations_both_observe_their_effects() {
    let mut ledger = Vec::new();
    random_order!(ledger.push("credit"), ledger.push("debit"));
    random_order!(ledger.push("open"), ledger.push("close"));
    assert_eq!(ledger.len(), 4);
    assert!(ledger.contains(&"credit") && ledger.contains(&"debit"));
    assert!(ledger.contains(&"open") && ledger.contains(&"close"));
}

#[test]
fn build_seed_agrees_across_sites() {
    const EARLY: u64 = build_seed!();
    let late = build_seed!();
    assert_eq!(EARLY, late);
}
