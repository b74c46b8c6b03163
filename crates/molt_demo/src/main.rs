//! Molt Demo Runtime
//!
//! Minimal binary that exercises every macro and prints this build's
//! fingerprint

use anyhow::Result;
use serde::Serialize;
use tracing_subscriber;

/// Every value this build baked in, in one printable record.
#[derive(Serialize)]
struct BuildFingerprint {
    seed: u64,
    word: u32,
    wide: u64,
    signed: i32,
    signed_wide: i64,
    unit_f32: f32,
    unit_f64: f64,
    gaussian: f64,
    dice: u32,
}

fn fingerprint() -> BuildFingerprint {
    BuildFingerprint {
        seed: molt::build_seed!(),
        word: molt::rand_u32!(),
        wide: molt::rand_u64!(),
        signed: molt::rand_i32!(),
        signed_wide: molt::rand_i64!(),
        unit_f32: molt::rand_f32!(),
        unit_f64: molt::rand_f64!(),
        gaussian: molt::rand_normal!(1.0, 0.0),
        dice: molt::rand_bounded!(6),
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    tracing::info!("Molt demo v{}", molt::engine::VERSION);

    molt::junk!();
    molt::random_order!(
        tracing::info!("engine: counter-based squares, resolved at expansion time"),
        tracing::info!("session: one latched seed per compile")
    );
    molt::random_chance!(
        3,
        tracing::info!("this line survives in roughly one build out of three")
    );

    let fingerprint = fingerprint();
    println!("{}", serde_json::to_string_pretty(&fingerprint)?);

    tracing::info!(
        "rebuild to reshuffle, or pin with MOLT_SEED={} to reproduce",
        fingerprint.seed
    );
    Ok(())
}
