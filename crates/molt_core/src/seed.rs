//! Build-timestamp seed derivation
//!
//! Turns the fixed-layout date and time strings of a compilation session
//! (`"Mmm dd yyyy"` and `"hh:mm:ss"`, the classic C `__DATE__`/`__TIME__`
//! shapes) into a single `u64` seed. Two builds started in different seconds
//! derive different seeds almost certainly, which is the whole trick: the
//! seed is the only thing that changes between builds, and it changes every
//! build.
//!
//! The positional weights below look scrambled: the year contributes its
//! trailing two digits low-digit-first and the clock digits are weighted
//! in ascending powers of ten. That is deliberate, pinned behavior. The derivation
//! only has to be injective enough over real timestamps, and it keeps every
//! derived seed at ~10^7 or above, far from the mixing transform's
//! degenerate small-input region.

use thiserror::Error;

/// Timestamp text the build environment should never have produced.
///
/// These are build-configuration faults: the caller is expected to turn one
/// into a failed build, never into a silent fallback seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("malformed build date: {0}")]
    BadDate(&'static str),
    #[error("malformed build time: {0}")]
    BadTime(&'static str),
}

const fn digit(b: u8) -> Option<u64> {
    if b.is_ascii_digit() {
        Some((b - b'0') as u64)
    } else {
        None
    }
}

const fn month_number(abbr: [u8; 3]) -> Option<u64> {
    match &abbr {
        b"Jan" => Some(1),
        b"Feb" => Some(2),
        b"Mar" => Some(3),
        b"Apr" => Some(4),
        b"May" => Some(5),
        b"Jun" => Some(6),
        b"Jul" => Some(7),
        b"Aug" => Some(8),
        b"Sep" => Some(9),
        b"Oct" => Some(10),
        b"Nov" => Some(11),
        b"Dec" => Some(12),
        _ => None,
    }
}

/// Derive the build seed from `"Mmm dd yyyy"` date text and `"hh:mm:ss"`
/// time text.
///
/// `const`, so the derivation can run inside constant evaluation; a caller
/// that unwraps the `Err` arm in a `const` initializer turns a malformed
/// timestamp directly into a compile failure.
///
/// Only the positions the formula consumes are validated: the three-letter
/// month, the (space-padded) day, the trailing two year digits, and the six
/// clock digits. The century is ignored, as it always was.
pub const fn derive(date: &str, time: &str) -> Result<u64, SeedError> {
    let d = date.as_bytes();
    let t = time.as_bytes();

    if d.len() != 11 {
        return Err(SeedError::BadDate("expected the 11-byte \"Mmm dd yyyy\" layout"));
    }
    if t.len() != 8 {
        return Err(SeedError::BadTime("expected the 8-byte \"hh:mm:ss\" layout"));
    }
    if t[2] != b':' || t[5] != b':' {
        return Err(SeedError::BadTime("expected ':' separators"));
    }

    // Day of month: units at [5], tens at [4] (a space for days 1-9).
    let day_units = match digit(d[5]) {
        Some(v) => v,
        None => return Err(SeedError::BadDate("day units position is not a digit")),
    };
    let day_tens = if d[4] == b' ' {
        0
    } else {
        match digit(d[4]) {
            Some(v) => v,
            None => return Err(SeedError::BadDate("day tens position is not a digit or space")),
        }
    };
    let day = day_units + day_tens * 10;

    let month = match month_number([d[0], d[1], d[2]]) {
        Some(m) => m,
        None => return Err(SeedError::BadDate("unknown month abbreviation")),
    };

    // Trailing two year digits, weighted low-digit-first.
    let year = match (digit(d[9]), digit(d[10])) {
        (Some(penultimate), Some(last)) => penultimate + last * 10,
        _ => return Err(SeedError::BadDate("year positions are not digits")),
    };

    // Clock digits at fixed offsets, weighted in ascending powers of ten.
    let weighted: [(usize, u64); 6] = [
        (0, 1),
        (1, 10),
        (3, 100),
        (4, 1_000),
        (6, 10_000),
        (7, 100_000),
    ];
    let mut time_value = 0u64;
    let mut i = 0;
    while i < weighted.len() {
        let (index, weight) = weighted[i];
        match digit(t[index]) {
            Some(v) => time_value += v * weight,
            None => return Err(SeedError::BadTime("clock position is not a digit")),
        }
        i += 1;
    }

    Ok(time_value + 100_000 * day + 10_000_000 * month + 1_000_000_000 * year)
}
