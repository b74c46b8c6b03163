//! Box-Muller transform, basic form.

/// Keeps `ln` away from zero when the first unit sample lands exactly on it.
///
/// Smallest positive normal `f64`; shifts the sample by an amount that is
/// invisible everywhere except at zero itself.
const LOG_GUARD: f64 = f64::MIN_POSITIVE;

/// Map two unit-interval samples to one draw from `N(mu, sigma^2)`.
///
/// Basic-form Box-Muller: `sqrt(-2 ln(a)) * cos(2 pi b)`, then scaled by
/// `sigma` and shifted by `mu`. Only the cosine branch is used; the sine
/// companion is discarded, so each draw costs two upstream samples.
///
/// `a == 0.0` is defined (the guard caps the magnitude near 38 sigma) and
/// `a == 1.0` collapses the radial term to zero, returning exactly `mu`.
/// Relies on `ln`/`sqrt`/`cos`, so this is the one engine function that is
/// not `const`.
///
/// # Example
///
/// ```ignore
/// let z = box_muller(0.5, 0.25, 1.0, 0.0);
/// assert!(z.abs() < 1e-15); // cos(pi/2) kills the draw
/// ```
pub fn box_muller(a: f64, b: f64, sigma: f64, mu: f64) -> f64 {
    let radius = (-2.0 * (a + LOG_GUARD).ln()).sqrt();
    radius * (std::f64::consts::TAU * b).cos() * sigma + mu
}
