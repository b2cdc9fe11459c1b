//! The escape-time kernel.
use num::Complex;

/// Beyond this modulus the recurrence is guaranteed to run off to
/// infinity.
const ESCAPE_RADIUS: f64 = 2.0;

/// This is our classic iterator function.  Starting from `z = point`,
/// it returns the iteration at which `|z|` first exceeds two, or
/// `max_iterations - 1` if that never happened.  That last value
/// doubles as the "presumed inside the set" sentinel, so a point that
/// would have escaped on the very last iteration is reported as
/// interior; it is never tested at that index.
///
/// `max_iterations` must be at least 1.
pub fn escape(point: Complex<f64>, max_iterations: usize) -> usize {
    debug_assert!(max_iterations > 0);
    let limit = max_iterations.saturating_sub(1);
    let mut z = point;
    for i in 0..limit {
        if z.norm() > ESCAPE_RADIUS {
            return i;
        }
        z = z * z + point;
    }
    limit
}
