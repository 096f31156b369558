//! Relative error tolerances accepted by the complex entry points.

/// Tolerance used when the caller does not pick one.
pub const DEFAULT_RELERR: f64 = 1e-6;

/// Smallest tolerance the backend honours. Anything at or below it (and
/// zero, negative or NaN requests) means "full double precision".
pub const MACHINE_RELERR: f64 = f64::EPSILON;

/// Loosest tolerance the backend honours; coarser requests are tightened.
pub const MAX_RELERR: f64 = 0.1;

/// Maps a caller-supplied `relerr` onto a value that is safe to hand to the
/// backend. A request of zero must never reach the series as a literal zero.
#[inline]
pub(crate) fn normalize(relerr: f64) -> f64 {
    // written so that NaN also falls through to the floor
    if relerr > MACHINE_RELERR {
        relerr.min(MAX_RELERR)
    } else {
        tracing::trace!(relerr, floor = MACHINE_RELERR, "relerr clamped to machine precision");
        MACHINE_RELERR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_through_reasonable_requests() {
        assert_eq!(normalize(DEFAULT_RELERR), DEFAULT_RELERR);
        assert_eq!(normalize(0.05), 0.05);
    }

    #[test]
    fn coarse_requests_are_tightened() {
        assert_eq!(normalize(0.5), MAX_RELERR);
        assert_eq!(normalize(f64::INFINITY), MAX_RELERR);
    }

    #[test]
    fn degenerate_requests_use_machine_precision() {
        for relerr in [0., -0., -1., f64::NAN, f64::NEG_INFINITY, f64::EPSILON / 2.] {
            assert_eq!(normalize(relerr), MACHINE_RELERR, "relerr = {}", relerr);
        }
    }
}
