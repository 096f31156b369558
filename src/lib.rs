#![allow(non_snake_case)]
//! `faddeeva-ffi` exposes the Faddeeva family of complex error functions
//! ($w$, erf, erfc, erfcx, erfi and Dawson) behind an FFI-safe surface, and
//! records at build time which OS-specific OpenBLAS configuration applies.
//!
//! Each function comes in three forms:
//!
//! - a native form taking and returning [`NativeComplex`] with a relative
//!   error tolerance (see [`faddeeva`]);
//! - a `_shim` form taking the real and imaginary parts separately and
//!   returning a [`ComplexValue`], for callers that cannot express a native
//!   complex type (see [`shim`]);
//! - a real-argument fast path.
//!
//! None of them can fail. Out-of-domain arguments produce NaN components and
//! divergent results produce infinities.
extern crate ndarray;
extern crate statrs;

// link-only; nothing here calls BLAS
#[cfg(feature = "openblas-system")]
extern crate blas_src;

pub mod array;
mod complex;
pub mod ext;
pub mod faddeeva;
pub mod platform;
mod relerr;
pub mod shim;

pub use complex::{ComplexValue, NativeComplex};
pub use ext::{ComplexErrorFunctions, ErrorFunctions, RealErrorFunctions};
pub use relerr::{DEFAULT_RELERR, MACHINE_RELERR, MAX_RELERR};

/// `erf`/`erfc` family of error functions of a real argument
///
/// Uses the [faddeeva](http://ab-initio.mit.edu/wiki/index.php/Faddeeva_Package)
/// port in [errorfunctions](https://crates.io/crates/errorfunctions); the
/// inverses come from [statrs](https://crates.io/crates/statrs)
pub mod gauss {
    pub use crate::faddeeva::{
        erf_re as erf, erfc_re as erfc, erfcx_re as erfcx, erfi_re as erfi, w_im,
        Dawson_re as dawson,
    };
    pub use statrs::function::erf::{erf_inv, erfc_inv};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauss_inverse_round_trips_through_fast_paths() {
        let p = gauss::erfc(0.75);
        // statrs' rational approximation of erfc_inv is good to a few 1e-11
        assert!((gauss::erfc_inv(p) - 0.75).abs() < 1e-10);
        assert!((gauss::erf_inv(gauss::erf(0.3)) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn trait_and_free_functions_agree() {
        let z = NativeComplex::new(0.3, -1.2);
        assert_eq!(z.erfcx_with_relerr(0.), faddeeva::erfcx(z, 0.));
        assert_eq!(2.5f64.dawson(), gauss::dawson(2.5));
    }
}
