#![allow(non_snake_case)]
//! Native-form entry points of the Faddeeva family.
//!
//! The series and continued-fraction work is done by the
//! [errorfunctions](https://crates.io/crates/errorfunctions) port of the
//! [Faddeeva package](http://ab-initio.mit.edu/wiki/index.php/Faddeeva_Package).
//! This module only normalises the tolerance. The real-argument fast paths
//! forward to the package's own real-only routines.
use crate::complex::NativeComplex;
use crate::relerr::normalize;
use errorfunctions::RealErrorFunctions;

/// the Faddeeva function $w(z) = e^{-z^2} \mathrm{erfc}(-iz)$
pub fn w(z: NativeComplex, relerr: f64) -> NativeComplex {
    errorfunctions::w_with_relerror(z, normalize(relerr))
}

/// the scaled complementary error function $\mathrm{erfcx}(z) = e^{z^2} \mathrm{erfc}(z)$
pub fn erfcx(z: NativeComplex, relerr: f64) -> NativeComplex {
    errorfunctions::erfcx_with_relerror(z, normalize(relerr))
}

/// the error function $\mathrm{erf}(z)$
pub fn erf(z: NativeComplex, relerr: f64) -> NativeComplex {
    errorfunctions::erf_with_relerror(z, normalize(relerr))
}

/// the imaginary error function $\mathrm{erfi}(z) = -i\,\mathrm{erf}(iz)$
pub fn erfi(z: NativeComplex, relerr: f64) -> NativeComplex {
    errorfunctions::erfi_with_relerror(z, normalize(relerr))
}

/// the complimentary error function $\mathrm{erfc}(z) = 1 - \mathrm{erf}(z)$
pub fn erfc(z: NativeComplex, relerr: f64) -> NativeComplex {
    errorfunctions::erfc_with_relerror(z, normalize(relerr))
}

/// the Dawson function $\frac{\sqrt{\pi}}{2} e^{-z^2} \mathrm{erfi}(z)$
pub fn Dawson(z: NativeComplex, relerr: f64) -> NativeComplex {
    errorfunctions::dawson_with_relerror(z, normalize(relerr))
}

/// $\mathrm{Im}\,w(x)$ for real $x$; the real part is just $e^{-x^2}$
pub fn w_im(x: f64) -> f64 {
    <f64 as RealErrorFunctions>::w_im(x)
}

/// $\mathrm{erfcx}(x)$ for real $x$, finite for every finite $x \ge 0$
pub fn erfcx_re(x: f64) -> f64 {
    <f64 as RealErrorFunctions>::erfcx(x)
}

/// $\mathrm{erf}(x)$ for real $x$
pub fn erf_re(x: f64) -> f64 {
    <f64 as RealErrorFunctions>::erf(x)
}

/// $\mathrm{erfi}(x)$ for real $x$
pub fn erfi_re(x: f64) -> f64 {
    <f64 as RealErrorFunctions>::erfi(x)
}

/// $\mathrm{erfc}(x)$ for real $x$
pub fn erfc_re(x: f64) -> f64 {
    <f64 as RealErrorFunctions>::erfc(x)
}

/// the Dawson integral for real $x$
pub fn Dawson_re(x: f64) -> f64 {
    <f64 as RealErrorFunctions>::dawson(x)
}
