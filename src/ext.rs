//! Method-style access to the error functions for `f64`, `f32` and their
//! complex counterparts.
//!
//! Single precision values are widened, evaluated in double precision and
//! rounded back.
use crate::complex::{cmplx, NativeComplex};
use crate::faddeeva;
use crate::relerr::DEFAULT_RELERR;
use crate::shim::NativeFn;
use num::complex::{Complex32, Complex64};

/// The `erf` family, evaluated element by element.
pub trait ErrorFunctions: Copy {
    fn erf(self) -> Self;
    fn erfc(self) -> Self;
    /// $e^{x^2} \mathrm{erfc}(x)$
    fn erfcx(self) -> Self;
    /// $-i\,\mathrm{erf}(ix)$
    fn erfi(self) -> Self;
    /// $\frac{\sqrt{\pi}}{2} e^{-x^2} \mathrm{erfi}(x)$
    fn dawson(self) -> Self;
}

/// Real-only extras.
pub trait RealErrorFunctions: ErrorFunctions {
    /// $\mathrm{Im}\,w(x)$
    fn faddeeva_w_im(self) -> Self;
}

/// Complex-only extras: the Faddeeva function itself and explicit
/// tolerances. The plain [`ErrorFunctions`] methods use [`DEFAULT_RELERR`].
pub trait ComplexErrorFunctions: ErrorFunctions {
    type Real;

    fn faddeeva_w(self) -> Self;
    fn faddeeva_w_with_relerr(self, relerr: Self::Real) -> Self;
    fn erf_with_relerr(self, relerr: Self::Real) -> Self;
    fn erfc_with_relerr(self, relerr: Self::Real) -> Self;
    fn erfcx_with_relerr(self, relerr: Self::Real) -> Self;
    fn erfi_with_relerr(self, relerr: Self::Real) -> Self;
    fn dawson_with_relerr(self, relerr: Self::Real) -> Self;
}

impl ErrorFunctions for f64 {
    fn erf(self) -> Self {
        faddeeva::erf_re(self)
    }
    fn erfc(self) -> Self {
        faddeeva::erfc_re(self)
    }
    fn erfcx(self) -> Self {
        faddeeva::erfcx_re(self)
    }
    fn erfi(self) -> Self {
        faddeeva::erfi_re(self)
    }
    fn dawson(self) -> Self {
        faddeeva::Dawson_re(self)
    }
}

impl RealErrorFunctions for f64 {
    fn faddeeva_w_im(self) -> Self {
        faddeeva::w_im(self)
    }
}

impl ErrorFunctions for f32 {
    fn erf(self) -> Self {
        faddeeva::erf_re(self.into()) as f32
    }
    fn erfc(self) -> Self {
        faddeeva::erfc_re(self.into()) as f32
    }
    fn erfcx(self) -> Self {
        faddeeva::erfcx_re(self.into()) as f32
    }
    fn erfi(self) -> Self {
        faddeeva::erfi_re(self.into()) as f32
    }
    fn dawson(self) -> Self {
        faddeeva::Dawson_re(self.into()) as f32
    }
}

impl RealErrorFunctions for f32 {
    fn faddeeva_w_im(self) -> Self {
        faddeeva::w_im(self.into()) as f32
    }
}

trait Widen: Copy {
    type Real: Copy;
    fn eval(self, f: NativeFn, relerr: Self::Real) -> Self;
    fn default_relerr() -> Self::Real;
}

impl Widen for Complex64 {
    type Real = f64;
    #[inline]
    fn eval(self, f: NativeFn, relerr: f64) -> Self {
        f(self, relerr)
    }
    fn default_relerr() -> f64 {
        DEFAULT_RELERR
    }
}

impl Widen for Complex32 {
    type Real = f32;
    #[inline]
    fn eval(self, f: NativeFn, relerr: f32) -> Self {
        let out: NativeComplex = f(cmplx(self.re.into(), self.im.into()), relerr.into());
        // component-wise narrowing, same as the widening above
        Complex32 {
            re: out.re as f32,
            im: out.im as f32,
        }
    }
    fn default_relerr() -> f32 {
        DEFAULT_RELERR as f32
    }
}

macro_rules! impl_complex_error_functions {
    ($($t:ty => $real:ty),*) => {$(
        impl ErrorFunctions for $t {
            fn erf(self) -> Self {
                self.erf_with_relerr(<$t as Widen>::default_relerr())
            }
            fn erfc(self) -> Self {
                self.erfc_with_relerr(<$t as Widen>::default_relerr())
            }
            fn erfcx(self) -> Self {
                self.erfcx_with_relerr(<$t as Widen>::default_relerr())
            }
            fn erfi(self) -> Self {
                self.erfi_with_relerr(<$t as Widen>::default_relerr())
            }
            fn dawson(self) -> Self {
                self.dawson_with_relerr(<$t as Widen>::default_relerr())
            }
        }

        impl ComplexErrorFunctions for $t {
            type Real = $real;

            fn faddeeva_w(self) -> Self {
                self.faddeeva_w_with_relerr(<$t as Widen>::default_relerr())
            }
            fn faddeeva_w_with_relerr(self, relerr: Self::Real) -> Self {
                self.eval(faddeeva::w, relerr)
            }
            fn erf_with_relerr(self, relerr: Self::Real) -> Self {
                self.eval(faddeeva::erf, relerr)
            }
            fn erfc_with_relerr(self, relerr: Self::Real) -> Self {
                self.eval(faddeeva::erfc, relerr)
            }
            fn erfcx_with_relerr(self, relerr: Self::Real) -> Self {
                self.eval(faddeeva::erfcx, relerr)
            }
            fn erfi_with_relerr(self, relerr: Self::Real) -> Self {
                self.eval(faddeeva::erfi, relerr)
            }
            fn dawson_with_relerr(self, relerr: Self::Real) -> Self {
                self.eval(faddeeva::Dawson, relerr)
            }
        }
    )*};
}

impl_complex_error_functions!(Complex64 => f64, Complex32 => f32);
