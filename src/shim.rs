#![allow(non_snake_case)]
//! C-callable entry points.
//!
//! Every function `F` in the family is exported three ways:
//!
//! - `Faddeeva_F(z, relerr)` takes and returns the native complex type. Its
//!   layout matches C99 `double complex` and Windows `_Dcomplex`.
//! - `Faddeeva_F_shim(real, imag, relerr)` takes the two components and
//!   returns a [`ComplexValue`], for callers that cannot name a complex type.
//! - a real-argument fast path, `Faddeeva_F_re(x)`, except for `w` which
//!   exports `Faddeeva_w_im(x)`.
//!
//! The declarations live in `include/faddeeva_ffi.h`.
use crate::complex::{cmplx, ComplexValue, NativeComplex};
use crate::faddeeva;

/// Signature shared by the native-form functions.
pub type NativeFn = fn(NativeComplex, f64) -> NativeComplex;

/// Builds the argument from its components, evaluates `f` and hands the
/// result back as a [`ComplexValue`].
///
/// Produces bit-for-bit the same result as calling `f` directly.
#[inline]
pub fn shim(f: NativeFn, real: f64, imag: f64, relerr: f64) -> ComplexValue {
    ComplexValue::from(f(cmplx(real, imag), relerr))
}

macro_rules! export_faddeeva {
    ($($func:ident => $real_path:ident),* $(,)?) => {
        paste::paste! {
            $(
                #[no_mangle]
                pub extern "C" fn [<Faddeeva_ $func>](z: NativeComplex, relerr: f64) -> NativeComplex {
                    faddeeva::$func(z, relerr)
                }

                #[no_mangle]
                pub extern "C" fn [<Faddeeva_ $func _shim>](real: f64, imag: f64, relerr: f64) -> ComplexValue {
                    shim(faddeeva::$func, real, imag, relerr)
                }

                #[no_mangle]
                pub extern "C" fn [<Faddeeva_ $real_path>](x: f64) -> f64 {
                    faddeeva::$real_path(x)
                }
            )*
        }
    };
}

export_faddeeva! {
    w => w_im,
    erfcx => erfcx_re,
    erf => erf_re,
    erfi => erfi_re,
    erfc => erfc_re,
    Dawson => Dawson_re,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relerr::DEFAULT_RELERR;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    type Exported = (
        NativeFn,
        extern "C" fn(NativeComplex, f64) -> NativeComplex,
        extern "C" fn(f64, f64, f64) -> ComplexValue,
    );

    fn family() -> [(&'static str, Exported); 6] {
        [
            ("w", (faddeeva::w, Faddeeva_w, Faddeeva_w_shim)),
            ("erfcx", (faddeeva::erfcx, Faddeeva_erfcx, Faddeeva_erfcx_shim)),
            ("erf", (faddeeva::erf, Faddeeva_erf, Faddeeva_erf_shim)),
            ("erfi", (faddeeva::erfi, Faddeeva_erfi, Faddeeva_erfi_shim)),
            ("erfc", (faddeeva::erfc, Faddeeva_erfc, Faddeeva_erfc_shim)),
            ("Dawson", (faddeeva::Dawson, Faddeeva_Dawson, Faddeeva_Dawson_shim)),
        ]
    }

    #[test]
    fn shim_matches_reference_values() {
        let value = Faddeeva_erf_shim(1.21, -0.93, DEFAULT_RELERR);
        assert_relative_eq!(value.real, 1.172_131_334_768_13, max_relative = 1e-6);
        assert_relative_eq!(value.imaginary, -0.068_634_300_390_072, max_relative = 1e-5);
    }

    #[test]
    fn real_exports_forward_to_fast_paths() {
        assert_eq!(Faddeeva_erf_re(0.), 0.);
        assert_eq!(Faddeeva_erfc_re(0.5), faddeeva::erfc_re(0.5));
        assert_eq!(Faddeeva_erfcx_re(2.), faddeeva::erfcx_re(2.));
        assert_eq!(Faddeeva_erfi_re(0.3), faddeeva::erfi_re(0.3));
        assert_eq!(Faddeeva_Dawson_re(-1.), faddeeva::Dawson_re(-1.));
        assert_eq!(Faddeeva_w_im(4.), faddeeva::w_im(4.));
    }

    #[test]
    fn zero_tolerance_through_the_shim() {
        for (name, (_, _, shimmed)) in family() {
            let value = shimmed(0.4, 0.7, 0.);
            assert!(value.is_finite(), "{} returned {:?}", name, value);
        }
    }

    #[test]
    fn nan_imaginary_argument_is_passed_through_unmangled() {
        // erf(0 + i NaN) is undefined, but the argument must reach the
        // backend as 0 + i NaN and the result must be a well-formed pair
        let value = Faddeeva_erf_shim(0., f64::NAN, 0.);
        assert!(value.is_nan());
        assert!(value.imaginary.is_nan());
    }

    // exact bits for numbers, any NaN for NaN
    fn identical(a: &ComplexValue, b: &ComplexValue) -> bool {
        let same = |x: f64, y: f64| (x.is_nan() && y.is_nan()) || x.to_bits() == y.to_bits();
        same(a.real, b.real) && same(a.imaginary, b.imaginary)
    }

    proptest! {
        #[test]
        fn shim_is_bit_identical_to_native(
            real in prop_oneof![-40f64..40., any::<f64>()],
            imag in prop_oneof![-40f64..40., any::<f64>()],
            relerr in prop_oneof![Just(0.), Just(DEFAULT_RELERR), 1e-14f64..1e-2],
        ) {
            for (name, (native, exported, shimmed)) in family() {
                let direct = ComplexValue::from(native(cmplx(real, imag), relerr));
                let via_symbol = ComplexValue::from(exported(cmplx(real, imag), relerr));
                let via_shim = shimmed(real, imag, relerr);
                let via_generic = shim(native, real, imag, relerr);
                prop_assert!(identical(&via_shim, &direct), "{}: {:?} != {:?}", name, via_shim, direct);
                prop_assert!(identical(&via_symbol, &direct), "{}", name);
                prop_assert!(identical(&via_generic, &direct), "{}", name);
            }
        }
    }
}
