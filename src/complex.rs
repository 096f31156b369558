//! Complex number representations used at the FFI boundary.
//!
//! Computation happens on [`NativeComplex`], which is `num`'s `Complex<f64>`.
//! That type is `#[repr(C)]` with `re` followed by `im`, so it shares its byte
//! layout with C99 `double complex` and with the Windows `_Dcomplex` struct.
//! Callers whose type system cannot name either of those receive a
//! [`ComplexValue`] instead. The two are converted in exactly one place each
//! way, and always component by component.
use num::complex::Complex64;
use serde::{Deserialize, Serialize};

/// The complex type the numerical backend computes with.
pub type NativeComplex = Complex64;

/// Plain two-field record for passing a complex result across an FFI boundary.
///
/// Every field is always defined. NaN and infinite components are ordinary
/// values meaning "undefined here" and "diverges here" respectively.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct ComplexValue {
    pub real: f64,
    pub imaginary: f64,
}

impl ComplexValue {
    /// Builds the pair field by field.
    ///
    /// No arithmetic touches the inputs, so `ComplexValue::new(0., f64::NAN)`
    /// keeps its exact zero real part.
    #[inline]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        ComplexValue { real, imaginary }
    }

    /// True when either component is NaN, i.e. the result is undefined.
    pub fn is_nan(&self) -> bool {
        self.real.is_nan() || self.imaginary.is_nan()
    }

    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imaginary.is_finite()
    }

    /// Bitwise equality of both components, so that NaN payloads and signed
    /// zeros are compared exactly.
    pub fn bit_eq(&self, other: &Self) -> bool {
        self.real.to_bits() == other.real.to_bits()
            && self.imaginary.to_bits() == other.imaginary.to_bits()
    }

    #[inline]
    pub(crate) fn to_native(self) -> NativeComplex {
        cmplx(self.real, self.imaginary)
    }
}

impl Default for ComplexValue {
    fn default() -> Self {
        ComplexValue::new(0., 0.)
    }
}

impl From<Complex64> for ComplexValue {
    #[inline]
    fn from(z: Complex64) -> Self {
        ComplexValue::new(z.re, z.im)
    }
}

impl From<ComplexValue> for Complex64 {
    #[inline]
    fn from(value: ComplexValue) -> Self {
        value.to_native()
    }
}

impl From<(f64, f64)> for ComplexValue {
    #[inline]
    fn from((real, imaginary): (f64, f64)) -> Self {
        ComplexValue::new(real, imaginary)
    }
}

/// Component-wise constructor for the native type.
///
/// Never build a native value as `re + I * im`: multiplying the imaginary
/// unit by a NaN or infinite scalar smears the non-finite value into the
/// real part as well.
#[inline]
pub(crate) fn cmplx(re: f64, im: f64) -> NativeComplex {
    NativeComplex { re, im }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::mem::{align_of, size_of};

    #[test]
    fn zero_plus_i_nan_keeps_zero_real_part() {
        let value = ComplexValue::new(0., f64::NAN);
        assert!(value.is_nan());
        assert!(!value.is_finite());
        assert_eq!(value.real, 0.);
        assert!(value.real.is_sign_positive());
        assert!(value.imaginary.is_nan());

        let native = value.to_native();
        assert_eq!(native.re, 0.);
        assert!(native.im.is_nan());
    }

    #[test]
    fn infinite_imaginary_part_does_not_leak_into_real_part() {
        let native = cmplx(0., f64::INFINITY);
        assert_eq!(native.re, 0.);
        assert_eq!(native.im, f64::INFINITY);
        let back = ComplexValue::from(native);
        assert_eq!(back, ComplexValue::new(0., f64::INFINITY));
        assert!(!back.is_nan() && !back.is_finite());
    }

    #[test]
    fn layouts_are_interchangeable() {
        assert_eq!(size_of::<ComplexValue>(), size_of::<NativeComplex>());
        assert_eq!(align_of::<ComplexValue>(), align_of::<NativeComplex>());
        assert_eq!(size_of::<ComplexValue>(), 2 * size_of::<f64>());

        let value = ComplexValue::new(1.5, -2.25);
        // SAFETY: both types are repr(C) pairs of f64 in (real, imaginary) order
        let native: NativeComplex = unsafe { std::mem::transmute(value) };
        assert_eq!(native, cmplx(1.5, -2.25));
    }

    #[test]
    fn serde_uses_field_names() {
        let json = serde_json::to_string(&ComplexValue::new(1., -0.5)).unwrap();
        assert_eq!(json, r#"{"real":1.0,"imaginary":-0.5}"#);
        let back: ComplexValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ComplexValue::new(1., -0.5));
    }

    proptest! {
        #[test]
        fn boundary_conversion_is_bit_exact(value: ComplexValue) {
            let back = ComplexValue::from(Complex64::from(value));
            prop_assert!(back.bit_eq(&value));
        }
    }
}
