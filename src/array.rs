//! Element-wise evaluation over `ndarray` arrays.
use crate::ext::{ComplexErrorFunctions, ErrorFunctions};
use ndarray::{Array, ArrayBase, Data, Dimension, Zip};

pub fn erf<S, D>(a: &ArrayBase<S, D>) -> Array<S::Elem, D>
where
    S: Data,
    S::Elem: ErrorFunctions,
    D: Dimension,
{
    a.mapv(<S::Elem as ErrorFunctions>::erf)
}

pub fn erfc<S, D>(a: &ArrayBase<S, D>) -> Array<S::Elem, D>
where
    S: Data,
    S::Elem: ErrorFunctions,
    D: Dimension,
{
    a.mapv(<S::Elem as ErrorFunctions>::erfc)
}

pub fn erfcx<S, D>(a: &ArrayBase<S, D>) -> Array<S::Elem, D>
where
    S: Data,
    S::Elem: ErrorFunctions,
    D: Dimension,
{
    a.mapv(<S::Elem as ErrorFunctions>::erfcx)
}

pub fn erfi<S, D>(a: &ArrayBase<S, D>) -> Array<S::Elem, D>
where
    S: Data,
    S::Elem: ErrorFunctions,
    D: Dimension,
{
    a.mapv(<S::Elem as ErrorFunctions>::erfi)
}

pub fn dawson<S, D>(a: &ArrayBase<S, D>) -> Array<S::Elem, D>
where
    S: Data,
    S::Elem: ErrorFunctions,
    D: Dimension,
{
    a.mapv(<S::Elem as ErrorFunctions>::dawson)
}

/// $w(z)$ of every element at a shared tolerance
pub fn faddeeva_w<S, D, T>(z: &ArrayBase<S, D>, relerr: T::Real) -> Array<T, D>
where
    S: Data<Elem = T>,
    T: ComplexErrorFunctions,
    T::Real: Copy,
    D: Dimension,
{
    z.mapv(|z| z.faddeeva_w_with_relerr(relerr))
}

/// $\mathrm{erf}(b) - \mathrm{erf}(a)$ element by element, computed from
/// whichever of `erf`/`erfc` avoids cancellation in the tails.
pub fn erf_diff<S, D>(a: &ArrayBase<S, D>, b: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    Zip::from(a).and(b).map_collect(|&a, &b| {
        if a > 0. {
            ErrorFunctions::erfc(a) - ErrorFunctions::erfc(b)
        } else if b < 0. {
            ErrorFunctions::erfc(-b) - ErrorFunctions::erfc(-a)
        } else {
            ErrorFunctions::erf(b) - ErrorFunctions::erf(a)
        }
    })
}
