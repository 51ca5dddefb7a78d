//! Standard normal distribution.

use op_core::Real;
use std::f64::consts::{PI, SQRT_2};

/// A cumulative distribution function of the standard normal.
///
/// Engines hold one of these instead of calling a fixed routine, so the
/// implementation can be swapped in tests or benchmarks.
pub type CumulativeNormal = fn(Real) -> Real;

/// The standard normal probability density function.
///
/// `φ(x) = exp(-x²/2) / √(2π)`
#[inline]
pub fn normal_pdf(x: Real) -> Real {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// The standard normal cumulative distribution function Φ(x).
///
/// `Φ(x) = ½ erfc(−x / √2)`, using the `statrs` complementary error
/// function, which is accurate to double precision across the whole real
/// line. `Φ(±∞)` is exactly 1 / 0 and `Φ(NaN)` is NaN.
pub fn normal_cdf(x: Real) -> Real {
    0.5 * statrs::function::erf::erfc(-x / SQRT_2)
}

/// Hastings' polynomial approximation of Φ(x) (Abramowitz & Stegun 26.2.17).
///
/// Maximum absolute error < 7.5×10⁻⁸. Cheaper than [`normal_cdf`], and
/// symmetric by construction since the polynomial only sees `|x|`.
pub fn normal_cdf_hastings(x: Real) -> Real {
    // special-case x = 0 for exact 0.5
    if x == 0.0 {
        return 0.5;
    }
    let sign = if x < 0.0 { -1.0_f64 } else { 1.0_f64 };
    let t = 1.0 / (1.0 + 0.2316419 * x.abs());
    let poly = t
        * (0.319_381_530
            + t * (-0.356_563_782
                + t * (1.781_477_937
                    + t * (-1.821_255_978 + t * 1.330_274_429))));
    let pdf = normal_pdf(x);
    0.5 + sign * (0.5 - poly * pdf)
}
