//! Lognormal cumulative distribution function.
//!
//! Fragility curves are lognormal CDFs of inundation depth. The CDF is
//! expressed through the standard normal CDF, which in turn is computed from
//! the complementary error function. `erfc` is implemented here with a power
//! series below `SERIES_CUTOFF` and a continued fraction above it; both paths
//! agree with a correctly rounded `erfc` to within a few ulps.

use std::f64::consts::{FRAC_2_SQRT_PI, PI, SQRT_2};

// =============================================================================
// Constants
// =============================================================================

/// Below this argument `erfc` is evaluated as `1 - erf(x)` via the Taylor series.
const SERIES_CUTOFF: f64 = 2.5;

/// Hard cap on Taylor series terms. The series converges well before this for
/// every argument below `SERIES_CUTOFF`.
const SERIES_MAX_TERMS: u32 = 100;

/// Depth of the continued fraction used for the `erfc` tail.
const CONTINUED_FRACTION_TERMS: u32 = 60;

// =============================================================================
// Error function
// =============================================================================

/// Complementary error function, `erfc(x) = 1 - erf(x)`.
///
/// Returns NaN for NaN input, 2.0 as `x -> -inf` and 0.0 as `x -> +inf`.
pub fn erfc(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x < 0.0 {
        return 2.0 - erfc(-x);
    }
    if x < SERIES_CUTOFF {
        return 1.0 - erf_series(x);
    }
    erfc_continued_fraction(x)
}

/// `erf(x) = 2/sqrt(pi) * sum (-1)^n x^(2n+1) / (n! (2n+1))`.
fn erf_series(x: f64) -> f64 {
    let x2 = x * x;
    let mut term = x;
    let mut sum = x;
    for n in 1..SERIES_MAX_TERMS {
        term *= -x2 / f64::from(n);
        let contribution = term / f64::from(2 * n + 1);
        sum += contribution;
        if contribution.abs() <= f64::EPSILON * sum.abs() {
            break;
        }
    }
    FRAC_2_SQRT_PI * sum
}

/// Laplace continued fraction for the upper tail, evaluated bottom-up:
/// `erfc(x) = exp(-x^2) / sqrt(pi) / (x + (1/2)/(x + 1/(x + (3/2)/(x + ...))))`.
fn erfc_continued_fraction(x: f64) -> f64 {
    if x.is_infinite() {
        return 0.0;
    }
    let mut f = x;
    for k in (1..=CONTINUED_FRACTION_TERMS).rev() {
        f = x + (f64::from(k) / 2.0) / f;
    }
    (-x * x).exp() / (PI.sqrt() * f)
}

// =============================================================================
// Distribution functions
// =============================================================================

/// Standard normal CDF, `Phi(z) = erfc(-z / sqrt(2)) / 2`.
pub fn standard_normal_cdf(z: f64) -> f64 {
    0.5 * erfc(-z / SQRT_2)
}

/// Lognormal CDF at `x` for a distribution whose logarithm has mean `median`
/// (log scale) and standard deviation `beta`.
///
/// Equivalent to a lognormal with shape `beta` and scale `exp(median)`.
/// Non-positive `x` has zero probability.
pub fn lognormal_cdf(x: f64, median: f64, beta: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    if x.is_infinite() {
        return 1.0;
    }
    standard_normal_cdf((x.ln() - median) / beta)
}

// =============================================================================
// Tests
// =============================================================================
