use std::cmp::Ordering;
use std::f64::consts::FRAC_1_SQRT_2;

use crate::density::Density;
use crate::rv::dist::Gaussian;
use crate::rv::traits::Rv;
use crate::PriorError;

// ln(sqrt(2π))
const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_8;

// Beyond this many standard deviations the survival function comes from its
// asymptotic series. erfc would underflow a little past 37.
const SF_SERIES_Z: f64 = 30.0;

/// ln(1 - Φ(z)) for the standard normal, accurate far into the upper tail
fn ln_sf(z: f64) -> f64 {
    if z == f64::INFINITY {
        f64::NEG_INFINITY
    } else if z == f64::NEG_INFINITY {
        0.0
    } else if z < SF_SERIES_Z {
        (0.5 * special::Error::compl_error(z * FRAC_1_SQRT_2)).ln()
    } else {
        // 1 - 1/z² + 3/z⁴ - 15/z⁶ + 105/z⁸
        let r = (z * z).recip();
        let series =
            1.0 - r * (1.0 - 3.0 * r * (1.0 - 5.0 * r * (1.0 - 7.0 * r)));
        -0.5 * z * z - LN_SQRT_2PI - z.ln() + series.ln()
    }
}

/// Φ(z) - 1/2
fn centered_cdf(z: f64) -> f64 {
    if z.is_infinite() {
        0.5_f64.copysign(z)
    } else {
        0.5 * special::Error::error(z * FRAC_1_SQRT_2)
    }
}

/// ln(Φ(b) - Φ(a)) for standardized bounds `a < b`.
///
/// Intervals in either tail are differenced as two upper-tail survival
/// values in log space (reflecting the lower tail), which avoids both the
/// cancellation in `Φ(b) - Φ(a)` near 1 and underflow far from the mode.
fn ln_mass(a: f64, b: f64) -> f64 {
    if a > 1.0 {
        ln_sf_diff(a, b)
    } else if b < -1.0 {
        ln_sf_diff(-b, -a)
    } else {
        (centered_cdf(b) - centered_cdf(a)).ln()
    }
}

/// ln(Q(a) - Q(b)) for `a < b`, where Q is the survival function
fn ln_sf_diff(a: f64, b: f64) -> f64 {
    let ln_qa = ln_sf(a);
    ln_qa + (-(ln_sf(b) - ln_qa).exp_m1()).ln()
}

/// A Gaussian renormalized to `[lower, upper]`.
///
/// Useful for parameters with a physical range and an informative center,
/// e.g. an eccentricity near 0.9 that must stay in `[0, 1]`. Bounds are on
/// the parameter scale, not in units of `sigma`.
#[derive(Clone, Debug, PartialEq)]
pub struct TruncatedGaussian {
    gauss: Gaussian,
    lower: f64,
    upper: f64,
    // ln(Φ(upper) - Φ(lower))
    ln_z: f64,
}

impl TruncatedGaussian {
    pub fn new(
        mu: f64,
        sigma: f64,
        lower: f64,
        upper: f64,
    ) -> Result<Self, PriorError> {
        if lower.partial_cmp(&upper) != Some(Ordering::Less) {
            return Err(PriorError::InvalidBounds { lower, upper });
        }

        let gauss =
            Gaussian::new(mu, sigma).map_err(PriorError::distribution)?;

        let ln_z = ln_mass((lower - mu) / sigma, (upper - mu) / sigma);
        if !ln_z.is_finite() {
            return Err(PriorError::ZeroMass { lower, upper });
        }

        Ok(TruncatedGaussian {
            gauss,
            lower,
            upper,
            ln_z,
        })
    }

    pub fn mu(&self) -> f64 {
        self.gauss.mu()
    }

    pub fn sigma(&self) -> f64 {
        self.gauss.sigma()
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }
}

impl Density for TruncatedGaussian {
    fn ln_pdf(&self, x: f64) -> f64 {
        if self.lower <= x && x <= self.upper && x.is_finite() {
            Rv::<f64>::ln_f(&self.gauss, &x) - self.ln_z
        } else {
            f64::NEG_INFINITY
        }
    }
}
