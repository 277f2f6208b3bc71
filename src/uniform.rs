//! Uniform priors
//!
//! Two flavors are provided:
//!
//! - [`UniformUnnormed`]: unity everywhere in `[lower, upper]`. Use it for
//!   unbounded or half-bounded parameters where a normalized density does not
//!   exist, or when normalization is handled by the posterior.
//! - [`uniform_bounded`]: the ordinary normalized uniform on a finite range,
//!   backed by `rv::dist::Uniform`.
use crate::density::Density;
use crate::rv::dist::Uniform;
use crate::PriorError;

/// An unnormalized uniform density: `1.0` on `[lower, upper]`, `0.0`
/// elsewhere. Either bound may be infinite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformUnnormed {
    lower: f64,
    upper: f64,
}

impl UniformUnnormed {
    /// Create a new unnormalized uniform on `[lower, upper]`
    ///
    /// # Errors
    /// Returns `InvalidBounds` unless `lower < upper`. NaN bounds never
    /// satisfy that condition.
    pub fn new(lower: f64, upper: f64) -> Result<Self, PriorError> {
        if lower < upper {
            Ok(UniformUnnormed { lower, upper })
        } else {
            Err(PriorError::InvalidBounds { lower, upper })
        }
    }

    /// Support on `[lower, ∞)`
    pub fn lower_bounded(lower: f64) -> Result<Self, PriorError> {
        Self::new(lower, f64::INFINITY)
    }

    /// Support on `(-∞, upper]`
    pub fn upper_bounded(upper: f64) -> Result<Self, PriorError> {
        Self::new(f64::NEG_INFINITY, upper)
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    #[inline]
    pub fn supports(&self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }
}

impl Default for UniformUnnormed {
    /// The whole real line
    fn default() -> Self {
        UniformUnnormed {
            lower: f64::NEG_INFINITY,
            upper: f64::INFINITY,
        }
    }
}

impl Density for UniformUnnormed {
    fn ln_pdf(&self, x: f64) -> f64 {
        if self.supports(x) {
            0.0
        } else {
            f64::NEG_INFINITY
        }
    }

    fn pdf(&self, x: f64) -> f64 {
        if self.supports(x) {
            1.0
        } else {
            0.0
        }
    }
}

/// An unnormalized uniform prior on `[lower, upper]`. See [`UniformUnnormed`].
pub fn uniform_unnormed(
    lower: f64,
    upper: f64,
) -> Result<UniformUnnormed, PriorError> {
    UniformUnnormed::new(lower, upper)
}

/// A normalized uniform prior with density `1 / (upper - lower)` on
/// `[lower, upper]` and `0.0` outside.
///
/// # Errors
/// Returns `InvalidBounds` if either bound is not finite or if
/// `upper <= lower`.
pub fn uniform_bounded(lower: f64, upper: f64) -> Result<Uniform, PriorError> {
    if !(lower.is_finite() && upper.is_finite() && lower < upper) {
        return Err(PriorError::InvalidBounds { lower, upper });
    }
    Uniform::new(lower, upper).map_err(PriorError::distribution)
}

/// The normalized uniform on `[0, 1]`
pub fn uniform_bounded_default() -> Uniform {
    Uniform::new_unchecked(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn unnormed_is_unity_inside_support() {
        let dist = uniform_unnormed(-2.0, 3.0).unwrap();
        for &x in &[-2.0, -1.5, 0.0, 2.999, 3.0] {
            assert_eq!(dist.pdf(x), 1.0);
            assert_eq!(dist.ln_pdf(x), 0.0);
        }
    }

    #[test]
    fn unnormed_is_zero_outside_support() {
        let dist = uniform_unnormed(-2.0, 3.0).unwrap();
        for &x in &[-2.0001, -100.0, 3.0001, f64::INFINITY] {
            assert_eq!(dist.pdf(x), 0.0);
            assert_eq!(dist.ln_pdf(x), f64::NEG_INFINITY);
        }
    }

    #[test]
    fn unnormed_default_covers_real_line() {
        let dist = UniformUnnormed::default();
        assert_eq!(dist.lower(), f64::NEG_INFINITY);
        assert_eq!(dist.upper(), f64::INFINITY);
        assert_eq!(dist.pdf(-1e300), 1.0);
        assert_eq!(dist.pdf(1e300), 1.0);
    }

    #[test]
    fn half_bounded_constructors() {
        let pos = UniformUnnormed::lower_bounded(0.0).unwrap();
        assert_eq!(pos.pdf(-1.0), 0.0);
        assert_eq!(pos.pdf(5.0), 1.0);
        assert_eq!(pos.pdf(f64::INFINITY), 1.0);

        let neg = UniformUnnormed::upper_bounded(0.0).unwrap();
        assert_eq!(neg.pdf(-5.0), 1.0);
        assert_eq!(neg.pdf(1.0), 0.0);
    }

    #[test]
    fn unnormed_rejects_bad_bounds() {
        assert!(matches!(
            uniform_unnormed(1.0, 1.0),
            Err(PriorError::InvalidBounds { .. })
        ));
        assert!(matches!(
            uniform_unnormed(2.0, 1.0),
            Err(PriorError::InvalidBounds { .. })
        ));
        assert!(uniform_unnormed(f64::NAN, 1.0).is_err());
        assert!(uniform_unnormed(f64::INFINITY, f64::INFINITY).is_err());
    }

    #[test]
    fn bounded_density_is_normalized() {
        let dist = uniform_bounded(-1.0, 3.0).unwrap();
        assert_relative_eq!(dist.pdf(0.0), 0.25, epsilon = 1E-12);
        assert_relative_eq!(dist.ln_pdf(0.0), 0.25_f64.ln(), epsilon = 1E-12);
        assert_eq!(dist.pdf(3.5), 0.0);
        assert_eq!(dist.ln_pdf(-1.5), f64::NEG_INFINITY);
    }

    #[test]
    fn bounded_integrates_to_one() {
        let (lower, upper) = (1.0e-3, 2.5);
        let dist = uniform_bounded(lower, upper).unwrap();
        let n = 10_000;
        let dx = (upper - lower) / n as f64;
        let integral: f64 = (0..n)
            .map(|ix| dist.pdf(lower + (ix as f64 + 0.5) * dx) * dx)
            .sum();
        assert_relative_eq!(integral, 1.0, epsilon = 1E-10);
    }

    #[test]
    fn bounded_default_is_unit_interval() {
        let dist = uniform_bounded_default();
        assert_relative_eq!(dist.pdf(0.5), 1.0, epsilon = 1E-12);
        assert_eq!(dist.pdf(1.5), 0.0);
    }

    #[test]
    fn bounded_rejects_bad_bounds() {
        assert!(matches!(
            uniform_bounded(1.0, 0.0),
            Err(PriorError::InvalidBounds { .. })
        ));
        assert!(matches!(
            uniform_bounded(0.0, 0.0),
            Err(PriorError::InvalidBounds { .. })
        ));
        assert!(uniform_bounded(0.0, f64::INFINITY).is_err());
        assert!(uniform_bounded(f64::NAN, 1.0).is_err());
    }
}
