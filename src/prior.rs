use crate::density::Density;
use crate::input::PriorInput;
use crate::PriorError;

/// A prior probability density on a single model parameter.
///
/// A `Prior` holds one frozen distribution, set at construction and never
/// replaced, and evaluates its density at scalars or arrays of any real
/// numeric kind. Inputs are cast to `f64` first (see
/// [`SameKindCast`](crate::SameKindCast)); the output has the shape of the
/// input.
///
/// # Example
///
/// ```
/// use signal_prior::{uniform_bounded, uniform_unnormed, Prior};
///
/// // A half-bounded prior ensuring the amplitude is positive
/// let amp = Prior::new(uniform_unnormed(0.0, f64::INFINITY).unwrap());
/// assert_eq!(amp.pdf(&-1.0_f64).unwrap(), 0.0);
/// assert_eq!(amp.ln_pdf(&5.0_f64).unwrap(), 0.0);
///
/// // A normalized prior on [0, 1], evaluated at several points at once
/// let frac = Prior::new(uniform_bounded(0.0, 1.0).unwrap());
/// assert_eq!(frac.pdf(&[0.2, 0.8, 1.2]).unwrap(), [1.0, 1.0, 0.0]);
/// ```
#[derive(Clone, Debug)]
pub struct Prior<D> {
    dist: D,
}

/// A prior over a type-erased distribution, shareable across threads
pub type BoxedPrior = Prior<Box<dyn Density + Send + Sync>>;

impl<D: Density> Prior<D> {
    pub fn new(dist: D) -> Self {
        Prior { dist }
    }

    /// The underlying distribution
    pub fn dist(&self) -> &D {
        &self.dist
    }

    /// Evaluate the density at `value`.
    ///
    /// Values outside the support evaluate to `0.0`; NaN evaluates to NaN.
    ///
    /// # Errors
    /// Returns `PriorError::Cast` if any element of `value` cannot be
    /// same-kind cast to `f64`.
    pub fn pdf<V>(&self, value: &V) -> Result<V::Output, PriorError>
    where
        V: PriorInput + ?Sized,
    {
        value.map_f64(|x| if x.is_nan() { x } else { self.dist.pdf(x) })
    }

    /// Evaluate the natural log of the density at `value`.
    ///
    /// Values outside the support evaluate to `-inf`; NaN evaluates to NaN.
    ///
    /// # Errors
    /// Returns `PriorError::Cast` if any element of `value` cannot be
    /// same-kind cast to `f64`.
    pub fn ln_pdf<V>(&self, value: &V) -> Result<V::Output, PriorError>
    where
        V: PriorInput + ?Sized,
    {
        value.map_f64(|x| if x.is_nan() { x } else { self.dist.ln_pdf(x) })
    }
}

impl<D> Prior<D>
where
    D: Density + Send + Sync + 'static,
{
    /// Erase the distribution type
    pub fn boxed(self) -> BoxedPrior {
        Prior {
            dist: Box::new(self.dist),
        }
    }
}

impl<D: Density> From<D> for Prior<D> {
    fn from(dist: D) -> Self {
        Prior::new(dist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Evaluation, Scalar, Value};
    use crate::rv::dist::Gaussian;
    use crate::{uniform_bounded, uniform_unnormed};
    use approx::assert_relative_eq;
    use num::Complex;

    #[test]
    fn bounded_unit_interval_scenario() {
        let prior = Prior::new(uniform_bounded(0.0, 1.0).unwrap());
        assert_relative_eq!(prior.pdf(&0.5_f64).unwrap(), 1.0, epsilon = 1E-14);
        assert_eq!(prior.pdf(&1.5_f64).unwrap(), 0.0);
        assert_relative_eq!(
            prior.ln_pdf(&0.5_f64).unwrap(),
            0.0,
            epsilon = 1E-14
        );
    }

    #[test]
    fn half_bounded_unnormed_scenario() {
        let prior = Prior::new(uniform_unnormed(0.0, f64::INFINITY).unwrap());
        assert_eq!(prior.pdf(&-1.0_f64).unwrap(), 0.0);
        assert_eq!(prior.pdf(&5.0_f64).unwrap(), 1.0);
        assert_eq!(prior.ln_pdf(&5.0_f64).unwrap(), 0.0);
        assert_eq!(prior.ln_pdf(&-1.0_f64).unwrap(), f64::NEG_INFINITY);
    }

    #[test]
    fn array_input_returns_array_of_same_length() {
        let prior = Prior::new(uniform_bounded(0.0, 1.0).unwrap());
        let xs = vec![0.2, 0.8, 1.2];
        let fx = prior.pdf(&xs).unwrap();
        assert_eq!(fx.len(), 3);
        assert_relative_eq!(fx[0], 1.0, epsilon = 1E-14);
        assert_relative_eq!(fx[1], 1.0, epsilon = 1E-14);
        assert_eq!(fx[2], 0.0);

        let ln_fx = prior.ln_pdf(&xs[..]).unwrap();
        assert_eq!(ln_fx.len(), 3);
        assert_eq!(ln_fx[2], f64::NEG_INFINITY);
    }

    #[test]
    fn integer_input_is_accepted() {
        let prior = Prior::new(uniform_bounded(0.0, 4.0).unwrap());
        assert_relative_eq!(prior.pdf(&2_i32).unwrap(), 0.25, epsilon = 1E-14);
        assert_eq!(prior.pdf(&[1_u8, 5]).unwrap()[1], 0.0);
    }

    #[test]
    fn complex_input_is_a_cast_error() {
        let prior = Prior::new(uniform_bounded(0.0, 1.0).unwrap());
        let z = Complex::new(0.5_f64, 0.0);
        assert!(matches!(prior.pdf(&z), Err(PriorError::Cast { .. })));
        assert!(matches!(
            prior.ln_pdf(&vec![z, z]),
            Err(PriorError::Cast { .. })
        ));
    }

    #[test]
    fn dynamic_values_keep_their_shape() {
        let prior = Prior::new(uniform_bounded(0.0, 1.0).unwrap());

        let fx = prior.pdf(&Value::Scalar(Scalar::Int(2))).unwrap();
        assert_eq!(fx, Evaluation::Scalar(0.0));

        let fx = prior.pdf(&Value::from(vec![0.5_f64, 2.0])).unwrap();
        let fx = fx.as_array().unwrap();
        assert_eq!(fx.len(), 2);
        assert_eq!(fx[1], 0.0);
    }

    #[test]
    fn ln_pdf_is_log_of_pdf_inside_support() {
        let prior = Prior::new(Gaussian::new(0.3, 1.7).unwrap());
        for &x in &[-4.0_f64, -1.0, 0.0, 0.3, 2.5] {
            let f = prior.pdf(&x).unwrap();
            let ln_f = prior.ln_pdf(&x).unwrap();
            assert_relative_eq!(ln_f, f.ln(), epsilon = 1E-12);
        }
    }

    #[test]
    fn nan_propagates() {
        let prior = Prior::new(uniform_unnormed(0.0, 1.0).unwrap());
        assert!(prior.pdf(&f64::NAN).unwrap().is_nan());
        assert!(prior.ln_pdf(&f64::NAN).unwrap().is_nan());
    }

    #[test]
    fn boxed_prior_evaluates_like_unboxed() {
        let prior = Prior::new(uniform_bounded(-1.0, 1.0).unwrap());
        let x = [0.0, 0.5, 1.5];
        let expected = prior.pdf(&x).unwrap();
        let boxed = prior.boxed();
        assert_eq!(boxed.pdf(&x).unwrap(), expected);
    }
}
