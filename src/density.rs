//! The density capability shared by every prior distribution
use crate::rv::dist::{
    Beta, Cauchy, Exponential, Gamma, Gaussian, InvGamma, Laplace, LogNormal,
    StudentsT, Uniform,
};
use crate::rv::traits::ContinuousDistr;

/// A frozen, continuous, univariate density.
///
/// Implementors must return `0.0` from `pdf` and `-inf` from `ln_pdf` for
/// any `x` outside their support. Evaluation must not depend on anything but
/// `x` and the parameters fixed at construction.
pub trait Density {
    /// Natural log of the density at `x`
    fn ln_pdf(&self, x: f64) -> f64;

    /// Density at `x`
    fn pdf(&self, x: f64) -> f64 {
        self.ln_pdf(x).exp()
    }
}

impl<D: Density + ?Sized> Density for &D {
    fn ln_pdf(&self, x: f64) -> f64 {
        (**self).ln_pdf(x)
    }

    fn pdf(&self, x: f64) -> f64 {
        (**self).pdf(x)
    }
}

impl<D: Density + ?Sized> Density for Box<D> {
    fn ln_pdf(&self, x: f64) -> f64 {
        (**self).ln_pdf(x)
    }

    fn pdf(&self, x: f64) -> f64 {
        (**self).pdf(x)
    }
}

// rv's `ContinuousDistr` already zeroes the density outside the support, so
// the library distributions only need forwarding.
macro_rules! impl_density_for_rv {
    ($($dist: ty),+ $(,)?) => {
        $(
            impl Density for $dist {
                fn ln_pdf(&self, x: f64) -> f64 {
                    ContinuousDistr::<f64>::ln_pdf(self, &x)
                }

                fn pdf(&self, x: f64) -> f64 {
                    ContinuousDistr::<f64>::pdf(self, &x)
                }
            }
        )+
    };
}

impl_density_for_rv!(
    Uniform,
    Gaussian,
    LogNormal,
    Beta,
    Gamma,
    InvGamma,
    Cauchy,
    Exponential,
    Laplace,
    StudentsT,
);
