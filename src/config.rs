//! Prior configuration
//!
//! Priors can be described in YAML, one entry per model parameter, e.g.
//!
//! ```yaml
//! log10_A: !UniformBounded
//!   lower: -18.0
//!   upper: -12.0
//! amp: !UniformUnnormed
//!   lower: 0.0
//! ecc: !TruncatedGaussian
//!   mu: 0.9
//!   sigma: 0.1
//!   lower: 0.0
//!   upper: 1.0
//! ```
//!
//! Parameter order is preserved.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::prior::{BoxedPrior, Prior};
use crate::rv::dist::{
    Beta, Cauchy, Exponential, Gamma, Gaussian, InvGamma, Laplace, LogNormal,
    StudentsT,
};
use crate::truncated::TruncatedGaussian;
use crate::uniform::{uniform_bounded, uniform_unnormed};
use crate::PriorError;

fn neg_inf() -> f64 {
    f64::NEG_INFINITY
}

fn pos_inf() -> f64 {
    f64::INFINITY
}

fn zero() -> f64 {
    0.0
}

fn one() -> f64 {
    1.0
}

/// Describes a prior by family and parameters
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub enum PriorSpec {
    /// Unity on `[lower, upper]`. Bounds default to the whole real line.
    UniformUnnormed {
        #[serde(default = "neg_inf")]
        lower: f64,
        #[serde(default = "pos_inf")]
        upper: f64,
    },
    /// Normalized uniform on `[lower, upper]`. Defaults to `[0, 1]`.
    UniformBounded {
        #[serde(default = "zero")]
        lower: f64,
        #[serde(default = "one")]
        upper: f64,
    },
    Gaussian {
        mu: f64,
        sigma: f64,
    },
    TruncatedGaussian {
        mu: f64,
        sigma: f64,
        lower: f64,
        upper: f64,
    },
    LogNormal {
        mu: f64,
        sigma: f64,
    },
    Beta {
        alpha: f64,
        beta: f64,
    },
    Gamma {
        shape: f64,
        rate: f64,
    },
    InvGamma {
        shape: f64,
        scale: f64,
    },
    Exponential {
        rate: f64,
    },
    Cauchy {
        loc: f64,
        scale: f64,
    },
    Laplace {
        mu: f64,
        b: f64,
    },
    /// Standard Student's t with `v` degrees of freedom
    StudentsT {
        v: f64,
    },
}

impl PriorSpec {
    /// Build the prior this spec describes
    pub fn build(&self) -> Result<BoxedPrior, PriorError> {
        let prior = match *self {
            PriorSpec::UniformUnnormed { lower, upper } => {
                Prior::new(uniform_unnormed(lower, upper)?).boxed()
            }
            PriorSpec::UniformBounded { lower, upper } => {
                Prior::new(uniform_bounded(lower, upper)?).boxed()
            }
            PriorSpec::Gaussian { mu, sigma } => Prior::new(
                Gaussian::new(mu, sigma).map_err(PriorError::distribution)?,
            )
            .boxed(),
            PriorSpec::TruncatedGaussian {
                mu,
                sigma,
                lower,
                upper,
            } => Prior::new(TruncatedGaussian::new(mu, sigma, lower, upper)?)
                .boxed(),
            PriorSpec::LogNormal { mu, sigma } => Prior::new(
                LogNormal::new(mu, sigma).map_err(PriorError::distribution)?,
            )
            .boxed(),
            PriorSpec::Beta { alpha, beta } => Prior::new(
                Beta::new(alpha, beta).map_err(PriorError::distribution)?,
            )
            .boxed(),
            PriorSpec::Gamma { shape, rate } => Prior::new(
                Gamma::new(shape, rate).map_err(PriorError::distribution)?,
            )
            .boxed(),
            PriorSpec::InvGamma { shape, scale } => Prior::new(
                InvGamma::new(shape, scale).map_err(PriorError::distribution)?,
            )
            .boxed(),
            PriorSpec::Exponential { rate } => Prior::new(
                Exponential::new(rate).map_err(PriorError::distribution)?,
            )
            .boxed(),
            PriorSpec::Cauchy { loc, scale } => Prior::new(
                Cauchy::new(loc, scale).map_err(PriorError::distribution)?,
            )
            .boxed(),
            PriorSpec::Laplace { mu, b } => Prior::new(
                Laplace::new(mu, b).map_err(PriorError::distribution)?,
            )
            .boxed(),
            PriorSpec::StudentsT { v } => Prior::new(
                StudentsT::new(v).map_err(PriorError::distribution)?,
            )
            .boxed(),
        };
        Ok(prior)
    }
}

/// Prior specifications keyed by parameter name
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct PriorConfig {
    pub priors: IndexMap<String, PriorSpec>,
}

impl PriorConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, PriorError> {
        let config: PriorConfig = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self, PriorError> {
        let path = path.as_ref();
        let mut file = File::open(path)?;
        let mut yaml = String::new();
        file.read_to_string(&mut yaml)?;
        let config = Self::from_yaml_str(&yaml)?;
        info!(
            "Loaded {} prior specs from {}",
            config.priors.len(),
            path.display()
        );
        Ok(config)
    }
}

/// Built priors keyed by parameter name, in configuration order
#[derive(Default)]
pub struct PriorSet {
    priors: IndexMap<String, BoxedPrior>,
}

impl PriorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every prior in `config`.
    ///
    /// # Errors
    /// Returns `PriorError::Parameter` naming the first parameter whose
    /// prior could not be built.
    pub fn from_config(config: &PriorConfig) -> Result<Self, PriorError> {
        let priors = config
            .priors
            .iter()
            .map(|(name, spec)| {
                debug!("Building prior for `{}`: {:?}", name, spec);
                spec.build()
                    .map(|prior| (name.clone(), prior))
                    .map_err(|err| PriorError::Parameter {
                        name: name.clone(),
                        source: Box::new(err),
                    })
            })
            .collect::<Result<IndexMap<_, _>, _>>()?;

        info!("Built priors for {} parameters", priors.len());
        Ok(PriorSet { priors })
    }

    /// Attach a prior to `name`, returning the prior it replaced, if any
    pub fn insert<S: Into<String>>(
        &mut self,
        name: S,
        prior: BoxedPrior,
    ) -> Option<BoxedPrior> {
        self.priors.insert(name.into(), prior)
    }

    pub fn get(&self, name: &str) -> Option<&BoxedPrior> {
        self.priors.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.priors.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.priors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.priors.is_empty()
    }

    /// Parameter names in configuration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.priors.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BoxedPrior)> {
        self.priors.iter().map(|(name, prior)| (name.as_str(), prior))
    }
}
