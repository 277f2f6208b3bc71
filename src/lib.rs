//! Prior probability densities for model parameters.
//!
//! A [`Prior`] wraps one frozen distribution and evaluates its density, or
//! log density, at scalars or arrays of any real numeric type. Any type
//! implementing [`Density`] can back a prior: the continuous distributions in
//! [`rv`], the unnormalized [`UniformUnnormed`] for unbounded ranges, and the
//! [`TruncatedGaussian`].
//!
//! Priors for a whole model can be described in YAML and built into a
//! [`PriorSet`]; see [`config`].
#![warn(unused_extern_crates)]
#![warn(
    clippy::all,
    clippy::imprecise_flops,
    clippy::suboptimal_flops,
    clippy::unseparated_literal_suffix,
    clippy::unreadable_literal,
    clippy::option_option,
    clippy::implicit_clone
)]
pub mod config;
mod density;
mod error;
mod input;
mod prior;
mod truncated;
mod uniform;

pub use rv;

pub use config::{PriorConfig, PriorSet, PriorSpec};
pub use density::Density;
pub use error::PriorError;
pub use input::{Evaluation, PriorInput, SameKindCast, Scalar, Value};
pub use prior::{BoxedPrior, Prior};
pub use truncated::TruncatedGaussian;
pub use uniform::{
    uniform_bounded, uniform_bounded_default, uniform_unnormed,
    UniformUnnormed,
};
