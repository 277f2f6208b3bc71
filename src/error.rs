use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PriorError {
    /// The input kind cannot be represented as a real `f64`
    #[error("Cannot cast `{from}` to `f64` under same-kind casting")]
    Cast { from: &'static str },
    #[error("Invalid bounds: lower ({lower}) must be less than upper ({upper})")]
    InvalidBounds { lower: f64, upper: f64 },
    #[error(
        "Truncation interval [{lower}, {upper}] has no probability mass \
        under the parent distribution"
    )]
    ZeroMass { lower: f64, upper: f64 },
    /// The underlying distribution rejected its parameters
    #[error("Invalid distribution parameters: {0}")]
    Distribution(String),
    #[error("IoError: {0}")]
    Io(#[from] io::Error),
    #[error("YamlError: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Failed to build prior for parameter `{name}`: {source}")]
    Parameter {
        name: String,
        #[source]
        source: Box<PriorError>,
    },
}

impl PriorError {
    pub(crate) fn distribution<E: std::fmt::Debug>(err: E) -> Self {
        PriorError::Distribution(format!("{:?}", err))
    }
}
