use std::fmt;

/// The result type used across the crate.
pub type Result<T> = std::result::Result<T, NetError>;

/// All errors that can occur while building, running or configuring a network.
#[derive(Debug)]
pub enum NetError {
    /// An activation name that is not in the registry.
    UnknownActivation { name: String },
    /// A per-layer activation list whose length differs from the number of weight layers.
    ActivationCount { got: usize, expected: usize },
    /// Layer widths that cannot describe a network.
    InvalidTopology { reason: String },
    /// A vector or matrix whose length disagrees with the configured widths.
    ShapeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    /// A dataset name that is not one of the built-in generators.
    UnknownDataset { name: String },
    /// A fixed sample set with no samples in it.
    EmptyDataset,
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl NetError {
    /// Whether this error comes from invalid construction input.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnknownActivation { .. } | Self::ActivationCount { .. } | Self::InvalidTopology { .. }
        )
    }

    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, Self::ShapeMismatch { .. })
    }
}

impl fmt::Display for NetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownActivation { name } => write!(f, "unknown activation function `{name}`"),
            Self::ActivationCount { got, expected } => write!(
                f,
                "got {got} activation functions but the network has {expected} weight layers"
            ),
            Self::InvalidTopology { reason } => write!(f, "invalid topology: {reason}"),
            Self::ShapeMismatch { what, got, expected } => {
                write!(f, "shape mismatch in {what}: got {got}, expected {expected}")
            }
            Self::UnknownDataset { name } => {
                write!(f, "unknown dataset `{name}`, expected one of xor, quad, circ")
            }
            Self::EmptyDataset => write!(f, "sample set is empty"),
            Self::Io(e) => write!(f, "io error: {e}"),
            Self::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for NetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NetError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for NetError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
