/// Invalid `parts`/`threshold` combination passed to a dealer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("threshold < 1")]
    ThresholdTooSmall,

    #[error("parts ({parts}) cannot be less than threshold ({threshold})")]
    PartsBelowThreshold { parts: usize, threshold: usize },

    #[error("parts cannot exceed {max}, got {parts}")]
    TooManyParts { parts: usize, max: usize },

    #[error("threshold cannot exceed {max}, got {threshold}")]
    ThresholdTooLarge { threshold: usize, max: usize },
}

/// Problems with the secret handed to a dealer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("secret is missing")]
    MissingSecret,

    #[error("secret is not below the field order")]
    SecretOutOfRange,
}

/// Unified error type for splitting, verifying and combining.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VssError {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigError),

    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    /// The entropy source failed, or never produced an acceptable value.
    #[error("error reading random source: {0}")]
    RandomSource(String),

    #[error("share is not on the curve")]
    NotOnCurve,

    #[error("commitment length mismatch: expected {expected}, got {got}")]
    CommitmentLengthMismatch { expected: usize, got: usize },

    #[error("no modular inverse found")]
    NoModularInverse,

    #[error("invalid point encoding: {0}")]
    InvalidEncoding(String),
}

impl VssError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, VssError::Configuration(_))
    }

    pub fn is_input(&self) -> bool {
        matches!(self, VssError::Input(_))
    }
}
