use thiserror::Error;

pub type Result<T> = std::result::Result<T, RsaError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RsaError {
    /// A generation loop ran out of attempts. With a sane configuration this
    /// does not happen, so it points at the configuration rather than bad luck.
    #[error("Could not generate a valid {stage} within {attempts} attempts")]
    GenerationExhausted {
        stage: &'static str,
        attempts: usize
    },

    #[error("ERROR: {0}")]
    InvalidArgument(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Character {0:?} has no two or three digit code and cannot be encoded")]
    UnsupportedCharacter(char),

    #[error("Malformed encoded message: {0}")]
    MalformedEncoding(String),

    #[error("Encoded message has {digits} digits but the modulus only allows {limit}, try a shorter message")]
    MessageTooLarge {
        digits: usize,
        limit: usize
    },

    #[error("Unexpected failure: {0}")]
    Unexpected(String)
}

impl RsaError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Errors caused by what the user typed. These are shown verbatim, anything
    /// else gets the generic apology.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_)
                | Self::InvalidConfig(_)
                | Self::UnsupportedCharacter(_)
                | Self::MessageTooLarge { .. }
        )
    }
}
