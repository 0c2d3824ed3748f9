//! Crate-level error types.

use std::fmt;

/// Errors produced by the transition-group crate.
#[derive(Debug)]
pub enum AnimationError {
    /// A view-property controller was requested for a transition batch whose
    /// leading transition has no render target to host it.
    MissingTarget {
        /// Identifier of the transition that lacked a target.
        transition: String,
    },
    /// TOML options parsing/serialization failure, including unknown
    /// controller kinds.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for AnimationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTarget { transition } => write!(
                f,
                "transition '{transition}' has no render target for a \
                 view-property controller"
            ),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for AnimationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AnimationError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_target_message_names_transition() {
        let err = AnimationError::MissingTarget {
            transition: "fade-in".to_owned(),
        };
        assert!(err.to_string().contains("fade-in"));
    }

    #[test]
    fn test_io_error_has_source() {
        use std::error::Error;

        let err: AnimationError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.source().is_some());
        assert!(AnimationError::OptionsParse("x".to_owned()).source().is_none());
    }
}
