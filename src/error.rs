use std::fmt;

use thiserror::Error;

/// Which hex-colour rule a rejected value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatFault {
    /// Null, absent, or the empty string.
    Missing,
    /// A value that is not a string at all (only reachable from JS).
    NotText,
    MissingHash,
    /// Length other than 4 or 7 characters, `#` included.
    Length,
    NonHexDigit,
}

impl fmt::Display for FormatFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Missing => "colour cannot be empty",
            Self::NotText => "colour must be a string",
            Self::MissingHash => "colour must start with '#'",
            Self::Length => "expected #RGB or #RRGGBB",
            Self::NonHexDigit => "invalid hex characters",
        };
        f.write_str(msg)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColourError {
    #[error("invalid colour format: {} ({fault})", .colour.as_deref().unwrap_or("<none>"))]
    InvalidColourFormat {
        colour: Option<String>,
        fault: FormatFault,
    },
}

impl ColourError {
    pub(crate) fn invalid(colour: &str, fault: FormatFault) -> Self {
        Self::InvalidColourFormat {
            colour: Some(colour.to_string()),
            fault,
        }
    }

    pub(crate) fn missing() -> Self {
        Self::InvalidColourFormat {
            colour: None,
            fault: FormatFault::Missing,
        }
    }

    pub fn fault(&self) -> FormatFault {
        match self {
            Self::InvalidColourFormat { fault, .. } => *fault,
        }
    }
}

pub type ColourResult<T> = Result<T, ColourError>;

impl From<ColourError> for napi::Error {
    fn from(err: ColourError) -> Self {
        napi::Error::new(napi::Status::InvalidArg, err.to_string())
    }
}
