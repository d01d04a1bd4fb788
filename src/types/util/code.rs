//! Error type for converting raw wire codes into typed enums.

use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// A numeric code didn't map onto a known enum variant.
#[derive(Debug)]
pub struct UnknownCodeError {
    /// Type of error that occurred.
    kind: UnknownCodeErrorType,
    /// Human-readable name of the enum being converted into.
    target: &'static str,
    /// The offending code.
    value: u8,
}

impl UnknownCodeError {
    /// The code isn't defined for `target` at all.
    pub(crate) const fn unknown(target: &'static str, value: u8) -> Self {
        Self {
            kind: UnknownCodeErrorType::Unknown,
            target,
            value,
        }
    }

    /// The code is the link button style, which only link buttons may use.
    pub(crate) const fn link_style(value: u8) -> Self {
        Self {
            kind: UnknownCodeErrorType::LinkStyle,
            target: "button style",
            value,
        }
    }

    /// Immutable reference to the type of error that occurred.
    #[must_use = "retrieving the type has no effect if left unused"]
    pub const fn kind(&self) -> &UnknownCodeErrorType {
        &self.kind
    }

    /// The code that failed to convert.
    pub const fn value(&self) -> u8 {
        self.value
    }
}

impl Display for UnknownCodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.kind {
            UnknownCodeErrorType::Unknown => {
                write!(f, "{} is not a known {} code", self.value, self.target)
            }
            UnknownCodeErrorType::LinkStyle => write!(
                f,
                "{} is the link button style, which is only set by link buttons",
                self.value
            ),
        }
    }
}

impl Error for UnknownCodeError {}

/// Type of [`UnknownCodeError`] that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum UnknownCodeErrorType {
    /// The code has no corresponding variant.
    Unknown,
    /// The code is reserved for link buttons.
    LinkStyle,
}
