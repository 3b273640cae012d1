//! Error taxonomy shared by the task and account services.

use serde::Serialize;
use std::fmt;

/// Client-facing error class.
///
/// Service errors keep their detailed variants; this classification is what
/// presentation layers use to choose a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed or missing input. The message is safe to show verbatim.
    Validation,
    /// The referenced record is absent or owned by someone else.
    NotFound,
    /// No valid session accompanies the request.
    Unauthenticated,
    /// Storage failed. Details are logged, never shown.
    Storage,
}

impl ErrorKind {
    /// Returns the snake-case name of the class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Unauthenticated => "unauthenticated",
            Self::Storage => "storage",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
