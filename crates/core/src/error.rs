//! Centralized error types for the dontpanic workspace.

use std::any::Any;
use std::fmt;
use thiserror::Error;

/// Boxed error accepted as a panic payload and forwarded unchanged.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Source position of an intercepted panic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaultLocation {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl From<&std::panic::Location<'_>> for FaultLocation {
    fn from(loc: &std::panic::Location<'_>) -> Self {
        Self {
            file: loc.file().to_owned(),
            line: loc.line(),
            column: loc.column(),
        }
    }
}

impl fmt::Display for FaultLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Failure of a guarded operation.
///
/// `Display` is always the bare message, whatever the variant, so callers
/// that only log errors see one uniform shape. Match on the variant (or use
/// [`GuardError::is_intercepted`]) to tell faults from argument errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GuardError {
    /// A panic whose payload was text, or could not be described at all.
    #[error("{message}")]
    Panic {
        message: String,
        location: Option<FaultLocation>,
    },

    /// A panic whose payload already was an error.
    #[error(transparent)]
    Forwarded(BoxError),

    /// Malformed call arguments, rejected before anything risky ran.
    #[error("{0}")]
    Arity(String),
}

pub type GuardResult<T> = Result<T, GuardError>;

/// Text used for payloads that are neither errors nor strings.
const OPAQUE_PAYLOAD: &str = "Box<dyn Any>";

impl GuardError {
    /// Converts a panic payload as returned by `catch_unwind`.
    ///
    /// Payloads that already are errors are forwarded; `&str` and `String`
    /// payloads become the message; anything else is described as
    /// `Box<dyn Any>`, matching what the default panic hook prints.
    pub fn from_panic(payload: Box<dyn Any + Send>, location: Option<FaultLocation>) -> Self {
        let payload = match payload.downcast::<GuardError>() {
            Ok(err) => return *err,
            Err(other) => other,
        };
        let payload = match payload.downcast::<BoxError>() {
            Ok(err) => return GuardError::Forwarded(*err),
            Err(other) => other,
        };

        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_owned()
        } else {
            match payload.downcast::<String>() {
                Ok(s) => *s,
                Err(_) => OPAQUE_PAYLOAD.to_owned(),
            }
        };

        GuardError::Panic { message, location }
    }

    /// Argument-count error for variadic-style operations.
    pub fn arity(message: impl Into<String>) -> Self {
        GuardError::Arity(message.into())
    }

    /// `true` when the error came out of the fault interceptor.
    pub fn is_intercepted(&self) -> bool {
        !matches!(self, GuardError::Arity(_))
    }

    /// Where the intercepted panic was raised, when the hook saw it.
    pub fn location(&self) -> Option<&FaultLocation> {
        match self {
            GuardError::Panic { location, .. } => location.as_ref(),
            _ => None,
        }
    }
}
