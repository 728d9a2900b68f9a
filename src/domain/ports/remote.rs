//! Typed errors returned by the capability interfaces
//!
//! Adapters classify provider failures into a [`RemoteErrorKind`]; the core
//! only ever inspects the kind, never the message.

use std::fmt;

pub type RemoteResult<T> = Result<T, RemoteError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteErrorKind {
    /// Addressed resource does not exist
    NotFound,
    AlreadyExists,
    /// Request would not change anything
    NoChanges,
    AccessDenied,
    Throttled,
    /// A wait-for-completion call saw a failure state
    WaiterFailed,
    /// Request rejected as malformed
    Invalid,
    /// Transport could not run or its response could not be read
    Transport,
    Other,
}

impl fmt::Display for RemoteErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RemoteErrorKind::NotFound => "not found",
            RemoteErrorKind::AlreadyExists => "already exists",
            RemoteErrorKind::NoChanges => "no changes",
            RemoteErrorKind::AccessDenied => "access denied",
            RemoteErrorKind::Throttled => "throttled",
            RemoteErrorKind::WaiterFailed => "waiter failed",
            RemoteErrorKind::Invalid => "invalid request",
            RemoteErrorKind::Transport => "transport error",
            RemoteErrorKind::Other => "remote error",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct RemoteError {
    pub kind: RemoteErrorKind,
    pub message: String,
}

impl RemoteError {
    pub fn new(kind: RemoteErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(RemoteErrorKind::Transport, message)
    }

    pub fn is(&self, kind: RemoteErrorKind) -> bool {
        self.kind == kind
    }
}
