//! Classification of AWS CLI failures
//!
//! The CLI reports service errors on stderr as
//! `An error occurred (<Code>) when calling the <Op> operation: <message>`
//! and waiter failures as `Waiter <Name> failed: <reason>`.

use crate::domain::ports::{RemoteError, RemoteErrorKind};

const ERROR_PREFIX: &str = "An error occurred (";
const WAITER_PREFIX: &str = "Waiter ";

/// Service error code and message pulled from CLI stderr
fn parse_service_error(stderr: &str) -> Option<(&str, &str)> {
    let line = stderr.lines().find(|l| l.contains(ERROR_PREFIX))?;
    let rest = &line[line.find(ERROR_PREFIX)? + ERROR_PREFIX.len()..];
    let (code, tail) = rest.split_once(')')?;
    let message = tail.split_once(": ").map(|(_, m)| m).unwrap_or(tail);
    Some((code, message.trim()))
}

fn kind_for_code(code: &str, message: &str) -> RemoteErrorKind {
    match code {
        "ValidationError" if message.contains("does not exist") => RemoteErrorKind::NotFound,
        "ValidationError" if message.contains("No updates are to be performed") => {
            RemoteErrorKind::NoChanges
        }
        "ValidationError" => RemoteErrorKind::Invalid,
        "NoSuchBucket" | "NoSuchKey" => RemoteErrorKind::NotFound,
        "ExpiredToken" | "UnauthorizedOperation" => RemoteErrorKind::AccessDenied,
        "Throttling" => RemoteErrorKind::Throttled,
        c if c.contains("NotFound") => RemoteErrorKind::NotFound,
        c if c.contains("AlreadyExists") || c.starts_with("Duplicate") => {
            RemoteErrorKind::AlreadyExists
        }
        c if c.starts_with("AccessDenied") => RemoteErrorKind::AccessDenied,
        c if c.starts_with("Throttling") || c.starts_with("TooManyRequests") => {
            RemoteErrorKind::Throttled
        }
        c if c.starts_with("Invalid") || c.starts_with("Malformed") => RemoteErrorKind::Invalid,
        _ => RemoteErrorKind::Other,
    }
}

/// Turn CLI stderr into a typed error
pub fn classify(stderr: &str) -> RemoteError {
    let trimmed = stderr.trim();

    if let Some(line) = trimmed
        .lines()
        .map(str::trim)
        .find(|l| l.starts_with(WAITER_PREFIX) && l.contains(" failed"))
    {
        return RemoteError::new(RemoteErrorKind::WaiterFailed, line);
    }

    match parse_service_error(trimmed) {
        Some((code, message)) => RemoteError::new(kind_for_code(code, message), message),
        None => RemoteError::new(RemoteErrorKind::Other, trimmed),
    }
}
