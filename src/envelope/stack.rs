//! Call-site capture for failed validation errors.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Where an error was raised: the caller's source location plus a backtrace.
///
/// The location is resolved through `#[track_caller]`, so every
/// `#[track_caller]` function between the user and the capture is skipped.
/// The backtrace is only populated when enabled through `RUST_BACKTRACE`.
#[derive(Debug, Clone)]
pub struct StackTrace {
    location: &'static Location<'static>,
    backtrace: Arc<Backtrace>,
}

impl StackTrace {
    #[track_caller]
    pub fn capture() -> Self {
        Self {
            location: Location::caller(),
            backtrace: Arc::new(Backtrace::capture()),
        }
    }

    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

impl fmt::Display for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at {}", self.location)?;
        if self.backtrace.status() == BacktraceStatus::Captured {
            write!(f, "\n{}", self.backtrace)?;
        }
        Ok(())
    }
}
