//! Observable events
//!
//! Every structured log line names one of these events.

use std::fmt;

use super::logger::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Startup begins
    BootStart,
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Default configuration file written
    ConfigWritten,
    /// Sample books and authors loaded into the store
    SampleDataLoaded,
    /// Listening for requests
    Serving,
    /// Shutdown signal received
    ShutdownStart,
    /// Server stopped
    ShutdownComplete,
    /// Startup failed
    BootFailed,

    // Requests
    /// An HTTP request was answered
    RequestComplete,

    // Catalog
    /// An author reference was attached to a book
    AuthorAddedToBook,
    /// A request was rejected by validation
    RequestRejected,

    // Storage
    /// A transaction was dropped with uncommitted writes
    TransactionRolledBack,
    /// An unexpected storage error reached the HTTP layer
    StorageFailure,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ConfigWritten => "CONFIG_WRITTEN",
            Event::SampleDataLoaded => "SAMPLE_DATA_LOADED",
            Event::Serving => "SERVING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::BootFailed => "BOOT_FAILED",
            Event::RequestComplete => "REQUEST_COMPLETE",
            Event::AuthorAddedToBook => "AUTHOR_ADDED_TO_BOOK",
            Event::RequestRejected => "REQUEST_REJECTED",
            Event::TransactionRolledBack => "TRANSACTION_ROLLED_BACK",
            Event::StorageFailure => "STORAGE_FAILURE",
        }
    }

    /// Default severity for this event
    pub fn severity(&self) -> Severity {
        match self {
            Event::BootFailed => Severity::Fatal,
            Event::StorageFailure => Severity::Error,
            Event::RequestRejected => Severity::Warn,
            Event::TransactionRolledBack => Severity::Trace,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
