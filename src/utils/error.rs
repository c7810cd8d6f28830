//! Custom error types for cert-check
//!
//! This module defines domain-specific error types using `thiserror` for
//! the failure modes of locator parsing and certificate fetching.

use thiserror::Error;

/// Top-level error type for a check run
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("configuration error: {0}")]
    Locator(#[from] LocatorError),

    #[error("{0}")]
    Fetch(#[from] FetchError),
}

/// Locator parsing errors, raised before any file or network I/O
#[derive(Error, Debug)]
pub enum LocatorError {
    #[error("certificate locator is required")]
    Empty,

    #[error("unsupported scheme '{scheme}' in locator '{locator}'")]
    UnsupportedScheme { scheme: String, locator: String },

    #[error("invalid locator '{locator}': {message}")]
    Invalid { locator: String, message: String },
}

/// Certificate fetch errors
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to read certificate file {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse certificate from {locator}: {message}")]
    Parse { locator: String, message: String },

    #[error("connection to {target} failed: {message}")]
    Connect { target: String, message: String },

    #[error("TLS handshake with {target} failed: {message}")]
    Handshake { target: String, message: String },

    #[error("{target} presented no certificate")]
    NoCertificate { target: String },

    #[error("request to {target} failed: {message}")]
    Request { target: String, message: String },

    #[error("deadline exceeded while fetching certificate from {target}")]
    Timeout { target: String },

    /// Internal contract violation; never expected in correct operation
    #[error("internal invariant violated: {message}")]
    Invariant { message: String },
}

/// Result type alias using CheckError
pub type Result<T> = std::result::Result<T, CheckError>;
