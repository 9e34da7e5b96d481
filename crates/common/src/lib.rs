//! Common types and utilities for oas2proto
//!
//! This crate contains the shared error taxonomy and the HTTP method
//! enumeration used across the parser, generator, and CLI components.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while translating an OpenAPI document
///
/// Every fatal failure class carries a distinct process exit code so that
/// callers of the CLI can tell the phases apart. The translation core itself
/// never produces one of these: domain-level inconsistencies in the source
/// document degrade into best-effort output instead of errors.
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Failed to read input file: {0}")]
    Read(String),

    #[error("Failed to parse OpenAPI document: {0}")]
    Parse(String),

    #[error("OpenAPI validation errors: {0}")]
    Validate(String),

    #[error("Failed to write proto file: {0}")]
    Write(String),
}

/// Exit code for invoking the CLI with the wrong number of arguments
pub const EXIT_USAGE: i32 = 1;

impl TranslateError {
    /// Process exit code for this failure class
    pub fn exit_code(&self) -> i32 {
        match self {
            TranslateError::Read(_) => 2,
            TranslateError::Parse(_) => 3,
            TranslateError::Validate(_) => 4,
            TranslateError::Write(_) => 5,
        }
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslateError>;

/// HTTP methods an OpenAPI path item can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

impl HttpMethod {
    /// All methods, in the fixed order path items are traversed
    pub const ALL: [HttpMethod; 8] = [
        HttpMethod::Get,
        HttpMethod::Put,
        HttpMethod::Post,
        HttpMethod::Delete,
        HttpMethod::Options,
        HttpMethod::Head,
        HttpMethod::Patch,
        HttpMethod::Trace,
    ];

    /// Lower-cased method name, as used in `google.api.http` bindings
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Patch => "patch",
            HttpMethod::Trace => "trace",
        }
    }

    /// Whether this method carries a request body in its HTTP binding
    pub fn has_body(&self) -> bool {
        matches!(
            self,
            HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch
        )
    }
}
