//! Error types for the sampling pipeline
//!
//! Every stage returns [`SamplerResult`]. Callers that sit on a transport
//! boundary (the CLI, an HTTP layer) use [`SamplerError::class`] to decide
//! how to report a failure; the core never maps errors to status codes.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while producing a sample
#[derive(Error, Debug)]
pub enum SamplerError {
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Input file not found: {}", path.display())]
    MissingInputFile { path: PathBuf },

    #[error("Input file is not properly formatted: {}: {source}", path.display())]
    MalformedInputFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Sampling error for base type '{base}': {reason}")]
    Sampling { base: String, reason: String },

    #[error("Traversal error: node '{id}' not found in node data")]
    Traversal { id: String },

    #[error("Couldn't save sample to {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type SamplerResult<T> = Result<T, SamplerError>;

/// Coarse classification used by transport boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Environment, input data or storage problem
    ServerFault,
    /// The request named something the dataset can't satisfy
    ClientInput,
}

impl ErrorClass {
    /// Process exit code used by the CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorClass::ServerFault => 1,
            ErrorClass::ClientInput => 2,
        }
    }
}

impl SamplerError {
    pub fn class(&self) -> ErrorClass {
        match self {
            SamplerError::Configuration(_)
            | SamplerError::MissingInputFile { .. }
            | SamplerError::MalformedInputFile { .. }
            | SamplerError::Persistence { .. } => ErrorClass::ServerFault,
            SamplerError::Sampling { .. } | SamplerError::Traversal { .. } => {
                ErrorClass::ClientInput
            }
        }
    }
}
