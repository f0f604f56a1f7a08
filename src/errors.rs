// errors.rs
use std::fmt;

/// Errors originating from the batch pipeline stages. Each stage returns
/// its own variant so the runner can decide whether to abort the batch.
#[derive(Debug)]
pub enum PipelineError {
    Extract(String),
    Transform(String),
    Load(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Extract(msg) => write!(f, "Extraction failed: {msg}"),
            PipelineError::Transform(msg) => write!(f, "Transformation failed: {msg}"),
            PipelineError::Load(msg) => write!(f, "Load failed: {msg}"),
        }
    }
}

impl std::error::Error for PipelineError {}

/// Errors originating from either the server logic
/// (routing, bad query params, etc.) or downstream layers (DB).
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    DbError(String),
    InternalError,
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::DbError(msg) => write!(f, "Database Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
