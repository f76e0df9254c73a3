//! Error types for doc2beat
//!
//! Fetching and extraction errors are recovered where they happen and only
//! show up in logs. Generation errors travel up to the pipeline, which
//! either records them in the output table or hands them to the caller.

use crate::types::Stage;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while downloading a document
#[derive(Debug, Error)]
pub enum FetchError {
    /// URL has invalid scheme
    #[error("Invalid URL: must start with http:// or https://")]
    InvalidUrlScheme,

    /// Failed to build HTTP client
    #[error("Failed to create HTTP client")]
    ClientBuildError(#[source] reqwest::Error),

    /// Request did not complete within the fetch timeout
    #[error("Request timed out")]
    Timeout,

    /// Failed to connect to server
    #[error("Failed to connect to server")]
    ConnectError(#[source] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server returned HTTP {0}")]
    HttpStatus(u16),

    /// Other request error
    #[error("Request failed: {0}")]
    RequestError(String),
}

impl FetchError {
    /// Create an error from a reqwest error
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_connect() {
            FetchError::ConnectError(err)
        } else {
            FetchError::RequestError(err.to_string())
        }
    }
}

/// Errors raised while preparing HTML extraction
#[derive(Debug, Clone, Error)]
pub enum ExtractError {
    /// A CSS selector did not parse
    #[error("Invalid CSS selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },

    /// A boilerplate pattern did not compile
    #[error("Invalid noise pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Errors from the chat-completion service
#[derive(Debug, Error)]
pub enum LlmError {
    /// Connection failed or timed out
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response (auth failure, rate limit, invalid request)
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// Response body did not have the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// The first choice carried no message content
    #[error("Model returned no content")]
    EmptyResponse,
}

/// A record that could not be turned into lyrics
#[derive(Debug, Error)]
#[error("{stage} failed: {source}")]
pub struct RecordError {
    /// Stage that was running when the failure happened
    pub stage: Stage,
    /// Style resolved before the failure, if any
    pub style: Option<String>,
    /// Underlying generation error
    #[source]
    pub source: LlmError,
}

/// Errors loading credentials or settings
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file does not exist
    #[error("Configuration file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The file exists but could not be read
    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for the expected shape
    #[error("Failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A required value is present but blank
    #[error("`{field}` in {} must not be empty", path.display())]
    EmptyValue { path: PathBuf, field: &'static str },
}

/// Errors reading or writing CSV tables
#[derive(Debug, Error)]
pub enum TableError {
    /// CSV syntax, header or I/O failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks a required column
    #[error("Input file has no `{column}` column")]
    MissingColumn { column: &'static str },

    /// A data row has no document URL
    #[error("Row {row} has no document_url")]
    MissingUrl { row: usize },
}
