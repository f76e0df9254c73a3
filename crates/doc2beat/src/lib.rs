//! doc2beat - turn technical documentation into song lyrics
//!
//! This crate fetches a documentation page, isolates its main content,
//! and asks an LLM chat-completion service to rewrite it as song lyrics
//! in a given (or freshly invented) musical style.
//!
//! ## Pipeline
//!
//! The [`Pipeline`] sequences the components for one [`InputRecord`]:
//!
//! 1. [`StyleGenerator`] - invents a style unless the record supplies one
//! 2. [`Fetcher`] - downloads the document (never fails, see [`HttpFetcher`])
//! 3. [`extract_main_content`] - strips navigation and boilerplate
//! 4. [`LyricsGenerator`] - writes the lyrics
//!
//! Batch runs keep going when a record fails and emit an error row in its
//! place, so the output always lines up with the input.

pub mod config;
mod error;
mod extract;
pub mod fetcher;
pub mod genres;
pub mod llm;
mod lyrics;
pub mod pipeline;
mod prompt;
mod style;
pub mod table;
mod text;
mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{Credentials, Settings};
pub use error::{ConfigError, ExtractError, FetchError, LlmError, RecordError, TableError};
pub use extract::{extract_main_content, try_extract_main_content};
pub use fetcher::{Fetcher, HttpFetcher};
pub use genres::pick_genres;
pub use llm::{ChatClient, ChatRequest, Message, OpenRouterClient};
pub use lyrics::LyricsGenerator;
pub use pipeline::{Pipeline, PipelineBuilder};
pub use prompt::{GenerationContext, PromptVariant};
pub use style::StyleGenerator;
pub use text::truncate_with_ellipsis;
pub use types::{BatchReport, InputRecord, ResultRecord, Stage};

/// Default User-Agent string
pub const DEFAULT_USER_AGENT: &str = concat!("doc2beat/", env!("CARGO_PKG_VERSION"));

/// Maximum length of a song style, in characters
pub const MAX_STYLE_CHARS: usize = 1000;

/// Maximum length of generated lyrics, in characters
pub const MAX_LYRICS_CHARS: usize = 5000;

/// Maximum amount of document text sent to the lyrics prompt, in characters
pub const MAX_CONTENT_CHARS: usize = 8000;

/// Number of genres offered to the model per style request
pub const GENRE_SAMPLE_SIZE: usize = 5;

/// Marker appended to truncated text
pub const ELLIPSIS: &str = "...";

/// Prefix of the lyrics cell in rows that failed during a batch run
pub const ERROR_PREFIX: &str = "Error processing: ";

/// Style cell of rows that failed before any style existed
pub const ERROR_STYLE: &str = "Error";
