//! Core types for doc2beat

use serde::{Deserialize, Serialize};

/// One document to turn into a song
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    /// URL of the documentation page
    pub document_url: String,

    /// Predefined song style; a style is generated when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub song_style: Option<String>,
}

impl InputRecord {
    /// Create a record that lets the pipeline pick a style
    pub fn new(document_url: impl Into<String>) -> Self {
        Self {
            document_url: document_url.into(),
            song_style: None,
        }
    }

    /// Use a predefined style
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.song_style = Some(style.into());
        self
    }
}

/// One row of pipeline output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub document_url: String,
    pub song_style: String,
    pub song_lyrics: String,
}

/// Outcome of a batch run
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// One row per input record, in input order
    pub results: Vec<ResultRecord>,
    /// Number of rows that hold generated lyrics rather than an error
    pub succeeded: usize,
}

impl BatchReport {
    /// Number of rows that hold an error placeholder
    pub fn failed(&self) -> usize {
        self.results.len().saturating_sub(self.succeeded)
    }
}

/// Per-record pipeline stage
///
/// A record moves `Start -> StyleResolved -> ContentFetched ->
/// LyricsGenerated -> Done`. A failure is reported with the stage that was
/// being entered when it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    StyleResolved,
    ContentFetched,
    LyricsGenerated,
    Done,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Start => write!(f, "start"),
            Stage::StyleResolved => write!(f, "style generation"),
            Stage::ContentFetched => write!(f, "content fetch"),
            Stage::LyricsGenerated => write!(f, "lyrics generation"),
            Stage::Done => write!(f, "done"),
        }
    }
}
