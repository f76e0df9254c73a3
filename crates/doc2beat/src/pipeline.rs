//! Pipeline orchestration
//!
//! One record runs `Start -> StyleResolved -> ContentFetched ->
//! LyricsGenerated -> Done`. Fetching and extraction cannot fail; style and
//! lyrics generation can. A single record hands the error back to the
//! caller, a batch turns it into an error row and moves on.

use crate::error::{FetchError, RecordError};
use crate::extract::extract_main_content;
use crate::fetcher::{Fetcher, HttpFetcher};
use crate::llm::ChatClient;
use crate::lyrics::LyricsGenerator;
use crate::prompt::{GenerationContext, PromptVariant};
use crate::style::StyleGenerator;
use crate::text::truncate_with_ellipsis;
use crate::types::{BatchReport, InputRecord, ResultRecord, Stage};
use crate::{ERROR_PREFIX, ERROR_STYLE, MAX_LYRICS_CHARS, MAX_STYLE_CHARS};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Builder for configuring a [`Pipeline`]
pub struct PipelineBuilder {
    client: Arc<dyn ChatClient>,
    model: String,
    variant: PromptVariant,
    fetcher: Option<Arc<dyn Fetcher>>,
}

impl PipelineBuilder {
    /// Select the prompt variant
    pub fn variant(mut self, variant: PromptVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Use a custom document fetcher instead of [`HttpFetcher`]
    pub fn fetcher(mut self, fetcher: Arc<dyn Fetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Build the pipeline
    ///
    /// Fails only when the default HTTP fetcher cannot be created.
    pub fn build(self) -> Result<Pipeline, FetchError> {
        let fetcher = match self.fetcher {
            Some(fetcher) => fetcher,
            None => Arc::new(HttpFetcher::new()?),
        };
        let ctx = GenerationContext::new(self.client, self.model).with_variant(self.variant);
        Ok(Pipeline::new(fetcher, ctx))
    }
}

/// Documentation-to-lyrics pipeline
pub struct Pipeline {
    fetcher: Arc<dyn Fetcher>,
    styles: StyleGenerator,
    lyrics: LyricsGenerator,
}

impl Pipeline {
    /// Create a pipeline builder for `model` served by `client`
    pub fn builder(client: Arc<dyn ChatClient>, model: impl Into<String>) -> PipelineBuilder {
        PipelineBuilder {
            client,
            model: model.into(),
            variant: PromptVariant::default(),
            fetcher: None,
        }
    }

    pub fn new(fetcher: Arc<dyn Fetcher>, ctx: GenerationContext) -> Self {
        Self {
            fetcher,
            styles: StyleGenerator::new(ctx.clone()),
            lyrics: LyricsGenerator::new(ctx),
        }
    }

    /// Turn one document into lyrics
    ///
    /// A supplied style skips style generation. Generation errors are
    /// returned with the stage and the style resolved so far.
    pub async fn process_single_input(
        &self,
        input: &InputRecord,
    ) -> Result<ResultRecord, RecordError> {
        let url = input.document_url.as_str();
        debug!(url = %url, stage = %Stage::Start, "Processing document");

        let style = match input.song_style.as_deref() {
            Some(style) => truncate_with_ellipsis(style, MAX_STYLE_CHARS),
            None => self
                .styles
                .generate_song_style(url)
                .await
                .map_err(|source| RecordError {
                    stage: Stage::StyleResolved,
                    style: None,
                    source,
                })?,
        };
        debug!(url = %url, stage = %Stage::StyleResolved, style = %style, "Song style resolved");

        let raw = self.fetcher.fetch(url).await;
        let content = extract_main_content(&raw);
        debug!(
            url = %url,
            stage = %Stage::ContentFetched,
            fetcher = self.fetcher.name(),
            fetched_chars = raw.chars().count(),
            extracted_chars = content.chars().count(),
            "Document content ready"
        );

        let lyrics = self
            .lyrics
            .generate_song_lyrics(&content, &style)
            .await
            .map_err(|source| RecordError {
                stage: Stage::LyricsGenerated,
                style: Some(style.clone()),
                source,
            })?;
        debug!(url = %url, stage = %Stage::Done, "Lyrics generated");

        Ok(ResultRecord {
            document_url: input.document_url.clone(),
            song_style: style,
            song_lyrics: lyrics,
        })
    }

    /// Process records one after another, in order
    ///
    /// Every input yields exactly one row; failed records get an error row.
    pub async fn process_multiple_inputs(&self, inputs: &[InputRecord]) -> BatchReport {
        let total = inputs.len();
        info!(total, "Starting batch processing");

        let mut report = BatchReport {
            results: Vec::with_capacity(total),
            succeeded: 0,
        };

        for (i, input) in inputs.iter().enumerate() {
            let n = i + 1;
            info!(
                n,
                total,
                percent = %format!("{:.1}", n as f64 / total as f64 * 100.0),
                url = %input.document_url,
                "Processing document"
            );

            match self.process_single_input(input).await {
                Ok(row) => {
                    report.succeeded += 1;
                    info!(n, total, "Completed document");
                    report.results.push(row);
                }
                Err(e) => {
                    warn!(n, total, url = %input.document_url, error = %e, "Failed to process document");
                    report.results.push(error_row(input, e));
                }
            }
        }

        info!(succeeded = report.succeeded, total, "Batch processing complete");
        report
    }
}

/// Placeholder row for a record that failed during a batch
fn error_row(input: &InputRecord, error: RecordError) -> ResultRecord {
    let song_lyrics = truncate_with_ellipsis(&format!("{ERROR_PREFIX}{error}"), MAX_LYRICS_CHARS);
    ResultRecord {
        document_url: input.document_url.clone(),
        song_style: error.style.unwrap_or_else(|| ERROR_STYLE.to_string()),
        song_lyrics,
    }
}
