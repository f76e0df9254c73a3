//! Lyrics generation

use crate::error::LlmError;
use crate::prompt::GenerationContext;
use crate::text::{take_chars, truncate_with_ellipsis};
use crate::{MAX_CONTENT_CHARS, MAX_LYRICS_CHARS};
use tracing::debug;

/// Rewrites document text as lyrics with one chat completion
///
/// Only the first [`MAX_CONTENT_CHARS`] chars of the document reach the
/// prompt. Model failures are returned to the caller; there is no retry.
#[derive(Debug, Clone)]
pub struct LyricsGenerator {
    ctx: GenerationContext,
}

impl LyricsGenerator {
    pub fn new(ctx: GenerationContext) -> Self {
        Self { ctx }
    }

    /// Generate lyrics for `document_content` in `style`
    ///
    /// The result is trimmed and capped at [`MAX_LYRICS_CHARS`].
    pub async fn generate_song_lyrics(
        &self,
        document_content: &str,
        style: &str,
    ) -> Result<String, LlmError> {
        let content = take_chars(document_content, MAX_CONTENT_CHARS);
        debug!(
            model = %self.ctx.model(),
            content_chars = content.chars().count(),
            "Generating song lyrics"
        );

        let request = self
            .ctx
            .variant()
            .lyrics_request(self.ctx.model(), content, style);
        let response = self.ctx.client().chat_completion(request).await?;

        let lyrics = truncate_with_ellipsis(response.trim(), MAX_LYRICS_CHARS);
        debug!(chars = lyrics.chars().count(), "Generated song lyrics");
        Ok(lyrics)
    }
}
