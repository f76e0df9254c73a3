//! Song style generation

use crate::error::LlmError;
use crate::genres::pick_genres;
use crate::prompt::GenerationContext;
use crate::text::truncate_with_ellipsis;
use crate::{GENRE_SAMPLE_SIZE, MAX_STYLE_CHARS};
use rand::Rng;
use tracing::debug;

/// Invents a musical style for a document with one chat completion
///
/// Model failures are returned to the caller untouched; there is no retry.
#[derive(Debug, Clone)]
pub struct StyleGenerator {
    ctx: GenerationContext,
}

impl StyleGenerator {
    pub fn new(ctx: GenerationContext) -> Self {
        Self { ctx }
    }

    /// Generate a style using the thread-local random source
    pub async fn generate_song_style(&self, document_url: &str) -> Result<String, LlmError> {
        let genres = self.sample_genres(&mut rand::thread_rng());
        self.generate_from_genres(document_url, &genres).await
    }

    /// Generate a style drawing the genre sample from `rng`
    pub async fn generate_song_style_with_rng<R: Rng + ?Sized>(
        &self,
        document_url: &str,
        rng: &mut R,
    ) -> Result<String, LlmError> {
        let genres = self.sample_genres(rng);
        self.generate_from_genres(document_url, &genres).await
    }

    /// Generate a style offering exactly `genres` to the model
    ///
    /// The result is trimmed and capped at [`MAX_STYLE_CHARS`].
    pub async fn generate_from_genres(
        &self,
        document_url: &str,
        genres: &[&str],
    ) -> Result<String, LlmError> {
        debug!(url = %document_url, genres = ?genres, "Generating song style");

        let request = self
            .ctx
            .variant()
            .style_request(self.ctx.model(), genres);
        let response = self.ctx.client().chat_completion(request).await?;

        Ok(truncate_with_ellipsis(response.trim(), MAX_STYLE_CHARS))
    }

    fn sample_genres<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<&'static str> {
        pick_genres(rng, self.ctx.variant().genre_catalog(), GENRE_SAMPLE_SIZE)
    }
}
