//! Prompt variants and the shared generation context

use crate::genres::{EXTENDED_GENRES, STANDARD_GENRES};
use crate::llm::{ChatClient, ChatRequest};
use crate::{MAX_LYRICS_CHARS, MAX_STYLE_CHARS};
use std::sync::Arc;

/// Sampling temperature for lyrics, both variants
const LYRICS_TEMPERATURE: f32 = 0.8;

const ACRONYM_RULE: &str = "Never use acronyms the voice model mispronounces, such as AI, \
                            NIH or ORCID; write the full words instead.";

/// Which prompt family to send
///
/// Both variants share the same pipeline. They differ in prompt wording,
/// the genre catalog offered for styles, and the style temperature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PromptVariant {
    /// Plain style descriptions from a compact catalog of vocal genres
    #[default]
    Standard,
    /// Experimental styles from the full catalog, stricter acronym rules
    ExtraCreative,
}

impl PromptVariant {
    /// Genres sampled for style requests
    pub fn genre_catalog(&self) -> &'static [&'static str] {
        match self {
            PromptVariant::Standard => STANDARD_GENRES,
            PromptVariant::ExtraCreative => EXTENDED_GENRES,
        }
    }

    /// Temperature for style requests
    pub fn style_temperature(&self) -> f32 {
        match self {
            PromptVariant::Standard => 1.0,
            PromptVariant::ExtraCreative => 1.2,
        }
    }

    /// Temperature for lyrics requests
    pub fn lyrics_temperature(&self) -> f32 {
        LYRICS_TEMPERATURE
    }

    /// System and user prompt for a style request
    pub fn style_prompt(&self, genres: &[&str]) -> (String, String) {
        let genre_list = genres.join(", ");
        match self {
            PromptVariant::Standard => (
                "You write short song style prompts for a music generation model. \
                 Always describe a vocal genre with singing, never instrumental music. \
                 You are given a few genres; pick exactly one and describe a song in it."
                    .to_string(),
                format!(
                    "Write one VOCAL song style description under {MAX_STYLE_CHARS} characters. \
                     Pick exactly ONE genre from this list: {genre_list}. \
                     Cover the genre, tempo, vocal character, instrumentation, mood and lyrical \
                     themes in plain prose. Output ONLY the style description."
                ),
            ),
            PromptVariant::ExtraCreative => (
                "You are an inventive producer writing VOCAL song style prompts for a music \
                 generation model. Never choose instrumental music. You are given a random \
                 handful of genres; pick ONE and build a vivid, memorable description around it \
                 with unexpected sonic twists, unusual vocal effects, surprising instrumentation \
                 and bold production choices."
                    .to_string(),
                format!(
                    "Write one CREATIVE and INVENTIVE vocal song description under \
                     {MAX_STYLE_CHARS} characters. From this shuffled list, pick exactly ONE \
                     genre: {genre_list}. It MUST be a vocal genre. Add experimental elements, \
                     genre fusions or odd production techniques. Include the genre with its \
                     twist, tempo and how it shifts, vocal characteristics, instrumentation, \
                     mood and lyrical themes. Be specific and vivid. Output ONLY the style \
                     description."
                ),
            ),
        }
    }

    /// System and user prompt for a lyrics request
    ///
    /// `content` is inserted as given; callers cap its length.
    pub fn lyrics_prompt(&self, content: &str, style: &str) -> (String, String) {
        let system = format!(
            "You are a songwriter who turns technical documentation into lyrics that teach. \
             Keep every instruction, procedure, command and technical detail; include concrete \
             steps, best practices and warnings instead of generalities. {ACRONYM_RULE}"
        );
        let user = format!(
            "Write song lyrics in this style: \"{style}\"\n\
             \n\
             REQUIREMENTS:\n\
             1. Keep the instructional content: specific steps, procedures, commands and technical details.\n\
             2. Keep the guidance: how-to information, best practices, warnings and troubleshooting tips.\n\
             3. Stay accurate: use the real technical terms and processes, do not generalise.\n\
             4. A listener should learn what the documentation teaches.\n\
             \n\
             The lyrics must not exceed {MAX_LYRICS_CHARS} characters; shorter is fine for short documents.\n\
             \n\
             {}\n\
             \n\
             Documentation content:\n\
             {content}\n\
             \n\
             Output ONLY the song lyrics.",
            self.acronym_guidance()
        );
        (system, user)
    }

    /// Build a style request for `genres`
    pub fn style_request(&self, model: &str, genres: &[&str]) -> ChatRequest {
        let (system, user) = self.style_prompt(genres);
        ChatRequest::new(model, system, user).temperature(self.style_temperature())
    }

    /// Build a lyrics request
    pub fn lyrics_request(&self, model: &str, content: &str, style: &str) -> ChatRequest {
        let (system, user) = self.lyrics_prompt(content, style);
        ChatRequest::new(model, system, user).temperature(self.lyrics_temperature())
    }

    fn acronym_guidance(&self) -> &'static str {
        match self {
            PromptVariant::Standard => {
                "ACRONYMS: do not write \"AI\", \"NIH\" or \"ORCID\". Say \"artificial \
                 intelligence\", \"research institute\" and \"researcher ID\" instead."
            }
            PromptVariant::ExtraCreative => {
                "ACRONYMS:\n\
                 - The voice model mispronounces \"AI\" (a-eye), \"NIH\" (en-aye-aytch) and \"ORCID\" (ork-id); never use them.\n\
                 - Use \"artificial intelligence\", \"research institute\" and \"researcher ID\" instead.\n\
                 - These are sung correctly and may stay: SSO, NSF, API, URL, HTML, CSS, JSON, XML.\n\
                 - For any other acronym, spell it out phonetically or describe it in words."
            }
        }
    }
}

/// Everything the generators need to talk to the model
///
/// Built once at startup and shared by the style and lyrics generators.
#[derive(Clone)]
pub struct GenerationContext {
    client: Arc<dyn ChatClient>,
    model: String,
    variant: PromptVariant,
}

impl GenerationContext {
    pub fn new(client: Arc<dyn ChatClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            variant: PromptVariant::default(),
        }
    }

    /// Select the prompt variant
    pub fn with_variant(mut self, variant: PromptVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn client(&self) -> &dyn ChatClient {
        self.client.as_ref()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn variant(&self) -> PromptVariant {
        self.variant
    }
}

impl std::fmt::Debug for GenerationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationContext")
            .field("model", &self.model)
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}
