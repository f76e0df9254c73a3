//! In-crate stand-ins for the model and the network

use crate::error::LlmError;
use crate::fetcher::{fetch_failed_placeholder, Fetcher};
use crate::llm::{ChatClient, ChatRequest};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Chat client that replays scripted outcomes and records every request
#[derive(Default)]
pub struct ScriptedClient {
    outcomes: Mutex<VecDeque<Result<String, LlmError>>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful completion
    pub fn reply(self, content: impl Into<String>) -> Self {
        self.push(Ok(content.into()))
    }

    /// Queue a failed completion
    pub fn fail(self, error: LlmError) -> Self {
        self.push(Err(error))
    }

    fn push(self, outcome: Result<String, LlmError>) -> Self {
        self.outcomes.lock().unwrap().push_back(outcome);
        self
    }

    /// Requests seen so far, oldest first
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of style requests seen
    pub fn style_calls(&self) -> usize {
        self.requests()
            .iter()
            .filter(|r| {
                r.content_of("system")
                    .is_some_and(|s| s.contains("style prompts"))
            })
            .count()
    }
}

#[async_trait]
impl ChatClient for ScriptedClient {
    async fn chat_completion(&self, request: ChatRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(LlmError::EmptyResponse))
    }
}

/// Fetcher serving canned pages; unknown URLs get the failure placeholder
#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
    calls: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.insert(url.into(), body.into());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for StaticFetcher {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn fetch(&self, url: &str) -> String {
        self.calls.lock().unwrap().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .unwrap_or_else(|| fetch_failed_placeholder(url))
    }
}
