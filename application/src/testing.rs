//! Scripted port implementations shared by the use case tests

use crate::ports::summarizer::Summarizer;
use crate::ports::text_generator::{GENERATION_FAILED, TextGenerator};
use crate::ports::web_context::WebContextProvider;
use async_trait::async_trait;
use sarcasm_domain::AgentOutputs;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Returns queued responses in order, then a fixed fallback. Records prompts.
pub(crate) struct ScriptedGenerator {
    responses: Mutex<VecDeque<String>>,
    fallback: String,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new(responses: Vec<&str>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().map(String::from).collect()),
            fallback: GENERATION_FAILED.to_string(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Always returns the transport sentinel
    pub fn failing() -> Self {
        Self::new(vec![])
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn complete(&self, prompt: &str) -> String {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

/// Routes each prompt to the first rule whose marker it contains.
///
/// Each rule has its own queue; an exhausted queue repeats its last response.
pub(crate) struct RoutedGenerator {
    rules: Vec<(&'static str, Mutex<VecDeque<String>>)>,
    prompts: Mutex<Vec<String>>,
}

/// Marker present only in perspective analysis prompts
pub(crate) const ANALYSIS: &str = "### Analysis Target";
/// Marker present only in the team selection prompt
pub(crate) const SELECTION: &str = "You dispatch text analyses";
/// Marker present only in debate prompts
pub(crate) const DEBATE: &str = "one member of a panel";
/// Marker present only in the gate prompt
pub(crate) const GATE: &str = "pragmatic meta-controller";
/// Marker present only in the recruitment prompt
pub(crate) const RECRUIT: &str = "meta-reasoning assistant";

impl RoutedGenerator {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn route<S: Into<String>>(mut self, marker: &'static str, responses: Vec<S>) -> Self {
        self.rules.push((
            marker,
            Mutex::new(responses.into_iter().map(Into::into).collect()),
        ));
        self
    }

    pub fn prompts_matching(&self, marker: &str) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.contains(marker))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl TextGenerator for RoutedGenerator {
    async fn complete(&self, prompt: &str) -> String {
        self.prompts.lock().unwrap().push(prompt.to_string());
        for (marker, queue) in &self.rules {
            if prompt.contains(marker) {
                let mut queue = queue.lock().unwrap();
                return if queue.len() > 1 {
                    queue.pop_front().unwrap_or_default()
                } else {
                    queue
                        .front()
                        .cloned()
                        .unwrap_or_else(|| GENERATION_FAILED.to_string())
                };
            }
        }
        GENERATION_FAILED.to_string()
    }
}

pub(crate) struct FixedWebContext(pub &'static str);

#[async_trait]
impl WebContextProvider for FixedWebContext {
    async fn search_and_summarize(&self, _text: &str) -> String {
        self.0.to_string()
    }
}

/// Summarizer that reports how many outputs it was given
pub(crate) struct CountingSummarizer;

#[async_trait]
impl Summarizer for CountingSummarizer {
    async fn summarize(&self, outputs: &AgentOutputs, _text: &str) -> String {
        format!("{} outputs", outputs.len())
    }
}
