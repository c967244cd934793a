use std::future::Future;

use reqwest::Client as HttpClient;
use url::Url;

use crate::api::models::{Content, GenerateRequest, GenerateResponse, Tool};
use crate::app::AppConfig;
use crate::error::{DashboardError, Result};

/// Instruction pair handed to a text generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftRequest {
    pub system_instruction: String,
    pub prompt: String,
}

/// Something that turns a [`DraftRequest`] into message text.
pub trait DraftGenerator {
    fn generate(&self, request: &DraftRequest) -> impl Future<Output = Result<String>> + Send;
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: HttpClient,
    endpoint: String,
    model: String,
    api_key: String,
    search_grounding: bool,
}

impl GeminiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: HttpClient::new(),
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            search_grounding: config.search_grounding,
        }
    }

    fn generate_url(&self) -> Result<Url> {
        let raw = format!("{}/{}:generateContent", self.endpoint.trim_end_matches('/'), self.model);
        let mut url = Url::parse(&raw).map_err(|e| DashboardError::GenerationTransport(e.to_string()))?;
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }

    fn body(&self, request: &DraftRequest) -> GenerateRequest {
        GenerateRequest {
            contents: vec![Content::text(request.prompt.clone())],
            tools: if self.search_grounding { vec![Tool::google_search()] } else { Vec::new() },
            system_instruction: Content::text(request.system_instruction.clone()),
        }
    }
}

impl DraftGenerator for GeminiClient {
    async fn generate(&self, request: &DraftRequest) -> Result<String> {
        let url = self.generate_url()?;
        log::debug!("Requesting draft from model {}", self.model);
        let resp = self.http.post(url).json(&self.body(request)).send().await?;
        if !resp.status().is_success() {
            return Err(DashboardError::GenerationTransport(format!("HTTP {}", resp.status())));
        }
        let parsed: GenerateResponse = resp.json().await?;
        extract_text(&parsed).ok_or(DashboardError::GenerationEmpty)
    }
}

/// Text of the first candidate, unless it is missing or blank.
pub fn extract_text(response: &GenerateResponse) -> Option<String> {
    response
        .candidates
        .first()?
        .content
        .as_ref()?
        .parts
        .first()?
        .text
        .clone()
        .filter(|t| !t.trim().is_empty())
}
