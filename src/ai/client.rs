use crate::ai::GenerationBackend;
use async_trait::async_trait;
use openrouter_api::{
    models::provider_preferences::ProviderPreferences,
    models::provider_preferences::ProviderSort,
    types::chat::{ChatCompletionRequest, Message},
};
use serde::Serialize;

pub const DEFAULT_MODEL: &str = "openai/gpt-oss-120b";
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

const SYSTEM_PROMPT: &str =
    "You are a Japanese language tutor. Follow the requested output format exactly.";

#[derive(Debug)]
pub struct OpenRouterClient {
    client: openrouter_api::OpenRouterClient<openrouter_api::Ready>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelConfig {
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: Some(DEFAULT_TEMPERATURE),
            max_tokens: Some(DEFAULT_MAX_TOKENS),
        }
    }
}

impl OpenRouterClient {
    /// Build a ready client from OPENROUTER_API_KEY.
    pub fn new() -> Result<Self, String> {
        let client = openrouter_api::OpenRouterClient::quick()
            .map_err(|e| format!("Failed to create OpenRouter client: {}", e))?;

        Ok(Self { client })
    }

    pub async fn generate(
        &self,
        prompt: &str,
        config: Option<&ModelConfig>,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let model = config
            .map(|c| c.model.clone())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let messages = vec![
            Message::text("system", SYSTEM_PROMPT),
            Message::text("user", prompt),
        ];

        let provider = ProviderPreferences::new().with_sort(ProviderSort::Throughput);

        let request = ChatCompletionRequest {
            model,
            messages,
            provider: Some(provider),
            stream: None,
            response_format: None,
            tools: None,
            tool_choice: None,
            models: None,
            transforms: None,
            route: None,
            user: None,
            max_tokens: config
                .and_then(|c| c.max_tokens)
                .or(Some(DEFAULT_MAX_TOKENS)),
            temperature: config
                .and_then(|c| c.temperature)
                .or(Some(DEFAULT_TEMPERATURE)),
            top_p: None,
            top_k: None,
            frequency_penalty: None,
            presence_penalty: None,
            repetition_penalty: None,
            min_p: None,
            top_a: None,
            seed: None,
            stop: None,
            logit_bias: None,
            logprobs: None,
            top_logprobs: None,
            prediction: None,
            parallel_tool_calls: None,
            verbosity: None,
        };

        let response = self
            .client
            .chat()?
            .chat_completion(request)
            .await
            .map_err(|e| format!("OpenRouter API error: {}", e))?;

        if let Some(choice) = response.choices.first() {
            match &choice.message.content {
                openrouter_api::MessageContent::Text(text) => Ok(text.clone()),
                openrouter_api::MessageContent::Parts(parts) => {
                    let text_parts: Vec<String> = parts
                        .iter()
                        .filter_map(|p| {
                            if let openrouter_api::ContentPart::Text(tc) = p {
                                Some(tc.text.clone())
                            } else {
                                None
                            }
                        })
                        .collect();
                    Ok(text_parts.join("\n"))
                }
            }
        } else {
            Err("No response choices received".into())
        }
    }
}

#[async_trait]
impl GenerationBackend for OpenRouterClient {
    async fn generate(
        &self,
        prompt: &str,
        config: Option<&ModelConfig>,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        OpenRouterClient::generate(self, prompt, config).await
    }
}
