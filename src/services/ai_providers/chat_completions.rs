use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::chat_message::ChatMessage;
use crate::structs::ai::chat_request::ChatRequest;
use crate::structs::config::remediation_config::AiSettings;
use crate::traits::ai_provider::AiProvider;

/// OpenAI-compatible chat-completions client (Hugging Face router, DeepSeek, ...).
#[derive(Clone)]
pub struct ChatCompletionsProvider {
    api_key: String,
    api_url: String,
    client: Client,
    model: String,
    timeout: Duration,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
}

impl ChatCompletionsProvider {
    pub fn new(api_key: String, api_url: String, model: String, timeout: Duration) -> Self {
        Self {
            api_key,
            api_url,
            client: Client::new(),
            model,
            timeout,
            max_tokens: None,
            temperature: None,
        }
    }

    pub fn from_settings(settings: &AiSettings) -> Self {
        Self::new(
            settings.api_key.clone(),
            settings.api_url.clone(),
            settings.model.clone(),
            settings.timeout,
        )
        .with_sampling(settings.max_tokens, settings.temperature)
    }

    pub const fn with_sampling(mut self, max_tokens: Option<u32>, temperature: Option<f32>) -> Self {
        self.max_tokens = max_tokens;
        self.temperature = temperature;
        self
    }

    fn get_messages(system_prompt: String, user_prompts: Vec<String>) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(user_prompts.len() + 1);

        if !system_prompt.is_empty() {
            messages.push(ChatMessage::system(system_prompt));
        }

        messages.extend(user_prompts.into_iter().map(ChatMessage::user));
        messages
    }

    fn get_request(&self, system_prompt: String, user_prompts: Vec<String>) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: Self::get_messages(system_prompt, user_prompts),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }

    async fn make_request(&self, request_body: &ChatRequest) -> Result<reqwest::Response, AiProviderError> {
        log::debug!("📦 Request model: {}", request_body.model);

        self.client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .timeout(self.timeout)
            .json(request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::from_reqwest(&e, self.timeout))
    }

    /// Pull `choices[0].message.content` out of a completion body.
    pub fn extract_content(json: &serde_json::Value) -> Result<String, AiProviderError> {
        json.get("choices")
            .and_then(|choices| choices.as_array())
            .and_then(|choices| choices.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .map(str::to_string)
            .ok_or_else(|| AiProviderError::SerializationError("No content in response".to_string()))
    }
}

#[async_trait]
impl AiProvider for ChatCompletionsProvider {
    async fn chat(&self, system_prompt: String, user_prompts: Vec<String>) -> Result<String, AiProviderError> {
        let request_body = self.get_request(system_prompt, user_prompts);

        let response = self.make_request(&request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(match status.as_u16() {
                401 | 403 => AiProviderError::AuthenticationError(error_text),
                429 => AiProviderError::ApiError(format!("Rate limit exceeded: {error_text}")),
                _ => AiProviderError::ApiError(format!("HTTP {status}: {error_text}")),
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiProviderError::from_reqwest(&e, self.timeout))?;

        Self::extract_content(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_carries_system_and_user_roles() {
        let provider = ChatCompletionsProvider::new(
            "key".to_string(),
            "http://localhost/v1/chat/completions".to_string(),
            "test-model".to_string(),
            Duration::from_secs(5),
        );

        let request = provider.get_request("fix things".to_string(), vec!["the log".to_string()]);
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(
            body,
            json!({
                "model": "test-model",
                "messages": [
                    {"role": "system", "content": "fix things"},
                    {"role": "user", "content": "the log"}
                ]
            })
        );
    }

    #[test]
    fn test_sampling_parameters_are_serialized_when_set() {
        let provider = ChatCompletionsProvider::new(
            "key".to_string(),
            "http://localhost".to_string(),
            "m".to_string(),
            Duration::from_secs(5),
        )
        .with_sampling(Some(512), Some(0.0));

        let body = serde_json::to_value(provider.get_request(String::new(), vec!["x".to_string()])).unwrap();
        assert_eq!(body["max_tokens"], 512);
        assert_eq!(body["temperature"], 0.0);
        assert_eq!(body["messages"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_extract_content() {
        let body = json!({"choices": [{"message": {"role": "assistant", "content": "{}"}}]});
        assert_eq!(ChatCompletionsProvider::extract_content(&body).unwrap(), "{}");

        let missing = json!({"choices": []});
        assert!(matches!(
            ChatCompletionsProvider::extract_content(&missing),
            Err(AiProviderError::SerializationError(_))
        ));

        let wrong_type = json!({"choices": [{"message": {"content": 42}}]});
        assert!(ChatCompletionsProvider::extract_content(&wrong_type).is_err());
    }
}
