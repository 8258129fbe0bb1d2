use std::sync::Arc;
use crate::errors::analysis_error::AnalysisError;
use crate::helpers::prompt_generator;
use crate::prompts::remediation_prompt::REMEDIATION_SYSTEM_PROMPT;
use crate::traits::ai_provider::AiProvider;

/// Asks the inference endpoint for a fix. Returns the raw completion text;
/// turning it into a patch is `PatchParser`'s job.
pub struct FailureAnalyzer {
    ai_provider: Arc<dyn AiProvider>,
}

impl FailureAnalyzer {
    pub fn new(ai_provider: Arc<dyn AiProvider>) -> Self {
        Self { ai_provider }
    }

    pub async fn analyze(&self, log_content: &str) -> Result<String, AnalysisError> {
        let user_prompt = prompt_generator::generate_prompt(log_content);

        log::info!("🧠 Sending {} bytes of failure log for analysis", log_content.len());

        let response = self
            .ai_provider
            .chat(REMEDIATION_SYSTEM_PROMPT.to_string(), vec![user_prompt])
            .await?;

        if response.trim().is_empty() {
            return Err(AnalysisError::EmptyResponse);
        }

        log::debug!("Raw model response: {}", response);
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use async_trait::async_trait;
    use crate::enums::ai_provider_error::AiProviderError;

    struct ScriptedProvider {
        reply: Result<String, AiProviderError>,
        seen: Mutex<Vec<(String, Vec<String>)>>,
    }

    #[async_trait]
    impl AiProvider for ScriptedProvider {
        async fn chat(&self, system_prompt: String, user_prompts: Vec<String>) -> Result<String, AiProviderError> {
            self.seen.lock().unwrap().push((system_prompt, user_prompts));
            self.reply.clone()
        }
    }

    fn analyzer(reply: Result<String, AiProviderError>) -> (FailureAnalyzer, Arc<ScriptedProvider>) {
        let provider = Arc::new(ScriptedProvider {
            reply,
            seen: Mutex::new(vec![]),
        });
        (FailureAnalyzer::new(provider.clone()), provider)
    }

    #[tokio::test]
    async fn test_sends_system_and_user_prompt() {
        let (analyzer, provider) = analyzer(Ok("{\"ok\": true}".to_string()));

        let response = analyzer.analyze("AssertionError: expected 5 got 4").await.unwrap();
        assert_eq!(response, "{\"ok\": true}");

        let seen = provider.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, REMEDIATION_SYSTEM_PROMPT);
        assert_eq!(seen[0].1.len(), 1);
        assert!(seen[0].1[0].contains("AssertionError: expected 5 got 4"));
    }

    #[tokio::test]
    async fn test_provider_failure_becomes_analysis_error() {
        let (analyzer, _) = analyzer(Err(AiProviderError::ApiError("HTTP 500".to_string())));
        assert!(matches!(
            analyzer.analyze("log").await,
            Err(AnalysisError::Provider(AiProviderError::ApiError(_)))
        ));
    }

    #[tokio::test]
    async fn test_blank_completion_is_an_error() {
        let (analyzer, _) = analyzer(Ok("  \n".to_string()));
        assert!(matches!(analyzer.analyze("log").await, Err(AnalysisError::EmptyResponse)));
    }
}
