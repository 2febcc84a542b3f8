//! Narrator: turns a simulated weather state into prose, with or without a model.

use tracing::instrument;
use weatherlab_core::NarrativeConfig;
use weatherlab_physics::{PhysicsParameters, WeatherOutput};

use crate::client::GeminiClient;
use crate::error::NarrativeError;
use crate::fallback::fallback_sections;
use crate::prompt::{chat_prompt, summary_prompt};
use crate::sections::{parse_sections, NarrativeSections};

/// Reply to chat questions when no API key is configured.
pub const NOT_CONFIGURED_REPLY: &str =
    "I'm sorry, I can't answer that right now because the AI service is not configured.";

/// Reply to chat questions when the model call fails.
pub const CHAT_ERROR_REPLY: &str =
    "I encountered an error while processing your question. Please try again.";

#[derive(Debug, Clone, Default)]
pub struct Narrator {
    client: Option<GeminiClient>,
}

impl Narrator {
    pub fn new(client: Option<GeminiClient>) -> Self {
        Self { client }
    }

    /// Narrator with no model; every summary is the templated fallback.
    pub fn offline() -> Self {
        Self { client: None }
    }

    pub fn from_config(config: &NarrativeConfig) -> Result<Self, NarrativeError> {
        let client = GeminiClient::from_config(config)?;
        match &client {
            Some(c) => tracing::info!("Narrative model configured: {}", c.model()),
            None => tracing::info!("No API key set, narratives use the built-in templates"),
        }
        Ok(Self { client })
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Explain a weather state. Never fails: model errors and unusable
    /// answers degrade to [`fallback_sections`].
    #[instrument(skip_all, level = "info")]
    pub async fn summarize(
        &self,
        params: &PhysicsParameters,
        output: &WeatherOutput,
    ) -> NarrativeSections {
        let Some(client) = &self.client else {
            return fallback_sections(params, output);
        };

        match client.generate(&summary_prompt(params, output)).await {
            Ok(text) => {
                let sections = parse_sections(&text, output.comfort_index);
                if sections.is_blank() {
                    tracing::warn!("Model answer had none of the expected sections, using fallback");
                    fallback_sections(params, output)
                } else {
                    sections
                }
            }
            Err(e) => {
                tracing::warn!("Narrative generation failed, using fallback: {}", e);
                fallback_sections(params, output)
            }
        }
    }

    /// Answer a free-form question about the current simulation.
    #[instrument(skip_all, fields(question_len = question.len()), level = "info")]
    pub async fn ask(
        &self,
        question: &str,
        params: &PhysicsParameters,
        output: &WeatherOutput,
    ) -> Result<String, NarrativeError> {
        let Some(client) = &self.client else {
            return Ok(NOT_CONFIGURED_REPLY.to_string());
        };

        client.generate(&chat_prompt(question, params, output)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weatherlab_physics::evaluate;

    #[tokio::test]
    async fn test_offline_summary_is_fallback() {
        let narrator = Narrator::offline();
        let params = PhysicsParameters::EARTH;
        let output = evaluate(params);

        let sections = narrator.summarize(&params, &output).await;
        assert_eq!(sections, fallback_sections(&params, &output));
        assert!(!narrator.is_configured());
    }

    #[tokio::test]
    async fn test_offline_ask_is_not_configured_reply() {
        let narrator = Narrator::offline();
        let params = PhysicsParameters::EARTH;
        let reply = narrator
            .ask("Why?", &params, &evaluate(params))
            .await
            .unwrap();
        assert_eq!(reply, NOT_CONFIGURED_REPLY);
    }

    #[test]
    fn test_from_config_with_key() {
        let config = NarrativeConfig {
            api_key: Some("abc".to_string()),
            ..NarrativeConfig::default()
        };
        let narrator = Narrator::from_config(&config).unwrap();
        assert!(narrator.is_configured());
    }
}
