//! Configuration for the OpenAI-compatible reply generator.

/// Default base URL (the official OpenAI API).
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model for reply generation.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default system prompt. The service's original deployment targeted a
/// math-tutoring assistant; override via [`OpenAiReplyConfig::system_prompt`].
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful AI assistant that specializes in basic math operations.";

/// Default sampling temperature. Kept low for deterministic replies.
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Configuration for an [`super::OpenAiReplyGenerator`].
pub struct OpenAiReplyConfig {
    /// Base URL for the API (any OpenAI-compatible endpoint).
    pub base_url: String,
    /// API key for authentication.
    pub api_key: String,
    /// Model identifier (e.g., "gpt-4o-mini").
    pub model: String,
    /// System prompt prepended to every request.
    pub system_prompt: String,
    /// Sampling temperature.
    pub temperature: f32,
}

impl OpenAiReplyConfig {
    /// Create a config with the given API key and all defaults.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.into(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.into(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the system prompt.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }
}
