//! OpenAI-compatible reply generator.
//!
//! Implements the `ReplyGenerator` collaborator contract against any API
//! speaking the OpenAI chat completions protocol, via a configurable base
//! URL. Uses [`async_openai`] for type-safe request/response handling.

pub mod config;

use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::types::chat::{
    ChatCompletionRequestAssistantMessage, ChatCompletionRequestAssistantMessageContent,
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
    ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessage,
    ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest,
};
use tracing::debug;

use parley_core::reply::ReplyGenerator;
use parley_types::chat::MessageRole;
use parley_types::error::ReplyError;

pub use self::config::OpenAiReplyConfig;

/// Reply generator backed by an OpenAI-compatible chat completions API.
///
/// # API Key Security
///
/// Does NOT derive Debug to prevent accidental exposure of the API key
/// stored inside the `async_openai::Client`.
pub struct OpenAiReplyGenerator {
    client: Client<OpenAIConfig>,
    model: String,
    system_prompt: String,
    temperature: f32,
}

impl OpenAiReplyGenerator {
    /// Create a new generator from a configuration.
    pub fn new(config: OpenAiReplyConfig) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.api_key)
            .with_api_base(&config.base_url);

        Self {
            client: Client::with_config(openai_config),
            model: config.model,
            system_prompt: config.system_prompt,
            temperature: config.temperature,
        }
    }

    /// Build a [`CreateChatCompletionRequest`] from the transcript and the
    /// latest user message.
    fn build_request(&self, transcript: &str, latest_message: &str) -> CreateChatCompletionRequest {
        let mut messages: Vec<ChatCompletionRequestMessage> =
            vec![ChatCompletionRequestMessage::System(
                ChatCompletionRequestSystemMessage {
                    content: ChatCompletionRequestSystemMessageContent::Text(
                        self.system_prompt.clone(),
                    ),
                    name: None,
                },
            )];

        let parsed = parse_transcript(transcript);
        let ends_with_latest = matches!(
            parsed.last(),
            Some((MessageRole::User, content)) if content == latest_message
        );

        for (role, content) in &parsed {
            messages.push(chat_message(*role, content.clone()));
        }

        // The transcript normally already ends with the latest user message;
        // guard against a collaborator caller that passed history only.
        if !ends_with_latest {
            messages.push(chat_message(MessageRole::User, latest_message.to_string()));
        }

        CreateChatCompletionRequest {
            model: self.model.clone(),
            messages,
            temperature: Some(self.temperature),
            ..Default::default()
        }
    }
}

impl ReplyGenerator for OpenAiReplyGenerator {
    async fn generate_reply(
        &self,
        transcript: &str,
        latest_message: &str,
    ) -> Result<String, ReplyError> {
        let request = self.build_request(transcript, latest_message);
        debug!(model = %self.model, messages = request.messages.len(), "Requesting completion");

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| ReplyError::Provider {
                message: e.to_string(),
            })?;

        response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| ReplyError::InvalidResponse("completion had no content".to_string()))
    }
}

/// Wrap role + content into the async-openai request message type.
fn chat_message(role: MessageRole, content: String) -> ChatCompletionRequestMessage {
    match role {
        MessageRole::User => ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
            content: ChatCompletionRequestUserMessageContent::Text(content),
            name: None,
        }),
        MessageRole::Assistant => {
            #[allow(deprecated)]
            ChatCompletionRequestMessage::Assistant(ChatCompletionRequestAssistantMessage {
                content: Some(ChatCompletionRequestAssistantMessageContent::Text(content)),
                refusal: None,
                name: None,
                audio: None,
                tool_calls: None,
                function_call: None,
            })
        }
    }
}

/// Parse a rendered transcript back into role-tagged messages.
///
/// Lines starting with `User: ` or `Assistant: ` open a new message; other
/// lines continue the current message's content (messages may span lines).
fn parse_transcript(transcript: &str) -> Vec<(MessageRole, String)> {
    let mut messages: Vec<(MessageRole, String)> = Vec::new();

    for line in transcript.lines() {
        if let Some(content) = line.strip_prefix("User: ") {
            messages.push((MessageRole::User, content.to_string()));
        } else if let Some(content) = line.strip_prefix("Assistant: ") {
            messages.push((MessageRole::Assistant, content.to_string()));
        } else if let Some((_, content)) = messages.last_mut() {
            content.push('\n');
            content.push_str(line);
        }
        // A leading line with no speaker prefix has nothing to attach to.
    }

    messages
}
