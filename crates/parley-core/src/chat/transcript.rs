//! Transcript rendering for the reply generator.
//!
//! A transcript is the newline-joined textual history of a session, one
//! line per message: `"<Speaker>: <content>"` in conversation order.

use parley_types::chat::ChatMessage;

/// Render a message sequence into a transcript.
///
/// Returns an empty string for an empty sequence.
pub fn render(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|m| format!("{}: {}", m.role.speaker(), m.content))
        .collect::<Vec<_>>()
        .join("\n")
}
