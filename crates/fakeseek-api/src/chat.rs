//! The safety-assistant chat endpoint.

use serde::{Deserialize, Serialize};

use crate::error::{AdapterError, ApiError};

/// Canned reply used when the assistant backend is unreachable. Chat
/// fails soft: the user always gets an answer.
pub const FALLBACK_REPLY: &str = "I'm sorry, I'm having trouble processing your request right \
     now. Please try again later or ask me about digital safety topics like deepfakes, \
     phishing, or online security.";

/// Chat request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's message.
    #[serde(default)]
    pub message: String,
}

/// Chat response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The assistant's reply.
    pub response: String,
}

/// Backend that produces assistant replies.
pub trait ChatAssistant {
    /// Generate a reply to one user message.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError`] if the backend cannot be reached or
    /// answers with an unusable payload.
    fn reply(
        &self,
        message: &str,
    ) -> impl Future<Output = Result<String, AdapterError>>;
}

/// Handle a chat request.
///
/// An empty or whitespace-only message is a validation failure; an
/// adapter failure degrades to [`FALLBACK_REPLY`].
///
/// # Errors
///
/// Returns [`ApiError::BadRequest`] when the message is missing.
pub async fn handle_chat<A: ChatAssistant>(
    assistant: &A,
    request: &ChatRequest,
) -> Result<ChatResponse, ApiError> {
    if request.message.trim().is_empty() {
        return Err(ApiError::BadRequest {
            error: "Message is required".to_owned(),
            details: None,
        });
    }

    let response = match assistant.reply(&request.message).await {
        Ok(reply) => reply,
        Err(_) => FALLBACK_REPLY.to_owned(),
    };

    Ok(ChatResponse { response })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    struct CannedAssistant(&'static str);

    impl ChatAssistant for CannedAssistant {
        async fn reply(&self, _message: &str) -> Result<String, AdapterError> {
            Ok(self.0.to_owned())
        }
    }

    struct BrokenAssistant;

    impl ChatAssistant for BrokenAssistant {
        async fn reply(&self, _message: &str) -> Result<String, AdapterError> {
            Err(AdapterError::Transport("connection refused".into()))
        }
    }

    #[test]
    fn replies_through_the_adapter() {
        let request = ChatRequest {
            message: "What is a deepfake?".into(),
        };
        let response =
            pollster::block_on(handle_chat(&CannedAssistant("Synthetic media."), &request))
                .unwrap();
        assert_eq!(response.response, "Synthetic media.");
    }

    #[test]
    fn missing_message_is_a_bad_request() {
        for message in ["", "   ", "\n\t"] {
            let request = ChatRequest {
                message: message.into(),
            };
            let err = pollster::block_on(handle_chat(&CannedAssistant("x"), &request))
                .unwrap_err();
            assert_eq!(err.status(), 400);
            assert_eq!(err.to_string(), "Message is required");
        }
    }

    #[test]
    fn adapter_failure_degrades_to_canned_reply() {
        let request = ChatRequest {
            message: "hello".into(),
        };
        let response = pollster::block_on(handle_chat(&BrokenAssistant, &request)).unwrap();
        assert_eq!(response.response, FALLBACK_REPLY);
    }
}
