use crate::models::ConversationResponse;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the conversation store
#[derive(Debug, Error)]
pub enum ConversationError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Client for the remote AI-conversation store
///
/// The store owns the chat transcripts between users and the in-app AI
/// companion; this service only ever reads from it.
pub struct ConversationClient {
    base_url: String,
    client: Client,
}

impl ConversationClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    /// Fetch the full conversation payload for a user
    /// (`{ success, data: { userInfo, conversation: [...] } }`)
    pub async fn fetch_conversations(&self, user_id: &str) -> Result<Value, ConversationError> {
        let url = format!(
            "{}/api/v1/chats/ai-conversation/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(user_id)
        );

        tracing::debug!("Fetching conversations from: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ConversationError::ApiError(format!(
                "Failed to fetch conversations: {}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }

    /// Messages-only view of the same payload
    pub async fn fetch_messages(
        &self,
        user_id: &str,
    ) -> Result<ConversationResponse, ConversationError> {
        let payload = self.fetch_conversations(user_id).await?;

        let success = payload
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        if !success {
            return Err(ConversationError::NotFound(format!(
                "Conversations not found for user {}",
                user_id
            )));
        }

        let messages = payload
            .get("data")
            .and_then(|data| data.get("conversation"))
            .and_then(Value::as_array)
            .ok_or_else(|| ConversationError::InvalidResponse("Missing conversation array".into()))?
            .clone();

        Ok(ConversationResponse {
            success: true,
            user_id: user_id.to_string(),
            total_messages: messages.len(),
            messages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversation_client_creation() {
        let client = ConversationClient::new("http://conversations.test:5000/".to_string());
        assert_eq!(client.base_url, "http://conversations.test:5000/");
    }
}
