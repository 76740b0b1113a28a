use crate::core::prompts::DATING_ADVISOR_PROMPT;
use crate::services::llm::ChatMessage;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Coarse conversation themes noted per session
const TRACKED_TOPICS: [&str; 5] = ["date", "match", "profile", "advice", "relationship"];
const MAX_TRACKED_TOPICS: usize = 5;

/// One user's advisor conversation: the running transcript plus the themes
/// seen in their messages so far
#[derive(Debug, Clone)]
pub struct ChatSession {
    pub messages: Vec<ChatMessage>,
    pub recent_topics: Vec<String>,
}

impl ChatSession {
    fn new() -> Self {
        Self {
            messages: vec![ChatMessage::system(DATING_ADVISOR_PROMPT)],
            recent_topics: Vec::new(),
        }
    }

    fn note_topics(&mut self, message: &str) {
        let lowered = message.to_lowercase();
        for topic in TRACKED_TOPICS {
            if self.recent_topics.len() >= MAX_TRACKED_TOPICS {
                break;
            }
            if lowered.contains(topic) && !self.recent_topics.iter().any(|t| t == topic) {
                self.recent_topics.push(topic.to_string());
            }
        }
    }
}

/// In-memory store of advisor chat sessions, keyed by user id
///
/// Sessions live for the lifetime of the process; a new session starts with
/// the advisor persona as its system turn.
pub struct SessionStore {
    sessions: Mutex<HashMap<String, ChatSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Record the user's message and return the transcript to send to the
    /// model (system turn included)
    pub async fn push_user_message(&self, user_id: &str, message: &str) -> Vec<ChatMessage> {
        let mut sessions = self.sessions.lock().await;
        let session = sessions
            .entry(user_id.to_string())
            .or_insert_with(ChatSession::new);

        session.note_topics(message);
        session.messages.push(ChatMessage::user(message));
        session.messages.clone()
    }

    /// Record the assistant's reply in the user's transcript
    pub async fn push_assistant_message(&self, user_id: &str, message: &str) {
        let mut sessions = self.sessions.lock().await;
        if let Some(session) = sessions.get_mut(user_id) {
            session.messages.push(ChatMessage::assistant(message));
        }
    }

    pub async fn recent_topics(&self, user_id: &str) -> Vec<String> {
        let sessions = self.sessions.lock().await;
        sessions
            .get(user_id)
            .map(|session| session.recent_topics.clone())
            .unwrap_or_default()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_session_starts_with_persona() {
        let store = SessionStore::new();
        let transcript = store.push_user_message("u1", "bonjour").await;

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].role, "system");
        assert!(transcript[0].content.contains("Date Mate"));
        assert_eq!(transcript[1].role, "user");
        assert_eq!(transcript[1].content, "bonjour");
    }

    #[tokio::test]
    async fn test_transcript_accumulates_in_order() {
        let store = SessionStore::new();
        store.push_user_message("u1", "salut").await;
        store.push_assistant_message("u1", "Bonjour. Comment allez-vous ?").await;
        let transcript = store.push_user_message("u1", "bien merci").await;

        let roles: Vec<&str> = transcript.iter().map(|m| m.role.as_str()).collect();
        assert_eq!(roles, vec!["system", "user", "assistant", "user"]);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated_per_user() {
        let store = SessionStore::new();
        store.push_user_message("u1", "salut").await;
        let transcript = store.push_user_message("u2", "hello").await;

        assert_eq!(transcript.len(), 2);
    }

    #[tokio::test]
    async fn test_topic_tracking_dedupes() {
        let store = SessionStore::new();
        store.push_user_message("u1", "I had a date yesterday").await;
        store.push_user_message("u1", "the date led to a match").await;

        let topics = store.recent_topics("u1").await;
        assert_eq!(topics, vec!["date".to_string(), "match".to_string()]);
    }
}
