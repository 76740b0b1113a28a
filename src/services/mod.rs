// Service exports
pub mod conversation;
pub mod llm;
pub mod quotes;
pub mod sessions;

pub use conversation::{ConversationClient, ConversationError};
pub use llm::{ChatCompletionRequest, ChatMessage, LlmClient, LlmError};
pub use quotes::{spawn_daily_quote_task, QuoteService};
pub use sessions::{ChatSession, SessionStore};
