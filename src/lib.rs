//! Amoura AI - conversation-analysis service for the Amoura dating app
//!
//! This library wraps a third-party chat-completion API to turn a user's
//! AI-chat history into structured matching preferences, with fixed default
//! sets whenever the model is absent or unusable. Side surfaces provide
//! daily French dating suggestions and a dating-advisor chat passthrough.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    fallback_preferences, unconfigured_preferences, PreferenceExtractor,
    MAX_ANALYZED_CONVERSATIONS,
};
pub use crate::models::{AnalysisRequest, ConversationRecord, UserPreference, UserProfileInput};
