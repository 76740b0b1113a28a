// Route exports
pub mod chat;
pub mod notifications;
pub mod preferences;

use crate::core::PreferenceExtractor;
use crate::services::{ConversationClient, LlmClient, QuoteService, SessionStore};
use actix_web::web;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub conversations: Arc<ConversationClient>,
    pub extractor: Arc<PreferenceExtractor>,
    /// None when no API key is configured; the notification route answers 503
    pub quotes: Option<Arc<QuoteService>>,
    pub sessions: Arc<SessionStore>,
    /// None when no API key is configured; the chat route answers 503
    pub llm: Option<Arc<LlmClient>>,
    pub chat_model: String,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(preferences::service_info))
        .route("/health", web::get().to(preferences::health_check))
        .service(web::scope("/api/v1/chats").configure(preferences::configure))
        .service(web::scope("/notification").configure(notifications::configure))
        .service(web::scope("/date-mate").configure(chat::configure));
}
