mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use crate::config::Settings;
use crate::core::PreferenceExtractor;
use crate::routes::AppState;
use crate::services::{spawn_daily_quote_task, ConversationClient, LlmClient, QuoteService, SessionStore};
use std::sync::Arc;
use tracing::{error, info, warn};

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Amoura AI analysis service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize the chat-completion client; without an API key every
    // AI-backed surface degrades (extractor defaults, 503 on chat/quotes)
    let llm = settings
        .openai
        .api_key
        .clone()
        .map(|api_key| Arc::new(LlmClient::new(settings.openai.endpoint.clone(), api_key)));

    match &llm {
        Some(_) => info!("Chat-completion client initialized (model: {})", settings.openai.model),
        None => warn!("No OpenAI API key configured - running with default preferences only"),
    }

    // Initialize the conversation store client
    let conversations = Arc::new(ConversationClient::new(settings.conversation.base_url.clone()));
    info!("Conversation store client initialized ({})", settings.conversation.base_url);

    // Preference extractor
    let extractor = Arc::new(PreferenceExtractor::new(
        llm.clone(),
        settings.openai.model.clone(),
    ));

    // Quote service + daily generation task
    let quotes = llm
        .clone()
        .map(|client| Arc::new(QuoteService::new(client, settings.openai.model.clone())));

    if let Some(quotes) = &quotes {
        // The task runs until process exit; the handle is never joined
        let _daily_task = spawn_daily_quote_task(quotes.clone());
        info!("Daily suggestion task scheduled");
    }

    // Advisor chat sessions
    let sessions = Arc::new(SessionStore::new());

    // Build application state
    let app_state = AppState {
        conversations,
        extractor,
        quotes,
        sessions,
        llm,
        chat_model: settings.openai.chat_model.clone(),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
