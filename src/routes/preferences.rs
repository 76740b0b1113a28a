use actix_web::{web, HttpResponse, Responder};
use serde_json::{json, Value};

use crate::models::{AnalysisRequest, ErrorResponse, HealthResponse};
use crate::routes::AppState;
use crate::services::ConversationError;

/// Configure the conversation-analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/ai-conversation/{user_id}", web::get().to(get_user_conversations))
        .route("/messages/{user_id}", web::get().to(get_user_messages))
        .route("/analyze/{user_id}", web::get().to(analyze_user_conversations));
}

/// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Root endpoint with API information
pub async fn service_info() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "AI-Powered UserPreference Analysis API",
        "description": "Analyze user conversations to extract UserPreference format",
        "version": env!("CARGO_PKG_VERSION"),
        "main_endpoints": {
            "user_preference_analysis": "/api/v1/chats/analyze/{user_id} (GET)",
            "get_conversations": "/api/v1/chats/ai-conversation/{user_id} (GET)",
            "get_messages_only": "/api/v1/chats/messages/{user_id} (GET)",
            "notification": "/notification/generate (GET)",
            "date_mate_chat": "/date-mate/chat (POST)"
        }
    }))
}

/// Get the full conversation payload for a user, as stored upstream
///
/// GET /api/v1/chats/ai-conversation/{user_id}
async fn get_user_conversations(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let user_id = path.into_inner();

    match state.conversations.fetch_conversations(&user_id).await {
        Ok(payload) => HttpResponse::Ok().json(payload),
        Err(e) => {
            tracing::error!("Failed to fetch conversations for {}: {}", user_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch conversations".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Get only the conversation messages without user info
///
/// GET /api/v1/chats/messages/{user_id}
async fn get_user_messages(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let user_id = path.into_inner();

    match state.conversations.fetch_messages(&user_id).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(ConversationError::NotFound(message)) => HttpResponse::NotFound().json(ErrorResponse {
            error: "User conversations not found".to_string(),
            message,
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to fetch messages for {}: {}", user_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch messages".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Analyze a user's conversations and answer in UserPreference format
///
/// GET /api/v1/chats/analyze/{user_id}
///
/// Fetches the user's data from the conversation store, runs the preference
/// extraction over the trailing conversation window, and returns the result.
/// Extraction itself never fails; only missing upstream data surfaces as an
/// error here.
async fn analyze_user_conversations(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let user_id = path.into_inner();

    let payload = match state.conversations.fetch_conversations(&user_id).await {
        Ok(payload) => payload,
        Err(e) => {
            tracing::error!("Failed to fetch user data for {}: {}", user_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch user data".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let success = payload
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !success {
        return HttpResponse::NotFound().json(ErrorResponse {
            error: "User data not found".to_string(),
            message: format!("No conversation data for user {}", user_id),
            status_code: 404,
        });
    }

    let request = match AnalysisRequest::from_payload(&user_id, &payload) {
        Some(request) => request,
        None => {
            tracing::error!("Malformed conversation payload for {}", user_id);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Malformed conversation payload".to_string(),
                message: "Conversation store returned an unexpected shape".to_string(),
                status_code: 500,
            });
        }
    };

    tracing::info!(
        "Analyzing {} conversations for user {}",
        request.history.len(),
        user_id
    );

    let preference = state.extractor.extract(&request).await;

    HttpResponse::Ok().json(preference)
}
