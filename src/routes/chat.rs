use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{ChatRequest, ChatResponse, ErrorResponse};
use crate::routes::AppState;
use crate::services::ChatCompletionRequest;

const CHAT_TEMPERATURE: f32 = 0.7;
const CHAT_MAX_TOKENS: u32 = 1024;

/// Configure the date-mate chat routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/chat", web::post().to(chat));
}

/// Dating-advisor chat passthrough
///
/// POST /date-mate/chat
///
/// Request body:
/// ```json
/// {
///   "user_id": "string",
///   "message": "string"
/// }
/// ```
///
/// The whole session transcript (advisor persona included) is replayed to
/// the model on every turn, and the reply is appended before returning.
async fn chat(state: web::Data<AppState>, req: web::Json<ChatRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let Some(llm) = &state.llm else {
        return HttpResponse::ServiceUnavailable().json(ErrorResponse {
            error: "Chat service unavailable".to_string(),
            message: "No language-model API key is configured".to_string(),
            status_code: 503,
        });
    };

    let transcript = state.sessions.push_user_message(&req.user_id, &req.message).await;

    tracing::debug!(
        "Chat turn for user {} ({} messages in transcript)",
        req.user_id,
        transcript.len()
    );

    let completion = ChatCompletionRequest {
        model: state.chat_model.clone(),
        messages: transcript,
        temperature: CHAT_TEMPERATURE,
        max_tokens: CHAT_MAX_TOKENS,
        presence_penalty: None,
        frequency_penalty: None,
    };

    match llm.chat_completion(completion).await {
        Ok(reply) => {
            state.sessions.push_assistant_message(&req.user_id, &reply).await;
            HttpResponse::Ok().json(ChatResponse { response: reply })
        }
        Err(e) => {
            tracing::error!("Chat completion failed for {}: {}", req.user_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Chat completion failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
