use actix_web::{web, HttpResponse, Responder};

use crate::models::ErrorResponse;
use crate::routes::AppState;

/// Configure the notification routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/generate", web::get().to(generate_now));
}

/// Generate a new dating suggestion quote and record it in the history
///
/// GET /notification/generate
async fn generate_now(state: web::Data<AppState>) -> impl Responder {
    let Some(quotes) = &state.quotes else {
        return HttpResponse::ServiceUnavailable().json(ErrorResponse {
            error: "Notification service unavailable".to_string(),
            message: "No language-model API key is configured".to_string(),
            status_code: 503,
        });
    };

    match quotes.store_daily_quote().await {
        Ok(quote) => HttpResponse::Ok().json(quote),
        Err(e) => {
            tracing::error!("Failed to generate dating suggestion: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to generate suggestion".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
