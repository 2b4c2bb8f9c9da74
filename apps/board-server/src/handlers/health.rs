//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub db: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Health check endpoint - reports whether the post store answers.
///
/// GET /health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let timestamp = chrono::Utc::now().to_rfc3339();

    match state.gateway.ping().await {
        Ok(answered) => HttpResponse::Ok().json(HealthResponse {
            status: "ok",
            db: if answered { "ok" } else { "unknown" },
            version: env!("CARGO_PKG_VERSION"),
            timestamp,
            message: None,
        }),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the post store");
            HttpResponse::InternalServerError().json(HealthResponse {
                status: "error",
                db: "error",
                version: env!("CARGO_PKG_VERSION"),
                timestamp,
                message: Some(e.to_string()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use board_infra::DatabaseConfig;

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    #[actix_web::test]
    async fn test_health_reports_store_state() {
        let state = AppState::init(&DatabaseConfig::in_memory()).await.unwrap();
        let gateway = state.gateway.clone();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["db"], "ok");

        gateway.shutdown().await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["db"], "error");
    }
}
