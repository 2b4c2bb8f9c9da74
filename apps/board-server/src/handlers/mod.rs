//! HTTP handlers and route configuration.

mod board;
mod health;

use actix_web::{HttpRequest, HttpResponse, web};

use crate::middleware::error::{AppError, AppResult};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/board")
                .route("", web::post().to(board::create_post))
                .route("/new", web::get().to(board::new_post_form))
                .route("/list", web::get().to(board::list_posts))
                .route("/list/{id}", web::get().to(board::show_post))
                .service(
                    web::resource("/list/{id}/edit")
                        .route(web::get().to(board::edit_post_form))
                        .route(web::post().to(board::update_post)),
                ),
        );
}

/// GET /
async fn index() -> HttpResponse {
    HttpResponse::Ok().body("Hello from the board server!")
}

/// Fallback for unmatched routes.
pub async fn not_found(req: HttpRequest) -> AppResult<HttpResponse> {
    Err(AppError::NotFound(req.path().to_string()))
}
