//! Board handlers: list, view, create and edit posts.

use actix_web::http::StatusCode;
use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, web};
use askama::Template;

use board_core::domain::PostInput;
use board_core::validation::{parse_post_id, validate_post_input};
use board_core::{Page, PageRequest};
use board_shared::dto::{ListQuery, PostFormBody};

use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views::{BoardDetailTemplate, BoardFormTemplate, BoardListTemplate, FormMode};

const SAVE_FAILED: &str = "Something went wrong on the server. Please try again.";

fn html(status: StatusCode, page: impl Template) -> AppResult<HttpResponse> {
    let body = page.render()?;
    Ok(HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body))
}

fn redirect_to_post(id: i64) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, format!("/board/list/{id}")))
        .finish())
}

fn post_not_found(status: StatusCode) -> AppResult<HttpResponse> {
    html(status, BoardDetailTemplate::not_found())
}

fn validate(form: &PostFormBody) -> Result<PostInput, board_core::ValidationErrors> {
    validate_post_input(
        form.title.as_deref(),
        form.content.as_deref(),
        form.author.as_deref(),
    )
}

/// GET /board/list?page=&pageSize=
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    let request = PageRequest::from_query(query.page.as_deref(), query.page_size.as_deref());

    let total = state.posts.count_posts().await?;
    let posts = state
        .posts
        .list_posts(request.limit(), request.offset())
        .await?;

    let page = Page::new(posts, total, request);
    html(StatusCode::OK, BoardListTemplate::from(&page))
}

/// GET /board/list/{id}
pub async fn show_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let Some(id) = parse_post_id(&path) else {
        return post_not_found(StatusCode::BAD_REQUEST);
    };

    match state.posts.get_post_by_id(id).await? {
        Some(post) => html(StatusCode::OK, BoardDetailTemplate::found(&post)),
        None => post_not_found(StatusCode::NOT_FOUND),
    }
}

/// GET /board/new
pub async fn new_post_form() -> AppResult<HttpResponse> {
    html(
        StatusCode::OK,
        BoardFormTemplate::new(FormMode::Create, &PostInput::default()),
    )
}

/// POST /board
pub async fn create_post(
    state: web::Data<AppState>,
    form: web::Form<PostFormBody>,
) -> AppResult<HttpResponse> {
    let input = match validate(&form) {
        Ok(input) => input,
        Err(errors) => {
            return html(
                StatusCode::BAD_REQUEST,
                BoardFormTemplate::rejected(FormMode::Create, &errors),
            );
        }
    };

    match state.posts.create_post(&input).await {
        Ok(id) => redirect_to_post(id),
        Err(e) => {
            tracing::error!(error = %e, "Failed to create post");
            html(
                StatusCode::INTERNAL_SERVER_ERROR,
                BoardFormTemplate::new(FormMode::Create, &input).with_global_error(SAVE_FAILED),
            )
        }
    }
}

/// GET /board/list/{id}/edit
pub async fn edit_post_form(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let Some(id) = parse_post_id(&path) else {
        return post_not_found(StatusCode::BAD_REQUEST);
    };

    match state.posts.get_post_by_id(id).await {
        Ok(Some(post)) => html(
            StatusCode::OK,
            BoardFormTemplate::new(FormMode::Edit(id), &PostInput::from(&post)),
        ),
        Ok(None) => post_not_found(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!(error = %e, post_id = id, "Failed to load post for editing");
            post_not_found(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /board/list/{id}/edit
///
/// The repository's update does not check existence, so the post is looked
/// up first.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<PostFormBody>,
) -> AppResult<HttpResponse> {
    let Some(id) = parse_post_id(&path) else {
        return post_not_found(StatusCode::BAD_REQUEST);
    };

    match state.posts.get_post_by_id(id).await {
        Ok(Some(_)) => {}
        Ok(None) => return post_not_found(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!(error = %e, post_id = id, "Failed to load post for update");
            return post_not_found(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    let input = match validate(&form) {
        Ok(input) => input,
        Err(errors) => {
            return html(
                StatusCode::BAD_REQUEST,
                BoardFormTemplate::rejected(FormMode::Edit(id), &errors),
            );
        }
    };

    match state.posts.update_post(id, &input).await {
        Ok(_) => redirect_to_post(id),
        Err(e) => {
            tracing::error!(error = %e, post_id = id, "Failed to update post");
            post_not_found(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
