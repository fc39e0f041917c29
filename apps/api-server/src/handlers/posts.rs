//! Post handlers.

use actix_web::{HttpResponse, http::header, web};

use postbox_core::domain::PostDraft;
use postbox_shared::PostInput;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Validate a request body. Runs before any store access.
fn into_draft(input: PostInput) -> AppResult<PostDraft> {
    Ok(PostDraft::parse(input.author, &input.date, input.content)?)
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.posts.list().await)
}

/// POST /posts
///
/// Responds `201 Created` with the stored post and a `Location` header.
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostInput>,
) -> AppResult<HttpResponse> {
    let draft = into_draft(body.into_inner())?;
    let post = state.posts.create(draft).await;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/posts/{}", post.id)))
        .json(post))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.read(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// PUT /posts/{id}
///
/// The id always comes from the path. The body is validated first, so a bad
/// body on an unknown id is a `400`, not a `404`.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PostInput>,
) -> AppResult<HttpResponse> {
    let draft = into_draft(body.into_inner())?;
    let post = state.posts.update(&path.into_inner(), draft).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.posts.delete(&path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
