use actix_web::{web, HttpResponse};
use serde::Serialize;
use title_core::{FavoriteQuery, FavoriteTitle, NewFavorite};

use crate::error::Result;
use crate::session::UserSession;
use crate::state::AppState;

#[derive(Serialize)]
struct FavoriteListResponse {
    success: bool,
    favorites: Vec<FavoriteTitle>,
}

#[derive(Serialize)]
struct FavoriteResponse {
    success: bool,
    favorite: FavoriteTitle,
}

#[derive(Serialize)]
struct TagsResponse {
    success: bool,
    tags: Vec<String>,
}

pub async fn list(
    state: web::Data<AppState>,
    session: UserSession,
    query: web::Query<FavoriteQuery>,
) -> Result<HttpResponse> {
    let favorites = state.favorites.list(&session.user_id, &query).await;

    Ok(HttpResponse::Ok().json(FavoriteListResponse {
        success: true,
        favorites,
    }))
}

pub async fn create(
    state: web::Data<AppState>,
    session: UserSession,
    body: web::Json<NewFavorite>,
) -> Result<HttpResponse> {
    let favorite = state
        .favorites
        .add(&session.user_id, body.into_inner())
        .await?;
    log::info!("[{}] Added favorite {}", session.user_id, favorite.id);

    Ok(HttpResponse::Created().json(FavoriteResponse {
        success: true,
        favorite,
    }))
}

pub async fn delete(
    state: web::Data<AppState>,
    session: UserSession,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let favorite = state.favorites.remove(&session.user_id, &id).await?;
    log::info!("[{}] Removed favorite {}", session.user_id, id);

    Ok(HttpResponse::Ok().json(FavoriteResponse {
        success: true,
        favorite,
    }))
}

pub async fn tags(state: web::Data<AppState>, session: UserSession) -> Result<HttpResponse> {
    let tags = state.favorites.tags(&session.user_id).await;

    Ok(HttpResponse::Ok().json(TagsResponse {
        success: true,
        tags,
    }))
}
