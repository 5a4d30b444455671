//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{delete, get, post},
};
use futures::future::join_all;
use tower_http::services::ServeDir;

use crate::auth::AuthError;
use crate::favorites::FavoriteError;
use crate::feed::FeedError;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/about", get(about_page))
        .route("/search/routes", get(search_routes))
        .route("/favorites", get(list_favorites).post(add_favorite))
        .route("/favorites/routes", get(favorite_routes))
        .route("/favorites/:id/destination", post(rename_favorite))
        .route("/favorites/:id", delete(remove_favorite))
        .route("/auth/signup", post(sign_up))
        .route("/auth/login", post(log_in))
        .route("/auth/logout", post(log_out))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with search form and favorites.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    let favorites = state
        .favorites
        .list()
        .await
        .iter()
        .map(FavoriteView::from_favorite)
        .collect();

    Html(
        IndexTemplate { favorites }
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// About page.
async fn about_page() -> impl IntoResponse {
    Html(
        AboutTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Search routes to a destination.
async fn search_routes(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<SearchRoutesRequest>,
) -> Result<Response, AppError> {
    let destination = req.destination.trim();
    if destination.chars().count() < state.search.min_query_chars {
        return Err(AppError::BadRequest {
            message: "no destination selected".to_string(),
        });
    }

    let records = state.feed.search(destination).await.map_err(AppError::from)?;
    let records = &records[..records.len().min(state.search.max_results)];

    if accepts_html(&headers) {
        let routes: Vec<RouteCardView> = records.iter().map(RouteCardView::from_record).collect();

        let template = RouteListTemplate {
            destination: destination.to_string(),
            routes,
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        let routes: Vec<RouteResult> = records.iter().map(RouteResult::from_record).collect();

        Ok(Json(SearchRoutesResponse { routes }).into_response())
    }
}

/// List favorites.
async fn list_favorites(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let favorites = state.favorites.list().await;

    if accepts_html(&headers) {
        let template = FavoritesListTemplate {
            favorites: favorites.iter().map(FavoriteView::from_favorite).collect(),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(FavoritesResponse { favorites }).into_response())
    }
}

/// Add a favorite.
async fn add_favorite(
    State(state): State<AppState>,
    Json(req): Json<AddFavoriteRequest>,
) -> Result<Response, AppError> {
    let (name, from, to) = (req.name.trim(), req.from.trim(), req.to.trim());
    if name.is_empty() || from.is_empty() || to.is_empty() {
        return Err(AppError::BadRequest {
            message: "name, from and to are all required".to_string(),
        });
    }

    let favorite = state.favorites.add(name, from, to).await?;
    Ok((StatusCode::CREATED, Json(favorite)).into_response())
}

/// Change a favorite's destination.
async fn rename_favorite(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<RenameFavoriteRequest>,
) -> Result<Response, AppError> {
    let to = req.to.trim();
    if to.is_empty() {
        return Err(AppError::BadRequest {
            message: "destination must not be empty".to_string(),
        });
    }

    let favorite = state.favorites.rename_destination(id, to).await?;
    Ok(Json(favorite).into_response())
}

/// Remove a favorite.
async fn remove_favorite(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Response, AppError> {
    state.favorites.remove(id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Search routes for every favorite concurrently.
///
/// Failures for individual favorites degrade to an empty route list so
/// one bad destination doesn't break the whole panel.
async fn favorite_routes(State(state): State<AppState>) -> Result<Response, AppError> {
    let favorites = state.favorites.list().await;

    let lookups = favorites.iter().map(|favorite| {
        let feed = state.feed.clone();
        let destination = favorite.short_destination().to_string();
        async move { feed.search(&destination).await }
    });
    let outcomes = join_all(lookups).await;

    let results: Vec<FavoriteRoutesResult> = favorites
        .into_iter()
        .zip(outcomes)
        .map(|(favorite, outcome)| {
            let routes = match outcome {
                Ok(records) => records
                    .iter()
                    .take(state.search.max_results)
                    .map(RouteResult::from_record)
                    .collect(),
                Err(e) => {
                    tracing::warn!(favorite = %favorite.name, error = %e, "favorite route lookup failed");
                    Vec::new()
                }
            };
            FavoriteRoutesResult { favorite, routes }
        })
        .collect();

    Ok(Json(FavoriteRoutesResponse { results }).into_response())
}

/// Create an account and open a session.
async fn sign_up(
    State(state): State<AppState>,
    Json(req): Json<SignUpRequest>,
) -> Result<Response, AppError> {
    let user = state
        .users
        .sign_up(&req.email, &req.password, &req.full_name)
        .await?;
    let token = state.sessions.open(user.email).await;

    Ok((
        StatusCode::CREATED,
        Json(LoginResponse {
            token,
            full_name: user.full_name,
        }),
    )
        .into_response())
}

/// Sign in and open a session.
async fn log_in(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Response, AppError> {
    let user = state.users.sign_in(&req.email, &req.password).await?;
    let token = state.sessions.open(user.email).await;

    Ok(Json(LoginResponse {
        token,
        full_name: user.full_name,
    })
    .into_response())
}

/// Close a session.
async fn log_out(
    State(state): State<AppState>,
    Json(req): Json<LogoutRequest>,
) -> Result<Response, AppError> {
    if !state.sessions.close(&req.token).await {
        return Err(AppError::NotFound {
            message: "unknown session token".to_string(),
        });
    }
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unauthorized { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<FeedError> for AppError {
    fn from(e: FeedError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl From<FavoriteError> for AppError {
    fn from(e: FavoriteError) -> Self {
        match e {
            FavoriteError::UnknownId(_) => AppError::NotFound {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::MissingField | AuthError::EmailTaken => AppError::BadRequest {
                message: e.to_string(),
            },
            AuthError::InvalidCredentials => AppError::Unauthorized {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Unauthorized { message } => (StatusCode::UNAUTHORIZED, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        if status.is_server_error() {
            tracing::error!(%status, %message, "request failed");
        } else {
            tracing::debug!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
