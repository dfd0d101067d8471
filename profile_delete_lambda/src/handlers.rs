use axum::{
    Router,
    body::Body,
    extract::{Query, State, rejection::QueryRejection},
    http::{HeaderValue, Method, Request, StatusCode, header},
    response::{IntoResponse, Redirect, Response},
};
use lambda_axum::bearer::OptionalBearerToken;
use std::iter::once;
use thiserror::Error;
use tower_http::{
    sensitive_headers::SetSensitiveRequestHeadersLayer, trace::TraceLayer,
};
use tracing::instrument;

use crate::{
    backend::{BackendError, ProfileBackend},
    structs::{AppState, DeleteProfileQuery},
};

/// Where the caller is sent once the profile is gone.
const LANDING_PAGE: &str = "/";

#[derive(Debug, Error)]
pub enum DeleteProfileError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("Missing user_id")]
    MissingUserId,
    #[error("Missing Authorization token")]
    MissingToken,
    #[error("Backend URL not configured")]
    MissingBackendConfig,
    #[error("Failed to delete user profile: {0}")]
    BackendCallFailed(#[from] BackendError),
}

impl DeleteProfileError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingUserId => StatusCode::BAD_REQUEST,
            Self::MissingToken => StatusCode::UNAUTHORIZED,
            Self::MissingBackendConfig | Self::BackendCallFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for DeleteProfileError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            Self::MissingBackendConfig => {
                tracing::error!("BACKEND_DELETE_URL is not set");
            }
            Self::BackendCallFailed(BackendError::Status {
                status: backend_status,
                ..
            }) => {
                tracing::error!(
                    "backend rejected profile delete with {backend_status}"
                );
            }
            Self::BackendCallFailed(e) => {
                tracing::error!("profile delete request failed: {e}");
            }
            _ => tracing::warn!("rejecting request: {self}"),
        }

        (status, self.to_string()).into_response()
    }
}

/// Builds the function's router. Every path and method lands on the delete
/// handler, which does its own method check.
pub fn app<B: ProfileBackend>(state: AppState<B>) -> Router {
    let trace_layer = TraceLayer::new_for_http().on_request(
        |request: &Request<Body>, _: &tracing::Span| {
            tracing::info!(
                "received request: {method} {path}",
                method = request.method(),
                path = request.uri().path()
            );
        },
    );

    Router::new()
        .fallback(delete_profile_handler::<B>)
        .layer(trace_layer)
        .layer(SetSensitiveRequestHeadersLayer::new(once(
            header::AUTHORIZATION,
        )))
        .with_state(state)
}

#[instrument(skip_all)]
pub async fn delete_profile_handler<B: ProfileBackend>(
    State(state): State<AppState<B>>,
    method: Method,
    query: Result<Query<DeleteProfileQuery>, QueryRejection>,
    OptionalBearerToken(auth_token): OptionalBearerToken,
) -> Result<Response, DeleteProfileError> {
    if method != Method::DELETE {
        return Err(DeleteProfileError::MethodNotAllowed);
    }

    let user_id = query
        .ok()
        .and_then(|Query(query)| query.user_id())
        .filter(|user_id| !user_id.is_empty())
        .ok_or(DeleteProfileError::MissingUserId)?;

    let auth_token = auth_token.ok_or(DeleteProfileError::MissingToken)?;

    let backend_url = state
        .config
        .backend_delete_url()
        .ok_or(DeleteProfileError::MissingBackendConfig)?;

    state
        .backend
        .delete(&user_id, &auth_token, backend_url)
        .await?;

    tracing::info!("user profile deleted");

    Ok(profile_deleted_response(state.config.auth_cookie_name()))
}

fn profile_deleted_response(auth_cookie_name: Option<&str>) -> Response {
    let mut response = Redirect::to(LANDING_PAGE).into_response();

    if let Some(name) = auth_cookie_name {
        let cookie = format!(
            "{name}=; HttpOnly; Path=/; Max-Age=0; Secure; SameSite=Strict"
        );
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().insert(header::SET_COOKIE, value);
            }
            Err(e) => {
                tracing::error!("invalid auth cookie name, not clearing: {e}");
            }
        }
    }

    response
}
