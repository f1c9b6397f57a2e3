//! Session authentication middleware

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};

use crate::domain::entities::{SessionId, User};
use crate::error::AppError;
use crate::AppState;

/// The authenticated caller, injected into request extensions
#[derive(Clone)]
pub struct SessionIdentity {
    pub user: User,
    pub session_id: SessionId,
}

/// Extract the session token from the Authorization header
fn extract_token(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Authentication middleware
///
/// Validates the session token and injects a [`SessionIdentity`] into
/// request extensions. Routes that require a logged-in user use this.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_token(&request).ok_or(AppError::Unauthorized)?;

    let (user, session_id) = state
        .account_service
        .authenticate(token)
        .await?
        .ok_or(AppError::Unauthorized)?;

    request
        .extensions_mut()
        .insert(SessionIdentity { user, session_id });

    Ok(next.run(request).await)
}

/// Optional authentication middleware
///
/// Like [`auth_middleware`] but doesn't fail if no valid token is provided;
/// the handler sees no `SessionIdentity` extension and treats the caller as
/// a guest.
pub async fn optional_auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    if let Some(token) = extract_token(&request) {
        if let Ok(Some((user, session_id))) = state.account_service.authenticate(token).await {
            request
                .extensions_mut()
                .insert(SessionIdentity { user, session_id });
        }
    }

    next.run(request).await
}
