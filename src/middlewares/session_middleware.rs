use axum::{
    extract::{Request, State},
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::error;

use crate::app::state::AppState;
use crate::util::cookie::{get_cookie, session_cookie};
use crate::util::session::SessionHandle;

/// Attaches a `SessionHandle` to every request and refreshes the session cookie.
pub async fn session_layer(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let config = &state.session_config;
    let presented = get_cookie(req.headers(), &config.cookie_name);
    let (session_id, _created) = state.sessions.load_or_create(presented.as_deref()).await;

    let handle = SessionHandle::new(session_id, state.sessions.clone());
    req.extensions_mut().insert(handle.clone());

    let mut response = next.run(req).await;

    // Login may have rotated the id.
    let cookie = session_cookie(
        &config.cookie_name,
        &handle.id().await,
        config.ttl_seconds(),
        config.secure_cookie,
    );
    match HeaderValue::from_str(&cookie) {
        Ok(value) => {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
        Err(e) => error!("Session cookie is not a valid header value: {}", e),
    }
    response
}
