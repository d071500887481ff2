use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::{debug, error, warn};

use crate::app::state::AppState;
use crate::model::role::Role;
use crate::model::user::User;
use crate::service::user_service::UserService;
use crate::util::session::{FlashCategory, SessionHandle};
use crate::util::templates::html_500;

/// The signed-in user, available to handlers behind `require_login`.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

pub const LOGIN_REQUIRED_MESSAGE: &str = "Please log in to access this page.";
pub const FORBIDDEN_MESSAGE: &str = "You do not have permission to access this page.";

pub async fn require_login(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let Some(session) = req.extensions().get::<SessionHandle>().cloned() else {
        error!("require_login used without the session layer");
        return html_500();
    };

    let user = match session.user_id().await {
        Some(id) => match state.user_service.find_by_id(id).await {
            Ok(user) => user,
            Err(e) => {
                error!("Failed to load session user {}: {}", id, e);
                return html_500();
            }
        },
        None => None,
    };

    let Some(user) = user else {
        debug!(path = %req.uri().path(), "Anonymous request to protected page");
        session.flash(FlashCategory::Info, LOGIN_REQUIRED_MESSAGE).await;
        return Redirect::to("/login").into_response();
    };

    req.extensions_mut().insert(CurrentUser(user));
    next.run(req).await
}

/// Must sit inside `require_login`.
pub async fn require_role(State(role): State<Role>, req: Request, next: Next) -> Response {
    let Some(CurrentUser(user)) = req.extensions().get::<CurrentUser>().cloned() else {
        return Redirect::to("/login").into_response();
    };

    if user.role != role {
        warn!(
            username = %user.username,
            role = %user.role,
            required = %role,
            path = %req.uri().path(),
            "Role not allowed on this page"
        );
        let session = req.extensions().get::<SessionHandle>().cloned();
        if let Some(session) = session {
            session.flash(FlashCategory::Danger, FORBIDDEN_MESSAGE).await;
        }
        return Redirect::to("/").into_response();
    }

    next.run(req).await
}
