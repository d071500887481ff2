use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Extension, Form,
};
use serde_json::json;
use tracing::info;
use validator::Validate;

use crate::app::state::AppState;
use crate::dto::forms::{field_messages, FormEcho, LoginForm, RegisterForm};
use crate::handler::render_page;
use crate::service::user_service::UserService;
use crate::util::error::{HandlerError, ServiceError};
use crate::util::session::{FlashCategory, SessionHandle};

pub const LOGIN_SUCCESS_MESSAGE: &str = "Logged in successfully.";
pub const BAD_CREDENTIALS_MESSAGE: &str = "Invalid username or password.";
pub const USERNAME_TAKEN_MESSAGE: &str = "That username is already taken.";
pub const REGISTERED_MESSAGE: &str = "Registration complete!";
pub const LOGGED_OUT_MESSAGE: &str = "You have been logged out.";

// Landing page
pub async fn index_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionHandle>,
) -> Response {
    render_page(&state, &session, StatusCode::OK, "index", "Home", json!({})).await
}

pub async fn login_page_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionHandle>,
) -> Response {
    let body = json!({ "form": FormEcho::default(), "errors": {} });
    render_page(&state, &session, StatusCode::OK, "login", "Log in", body).await
}

// Login
pub async fn login_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionHandle>,
    Form(form): Form<LoginForm>,
) -> Result<Response, HandlerError> {
    if let Err(e) = form.validate() {
        let body = json!({ "form": FormEcho::from(&form), "errors": field_messages(&e) });
        return Ok(render_page(&state, &session, StatusCode::OK, "login", "Log in", body).await);
    }

    match state.user_service.login(form.username.clone(), form.password).await {
        Ok(user) => {
            session.login(user.id).await;
            session.flash(FlashCategory::Success, LOGIN_SUCCESS_MESSAGE).await;
            Ok(Redirect::to(user.role.home_path()).into_response())
        }
        Err(ServiceError::Unauthorized(_)) => {
            session.flash(FlashCategory::Danger, BAD_CREDENTIALS_MESSAGE).await;
            let body = json!({
                "form": FormEcho { values: [("username", form.username)].into() },
                "errors": {},
            });
            Ok(render_page(&state, &session, StatusCode::UNAUTHORIZED, "login", "Log in", body).await)
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn register_page_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionHandle>,
) -> Response {
    let body = json!({ "form": FormEcho::default(), "errors": {} });
    render_page(&state, &session, StatusCode::OK, "register", "Register", body).await
}

// Register
pub async fn register_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionHandle>,
    Form(form): Form<RegisterForm>,
) -> Result<Response, HandlerError> {
    let validated = form.validate();
    let role = match (validated, form.parsed_role()) {
        (Ok(()), Some(role)) => role,
        (result, _) => {
            let errors = result.err().map(|e| field_messages(&e)).unwrap_or_default();
            let body = json!({ "form": FormEcho::from(&form), "errors": errors });
            return Ok(render_page(&state, &session, StatusCode::OK, "register", "Register", body).await);
        }
    };

    let echo = FormEcho::from(&form);
    match state.user_service.register(form.username, form.password, role).await {
        Ok(user) => {
            info!(user_id = user.id, "Registration complete");
            session.flash(FlashCategory::Success, REGISTERED_MESSAGE).await;
            Ok(Redirect::to("/login").into_response())
        }
        Err(ServiceError::Conflict(_)) => {
            session.flash(FlashCategory::Danger, USERNAME_TAKEN_MESSAGE).await;
            let body = json!({ "form": echo, "errors": {} });
            Ok(render_page(&state, &session, StatusCode::CONFLICT, "register", "Register", body).await)
        }
        Err(e) => Err(e.into()),
    }
}

// Logout (behind require_login)
pub async fn logout_handler(Extension(session): Extension<SessionHandle>) -> Response {
    session.logout().await;
    session.flash(FlashCategory::Success, LOGGED_OUT_MESSAGE).await;
    Redirect::to("/").into_response()
}
