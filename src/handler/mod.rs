pub mod auth_handler;
pub mod dashboard_handler;

use axum::{http::StatusCode, response::Response};
use serde::Serialize;
use tracing::error;

use crate::app::state::AppState;
use crate::service::user_service::UserService;
use crate::util::session::{Flash, SessionHandle};

/// What the navigation bar shows about the signed-in user.
#[derive(Debug, Serialize)]
pub struct UserView {
    pub username: String,
    pub role_label: &'static str,
    pub home_path: &'static str,
}

#[derive(Debug, Serialize)]
struct Page<'a, T: Serialize> {
    title: &'a str,
    current_user: Option<UserView>,
    flashes: Vec<Flash>,
    #[serde(flatten)]
    body: T,
}

/// Renders a full page, draining the session's pending flash messages into it.
pub(crate) async fn render_page<T>(
    state: &AppState,
    session: &SessionHandle,
    code: StatusCode,
    template: &str,
    title: &str,
    body: T,
) -> Response
where
    T: Serialize + std::fmt::Debug,
{
    let current_user = match session.user_id().await {
        Some(id) => match state.user_service.find_by_id(id).await {
            Ok(user) => user.map(|u| UserView {
                username: u.username,
                role_label: u.role.label(),
                home_path: u.role.home_path(),
            }),
            Err(e) => {
                error!("Failed to load session user {}: {}", id, e);
                None
            }
        },
        None => None,
    };

    let page = Page {
        title,
        current_user,
        flashes: session.take_flashes().await,
        body,
    };
    state.templates.page(code, template, &page)
}
