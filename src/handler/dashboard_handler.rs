use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Extension, Form,
};
use serde_json::json;
use validator::Validate;

use crate::app::state::AppState;
use crate::dto::forms::{field_messages, AchievementForm, ActivityForm, FormEcho};
use crate::handler::render_page;
use crate::middlewares::auth_middleware::CurrentUser;
use crate::service::record_service::RecordService;
use crate::util::error::HandlerError;
use crate::util::session::{FlashCategory, SessionHandle};

pub const ACTIVITY_RECORDED_MESSAGE: &str = "Activity recorded!";
pub const ACHIEVEMENT_RECORDED_MESSAGE: &str = "Achievement recorded!";

pub async fn student_page_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionHandle>,
) -> Response {
    let body = json!({ "form": FormEcho::default(), "errors": {} });
    render_page(&state, &session, StatusCode::OK, "student", "Student", body).await
}

pub async fn student_submit_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionHandle>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Form(form): Form<ActivityForm>,
) -> Result<Response, HandlerError> {
    if let Err(e) = form.validate() {
        let body = json!({ "form": FormEcho::from(&form), "errors": field_messages(&e) });
        return Ok(render_page(&state, &session, StatusCode::OK, "student", "Student", body).await);
    }

    state
        .record_service
        .record_activity(&user, form.activity, form.days_spent)
        .await?;
    session.flash(FlashCategory::Success, ACTIVITY_RECORDED_MESSAGE).await;
    Ok(Redirect::to("/student").into_response())
}

pub async fn faculty_page_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionHandle>,
) -> Response {
    let body = json!({ "form": FormEcho::default(), "errors": {} });
    render_page(&state, &session, StatusCode::OK, "faculty", "Faculty", body).await
}

pub async fn faculty_submit_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionHandle>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Form(form): Form<AchievementForm>,
) -> Result<Response, HandlerError> {
    if let Err(e) = form.validate() {
        let body = json!({ "form": FormEcho::from(&form), "errors": field_messages(&e) });
        return Ok(render_page(&state, &session, StatusCode::OK, "faculty", "Faculty", body).await);
    }

    state.record_service.record_achievement(&user, form.achievement).await?;
    session.flash(FlashCategory::Success, ACHIEVEMENT_RECORDED_MESSAGE).await;
    Ok(Redirect::to("/faculty").into_response())
}

// Every activity and achievement, regardless of author.
pub async fn view_data_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionHandle>,
) -> Result<Response, HandlerError> {
    let activities = state.record_service.list_activities().await?;
    let achievements = state.record_service.list_achievements().await?;
    let body = json!({ "activities": activities, "achievements": achievements });
    Ok(render_page(&state, &session, StatusCode::OK, "view_data", "Recorded data", body).await)
}
