use axum::{middleware, routing::get, Router};

use crate::app::state::AppState;
use crate::handler::dashboard_handler::{
    faculty_page_handler,
    faculty_submit_handler,
    student_page_handler,
    student_submit_handler,
    view_data_handler,
};
use crate::middlewares::auth_middleware::{require_login, require_role};
use crate::model::role::Role;

pub fn dashboard_router(state: AppState) -> Router<AppState> {
    // Layers added later run first: login is checked before the role.
    let student = Router::new()
        .route("/student", get(student_page_handler).post(student_submit_handler))
        .route_layer(middleware::from_fn_with_state(Role::Student, require_role));

    let faculty = Router::new()
        .route("/faculty", get(faculty_page_handler).post(faculty_submit_handler))
        .route_layer(middleware::from_fn_with_state(Role::Faculty, require_role));

    let shared = Router::new().route("/view_data", get(view_data_handler));

    student
        .merge(faculty)
        .merge(shared)
        .route_layer(middleware::from_fn_with_state(state, require_login))
}
