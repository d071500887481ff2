use axum::{middleware, routing::get, Router};

use crate::app::state::AppState;
use crate::handler::auth_handler::{
    index_handler,
    login_handler,
    login_page_handler,
    logout_handler,
    register_handler,
    register_page_handler,
};
use crate::middlewares::auth_middleware::require_login;

pub fn auth_router(state: AppState) -> Router<AppState> {
    // Public routes
    let public = Router::new()
        .route("/", get(index_handler))
        .route("/login", get(login_page_handler).post(login_handler))
        .route("/register", get(register_page_handler).post(register_handler));

    // Signed-in routes
    let signed_in = Router::new()
        .route("/logout", get(logout_handler))
        .route_layer(middleware::from_fn_with_state(state, require_login));

    public.merge(signed_in)
}
