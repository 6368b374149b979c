use axum::{
    routing::{get, post},
    Router,
};

use crate::api::state::AppState;

use super::handlers;

pub fn v1_router() -> Router<AppState> {
    let diary = Router::new()
        .route(
            "/",
            get(handlers::diary::list_entries).post(handlers::diary::create_entry),
        )
        .route(
            "/{titulo}",
            get(handlers::diary::get_entry).delete(handlers::diary::delete_entry),
        );

    let messages = Router::new().route(
        "/",
        post(handlers::messages::send_message)
            .get(handlers::messages::get_history)
            .delete(handlers::messages::clear_history),
    );

    let users = Router::new()
        .route(
            "/{user_id}/personality",
            get(handlers::users::get_personality),
        )
        .route("/{user_id}/advice", get(handlers::users::get_advice));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/openapi.json", get(super::openapi::openapi_json))
        .merge(super::openapi::redoc_router())
        .nest("/diary", diary)
        .nest("/messages", messages)
        .nest("/users", users)
}
