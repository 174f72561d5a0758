use axum::Router;
use axum::routing::{get, post};

use crate::handlers::{self, AppState};

pub fn router(api: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::list_products))
        .route("/create", get(handlers::create_form))
        .route("/edit", get(handlers::edit_form))
        .route("/save", post(handlers::save_product))
        .route("/delete", get(handlers::delete_product))
        .with_state(api)
}
