use std::sync::Arc;

use axum::Form;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, Redirect};
use serde::Deserialize;
use tracing::error;

use catalog_grpc::CatalogApi;

use crate::views;

pub type AppState = Arc<dyn CatalogApi>;

type PageError = (StatusCode, &'static str);

#[derive(Deserialize)]
pub struct IdParams {
    pub id: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct SaveForm {
    pub id: Option<String>,
    pub name: Option<String>,
    pub price: Option<String>,
}

// Missing or malformed values coerce to zero, never to a rejection.
fn coerce_id(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(0)
}

fn coerce_price(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(0.0)
}

pub async fn list_products(State(api): State<AppState>) -> Result<Html<String>, PageError> {
    let products = api.list_products().await.map_err(|err| {
        error!("list products failed: {}", err);
        (StatusCode::INTERNAL_SERVER_ERROR, "Unable to fetch products")
    })?;
    Ok(Html(views::index_page(&products)))
}

pub async fn create_form() -> Html<String> {
    Html(views::form_page(None))
}

pub async fn edit_form(
    State(api): State<AppState>,
    Query(params): Query<IdParams>,
) -> Result<Html<String>, PageError> {
    let id = coerce_id(params.id.as_deref());
    let product = api.read_product(id).await.map_err(|err| {
        error!("read product {} failed: {}", id, err);
        (StatusCode::INTERNAL_SERVER_ERROR, "Unable to fetch product")
    })?;
    Ok(Html(views::form_page(Some(&product))))
}

/// Branches create-vs-update on whether a non-zero id was submitted.
pub async fn save_product(
    State(api): State<AppState>,
    Form(form): Form<SaveForm>,
) -> Result<Redirect, PageError> {
    let id = coerce_id(form.id.as_deref());
    let name = form.name.unwrap_or_default();
    let price = coerce_price(form.price.as_deref());

    if id == 0 {
        api.create_product(&name, price).await.map_err(|err| {
            error!("create product failed: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Unable to create product")
        })?;
    } else {
        api.update_product(id, &name, price).await.map_err(|err| {
            error!("update product {} failed: {}", id, err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Unable to update product")
        })?;
    }
    Ok(Redirect::to("/"))
}

pub async fn delete_product(
    State(api): State<AppState>,
    Query(params): Query<IdParams>,
) -> Result<Redirect, PageError> {
    let id = coerce_id(params.id.as_deref());
    api.delete_product(id).await.map_err(|err| {
        error!("delete product {} failed: {}", id, err);
        (StatusCode::INTERNAL_SERVER_ERROR, "Unable to delete product")
    })?;
    Ok(Redirect::to("/"))
}
