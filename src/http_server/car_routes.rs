//! Car HTTP Routes
//!
//! List, lookup, create, partial update, delete and search for the
//! catalog. Writes answer with 302 redirects, reads with JSON.
//! Extractors are taken as `Result` so every rejection surfaces as a
//! catalog validation error.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{FormRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{Car, CarId, Catalog, CatalogError, CatalogResult, MAX_PATH_ID};

use super::form::{field, CarForm};

/// Longest accepted `number` query value
const MAX_LIMIT_CHARS: usize = 3;

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub number: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarEntry {
    pub id: CarId,
    pub car: Car,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CarListResponse {
    pub cars: Vec<CarEntry>,
    pub total: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub message: String,
    pub id: CarId,
    pub car: Car,
}

// ==================
// Car Routes
// ==================

/// Create car routes
pub fn car_routes(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/cars", get(list_cars_handler))
        .route(
            "/cars/:id",
            get(get_car_handler)
                .post(update_car_handler)
                .delete(delete_car_handler),
        )
        .route("/create_car", post(create_car_handler))
        .route("/search", post(search_handler))
        .route("/edit", get(edit_car_handler))
        .route("/delete", get(delete_car_view_handler))
        .with_state(catalog)
}

// ==================
// Helper Functions
// ==================

/// 302 Found to `location`
fn found(location: String) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

fn parse_limit(raw: Option<&str>, default: usize) -> CatalogResult<usize> {
    let raw = match raw.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(default),
    };

    if raw.chars().count() > MAX_LIMIT_CHARS {
        return Err(CatalogError::validation(format!(
            "number must be at most {} characters",
            MAX_LIMIT_CHARS
        )));
    }

    raw.parse::<usize>().map_err(|_| {
        CatalogError::validation(format!("number must be a non-negative integer, got '{}'", raw))
    })
}

fn required_id(query: &IdQuery) -> CatalogResult<CarId> {
    match query.id.as_deref() {
        Some(raw) => CarId::parse(raw),
        None => Err(CatalogError::validation("id is required")),
    }
}

// ==================
// Handlers
// ==================

async fn home_handler() -> Response {
    found("/cars".to_string())
}

async fn list_cars_handler(
    State(catalog): State<Arc<Catalog>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<CarListResponse>, CatalogError> {
    let Query(query) = query?;
    let limit = parse_limit(query.number.as_deref(), catalog.config().default_list_limit)?;

    let cars: Vec<CarEntry> = catalog
        .list(limit)
        .into_iter()
        .map(|(id, car)| CarEntry { id, car })
        .collect();

    Ok(Json(CarListResponse {
        total: cars.len(),
        cars,
    }))
}

async fn get_car_handler(
    State(catalog): State<Arc<Catalog>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<CarEntry>, CatalogError> {
    let Path(raw_id) = path?;
    let id = CarId::parse_bounded(&raw_id, MAX_PATH_ID)?;
    let car = catalog.get(id)?;
    Ok(Json(CarEntry { id, car }))
}

async fn search_handler(
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Response, CatalogError> {
    let Form(pairs) = form?;
    let raw = field(&pairs, "id").ok_or_else(|| CatalogError::validation("id is required"))?;
    let id = CarId::parse(raw)?;
    Ok(found(format!("/cars/{}", id)))
}

async fn create_car_handler(
    State(catalog): State<Arc<Catalog>>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Response, CatalogError> {
    let Form(pairs) = form?;
    let (draft, offset) = CarForm::from_pairs(pairs).into_draft()?;
    catalog.create(draft, offset)?;
    Ok(found("/".to_string()))
}

async fn update_car_handler(
    State(catalog): State<Arc<Catalog>>,
    path: Result<Path<String>, PathRejection>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Response, CatalogError> {
    let Path(raw_id) = path?;
    let id = CarId::parse_bounded(&raw_id, MAX_PATH_ID)?;
    let Form(pairs) = form?;
    let patch = CarForm::from_pairs(pairs).into_patch()?;
    catalog.update(id, patch)?;
    Ok(found("/cars".to_string()))
}

async fn edit_car_handler(
    State(catalog): State<Arc<Catalog>>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<Json<CarEntry>, CatalogError> {
    let Query(query) = query?;
    let id = required_id(&query)?;
    let car = catalog.get(id)?;
    Ok(Json(CarEntry { id, car }))
}

async fn delete_car_view_handler(
    State(catalog): State<Arc<Catalog>>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<Response, CatalogError> {
    let Query(query) = query?;
    let id = required_id(&query)?;
    catalog.delete(id)?;
    Ok(found("/cars".to_string()))
}

async fn delete_car_handler(
    State(catalog): State<Arc<Catalog>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<DeletedResponse>, CatalogError> {
    let Path(raw_id) = path?;
    let id = CarId::parse(&raw_id)?;
    let car = catalog.delete(id)?;
    Ok(Json(DeletedResponse {
        message: format!("car {} has successfully been deleted", id),
        id,
        car,
    }))
}
