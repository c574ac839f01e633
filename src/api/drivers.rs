use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::api::error::{record_id, ApiError, ApiJson, ApiPath};
use crate::api::AppState;
use crate::error::ResourceKind;
use crate::license::LicenseCategory;
use crate::store::{Driver, NewDriver};

#[derive(Deserialize)]
pub struct DriverRequest {
    pub name: String,
    pub license_type: LicenseCategory,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/drivers", get(list_drivers).post(create_driver))
        .route(
            "/api/drivers/:id",
            get(get_driver).put(update_driver).delete(delete_driver),
        )
}

async fn create_driver(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<DriverRequest>,
) -> Result<(StatusCode, Json<Driver>), ApiError> {
    let input = NewDriver::new(&req.name, req.license_type)?;
    let driver = state.fleet.write().await.create_driver(input);
    Ok((StatusCode::CREATED, Json(driver)))
}

async fn list_drivers(State(state): State<AppState>) -> Json<Vec<Driver>> {
    let fleet = state.fleet.read().await;
    Json(fleet.drivers().into_iter().cloned().collect())
}

async fn get_driver(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Driver>, ApiError> {
    let id = record_id(ResourceKind::Driver, id)?;
    let fleet = state.fleet.read().await;
    Ok(Json(fleet.driver(id)?.clone()))
}

async fn update_driver(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<DriverRequest>,
) -> Result<Json<Driver>, ApiError> {
    let id = record_id(ResourceKind::Driver, id)?;
    let input = NewDriver::new(&req.name, req.license_type)?;
    let driver = state.fleet.write().await.update_driver(id, input)?;
    Ok(Json(driver))
}

async fn delete_driver(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    let id = record_id(ResourceKind::Driver, id)?;
    state.fleet.write().await.delete_driver(id)?;
    Ok(StatusCode::NO_CONTENT)
}
