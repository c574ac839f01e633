use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::api::error::{record_id, ApiError, ApiJson, ApiPath};
use crate::api::AppState;
use crate::error::ResourceKind;
use crate::license::LicenseCategory;
use crate::store::{NewTruck, Truck};

#[derive(Deserialize)]
pub struct TruckRequest {
    pub plate: String,
    pub minimum_license_type: LicenseCategory,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/trucks", get(list_trucks).post(create_truck))
        .route(
            "/api/trucks/:id",
            get(get_truck).put(update_truck).delete(delete_truck),
        )
}

async fn create_truck(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<TruckRequest>,
) -> Result<(StatusCode, Json<Truck>), ApiError> {
    let input = NewTruck::new(&req.plate, req.minimum_license_type)?;
    let truck = state.fleet.write().await.create_truck(input);
    Ok((StatusCode::CREATED, Json(truck)))
}

async fn list_trucks(State(state): State<AppState>) -> Json<Vec<Truck>> {
    let fleet = state.fleet.read().await;
    Json(fleet.trucks().into_iter().cloned().collect())
}

async fn get_truck(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Truck>, ApiError> {
    let id = record_id(ResourceKind::Truck, id)?;
    let fleet = state.fleet.read().await;
    Ok(Json(fleet.truck(id)?.clone()))
}

async fn update_truck(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<TruckRequest>,
) -> Result<Json<Truck>, ApiError> {
    let id = record_id(ResourceKind::Truck, id)?;
    let input = NewTruck::new(&req.plate, req.minimum_license_type)?;
    let truck = state.fleet.write().await.update_truck(id, input)?;
    Ok(Json(truck))
}

async fn delete_truck(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    let id = record_id(ResourceKind::Truck, id)?;
    state.fleet.write().await.delete_truck(id)?;
    Ok(StatusCode::NO_CONTENT)
}
