use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::api::error::{record_id, ApiError, ApiJson, ApiPath, ApiQuery};
use crate::api::AppState;
use crate::error::ResourceKind;
use crate::store::{Assignment, NewAssignment};

#[derive(Deserialize)]
pub struct AssignmentRequest {
    pub driver_id: u64,
    pub truck_id: u64,
    pub assignment_date: NaiveDate,
}

#[derive(Deserialize)]
pub struct AssignmentFilter {
    pub assignment_date: Option<NaiveDate>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/assignments",
            get(list_assignments).post(create_assignment),
        )
        .route(
            "/api/assignments/:id",
            get(get_assignment)
                .put(update_assignment)
                .delete(delete_assignment),
        )
}

async fn create_assignment(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AssignmentRequest>,
) -> Result<(StatusCode, Json<Assignment>), ApiError> {
    let input = NewAssignment::new(req.driver_id, req.truck_id, req.assignment_date)?;
    let assignment = state.fleet.write().await.create_assignment(input)?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

async fn list_assignments(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<AssignmentFilter>,
) -> Json<Vec<Assignment>> {
    let fleet = state.fleet.read().await;
    Json(
        fleet
            .assignments(filter.assignment_date)
            .into_iter()
            .cloned()
            .collect(),
    )
}

async fn get_assignment(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Assignment>, ApiError> {
    let id = record_id(ResourceKind::Assignment, id)?;
    let fleet = state.fleet.read().await;
    Ok(Json(fleet.assignment(id)?.clone()))
}

async fn update_assignment(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<AssignmentRequest>,
) -> Result<Json<Assignment>, ApiError> {
    let id = record_id(ResourceKind::Assignment, id)?;
    let input = NewAssignment::new(req.driver_id, req.truck_id, req.assignment_date)?;
    let assignment = state.fleet.write().await.update_assignment(id, input)?;
    Ok(Json(assignment))
}

async fn delete_assignment(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    let id = record_id(ResourceKind::Assignment, id)?;
    state.fleet.write().await.delete_assignment(id)?;
    Ok(StatusCode::NO_CONTENT)
}
