use axum::extract::{Path, Query, State};
use axum::Json;
use roster_core::RosterSnapshot;

use crate::error::AppError;
use crate::state::AppState;

#[derive(serde::Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

/// GET /activities — every activity with its current roster.
pub async fn list_activities(State(app): State<AppState>) -> Json<RosterSnapshot> {
    Json(app.roster.list())
}

/// POST /activities/:activity_name/signup?email=… — enroll a student.
pub async fn signup(
    State(app): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let ack = app.roster.enroll(&activity_name, &query.email)?;
    Ok(Json(serde_json::json!({ "message": ack.to_string() })))
}

/// DELETE /activities/:activity_name/signup/:email — unregister a student.
pub async fn unregister(
    State(app): State<AppState>,
    Path((activity_name, email)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let ack = app.roster.remove(&activity_name, &email)?;
    Ok(Json(serde_json::json!({ "message": ack.to_string() })))
}
