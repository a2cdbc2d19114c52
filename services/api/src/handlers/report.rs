//! Issue report operations

use crate::error::AppError;
use crate::extract::AppJson;
use crate::models::ReportIssueRequest;
use crate::state::AppState;
use crate::validate::Validator;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

pub async fn get_issues(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let issues = state.store.reports.all();
    Ok(Json(json!({ "success": true, "issues": issues })))
}

pub async fn report_issue(
    State(state): State<AppState>,
    AppJson(req): AppJson<ReportIssueRequest>,
) -> Result<Json<Value>, AppError> {
    let mut v = Validator::new();
    v.length("name", &req.name, 3, None, "Enter a valid name")
        .email("email", &req.email, "Enter a valid email")
        .length("issue", &req.issue, 5, Some(1000), "Enter a valid issue");
    v.finish()?;

    if state.store.reports.by_issue(&req.issue).is_some() {
        return Err(AppError::Conflict(
            "this problem is already reported".to_string(),
        ));
    }

    let report = state.store.reports.insert(req.into_report())?;
    Ok(Json(json!({ "success": true, "report": report })))
}
