use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::recommend::pipeline::{rank_jobs, JobRecommendation};
use crate::state::AppState;

/// Response envelope for POST /api/recommend.
#[derive(Serialize)]
pub struct RecommendResponse {
    pub success: bool,
    pub recommendations: Vec<JobRecommendation>,
    pub total_jobs: usize,
}

/// POST /api/recommend
///
/// Validates the body, scores every catalog posting against the supplied
/// skills, and returns the top matches.
pub async fn handle_recommend(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<RecommendResponse>, AppError> {
    let Json(payload) = body.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let user_skills = parse_skills(&payload)?;

    let jobs = state.catalog.all_jobs().await?;
    let (recommendations, total_jobs) = rank_jobs(state.scorer.as_ref(), &user_skills, &jobs);

    Ok(Json(RecommendResponse {
        success: true,
        recommendations,
        total_jobs,
    }))
}

/// Extracts the skill list, enforcing the contract's validation order:
/// missing key first, then non-list or empty list.
fn parse_skills(payload: &Value) -> Result<Vec<String>, AppError> {
    let skills = payload
        .get("skills")
        .ok_or_else(|| AppError::Validation("Skills are required".to_string()))?;

    let list = match skills.as_array() {
        Some(list) if !list.is_empty() => list,
        _ => {
            return Err(AppError::Validation(
                "Skills must be a non-empty list".to_string(),
            ))
        }
    };

    // Non-string entries are not a named validation case; the deserialization
    // message surfaces as a 500, matching the contract for unexpected input.
    serde_json::from_value(Value::Array(list.clone())).map_err(|e| AppError::Internal(e.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_skills_key_is_required_error() {
        match parse_skills(&json!({})) {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "Skills are required"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_non_object_body_is_required_error() {
        match parse_skills(&json!(null)) {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "Skills are required"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_empty_list_is_non_empty_list_error() {
        match parse_skills(&json!({ "skills": [] })) {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "Skills must be a non-empty list"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_non_list_skills_is_non_empty_list_error() {
        for payload in [json!({ "skills": "Python" }), json!({ "skills": 42 })] {
            match parse_skills(&payload) {
                Err(AppError::Validation(msg)) => {
                    assert_eq!(msg, "Skills must be a non-empty list")
                }
                other => panic!("unexpected result: {other:?}"),
            }
        }
    }

    #[test]
    fn test_non_string_entry_is_internal_error() {
        match parse_skills(&json!({ "skills": ["Python", 42] })) {
            Err(AppError::Internal(_)) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_valid_skills_parse() {
        let skills = parse_skills(&json!({ "skills": ["Python", "SQL"] })).unwrap();
        assert_eq!(skills, vec!["Python".to_string(), "SQL".to_string()]);
    }
}
