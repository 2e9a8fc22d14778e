pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::recommend::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/recommend", post(handlers::handle_recommend))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::catalog::StaticJobCatalog;
    use crate::recommend::scorer::TfidfScorer;

    fn test_app() -> Router {
        build_router(AppState {
            catalog: Arc::new(StaticJobCatalog::with_sample_jobs()),
            scorer: Arc::new(TfidfScorer),
        })
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn post_recommend(body: &str) -> (StatusCode, Value) {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/recommend")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_returns_fixed_body() {
        let (status, body) = get_json(test_app(), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "healthy", "service": "ml_api" }));
    }

    #[tokio::test]
    async fn test_health_is_independent_of_prior_requests() {
        let _ = post_recommend(r#"{"skills": ["Python"]}"#).await;
        let _ = post_recommend("{}").await;
        let (status, body) = get_json(test_app(), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "healthy", "service": "ml_api" }));
    }

    #[tokio::test]
    async fn test_recommend_ranks_ml_engineer_first() {
        let (status, body) =
            post_recommend(r#"{"skills": ["Python", "Machine Learning", "TensorFlow"]}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["total_jobs"], json!(8));

        let recs = body["recommendations"].as_array().unwrap();
        assert_eq!(recs.len(), 5);
        assert_eq!(recs[0]["job_id"], json!("6"));
        assert_eq!(recs[0]["title"], json!("AI/ML Engineer"));
    }

    #[tokio::test]
    async fn test_recommend_scores_descending_and_bounded() {
        let (status, body) = post_recommend(r#"{"skills": ["Python"]}"#).await;
        assert_eq!(status, StatusCode::OK);

        let scores: Vec<f64> = body["recommendations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["similarity_score"].as_f64().unwrap())
            .collect();
        assert_eq!(scores.len(), 5);
        for pair in scores.windows(2) {
            assert!(pair[0] >= pair[1], "scores out of order: {scores:?}");
        }
        for score in scores {
            assert!((0.0..=100.0).contains(&score), "score out of range: {score}");
        }
    }

    #[tokio::test]
    async fn test_recommend_result_has_posting_fields() {
        let (_, body) = post_recommend(r#"{"skills": ["JavaScript"]}"#).await;
        let rec = &body["recommendations"].as_array().unwrap()[0];
        for key in [
            "job_id",
            "title",
            "description",
            "skills_required",
            "location",
            "salary",
            "similarity_score",
        ] {
            assert!(rec.get(key).is_some(), "missing key {key}");
        }
    }

    #[tokio::test]
    async fn test_missing_skills_key_is_400() {
        let (status, body) = post_recommend("{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!("Skills are required"));
    }

    #[tokio::test]
    async fn test_empty_skills_list_is_400() {
        let (status, body) = post_recommend(r#"{"skills": []}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!("Skills must be a non-empty list"));
    }

    #[tokio::test]
    async fn test_non_list_skills_is_400() {
        let (status, body) = post_recommend(r#"{"skills": "Python"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!("Skills must be a non-empty list"));
    }

    #[tokio::test]
    async fn test_malformed_json_body_is_400() {
        let (status, body) = post_recommend("{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_non_string_skill_entry_is_500() {
        let (status, body) = post_recommend(r#"{"skills": ["Python", 42]}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].is_string());
    }
}
