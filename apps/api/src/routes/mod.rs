pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::taxonomy::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Classification
        .route("/api/v1/classify", post(handlers::handle_classify))
        .route(
            "/api/v1/classify/skills",
            post(handlers::handle_group_skills),
        )
        // Roles
        .route("/api/v1/roles", get(handlers::handle_list_roles))
        .route(
            "/api/v1/roles/:role/categories",
            get(handlers::handle_role_categories),
        )
        // Catalog
        .route("/api/v1/categories", get(handlers::handle_list_categories))
        .route(
            "/api/v1/categories/:key",
            get(handlers::handle_get_category),
        )
        .route("/api/v1/domains", get(handlers::handle_list_domains))
        .route("/api/v1/domains/:domain", get(handlers::handle_get_domain))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::taxonomy::classifier::KeywordClassifier;

    fn test_app(vars: &[(&str, &str)]) -> Router {
        let vars: Vec<(String, String)> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let config = Config::from_lookup(|key| {
            vars.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
        })
        .unwrap();
        build_router(AppState {
            config,
            classifier: Arc::new(KeywordClassifier),
        })
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        read_json(response).await
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        read_json(response).await
    }

    async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(test_app(&[]), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "swarmhire-taxonomy");
    }

    #[tokio::test]
    async fn test_classify_python() {
        let (status, body) =
            post_json(test_app(&[]), "/api/v1/classify", json!({"text": "Python"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["best"], "coding");
        assert_eq!(body["classifier_backend"], "keyword");
        assert_eq!(body["matches"][0]["category"], "coding");
        assert_eq!(body["matches"][0]["kind"], "exact");
        assert_eq!(body["matches"][0]["matched_keyword"], "python");
    }

    #[tokio::test]
    async fn test_classify_nonsense_is_empty_not_error() {
        let (status, body) = post_json(
            test_app(&[]),
            "/api/v1/classify",
            json!({"text": "some random nonsense xyz123"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matches"], json!([]));
        assert_eq!(body["best"], Value::Null);
    }

    #[tokio::test]
    async fn test_classify_rejects_blank_text() {
        let (status, body) =
            post_json(test_app(&[]), "/api/v1/classify", json!({"text": "  "})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_classify_rejects_oversized_text() {
        let app = test_app(&[("CLASSIFY_MAX_INPUT_CHARS", "10")]);
        let (status, _) =
            post_json(app, "/api/v1/classify", json!({"text": "kubernetes and docker"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_classify_truncates_to_max_results() {
        let app = test_app(&[("CLASSIFY_MAX_RESULTS", "1")]);
        let (status, body) = post_json(
            app,
            "/api/v1/classify",
            json!({"text": "Docker, Kubernetes and PostgreSQL"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matches"].as_array().unwrap().len(), 1);
        assert_eq!(body["best"], "containers");
    }

    #[tokio::test]
    async fn test_group_skills() {
        let (status, body) = post_json(
            test_app(&[]),
            "/api/v1/classify/skills",
            json!({"skills": [
                {"name": "Kubernetes", "proficiency": "advanced", "type": "technical"},
                {"name": "Basket weaving", "proficiency": null, "type": null}
            ]}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["groups"][0]["category"], "containers");
        assert_eq!(body["groups"][0]["skills"][0]["type"], "technical");
        assert_eq!(body["uncategorized"][0]["name"], "Basket weaving");
    }

    #[tokio::test]
    async fn test_group_skills_enforces_batch_limit() {
        let app = test_app(&[("CLASSIFY_MAX_SKILLS", "1")]);
        let (status, _) = post_json(
            app,
            "/api/v1/classify/skills",
            json!({"skills": [{"name": "Go"}, {"name": "Rust"}]}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_role_categories_for_mapped_role() {
        let (status, body) =
            get_json(test_app(&[]), "/api/v1/roles/software_engineer/categories").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["used_default"], false);
        let keys: Vec<&str> = body["categories"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["key"].as_str().unwrap())
            .collect();
        assert_eq!(
            keys,
            vec![
                "coding",
                "debugging",
                "testing",
                "version_control",
                "data_structures",
                "problem_solving",
                "collaboration",
            ]
        );
    }

    #[tokio::test]
    async fn test_role_categories_for_unknown_role_uses_default() {
        let (status, body) =
            get_json(test_app(&[]), "/api/v1/roles/unknown_role_xyz/categories").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["used_default"], true);
        assert_eq!(body["role"], "unknown_role_xyz");
        assert_eq!(body["categories"][0]["key"], "communication");
        assert_eq!(body["categories"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_list_roles_excludes_default() {
        let (_, body) = get_json(test_app(&[]), "/api/v1/roles").await;
        let roles = body["roles"].as_array().unwrap();
        assert!(roles.contains(&json!("software_engineer")));
        assert!(!roles.contains(&json!("default")));
    }

    #[tokio::test]
    async fn test_unknown_category_renders_fallback() {
        let (status, body) = get_json(test_app(&[]), "/api/v1/categories/no_such_thing").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["known"], false);
        assert_eq!(body["label"], "Unknown Category");
    }

    #[tokio::test]
    async fn test_category_list_filters_by_role() {
        let (_, all) = get_json(test_app(&[]), "/api/v1/categories").await;
        let (_, filtered) =
            get_json(test_app(&[]), "/api/v1/categories?role=game_designer").await;
        let all_len = all["categories"].as_array().unwrap().len();
        let filtered = filtered["categories"].as_array().unwrap();
        assert!(filtered.len() < all_len);
        assert!(filtered.iter().any(|c| c["key"] == "level_design"));
        assert!(filtered.iter().any(|c| c["applicable_roles"] == "all"));
    }

    #[tokio::test]
    async fn test_domains() {
        let (_, body) = get_json(test_app(&[]), "/api/v1/domains").await;
        assert_eq!(body["domains"].as_array().unwrap().len(), 7);

        let (status, body) = get_json(test_app(&[]), "/api/v1/domains/gaming").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["label"], "Gaming");
        assert!(body["categories"]
            .as_array()
            .unwrap()
            .iter()
            .all(|c| c["domain"] == "gaming"));
    }

    #[tokio::test]
    async fn test_unknown_domain_is_404() {
        let (status, body) = get_json(test_app(&[]), "/api/v1/domains/astrology").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
