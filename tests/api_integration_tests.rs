// API Integration Tests
//
// Purpose: exercise every endpoint through the router against the seed catalog
// Run with: cargo test --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use approx::assert_relative_eq;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use bias_lab_api::{create_router, AppState};
    use serde_json::Value;
    use tower::ServiceExt; // for oneshot

    // Helper: Create test app
    fn create_test_app() -> axum::Router {
        let state = AppState::new().expect("seed catalog is valid");
        create_router(state)
    }

    async fn get(app: axum::Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    // Helper: Parse JSON response
    async fn json_response(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        serde_json::from_slice(&body).expect("Failed to parse JSON")
    }

    fn ids(body: &Value) -> Vec<&str> {
        body.as_array()
            .unwrap()
            .iter()
            .map(|a| a["id"].as_str().unwrap())
            .collect()
    }

    // =========================================================================
    // Section 1: Service info
    // =========================================================================

    #[tokio::test]
    async fn test_root() {
        let response = get(create_test_app(), "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["message"], "Bias Lab API v0.1");
        assert_eq!(body["status"], "running");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = get(create_test_app(), "/api/unknown").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_response(response).await["detail"], "Not Found");
    }

    // =========================================================================
    // Section 2: Articles
    // =========================================================================

    #[tokio::test]
    async fn test_list_articles_default_limit() {
        let response = get(create_test_app(), "/api/articles").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(
            ids(&body),
            vec!["cnn-001", "fox-001", "reuters-001", "wsj-001", "msnbc-001", "bloomberg-001", "nyt-001"]
        );
    }

    #[tokio::test]
    async fn test_list_articles_limit() {
        let body = json_response(get(create_test_app(), "/api/articles?limit=2").await).await;
        assert_eq!(ids(&body), vec!["cnn-001", "fox-001"]);

        let body = json_response(get(create_test_app(), "/api/articles?limit=0").await).await;
        assert!(body.as_array().unwrap().is_empty());

        let body = json_response(get(create_test_app(), "/api/articles?limit=-3").await).await;
        assert!(body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_articles_by_narrative() {
        let body = json_response(
            get(create_test_app(), "/api/articles?narrative=tariff-rebates").await,
        )
        .await;
        assert_eq!(
            ids(&body),
            vec!["cnn-001", "fox-001", "reuters-001", "wsj-001", "msnbc-001"]
        );

        let body = json_response(
            get(create_test_app(), "/api/articles?narrative=trade-analysis&limit=5").await,
        )
        .await;
        assert_eq!(ids(&body), vec!["nyt-001"]);

        // Unknown narrative is not an error
        let response = get(create_test_app(), "/api/articles?narrative=sports").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(json_response(response).await.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_articles_invalid_limit() {
        let response = get(create_test_app(), "/api/articles?limit=ten").await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(json_response(response).await["detail"].is_string());
    }

    #[tokio::test]
    async fn test_get_article() {
        let response = get(create_test_app(), "/api/articles/reuters-001").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["id"], "reuters-001");
        assert_eq!(body["source"], "Reuters");
        assert_eq!(body["source_lean"], "center");
        assert_eq!(body["narrative_cluster"], "tariff-rebates");
        assert_eq!(body["bias_scores"]["factual_grounding"], 88);
        assert_relative_eq!(body["bias_scores"]["confidence"].as_f64().unwrap(), 0.91);

        let phrases = body["biased_phrases"].as_array().unwrap();
        assert_eq!(phrases.len(), 1);
        assert_eq!(phrases[0]["text"], "details remaining unclear");
        assert_eq!(phrases[0]["start"], 98);
        assert_eq!(phrases[0]["end"], 123);
        assert_eq!(phrases[0]["dimension"], "factual_grounding");

        // ISO-8601 timestamp
        let published = body["published"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(published).is_ok());
    }

    #[tokio::test]
    async fn test_get_article_not_found() {
        let response = get(create_test_app(), "/api/articles/nonexistent").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_response(response).await["detail"], "Article not found");
    }

    // =========================================================================
    // Section 3: Narratives
    // =========================================================================

    #[tokio::test]
    async fn test_list_narratives() {
        let response = get(create_test_app(), "/api/narratives").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        let narratives = body.as_array().unwrap();
        assert_eq!(ids(&body), vec!["tariff-rebates", "fed-policy", "trade-analysis"]);

        let counts: Vec<u64> = narratives
            .iter()
            .map(|n| n["article_count"].as_u64().unwrap())
            .collect();
        assert_eq!(counts, vec![5, 2, 3]);

        assert_eq!(narratives[0]["sources"][3], "WSJ");
        assert_eq!(narratives[1]["average_bias"]["source_transparency"], 87);
        assert_relative_eq!(narratives[1]["divergence_score"].as_f64().unwrap(), 0.15);
        assert_eq!(narratives[1]["trending"], false);
    }

    // =========================================================================
    // Section 4: Comparison
    // =========================================================================

    #[tokio::test]
    async fn test_compare_articles() {
        let response = get(create_test_app(), "/api/comparison/cnn-001/fox-001").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["article1"]["id"], "cnn-001");
        assert_eq!(body["article2"]["id"], "fox-001");

        let delta = &body["bias_delta"];
        assert_eq!(delta["ideological_stance"], 53);
        assert_eq!(delta["factual_grounding"], 4);
        assert_eq!(delta["framing_choices"], 7);
        assert_eq!(delta["emotional_tone"], 13);
        assert_eq!(delta["source_transparency"], 7);
        assert!(delta.get("confidence").is_none());

        let spin = body["same_facts_different_spin"].as_array().unwrap();
        assert_eq!(spin.len(), 1);
        assert_eq!(spin[0]["fact"], "Rebate amounts range from $500-2000");
    }

    #[tokio::test]
    async fn test_compare_articles_not_found() {
        for uri in [
            "/api/comparison/cnn-001/nonexistent",
            "/api/comparison/nonexistent/cnn-001",
            "/api/comparison/missing-1/missing-2",
        ] {
            let response = get(create_test_app(), uri).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
            assert_eq!(json_response(response).await["detail"], "Article(s) not found");
        }
    }

    // =========================================================================
    // Section 5: Cross-cutting behaviour
    // =========================================================================

    #[tokio::test]
    async fn test_repeated_queries_identical() {
        let app = create_test_app();
        let mut bodies = Vec::new();
        for _ in 0..3 {
            let response = get(app.clone(), "/api/comparison/msnbc-001/wsj-001").await;
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            bodies.push(bytes);
        }
        assert_eq!(bodies[0], bodies[1]);
        assert_eq!(bodies[1], bodies[2]);
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin_with_credentials() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/narratives")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:3000"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
    }
}
