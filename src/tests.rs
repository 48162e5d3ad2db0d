#[cfg(test)]
mod integration_tests {
    use crate::config::initialize_app_state;
    use crate::schemas::HealthResponse;
    use crate::test_utils::test_utils::{setup_test_app, setup_test_app_with_dir, INDEX_MARKER};
    use axum::http::StatusCode;
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_health_check() {
        let (app, _bundle) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(body.bundle, "present");
    }

    #[tokio::test]
    async fn test_health_check_body_shape() {
        let (app, _bundle) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let body: serde_json::Value = server.get("/health").await.json();
        let object = body.as_object().expect("health body is an object");
        assert_eq!(object.len(), 3);
        assert!(object.contains_key("status"));
        assert!(object.contains_key("version"));
        assert!(object.contains_key("bundle"));
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let (app, _bundle) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/").await;

        response.assert_status(StatusCode::OK);
        assert!(response.text().contains(INDEX_MARKER));
    }

    #[tokio::test]
    async fn test_sales_route_falls_back_to_index() {
        let (app, _bundle) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/sales").await;

        response.assert_status(StatusCode::OK);
        assert!(response.text().contains(INDEX_MARKER));
    }

    #[tokio::test]
    async fn test_unknown_route_is_left_to_frontend_router() {
        let (app, _bundle) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/does/not/exist").await;

        response.assert_status(StatusCode::OK);
        assert!(response.text().contains(INDEX_MARKER));
    }

    #[tokio::test]
    async fn test_static_asset_is_served() {
        let (app, _bundle) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/app.js").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), "console.log('salesboard');");
    }

    #[tokio::test]
    async fn test_missing_bundle_reported_by_health() {
        let empty = tempfile::tempdir().unwrap();
        let app = setup_test_app_with_dir(&empty);
        let server = TestServer::new(app).unwrap();

        let health: HealthResponse = server.get("/health").await.json();
        assert_eq!(health.bundle, "missing");

        let response = server.get("/sales").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_static_path_must_be_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("index.html");
        std::fs::write(&file, "<html></html>").unwrap();

        let result = initialize_app_state(&file);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("is not a directory"));
    }
}
