//! Valid-X Web Server
//!
//! Axum-based REST API exposing the scorer and report generator to the
//! browser renderer.

pub mod routes;
pub mod state;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use state::{AppState, ServerConfig};

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/score", post(routes::score::score))
        .route("/report", post(routes::report::report));

    Router::new()
        .route("/health", get(routes::health::health))
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Web server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(AppState::new(ServerConfig::default()))
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_score_endpoint() {
        let body = r#"{
            "market_analysis": "There is strong growth and large demand, but the market is also saturated and challenging.",
            "competition_analysis": null
        }"#;
        let response = app().oneshot(post_json("/api/score", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["market"]["opportunity"], 67);
        assert_eq!(json["market"]["challenges"], 33);
        assert_eq!(json["market"]["score"], 100);
        assert_eq!(json["competition"]["score"], 100);
        assert_eq!(json["risk"]["score"], 100);
        assert_eq!(json["overall_score"], 100);
        assert_eq!(json["band"], "favorable");
    }

    #[tokio::test]
    async fn test_score_non_string_section() {
        let body = r#"{"market_analysis": 42, "risk_assessment": "Funding risk."}"#;
        let response = app().oneshot(post_json("/api/score", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["market"]["score"], 50);
        assert_eq!(json["risk"]["financial"], 20);
        assert_eq!(json["risk"]["score"], 96);
    }

    #[tokio::test]
    async fn test_score_rejects_array() {
        let response = app().oneshot(post_json("/api/score", "[]")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_score_rejects_malformed_json() {
        let response = app().oneshot(post_json("/api/score", "{oops")).await.unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_report_markdown() {
        let body = r#"{"startup_idea": "Solar kiosks.", "advisor_recommendations": "GO"}"#;
        let response = app().oneshot(post_json("/api/report", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/markdown; charset=utf-8"
        );

        let text = body_string(response).await;
        assert!(text.starts_with("# Valid-X Startup Validation Report"));
        assert!(text.contains("Solar kiosks."));
        assert!(text.contains("**Decision: GO**"));
    }

    #[tokio::test]
    async fn test_report_json() {
        let response = app()
            .oneshot(post_json("/api/report?format=json", "{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["investor"]["decision"], "HOLD");
        assert_eq!(json["scores"]["overall_score"], 83);
    }

    #[tokio::test]
    async fn test_report_unknown_format() {
        let response = app()
            .oneshot(post_json("/api/report?format=pdf", "{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_string(response).await, "Validation error: Unknown report format: pdf");
    }

    #[tokio::test]
    async fn test_body_limit() {
        let config = ServerConfig { max_body_bytes: 64, ..ServerConfig::default() };
        let app = create_router(AppState::new(config));
        let body = format!(r#"{{"market_analysis": "{}"}}"#, "growth ".repeat(50));
        let response = app.oneshot(post_json("/api/score", &body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
