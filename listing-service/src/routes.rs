//! 路由模块

use axum::{routing::get, Router};

use crate::handlers;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::listing_page))
        .route("/api/databases", get(handlers::list_databases))
        .route("/api/health", get(handlers::health_check))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use common::config::{AppConfig, DatabaseConfig};

    /// State pointing at an address where no database listens.
    fn test_state() -> AppState {
        AppState::new(AppConfig {
            service_name: "listing-service".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            static_dir: "static".to_string(),
            connect_timeout_secs: 1,
            database: DatabaseConfig {
                host: "127.0.0.1".to_string(),
                port: 9,
                username: "root".to_string(),
                password: String::new(),
            },
        })
    }

    async fn get_path(path: &str) -> Result<(StatusCode, String)> {
        let app = router().with_state(test_state());
        let response = app
            .oneshot(Request::builder().uri(path).body(Body::empty())?)
            .await?;
        let status = response.status();
        let bytes = response.into_body().collect().await?.to_bytes();
        Ok((status, String::from_utf8(bytes.to_vec())?))
    }

    #[tokio::test]
    async fn health_endpoint_reports_healthy() -> Result<()> {
        let (status, body) = get_path("/api/health").await?;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("healthy"));
        assert!(body.contains("listing-service"));
        Ok(())
    }

    #[tokio::test]
    async fn listing_page_degrades_to_diagnostic_when_unreachable() -> Result<()> {
        let (status, body) = get_path("/").await?;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.contains("Database connection error"));
        assert!(!body.contains("class=\"base\""));
        Ok(())
    }

    #[tokio::test]
    async fn json_listing_reports_connection_failure() -> Result<()> {
        let (status, body) = get_path("/api/databases").await?;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        let json: serde_json::Value = serde_json::from_str(&body)?;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "DATABASE_CONNECTION");
        Ok(())
    }
}
