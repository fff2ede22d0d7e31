//! Handler模块

use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::service::{ListingService, ListingServiceTrait};
use crate::state::AppState;
use crate::templates::{ErrorTemplate, ListingTemplate};
use common::errors::AppError;
use common::models::schema::ServerListing;
use common::response::ApiResponse;

/// 渲染数据库清单页面
///
/// 连接失败时只输出简短的错误提示页，不渲染任何数据库区块。
pub async fn listing_page(State(state): State<AppState>) -> Response {
    let service = ListingService::new(state.catalog.clone());

    match service.listing().await {
        Ok(listing) => match (ListingTemplate { listing }).render() {
            Ok(html) => Html(html).into_response(),
            Err(e) => AppError::Template(e.to_string()).into_response(),
        },
        Err(AppError::DatabaseConnection(message)) => {
            tracing::error!(error = %message, "数据库连接失败");
            let body = ErrorTemplate { message }
                .render()
                .unwrap_or_else(|_| "database connection error".to_string());
            (StatusCode::BAD_GATEWAY, Html(body)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// 以 JSON 形式返回数据库清单
#[utoipa::path(
    get,
    path = "/api/databases",
    tag = "databases",
    responses(
        (status = 200, description = "数据库清单", body = ApiResponse<ServerListing>),
        (status = 502, description = "数据库服务不可达")
    )
)]
pub async fn list_databases(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ServerListing>>, AppError> {
    let service = ListingService::new(state.catalog.clone());
    let data = service.listing().await?;
    Ok(Json(ApiResponse::ok_with_service(data, "listing-service")))
}

/// 健康检查端点
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "服务运行正常", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "listing-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

/// 健康检查响应
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// 服务状态
    pub status: String,
    /// 服务名称
    pub service: String,
    /// 服务版本
    pub version: String,
    /// 当前时间戳
    pub timestamp: DateTime<Utc>,
}
