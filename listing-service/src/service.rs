//! 数据库清单服务模块

use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::SchemaCatalog;
use common::errors::AppResult;
use common::models::schema::ServerListing;

/// 清单服务 Trait
#[async_trait]
pub trait ListingServiceTrait: Send + Sync {
    /// 获取当前数据库清单快照
    async fn listing(&self) -> AppResult<ServerListing>;
}

/// 数据库清单服务
pub struct ListingService {
    catalog: Arc<SchemaCatalog>,
}

impl ListingService {
    /// 创建新的清单服务实例
    pub fn new(catalog: Arc<SchemaCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl ListingServiceTrait for ListingService {
    async fn listing(&self) -> AppResult<ServerListing> {
        let listing = self.catalog.snapshot().await?;
        tracing::info!(
            databases = listing.database_count(),
            tables = listing.table_count(),
            "清单快照已生成"
        );
        Ok(listing)
    }
}
