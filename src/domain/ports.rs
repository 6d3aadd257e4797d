use crate::domain::catalog::CrystalCatalog;
use crate::domain::model::CustomRequest;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where custom-bracelet requests go. Delivery is attempted once; the caller reports the outcome.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, request: &CustomRequest) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn catalog(&self) -> &CrystalCatalog;
    fn product_base_url(&self) -> &str;
    fn notify_endpoint(&self) -> Option<&str>;
    fn notify_timeout_seconds(&self) -> Option<u64>;
}
