pub mod check;
pub mod client;
pub mod health;

use async_trait::async_trait;
use std::sync::Arc;

/// Outbound side of a check: delivers the request and returns the parsed reply
///
/// Any reply that arrives and parses as JSON is Ok, regardless of its HTTP status.
#[async_trait]
pub trait CheckTransport: Send + Sync {
    async fn check(&self, request: &check::Request) -> eyre::Result<check::Response>;
}

#[async_trait]
impl<T: CheckTransport + ?Sized> CheckTransport for Arc<T> {
    async fn check(&self, request: &check::Request) -> eyre::Result<check::Response> {
        (**self).check(request).await
    }
}
