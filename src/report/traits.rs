//! Reporting collaborator trait
//!
//! The polling loop does not format output itself; it hands every consumed
//! article and every failed page to a [`ReportSink`]. Sinks are infallible
//! from the loop's point of view; a sink that can fail internally logs and
//! swallows its own errors so reporting never disturbs cursor advancement.

use crate::feed::{Article, FeedPage};
use async_trait::async_trait;

/// Receives articles and page failures from the polling loop
#[async_trait]
pub trait ReportSink: Send {
    /// Called once per article, in page order, as the cursor advances past it
    async fn article(&mut self, article: &Article);

    /// Called once per page whose status is not SUCCESS
    async fn page_failed(&mut self, page: &FeedPage);
}
