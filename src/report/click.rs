//! Licensed-article click-through
//!
//! Certain licensed articles must be "clicked" (a bare GET against their
//! click url) to record royalty payments. This sink decorates another sink
//! and issues that GET for every article carrying at least one license.
//! Click failures are logged and never interrupt the polling loop.

use crate::feed::transport::HttpTransport;
use crate::feed::{Article, FeedPage};
use crate::report::ReportSink;
use async_trait::async_trait;

/// Sink decorator that performs the royalty click-through for licensed articles
pub struct ClickReport<S> {
    inner: S,
    transport: HttpTransport,
}

impl<S: ReportSink> ClickReport<S> {
    /// Wraps `inner`, clicking licensed articles through `transport`
    pub fn new(inner: S, transport: HttpTransport) -> Self {
        Self { inner, transport }
    }
}

#[async_trait]
impl<S: ReportSink> ReportSink for ClickReport<S> {
    async fn article(&mut self, article: &Article) {
        self.inner.article(article).await;

        if !article.is_licensed() {
            return;
        }
        let Some(url) = article.url.as_deref() else {
            tracing::warn!(
                "Licensed article {} has no url to click through",
                article.id
            );
            return;
        };

        match self.transport.call_url(url).await {
            Ok(status) => {
                tracing::debug!("Click-through for {} returned HTTP {}", url, status);
            }
            Err(e) => {
                tracing::warn!("Click-through for {} failed: {}", url, e);
            }
        }
    }

    async fn page_failed(&mut self, page: &FeedPage) {
        self.inner.page_failed(page).await;
    }
}
