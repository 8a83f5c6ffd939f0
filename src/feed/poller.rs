//! The polling loop
//!
//! This is the only part of the crate with real state: a single cursor,
//! owned exclusively by the [`Poller`], advanced once per successful
//! non-empty page. Each iteration builds a request URL from the current
//! cursor, fetches, decodes, hands articles to the report sink, and then
//! paces itself so consecutive iteration starts are at least
//! `min_interval_millis` apart.
//!
//! Timing is measured around the whole iteration, not slept unconditionally:
//! a slow fetch shrinks the subsequent pause, keeping the long-run call rate
//! at the configured interval regardless of request latency.

use crate::config::FeedConfig;
use crate::feed::decoder::decode_page;
use crate::feed::request::build_request_url;
use crate::feed::transport::FeedTransport;
use crate::report::ReportSink;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Phase of the polling state machine
///
/// `Idle` exists only between construction and the first iteration; there is
/// no normal terminal phase: the loop runs until cancelled or until a
/// transport/decode error ends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollerPhase {
    /// Constructed, not yet running
    Idle,

    /// Building the URL, fetching, decoding
    Fetching,

    /// Consuming articles and advancing the cursor
    Advancing,

    /// Sleeping out the remainder of the pacing interval
    Pausing,

    /// Cancelled or ended by an unrecoverable error
    Terminated,
}

/// The polling state machine
///
/// Owns the cursor and drives request building, transport, decoding, and
/// reporting. Collaborators are injected so tests can run the loop against a
/// scripted transport and a recording sink.
pub struct Poller<T, R> {
    config: FeedConfig,
    transport: T,
    report: R,
    cursor: Option<i64>,
    phase: PollerPhase,
}

impl<T: FeedTransport, R: ReportSink> Poller<T, R> {
    /// Creates a poller with its cursor initialized from the configuration
    pub fn new(config: FeedConfig, transport: T, report: R) -> Self {
        let cursor = config.cursor;
        Self {
            config,
            transport,
            report,
            cursor,
            phase: PollerPhase::Idle,
        }
    }

    /// The cursor that the next request will resume from
    pub fn cursor(&self) -> Option<i64> {
        self.cursor
    }

    /// The current phase of the state machine
    pub fn phase(&self) -> PollerPhase {
        self.phase
    }

    /// Runs the polling loop until cancellation or an unrecoverable error
    ///
    /// Returns `Ok(())` when `shutdown` is cancelled (observed at the start
    /// of every iteration and during the pacing sleep). A `TransportError`
    /// or `DecodeError` ends the loop with `Err`; a well-formed FAILURE page
    /// does not: it is reported, the cursor stays put, and the identical
    /// request is retried next iteration.
    pub async fn run(&mut self, shutdown: CancellationToken) -> crate::Result<()> {
        tracing::info!("Starting polling loop against {}", self.config.endpoint);

        let result = self.poll_until_cancelled(&shutdown).await;
        self.phase = PollerPhase::Terminated;
        if let Err(e) = &result {
            tracing::error!("Polling loop ended: {}", e);
        }
        result
    }

    async fn poll_until_cancelled(&mut self, shutdown: &CancellationToken) -> crate::Result<()> {
        loop {
            if shutdown.is_cancelled() {
                tracing::info!("Shutdown requested, terminating polling loop");
                return Ok(());
            }

            let iteration_start = Instant::now();

            self.phase = PollerPhase::Fetching;
            let url = build_request_url(&self.config, self.cursor);
            tracing::debug!("Fetching {}", url);
            let raw = self.transport.fetch(&url).await?;
            let page = decode_page(&raw, self.config.wants_json())?;

            self.phase = PollerPhase::Advancing;
            if page.status.is_success() {
                for article in &page.articles {
                    self.report.article(article).await;
                    // Last article in page order wins, never the maximum.
                    self.cursor = Some(article.sequence_id);
                }
                tracing::info!(
                    "{} article(s) pulled, cursor at {:?}",
                    page.articles.len(),
                    self.cursor
                );
            } else {
                tracing::warn!(
                    "Feed call failed with status={}, message code={:?}",
                    page.status,
                    page.message_code
                );
                self.report.page_failed(&page).await;
            }

            self.phase = PollerPhase::Pausing;
            let elapsed = iteration_start.elapsed();
            let min_interval = Duration::from_millis(self.config.min_interval_millis);
            if elapsed < min_interval {
                let pause = min_interval - elapsed;
                tracing::debug!("Pacing: sleeping {:?}", pause);
                tokio::select! {
                    _ = shutdown.cancelled() => {
                        tracing::info!("Shutdown requested during pause, terminating polling loop");
                        return Ok(());
                    }
                    _ = tokio::time::sleep(pause) => {}
                }
            }
        }
    }
}
