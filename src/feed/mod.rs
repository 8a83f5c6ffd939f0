//! Feed polling module
//!
//! This module contains the core polling protocol:
//! - Deterministic request URL construction
//! - HTTP transport behind a capability trait
//! - Gzip + JSON/XML payload decoding
//! - The cursor-advancing, rate-limited polling loop

mod decoder;
mod poller;
mod request;
pub mod transport;
mod types;

pub use decoder::decode_page;
pub use poller::{Poller, PollerPhase};
pub use request::{build_request_url, DEFAULT_PAGE_LIMIT};
pub use transport::{build_http_client, FeedTransport, HttpTransport};
pub use types::{Article, FeedPage, License, PageStatus};

use crate::config::FeedConfig;
use crate::report::{ClickReport, ConsoleReport};
use tokio_util::sync::CancellationToken;

/// Runs a complete polling session with the default collaborators
///
/// Validates the configuration, builds the production HTTP transport and the
/// console reporter (wrapped in the click-through decorator when
/// `click_licensed` is set), and runs the loop until `shutdown` is cancelled
/// or an unrecoverable error occurs.
///
/// # Arguments
///
/// * `config` - The run configuration
/// * `shutdown` - Cancellation signal observed at every iteration boundary
pub async fn poll(config: FeedConfig, shutdown: CancellationToken) -> crate::Result<()> {
    crate::config::validate(&config)?;

    let transport = HttpTransport::new()?;
    if config.click_licensed {
        let click_transport = HttpTransport::new()?;
        let report = ClickReport::new(ConsoleReport, click_transport);
        Poller::new(config, transport, report).run(shutdown).await
    } else {
        Poller::new(config, transport, ConsoleReport)
            .run(shutdown)
            .await
    }
}
