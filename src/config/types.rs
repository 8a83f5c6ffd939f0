use url::Url;

/// Default pause between consecutive feed calls, in milliseconds.
///
/// The upstream servers enforce a standard access limit of 20 seconds between
/// calls; more frequent calls may be denied.
pub const DEFAULT_MIN_INTERVAL_MILLIS: u64 = 20_000;

/// Default article feed endpoint
pub const DEFAULT_ENDPOINT: &str = "http://metabase.moreover.com/api/v10/articles";

/// Immutable per-run configuration for the polling loop
///
/// A `FeedConfig` is constructed once (from command-line flags in the
/// reference binary), validated, and then only read for the lifetime of the
/// run. The only mutable polling state is the cursor, which the
/// [`Poller`](crate::feed::Poller) owns.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Access key (profile id) identifying this client to the feed
    pub access_key: String,

    /// Starting cursor; `None` means "start from the beginning of the feed window"
    pub cursor: Option<i64>,

    /// Maximum number of articles per page (normalized into [1,500] when emitted)
    pub page_limit: Option<i32>,

    /// Total number of cooperating client slices
    pub slice_count: Option<i32>,

    /// Which slice this client instance polls
    pub slice_index: Option<i32>,

    /// Response format; `"json"` (case-insensitive) selects JSON, anything
    /// else selects the upstream default XML
    pub response_format: String,

    /// Minimum wall-clock time between the starts of consecutive fetch
    /// iterations, in milliseconds
    pub min_interval_millis: u64,

    /// Feed endpoint URL
    pub endpoint: Url,

    /// Issue a click-through GET for licensed articles (royalty recording)
    pub click_licensed: bool,
}

impl FeedConfig {
    /// Creates a configuration with the given access key and all defaults
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            cursor: None,
            page_limit: None,
            slice_count: None,
            slice_index: None,
            response_format: "json".to_string(),
            min_interval_millis: DEFAULT_MIN_INTERVAL_MILLIS,
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            click_licensed: false,
        }
    }

    /// Returns true if the configured response format selects JSON
    ///
    /// The comparison is case-insensitive; any other value selects XML, which
    /// is the upstream default wire format.
    pub fn wants_json(&self) -> bool {
        self.response_format.eq_ignore_ascii_case("json")
    }
}
