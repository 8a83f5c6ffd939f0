//! Request URL construction
//!
//! Builds the feed request URL from the configuration and the current
//! cursor. Pure and deterministic: the same `(config, cursor)` pair always
//! produces a byte-identical URL, with query parameters in a fixed order.

use crate::config::FeedConfig;
use url::Url;

/// Query parameter names understood by the feed API
const KEY_PARAM: &str = "key";
const SEQUENCE_ID_PARAM: &str = "sequence_id";
const LIMIT_PARAM: &str = "limit";
const NUMBER_OF_SLICES_PARAM: &str = "number_of_slices";
const SLICE_NUMBER_PARAM: &str = "slice_number";
const FORMAT_PARAM: &str = "format";

/// Maximum (and default) number of articles per page.
///
/// A requested limit outside [1,500] is not an error: the emitted parameter
/// falls back to this default, mirroring the upstream behavior of a missing
/// limit.
pub const DEFAULT_PAGE_LIMIT: i32 = 500;

/// Builds the request URL for one feed call
///
/// Parameter order is fixed: `key`, then `sequence_id` (iff a cursor is
/// held), then `limit` (iff configured; normalized into [1,500]), then the
/// `number_of_slices`/`slice_number` pair (iff both are configured, never
/// one without the other), then `format=json` (iff the configured format is
/// `"json"`, case-insensitively; any other format means XML and emits no
/// parameter).
///
/// # Arguments
///
/// * `config` - The validated run configuration
/// * `cursor` - The cursor to resume from, if any
pub fn build_request_url(config: &FeedConfig, cursor: Option<i64>) -> Url {
    let mut url = config.endpoint.clone();

    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair(KEY_PARAM, &config.access_key);

        if let Some(cursor) = cursor {
            pairs.append_pair(SEQUENCE_ID_PARAM, &cursor.to_string());
        }

        if let Some(limit) = config.page_limit {
            let effective = if (1..=DEFAULT_PAGE_LIMIT).contains(&limit) {
                limit
            } else {
                DEFAULT_PAGE_LIMIT
            };
            pairs.append_pair(LIMIT_PARAM, &effective.to_string());
        }

        if let (Some(count), Some(index)) = (config.slice_count, config.slice_index) {
            pairs.append_pair(NUMBER_OF_SLICES_PARAM, &count.to_string());
            pairs.append_pair(SLICE_NUMBER_PARAM, &index.to_string());
        }

        if config.wants_json() {
            pairs.append_pair(FORMAT_PARAM, "json");
        }
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> FeedConfig {
        FeedConfig::new("profile-key")
    }

    #[test]
    fn test_minimal_url() {
        let mut config = create_test_config();
        config.response_format = "xml".to_string();

        let url = build_request_url(&config, None);
        assert_eq!(
            url.as_str(),
            "http://metabase.moreover.com/api/v10/articles?key=profile-key"
        );
    }

    #[test]
    fn test_build_is_deterministic() {
        let mut config = create_test_config();
        config.page_limit = Some(10);
        config.slice_count = Some(4);
        config.slice_index = Some(2);

        let first = build_request_url(&config, Some(42));
        let second = build_request_url(&config, Some(42));
        assert_eq!(first.as_str(), second.as_str());
        assert_eq!(
            first.as_str(),
            "http://metabase.moreover.com/api/v10/articles?\
             key=profile-key&sequence_id=42&limit=10&number_of_slices=4&slice_number=2&format=json"
        );
    }

    #[test]
    fn test_cursor_omitted_when_absent() {
        let config = create_test_config();
        let url = build_request_url(&config, None);
        assert!(!url.as_str().contains("sequence_id"));

        let url = build_request_url(&config, Some(7));
        assert!(url.as_str().contains("sequence_id=7"));
    }

    #[test]
    fn test_limit_in_range_passes_through() {
        let mut config = create_test_config();
        for limit in [1, 10, 500] {
            config.page_limit = Some(limit);
            let url = build_request_url(&config, None);
            assert!(url.as_str().contains(&format!("limit={}", limit)));
        }
    }

    #[test]
    fn test_limit_out_of_range_normalizes_to_default() {
        let mut config = create_test_config();
        for limit in [0, -1, 501, i32::MAX] {
            config.page_limit = Some(limit);
            let url = build_request_url(&config, None);
            assert!(url.as_str().contains("limit=500"), "limit {}", limit);
        }
    }

    #[test]
    fn test_limit_omitted_when_absent() {
        let config = create_test_config();
        let url = build_request_url(&config, None);
        assert!(!url.as_str().contains("limit"));
    }

    #[test]
    fn test_slice_pair_emitted_together_or_not_at_all() {
        // Validation rejects a lone slice parameter, but the builder must
        // never emit half a pair even on an unvalidated config.
        let mut config = create_test_config();
        config.slice_count = Some(4);
        let url = build_request_url(&config, None);
        assert!(!url.as_str().contains("number_of_slices"));
        assert!(!url.as_str().contains("slice_number"));

        config.slice_count = None;
        config.slice_index = Some(2);
        let url = build_request_url(&config, None);
        assert!(!url.as_str().contains("number_of_slices"));
        assert!(!url.as_str().contains("slice_number"));

        config.slice_count = Some(4);
        config.slice_index = Some(2);
        let url = build_request_url(&config, None);
        assert!(url.as_str().contains("number_of_slices=4&slice_number=2"));
    }

    #[test]
    fn test_format_parameter_is_case_insensitive() {
        let mut config = create_test_config();
        for format in ["json", "JSON", "Json"] {
            config.response_format = format.to_string();
            let url = build_request_url(&config, None);
            assert!(url.as_str().ends_with("format=json"), "format {}", format);
        }

        for format in ["xml", "XML", "", "yaml"] {
            config.response_format = format.to_string();
            let url = build_request_url(&config, None);
            assert!(!url.as_str().contains("format="), "format {}", format);
        }
    }

    #[test]
    fn test_key_is_percent_encoded() {
        let mut config = create_test_config();
        config.access_key = "a key&more".to_string();
        let url = build_request_url(&config, None);
        assert!(url.as_str().contains("key=a+key%26more"));
    }
}
