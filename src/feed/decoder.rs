//! Response payload decoding
//!
//! The wire payload is always gzip-compressed (the transport asks for gzip
//! and performs no decompression of its own), so decoding is a two-step
//! pipeline: gunzip, then deserialize JSON or XML into a [`FeedPage`].
//!
//! Deserialization ignores wire fields that are not part of the declared
//! model; new upstream fields must never break parsing. The only structural
//! requirement is the `status` field; a response without one is rejected.

use crate::feed::types::{Article, FeedPage, License, PageStatus};
use crate::DecodeError;
use chrono::{DateTime, Utc};
use flate2::read::GzDecoder;
use serde::Deserialize;
use std::io::Read;

/// Decodes one raw transport payload into a feed page
///
/// # Arguments
///
/// * `raw` - The compressed response body as received from the transport
/// * `wants_json` - Whether the run is configured for JSON (otherwise XML)
pub fn decode_page(raw: &[u8], wants_json: bool) -> Result<FeedPage, DecodeError> {
    let payload = decompress(raw)?;
    if wants_json {
        decode_json(&payload)
    } else {
        decode_xml(&payload)
    }
}

/// Gunzips the raw payload
fn decompress(raw: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut decoder = GzDecoder::new(raw);
    let mut payload = Vec::new();
    decoder
        .read_to_end(&mut payload)
        .map_err(DecodeError::Gzip)?;
    Ok(payload)
}

/// JSON wire shape of a feed response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonResponse {
    status: Option<String>,
    message_code: Option<String>,
    user_message: Option<String>,
    developer_message: Option<String>,
    articles: Option<Vec<Article>>,
}

fn decode_json(payload: &[u8]) -> Result<FeedPage, DecodeError> {
    let response: JsonResponse = serde_json::from_slice(payload)?;
    into_page(
        response.status,
        response.message_code,
        response.user_message,
        response.developer_message,
        response.articles.unwrap_or_default(),
    )
}

/// XML wire shape of a feed response
///
/// The XML feed nests articles and licenses inside wrapper elements
/// (`<articles><article>`, `<licenses><license>`) and carries a slightly
/// smaller article than the JSON feed: no tags and no word count.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct XmlResponse {
    status: Option<String>,
    message_code: Option<String>,
    user_message: Option<String>,
    developer_message: Option<String>,
    articles: Option<XmlArticles>,
}

#[derive(Debug, Deserialize)]
struct XmlArticles {
    #[serde(rename = "article", default)]
    article: Vec<XmlArticle>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct XmlArticle {
    sequence_id: i64,
    id: i64,
    title: Option<String>,
    url: Option<String>,
    content: Option<String>,
    content_with_markup: Option<String>,
    extract: Option<String>,
    language: Option<String>,
    language_code: Option<String>,
    published_date: Option<DateTime<Utc>>,
    harvest_date: Option<DateTime<Utc>>,
    embargo_date: Option<DateTime<Utc>>,
    license_end_date: Option<DateTime<Utc>>,
    comments_url: Option<String>,
    #[serde(default)]
    outbound_urls: Vec<String>,
    data_format: Option<String>,
    copyright: Option<String>,
    login_status: Option<String>,
    duplicate_group_id: Option<i64>,
    #[serde(default)]
    adult_language: bool,
    licenses: Option<XmlLicenses>,
}

#[derive(Debug, Deserialize)]
struct XmlLicenses {
    #[serde(rename = "license", default)]
    license: Vec<License>,
}

impl From<XmlArticle> for Article {
    fn from(xml: XmlArticle) -> Self {
        Article {
            sequence_id: xml.sequence_id,
            id: xml.id,
            title: xml.title,
            url: xml.url,
            content: xml.content,
            content_with_markup: xml.content_with_markup,
            extract: xml.extract,
            language: xml.language,
            language_code: xml.language_code,
            tags: Vec::new(),
            word_count: None,
            published_date: xml.published_date,
            harvest_date: xml.harvest_date,
            embargo_date: xml.embargo_date,
            license_end_date: xml.license_end_date,
            comments_url: xml.comments_url,
            outbound_urls: xml.outbound_urls,
            data_format: xml.data_format,
            copyright: xml.copyright,
            login_status: xml.login_status,
            duplicate_group_id: xml.duplicate_group_id,
            adult_language: xml.adult_language,
            licenses: xml.licenses.map(|l| l.license).unwrap_or_default(),
        }
    }
}

fn decode_xml(payload: &[u8]) -> Result<FeedPage, DecodeError> {
    let response: XmlResponse = quick_xml::de::from_reader(payload)?;
    let articles = response
        .articles
        .map(|a| a.article.into_iter().map(Article::from).collect())
        .unwrap_or_default();
    into_page(
        response.status,
        response.message_code,
        response.user_message,
        response.developer_message,
        articles,
    )
}

/// Finishes decoding by enforcing the mandatory status field
fn into_page(
    status: Option<String>,
    message_code: Option<String>,
    user_message: Option<String>,
    developer_message: Option<String>,
    articles: Vec<Article>,
) -> Result<FeedPage, DecodeError> {
    let status = status.ok_or(DecodeError::MissingStatus)?;
    Ok(FeedPage {
        status: PageStatus::from_wire(&status),
        message_code,
        user_message,
        developer_message,
        articles,
    })
}
