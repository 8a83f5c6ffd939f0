//! Console reporter
//!
//! Prints each article's title, click url, license names, and sequence id:
//! the minimal fields a feed consumer needs to verify their configuration.

use crate::feed::{Article, FeedPage};
use crate::report::ReportSink;
use async_trait::async_trait;

/// Reporter that prints articles and failures to stdout
#[derive(Debug, Default)]
pub struct ConsoleReport;

#[async_trait]
impl ReportSink for ConsoleReport {
    async fn article(&mut self, article: &Article) {
        println!("TITLE: {}", article.title.as_deref().unwrap_or(""));
        println!("URL: {}", article.url.as_deref().unwrap_or(""));

        let licenses: Vec<&str> = article
            .licenses
            .iter()
            .filter_map(|l| l.name.as_deref())
            .collect();
        println!("LICENSES: [{}]", licenses.join(","));
        println!("SEQUENCE ID: {}\n", article.sequence_id);
    }

    async fn page_failed(&mut self, page: &FeedPage) {
        println!("Feed call failed with status=[{}]", page.status);
        println!(
            "Message code = [ {} ]",
            page.message_code.as_deref().unwrap_or("")
        );
    }
}
