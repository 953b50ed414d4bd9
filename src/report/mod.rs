use std::io::Write;
use std::thread;
use std::time::Duration;

use chrono::DateTime;

use crate::domain::Article;
use crate::errors::NewsResult;

/// Placeholder for a missing title, link, or timestamp field.
pub const MISSING_FIELD: &str = "N/A";
pub const UNKNOWN_SOURCE: &str = "Unknown Source";

const HEADER_RULE_LEN: usize = 60;
const BLOCK_RULE_LEN: usize = 50;

/// Split a raw RFC 822-style timestamp ("Mon, 01 Jan 2024 10:30:00 GMT")
/// into a date string and a time string. A string that fails to parse comes
/// back verbatim as the date, with "N/A" for the time; an empty string
/// yields "N/A" for both.
pub fn split_timestamp(published: &str) -> (String, String) {
    if published.is_empty() {
        return (MISSING_FIELD.to_string(), MISSING_FIELD.to_string());
    }

    match DateTime::parse_from_rfc2822(published) {
        Ok(dt) => (
            dt.format("%Y-%m-%d").to_string(),
            dt.format("%H:%M:%S").to_string(),
        ),
        Err(_) => (published.to_string(), MISSING_FIELD.to_string()),
    }
}

/// Render one article as the five-field text block plus its separator rule.
pub fn format_block(article: &Article) -> String {
    let title = article.title.as_deref().unwrap_or(MISSING_FIELD);
    let source = article.source.as_deref().unwrap_or(UNKNOWN_SOURCE);
    let link = article.link.as_deref().unwrap_or(MISSING_FIELD);

    // A missing timestamp goes through the same empty-string branch.
    let (date, time) = split_timestamp(article.published.as_deref().unwrap_or(""));

    format!(
        "Title   : {}\nSource  : {}\nDate    : {}\nTime    : {}\nLink    : {}\n{}\n",
        title,
        source,
        date,
        time,
        link,
        "-".repeat(BLOCK_RULE_LEN)
    )
}

pub struct ReportWriter {
    max_articles: usize,
    entry_delay: Duration,
}

impl ReportWriter {
    pub fn new(max_articles: usize, entry_delay: Duration) -> Self {
        Self {
            max_articles,
            entry_delay,
        }
    }

    /// Write the report header and at most `max_articles` entry blocks to
    /// `out`, pausing `entry_delay` after each saved entry. Returns the
    /// number of blocks written.
    pub fn write<W: Write>(&self, query: &str, articles: &[Article], out: &mut W) -> NewsResult<usize> {
        writeln!(out, "News for location: {}", query)?;
        writeln!(out, "{}", "=".repeat(HEADER_RULE_LEN))?;
        writeln!(out)?;

        let mut count = 0;

        for article in articles {
            if count >= self.max_articles {
                println!("[*] Reached max articles limit. Stopping.");
                break;
            }

            println!(
                "[>] Saving: {}",
                article.title.as_deref().unwrap_or(MISSING_FIELD)
            );

            // format_block ends with the separator rule; the extra newline
            // leaves a blank line between blocks.
            writeln!(out, "{}", format_block(article))?;

            count += 1;

            if !self.entry_delay.is_zero() {
                thread::sleep(self.entry_delay);
            }
        }

        Ok(count)
    }
}
