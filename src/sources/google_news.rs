use reqwest::blocking::Client;
use rss::Channel;
use url::Url;

use crate::domain::Article;
use crate::errors::{NewsError, NewsResult};
use crate::sources::traits::FeedSource;

const SEARCH_ENDPOINT: &str = "https://news.google.com/rss/search";

/// Locale parameters selecting the language/region/edition of the feed.
const LOCALE_PARAMS: &[(&str, &str)] = &[("hl", "en-IN"), ("gl", "IN"), ("ceid", "IN:en")];

pub struct GoogleNewsSource {
    client: Client,
}

impl GoogleNewsSource {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    /// Build the search feed URL for a query term, percent-encoding the term.
    pub fn search_url(query: &str) -> NewsResult<String> {
        let params = std::iter::once(("q", query)).chain(LOCALE_PARAMS.iter().copied());

        let url = Url::parse_with_params(SEARCH_ENDPOINT, params)
            .map_err(|e| NewsError::InvalidUrl(e.to_string()))?;

        Ok(url.into())
    }

    fn parse_items(bytes: &[u8]) -> NewsResult<Vec<Article>> {
        let channel = Channel::read_from(bytes).map_err(|e| NewsError::FeedParse(e.to_string()))?;

        let articles: Vec<Article> = channel
            .items()
            .iter()
            .map(|item| {
                // Keep the raw pubDate string; splitting into date and time
                // happens at formatting time so a bad timestamp never fails
                // the fetch.
                Article::new()
                    .with_title(item.title().map(String::from))
                    .with_link(item.link().map(String::from))
                    .with_source(item.source().and_then(|s| s.title()).map(String::from))
                    .with_published(item.pub_date().map(String::from))
            })
            .collect();

        Ok(articles)
    }
}

impl Default for GoogleNewsSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedSource for GoogleNewsSource {
    fn fetch(&self, url: &str) -> NewsResult<Vec<Article>> {
        let response = self.client.get(url).send()?;
        let bytes = response.bytes()?;

        Self::parse_items(&bytes)
    }
}
