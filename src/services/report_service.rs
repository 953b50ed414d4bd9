use std::fs::File;

use crate::config::Config;
use crate::errors::NewsResult;
use crate::report::ReportWriter;
use crate::sources::FeedSource;

/// Result of a report run: either the feed was empty and no file was
/// created, or the report was written with the given number of entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutcome {
    EmptyFeed,
    Saved(usize),
}

pub struct ReportService<S: FeedSource> {
    source: S,
    config: Config,
}

impl<S: FeedSource> ReportService<S> {
    pub fn new(source: S, config: Config) -> Self {
        Self { source, config }
    }

    /// Fetch the feed at `url` and write the report to the configured
    /// output file. The file is created only once the feed is known to be
    /// non-empty, so an empty feed leaves nothing behind.
    pub fn generate(&self, url: &str) -> NewsResult<ReportOutcome> {
        let articles = self.source.fetch(url)?;
        println!("[+] RSS items found: {}", articles.len());

        if articles.is_empty() {
            println!("[-] No items found. Exiting.");
            return Ok(ReportOutcome::EmptyFeed);
        }

        let mut file = File::create(&self.config.output_file)?;

        let writer = ReportWriter::new(self.config.max_articles, self.config.entry_delay);
        let saved = writer.write(&self.config.query, &articles, &mut file)?;

        Ok(ReportOutcome::Saved(saved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;
    use std::time::Duration;

    use crate::domain::Article;

    struct StubSource {
        articles: Vec<Article>,
    }

    impl FeedSource for StubSource {
        fn fetch(&self, _url: &str) -> NewsResult<Vec<Article>> {
            Ok(self.articles.clone())
        }
    }

    fn config_for(dir: &tempfile::TempDir, max_articles: usize) -> Config {
        Config {
            query: "Panchkula".to_string(),
            max_articles,
            output_file: dir
                .path()
                .join("report.txt")
                .to_string_lossy()
                .into_owned(),
            entry_delay: Duration::ZERO,
        }
    }

    fn titled(title: &str) -> Article {
        Article::new().with_title(Some(title.to_string()))
    }

    #[test]
    fn test_empty_feed_creates_no_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = config_for(&dir, 30);
        let path = PathBuf::from(&config.output_file);

        let service = ReportService::new(
            StubSource {
                articles: Vec::new(),
            },
            config,
        );
        let outcome = service.generate("http://example.com/feed").unwrap();

        assert_eq!(outcome, ReportOutcome::EmptyFeed);
        assert!(
            !path.exists(),
            "empty feed should not create an output file"
        );
    }

    #[test]
    fn test_non_empty_feed_writes_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = config_for(&dir, 30);
        let path = PathBuf::from(&config.output_file);

        let service = ReportService::new(
            StubSource {
                articles: vec![titled("A"), titled("B")],
            },
            config,
        );
        let outcome = service.generate("http://example.com/feed").unwrap();

        assert_eq!(outcome, ReportOutcome::Saved(2));

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("News for location: Panchkula\n"));
        assert_eq!(text.matches("Title   : ").count(), 2);
    }

    #[test]
    fn test_cap_applies_through_service() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = config_for(&dir, 2);
        let path = PathBuf::from(&config.output_file);

        let service = ReportService::new(
            StubSource {
                articles: vec![titled("A"), titled("B"), titled("C")],
            },
            config,
        );
        let outcome = service.generate("http://example.com/feed").unwrap();

        assert_eq!(outcome, ReportOutcome::Saved(2));

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.matches("Title   : ").count(), 2);
        assert!(!text.contains("Title   : C"));
    }
}
