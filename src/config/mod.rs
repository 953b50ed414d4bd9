use std::time::Duration;

pub const QUERY: &str = "Panchkula";
pub const MAX_ARTICLES: usize = 30;
pub const OUTPUT_FILE: &str = "panchkula_news.txt";

/// Pause between saved entries, as a courtesy to the remote service.
pub const ENTRY_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct Config {
    pub query: String,
    pub max_articles: usize,
    pub output_file: String,
    pub entry_delay: Duration,
}

impl Config {
    /// The built-in configuration. There are no environment variables or
    /// CLI flags; the query, cap, and output path are compile-time constants.
    pub fn builtin() -> Self {
        Self {
            query: QUERY.to_string(),
            max_articles: MAX_ARTICLES,
            output_file: OUTPUT_FILE.to_string(),
            entry_delay: ENTRY_DELAY,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::builtin()
    }
}
