use crate::domain::Article;
use crate::errors::NewsResult;

pub trait FeedSource: Send + Sync {
    /// Fetch the feed at the given URL and parse it into article records,
    /// in the order the remote feed returned them.
    fn fetch(&self, url: &str) -> NewsResult<Vec<Article>>;
}
