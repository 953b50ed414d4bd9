/// One entry from a news feed. All fields are kept as the feed delivered
/// them; defaults for missing values are applied at formatting time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    pub title: Option<String>,
    pub link: Option<String>,
    pub source: Option<String>,
    pub published: Option<String>,
}

impl Article {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn with_link(mut self, link: Option<String>) -> Self {
        self.link = link;
        self
    }

    pub fn with_source(mut self, source: Option<String>) -> Self {
        self.source = source;
        self
    }

    pub fn with_published(mut self, published: Option<String>) -> Self {
        self.published = published;
        self
    }
}
