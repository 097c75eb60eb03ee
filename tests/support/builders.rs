// tests/support/builders.rs
use newsdesk_core::application::commands::articles::ArticleFields;

pub struct ArticleFieldsBuilder {
    title: String,
    description: String,
    content: String,
    image_id: String,
    article_type_id: i64,
    region_id: i64,
}

impl ArticleFieldsBuilder {
    pub fn new() -> Self {
        Self {
            title: "T".into(),
            description: "short description".into(),
            content: "Body of the article".into(),
            image_id: "default".into(),
            article_type_id: 1,
            region_id: 1,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn image(mut self, image_id: impl Into<String>) -> Self {
        self.image_id = image_id.into();
        self
    }

    pub fn article_type(mut self, article_type_id: i64) -> Self {
        self.article_type_id = article_type_id;
        self
    }

    pub fn region(mut self, region_id: i64) -> Self {
        self.region_id = region_id;
        self
    }

    pub fn build(self) -> ArticleFields {
        ArticleFields {
            title: self.title,
            description: self.description,
            content: self.content,
            image_id: self.image_id,
            article_type_id: self.article_type_id,
            region_id: self.region_id,
        }
    }
}

impl Default for ArticleFieldsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
