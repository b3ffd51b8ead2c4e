use crate::model::author::Author;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Eq, PartialEq, Debug, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub author: Author,
    #[serde(with = "time::serde::rfc3339")]
    pub published_at: OffsetDateTime,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

/// One block of a post body.
///
/// In props a block is an object with an optional `text` and an optional
/// `link`. A non-empty `text` wins over `link`; a block with neither is kept
/// as [`ContentBlock::Empty`] and renders as nothing.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
#[serde(from = "ContentBlockProps", into = "ContentBlockProps")]
pub enum ContentBlock {
    Text(String),
    Link(String),
    #[default]
    Empty,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
struct ContentBlockProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    link: Option<String>,
}

impl From<ContentBlockProps> for ContentBlock {
    fn from(value: ContentBlockProps) -> Self {
        let non_empty = |field: Option<String>| field.filter(|inner| !inner.is_empty());

        match (non_empty(value.text), non_empty(value.link)) {
            (Some(text), _) => ContentBlock::Text(text),
            (None, Some(link)) => ContentBlock::Link(link),
            (None, None) => ContentBlock::Empty,
        }
    }
}

impl From<ContentBlock> for ContentBlockProps {
    fn from(value: ContentBlock) -> Self {
        match value {
            ContentBlock::Text(text) => Self {
                text: Some(text),
                link: None,
            },
            ContentBlock::Link(link) => Self {
                text: None,
                link: Some(link),
            },
            ContentBlock::Empty => Self::default(),
        }
    }
}
