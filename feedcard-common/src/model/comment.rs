use crate::id::Id;
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{Error, Unexpected},
};
use thiserror::Error;
use time::OffsetDateTime;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct CommentMarker;

pub type CommentId = Id<CommentMarker>;

#[derive(Clone, Eq, PartialEq, Debug, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub content: CommentText,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Text of a submitted comment.
///
/// Holds the text exactly as typed, surrounding whitespace included, but is
/// only constructible when the trimmed text is non-empty.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Serialize)]
#[serde(transparent)]
pub struct CommentText(String);

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Error)]
#[error("Comment text cannot be empty")]
pub struct EmptyCommentTextError(String);

impl EmptyCommentTextError {
    /// The rejected text, handed back unchanged.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl CommentText {
    pub fn new(text: String) -> Result<Self, EmptyCommentTextError> {
        if Self::is_submittable(&text) {
            Ok(CommentText(text))
        } else {
            Err(EmptyCommentTextError(text))
        }
    }

    #[must_use]
    pub fn is_submittable(text: &str) -> bool {
        !text.trim().is_empty()
    }

    #[must_use]
    pub fn get(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for CommentText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let inner = String::deserialize(deserializer)?;
        CommentText::new(inner)
            .map_err(|err| Error::invalid_value(Unexpected::Str(&err.0), &"CommentText"))
    }
}
