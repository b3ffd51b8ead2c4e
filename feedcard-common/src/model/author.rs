use crate::model::ModelValidationError;
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{Error, Unexpected},
};
use thiserror::Error;

#[derive(Clone, Eq, PartialEq, Debug, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: AuthorName,
    pub avatar_url: AvatarUrl,
    #[serde(default)]
    pub role: String,
}

impl Author {
    pub fn new(
        name: String,
        avatar_url: String,
        role: String,
    ) -> Result<Self, ModelValidationError> {
        Ok(Self {
            name: AuthorName::new(name),
            avatar_url: AvatarUrl::new(avatar_url)?,
            role,
        })
    }
}

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct AuthorName(String);

impl AuthorName {
    #[must_use]
    pub fn new(name: String) -> Self {
        AuthorName(name)
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

/// Reference to an avatar image. Any URI reference is accepted, absolute or
/// relative; whitespace and control characters cannot occur in one.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Serialize)]
#[serde(transparent)]
pub struct AvatarUrl(String);

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Error)]
#[error("The avatar url is invalid: {0:?}")]
pub struct InvalidAvatarUrlError(String);

impl AvatarUrl {
    pub fn new(url: String) -> Result<Self, InvalidAvatarUrlError> {
        if url
            .chars()
            .any(|ch| ch.is_whitespace() || ch.is_control())
        {
            Err(InvalidAvatarUrlError(url))
        } else {
            Ok(AvatarUrl(url))
        }
    }

    #[must_use]
    pub fn get(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for AvatarUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let inner = String::deserialize(deserializer)?;
        AvatarUrl::new(inner)
            .map_err(|err| Error::invalid_value(Unexpected::Str(&err.0), &"AvatarUrl"))
    }
}
