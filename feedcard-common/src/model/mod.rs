pub mod author;
pub mod comment;
pub mod post;

use crate::model::author::InvalidAvatarUrlError;
use thiserror::Error;

#[derive(Clone, Eq, PartialEq, Debug, Hash, Error)]
pub enum ModelValidationError {
    #[error(transparent)]
    AvatarUrl(#[from] InvalidAvatarUrlError),
}
