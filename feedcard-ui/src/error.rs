use feedcard_common::model::comment::CommentId;
use thiserror::Error;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Error)]
pub enum SubmitError {
    #[error("The comment draft is empty")]
    EmptyDraft,
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Submit(#[from] SubmitError),
    #[error("Comment with id {0} was not found.")]
    CommentByIdNotFound(CommentId),
}
