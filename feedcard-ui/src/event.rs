use feedcard_common::model::comment::CommentId;

/// What a comment card asks its owner to do.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum CommentIntent {
    Delete(CommentId),
}

/// One user interaction with a post card.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub enum PostEvent {
    DraftChanged(String),
    DraftInvalid,
    Submit,
    Like(CommentId),
    Delete(CommentId),
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum EventOutcome {
    DraftUpdated,
    MarkedInvalid,
    Submitted(CommentId),
    Liked { id: CommentId, like_count: u64 },
    Deleted { id: CommentId, removed: bool },
}
